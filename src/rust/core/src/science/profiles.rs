// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Questionnaire inputs
//!
//! Three immutable records filled in by the travel/home/lifestyle wizard.
//! Field names on the wire match what the web client already sends to the
//! backend (`monthlyKm`, `wasteRecycling`, ...), so the same JSON feeds both
//! the local engine and `POST /api/carbon/predict`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::EstimateError;

fn parse_variant<T: Copy>(
    all: &[T],
    name: fn(T) -> &'static str,
    field: &'static str,
    s: &str,
) -> Result<T, EstimateError> {
    all.iter()
        .copied()
        .find(|v| name(*v) == s)
        .ok_or_else(|| EstimateError::UnknownVariant {
            field,
            value: s.to_string(),
        })
}

// ============================================================================
// TRAVEL
// ============================================================================

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Car,
    Public,
    Bike,
    Walk,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [Self::Car, Self::Public, Self::Bike, Self::Walk];

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Public => "public",
            TransportMode::Bike => "bike",
            TransportMode::Walk => "walk",
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [Self::Petrol, Self::Diesel, Self::Electric, Self::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Petrol => "petrol",
            VehicleType::Diesel => "diesel",
            VehicleType::Electric => "electric",
            VehicleType::Hybrid => "hybrid",
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightFrequency {
    Never,
    Rarely,
    Sometimes,
    Frequently,
}

impl FlightFrequency {
    pub const ALL: [FlightFrequency; 4] =
        [Self::Never, Self::Rarely, Self::Sometimes, Self::Frequently];

    pub fn as_str(self) -> &'static str {
        match self {
            FlightFrequency::Never => "never",
            FlightFrequency::Rarely => "rarely",
            FlightFrequency::Sometimes => "sometimes",
            FlightFrequency::Frequently => "frequently",
        }
    }
}

/// How the user gets around each month
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelProfile {
    pub transport: TransportMode,
    /// Only meaningful for `TransportMode::Car`, where it is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(rename = "monthlyKm", alias = "monthlyDistanceKm", default)]
    pub monthly_distance_km: f64,
    pub flight_frequency: FlightFrequency,
}

// ============================================================================
// HOME
// ============================================================================

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingSource {
    Gas,
    Electric,
    Oil,
    Renewable,
}

impl HeatingSource {
    pub const ALL: [HeatingSource; 4] = [Self::Gas, Self::Electric, Self::Oil, Self::Renewable];

    pub fn as_str(self) -> &'static str {
        match self {
            HeatingSource::Gas => "gas",
            HeatingSource::Electric => "electric",
            HeatingSource::Oil => "oil",
            HeatingSource::Renewable => "renewable",
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElectricityUsage {
    Low,
    Medium,
    High,
}

impl ElectricityUsage {
    pub const ALL: [ElectricityUsage; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            ElectricityUsage::Low => "low",
            ElectricityUsage::Medium => "medium",
            ElectricityUsage::High => "high",
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WasteBagSize {
    Small,
    Medium,
    Large,
}

impl WasteBagSize {
    pub const ALL: [WasteBagSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            WasteBagSize::Small => "small",
            WasteBagSize::Medium => "medium",
            WasteBagSize::Large => "large",
        }
    }
}

/// Household energy and waste
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProfile {
    /// Recorded but not scored; see `HomeEngine`
    pub heating_source: HeatingSource,
    pub electricity_usage: ElectricityUsage,
    #[serde(rename = "wasteRecycling", alias = "recycles", default)]
    pub recycles: bool,
    pub waste_bag_size: WasteBagSize,
    #[serde(default)]
    pub waste_bags_per_week: f64,
}

// ============================================================================
// LIFESTYLE
// ============================================================================

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    MeatHeavy,
    Balanced,
    Vegetarian,
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Self::MeatHeavy, Self::Balanced, Self::Vegetarian, Self::Vegan];

    pub fn as_str(self) -> &'static str {
        match self {
            Diet::MeatHeavy => "meat-heavy",
            Diet::Balanced => "balanced",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowerFrequency {
    TwiceDaily,
    Daily,
    EveryOther,
}

impl ShowerFrequency {
    pub const ALL: [ShowerFrequency; 3] = [Self::TwiceDaily, Self::Daily, Self::EveryOther];

    pub fn as_str(self) -> &'static str {
        match self {
            ShowerFrequency::TwiceDaily => "twice-daily",
            ShowerFrequency::Daily => "daily",
            ShowerFrequency::EveryOther => "every-other",
        }
    }
}

/// Diet, water, clothing and screen habits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProfile {
    pub diet: Diet,
    pub shower_frequency: ShowerFrequency,
    #[serde(rename = "newClothesMonthly", alias = "newClothesPerMonth", default)]
    pub new_clothes_per_month: f64,
    #[serde(rename = "screenTimeDaily", alias = "screenTimeHoursPerDay", default)]
    pub screen_time_hours_per_day: f64,
}

// ============================================================================
// COMBINED INPUT
// ============================================================================

/// One completed questionnaire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    pub travel: TravelProfile,
    pub home: HomeProfile,
    pub lifestyle: LifestyleProfile,
}

impl FootprintInput {
    /// Hydrate from the wizard's JSON (`{"travel": {...}, "home": {...}, "lifestyle": {...}}`)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Flattened body for `POST /api/carbon/predict`
    pub fn prediction_request(&self) -> PredictionRequest<'_> {
        PredictionRequest {
            travel: &self.travel,
            home: &self.home,
            lifestyle: &self.lifestyle,
        }
    }
}

/// All profile fields at one level, as the prediction model expects them
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PredictionRequest<'a> {
    #[serde(flatten)]
    pub travel: &'a TravelProfile,
    #[serde(flatten)]
    pub home: &'a HomeProfile,
    #[serde(flatten)]
    pub lifestyle: &'a LifestyleProfile,
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

macro_rules! impl_wire_str {
    ($ty:ident, $field:literal) => {
        impl FromStr for $ty {
            type Err = EstimateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_variant(&$ty::ALL, $ty::as_str, $field, s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_wire_str!(TransportMode, "transport");
impl_wire_str!(VehicleType, "vehicleType");
impl_wire_str!(FlightFrequency, "flightFrequency");
impl_wire_str!(HeatingSource, "heatingSource");
impl_wire_str!(ElectricityUsage, "electricityUsage");
impl_wire_str!(WasteBagSize, "wasteBagSize");
impl_wire_str!(Diet, "diet");
impl_wire_str!(ShowerFrequency, "showerFrequency");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for diet in Diet::ALL {
            assert_eq!(diet.as_str().parse::<Diet>(), Ok(diet));
        }
        assert_eq!(
            "twice-daily".parse::<ShowerFrequency>(),
            Ok(ShowerFrequency::TwiceDaily)
        );
        assert_eq!(
            "every-other".parse::<ShowerFrequency>(),
            Ok(ShowerFrequency::EveryOther)
        );
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = "teleport".parse::<TransportMode>().unwrap_err();
        assert_eq!(
            err,
            EstimateError::UnknownVariant {
                field: "transport",
                value: "teleport".to_string()
            }
        );
        assert!("Car".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_deserialize_wizard_payload() {
        let input: FootprintInput = serde_json::from_value(json!({
            "travel": { "transport": "car", "vehicleType": "hybrid", "monthlyKm": 320, "flightFrequency": "rarely" },
            "home": { "heatingSource": "oil", "electricityUsage": "low", "wasteRecycling": true,
                      "wasteBagSize": "small", "wasteBagsPerWeek": 1 },
            "lifestyle": { "diet": "meat-heavy", "showerFrequency": "twice-daily",
                           "newClothesMonthly": 3, "screenTimeDaily": 4.5 }
        }))
        .unwrap();

        assert_eq!(input.travel.vehicle_type, Some(VehicleType::Hybrid));
        assert_eq!(input.travel.monthly_distance_km, 320.0);
        assert!(input.home.recycles);
        assert_eq!(input.lifestyle.diet, Diet::MeatHeavy);
        assert_eq!(input.lifestyle.screen_time_hours_per_day, 4.5);
    }

    #[test]
    fn test_deserialize_accepts_descriptive_aliases() {
        let travel: TravelProfile = serde_json::from_value(json!({
            "transport": "walk", "monthlyDistanceKm": 12, "flightFrequency": "never"
        }))
        .unwrap();
        assert_eq!(travel.monthly_distance_km, 12.0);
        assert_eq!(travel.vehicle_type, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_enum_value() {
        let result: Result<HomeProfile, _> = serde_json::from_value(json!({
            "heatingSource": "coal", "electricityUsage": "low",
            "wasteBagSize": "small", "wasteBagsPerWeek": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_prediction_request_is_flat() {
        let input: FootprintInput = serde_json::from_value(json!({
            "travel": { "transport": "bike", "monthlyKm": 0, "flightFrequency": "never" },
            "home": { "heatingSource": "gas", "electricityUsage": "medium", "wasteRecycling": false,
                      "wasteBagSize": "medium", "wasteBagsPerWeek": 2 },
            "lifestyle": { "diet": "vegan", "showerFrequency": "daily",
                           "newClothesMonthly": 0, "screenTimeDaily": 2 }
        }))
        .unwrap();

        let body = serde_json::to_value(input.prediction_request()).unwrap();
        assert_eq!(body["transport"], "bike");
        assert_eq!(body["wasteRecycling"], false);
        assert_eq!(body["diet"], "vegan");
        assert_eq!(body["screenTimeDaily"], 2.0);
        // Absent vehicle type is omitted, matching the web client
        assert!(body.get("vehicleType").is_none());
        assert!(body.get("travel").is_none());
    }
}
