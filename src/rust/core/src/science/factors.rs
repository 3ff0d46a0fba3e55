// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Emission factor table (kg CO₂ per unit)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::profiles::{
    Diet, ElectricityUsage, FlightFrequency, HeatingSource, ShowerFrequency, VehicleType,
    WasteBagSize,
};
use super::rating::RatingThresholds;
use crate::error::FactorError;

/// Per-km car factors by drivetrain
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarFactors {
    pub petrol: f64,
    pub diesel: f64,
    pub electric: f64,
    pub hybrid: f64,
}

impl Default for CarFactors {
    fn default() -> Self {
        Self {
            petrol: 0.192,
            diesel: 0.171,
            electric: 0.047,
            hybrid: 0.109,
        }
    }
}

impl CarFactors {
    pub fn per_km(&self, vehicle: VehicleType) -> f64 {
        match vehicle {
            VehicleType::Petrol => self.petrol,
            VehicleType::Diesel => self.diesel,
            VehicleType::Electric => self.electric,
            VehicleType::Hybrid => self.hybrid,
        }
    }
}

/// Ground transport
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFactors {
    pub car: CarFactors,
    /// Bus/rail, per km
    pub public: f64,
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            car: CarFactors::default(),
            public: 0.089,
        }
    }
}

/// Flights, kg per YEAR
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightFactors {
    pub never: f64,
    pub rarely: f64,
    pub sometimes: f64,
    pub frequently: f64,
}

impl Default for FlightFactors {
    fn default() -> Self {
        Self {
            never: 0.0,
            rarely: 300.0,
            sometimes: 900.0,
            frequently: 2400.0,
        }
    }
}

impl FlightFactors {
    pub fn per_year(&self, frequency: FlightFrequency) -> f64 {
        match frequency {
            FlightFrequency::Never => self.never,
            FlightFrequency::Rarely => self.rarely,
            FlightFrequency::Sometimes => self.sometimes,
            FlightFrequency::Frequently => self.frequently,
        }
    }
}

/// Heating, kg per kWh. Not consumed by the monthly home estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingFactors {
    pub gas: f64,
    pub electric: f64,
    pub oil: f64,
    pub renewable: f64,
}

impl Default for HeatingFactors {
    fn default() -> Self {
        Self {
            gas: 2.35,
            electric: 0.42,
            oil: 2.96,
            renewable: 0.05,
        }
    }
}

impl HeatingFactors {
    pub fn per_kwh(&self, source: HeatingSource) -> f64 {
        match source {
            HeatingSource::Gas => self.gas,
            HeatingSource::Electric => self.electric,
            HeatingSource::Oil => self.oil,
            HeatingSource::Renewable => self.renewable,
        }
    }
}

/// Household electricity, kg per month
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricityFactors {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ElectricityFactors {
    fn default() -> Self {
        Self {
            low: 150.0,
            medium: 300.0,
            high: 500.0,
        }
    }
}

impl ElectricityFactors {
    pub fn per_month(&self, usage: ElectricityUsage) -> f64 {
        match usage {
            ElectricityUsage::Low => self.low,
            ElectricityUsage::Medium => self.medium,
            ElectricityUsage::High => self.high,
        }
    }
}

/// Household waste, kg per bag per week
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteFactors {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub weeks_per_month: f64,
    /// Applied to the waste term only (0.7 = 30% reduction)
    pub recycling_multiplier: f64,
}

impl Default for WasteFactors {
    fn default() -> Self {
        Self {
            small: 15.0,
            medium: 25.0,
            large: 40.0,
            weeks_per_month: 4.33,
            recycling_multiplier: 0.7,
        }
    }
}

impl WasteFactors {
    pub fn per_bag(&self, size: WasteBagSize) -> f64 {
        match size {
            WasteBagSize::Small => self.small,
            WasteBagSize::Medium => self.medium,
            WasteBagSize::Large => self.large,
        }
    }
}

/// Diet, kg per YEAR
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietFactors {
    #[serde(rename = "meat-heavy")]
    pub meat_heavy: f64,
    pub balanced: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl Default for DietFactors {
    fn default() -> Self {
        Self {
            meat_heavy: 3300.0,
            balanced: 2500.0,
            vegetarian: 1700.0,
            vegan: 1500.0,
        }
    }
}

impl DietFactors {
    pub fn per_year(&self, diet: Diet) -> f64 {
        match diet {
            Diet::MeatHeavy => self.meat_heavy,
            Diet::Balanced => self.balanced,
            Diet::Vegetarian => self.vegetarian,
            Diet::Vegan => self.vegan,
        }
    }
}

/// Hot water, kg per month
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WaterFactors {
    pub twice_daily: f64,
    pub daily: f64,
    pub every_other: f64,
}

impl Default for WaterFactors {
    fn default() -> Self {
        Self {
            twice_daily: 50.0,
            daily: 35.0,
            every_other: 20.0,
        }
    }
}

impl WaterFactors {
    pub fn per_month(&self, shower: ShowerFrequency) -> f64 {
        match shower {
            ShowerFrequency::TwiceDaily => self.twice_daily,
            ShowerFrequency::Daily => self.daily,
            ShowerFrequency::EveryOther => self.every_other,
        }
    }
}

/// Consumption habits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsumptionFactors {
    /// kg per new garment
    pub clothing_per_item: f64,
    /// kg per daily screen hour, per day
    pub screen_time_per_hour: f64,
    pub days_per_month: f64,
}

impl Default for ConsumptionFactors {
    fn default() -> Self {
        Self {
            clothing_per_item: 22.0,
            screen_time_per_hour: 0.6,
            days_per_month: 30.0,
        }
    }
}

/// Comparison baseline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaselineFactors {
    /// Global per-capita average, kg per year (~4 t)
    pub global_average_annual_kg: f64,
    pub thresholds: RatingThresholds,
}

impl Default for BaselineFactors {
    fn default() -> Self {
        Self {
            global_average_annual_kg: 4000.0,
            thresholds: RatingThresholds::default(),
        }
    }
}

/// Complete factor table.
///
/// Immutable once built; pass it to the `*_with` estimators, or use the
/// default-table shortcuts. A JSON file may override any subset of entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub transport: TransportFactors,
    pub flights: FlightFactors,
    pub heating: HeatingFactors,
    pub electricity: ElectricityFactors,
    pub waste: WasteFactors,
    pub diet: DietFactors,
    pub water: WaterFactors,
    pub consumption: ConsumptionFactors,
    pub baseline: BaselineFactors,
}

impl EmissionFactors {
    /// Parse and validate a (possibly partial) JSON table
    pub fn from_json(json: &str) -> Result<Self, FactorError> {
        let factors: EmissionFactors = serde_json::from_str(json)?;
        factors.validate()?;
        Ok(factors)
    }

    /// Load a table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FactorError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| FactorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let factors = Self::from_json(&json)?;
        info!("Loaded emission factors from {}", path.display());
        Ok(factors)
    }

    /// Every scalar in the table, by dotted name
    fn entries(&self) -> [(&'static str, f64); 31] {
        [
            ("transport.car.petrol", self.transport.car.petrol),
            ("transport.car.diesel", self.transport.car.diesel),
            ("transport.car.electric", self.transport.car.electric),
            ("transport.car.hybrid", self.transport.car.hybrid),
            ("transport.public", self.transport.public),
            ("flights.never", self.flights.never),
            ("flights.rarely", self.flights.rarely),
            ("flights.sometimes", self.flights.sometimes),
            ("flights.frequently", self.flights.frequently),
            ("heating.gas", self.heating.gas),
            ("heating.electric", self.heating.electric),
            ("heating.oil", self.heating.oil),
            ("heating.renewable", self.heating.renewable),
            ("electricity.low", self.electricity.low),
            ("electricity.medium", self.electricity.medium),
            ("electricity.high", self.electricity.high),
            ("waste.small", self.waste.small),
            ("waste.medium", self.waste.medium),
            ("waste.large", self.waste.large),
            ("waste.weeksPerMonth", self.waste.weeks_per_month),
            ("waste.recyclingMultiplier", self.waste.recycling_multiplier),
            ("diet.meat-heavy", self.diet.meat_heavy),
            ("diet.balanced", self.diet.balanced),
            ("diet.vegetarian", self.diet.vegetarian),
            ("diet.vegan", self.diet.vegan),
            ("water.twice-daily", self.water.twice_daily),
            ("water.daily", self.water.daily),
            ("water.every-other", self.water.every_other),
            ("consumption.clothingPerItem", self.consumption.clothing_per_item),
            ("consumption.screenTimePerHour", self.consumption.screen_time_per_hour),
            ("consumption.daysPerMonth", self.consumption.days_per_month),
        ]
    }

    /// Reject tables that could produce negative or undefined figures
    pub fn validate(&self) -> Result<(), FactorError> {
        for (name, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(FactorError::InvalidFactor { name, value });
            }
        }

        let baseline = self.baseline.global_average_annual_kg;
        if !baseline.is_finite() || baseline <= 0.0 {
            return Err(FactorError::InvalidBaseline(baseline));
        }

        if !self.baseline.thresholds.is_ascending() {
            return Err(FactorError::UnorderedThresholds);
        }
        Ok(())
    }
}
