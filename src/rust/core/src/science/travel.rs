// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::factors::EmissionFactors;
use super::profiles::{TransportMode, TravelProfile};
use crate::error::EstimateError;
use crate::formulas::{monthly_from_annual, round_to};

pub struct TravelEngine;

impl TravelEngine {
    /// Monthly kg CO₂ from ground transport plus amortised flights.
    ///
    /// Distance only counts for car and public transport; cycling and walking
    /// contribute nothing. A car without a vehicle type is rejected.
    pub fn estimate(profile: &TravelProfile, factors: &EmissionFactors) -> Result<f64, EstimateError> {
        let km = EstimateError::check_quantity("monthlyKm", profile.monthly_distance_km)?;

        let ground = match profile.transport {
            TransportMode::Car => {
                let vehicle = profile.vehicle_type.ok_or(EstimateError::MissingVehicleType)?;
                km * factors.transport.car.per_km(vehicle)
            }
            TransportMode::Public => km * factors.transport.public,
            TransportMode::Bike | TransportMode::Walk => 0.0,
        };

        let flights = monthly_from_annual(factors.flights.per_year(profile.flight_frequency));

        Ok(round_to(ground + flights, 2))
    }
}

/// Travel estimate against the default factor table
pub fn estimate_travel(profile: &TravelProfile) -> Result<f64, EstimateError> {
    TravelEngine::estimate(profile, &EmissionFactors::default())
}
