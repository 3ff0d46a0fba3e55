// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::factors::EmissionFactors;
use super::profiles::HomeProfile;
use crate::error::EstimateError;
use crate::formulas::{monthly_from_weekly, round_to};

pub struct HomeEngine;

impl HomeEngine {
    /// Monthly kg CO₂ from electricity and household waste.
    ///
    /// Heating source is part of the profile but does not enter the figure;
    /// the per-kWh heating factors have no usage quantity to multiply.
    pub fn estimate(profile: &HomeProfile, factors: &EmissionFactors) -> Result<f64, EstimateError> {
        let electricity = factors.electricity.per_month(profile.electricity_usage);
        let waste = Self::waste(profile, factors)?;

        Ok(round_to(electricity + waste, 2))
    }

    /// Unrounded monthly waste term, after any recycling reduction
    pub fn waste(profile: &HomeProfile, factors: &EmissionFactors) -> Result<f64, EstimateError> {
        let bags = EstimateError::check_quantity("wasteBagsPerWeek", profile.waste_bags_per_week)?;

        let monthly_bags = monthly_from_weekly(bags, factors.waste.weeks_per_month);
        let waste = monthly_bags * factors.waste.per_bag(profile.waste_bag_size);

        if profile.recycles {
            Ok(waste * factors.waste.recycling_multiplier)
        } else {
            Ok(waste)
        }
    }
}

/// Home estimate against the default factor table
pub fn estimate_home(profile: &HomeProfile) -> Result<f64, EstimateError> {
    HomeEngine::estimate(profile, &EmissionFactors::default())
}
