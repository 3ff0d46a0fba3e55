// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use super::factors::EmissionFactors;
use super::profiles::LifestyleProfile;
use crate::error::EstimateError;
use crate::formulas::{monthly_from_annual, round_to};

/// Hours in a day; daily screen time cannot exceed it
const MAX_SCREEN_HOURS: f64 = 24.0;

pub struct LifestyleEngine;

impl LifestyleEngine {
    /// Monthly kg CO₂ from diet, showers, new clothing and screen time
    pub fn estimate(profile: &LifestyleProfile, factors: &EmissionFactors) -> Result<f64, EstimateError> {
        let clothes = EstimateError::check_quantity("newClothesMonthly", profile.new_clothes_per_month)?;
        let screen = EstimateError::check_range(
            "screenTimeDaily",
            profile.screen_time_hours_per_day,
            0.0,
            MAX_SCREEN_HOURS,
        )?;

        let c = &factors.consumption;
        let mut emissions = monthly_from_annual(factors.diet.per_year(profile.diet));
        emissions += factors.water.per_month(profile.shower_frequency);
        emissions += clothes * c.clothing_per_item;
        emissions += screen * c.days_per_month * c.screen_time_per_hour;

        Ok(round_to(emissions, 2))
    }
}

/// Lifestyle estimate against the default factor table
pub fn estimate_lifestyle(profile: &LifestyleProfile) -> Result<f64, EstimateError> {
    LifestyleEngine::estimate(profile, &EmissionFactors::default())
}
