// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Aggregation and rating
//!
//! Sums the three category estimates into a monthly total, projects it over a
//! year and places it against the global-average baseline.
//!
//! ```text
//! total   = round2(travel + home + lifestyle)
//! annual  = round2(total * 12)
//! Δ%      = round1((annual - 4000) / 4000 * 100)
//! rating  = first threshold with annual < limit
//! ```

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::factors::EmissionFactors;
use crate::formulas::{annual_from_monthly, percent_deviation, round_to};

/// Discrete footprint classification
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Excellent,
    Good,
    Average,
    High,
    VeryHigh,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Average,
        Self::High,
        Self::VeryHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Average => "average",
            Rating::High => "high",
            Rating::VeryHigh => "very-high",
        }
    }

    /// Short badge text
    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent!",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::High => "High",
            Rating::VeryHigh => "Very High",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rating::Excellent => "Well below average",
            Rating::Good => "Below average",
            Rating::Average => "On par with global average",
            Rating::High => "Above average",
            Rating::VeryHigh => "Well above average",
        }
    }

    pub fn is_above_average(self) -> bool {
        matches!(self, Rating::High | Rating::VeryHigh)
    }
}

/// Upper bounds (exclusive) of each bucket, kg CO₂ per year
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub high: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: 2500.0,
            good: 3500.0,
            average: 4500.0,
            high: 6000.0,
        }
    }
}

impl RatingThresholds {
    pub fn is_ascending(&self) -> bool {
        self.excellent < self.good && self.good < self.average && self.average < self.high
    }

    /// Half-open intervals in ascending order, first match wins.
    /// Anything not below the last bound (including NaN) is `VeryHigh`.
    pub fn classify(&self, annual_kg: f64) -> Rating {
        if annual_kg < self.excellent {
            Rating::Excellent
        } else if annual_kg < self.good {
            Rating::Good
        } else if annual_kg < self.average {
            Rating::Average
        } else if annual_kg < self.high {
            Rating::High
        } else {
            Rating::VeryHigh
        }
    }
}

/// Monthly kg per category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub travel: f64,
    pub home: f64,
    pub lifestyle: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Percent above (+) or below (-) the global average
    #[serde(rename = "vsAverage")]
    pub percent_deviation: f64,
    pub rating: Rating,
}

/// Result of one footprint calculation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionReport {
    #[serde(rename = "total")]
    pub total_monthly_kg: f64,
    pub breakdown: Breakdown,
    #[serde(rename = "annualTotal")]
    pub annual_total_kg: f64,
    pub comparison: Comparison,
}

impl EmissionReport {
    /// Replace the monthly total with an externally predicted figure.
    ///
    /// The category breakdown stays as computed locally; annual figure,
    /// deviation and rating are rebuilt from the new total.
    pub fn with_predicted_total(&self, predicted_monthly_kg: f64, factors: &EmissionFactors) -> Self {
        let (total, annual, comparison) = project(predicted_monthly_kg, factors);
        EmissionReport {
            total_monthly_kg: total,
            breakdown: self.breakdown.clone(),
            annual_total_kg: annual,
            comparison,
        }
    }
}

fn project(monthly_kg: f64, factors: &EmissionFactors) -> (f64, f64, Comparison) {
    let total = round_to(monthly_kg, 2);
    let annual = round_to(annual_from_monthly(total), 2);
    let deviation = round_to(
        percent_deviation(annual, factors.baseline.global_average_annual_kg),
        1,
    );
    let rating = factors.baseline.thresholds.classify(annual);

    (
        total,
        annual,
        Comparison {
            percent_deviation: deviation,
            rating,
        },
    )
}

/// Combine pre-rounded category figures into a report (default baseline)
pub fn aggregate(travel_kg: f64, home_kg: f64, lifestyle_kg: f64) -> EmissionReport {
    aggregate_with(travel_kg, home_kg, lifestyle_kg, &EmissionFactors::default())
}

/// Combine pre-rounded category figures into a report.
///
/// Total: never fails for finite inputs.
pub fn aggregate_with(
    travel_kg: f64,
    home_kg: f64,
    lifestyle_kg: f64,
    factors: &EmissionFactors,
) -> EmissionReport {
    let (total, annual, comparison) = project(travel_kg + home_kg + lifestyle_kg, factors);

    EmissionReport {
        total_monthly_kg: total,
        breakdown: Breakdown {
            travel: travel_kg,
            home: home_kg,
            lifestyle: lifestyle_kg,
        },
        annual_total_kg: annual,
        comparison,
    }
}
