// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Unit conversions and rounding shared by the footprint engines
//!
//! Pure scalar functions. Every estimator reports kg CO₂ per month; these
//! helpers move between the annual, weekly and daily figures the emission
//! factors are quoted in and round results the way the dashboard displays them.

use wasm_bindgen::prelude::*;

/// Months per year. Annual figures are always `monthly * MONTHS_PER_YEAR`.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Precision ceiling for [`round_to`]; an f64 carries about 15 significant digits
const MAX_PLACES: u32 = 15;

// ============================================================================
// ROUNDING
// ============================================================================

/// Round to a fixed number of decimal places, halves away from zero.
///
/// Non-finite input is returned unchanged. `places` above 15 is treated as 15,
/// and a product that overflows leaves the value unrounded.
///
/// # Arguments
/// * `value` - Quantity to round
/// * `places` - Decimal places (2 for kg figures, 1 for percentages)
#[wasm_bindgen]
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places.min(MAX_PLACES) as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

// ============================================================================
// PERIOD CONVERSIONS
// ============================================================================

/// Annual factor → monthly contribution
///
/// Flights and diet are quoted per year.
#[wasm_bindgen]
pub fn monthly_from_annual(annual: f64) -> f64 {
    annual / MONTHS_PER_YEAR
}

/// Monthly figure → annual projection (no rounding)
#[wasm_bindgen]
pub fn annual_from_monthly(monthly: f64) -> f64 {
    monthly * MONTHS_PER_YEAR
}

/// Weekly activity → monthly quantity
///
/// m = count * weeks_per_month (4.33 in the default table)
#[wasm_bindgen]
pub fn monthly_from_weekly(per_week: f64, weeks_per_month: f64) -> f64 {
    per_week * weeks_per_month
}

// ============================================================================
// COMPARISON MODELS
// ============================================================================

/// Percentage deviation from a baseline
///
/// Δ% = (value - baseline) / baseline * 100
///
/// A zero baseline has no meaningful deviation and yields 0.
#[wasm_bindgen]
pub fn percent_deviation(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    ((value - baseline) / baseline) * 100.0
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// ============================================================================
// TESTS
// ============================================================================
