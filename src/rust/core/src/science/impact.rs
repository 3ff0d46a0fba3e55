// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Impact indices from a prediction history
//!
//! Turns the series of saved monthly footprints into the dashboard's
//! environmental indicators. The latest value is smoothed against the mean of
//! up to three earlier points, compared with the monthly share of the global
//! baseline, and squashed through tanh so that the indices move visibly near
//! the baseline without saturating:
//!
//! ```text
//! m = 0.6 * latest + 0.4 * prev_avg
//! s = tanh((m / baseline - 1) / 0.6)
//! ```

use serde::{Deserialize, Serialize};

use super::factors::EmissionFactors;
use crate::formulas::{mean, monthly_from_annual, round_to};

/// Earlier points blended into the latest value
const SMOOTHING_WINDOW: usize = 3;
const LATEST_WEIGHT: f64 = 0.6;
const HISTORY_WEIGHT: f64 = 0.4;
/// Ratio spread that maps to s ≈ ±0.76
const RESPONSE_SCALE: f64 = 0.6;
/// Moves smaller than this (percent) read as stable
const STABLE_BAND_PCT: f64 = 1.0;

/// One saved footprint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// ISO-8601 timestamp, when known
    pub t: Option<String>,
    /// Monthly kg CO₂
    pub kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestImpact {
    pub kg: f64,
    pub annual_tons: f64,
    pub ts: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactIndices {
    /// 0-200, 50 at the baseline
    pub aqi: u32,
    /// ±10 %, negative under higher pressure
    pub forest_cover_change_pct: f64,
    /// ±1 °C equivalent
    pub temperature_anomaly_c: f64,
    /// 0-100
    pub water_stress_pct: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub delta_pct: f64,
    pub direction: TrendDirection,
    pub prev_avg_kg: f64,
}

/// Dashboard impact view (`GET /api/carbon/impact`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub latest: Option<LatestImpact>,
    pub indices: Option<ImpactIndices>,
    pub trend: Option<Trend>,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    #[serde(default = "default_baseline_monthly_kg")]
    pub baseline_monthly_kg: f64,
}

fn default_baseline_monthly_kg() -> f64 {
    round_to(
        monthly_from_annual(EmissionFactors::default().baseline.global_average_annual_kg),
        2,
    )
}

pub struct ImpactEngine;

impl ImpactEngine {
    /// Summarise a history ordered oldest → newest
    pub fn summarize(history: &[HistoryPoint], factors: &EmissionFactors) -> ImpactSummary {
        let baseline = monthly_from_annual(factors.baseline.global_average_annual_kg);

        let Some((latest, previous)) = history.split_last() else {
            return ImpactSummary {
                latest: None,
                indices: None,
                trend: None,
                history: Vec::new(),
                baseline_monthly_kg: round_to(baseline, 2),
            };
        };

        let latest_kg = if latest.kg.is_finite() { latest.kg } else { baseline };

        let window_start = previous.len().saturating_sub(SMOOTHING_WINDOW);
        let window: Vec<f64> = previous[window_start..].iter().map(|p| p.kg).collect();
        let prev_avg = mean(&window);

        let monthly = match prev_avg {
            Some(avg) if avg != 0.0 => LATEST_WEIGHT * latest_kg + HISTORY_WEIGHT * avg,
            _ => latest_kg,
        };

        let ratio = if baseline > 0.0 { monthly / baseline } else { 1.0 };
        let s = ((ratio - 1.0) / RESPONSE_SCALE).tanh();

        let indices = ImpactIndices {
            aqi: (50.0 + 80.0 * s).clamp(0.0, 200.0).round() as u32,
            forest_cover_change_pct: round_to((-6.0 * s).clamp(-10.0, 10.0), 1),
            temperature_anomaly_c: round_to((0.5 * s).clamp(-1.0, 1.0), 2),
            water_stress_pct: (50.0 + 25.0 * s).clamp(0.0, 100.0).round() as u32,
        };

        let trend = prev_avg.filter(|avg| *avg > 0.0).map(|avg| {
            let delta = (monthly - avg) / avg * 100.0;
            let direction = if delta > STABLE_BAND_PCT {
                TrendDirection::Up
            } else if delta < -STABLE_BAND_PCT {
                TrendDirection::Down
            } else {
                TrendDirection::Stable
            };
            Trend {
                delta_pct: round_to(delta, 1),
                direction,
                prev_avg_kg: round_to(avg, 2),
            }
        });

        ImpactSummary {
            latest: Some(LatestImpact {
                kg: round_to(monthly, 2),
                annual_tons: round_to(monthly * 12.0 / 1000.0, 3),
                ts: latest.t.clone(),
            }),
            indices: Some(indices),
            trend,
            history: history.to_vec(),
            baseline_monthly_kg: round_to(baseline, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<HistoryPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, kg)| HistoryPoint {
                t: Some(format!("2026-0{}-01T00:00:00", i + 1)),
                kg: *kg,
            })
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let summary = ImpactEngine::summarize(&[], &EmissionFactors::default());
        assert!(summary.latest.is_none());
        assert!(summary.indices.is_none());
        assert!(summary.trend.is_none());
        assert_eq!(summary.baseline_monthly_kg, 333.33);
    }

    #[test]
    fn test_single_point_has_no_trend() {
        let summary = ImpactEngine::summarize(&series(&[500.0]), &EmissionFactors::default());
        let latest = summary.latest.unwrap();
        assert_eq!(latest.kg, 500.0);
        assert_eq!(latest.annual_tons, 6.0);
        assert_eq!(latest.ts.as_deref(), Some("2026-01-01T00:00:00"));

        let idx = summary.indices.unwrap();
        assert_eq!(idx.aqi, 105);
        assert_eq!(idx.forest_cover_change_pct, -4.1);
        assert_eq!(idx.temperature_anomaly_c, 0.34);
        assert_eq!(idx.water_stress_pct, 67);
        assert!(summary.trend.is_none());
    }

    #[test]
    fn test_rising_footprint_is_smoothed() {
        let summary =
            ImpactEngine::summarize(&series(&[300.0, 300.0, 300.0, 400.0]), &EmissionFactors::default());

        // 0.6 * 400 + 0.4 * 300
        assert_eq!(summary.latest.as_ref().unwrap().kg, 360.0);
        assert_eq!(summary.latest.as_ref().unwrap().annual_tons, 4.32);

        let idx = summary.indices.unwrap();
        assert_eq!(idx.aqi, 61);
        assert_eq!(idx.forest_cover_change_pct, -0.8);
        assert_eq!(idx.temperature_anomaly_c, 0.07);
        assert_eq!(idx.water_stress_pct, 53);

        let trend = summary.trend.unwrap();
        assert_eq!(trend.delta_pct, 20.0);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.prev_avg_kg, 300.0);
        assert_eq!(summary.history.len(), 4);
    }

    #[test]
    fn test_window_uses_last_three_previous_points() {
        let summary = ImpactEngine::summarize(
            &series(&[200.0, 250.0, 1000.0, 300.0, 300.0, 300.0]),
            &EmissionFactors::default(),
        );
        let trend = summary.trend.unwrap();
        assert_eq!(trend.prev_avg_kg, 533.33);
        assert_eq!(trend.delta_pct, -26.2);
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(summary.latest.unwrap().kg, 393.33);
    }

    #[test]
    fn test_at_baseline_is_neutral() {
        let baseline = 4000.0 / 12.0;
        let summary = ImpactEngine::summarize(&series(&[baseline]), &EmissionFactors::default());
        let idx = summary.indices.unwrap();
        assert_eq!(idx.aqi, 50);
        assert_eq!(idx.forest_cover_change_pct, 0.0);
        assert_eq!(idx.water_stress_pct, 50);
    }

    #[test]
    fn test_non_finite_latest_falls_back_to_baseline() {
        let summary = ImpactEngine::summarize(&series(&[f64::NAN]), &EmissionFactors::default());
        assert_eq!(summary.latest.unwrap().kg, 333.33);
    }

    #[test]
    fn test_summary_wire_shape() {
        let summary =
            ImpactEngine::summarize(&series(&[300.0, 400.0]), &EmissionFactors::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["latest"]["annualTons"].is_number());
        assert!(json["indices"]["forestCoverChangePct"].is_number());
        assert_eq!(json["trend"]["direction"], "up");
        assert_eq!(json["baselineMonthlyKg"], 333.33);
        assert_eq!(json["history"][1]["kg"], 400.0);
    }

    #[test]
    fn test_backend_empty_payload_deserializes() {
        let summary: ImpactSummary = serde_json::from_str(
            r#"{"history": [], "latest": null, "indices": null, "trend": null}"#,
        )
        .unwrap();
        assert!(summary.latest.is_none());
        assert_eq!(summary.baseline_monthly_kg, 333.33);
    }
}
