// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// FootprintKernel: Rust/WASM footprint orchestrator
//

// ============================================================================
// FootprintKernel
// ============================================================================
// Single entry point for the estimation pipeline. The front-end calls this
// module with the wizard's JSON; it never calls the category engines itself.
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::error::EstimateError;
use crate::science::{
    factors::EmissionFactors,
    home::HomeEngine,
    impact::{HistoryPoint, ImpactEngine},
    insights::{Category, Insights},
    lifestyle::LifestyleEngine,
    profiles::{FootprintInput, TransportMode},
    rating::{aggregate_with, EmissionReport},
    travel::TravelEngine,
};

/// Share of the total above which a single category is flagged
const DOMINANT_SHARE_PCT: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, message: String, severity: Severity) -> Self {
        Self {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FootprintResponse {
    pub result: EmissionReport,
    pub events: Vec<ValidationEvent>,
    pub insights: Insights,
    pub compute_time_ms: f32,
}

#[wasm_bindgen]
pub struct FootprintKernel;

#[wasm_bindgen]
impl FootprintKernel {
    /// Main entry point: questionnaire JSON in, report JSON out.
    ///
    /// # Arguments
    /// * `input_json` - `{"travel": {...}, "home": {...}, "lifestyle": {...}}`
    ///
    /// # Returns
    /// `{"result": report, "events": [...], "insights": {...}, "compute_time_ms": n}`
    ///
    /// # Errors
    /// Returns `{"error": "..."}` when the input cannot be parsed or violates a
    /// precondition (unknown option, negative quantity, car without vehicle).
    #[wasm_bindgen]
    pub fn compute_json(input_json: &str) -> String {
        Self::respond(input_json, &EmissionFactors::default())
    }

    /// Same as [`compute_json`](Self::compute_json) against a caller-supplied factor table
    #[wasm_bindgen]
    pub fn compute_json_with_factors(input_json: &str, factors_json: &str) -> String {
        match EmissionFactors::from_json(factors_json) {
            Ok(factors) => Self::respond(input_json, &factors),
            Err(e) => error_json(format!("Invalid factor table: {}", e)),
        }
    }

    /// Object-in, object-out variant for JS callers holding plain objects
    #[wasm_bindgen]
    pub fn compute_value(input: JsValue) -> Result<JsValue, JsValue> {
        let input: FootprintInput = serde_wasm_bindgen::from_value(input)?;
        let response = Self::analyze(&input, &EmissionFactors::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }

    /// Impact indices for a saved history (`[{"t": "...", "kg": n}, ...]`, oldest first)
    #[wasm_bindgen]
    pub fn summarize_impact_json(history_json: &str) -> String {
        let history: Vec<HistoryPoint> = match serde_json::from_str(history_json) {
            Ok(h) => h,
            Err(e) => return error_json(format!("Invalid history: {}", e)),
        };
        let summary = ImpactEngine::summarize(&history, &EmissionFactors::default());
        serde_json::to_string(&summary).unwrap_or_default()
    }
}

/// Pure Rust implementation (non-wasm-bindgen)
impl FootprintKernel {
    /// Run the three estimators and aggregate.
    ///
    /// Fails on the first precondition violation; never returns a partial report.
    pub fn compute(input: &FootprintInput, factors: &EmissionFactors) -> Result<EmissionReport, EstimateError> {
        let travel = TravelEngine::estimate(&input.travel, factors)?;
        let home = HomeEngine::estimate(&input.home, factors)?;
        let lifestyle = LifestyleEngine::estimate(&input.lifestyle, factors)?;

        let report = aggregate_with(travel, home, lifestyle, factors);
        debug!(
            "Footprint computed: travel={} home={} lifestyle={} total={} rating={}",
            travel,
            home,
            lifestyle,
            report.total_monthly_kg,
            report.comparison.rating.as_str()
        );
        Ok(report)
    }

    /// Report plus events and insights, timed
    pub fn analyze(input: &FootprintInput, factors: &EmissionFactors) -> Result<FootprintResponse, EstimateError> {
        let start = instant::Instant::now();
        let result = Self::compute(input, factors)?;
        Ok(Self::describe(input, result, start))
    }

    /// Events and insights for an already computed report, which may carry a
    /// remote total; everything shown is derived from `report` itself
    pub fn describe(input: &FootprintInput, report: EmissionReport, start: instant::Instant) -> FootprintResponse {
        let events = Self::events(input, &report);
        let insights = Insights::from_report(&report);

        FootprintResponse {
            result: report,
            events,
            insights,
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        }
    }

    /// Advisory events for the dashboard; never affect the figures
    pub fn events(input: &FootprintInput, report: &EmissionReport) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        let rating = report.comparison.rating;
        if rating.is_above_average() {
            events.push(ValidationEvent::new(
                "FOOTPRINT.RATING",
                format!(
                    "{}: {:.0} kg CO2/year is {:.1}% above the global average",
                    rating.label(),
                    report.annual_total_kg,
                    report.comparison.percent_deviation
                ),
                Severity::Warning,
            ));
        }

        let dominant = report.breakdown.dominant();
        let share = report.breakdown.share(dominant);
        if share > DOMINANT_SHARE_PCT {
            events.push(ValidationEvent::new(
                "FOOTPRINT.BREAKDOWN",
                format!("{} accounts for {:.0}% of the monthly total", dominant.label(), share),
                Severity::Info,
            ));
        }

        if input.travel.transport == TransportMode::Car && input.travel.monthly_distance_km == 0.0 {
            events.push(ValidationEvent::new(
                "FOOTPRINT.TRAVEL",
                format!(
                    "{} selected with 0 km per month; only flights are counted",
                    Category::Travel.label()
                ),
                Severity::Info,
            ));
        }

        events
    }

    fn respond(input_json: &str, factors: &EmissionFactors) -> String {
        // 1. Hydrate input (all marshalling in Rust)
        let input = match FootprintInput::from_json(input_json) {
            Ok(i) => i,
            Err(e) => return error_json(format!("Invalid input: {}", e)),
        };

        // 2. Compute + events
        match Self::analyze(&input, factors) {
            Ok(response) => serde_json::to_string(&response).unwrap_or_default(),
            Err(e) => error_json(e.to_string()),
        }
    }
}

/// Report for the default factor table
pub fn calculate_total(input: &FootprintInput) -> Result<EmissionReport, EstimateError> {
    FootprintKernel::compute(input, &EmissionFactors::default())
}

fn error_json(message: String) -> String {
    serde_json::to_string(&serde_json::json!({ "error": message })).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::rating::Rating;
    use serde_json::json;

    fn scenario() -> FootprintInput {
        serde_json::from_value(json!({
            "travel": {
                "transport": "car", "vehicleType": "petrol",
                "monthlyKm": 500, "flightFrequency": "never"
            },
            "home": {
                "heatingSource": "gas", "electricityUsage": "medium",
                "wasteRecycling": false, "wasteBagSize": "medium", "wasteBagsPerWeek": 2
            },
            "lifestyle": {
                "diet": "balanced", "showerFrequency": "daily",
                "newClothesMonthly": 2, "screenTimeDaily": 6
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_compute_full_scenario() {
        let report = calculate_total(&scenario()).unwrap();
        assert_eq!(report.breakdown.travel, 96.0);
        assert_eq!(report.breakdown.home, 516.5);
        assert_eq!(report.breakdown.lifestyle, 395.33);
        assert_eq!(report.total_monthly_kg, 1007.83);
        assert_eq!(report.comparison.rating, Rating::VeryHigh);
    }

    #[test]
    fn test_events_for_high_footprint() {
        let input = scenario();
        let report = calculate_total(&input).unwrap();
        let events = FootprintKernel::events(&input, &report);

        let topics: Vec<&str> = events.iter().map(|e| e.topic.as_str()).collect();
        assert_eq!(topics, vec!["FOOTPRINT.RATING", "FOOTPRINT.BREAKDOWN"]);
        assert_eq!(events[0].severity, Severity::Warning);
        assert!(events[0].message.contains("202.3%"));
        // 516.5 / 1007.83
        assert!(events[1].message.starts_with("Home accounts for 51%"));
    }

    #[test]
    fn test_parked_car_event() {
        let mut input = scenario();
        input.travel.monthly_distance_km = 0.0;
        let report = calculate_total(&input).unwrap();
        let events = FootprintKernel::events(&input, &report);
        assert!(events.iter().any(|e| e.topic == "FOOTPRINT.TRAVEL"));
    }

    #[test]
    fn test_first_violation_wins() {
        let mut input = scenario();
        input.travel.vehicle_type = None;
        input.home.waste_bags_per_week = -2.0;
        assert_eq!(calculate_total(&input), Err(EstimateError::MissingVehicleType));
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), "WARNING");
        assert_eq!(serde_json::to_value(Severity::Info).unwrap(), "INFO");
    }

    #[test]
    fn test_custom_factor_table_json() {
        let input = serde_json::to_string(&scenario()).unwrap();
        let factors = json!({ "electricity": { "low": 100, "medium": 200, "high": 400 } });
        let out = FootprintKernel::compute_json_with_factors(&input, &factors.to_string());
        let response: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(response["result"]["breakdown"]["home"], 416.5);

        let bad = json!({ "waste": { "weeksPerMonth": -1 } });
        let out = FootprintKernel::compute_json_with_factors(&input, &bad.to_string());
        let response: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(response["error"].as_str().unwrap().contains("waste.weeksPerMonth"));
    }

    #[test]
    fn test_impact_json_bridge() {
        let out = FootprintKernel::summarize_impact_json(r#"[{"t": null, "kg": 500.0}]"#);
        let summary: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(summary["indices"]["aqi"], 105);

        let out = FootprintKernel::summarize_impact_json("{not json");
        assert!(out.contains("\"error\""));
    }
}
