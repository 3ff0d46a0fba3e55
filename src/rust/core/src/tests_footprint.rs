// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Footprint Kernel Tests
//!
//! End-to-end questionnaire scenarios through the JSON entry point, the way the
//! front-end calls it.

use crate::footprint_kernel::FootprintKernel;
use serde_json::{json, Value};

fn run(input: &Value) -> Value {
    let out = FootprintKernel::compute_json(&input.to_string());
    serde_json::from_str(&out).unwrap()
}

fn questionnaire(recycling: bool) -> Value {
    json!({
        "travel": {
            "transport": "car",
            "vehicleType": "petrol",
            "monthlyKm": 500,
            "flightFrequency": "never"
        },
        "home": {
            "heatingSource": "gas",
            "electricityUsage": "medium",
            "wasteRecycling": recycling,
            "wasteBagSize": "medium",
            "wasteBagsPerWeek": 2
        },
        "lifestyle": {
            "diet": "balanced",
            "showerFrequency": "daily",
            "newClothesMonthly": 2,
            "screenTimeDaily": 6
        }
    })
}

#[test]
fn test_reference_household() {
    let response = run(&questionnaire(false));
    let res = &response["result"];

    assert_eq!(res["breakdown"]["travel"], 96.0);
    assert_eq!(res["breakdown"]["home"], 516.5);
    assert_eq!(res["breakdown"]["lifestyle"], 395.33);
    assert_eq!(res["total"], 1007.83);
    assert_eq!(res["annualTotal"], 12093.96);
    assert_eq!(res["comparison"]["vsAverage"], 202.3);
    assert_eq!(res["comparison"]["rating"], "very-high");

    assert_eq!(response["insights"]["dominantCategory"], "home");
    assert_eq!(response["insights"]["treesToOffset"], 551);
    assert!(response["compute_time_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_recycling_household() {
    let response = run(&questionnaire(true));
    let res = &response["result"];

    assert_eq!(res["breakdown"]["home"], 451.55);
    assert_eq!(res["total"], 942.88);
    assert_eq!(res["annualTotal"], 11314.56);
    assert_eq!(res["comparison"]["vsAverage"], 182.9);

    // Home drops under half of the total
    let topics: Vec<&str> = response["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["FOOTPRINT.RATING"]);
}

#[test]
fn test_low_impact_household() {
    let input = json!({
        "travel": {"transport": "walk", "flightFrequency": "never"},
        "home": {
            "heatingSource": "renewable", "electricityUsage": "low",
            "wasteRecycling": true, "wasteBagSize": "small", "wasteBagsPerWeek": 0
        },
        "lifestyle": {
            "diet": "vegan", "showerFrequency": "every-other",
            "newClothesMonthly": 0, "screenTimeDaily": 0
        }
    });
    let response = run(&input);
    let res = &response["result"];

    assert_eq!(res["total"], 295.0);
    assert_eq!(res["annualTotal"], 3540.0);
    assert_eq!(res["comparison"]["vsAverage"], -11.5);
    assert_eq!(res["comparison"]["rating"], "average");
    assert_eq!(response["insights"]["ratingLabel"], "Average");
}

#[test]
fn test_unknown_option_is_rejected() {
    let mut input = questionnaire(false);
    input["travel"]["transport"] = json!("teleport");
    let response = run(&input);

    assert!(response.get("result").is_none());
    let error = response["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid input"), "{}", error);
    assert!(error.contains("teleport"));
}

#[test]
fn test_car_without_vehicle_is_rejected() {
    let mut input = questionnaire(false);
    input["travel"].as_object_mut().unwrap().remove("vehicleType");
    let response = run(&input);
    assert_eq!(response["error"], "vehicleType is required when transport is car");
}

#[test]
fn test_negative_and_out_of_range_quantities() {
    let mut input = questionnaire(false);
    input["home"]["wasteBagsPerWeek"] = json!(-1);
    assert!(run(&input)["error"].as_str().unwrap().contains("wasteBagsPerWeek"));

    let mut input = questionnaire(false);
    input["lifestyle"]["screenTimeDaily"] = json!(30);
    assert!(run(&input)["error"].as_str().unwrap().contains("screenTimeDaily"));
}

#[test]
fn test_malformed_json() {
    let out = FootprintKernel::compute_json("{\"travel\": ");
    let response: Value = serde_json::from_str(&out).unwrap();
    assert!(response["error"].is_string());
}

#[test]
fn test_long_form_field_names_accepted() {
    let input = json!({
        "travel": {
            "transport": "public", "monthlyDistanceKm": 250, "flightFrequency": "rarely"
        },
        "home": {
            "heatingSource": "oil", "electricityUsage": "high",
            "recycles": false, "wasteBagSize": "large", "wasteBagsPerWeek": 0
        },
        "lifestyle": {
            "diet": "vegan", "showerFrequency": "every-other",
            "newClothesMonthly": 0, "screenTimeDaily": 0
        }
    });
    let res = &run(&input)["result"];
    assert_eq!(res["breakdown"]["travel"], 47.25);
    assert_eq!(res["breakdown"]["home"], 500.0);
}
