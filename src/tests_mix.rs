// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! CLAYMIX Kernel Tests
//!
//! End-to-end tests driving the JSON facade the interaction surface uses.

use crate::mix_kernel::MixKernel;
use serde_json::json;

#[test]
fn test_fifty_fifty_reference_mix() {
    let selection = json!([
        { "additive": "Cork", "proportion": 50 },
        { "additive": "Quicklime", "proportion": 50 }
    ]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(response.get("error").is_none(), "unexpected error: {}", output);

    let result = &response["result"];
    let k = result["thermalConductivity"].as_f64().unwrap();
    assert!((k - 0.408).abs() < 1e-4, "k = {}", k);
    let cost = result["cost"].as_f64().unwrap();
    assert!((cost - 560.0).abs() < 1e-2, "cost = {}", cost);

    // Cork/Quicklime blend sits at 4.1 MPa — above the strength warning
    // threshold, below the conductivity one, so no advisories fire.
    assert_eq!(response["events"].as_array().unwrap().len(), 0);
    assert!(response["compute_time_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_single_additive_passthrough() {
    let selection = json!([{ "additive": "Typha", "proportion": 100 }]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();

    let result = &response["result"];
    assert_eq!(result["thermalConductivity"].as_f64().unwrap(), 0.292f32 as f64);
    assert_eq!(result["cost"].as_f64().unwrap(), 96.0);
    assert_eq!(result["co2Emissions"].as_f64().unwrap(), 75.0);
}

#[test]
fn test_zero_weight_envelope() {
    let selection = json!([
        { "additive": "Cork", "proportion": 0 },
        { "additive": "Wool", "proportion": 0 }
    ]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(response["error"]["kind"].as_str().unwrap(), "zero_weight");
}

#[test]
fn test_unknown_additive_envelope() {
    let selection = json!([{ "additive": "Granite", "proportion": 50 }]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(response["error"]["kind"].as_str().unwrap(), "unknown_additive");
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Granite"));
}

#[test]
fn test_contract_violation_envelopes() {
    let empty = MixKernel::compute_custom_mix("[]");
    let response: serde_json::Value = serde_json::from_str(&empty).unwrap();
    assert_eq!(response["error"]["kind"].as_str().unwrap(), "empty_selection");

    let four = json!([
        { "additive": "Cork", "proportion": 25 },
        { "additive": "Wool", "proportion": 25 },
        { "additive": "Typha", "proportion": 25 },
        { "additive": "Bentonite", "proportion": 25 }
    ]);
    let response: serde_json::Value =
        serde_json::from_str(&MixKernel::compute_custom_mix(&four.to_string())).unwrap();
    assert_eq!(
        response["error"]["kind"].as_str().unwrap(),
        "too_many_selections"
    );

    let duplicate = json!([
        { "additive": "Cork", "proportion": 50 },
        { "additive": "Cork", "proportion": 50 }
    ]);
    let response: serde_json::Value =
        serde_json::from_str(&MixKernel::compute_custom_mix(&duplicate.to_string())).unwrap();
    assert_eq!(
        response["error"]["kind"].as_str().unwrap(),
        "duplicate_additive"
    );

    let garbage = MixKernel::compute_custom_mix("not json");
    let response: serde_json::Value = serde_json::from_str(&garbage).unwrap();
    assert_eq!(response["error"]["kind"].as_str().unwrap(), "invalid_json");
}

#[test]
fn test_missing_proportion_defaults_to_zero() {
    // Surface may omit a slider value before the user touches it.
    let selection = json!([
        { "additive": "Cork" },
        { "additive": "Quicklime", "proportion": 80 }
    ]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    let result = &response["result"];
    // Cork contributes weight 0 — result is pure Quicklime.
    assert_eq!(result["compressiveStrength"].as_f64().unwrap(), 4.8f32 as f64);
}

#[test]
fn test_advisory_events_fire() {
    // Bentonite-heavy mix: k = 0.659 and absorption = 23.8 both breach
    // their thresholds, strength 3.6 does not.
    let selection = json!([{ "additive": "Bentonite", "proportion": 100 }]);

    let output = MixKernel::compute_custom_mix(&selection.to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();

    let events = response["events"].as_array().unwrap();
    let topics: Vec<&str> = events
        .iter()
        .map(|e| e["topic"].as_str().unwrap())
        .collect();
    assert!(topics.contains(&"MIX.THERMAL"), "topics: {:?}", topics);
    assert!(topics.contains(&"MIX.ABSORPTION"), "topics: {:?}", topics);
    assert!(!topics.contains(&"MIX.STRENGTH"), "topics: {:?}", topics);
    for event in events {
        assert_eq!(event["severity"].as_str().unwrap(), "WARNING");
    }
}

#[test]
fn test_facade_idempotent() {
    let selection = json!([
        { "additive": "Olive ash", "proportion": 30 },
        { "additive": "Dry grass", "proportion": 70 }
    ])
    .to_string();

    let first: serde_json::Value =
        serde_json::from_str(&MixKernel::compute_custom_mix(&selection)).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&MixKernel::compute_custom_mix(&selection)).unwrap();
    assert_eq!(first["result"], second["result"]);
    assert_eq!(first["events"], second["events"]);
}

#[test]
fn test_metric_descriptors_match_result_keys() {
    let metrics = MixKernel::list_metrics();
    assert_eq!(metrics.len(), 6);

    let decimals: Vec<u8> = metrics.iter().map(|m| m.decimals).collect();
    assert_eq!(decimals, vec![3, 2, 1, 0, 0, 0]);

    // Every descriptor key must exist in a serialized result.
    let output = MixKernel::compute_custom_mix(
        &json!([{ "additive": "Cork", "proportion": 100 }]).to_string(),
    );
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    for metric in metrics {
        assert!(
            response["result"].get(metric.key).is_some(),
            "missing key {}",
            metric.key
        );
    }
}
