// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CLAYMIX — Custom Clay Brick Mix Designer
// MixKernel: Unified Rust/WASM Mix Orchestrator

// ============================================================================
// MixKernel: single entry point for the interaction surface.
// The surface (JS/TS or the mix_compute CLI) calls ONLY this module;
// marshalling, validation, and computation all happen in Rust.
// ============================================================================

use crate::error::MixError;
use crate::science::blend::{BlendEngine, BlendResult};
use crate::selection::{MixComponent, Selection};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING', 'CRITICAL'
}

#[derive(Serialize)]
pub struct MixResponse {
    pub result: BlendResult,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f32,
}

/// Display metadata for one result field: how the surface labels and
/// rounds it. Keeps units out of the front-end.
#[derive(Clone, Debug, Serialize)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub decimals: u8,
}

const METRICS: &[MetricDescriptor] = &[
    MetricDescriptor { key: "thermalConductivity", label: "Thermal Conductivity", unit: "W/m·K",  decimals: 3 },
    MetricDescriptor { key: "compressiveStrength", label: "Compressive Strength", unit: "MPa",    decimals: 2 },
    MetricDescriptor { key: "waterAbsorption",     label: "Water Absorption",     unit: "%",      decimals: 1 },
    MetricDescriptor { key: "co2Emissions",        label: "CO₂ Emissions",        unit: "kg/m³",  decimals: 0 },
    MetricDescriptor { key: "embodiedEnergy",      label: "Embodied Energy",      unit: "MJ/m³",  decimals: 0 },
    MetricDescriptor { key: "cost",                label: "Cost",                 unit: "MAD/m³", decimals: 0 },
];

#[wasm_bindgen]
pub struct MixKernel;

#[wasm_bindgen]
impl MixKernel {
    /// Main entry point: compute mix performance from a JSON selection.
    ///
    /// Takes a JSON array of `{ "additive": "...", "proportion": ... }`
    /// objects and returns a serialized MixResponse. On failure returns
    /// `{"error": {"kind": "...", "message": "..."}}`; the surface treats
    /// `zero_weight` as a user-facing warning and everything else as a
    /// caller bug.
    ///
    /// # Example
    /// ```json
    /// [{"additive": "Cork", "proportion": 50}, {"additive": "Quicklime", "proportion": 50}]
    /// ```
    #[wasm_bindgen]
    pub fn compute_custom_mix(selection_json: &str) -> String {
        let components: Vec<MixComponent> = match serde_json::from_str(selection_json) {
            Ok(c) => c,
            Err(e) => {
                return Self::error_json("invalid_json", &format!("Failed to parse selection: {}", e));
            }
        };

        let start = instant::Instant::now();
        let response = Selection::new(components)
            .and_then(|selection| BlendEngine::compute(&selection))
            .map(|result| MixResponse {
                events: Self::advisory_events(&result),
                result,
                compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
            });

        match response {
            Ok(r) => serde_json::to_string(&r).unwrap_or_default(),
            Err(e) => Self::error_json(e.kind(), &e.to_string()),
        }
    }

    /// Display descriptors for the six result fields, as a JS array.
    pub fn metrics() -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&METRICS)?)
    }
}

/// Pure Rust surface (native callers, tests, CLI)
impl MixKernel {
    /// Compute without the JSON envelope.
    pub fn compute(selection: &Selection) -> Result<BlendResult, MixError> {
        BlendEngine::compute(selection)
    }

    pub fn list_metrics() -> &'static [MetricDescriptor] {
        METRICS
    }

    /// Advisory checks on a finished result. These never fail the request;
    /// the surface renders them next to the metrics.
    fn advisory_events(result: &BlendResult) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        if result.compressive_strength < 3.0 {
            events.push(ValidationEvent {
                topic: "MIX.STRENGTH".to_string(),
                message: format!(
                    "Low compressive strength: {:.2} MPa (below load-bearing range)",
                    result.compressive_strength
                ),
                severity: "WARNING".to_string(),
            });
        }

        if result.thermal_conductivity > 0.5 {
            events.push(ValidationEvent {
                topic: "MIX.THERMAL".to_string(),
                message: format!(
                    "High thermal conductivity: {:.3} W/m·K (poor insulation)",
                    result.thermal_conductivity
                ),
                severity: "WARNING".to_string(),
            });
        }

        if result.water_absorption > 22.0 {
            events.push(ValidationEvent {
                topic: "MIX.ABSORPTION".to_string(),
                message: format!(
                    "High water absorption: {:.1} % (frost damage risk)",
                    result.water_absorption
                ),
                severity: "WARNING".to_string(),
            });
        }

        events
    }

    fn error_json(kind: &str, message: &str) -> String {
        serde_json::to_string(&serde_json::json!({
            "error": { "kind": kind, "message": message }
        }))
        .unwrap_or_default()
    }
}
