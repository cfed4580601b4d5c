// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CLAYMIX — Custom Clay Brick Mix Designer
// Additive Catalog: per-additive reference properties (per 100% additive)

use crate::error::MixError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Reference properties of one additive at 100% proportion. Proportional
/// mixing scales linearly between entries, so all values are per-m³ of
/// additive content.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditiveProfile {
    pub name: &'static str,
    /// W/(m·K)
    pub thermal_conductivity: f32,
    /// MPa
    pub compressive_strength: f32,
    /// % by mass
    pub water_absorption: f32,
    /// kg/m³
    pub co2_emissions: f32,
    /// MJ/m³
    pub embodied_energy: f32,
    /// MAD/m³
    pub cost: f32,
}

/// Lab-characterized additive dataset. Declaration order is the display
/// order in the surface's multi-select.
const ADDITIVES: &[AdditiveProfile] = &[
    AdditiveProfile { name: "Cork",        thermal_conductivity: 0.326, compressive_strength: 3.4, water_absorption: 18.5, co2_emissions: 82.0,  embodied_energy: 1180.0, cost: 832.0 },
    AdditiveProfile { name: "Quicklime",   thermal_conductivity: 0.490, compressive_strength: 4.8, water_absorption: 20.1, co2_emissions: 130.0, embodied_energy: 1536.0, cost: 288.0 },
    AdditiveProfile { name: "Wool",        thermal_conductivity: 0.420, compressive_strength: 3.7, water_absorption: 19.3, co2_emissions: 121.0, embodied_energy: 1600.0, cost: 1600.0 },
    AdditiveProfile { name: "Almond husk", thermal_conductivity: 0.552, compressive_strength: 2.9, water_absorption: 22.0, co2_emissions: 92.0,  embodied_energy: 1120.0, cost: 120.0 },
    AdditiveProfile { name: "Typha",       thermal_conductivity: 0.292, compressive_strength: 3.2, water_absorption: 17.4, co2_emissions: 75.0,  embodied_energy: 1020.0, cost: 96.0 },
    AdditiveProfile { name: "Dry grass",   thermal_conductivity: 0.338, compressive_strength: 2.8, water_absorption: 18.9, co2_emissions: 80.0,  embodied_energy: 1080.0, cost: 48.0 },
    AdditiveProfile { name: "Bentonite",   thermal_conductivity: 0.659, compressive_strength: 3.6, water_absorption: 23.8, co2_emissions: 110.0, embodied_energy: 1360.0, cost: 288.0 },
    AdditiveProfile { name: "Wood ash",    thermal_conductivity: 0.484, compressive_strength: 3.1, water_absorption: 19.5, co2_emissions: 90.0,  embodied_energy: 1056.0, cost: 16.0 },
    AdditiveProfile { name: "Olive ash",   thermal_conductivity: 0.457, compressive_strength: 3.3, water_absorption: 20.3, co2_emissions: 88.0,  embodied_energy: 1048.0, cost: 16.0 },
    AdditiveProfile { name: "OPBA",        thermal_conductivity: 0.430, compressive_strength: 3.5, water_absorption: 19.0, co2_emissions: 85.0,  embodied_energy: 1040.0, cost: 32.0 },
];

#[wasm_bindgen]
pub struct AdditiveCatalog;

/// Pure Rust surface (native + internal engines)
impl AdditiveCatalog {
    /// Retrieve an additive profile by display name.
    pub fn lookup(name: &str) -> Result<&'static AdditiveProfile, MixError> {
        ADDITIVES
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| MixError::UnknownAdditive(name.to_string()))
    }

    /// All additive names in catalog declaration order. Feeds the
    /// surface's multi-select.
    pub fn list_names() -> Vec<&'static str> {
        ADDITIVES.iter().map(|a| a.name).collect()
    }

    pub fn len() -> usize {
        ADDITIVES.len()
    }

    pub fn profiles() -> &'static [AdditiveProfile] {
        ADDITIVES
    }
}

/// WASM surface (interaction layer)
#[wasm_bindgen]
impl AdditiveCatalog {
    /// Additive names as a JS string array.
    pub fn names() -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&Self::list_names())?)
    }

    /// Full profile for one additive, or null if the name is unknown.
    pub fn profile(name: &str) -> Result<JsValue, JsValue> {
        match Self::lookup(name) {
            Ok(profile) => Ok(serde_wasm_bindgen::to_value(profile)?),
            Err(_) => Ok(JsValue::NULL),
        }
    }
}
