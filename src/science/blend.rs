// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CLAYMIX — Custom Clay Brick Mix Designer
// BlendEngine: proportion-weighted property averaging

use crate::catalog::AdditiveCatalog;
use crate::error::MixError;
use crate::selection::Selection;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Estimated performance of a custom mix: the weighted average of each
/// catalog property across the selected additives.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendResult {
    pub thermal_conductivity: f32, // W/(m·K)
    pub compressive_strength: f32, // MPa
    pub water_absorption: f32,     // %
    pub co2_emissions: f32,        // kg/m³
    pub embodied_energy: f32,      // MJ/m³
    pub cost: f32,                 // MAD/m³
}

#[wasm_bindgen]
pub struct BlendEngine;

impl BlendEngine {
    /// Convex combination of the selected profiles: weights are the raw
    /// proportions normalized to sum to 1, so every result field lies
    /// within [min, max] of that field across the selection. No rounding
    /// or clamping here; display precision belongs to the surface.
    pub fn compute(selection: &Selection) -> Result<BlendResult, MixError> {
        let weights = selection.weights()?;

        let mut result = BlendResult {
            thermal_conductivity: 0.0,
            compressive_strength: 0.0,
            water_absorption: 0.0,
            co2_emissions: 0.0,
            embodied_energy: 0.0,
            cost: 0.0,
        };

        for (comp, w) in selection.components().iter().zip(weights) {
            let profile = AdditiveCatalog::lookup(&comp.additive)?;
            result.thermal_conductivity += w * profile.thermal_conductivity;
            result.compressive_strength += w * profile.compressive_strength;
            result.water_absorption += w * profile.water_absorption;
            result.co2_emissions += w * profile.co2_emissions;
            result.embodied_energy += w * profile.embodied_energy;
            result.cost += w * profile.cost;
        }

        Ok(result)
    }
}
