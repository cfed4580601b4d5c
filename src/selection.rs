// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CLAYMIX — Custom Clay Brick Mix Designer
// Selection: validated user input (additive names + raw proportions)

use crate::catalog::AdditiveCatalog;
use crate::error::MixError;
use serde::{Deserialize, Serialize};

/// Slider default on the surface: a mid-range percentage so a fresh
/// three-way selection starts near an even split.
pub const DEFAULT_PROPORTION: f32 = 33.0;

/// One selected additive as sent by the surface (JSON).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MixComponent {
    pub additive: String,
    /// Raw proportion as entered, NOT normalized. Percent-like but any
    /// non-negative scale works; only ratios matter.
    #[serde(default)]
    pub proportion: f32,
}

/// A validated selection of 1–3 distinct additives. Constructed fresh per
/// interaction and discarded after the result is computed.
#[derive(Clone, Debug)]
pub struct Selection {
    components: Vec<MixComponent>,
}

impl Selection {
    pub const MAX_ADDITIVES: usize = 3;

    /// Validate and wrap raw components. Checks, in order: non-empty,
    /// size cap, non-negative proportions, known names, distinct names.
    pub fn new(components: Vec<MixComponent>) -> Result<Selection, MixError> {
        if components.is_empty() {
            return Err(MixError::EmptySelection);
        }
        if components.len() > Self::MAX_ADDITIVES {
            return Err(MixError::TooManySelections(components.len()));
        }
        for (i, comp) in components.iter().enumerate() {
            if comp.proportion < 0.0 {
                return Err(MixError::NegativeProportion {
                    additive: comp.additive.clone(),
                    value: comp.proportion,
                });
            }
            AdditiveCatalog::lookup(&comp.additive)?;
            if components[..i].iter().any(|c| c.additive == comp.additive) {
                return Err(MixError::DuplicateAdditive(comp.additive.clone()));
            }
        }
        Ok(Selection { components })
    }

    pub fn components(&self) -> &[MixComponent] {
        &self.components
    }

    pub fn total_proportion(&self) -> f32 {
        self.components.iter().map(|c| c.proportion).sum()
    }

    /// Normalized weights, one per component, summing to 1 (up to
    /// floating-point rounding).
    pub fn weights(&self) -> Result<Vec<f32>, MixError> {
        let total = self.total_proportion();
        if total == 0.0 {
            return Err(MixError::ZeroWeight);
        }
        Ok(self
            .components
            .iter()
            .map(|c| c.proportion / total)
            .collect())
    }
}
