// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use thiserror::Error;

/// Failures local to a single mix computation. Nothing here touches shared
/// state; every variant maps to one `kind` string in the kernel's JSON
/// error envelope.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    /// Name not present in the additive catalog. Names are drawn from the
    /// catalog's own listing, so this indicates a caller bug.
    #[error("unknown additive '{0}'")]
    UnknownAdditive(String),

    /// All raw proportions were zero. Recoverable: the surface shows a
    /// warning and the user adjusts a slider.
    #[error("proportions sum to zero; set at least one proportion > 0")]
    ZeroWeight,

    /// The surface invoked the kernel without any selected additive.
    #[error("selection is empty")]
    EmptySelection,

    /// More components than the mix supports.
    #[error("selection has {0} additives, maximum is 3")]
    TooManySelections(usize),

    #[error("negative proportion {value} for additive '{additive}'")]
    NegativeProportion { additive: String, value: f32 },

    #[error("additive '{0}' selected more than once")]
    DuplicateAdditive(String),
}

impl MixError {
    /// Stable discriminator for the JSON boundary. The surface switches on
    /// this to decide between a user-facing warning (`zero_weight`) and a
    /// caller-bug report.
    pub fn kind(&self) -> &'static str {
        match self {
            MixError::UnknownAdditive(_) => "unknown_additive",
            MixError::ZeroWeight => "zero_weight",
            MixError::EmptySelection => "empty_selection",
            MixError::TooManySelections(_) => "too_many_selections",
            MixError::NegativeProportion { .. } => "negative_proportion",
            MixError::DuplicateAdditive(_) => "duplicate_additive",
        }
    }
}
