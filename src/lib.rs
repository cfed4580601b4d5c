// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CLAYMIX — Custom Clay Brick Mix Designer
// Compute core: additive catalog + proportional blend kernel
//

pub mod catalog;
pub mod error;
pub mod mix_kernel;
pub mod science;
pub mod selection;
#[cfg(test)]
pub mod tests_mix;

// Re-export core types
pub use catalog::{AdditiveCatalog, AdditiveProfile};
pub use error::MixError;
pub use mix_kernel::{MetricDescriptor, MixKernel, MixResponse, ValidationEvent};
pub use science::blend::{BlendEngine, BlendResult};
pub use selection::{MixComponent, Selection, DEFAULT_PROPORTION};
