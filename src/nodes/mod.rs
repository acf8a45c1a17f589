//! Grid node model and power reading sources.

/// Sources of fresh power readings.
pub mod source;
pub mod types;

pub use source::{PowerSource, UniformSource};
pub use types::{Node, NodeKind};
