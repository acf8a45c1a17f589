//! Crate-wide error type.

use thiserror::Error;

/// Errors raised at the edges of the simulator: parsing node tags and
/// writing reports to the console.
///
/// The simulation itself (refresh and aggregation) has no failure modes.
#[derive(Debug, Error)]
pub enum GridError {
    /// A node type tag that is not `solar`, `wind` or `consumer`.
    #[error("unknown node type \"{tag}\", expected solar, wind or consumer")]
    UnknownNodeKind { tag: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
