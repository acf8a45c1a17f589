//! Toy power-grid simulator: random node readings, per-iteration balance
//! reports and a stability verdict.

pub mod config;
pub mod error;
pub mod logging;
/// Grid nodes and reading sources.
pub mod nodes;
pub mod reporting;
/// Grid model, aggregation and the monitoring loop.
pub mod sim;

pub use error::{GridError, Result};
