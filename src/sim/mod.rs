/// Iteration counting for the monitoring loop.
pub mod clock;
pub mod grid;
/// Driver loop over the fixed node set.
pub mod monitor;
pub mod power_balance;
pub mod report;
