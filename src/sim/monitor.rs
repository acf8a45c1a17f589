//! Driver loop: refresh, aggregate, render, pause.

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;
use crate::nodes::{Node, NodeKind, PowerSource};
use crate::reporting::ReportRenderer;

use super::clock::IterationClock;
use super::grid::Grid;
use super::report::GridReport;

/// Number of monitoring iterations in a run.
pub const ITERATIONS: usize = 10;

/// The fixed node set every run monitors.
pub fn default_nodes() -> Vec<Node> {
    vec![
        Node::new("SOLAR1", NodeKind::Solar),
        Node::new("WIND1", NodeKind::Wind),
        Node::new("CONSUMER1", NodeKind::Consumer),
        Node::new("CONSUMER2", NodeKind::Consumer),
    ]
}

/// Owns the grid and its reading source and drives the monitoring loop.
///
/// Generic over `S: PowerSource` so tests can pin readings.
pub struct Monitor<S: PowerSource> {
    grid: Grid,
    source: S,
    pause: Duration,
}

impl<S: PowerSource> Monitor<S> {
    /// Wraps an already-assembled grid.
    pub fn new(grid: Grid, source: S, pause: Duration) -> Self {
        Self {
            grid,
            source,
            pause,
        }
    }

    /// Builds a grid from [`default_nodes`], announcing each node to `renderer`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the renderer fails to write.
    pub fn with_default_nodes(
        source: S,
        pause: Duration,
        renderer: &mut dyn ReportRenderer,
    ) -> Result<Self> {
        let mut grid = Grid::new();
        for node in default_nodes() {
            renderer.node_added(&node)?;
            grid.add_node(node);
        }
        Ok(Self::new(grid, source, pause))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Draws fresh readings and aggregates them.
    pub fn step(&mut self) -> GridReport {
        self.grid.simulate_power_readings(&mut self.source);
        self.grid.monitor_grid()
    }

    /// Runs [`ITERATIONS`] iterations, rendering each report, and returns them
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the renderer fails to write.
    pub fn run(&mut self, renderer: &mut dyn ReportRenderer) -> Result<Vec<GridReport>> {
        let mut clock = IterationClock::new(ITERATIONS);
        let mut reports = Vec::with_capacity(clock.total());

        info!(iterations = clock.total(), nodes = self.grid.len(), "starting grid monitoring");
        renderer.start(clock.total())?;

        while let Some(iteration) = clock.tick() {
            let report = self.step();
            if !report.status.is_stable() {
                warn!(
                    iteration,
                    balance_mw = report.balance_mw,
                    "grid unstable"
                );
            }
            renderer.render(iteration, &report)?;
            reports.push(report);

            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }

        renderer.finish()?;
        info!(reports = reports.len(), "monitoring complete");
        Ok(reports)
    }
}
