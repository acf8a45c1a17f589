//! Shared test fixtures for integration tests.

use std::time::Duration;

use grid_monitor::nodes::{Node, NodeKind};
use grid_monitor::sim::grid::Grid;
use grid_monitor::sim::monitor::{Monitor, default_nodes};

/// Grid holding the standard four nodes, readings still at zero.
pub fn default_grid() -> Grid {
    let mut grid = Grid::new();
    for node in default_nodes() {
        grid.add_node(node);
    }
    grid
}

/// Reading source pinning generators and consumers to fixed values.
///
/// Consumers receive `consumer_mw` in node order, cycling if there are more
/// consumers than values.
pub fn fixed_source(
    solar_mw: f64,
    wind_mw: f64,
    consumer_mw: &[f64],
) -> impl FnMut(&Node) -> f64 + '_ {
    let mut next_consumer = consumer_mw.iter().copied().cycle();
    move |node: &Node| match node.kind() {
        NodeKind::Solar => solar_mw,
        NodeKind::Wind => wind_mw,
        NodeKind::Consumer => next_consumer.next().unwrap_or(0.0),
    }
}

/// Monitor over the default grid with no pause between iterations.
pub fn instant_monitor<S: grid_monitor::nodes::PowerSource>(source: S) -> Monitor<S> {
    Monitor::new(default_grid(), source, Duration::ZERO)
}
