//! The grid: an ordered set of nodes plus refresh and aggregation.

use chrono::{Local, NaiveTime};
use tracing::{debug, info};

use crate::nodes::{Node, NodeKind, PowerSource};

use super::power_balance::{balance_mw, classify, round_mw};
use super::report::{ConsumerReadings, GridReport};

/// Owns the grid's nodes in insertion order.
///
/// Nodes can be appended but never removed. Ids are not checked for
/// uniqueness.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    nodes: Vec<Node>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn add_node(&mut self, node: Node) {
        info!(kind = %node.kind(), id = node.id(), "added node");
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Overwrites every node's reading with a fresh one from `source`.
    pub fn simulate_power_readings<S: PowerSource + ?Sized>(&mut self, source: &mut S) {
        for node in &mut self.nodes {
            let power_mw = source.reading_mw(node);
            debug!(id = node.id(), kind = %node.kind(), power_mw, "new reading");
            node.set_power_mw(power_mw);
        }
    }

    /// Aggregates the current readings, stamped with the local time.
    pub fn monitor_grid(&self) -> GridReport {
        self.monitor_at(Local::now().time())
    }

    /// Aggregates the current readings, stamped with `time`.
    ///
    /// Consumption is summed from the per-consumer values *after* rounding,
    /// so it always matches the listed readings.
    pub fn monitor_at(&self, time: NaiveTime) -> GridReport {
        let solar_power_mw = self.total_mw(NodeKind::Solar);
        let wind_power_mw = self.total_mw(NodeKind::Wind);
        let total_generation_mw = solar_power_mw + wind_power_mw;

        let mut consumer_readings = ConsumerReadings::new();
        for node in self.nodes_of(NodeKind::Consumer) {
            consumer_readings.insert(node.id(), round_mw(node.power_mw()));
        }
        let total_consumption_mw = consumer_readings.total_mw();

        let balance = balance_mw(total_generation_mw, total_consumption_mw);

        GridReport {
            timestamp: time.format("%H:%M:%S").to_string(),
            solar_power_mw: round_mw(solar_power_mw),
            wind_power_mw: round_mw(wind_power_mw),
            total_generation_mw: round_mw(total_generation_mw),
            consumer_readings,
            total_consumption_mw: round_mw(total_consumption_mw),
            balance_mw: round_mw(balance),
            status: classify(balance),
        }
    }

    fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    fn total_mw(&self, kind: NodeKind) -> f64 {
        self.nodes_of(kind).map(Node::power_mw).sum()
    }
}
