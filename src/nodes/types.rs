//! Grid node records and their kind tags.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::GridError;

/// The role a node plays on the grid.
///
/// Generation kinds (`Solar`, `Wind`) feed the grid; `Consumer` draws from it.
/// The set is closed: text tags outside it are rejected by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Solar,
    Wind,
    Consumer,
}

impl NodeKind {
    /// Range (MW) a fresh reading for this kind is drawn from.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_monitor::nodes::NodeKind;
    ///
    /// assert_eq!(NodeKind::Wind.power_range_mw(), 30.0..=120.0);
    /// ```
    pub fn power_range_mw(self) -> RangeInclusive<f64> {
        match self {
            NodeKind::Solar => 20.0..=80.0,
            NodeKind::Wind => 30.0..=120.0,
            NodeKind::Consumer => 50.0..=150.0,
        }
    }

    /// Lowercase tag used in console output.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Solar => "solar",
            NodeKind::Wind => "wind",
            NodeKind::Consumer => "consumer",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" => Ok(NodeKind::Solar),
            "wind" => Ok(NodeKind::Wind),
            "consumer" => Ok(NodeKind::Consumer),
            _ => Err(GridError::UnknownNodeKind { tag: s.to_string() }),
        }
    }
}

/// A simulated grid participant.
///
/// `id` and `kind` are fixed at construction. `power_mw` starts at zero and is
/// only changed by [`crate::sim::grid::Grid::simulate_power_readings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    kind: NodeKind,
    power_mw: f64,
}

impl Node {
    /// Creates a node with no reading yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_monitor::nodes::{Node, NodeKind};
    ///
    /// let node = Node::new("SOLAR1", NodeKind::Solar);
    /// assert_eq!(node.id(), "SOLAR1");
    /// assert_eq!(node.power_mw(), 0.0);
    /// ```
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            power_mw: 0.0,
        }
    }

    /// Creates a node from a textual kind tag.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownNodeKind`] if `tag` is not a known kind.
    pub fn parse(id: impl Into<String>, tag: &str) -> Result<Self, GridError> {
        Ok(Self::new(id, tag.parse()?))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Latest reading in megawatts.
    pub fn power_mw(&self) -> f64 {
        self.power_mw
    }

    pub(crate) fn set_power_mw(&mut self, power_mw: f64) {
        self.power_mw = power_mw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_starts_at_zero() {
        let node = Node::new("WIND1", NodeKind::Wind);
        assert_eq!(node.id(), "WIND1");
        assert_eq!(node.kind(), NodeKind::Wind);
        assert_eq!(node.power_mw(), 0.0);
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("solar".parse::<NodeKind>().unwrap(), NodeKind::Solar);
        assert_eq!("Wind".parse::<NodeKind>().unwrap(), NodeKind::Wind);
        assert_eq!(" CONSUMER ".parse::<NodeKind>().unwrap(), NodeKind::Consumer);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = Node::parse("HYDRO1", "hydro").unwrap_err();
        match err {
            GridError::UnknownNodeKind { tag } => assert_eq!(tag, "hydro"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_matches_tag() {
        for kind in [NodeKind::Solar, NodeKind::Wind, NodeKind::Consumer] {
            assert_eq!(kind.to_string().parse::<NodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_power_ranges() {
        assert_eq!(NodeKind::Solar.power_range_mw(), 20.0..=80.0);
        assert_eq!(NodeKind::Wind.power_range_mw(), 30.0..=120.0);
        assert_eq!(NodeKind::Consumer.power_range_mw(), 50.0..=150.0);
    }
}
