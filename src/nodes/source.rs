use rand::{Rng, SeedableRng, rngs::StdRng};

use super::types::Node;

/// Supplies a fresh power reading for a node.
///
/// This is the only place randomness enters the simulation. Implementations
/// decide the value; the grid just stores it on the node.
///
/// Any `FnMut(&Node) -> f64` closure is a source, which lets callers pin
/// readings to fixed values:
///
/// ```
/// use grid_monitor::nodes::{Node, NodeKind, PowerSource};
///
/// let mut fixed = |_: &Node| 42.0;
/// assert_eq!(fixed.reading_mw(&Node::new("C1", NodeKind::Consumer)), 42.0);
/// ```
pub trait PowerSource {
    /// Returns the new reading for `node` in megawatts.
    fn reading_mw(&mut self, node: &Node) -> f64;
}

impl<F> PowerSource for F
where
    F: FnMut(&Node) -> f64,
{
    fn reading_mw(&mut self, node: &Node) -> f64 {
        self(node)
    }
}

/// Draws readings uniformly from each node kind's power range.
///
/// Seeded sources are reproducible: two sources built with the same seed
/// yield the same sequence for the same sequence of nodes.
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Creates a reproducible source from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl PowerSource for UniformSource {
    fn reading_mw(&mut self, node: &Node) -> f64 {
        self.rng.random_range(node.kind().power_range_mw())
    }
}
