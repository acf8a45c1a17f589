//! Per-iteration monitoring report types.

use std::fmt;

use serde::Serialize;

/// Stability verdict derived from the power balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stability {
    Stable,
    Unstable,
}

impl Stability {
    pub fn is_stable(self) -> bool {
        self == Stability::Stable
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stability::Stable => "Stable",
            Stability::Unstable => "Unstable",
        })
    }
}

/// One consumer's rounded reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerReading {
    pub id: String,
    pub power_mw: f64,
}

/// Consumer readings keyed by node id, in first-seen order.
///
/// Inserting an id that is already present replaces its value in place, so
/// the last reading for a duplicated id wins while its position is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConsumerReadings(Vec<ConsumerReading>);

impl ConsumerReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `power_mw` for `id`, overwriting any earlier value.
    pub fn insert(&mut self, id: &str, power_mw: f64) {
        match self.0.iter_mut().find(|r| r.id == id) {
            Some(existing) => existing.power_mw = power_mw,
            None => self.0.push(ConsumerReading {
                id: id.to_string(),
                power_mw,
            }),
        }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.iter().find(|r| r.id == id).map(|r| r.power_mw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConsumerReading> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the stored (already rounded) values.
    pub fn total_mw(&self) -> f64 {
        self.0.iter().map(|r| r.power_mw).sum()
    }
}

/// Snapshot of grid generation, consumption and stability.
///
/// All megawatt figures are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridReport {
    /// Local wall-clock time of the snapshot, `HH:MM:SS`.
    pub timestamp: String,
    pub solar_power_mw: f64,
    pub wind_power_mw: f64,
    pub total_generation_mw: f64,
    pub consumer_readings: ConsumerReadings,
    pub total_consumption_mw: f64,
    /// Generation minus consumption (MW).
    pub balance_mw: f64,
    pub status: Stability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicate_overwrites_in_place() {
        let mut readings = ConsumerReadings::new();
        readings.insert("C1", 60.0);
        readings.insert("C2", 70.0);
        readings.insert("C1", 90.0);

        assert_eq!(readings.len(), 2);
        assert_eq!(readings.get("C1"), Some(90.0));
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C1", "C2"]);
        assert_eq!(readings.total_mw(), 160.0);
    }

    #[test]
    fn empty_readings_total_zero() {
        let readings = ConsumerReadings::new();
        assert!(readings.is_empty());
        assert_eq!(readings.total_mw(), 0.0);
        assert_eq!(readings.get("C1"), None);
    }

    #[test]
    fn stability_display() {
        assert_eq!(Stability::Stable.to_string(), "Stable");
        assert_eq!(Stability::Unstable.to_string(), "Unstable");
        assert!(Stability::Stable.is_stable());
        assert!(!Stability::Unstable.is_stable());
    }
}
