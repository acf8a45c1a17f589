/// Counts monitoring iterations up to a fixed total.
///
/// Iterations are numbered from 1, matching the console report header.
///
/// # Examples
///
/// ```
/// use grid_monitor::sim::clock::IterationClock;
///
/// let mut clock = IterationClock::new(3);
/// let mut seen = Vec::new();
///
/// clock.run(|iteration| seen.push(iteration));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct IterationClock {
    completed: usize,
    total: usize,
}

impl IterationClock {
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Starts the next iteration.
    ///
    /// # Returns
    ///
    /// * `Some(n)` - The 1-based number of the iteration just started
    /// * `None` - If all iterations have run
    pub fn tick(&mut self) -> Option<usize> {
        if self.completed < self.total {
            self.completed += 1;
            Some(self.completed)
        } else {
            None
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Calls `f` with each remaining iteration number.
    pub fn run(&mut self, mut f: impl FnMut(usize)) {
        while let Some(iteration) = self.tick() {
            f(iteration);
        }
    }
}
