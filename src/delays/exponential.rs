/// Infinite geometric delay sequence.
///
/// Starts at `initial` and multiplies by `factor` at each step, rounding
/// to the nearest millisecond with halves away from zero. `factor` may be
/// fractional for growth slower than doubling.
///
/// Restartable: a clone re-enumerates the same values from the start.
#[derive(Debug, Copy, Clone)]
pub struct ExponentialBackoff {
    next: u64,
    factor: f64,
}

impl ExponentialBackoff {
    pub fn new(initial: u64, factor: f64) -> Self {
        Self { next: initial, factor }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(10, 2.0)
    }
}

impl Iterator for ExponentialBackoff {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next;
        self.next = (current as f64 * self.factor).round() as u64;
        Some(current)
    }
}
