/// Infinite arithmetic delay sequence: `initial + round(n * factor)` for
/// `n = 0, 1, 2, …`, halves rounded away from zero. A zero `factor`
/// degenerates to a constant sequence.
#[derive(Debug, Copy, Clone)]
pub struct LinearBackoff {
    initial: u64,
    factor: f64,
    step: u64,
}

impl LinearBackoff {
    pub fn new(initial: u64, factor: f64) -> Self {
        Self { initial, factor, step: 0 }
    }
}

impl Iterator for LinearBackoff {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let delay = self.initial + (self.step as f64 * self.factor).round() as u64;
        self.step += 1;
        Some(delay)
    }
}
