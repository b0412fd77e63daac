/// Infinite repetition of one delay.
#[derive(Debug, Copy, Clone)]
pub struct ConstantBackoff {
    delay: u64,
}

impl ConstantBackoff {
    pub fn new(delay: u64) -> Self {
        Self { delay }
    }
}

impl Default for ConstantBackoff {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Iterator for ConstantBackoff {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.delay)
    }
}
