use rand::Rng;

/// Replaces each delay `d >= 1` with a uniformly random value in `[1, d]`;
/// a zero delay stays zero.
///
/// Output is non-deterministic even over a deterministic source.
pub fn jitter<D>(delays: D) -> Jitter<D::IntoIter>
where
    D: IntoIterator<Item = u64>,
{
    Jitter { inner: delays.into_iter() }
}

#[derive(Debug, Clone)]
pub struct Jitter<I> {
    inner: I,
}

impl<I: Iterator<Item = u64>> Iterator for Jitter<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let delay = self.inner.next()?;
        if delay == 0 {
            return Some(0);
        }
        Some(rand::rng().random_range(1..=delay))
    }
}

/// Perturbs each delay by a uniformly random shift of at most
/// `round(d * proportion)` in either direction, clamped at zero.
///
/// The proportion defaults to `0.1`; override it with
/// [proportion](Randomize::proportion). A delay small enough that
/// `round(d * proportion)` is zero passes through untouched.
pub fn randomize<D>(delays: D) -> Randomize<D::IntoIter>
where
    D: IntoIterator<Item = u64>,
{
    Randomize { inner: delays.into_iter(), proportion: 0.1 }
}

#[derive(Debug, Clone)]
pub struct Randomize<I> {
    inner: I,
    proportion: f64,
}

impl<I> Randomize<I> {
    pub fn proportion(mut self, proportion: f64) -> Self {
        self.proportion = proportion;
        self
    }
}

impl<I: Iterator<Item = u64>> Iterator for Randomize<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let delay = self.inner.next()?;
        let max_delta = (delay as f64 * self.proportion).round() as i64;
        if max_delta <= 0 {
            return Some(delay);
        }
        // Uniform over [1, 2 * max_delta], recentered to [-max_delta + 1, max_delta].
        let shift = rand::rng().random_range(1..=2 * max_delta) - max_delta;
        Some((delay as i64 + shift).max(0) as u64)
    }
}
