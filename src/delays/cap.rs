/// Clamps every delay of the source to at most `max`.
pub fn cap<D>(delays: D, max: u64) -> Cap<D::IntoIter>
where
    D: IntoIterator<Item = u64>,
{
    Cap { inner: delays.into_iter(), max }
}

#[derive(Debug, Clone)]
pub struct Cap<I> {
    inner: I,
    max: u64,
}

impl<I: Iterator<Item = u64>> Iterator for Cap<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.inner.next().map(|delay| delay.min(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delays::ExponentialBackoff;

    #[test]
    fn never_exceeds_max() {
        let delays: Vec<u64> = cap(ExponentialBackoff::default(), 100).take(10).collect();
        assert_eq!(delays.len(), 10);
        assert!(delays.iter().all(|d| *d <= 100));
        assert_eq!(&delays[..4], &[10, 20, 40, 80]);
    }

    #[test]
    fn finite_sources_keep_their_length() {
        let delays: Vec<u64> = cap(vec![1, 500, 3], 100).collect();
        assert_eq!(delays, vec![1, 100, 3]);
    }
}
