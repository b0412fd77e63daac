use std::time::{Duration, Instant};

/// Default floor for the forced final delay, in milliseconds.
pub const DEFAULT_MIN_DELAY_MS: u64 = 100;

/// Bounds the wall-clock lifetime of consuming `delays` to roughly
/// `time_budget_ms`, measured from the first pull.
///
/// Each pull reads the clock and computes the time remaining, floored at
/// [min_delay](Expiry::min_delay) (default 100 ms). If the next source
/// delay would overshoot the remaining time, or the remaining time has
/// already hit the floor, the remaining time itself is emitted as the
/// final element, forcing one last attempt. A source that runs dry before
/// the budget does simply ends the sequence.
///
/// This adapter is single-pass: it owns a running timer once pulled, so it
/// must not back two consumers expecting independent budgets.
pub fn expiry<D>(delays: D, time_budget_ms: u64) -> Expiry<D::IntoIter>
where
    D: IntoIterator<Item = u64>,
{
    Expiry {
        inner: delays.into_iter(),
        budget: Duration::from_millis(time_budget_ms),
        min_delay: DEFAULT_MIN_DELAY_MS,
        deadline: None,
        done: false,
    }
}

#[derive(Debug)]
pub struct Expiry<I> {
    inner: I,
    budget: Duration,
    min_delay: u64,
    deadline: Option<Instant>,
    done: bool,
}

impl<I> Expiry<I> {
    pub fn min_delay(mut self, min_delay_ms: u64) -> Self {
        self.min_delay = min_delay_ms;
        self
    }
}

impl<I: Iterator<Item = u64>> Iterator for Expiry<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        // The budget window opens lazily, at the first pull.
        let deadline = *self.deadline.get_or_insert_with(|| Instant::now() + self.budget);
        let left = deadline.saturating_duration_since(Instant::now()).as_millis() as u64;
        let remaining = left.max(self.min_delay);
        let delay = self.inner.next()?;
        if left <= self.min_delay || delay >= remaining {
            self.done = true;
            return Some(remaining);
        }
        Some(delay)
    }
}
