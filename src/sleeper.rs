use std::sync::Mutex;
use std::time::Duration;

/// Wait capability injected into a [Retrier](crate::Retrier).
///
/// The engine calls `sleep` exactly once per attempt, including a
/// `sleep(Duration::ZERO)` before the first one. Implementations take
/// `&self` and must be callable from several threads at once when one
/// sleeper instance backs independent retry calls.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Default sleeper, blocks the current thread for real.
#[derive(Debug, Copy, Clone, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately without waiting. Useful in tests and dry runs
/// where the delay schedule is irrelevant.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&self, _duration: Duration) {}
}

/// Records every requested duration instead of waiting.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// All durations requested so far, in order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
