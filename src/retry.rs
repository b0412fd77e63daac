use std::time::Duration;

use crate::sleeper::{Sleeper, ThreadSleeper};

/// Drives the attempt loop: sleep, invoke, ask the predicate.
///
/// A `Retrier` owns nothing but its [Sleeper](crate::Sleeper); it keeps no
/// state between calls, so one instance may serve any number of retries.
///
/// Every delay sequence gets a synthetic leading `0`, so the first
/// invocation happens without waiting and `sleep` is called exactly once
/// per attempt. When the sequence runs out, the loop stops on the last
/// produced result even if the predicate asked to continue.
#[derive(Debug, Copy, Clone, Default)]
pub struct Retrier<S = ThreadSleeper> {
    sleeper: S,
}

impl Retrier<ThreadSleeper> {
    /// A retrier that waits for real, via [ThreadSleeper](crate::ThreadSleeper).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Sleeper> Retrier<S> {
    pub fn with_sleeper(sleeper: S) -> Self {
        Self { sleeper }
    }

    /// Invokes `operation` until `should_retry` returns `false` or `delays`
    /// is exhausted, returning the last result either way.
    ///
    /// `should_retry` decides everything: the engine has no opinion on what
    /// counts as success. A panic from `operation` or `should_retry` unwinds
    /// through this call untouched.
    pub fn retry<T, O, P, D>(&self, mut operation: O, mut should_retry: P, delays: D) -> T
    where
        O: FnMut() -> T,
        P: FnMut(&T) -> bool,
        D: IntoIterator<Item = u64>,
    {
        let mut delays = delays.into_iter();
        let mut delay = 0;
        let mut attempt: usize = 0;
        loop {
            self.sleeper.sleep(Duration::from_millis(delay));
            let result = operation();
            attempt += 1;
            if !should_retry(&result) {
                #[cfg(feature = "log")]
                log::debug!("attempt {attempt}: predicate accepted the result, stopping");
                return result;
            }
            match delays.next() {
                Some(next) => {
                    #[cfg(feature = "log")]
                    log::debug!("attempt {attempt}: retrying in {next}ms");
                    delay = next;
                }
                None => {
                    // Exhaustion wins over "retry".
                    #[cfg(feature = "log")]
                    log::debug!("attempt {attempt}: delay sequence exhausted, stopping");
                    return result;
                }
            }
        }
    }

    /// Like [retry](Retrier::retry), but threads a caller-defined
    /// accumulator through the attempts.
    ///
    /// Each invocation receives the accumulator and returns the next one
    /// alongside its result; the engine passes it on verbatim, exactly one
    /// update per attempt. Returns the last `(result, accumulator)` pair.
    pub fn retry_with_acc<T, A, O, P, D>(
        &self,
        mut operation: O,
        mut should_retry: P,
        initial: A,
        delays: D,
    ) -> (T, A)
    where
        O: FnMut(A) -> (T, A),
        P: FnMut(&T, &A) -> bool,
        D: IntoIterator<Item = u64>,
    {
        let mut delays = delays.into_iter();
        let mut delay = 0;
        let mut acc = initial;
        loop {
            self.sleeper.sleep(Duration::from_millis(delay));
            let (result, next_acc) = operation(acc);
            acc = next_acc;
            if !should_retry(&result, &acc) {
                return (result, acc);
            }
            match delays.next() {
                Some(next) => delay = next,
                None => return (result, acc),
            }
        }
    }
}

/// Retries `operation` with real blocking waits between attempts.
///
/// Shorthand for [`Retrier::new().retry(..)`](Retrier::retry).
pub fn retry<T, O, P, D>(operation: O, should_retry: P, delays: D) -> T
where
    O: FnMut() -> T,
    P: FnMut(&T) -> bool,
    D: IntoIterator<Item = u64>,
{
    Retrier::new().retry(operation, should_retry, delays)
}

/// Accumulator-carrying variant of [retry](crate::retry), with real
/// blocking waits.
pub fn retry_with_acc<T, A, O, P, D>(operation: O, should_retry: P, initial: A, delays: D) -> (T, A)
where
    O: FnMut(A) -> (T, A),
    P: FnMut(&T, &A) -> bool,
    D: IntoIterator<Item = u64>,
{
    Retrier::new().retry_with_acc(operation, should_retry, initial, delays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::RecordingSleeper;

    fn millis(values: &[u64]) -> Vec<Duration> {
        values.iter().copied().map(Duration::from_millis).collect()
    }

    #[test]
    fn runs_once_per_delay_plus_one() {
        let sleeper = RecordingSleeper::new();
        let mut invocations = 0;
        Retrier::with_sleeper(&sleeper).retry(
            || invocations += 1,
            |_| true,
            vec![5, 10, 15],
        );
        assert_eq!(invocations, 4);
        assert_eq!(sleeper.slept(), millis(&[0, 5, 10, 15]));
    }

    #[test]
    fn stops_on_first_accepted_result() {
        let sleeper = RecordingSleeper::new();
        let mut invocations = 0;
        let out = Retrier::with_sleeper(&sleeper).retry(
            || {
                invocations += 1;
                42
            },
            |_| false,
            vec![500, 500, 500],
        );
        assert_eq!(out, 42);
        assert_eq!(invocations, 1);
        assert_eq!(sleeper.slept(), millis(&[0]));
    }

    #[test]
    fn exhaustion_returns_last_result_even_when_predicate_wants_more() {
        let sleeper = RecordingSleeper::new();
        let mut attempt = 0;
        let out = Retrier::with_sleeper(&sleeper).retry(
            || {
                attempt += 1;
                attempt
            },
            |_| true,
            vec![1, 1],
        );
        assert_eq!(out, 3);
    }

    #[test]
    fn ranges_work_as_delay_sequences() {
        let sleeper = RecordingSleeper::new();
        Retrier::with_sleeper(&sleeper).retry(|| (), |_| true, 1..4u64);
        assert_eq!(sleeper.slept(), millis(&[0, 1, 2, 3]));
    }

    #[test]
    fn accumulator_is_threaded_through_attempts() {
        let sleeper = RecordingSleeper::new();
        let mut calls = 0;
        let (result, acc) = Retrier::with_sleeper(&sleeper).retry_with_acc(
            |acc: u32| {
                calls += 1;
                if calls <= 5 {
                    (Err("not yet"), acc + 1)
                } else {
                    (Ok("done"), acc + 1)
                }
            },
            |result, _| result.is_err(),
            0,
            std::iter::repeat(1u64),
        );
        assert_eq!(result, Ok("done"));
        assert_eq!(acc, 6);
        assert_eq!(sleeper.slept(), millis(&[0, 1, 1, 1, 1, 1]));
    }

    #[test]
    fn accumulator_exhaustion_returns_last_pair() {
        let (result, acc) = Retrier::with_sleeper(crate::NoopSleeper).retry_with_acc(
            |acc: u32| (acc * 2, acc + 1),
            |_, _| true,
            0,
            vec![1],
        );
        // Two attempts: acc went 0 -> 1 -> 2, last result saw acc == 1.
        assert_eq!(result, 2);
        assert_eq!(acc, 2);
    }

    #[test]
    fn deterministic_inputs_give_deterministic_runs() {
        let run = || {
            let sleeper = RecordingSleeper::new();
            let mut attempt = 0;
            let out = Retrier::with_sleeper(&sleeper).retry(
                || {
                    attempt += 1;
                    attempt
                },
                |n| *n < 3,
                crate::LinearBackoff::new(10, 5.0).take(10),
            );
            (out, sleeper.slept())
        };
        assert_eq!(run(), run());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn operation_panic_unwinds_through_the_engine() {
        Retrier::with_sleeper(crate::NoopSleeper).retry(
            || panic!("boom"),
            |_: &()| true,
            vec![1, 2, 3],
        );
    }
}
