//! Synchronous retry engine driven by composable delay sequences.
//!
//! A delay sequence is any `IntoIterator<Item = u64>` of millisecond
//! values: a `Vec`, a range, one of the infinite generators in
//! [delays](crate::delays), or any stack of transforms over them.
//! [retry](crate::retry()) pulls the sequence lazily, sleeping before each
//! attempt and asking your predicate whether the last result warrants
//! another one.
//!
//! ```no_run
//! use retry_seq::{cap, jitter, retry, ExponentialBackoff};
//!
//! let result = retry(
//!     || std::fs::read_to_string("/some/flaky/mount/data"),
//!     |result| result.is_err(),
//!     cap(jitter(ExponentialBackoff::default()), 1_000).take(8),
//! );
//! ```
//!
//! The engine never classifies outcomes on its own: whatever the operation
//! returns is handed to the predicate as-is, and panics unwind through the
//! loop uncaught. Callers that want exception-style retries must catch
//! inside the operation and fold the failure into the returned value.
//!
//! Waiting goes through the [Sleeper](crate::Sleeper) capability,
//! injectable via [Retrier::with_sleeper](crate::Retrier::with_sleeper);
//! tests swap in [RecordingSleeper](crate::RecordingSleeper) or
//! [NoopSleeper](crate::NoopSleeper) to run schedules without real time.

pub mod delays;
mod retry;
pub mod sleeper;

pub use delays::{
    cap, expiry, jitter, randomize, Cap, ConstantBackoff, Expiry, ExponentialBackoff, Jitter,
    LinearBackoff, Randomize,
};
pub use retry::{retry, retry_with_acc, Retrier};
pub use sleeper::{NoopSleeper, RecordingSleeper, Sleeper, ThreadSleeper};
