//! Delay-sequence algebra: leaf generators and transform combinators.
//!
//! Everything here is a plain `Iterator<Item = u64>` over millisecond
//! values, so std adaptors (`take`, `chain`, concrete `Vec`s, ranges)
//! compose freely with the pieces below.

pub mod cap;
pub mod constant;
pub mod expiry;
pub mod exponential;
pub mod jitter;
pub mod linear;

pub use cap::{cap, Cap};
pub use constant::ConstantBackoff;
pub use expiry::{expiry, Expiry};
pub use exponential::ExponentialBackoff;
pub use jitter::{jitter, randomize, Jitter, Randomize};
pub use linear::LinearBackoff;
