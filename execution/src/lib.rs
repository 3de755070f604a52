//! Wheelhouse execution layer.
//!
//! This crate contains the deterministic simulation logic: the wheel, the
//! randomness seam, and the betting-agent state machine used by the simulator.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside execution.
//! - Do not use ambient randomness; every draw goes through an injected
//!   [`Spinner`], and generators are derived from an explicit seed and stream.
//! - A run with the same seed, stream, and trial order must produce identical
//!   statistics.

pub mod agent;
pub mod spin;
pub mod wheel;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use agent::{BetError, BettingAgent, CASHBACK_RATE};
pub use spin::{trial_rng, Spinner};
pub use wheel::{Wheel, POCKETS};
