//! Campus resource-sharing community board.
//!
//! Students offer study materials (donated or sold), claim what they
//! need, post advice for juniors, and request what they cannot find.
//! [`store::CommunityStore`] holds the state; [`view`] derives the
//! dashboard aggregates from it.

pub mod domain;
pub use domain::{Config, HealthTuning, PlatformStats};

pub mod seed;

pub mod store;
pub use store::{ClaimOutcome, CommunityStore, FulfillOutcome};

pub mod view;
