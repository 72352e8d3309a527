//! Domain models for the resource-sharing community.
//!
//! This module contains the entity types (resources, users, suggestions,
//! requests), the derived platform statistics, and the community-health
//! derivation.

/// Branch and semester enumerations.
pub mod branch;
pub use branch::{Branch, InvalidSemesterError, Semester, UnknownBranchError};

mod config;
pub use config::Config;

/// Community-health score derivation.
pub mod health;
pub use health::{HealthBand, HealthTuning};

/// Resource requests and their lifecycle.
pub mod request;
pub use request::{NewRequest, ResourceRequest};

/// Shared study materials.
pub mod resource;
pub use resource::{Listing, NewResource, Resource};

/// Derived platform statistics.
pub mod stats;
pub use stats::PlatformStats;

/// Peer tips.
pub mod suggestion;
pub use suggestion::{NewSuggestion, Suggestion};

/// Leaderboard roster entries.
pub mod user;
pub use user::User;
