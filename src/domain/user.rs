use serde::{Deserialize, Serialize};

use super::{Branch, Semester};

/// A roster entry used for leaderboard display.
///
/// The roster is seeded independently of the resource collection:
/// resource and suggestion authorship is a free-text display name, not a
/// key into this roster, and store mutations do not update these counts.
/// This decoupling is deliberate and mirrors the platform it models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Academic branch.
    pub branch: Branch,
    /// Current semester.
    pub semester: Semester,
    /// Count of resources this user has shared.
    pub resources_shared: u32,
    /// Count of resources this user has claimed.
    pub resources_claimed: u32,
    /// Cumulative rupee value of resources claimed from this user.
    pub total_value: u32,
    /// Cumulative point score.
    pub points: u32,
}
