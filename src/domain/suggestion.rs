use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Branch, Semester};

/// A peer tip aimed at students of a particular semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Opaque unique identifier, stamped at creation.
    pub id: Uuid,
    /// The advice itself.
    pub message: String,
    /// Display name of the author. Free text, not a roster key.
    pub author: String,
    /// The author's branch.
    pub branch: Branch,
    /// The author's semester.
    pub semester: Semester,
    /// The semester the advice is aimed at.
    pub target_semester: Semester,
    /// Date the suggestion was posted.
    pub date_added: NaiveDate,
    /// Like count. Monotonically non-decreasing; repeat likes from the
    /// same visitor are not deduplicated.
    pub likes: u32,
}

/// Input record for posting a suggestion.
///
/// The store stamps the id, date and initial like count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSuggestion {
    /// The advice itself.
    pub message: String,
    /// Display name of the author.
    pub author: String,
    /// The author's branch.
    pub branch: Branch,
    /// The author's semester.
    pub semester: Semester,
    /// The semester the advice is aimed at.
    pub target_semester: Semester,
}
