use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Branch, Semester};

/// A request for a resource nobody has listed yet.
///
/// Requests transition exactly once from pending to fulfilled and are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Opaque unique identifier, stamped at creation.
    pub id: Uuid,
    /// Title of the resource being sought.
    pub title: String,
    /// Free-text description of what is needed.
    pub description: String,
    /// Branch the request is relevant to.
    pub branch: Branch,
    /// Semester the request is relevant to.
    pub semester: Semester,
    /// Display name of the requesting student. Free text, not a roster key.
    pub requested_by: String,
    /// Date the request was posted.
    pub date_requested: NaiveDate,
    /// Whether the request has been fulfilled. One-way transition.
    pub fulfilled: bool,
}

/// Input record for posting a request.
///
/// The store stamps the id, date and fulfilment flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    /// Title of the resource being sought.
    pub title: String,
    /// Free-text description of what is needed.
    pub description: String,
    /// Branch the request is relevant to.
    pub branch: Branch,
    /// Semester the request is relevant to.
    pub semester: Semester,
    /// Display name of the requesting student.
    pub requested_by: String,
}
