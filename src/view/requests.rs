use crate::domain::{Branch, ResourceRequest};

/// The request board split into pending and fulfilled sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBoard<'a> {
    /// Requests still waiting, in collection order.
    pub pending: Vec<&'a ResourceRequest>,
    /// Requests already fulfilled, in collection order.
    pub fulfilled: Vec<&'a ResourceRequest>,
}

/// Partitions requests into pending and fulfilled, optionally limited to
/// one branch.
#[must_use]
pub fn partition_requests(
    requests: &[ResourceRequest],
    branch: Option<Branch>,
) -> RequestBoard<'_> {
    let (fulfilled, pending) = requests
        .iter()
        .filter(|r| branch.is_none_or(|b| r.branch == b))
        .partition(|r| r.fulfilled);
    RequestBoard { pending, fulfilled }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::Semester;

    fn request(title: &str, branch: Branch, fulfilled: bool) -> ResourceRequest {
        ResourceRequest {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: String::new(),
            branch,
            semester: Semester::new(3).unwrap(),
            requested_by: "Mandeep Singh".to_string(),
            date_requested: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            fulfilled,
        }
    }

    #[test]
    fn partitions_by_fulfilment() {
        let requests = vec![
            request("Drafter", Branch::Cse, false),
            request("Lab Manual", Branch::Cse, true),
            request("Textbook", Branch::Ece, false),
        ];
        let board = partition_requests(&requests, None);
        assert_eq!(board.pending.len(), 2);
        assert_eq!(board.fulfilled.len(), 1);
        assert_eq!(board.fulfilled[0].title, "Lab Manual");
    }

    #[test]
    fn branch_filter_applies_before_partitioning() {
        let requests = vec![
            request("Drafter", Branch::Cse, false),
            request("Textbook", Branch::Ece, false),
        ];
        let board = partition_requests(&requests, Some(Branch::Ece));
        assert_eq!(board.pending.len(), 1);
        assert_eq!(board.pending[0].title, "Textbook");
        assert!(board.fulfilled.is_empty());
    }
}
