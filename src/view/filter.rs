use crate::domain::{Branch, Resource, Semester, Suggestion};

/// Criteria for narrowing the resource list.
///
/// `None` in any field means "all". The search term matches
/// case-insensitively against title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Restrict to one branch.
    pub branch: Option<Branch>,
    /// Restrict to one semester.
    pub semester: Option<Semester>,
    /// Substring to look for in title or description.
    pub search: Option<String>,
}

impl ResourceFilter {
    /// Whether a resource passes the filter.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        let branch_ok = self.branch.is_none_or(|b| resource.branch == b);
        let semester_ok = self.semester.is_none_or(|s| resource.semester == s);
        let search_ok = self.search.as_ref().is_none_or(|term| {
            let term = term.to_lowercase();
            resource.title.to_lowercase().contains(&term)
                || resource.description.to_lowercase().contains(&term)
        });
        branch_ok && semester_ok && search_ok
    }

    /// Applies the filter, preserving collection order.
    #[must_use]
    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Criteria for narrowing the suggestion board.
///
/// Suggestions are filtered by the author's branch and by the semester
/// the advice targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionFilter {
    /// Restrict to one branch.
    pub branch: Option<Branch>,
    /// Restrict to advice aimed at one semester.
    pub target_semester: Option<Semester>,
}

impl SuggestionFilter {
    /// Whether a suggestion passes the filter.
    #[must_use]
    pub fn matches(&self, suggestion: &Suggestion) -> bool {
        self.branch.is_none_or(|b| suggestion.branch == b)
            && self
                .target_semester
                .is_none_or(|s| suggestion.target_semester == s)
    }

    /// Applies the filter, preserving collection order.
    #[must_use]
    pub fn apply<'a>(&self, suggestions: &'a [Suggestion]) -> Vec<&'a Suggestion> {
        suggestions.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::Listing;

    fn resource(title: &str, description: &str, branch: Branch, semester: u8) -> Resource {
        Resource {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: description.to_string(),
            branch,
            semester: Semester::new(semester).unwrap(),
            listing: Listing::Donate,
            offered_by: "A".to_string(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            claimed_by: None,
            motivational_message: String::new(),
            handover_instructions: String::new(),
            contact_info: String::new(),
            pages: None,
            points: 5,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let resources = vec![
            resource("Mini Drafter", "", Branch::Cse, 1),
            resource("Lab Manual", "", Branch::Ece, 4),
        ];
        let filter = ResourceFilter::default();
        assert_eq!(filter.apply(&resources).len(), 2);
    }

    #[test]
    fn branch_and_semester_narrow_the_list() {
        let resources = vec![
            resource("Mini Drafter", "", Branch::Cse, 1),
            resource("Mini Drafter", "", Branch::Ece, 1),
            resource("Lab Manual", "", Branch::Cse, 4),
        ];
        let filter = ResourceFilter {
            branch: Some(Branch::Cse),
            semester: Some(Semester::new(1).unwrap()),
            search: None,
        };
        let matched = filter.apply(&resources);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Mini Drafter");
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let resources = vec![
            resource("Mini Drafter", "with accessories", Branch::Cse, 1),
            resource("Maths Textbook", "B.S. Grewal, solved examples", Branch::Cse, 1),
        ];
        let by_title = ResourceFilter {
            search: Some("DRAFTER".to_string()),
            ..ResourceFilter::default()
        };
        assert_eq!(by_title.apply(&resources).len(), 1);

        let by_description = ResourceFilter {
            search: Some("grewal".to_string()),
            ..ResourceFilter::default()
        };
        assert_eq!(by_description.apply(&resources).len(), 1);
        assert_eq!(by_description.apply(&resources)[0].title, "Maths Textbook");
    }

    #[test]
    fn suggestion_filter_uses_target_semester() {
        let suggestion = Suggestion {
            id: Uuid::now_v7(),
            message: "Build projects early".to_string(),
            author: "Arjun Singh".to_string(),
            branch: Branch::Cse,
            semester: Semester::new(6).unwrap(),
            target_semester: Semester::new(3).unwrap(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            likes: 0,
        };

        let on_target = SuggestionFilter {
            branch: None,
            target_semester: Some(Semester::new(3).unwrap()),
        };
        assert!(on_target.matches(&suggestion));

        // The author's own semester does not make the advice match.
        let off_target = SuggestionFilter {
            branch: None,
            target_semester: Some(Semester::new(6).unwrap()),
        };
        assert!(!off_target.matches(&suggestion));
    }
}
