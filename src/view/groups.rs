use std::collections::HashMap;

use crate::domain::Resource;

/// Resources sharing a title, compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGroup<'a> {
    /// Display title, taken from the first member encountered.
    pub title: &'a str,
    /// Member resources, in collection order.
    pub resources: Vec<&'a Resource>,
    /// Count of members that are still unclaimed.
    pub available: usize,
}

/// Groups resources by case-insensitive exact title match.
///
/// Groups are ordered by unclaimed count descending; groups with equal
/// counts keep the order in which their titles first appear in the
/// input.
#[must_use]
pub fn group_by_title(resources: &[Resource]) -> Vec<ResourceGroup<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ResourceGroup<'_>> = Vec::new();

    for resource in resources {
        let key = resource.title.to_lowercase();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ResourceGroup {
                title: &resource.title,
                resources: Vec::new(),
                available: 0,
            });
            groups.len() - 1
        });
        groups[slot].resources.push(resource);
        if !resource.is_claimed() {
            groups[slot].available += 1;
        }
    }

    // Stable sort keeps first-seen order on ties.
    groups.sort_by(|a, b| b.available.cmp(&a.available));
    groups
}

/// Total unclaimed resources across all groups.
#[must_use]
pub fn total_available(groups: &[ResourceGroup<'_>]) -> usize {
    groups.iter().map(|g| g.available).sum()
}
