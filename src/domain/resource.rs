use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Branch, Semester};

/// Point value awarded for a resource whose title has no entry in the
/// compiled-in table.
pub const DEFAULT_POINTS: u32 = 5;

/// Compiled-in point values keyed by exact resource title.
const RESOURCE_POINTS: [(&str, u32); 9] = [
    ("Mini Drafter", 5),
    ("Sheet Holder", 3),
    ("Higher Engineering Mathematics", 10),
    ("Data Structures & Algorithms Textbook", 10),
    ("Digital Electronics Lab Manual", 8),
    ("PYQS - Previous Year Question Papers", 15),
    ("Concrete Technology Reference Book", 10),
    ("Java Programming Notes", 8),
    ("Engineering Graphics Drafting Set", 5),
];

/// Looks up the point value for a resource title.
///
/// Unknown titles fall back to [`DEFAULT_POINTS`].
#[must_use]
pub fn points_for_title(title: &str) -> u32 {
    RESOURCE_POINTS
        .iter()
        .find(|(known, _)| *known == title)
        .map_or(DEFAULT_POINTS, |(_, points)| *points)
}

/// How a resource is being offered.
///
/// A price exists exactly when the resource is for sale, so the invariant
/// "price is defined iff the mode is sell" is carried by the type rather
/// than checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Listing {
    /// Given away for free.
    Donate,
    /// Sold at a fixed price (rupees).
    Sell {
        /// Asking price in rupees. Always positive.
        price: u32,
    },
}

impl Listing {
    /// The asking price, if this resource is for sale.
    #[must_use]
    pub const fn price(self) -> Option<u32> {
        match self {
            Self::Donate => None,
            Self::Sell { price } => Some(price),
        }
    }
}

/// A study material offered to the community.
///
/// Resources transition exactly once from unclaimed to claimed and are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque unique identifier, stamped at creation.
    pub id: Uuid,
    /// Title of the resource. Grouping treats titles case-insensitively.
    pub title: String,
    /// Free-text description of condition and contents.
    pub description: String,
    /// Branch the resource is relevant to.
    pub branch: Branch,
    /// Semester the resource is relevant to.
    pub semester: Semester,
    /// Whether the resource is donated or sold.
    pub listing: Listing,
    /// Display name of the offering student. Free text, not a roster key.
    pub offered_by: String,
    /// Date the resource was added.
    pub date_added: NaiveDate,
    /// Display name of the claiming student, set exactly once.
    ///
    /// `None` means unclaimed. There is no "return" operation, so this
    /// never transitions back to `None`.
    pub claimed_by: Option<String>,
    /// Encouragement from the offering student.
    pub motivational_message: String,
    /// How to collect the resource.
    pub handover_instructions: String,
    /// Contact details for the offering student.
    pub contact_info: String,
    /// Page count, when known. Drives the environmental-impact credit.
    pub pages: Option<u32>,
    /// Points awarded when the resource is claimed.
    pub points: u32,
}

impl Resource {
    /// Whether the resource has been claimed.
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }

    /// Environmental credit for this resource in kilograms.
    ///
    /// One kilogram per thousand pages; resources without a page count
    /// contribute nothing.
    #[must_use]
    pub fn impact_kg(&self) -> f64 {
        self.pages.map_or(0.0, |pages| f64::from(pages) / 1000.0)
    }
}

/// Input record for adding a resource.
///
/// The store stamps the id, creation date and claim state itself, so the
/// caller supplies everything else. Form-level validation happens before
/// this record is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    /// Title of the resource.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Branch the resource is relevant to.
    pub branch: Branch,
    /// Semester the resource is relevant to.
    pub semester: Semester,
    /// Donate or sell.
    pub listing: Listing,
    /// Display name of the offering student.
    pub offered_by: String,
    /// Encouragement for the next owner.
    pub motivational_message: String,
    /// How to collect the resource.
    pub handover_instructions: String,
    /// Contact details.
    pub contact_info: String,
    /// Page count, when known.
    pub pages: Option<u32>,
    /// Explicit point value. When `None`, the compiled-in title table
    /// decides (falling back to [`DEFAULT_POINTS`]).
    pub points: Option<u32>,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Mini Drafter", 5)]
    #[test_case("PYQS - Previous Year Question Papers", 15)]
    #[test_case("Some Unknown Thing", DEFAULT_POINTS)]
    fn point_lookup(title: &str, expected: u32) {
        assert_eq!(points_for_title(title), expected);
    }

    #[test]
    fn price_exists_only_for_sell() {
        assert_eq!(Listing::Donate.price(), None);
        assert_eq!(Listing::Sell { price: 200 }.price(), Some(200));
    }

    #[test]
    fn impact_requires_page_count() {
        let resource = Resource {
            id: Uuid::now_v7(),
            title: "Book".to_string(),
            description: String::new(),
            branch: Branch::Cse,
            semester: Semester::new(1).unwrap(),
            listing: Listing::Donate,
            offered_by: "A".to_string(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            claimed_by: None,
            motivational_message: String::new(),
            handover_instructions: String::new(),
            contact_info: String::new(),
            pages: None,
            points: DEFAULT_POINTS,
        };
        assert!((resource.impact_kg() - 0.0).abs() < f64::EPSILON);

        let with_pages = Resource {
            pages: Some(500),
            ..resource
        };
        assert!((with_pages.impact_kg() - 0.5).abs() < f64::EPSILON);
    }
}
