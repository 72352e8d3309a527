use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Resource;

/// Kilograms of paper that roughly correspond to one tree.
const KG_PER_TREE: f64 = 17.0;

/// Kilograms of CO2 avoided per kilogram of paper reused.
const CO2_PER_KG: f64 = 3.3;

/// Aggregate platform statistics.
///
/// The totals, money saved and environmental impact are a pure function
/// of the resource collection and are recomputed after every mutation;
/// this record holds no independent authority over them. The health
/// score and last-activity date are the only stored inputs that carry
/// forward between mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Total number of resources ever listed.
    pub total_resources: usize,
    /// Number of resources that have been claimed.
    pub total_claimed: usize,
    /// Sum of prices over claimed sell-type resources, in rupees.
    pub money_saved: u32,
    /// Sum of per-resource paper credit over claimed resources, in kg.
    pub environmental_impact: f64,
    /// Date of the most recent mutation across all collections.
    pub last_activity: NaiveDate,
    /// Stored community-health score, 0-100.
    ///
    /// The displayed score additionally applies time decay and a
    /// recent-activity boost; see [`super::health`].
    pub community_health: u8,
}

impl PlatformStats {
    /// Derives the resource-dependent fields from the collection,
    /// carrying the health score and last-activity date forward.
    #[must_use]
    pub fn derived_from(resources: &[Resource], last_activity: NaiveDate, health: u8) -> Self {
        let claimed = resources.iter().filter(|r| r.is_claimed());
        Self {
            total_resources: resources.len(),
            total_claimed: claimed.clone().count(),
            money_saved: claimed
                .clone()
                .filter_map(|r| r.listing.price())
                .sum(),
            environmental_impact: claimed.map(Resource::impact_kg).sum(),
            last_activity,
            community_health: health,
        }
    }

    /// Fraction of listed resources that have been claimed, 0.0-1.0.
    ///
    /// Defined as 0 when nothing has been listed yet.
    #[must_use]
    pub fn claim_rate(&self) -> f64 {
        if self.total_resources == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.total_claimed as f64 / self.total_resources as f64
            }
        }
    }

    /// Rough number of trees saved by the paper kept in circulation.
    #[must_use]
    pub fn trees_equivalent(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (self.environmental_impact / KG_PER_TREE).floor() as u32
        }
    }

    /// Rough kilograms of CO2 avoided.
    #[must_use]
    pub fn carbon_saved_kg(&self) -> f64 {
        self.environmental_impact * CO2_PER_KG
    }
}
