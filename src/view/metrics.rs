use rand::Rng;

use crate::domain::{Branch, HealthBand};

/// Compiled-in per-branch health scores for the dashboard.
const BRANCH_HEALTH: [(Branch, u8); 8] = [
    (Branch::Cse, 85),
    (Branch::Ece, 72),
    (Branch::Me, 68),
    (Branch::Ce, 45),
    (Branch::It, 78),
    (Branch::Ee, 52),
    (Branch::Bca, 91),
    (Branch::Mca, 63),
];

/// Dashboard card for one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchSnapshot {
    /// The branch.
    pub branch: Branch,
    /// Health score for the branch, 0-100.
    pub health: u8,
    /// Displayed resource count.
    pub resources: u32,
    /// Displayed claimed count.
    pub claimed: u32,
}

impl BranchSnapshot {
    /// Qualitative band for the branch's health.
    #[must_use]
    pub const fn band(&self) -> HealthBand {
        HealthBand::from_score(self.health)
    }

    /// Whether the dashboard should flag this branch as needing activity.
    #[must_use]
    pub const fn needs_activity(&self) -> bool {
        self.health < 50
    }
}

/// Health score for one branch.
#[must_use]
pub fn branch_health(branch: Branch) -> u8 {
    BRANCH_HEALTH
        .iter()
        .find(|(b, _)| *b == branch)
        .map_or(0, |(_, health)| *health)
}

/// Builds dashboard cards for every branch, or a single branch when
/// `only` is given.
///
/// The resource and claimed counts are decorative and randomized, as on
/// the platform this models; the randomness source is supplied by the
/// caller so tests can fix the seed.
pub fn branch_snapshots<R: Rng>(only: Option<Branch>, rng: &mut R) -> Vec<BranchSnapshot> {
    Branch::ALL
        .into_iter()
        .filter(|branch| only.is_none_or(|b| b == *branch))
        .map(|branch| BranchSnapshot {
            branch,
            health: branch_health(branch),
            resources: rng.gen_range(5..25),
            claimed: rng.gen_range(3..18),
        })
        .collect()
}
