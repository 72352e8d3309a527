//! Pure view derivations over a store snapshot.
//!
//! Every function here takes borrowed state and returns a view model,
//! independent of any rendering cycle, so each derivation is directly
//! unit-testable.

/// Branch and search filtering.
pub mod filter;
pub use filter::{ResourceFilter, SuggestionFilter};

/// Case-insensitive title grouping.
pub mod groups;
pub use groups::{ResourceGroup, group_by_title};

/// Leaderboard rankings.
pub mod leaderboard;
pub use leaderboard::{RankBy, top_users};

/// Per-branch dashboard metrics.
pub mod metrics;
pub use metrics::{BranchSnapshot, branch_snapshots};

/// Request board partitioning.
pub mod requests;
pub use requests::{RequestBoard, partition_requests};
