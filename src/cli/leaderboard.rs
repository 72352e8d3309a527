use clap::{Parser, ValueEnum};
use shelfshare::{
    store::{Clock, CommunityStore},
    view::{RankBy, top_users},
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show the top contributors")]
pub struct Leaderboard {
    /// Metric to rank by (default: shared).
    #[arg(long, value_enum, default_value_t)]
    by: Metric,

    /// How many students to show.
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Ranking metric exposed on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum Metric {
    /// Resources shared.
    #[default]
    Shared,
    /// Resources claimed.
    Claimed,
    /// Cumulative rupee value.
    Value,
    /// Cumulative point score.
    Points,
}

impl From<Metric> for RankBy {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Shared => Self::Shared,
            Metric::Claimed => Self::Claimed,
            Metric::Value => Self::Value,
            Metric::Points => Self::Points,
        }
    }
}

impl Leaderboard {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run<C: Clock>(self, store: &CommunityStore<C>) -> anyhow::Result<()> {
        let ranked = top_users(store.users(), self.by.into(), self.top);

        if ranked.is_empty() {
            println!("Nobody on the leaderboard yet.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            }
            OutputFormat::Table => {
                println!(
                    "{:<4} {:<20} {:<8} {:<8} {:<8} {:<8} Points",
                    "#", "Name", "Branch", "Shared", "Claimed", "Value"
                );
                println!("{}", "─".repeat(68).dim());
                for (rank, user) in ranked.iter().enumerate() {
                    println!(
                        "{:<4} {:<20} {:<8} {:<8} {:<8} ₹{:<7} {}",
                        rank + 1,
                        user.name,
                        user.branch.as_str(),
                        user.resources_shared,
                        user.resources_claimed,
                        user.total_value,
                        user.points
                    );
                }
            }
        }
        Ok(())
    }
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_maps_to_a_ranking() {
        assert_eq!(RankBy::from(Metric::Shared), RankBy::Shared);
        assert_eq!(RankBy::from(Metric::Claimed), RankBy::Claimed);
        assert_eq!(RankBy::from(Metric::Value), RankBy::Value);
        assert_eq!(RankBy::from(Metric::Points), RankBy::Points);
    }
}
