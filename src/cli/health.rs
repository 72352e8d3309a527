use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use shelfshare::{
    domain::{Branch, HealthBand},
    store::{Clock, CommunityStore},
    view::branch_snapshots,
};
use tracing::instrument;

use super::{parse_branch, terminal::{Colorize, paint_health}};

#[derive(Debug, Parser)]
#[command(about = "Show community and per-branch health")]
pub struct Health {
    /// Show a single branch instead of all of them.
    #[arg(long, short, value_parser = parse_branch)]
    branch: Option<Branch>,

    /// Seed for the decorative branch activity counts, for reproducible
    /// output.
    #[arg(long)]
    seed: Option<u64>,
}

impl Health {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run<C: Clock>(self, store: &CommunityStore<C>) -> anyhow::Result<()> {
        let score = store.current_health();
        println!(
            "Community health: {} — {}",
            paint_health(score),
            HealthBand::from_score(score).message()
        );
        println!();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snapshots = branch_snapshots(self.branch, &mut rng);

        println!(
            "{:<8} {:<8} {:<10} {:<8} Status",
            "Branch", "Health", "Resources", "Claimed"
        );
        println!("{}", "─".repeat(56).dim());
        for snapshot in &snapshots {
            let status = if snapshot.needs_activity() {
                "needs activity ⚠️".warning()
            } else {
                snapshot.band().message().to_string()
            };
            println!(
                "{:<8} {:<8} {:<10} {:<8} {}",
                snapshot.branch.as_str(),
                paint_health(snapshot.health),
                snapshot.resources,
                snapshot.claimed,
                status
            );
        }
        Ok(())
    }
}
