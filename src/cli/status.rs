use std::collections::BTreeMap;

use clap::Parser;
use shelfshare::{
    domain::{Branch, HealthBand},
    store::{Clock, CommunityStore},
};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow, paint_health};

#[derive(Debug, Parser, Default)]
#[command(about = "Show shelf counts, request backlog and community health")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run<C: Clock>(self, store: &CommunityStore<C>) -> anyhow::Result<()> {
        let mut counts: BTreeMap<Branch, (usize, usize)> = BTreeMap::new();
        for resource in store.resources() {
            let entry = counts.entry(resource.branch).or_insert((0, 0));
            entry.0 += 1;
            if resource.is_claimed() {
                entry.1 += 1;
            }
        }

        let stats = store.stats();
        let pending = store.requests().iter().filter(|r| !r.fulfilled).count();
        let health = store.current_health();

        if stats.total_resources == 0 {
            println!("The shelf is empty. Share something with 'shelf add'.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                Self::output_json(store, &counts, pending, health)?;
            }
            OutputFormat::Table => {
                if self.quiet {
                    Self::output_quiet(store, pending, health);
                } else {
                    Self::output_table(store, &counts, pending, health);
                }
            }
        }

        Ok(())
    }

    fn output_json(
        store: &CommunityStore<impl Clock>,
        counts: &BTreeMap<Branch, (usize, usize)>,
        pending: usize,
        health: u8,
    ) -> anyhow::Result<()> {
        use serde_json::json;

        let stats = store.stats();
        let branches: Vec<_> = counts
            .iter()
            .map(|(branch, (total, claimed))| {
                json!({
                    "branch": branch.as_str(),
                    "resources": total,
                    "claimed": claimed,
                })
            })
            .collect();

        let output = json!({
            "branches": branches,
            "resources": {
                "total": stats.total_resources,
                "claimed": stats.total_claimed,
            },
            "suggestions": store.suggestions().len(),
            "requests": {
                "pending": pending,
                "fulfilled": store.requests().len() - pending,
            },
            "health": {
                "score": health,
                "band": HealthBand::from_score(health).message(),
            },
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_quiet(store: &CommunityStore<impl Clock>, pending: usize, health: u8) {
        let stats = store.stats();
        println!(
            "resources={} claimed={} suggestions={} pending={} health={}",
            stats.total_resources,
            stats.total_claimed,
            store.suggestions().len(),
            pending,
            health
        );
    }

    fn output_table(
        store: &CommunityStore<impl Clock>,
        counts: &BTreeMap<Branch, (usize, usize)>,
        pending: usize,
        health: u8,
    ) {
        let stats = store.stats();
        let narrow = is_narrow();

        println!("Shelf by branch");
        println!("{}", "───────────────".dim());

        if narrow {
            for (branch, (total, claimed)) in counts {
                println!("{branch}: {total} ({claimed} claimed)");
            }
            println!("Total: {}", stats.total_resources);
        } else {
            println!("{:<8} {:<10} Claimed", "Branch", "Resources");
            for (branch, (total, claimed)) in counts {
                println!("{:<8} {total:<10} {claimed}", branch.as_str());
            }
            println!("Total    {}", stats.total_resources);
        }

        println!();
        println!("Suggestions: {}", store.suggestions().len());

        if pending == 0 {
            println!("Pending requests: {} ✅", "0".success());
        } else {
            println!(
                "Pending requests: {} ⚠️",
                pending.to_string().warning()
            );
            println!("{}", "Run 'shelf list --view requests' to see them.".dim());
        }

        println!();
        println!(
            "Community health: {} — {}",
            paint_health(health),
            HealthBand::from_score(health).message()
        );
    }
}
