use clap::{Parser, ValueEnum};
use shelfshare::store::{Clock, CommunityStore};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show the sustainability impact summary")]
pub struct Impact {
    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Impact {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run<C: Clock>(self, store: &CommunityStore<C>) -> anyhow::Result<()> {
        let stats = store.stats();

        match self.output {
            OutputFormat::Json => {
                use serde_json::json;

                let output = json!({
                    "resources": {
                        "total": stats.total_resources,
                        "claimed": stats.total_claimed,
                        "claim_rate": stats.claim_rate(),
                    },
                    "money_saved_rupees": stats.money_saved,
                    "paper_reused_kg": stats.environmental_impact,
                    "trees_equivalent": stats.trees_equivalent(),
                    "carbon_saved_kg": stats.carbon_saved_kg(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                println!("Community impact");
                println!("{}", "────────────────".dim());
                println!(
                    "Resources claimed:  {} of {} ({:.0}%)",
                    stats.total_claimed,
                    stats.total_resources,
                    stats.claim_rate() * 100.0
                );
                println!("Money saved:        ₹{}", stats.money_saved);
                println!("Paper reused:       {:.1} kg", stats.environmental_impact);
                println!("Trees equivalent:   {} 🌳", stats.trees_equivalent());
                println!("CO2 avoided:        {:.1} kg", stats.carbon_saved_kg());
            }
        }
        Ok(())
    }
}
