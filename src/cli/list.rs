use clap::{Parser, ValueEnum};
use shelfshare::{
    domain::{Branch, Semester},
    store::{Clock, CommunityStore},
    view::{ResourceFilter, SuggestionFilter, group_by_title, groups, partition_requests},
};
use tracing::instrument;

use super::{parse_branch, parse_semester, terminal::Colorize};

/// Command arguments for `shelf list`.
#[derive(Debug, Parser)]
#[command(about = "List resources, suggestions or requests with filters")]
pub struct List {
    /// What to list (default: resources).
    #[arg(long, value_enum, default_value_t)]
    view: View,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Filter by branch (case-insensitive).
    #[arg(long, short, value_parser = parse_branch)]
    branch: Option<Branch>,

    /// Filter by semester.
    #[arg(long, short, value_parser = parse_semester)]
    semester: Option<Semester>,

    /// Case-insensitive substring match against title and description.
    #[arg(long)]
    contains: Option<String>,

    /// For suggestions: filter by the semester the advice targets.
    #[arg(long, value_parser = parse_semester)]
    target: Option<Semester>,
}

/// What the listing shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum View {
    /// Every resource, most recent first.
    #[default]
    Resources,
    /// Resources grouped by title, most available first.
    Grouped,
    /// The suggestion board.
    Suggestions,
    /// The request board, split into pending and fulfilled.
    Requests,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run<C: Clock>(self, store: &CommunityStore<C>) -> anyhow::Result<()> {
        match self.view {
            View::Resources => self.run_resources(store),
            View::Grouped => self.run_grouped(store),
            View::Suggestions => self.run_suggestions(store),
            View::Requests => self.run_requests(store),
        }
    }

    fn resource_filter(&self) -> ResourceFilter {
        ResourceFilter {
            branch: self.branch,
            semester: self.semester,
            search: self.contains.clone(),
        }
    }

    fn run_resources(&self, store: &CommunityStore<impl Clock>) -> anyhow::Result<()> {
        let matched = self.resource_filter().apply(store.resources());

        if matched.is_empty() {
            println!("No resources matched.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&matched)?);
            }
            OutputFormat::Table => {
                println!(
                    "{:<4} {:<40} {:<8} {:<4} {:<8} Status",
                    "#", "Title", "Branch", "Sem", "Price"
                );
                println!("{}", "─".repeat(76).dim());
                for (position, resource) in matched.iter().enumerate() {
                    let price = resource
                        .listing
                        .price()
                        .map_or_else(|| "free".to_string(), |p| format!("₹{p}"));
                    let status = match &resource.claimed_by {
                        Some(claimant) => format!("claimed by {claimant}"),
                        None => "available".to_string(),
                    };
                    println!(
                        "{:<4} {:<40} {:<8} {:<4} {:<8} {}",
                        position + 1,
                        truncated(&resource.title, 40),
                        resource.branch.as_str(),
                        resource.semester,
                        price,
                        status
                    );
                }
            }
        }
        Ok(())
    }

    fn run_grouped(&self, store: &CommunityStore<impl Clock>) -> anyhow::Result<()> {
        let grouped = group_by_title(store.resources());
        let grouped: Vec<_> = grouped
            .into_iter()
            .filter(|group| {
                let filter = self.resource_filter();
                group.resources.iter().any(|r| filter.matches(r))
            })
            .collect();

        if grouped.is_empty() {
            println!("No resources matched.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                use serde_json::json;

                let output: Vec<_> = grouped
                    .iter()
                    .map(|group| {
                        json!({
                            "title": group.title,
                            "copies": group.resources.len(),
                            "available": group.available,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                println!("{:<40} {:<8} Available", "Title", "Copies");
                println!("{}", "─".repeat(60).dim());
                for group in &grouped {
                    println!(
                        "{:<40} {:<8} {}",
                        truncated(group.title, 40),
                        group.resources.len(),
                        group.available
                    );
                }
                println!();
                println!("Total available: {}", groups::total_available(&grouped));
            }
        }
        Ok(())
    }

    fn run_suggestions(&self, store: &CommunityStore<impl Clock>) -> anyhow::Result<()> {
        let filter = SuggestionFilter {
            branch: self.branch,
            target_semester: self.target,
        };
        let matched = filter.apply(store.suggestions());

        if matched.is_empty() {
            println!("No suggestions matched.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&matched)?);
            }
            OutputFormat::Table => {
                for (position, suggestion) in matched.iter().enumerate() {
                    println!(
                        "{:<4} {} {}",
                        position + 1,
                        suggestion.message,
                        format!("({} likes)", suggestion.likes).dim()
                    );
                    println!(
                        "     {}",
                        format!(
                            "— {} ({}, sem {}) for semester {}",
                            suggestion.author,
                            suggestion.branch,
                            suggestion.semester,
                            suggestion.target_semester
                        )
                        .dim()
                    );
                }
            }
        }
        Ok(())
    }

    fn run_requests(&self, store: &CommunityStore<impl Clock>) -> anyhow::Result<()> {
        let board = partition_requests(store.requests(), self.branch);

        match self.output {
            OutputFormat::Json => {
                use serde_json::json;

                let output = json!({
                    "pending": board.pending,
                    "fulfilled": board.fulfilled,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                // Positions refer to the full board, so they stay valid
                // as arguments to 'shelf fulfill'.
                let position_of = |id| {
                    store
                        .requests()
                        .iter()
                        .position(|r| r.id == id)
                        .map_or(0, |i| i + 1)
                };

                println!("Pending ({})", board.pending.len());
                println!("{}", "─".repeat(40).dim());
                for request in &board.pending {
                    println!(
                        "  {:<4} {} {}",
                        position_of(request.id),
                        request.title,
                        format!(
                            "— {} ({}, sem {})",
                            request.requested_by, request.branch, request.semester
                        )
                        .dim()
                    );
                }

                println!();
                println!("Fulfilled ({})", board.fulfilled.len());
                println!("{}", "─".repeat(40).dim());
                for request in &board.fulfilled {
                    println!("  {:<4} {} ✅", position_of(request.id), request.title);
                }
            }
        }
        Ok(())
    }
}

fn truncated(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
