use std::path::PathBuf;

mod health;
mod impact;
mod leaderboard;
mod list;
mod status;
mod terminal;

use chrono::NaiveDate;
use clap::ArgAction;
use health::Health;
use impact::Impact;
use leaderboard::Leaderboard;
use list::List;
use shelfshare::{
    domain::{Branch, Config, HealthTuning, Listing, NewRequest, NewResource, NewSuggestion, Semester},
    seed,
    store::{ClaimOutcome, Clock, CommunityStore, FixedClock, FulfillOutcome, SystemClock},
};
use status::Status;
use tracing::instrument;

/// Parse a branch abbreviation, accepting any casing.
///
/// This is a CLI boundary function; the domain type itself only
/// round-trips the canonical uppercase form.
fn parse_branch(s: &str) -> Result<Branch, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Parse a semester number, rejecting values outside 1..=8.
fn parse_semester(s: &str) -> Result<Semester, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a tuning configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Evaluate health as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let tuning = match &self.config {
            Some(path) => {
                Config::load(path)
                    .map_err(|e| anyhow::anyhow!(e))?
                    .health
            }
            None => HealthTuning::default(),
        };

        let command = self
            .command
            .unwrap_or_else(|| Command::Status(Status::default()));

        match self.today {
            Some(date) => command.run(seed::community(tuning, FixedClock(date))),
            None => command.run(seed::community(tuning, SystemClock)),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show community status (default)
    Status(Status),

    /// List resources, suggestions or requests with filters
    List(List),

    /// Share a resource with the community
    Add(Add),

    /// Claim a listed resource
    Claim(Claim),

    /// Post advice for junior students
    Suggest(Suggest),

    /// Like a posted suggestion
    Like(Like),

    /// Ask the community for a resource
    Request(Request),

    /// Mark a request as fulfilled
    Fulfill(Fulfill),

    /// Show the top contributors
    Leaderboard(Leaderboard),

    /// Show community and branch health
    Health(Health),

    /// Show the sustainability impact summary
    Impact(Impact),
}

impl Command {
    fn run<C: Clock>(self, mut store: CommunityStore<C>) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(&store)?,
            Self::List(command) => command.run(&store)?,
            Self::Add(command) => command.run(&mut store)?,
            Self::Claim(command) => command.run(&mut store)?,
            Self::Suggest(command) => command.run(&mut store)?,
            Self::Like(command) => command.run(&mut store)?,
            Self::Request(command) => command.run(&mut store)?,
            Self::Fulfill(command) => command.run(&mut store)?,
            Self::Leaderboard(command) => command.run(&store)?,
            Self::Health(command) => command.run(&store)?,
            Self::Impact(command) => command.run(&store)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// Title of the resource
    title: String,

    /// Branch the resource is relevant to
    #[arg(long, short, value_parser = parse_branch)]
    branch: Branch,

    /// Semester the resource is relevant to
    #[arg(long, short, value_parser = parse_semester)]
    semester: Semester,

    /// Your display name
    #[arg(long)]
    by: String,

    /// Asking price in rupees; omit to donate
    #[arg(long)]
    price: Option<u32>,

    /// Free-text description of condition and contents
    #[arg(long, short, default_value = "")]
    description: String,

    /// Encouragement for the next owner
    #[arg(long, default_value = "")]
    message: String,

    /// How to collect the resource
    #[arg(long, default_value = "")]
    handover: String,

    /// Contact details
    #[arg(long, default_value = "")]
    contact: String,

    /// Page count, used for the environmental-impact credit
    #[arg(long)]
    pages: Option<u32>,
}

impl Add {
    #[instrument(skip(self, store), fields(title = %self.title))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        let listing = self
            .price
            .map_or(Listing::Donate, |price| Listing::Sell { price });

        let (title, points) = {
            let resource = store.add_resource(NewResource {
                title: self.title,
                description: self.description,
                branch: self.branch,
                semester: self.semester,
                listing,
                offered_by: self.by,
                motivational_message: self.message,
                handover_instructions: self.handover,
                contact_info: self.contact,
                pages: self.pages,
                points: None,
            });
            (resource.title.clone(), resource.points)
        };

        println!(
            "{}",
            format!("Shared '{title}' ({points} points on claim)").success()
        );
        println!(
            "Community health is now {}",
            terminal::paint_health(store.current_health())
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Claim {
    /// Position of the resource on the shelf (1-based, as shown by 'shelf list')
    index: usize,

    /// Your display name
    #[arg(long)]
    by: String,
}

impl Claim {
    #[instrument(skip(store))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        let Some(resource) = store.resources().get(self.index.wrapping_sub(1)) else {
            anyhow::bail!(
                "No resource at position {} (the shelf holds {})",
                self.index,
                store.resources().len()
            );
        };
        let id = resource.id;
        let title = resource.title.clone();

        match store.claim_resource(id, &self.by) {
            ClaimOutcome::Claimed => {
                println!("{}", format!("Claimed '{title}'").success());
                let stats = store.stats();
                println!(
                    "Community savings so far: ₹{}, {:.1} kg of paper reused",
                    stats.money_saved, stats.environmental_impact
                );
            }
            ClaimOutcome::AlreadyClaimed => {
                println!("{}", format!("'{title}' has already been claimed").warning());
            }
            ClaimOutcome::NotFound => {
                unreachable!("id was resolved from the live collection")
            }
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Suggest {
    /// The advice to share
    message: String,

    /// Your display name
    #[arg(long)]
    by: String,

    /// Your branch
    #[arg(long, short, value_parser = parse_branch)]
    branch: Branch,

    /// Your current semester
    #[arg(long, short, value_parser = parse_semester)]
    semester: Semester,

    /// Semester the advice is aimed at
    #[arg(long, short, value_parser = parse_semester)]
    target: Semester,
}

impl Suggest {
    #[instrument(skip(self, store), fields(author = %self.by))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        store.add_suggestion(NewSuggestion {
            message: self.message,
            author: self.by,
            branch: self.branch,
            semester: self.semester,
            target_semester: self.target,
        });

        println!(
            "{}",
            format!("Posted advice for semester {} students", self.target).success()
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Like {
    /// Position of the suggestion on the board (1-based, as shown by
    /// 'shelf list --view suggestions')
    index: usize,
}

impl Like {
    #[instrument(skip(store))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        let Some(suggestion) = store.suggestions().get(self.index.wrapping_sub(1)) else {
            anyhow::bail!(
                "No suggestion at position {} (the board holds {})",
                self.index,
                store.suggestions().len()
            );
        };
        let id = suggestion.id;

        store.like_suggestion(id);
        let likes = store.suggestions()[self.index - 1].likes;
        println!("{}", format!("Liked! The suggestion now has {likes} likes").success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Request {
    /// What you are looking for
    title: String,

    /// Your display name
    #[arg(long)]
    by: String,

    /// Branch the request concerns
    #[arg(long, short, value_parser = parse_branch)]
    branch: Branch,

    /// Semester the request concerns
    #[arg(long, short, value_parser = parse_semester)]
    semester: Semester,

    /// More detail about what you need
    #[arg(long, short, default_value = "")]
    description: String,
}

impl Request {
    #[instrument(skip(self, store), fields(title = %self.title))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        store.add_request(NewRequest {
            title: self.title.clone(),
            description: self.description,
            branch: self.branch,
            semester: self.semester,
            requested_by: self.by,
        });

        println!("{}", format!("Requested '{}'", self.title).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Fulfill {
    /// Position of the request on the board (1-based, as shown by
    /// 'shelf list --view requests')
    index: usize,
}

impl Fulfill {
    #[instrument(skip(store))]
    fn run<C: Clock>(self, store: &mut CommunityStore<C>) -> anyhow::Result<()> {
        use terminal::Colorize;

        let Some(request) = store.requests().get(self.index.wrapping_sub(1)) else {
            anyhow::bail!(
                "No request at position {} (the board holds {})",
                self.index,
                store.requests().len()
            );
        };
        let id = request.id;
        let title = request.title.clone();

        match store.fulfill_request(id) {
            FulfillOutcome::Fulfilled => {
                println!("{}", format!("Marked '{title}' as fulfilled").success());
                println!(
                    "Community health is now {}",
                    terminal::paint_health(store.current_health())
                );
            }
            FulfillOutcome::AlreadyFulfilled => {
                println!("{}", format!("'{title}' was already fulfilled").warning());
            }
            FulfillOutcome::NotFound => {
                unreachable!("id was resolved from the live collection")
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shelfshare::domain::HealthTuning;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn seeded_store() -> CommunityStore<FixedClock> {
        seed::community(HealthTuning::default(), FixedClock(day(15)))
    }

    #[test]
    fn add_run_prepends_and_stamps_points() {
        let mut store = seeded_store();
        let before = store.resources().len();

        let add = Add {
            title: "Sheet Holder".to_string(),
            branch: Branch::Cse,
            semester: Semester::new(1).unwrap(),
            by: "Test Student".to_string(),
            price: Some(40),
            description: String::new(),
            message: String::new(),
            handover: String::new(),
            contact: String::new(),
            pages: None,
        };
        add.run(&mut store).expect("add should succeed");

        assert_eq!(store.resources().len(), before + 1);
        assert_eq!(store.resources()[0].title, "Sheet Holder");
        assert_eq!(store.resources()[0].points, 3);
        assert_eq!(store.resources()[0].listing, Listing::Sell { price: 40 });
    }

    #[test]
    fn claim_run_claims_by_position() {
        let mut store = seeded_store();

        let claim = Claim {
            index: 1,
            by: "Test Student".to_string(),
        };
        claim.run(&mut store).expect("claim should succeed");

        assert_eq!(
            store.resources()[0].claimed_by.as_deref(),
            Some("Test Student")
        );
        assert_eq!(store.stats().total_claimed, 1);
    }

    #[test]
    fn claim_run_rejects_out_of_range_position() {
        let mut store = seeded_store();
        let shelf_size = store.resources().len();

        let claim = Claim {
            index: shelf_size + 1,
            by: "Test Student".to_string(),
        };
        assert!(claim.run(&mut store).is_err());

        let zero = Claim {
            index: 0,
            by: "Test Student".to_string(),
        };
        assert!(zero.run(&mut store).is_err());
    }

    #[test]
    fn like_run_increments_by_position() {
        let mut store = seeded_store();
        let before = store.suggestions()[1].likes;

        Like { index: 2 }.run(&mut store).expect("like should succeed");

        assert_eq!(store.suggestions()[1].likes, before + 1);
    }

    #[test]
    fn fulfill_run_is_one_way() {
        let mut store = seeded_store();

        Fulfill { index: 1 }
            .run(&mut store)
            .expect("fulfill should succeed");
        assert!(store.requests()[0].fulfilled);

        let health = store.stats().community_health;
        Fulfill { index: 1 }
            .run(&mut store)
            .expect("second fulfill reports and succeeds");
        assert_eq!(store.stats().community_health, health);
    }

    #[test]
    fn request_run_prepends_pending_request() {
        let mut store = seeded_store();

        let request = Request {
            title: "Surveying Field Book".to_string(),
            by: "Test Student".to_string(),
            branch: Branch::Ce,
            semester: Semester::new(4).unwrap(),
            description: String::new(),
        };
        request.run(&mut store).expect("request should succeed");

        assert_eq!(store.requests()[0].title, "Surveying Field Book");
        assert!(!store.requests()[0].fulfilled);
    }

    #[test]
    fn suggest_run_posts_with_zero_likes() {
        let mut store = seeded_store();

        let suggest = Suggest {
            message: "Revise PYQs weekly".to_string(),
            by: "Test Student".to_string(),
            branch: Branch::It,
            semester: Semester::new(6).unwrap(),
            target: Semester::new(2).unwrap(),
        };
        suggest.run(&mut store).expect("suggest should succeed");

        assert_eq!(store.suggestions()[0].likes, 0);
        assert_eq!(store.suggestions()[0].message, "Revise PYQs weekly");
    }
}
