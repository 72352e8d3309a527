//! The community state store.
//!
//! [`CommunityStore`] is the single source of truth for the four entity
//! collections and the derived platform statistics. All cross-cutting
//! consistency rules live here: presentation code reads snapshots and
//! calls the mutation operations, never writing fields directly.
//!
//! Every operation is a synchronous, total function over the current
//! state. Invalid input is rejected by the form layer before it reaches
//! the store, so the only defensive rules here are the no-op handling of
//! claims and fulfilments that target unknown or already-finalised ids.

use std::fmt;

use chrono::{NaiveDate, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    HealthTuning, NewRequest, NewResource, NewSuggestion, PlatformStats, Resource,
    ResourceRequest, Suggestion, User, resource::points_for_title,
};

/// Stored health score for a store that starts empty.
const INITIAL_HEALTH: u8 = 70;

/// Source of "today" for the store.
///
/// The health derivation is a pure function of its inputs including the
/// current date, so the wall clock is injected rather than read ambiently.
/// Production code uses [`SystemClock`]; tests supply a fixed date.
pub trait Clock: fmt::Debug {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// [`Clock`] backed by the system time, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// [`Clock`] that always reports the same date. Test helper.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The date reported as today.
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Result of a claim operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The resource was unclaimed and is now claimed.
    Claimed,
    /// The resource was already claimed. Nothing changed.
    AlreadyClaimed,
    /// No resource with that id exists. Nothing changed.
    NotFound,
}

/// Result of a fulfil operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillOutcome {
    /// The request was pending and is now fulfilled.
    Fulfilled,
    /// The request was already fulfilled. Nothing changed.
    AlreadyFulfilled,
    /// No request with that id exists. Nothing changed.
    NotFound,
}

/// The in-memory community state.
///
/// Collections are ordered most-recent-first; that ordering is a display
/// contract, not an accident. Entities are never deleted, and the two
/// one-way flags (`claimed_by`, `fulfilled`) never transition back.
#[derive(Debug)]
pub struct CommunityStore<C = SystemClock> {
    resources: Vec<Resource>,
    users: Vec<User>,
    suggestions: Vec<Suggestion>,
    requests: Vec<ResourceRequest>,
    stats: PlatformStats,
    tuning: HealthTuning,
    clock: C,
}

impl CommunityStore<SystemClock> {
    /// Creates an empty store on the system clock.
    #[must_use]
    pub fn new(tuning: HealthTuning) -> Self {
        Self::with_clock(tuning, SystemClock)
    }
}

impl<C: Clock> CommunityStore<C> {
    /// Creates an empty store with an explicit clock.
    #[must_use]
    pub fn with_clock(tuning: HealthTuning, clock: C) -> Self {
        let today = clock.today();
        Self {
            resources: Vec::new(),
            users: Vec::new(),
            suggestions: Vec::new(),
            requests: Vec::new(),
            stats: PlatformStats::derived_from(&[], today, INITIAL_HEALTH),
            tuning,
            clock,
        }
    }

    /// Creates a store from pre-existing collections.
    ///
    /// The statistics are derived from the collections; only the stored
    /// health score and last-activity date are taken on trust.
    #[must_use]
    pub fn from_parts(
        resources: Vec<Resource>,
        users: Vec<User>,
        suggestions: Vec<Suggestion>,
        requests: Vec<ResourceRequest>,
        last_activity: NaiveDate,
        health: u8,
        tuning: HealthTuning,
        clock: C,
    ) -> Self {
        let stats = PlatformStats::derived_from(&resources, last_activity, health);
        Self {
            resources,
            users,
            suggestions,
            requests,
            stats,
            tuning,
            clock,
        }
    }

    /// The resource collection, most recent first.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The leaderboard roster.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The suggestion board, most recent first.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The request board, most recent first.
    #[must_use]
    pub fn requests(&self) -> &[ResourceRequest] {
        &self.requests
    }

    /// The derived platform statistics.
    ///
    /// Always reflects the most recently applied mutation; there is no
    /// consistency window.
    #[must_use]
    pub const fn stats(&self) -> &PlatformStats {
        &self.stats
    }

    /// The health tuning in effect.
    #[must_use]
    pub const fn tuning(&self) -> &HealthTuning {
        &self.tuning
    }

    /// The displayed community-health score as of today.
    ///
    /// Applies time decay since the last activity and the
    /// recent-activity boost to the stored score. Pure in its inputs:
    /// evaluating it repeatedly on the same date yields the same value.
    #[must_use]
    pub fn current_health(&self) -> u8 {
        let today = self.clock.today();
        self.tuning.current(
            self.stats.community_health,
            self.stats.last_activity,
            self.recent_resource_count(today),
            today,
        )
    }

    /// Adds a resource and returns a reference to the stored entity.
    ///
    /// Stamps a fresh id and today's date, prepends to the collection,
    /// and applies the add bonus to the health score.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub fn add_resource(&mut self, new: NewResource) -> &Resource {
        let today = self.clock.today();
        let points = new
            .points
            .unwrap_or_else(|| points_for_title(&new.title));

        let resource = Resource {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            branch: new.branch,
            semester: new.semester,
            listing: new.listing,
            offered_by: new.offered_by,
            date_added: today,
            claimed_by: None,
            motivational_message: new.motivational_message,
            handover_instructions: new.handover_instructions,
            contact_info: new.contact_info,
            pages: new.pages,
            points,
        };
        debug!(id = %resource.id, "resource added");
        self.resources.insert(0, resource);

        let health = self
            .tuning
            .apply_bonus(self.stats.community_health, self.tuning.add_bonus);
        self.refresh_stats(today, health);
        &self.resources[0]
    }

    /// Claims a resource for the named student.
    ///
    /// Idempotent: claiming an already-claimed or unknown id changes
    /// nothing, so the statistics can never double-count a claim.
    #[instrument(skip(self))]
    pub fn claim_resource(&mut self, id: Uuid, claimed_by: &str) -> ClaimOutcome {
        let Some(resource) = self.resources.iter_mut().find(|r| r.id == id) else {
            return ClaimOutcome::NotFound;
        };
        if resource.is_claimed() {
            return ClaimOutcome::AlreadyClaimed;
        }
        resource.claimed_by = Some(claimed_by.to_string());
        debug!(%id, claimed_by, "resource claimed");

        let today = self.clock.today();
        let health = self
            .tuning
            .apply_bonus(self.stats.community_health, self.tuning.claim_bonus);
        self.refresh_stats(today, health);
        ClaimOutcome::Claimed
    }

    /// Posts a suggestion and returns a reference to the stored entity.
    #[instrument(skip(self, new), fields(author = %new.author))]
    pub fn add_suggestion(&mut self, new: NewSuggestion) -> &Suggestion {
        let today = self.clock.today();
        let suggestion = Suggestion {
            id: Uuid::now_v7(),
            message: new.message,
            author: new.author,
            branch: new.branch,
            semester: new.semester,
            target_semester: new.target_semester,
            date_added: today,
            likes: 0,
        };
        debug!(id = %suggestion.id, "suggestion posted");
        self.suggestions.insert(0, suggestion);

        let health = self
            .tuning
            .apply_bonus(self.stats.community_health, self.tuning.suggestion_bonus);
        self.refresh_stats(today, health);
        &self.suggestions[0]
    }

    /// Likes a suggestion, incrementing its count by exactly one.
    ///
    /// Returns `false` when no suggestion with that id exists. Likes have
    /// no other side effects: the statistics and the activity date are
    /// untouched.
    #[instrument(skip(self))]
    pub fn like_suggestion(&mut self, id: Uuid) -> bool {
        match self.suggestions.iter_mut().find(|s| s.id == id) {
            Some(suggestion) => {
                suggestion.likes += 1;
                true
            }
            None => false,
        }
    }

    /// Posts a request and returns a reference to the stored entity.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub fn add_request(&mut self, new: NewRequest) -> &ResourceRequest {
        let today = self.clock.today();
        let request = ResourceRequest {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            branch: new.branch,
            semester: new.semester,
            requested_by: new.requested_by,
            date_requested: today,
            fulfilled: false,
        };
        debug!(id = %request.id, "request posted");
        self.requests.insert(0, request);

        self.refresh_stats(today, self.stats.community_health);
        &self.requests[0]
    }

    /// Marks a request fulfilled.
    ///
    /// One-way: fulfilling an already-fulfilled or unknown id changes
    /// nothing, so the health bonus cannot be applied twice.
    #[instrument(skip(self))]
    pub fn fulfill_request(&mut self, id: Uuid) -> FulfillOutcome {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == id) else {
            return FulfillOutcome::NotFound;
        };
        if request.fulfilled {
            return FulfillOutcome::AlreadyFulfilled;
        }
        request.fulfilled = true;
        debug!(%id, "request fulfilled");

        let today = self.clock.today();
        let health = self
            .tuning
            .apply_bonus(self.stats.community_health, self.tuning.fulfill_bonus);
        self.refresh_stats(today, health);
        FulfillOutcome::Fulfilled
    }

    /// Count of resources added within the trailing activity window
    /// ending today.
    fn recent_resource_count(&self, today: NaiveDate) -> usize {
        let window = i64::from(self.tuning.window_days);
        self.resources
            .iter()
            .filter(|r| {
                let age = (today - r.date_added).num_days();
                (0..window).contains(&age)
            })
            .count()
    }

    /// Re-derives the statistics from the resource collection.
    fn refresh_stats(&mut self, today: NaiveDate, health: u8) {
        self.stats = PlatformStats::derived_from(&self.resources, today, health);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Branch, Listing, Semester};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn store_at(d: u32) -> CommunityStore<FixedClock> {
        CommunityStore::with_clock(HealthTuning::default(), FixedClock(day(d)))
    }

    fn new_resource(title: &str, listing: Listing, pages: Option<u32>) -> NewResource {
        NewResource {
            title: title.to_string(),
            description: "test".to_string(),
            branch: Branch::Cse,
            semester: Semester::new(1).unwrap(),
            listing,
            offered_by: "Arjun Singh".to_string(),
            motivational_message: String::new(),
            handover_instructions: String::new(),
            contact_info: String::new(),
            pages,
            points: None,
        }
    }

    fn new_request(title: &str) -> NewRequest {
        NewRequest {
            title: title.to_string(),
            description: String::new(),
            branch: Branch::Ece,
            semester: Semester::new(2).unwrap(),
            requested_by: "Priya Sharma".to_string(),
        }
    }

    #[test]
    fn total_resources_tracks_collection_size() {
        let mut store = store_at(15);
        for i in 0..5 {
            store.add_resource(new_resource(&format!("Book {i}"), Listing::Donate, None));
            assert_eq!(store.stats().total_resources, store.resources().len());
        }
    }

    #[test]
    fn resources_are_prepended() {
        let mut store = store_at(15);
        store.add_resource(new_resource("First", Listing::Donate, None));
        store.add_resource(new_resource("Second", Listing::Donate, None));

        assert_eq!(store.resources()[0].title, "Second");
        assert_eq!(store.resources()[1].title, "First");
    }

    #[test]
    fn add_stamps_points_from_title_table() {
        let mut store = store_at(15);
        let id = store
            .add_resource(new_resource(
                "PYQS - Previous Year Question Papers",
                Listing::Donate,
                None,
            ))
            .id;
        let resource = store.resources().iter().find(|r| r.id == id).unwrap();
        assert_eq!(resource.points, 15);

        let other = store
            .add_resource(new_resource("Mystery Item", Listing::Donate, None))
            .id;
        let resource = store.resources().iter().find(|r| r.id == other).unwrap();
        assert_eq!(resource.points, 5);
    }

    #[test]
    fn claim_is_idempotent() {
        let mut store = store_at(15);
        let id = store
            .add_resource(new_resource(
                "Book",
                Listing::Sell { price: 250 },
                Some(500),
            ))
            .id;

        assert_eq!(store.claim_resource(id, "Simran Kaur"), ClaimOutcome::Claimed);
        let after_first = store.stats().clone();
        assert_eq!(after_first.total_claimed, 1);
        assert_eq!(after_first.money_saved, 250);
        assert!((after_first.environmental_impact - 0.5).abs() < f64::EPSILON);

        assert_eq!(
            store.claim_resource(id, "Someone Else"),
            ClaimOutcome::AlreadyClaimed
        );
        assert_eq!(store.stats(), &after_first);
        assert_eq!(
            store.resources()[0].claimed_by.as_deref(),
            Some("Simran Kaur")
        );
    }

    #[test]
    fn claim_of_unknown_id_is_a_no_op() {
        let mut store = store_at(15);
        store.add_resource(new_resource("Book", Listing::Donate, None));
        let before = store.stats().clone();

        assert_eq!(
            store.claim_resource(Uuid::now_v7(), "Nobody"),
            ClaimOutcome::NotFound
        );
        assert_eq!(store.stats(), &before);
    }

    #[test]
    fn money_saved_matches_claimed_sell_prices() {
        let mut store = store_at(15);
        let a = store
            .add_resource(new_resource("A", Listing::Sell { price: 200 }, None))
            .id;
        let b = store
            .add_resource(new_resource("B", Listing::Sell { price: 300 }, None))
            .id;
        store.add_resource(new_resource("C", Listing::Donate, None));

        store.claim_resource(a, "X");
        store.claim_resource(b, "Y");

        let expected: u32 = store
            .resources()
            .iter()
            .filter(|r| r.is_claimed())
            .filter_map(|r| r.listing.price())
            .sum();
        assert_eq!(store.stats().money_saved, expected);
        assert_eq!(store.stats().money_saved, 500);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut store = store_at(15);
        let initial_health = store.stats().community_health;

        let id = store
            .add_resource(new_resource("Book", Listing::Donate, Some(1000)))
            .id;
        assert_eq!(store.stats().total_resources, 1);
        assert_eq!(
            store.stats().community_health,
            (initial_health + store.tuning().add_bonus).min(100)
        );

        store.claim_resource(id, "Current User");
        assert_eq!(store.stats().total_claimed, 1);
        assert!((store.stats().environmental_impact - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn like_increments_by_one_with_no_other_side_effects() {
        let mut store = store_at(15);
        let id = store
            .add_suggestion(NewSuggestion {
                message: "Practice PYQs".to_string(),
                author: "Rohit Kumar".to_string(),
                branch: Branch::Me,
                semester: Semester::new(5).unwrap(),
                target_semester: Semester::new(1).unwrap(),
            })
            .id;
        let before = store.stats().clone();

        assert!(store.like_suggestion(id));
        assert_eq!(store.suggestions()[0].likes, 1);
        assert!(store.like_suggestion(id));
        assert_eq!(store.suggestions()[0].likes, 2);

        // Likes leave the statistics untouched.
        assert_eq!(store.stats(), &before);
        assert!(!store.like_suggestion(Uuid::now_v7()));
    }

    #[test]
    fn fulfill_applies_bonus_once() {
        let mut store = store_at(15);
        let id = store.add_request(new_request("Lab Manual")).id;
        let before_health = store.stats().community_health;

        assert_eq!(store.fulfill_request(id), FulfillOutcome::Fulfilled);
        let after = store.stats().community_health;
        assert_eq!(
            after,
            (before_health + store.tuning().fulfill_bonus).min(100)
        );
        assert!(store.requests()[0].fulfilled);

        assert_eq!(store.fulfill_request(id), FulfillOutcome::AlreadyFulfilled);
        assert_eq!(store.stats().community_health, after);

        assert_eq!(
            store.fulfill_request(Uuid::now_v7()),
            FulfillOutcome::NotFound
        );
    }

    #[test]
    fn suggestion_bonus_is_applied_on_post() {
        let mut store = store_at(15);
        let before = store.stats().community_health;
        store.add_suggestion(NewSuggestion {
            message: "Join societies".to_string(),
            author: "Priya Sharma".to_string(),
            branch: Branch::Ece,
            semester: Semester::new(7).unwrap(),
            target_semester: Semester::new(2).unwrap(),
        });
        assert_eq!(
            store.stats().community_health,
            (before + store.tuning().suggestion_bonus).min(100)
        );
    }

    #[test]
    fn current_health_reflects_recent_window() {
        let mut store = store_at(15);
        store.add_resource(new_resource("Book", Listing::Donate, None));
        let stored = store.stats().community_health;

        // Same day, one recent resource: stored score plus one boost.
        assert_eq!(
            store.current_health(),
            (stored + store.tuning().recent_boost).min(100)
        );
    }

    #[test]
    fn current_health_is_idempotent() {
        let mut store = store_at(15);
        store.add_resource(new_resource("Book", Listing::Donate, None));
        assert_eq!(store.current_health(), store.current_health());
    }

    #[test]
    fn health_never_exceeds_bounds() {
        let mut store = store_at(15);
        // Pile on bonuses well past the cap.
        for i in 0..40 {
            store.add_resource(new_resource(&format!("Book {i}"), Listing::Donate, None));
        }
        assert!(store.stats().community_health <= 100);
        assert!(store.current_health() <= 100);
    }

    #[test]
    fn add_request_updates_activity_without_health_bonus() {
        let mut store = store_at(15);
        let before_health = store.stats().community_health;
        store.add_request(new_request("Drafter"));

        assert_eq!(store.stats().community_health, before_health);
        assert_eq!(store.stats().last_activity, day(15));
    }
}
