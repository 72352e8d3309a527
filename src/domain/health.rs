//! Community-health score derivation.
//!
//! The stored score only moves when a mutation applies a bonus. The
//! *displayed* score additionally applies time decay and a
//! recent-activity boost, computed here as a pure function of its
//! inputs so that repeated evaluation at the same date always yields
//! the same answer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum community-health score.
pub const MAX_SCORE: u8 = 100;

/// Tuning parameters for the health derivation.
///
/// The defaults are compiled in; a configuration file can override them
/// (see [`super::Config`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTuning {
    /// Fraction of the score lost per elapsed day without activity.
    pub decay_per_day: f64,
    /// Decay never takes the score below this floor.
    pub floor: u8,
    /// Points added per resource listed within the trailing window.
    pub recent_boost: u8,
    /// Length of the trailing activity window, in days.
    pub window_days: u32,
    /// Bonus applied when a resource is added.
    pub add_bonus: u8,
    /// Bonus applied when a resource is claimed.
    pub claim_bonus: u8,
    /// Bonus applied when a suggestion is posted.
    pub suggestion_bonus: u8,
    /// Bonus applied when a request is fulfilled.
    pub fulfill_bonus: u8,
}

impl Default for HealthTuning {
    fn default() -> Self {
        Self {
            decay_per_day: 0.05,
            floor: 20,
            recent_boost: 3,
            window_days: 7,
            add_bonus: 2,
            claim_bonus: 3,
            suggestion_bonus: 1,
            fulfill_bonus: 2,
        }
    }
}

impl HealthTuning {
    /// Applies a mutation bonus to a stored score, clamping at
    /// [`MAX_SCORE`].
    #[must_use]
    pub fn apply_bonus(&self, stored: u8, bonus: u8) -> u8 {
        stored.saturating_add(bonus).min(MAX_SCORE)
    }

    /// Evaluates the displayed score.
    ///
    /// Starting from the stored score, decay a fixed fraction per day
    /// elapsed since the last activity (never below the floor), then add
    /// the recent-activity boost (never above [`MAX_SCORE`]). Days in
    /// the future are treated as zero elapsed days.
    #[must_use]
    pub fn current(
        &self,
        stored: u8,
        last_activity: NaiveDate,
        recent_resources: usize,
        today: NaiveDate,
    ) -> u8 {
        let elapsed_days = (today - last_activity).num_days().max(0);

        let decayed = f64::from(stored)
            * (1.0 - self.decay_per_day).powi(i32::try_from(elapsed_days).unwrap_or(i32::MAX));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let decayed = (decayed.round() as u8).max(self.floor);

        let boost = u8::try_from(recent_resources)
            .unwrap_or(u8::MAX)
            .saturating_mul(self.recent_boost);

        decayed.saturating_add(boost).min(MAX_SCORE)
    }
}

/// Qualitative band for a health score, used for dashboard messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    /// Score 80 and above.
    Thriving,
    /// Score 60-79.
    Healthy,
    /// Score 40-59.
    NeedsAttention,
    /// Score 20-39.
    Wilting,
    /// Score below 20.
    Critical,
}

impl HealthBand {
    /// Classifies a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Thriving,
            60..=79 => Self::Healthy,
            40..=59 => Self::NeedsAttention,
            20..=39 => Self::Wilting,
            _ => Self::Critical,
        }
    }

    /// Dashboard message for this band.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Thriving => "Community is thriving!",
            Self::Healthy => "Community is healthy and growing!",
            Self::NeedsAttention => "Community needs some attention",
            Self::Wilting => "Community is wilting! Share or claim resources to help!",
            Self::Critical => "Community is in critical condition! Urgent action needed!",
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn no_elapsed_time_and_no_recent_activity_is_identity() {
        let tuning = HealthTuning::default();
        assert_eq!(tuning.current(72, date(15), 0, date(15)), 72);
    }

    #[test]
    fn evaluation_is_idempotent_for_fixed_inputs() {
        let tuning = HealthTuning::default();
        let first = tuning.current(72, date(10), 2, date(20));
        let second = tuning.current(72, date(10), 2, date(20));
        assert_eq!(first, second);
    }

    #[test]
    fn decay_floors_at_minimum() {
        let tuning = HealthTuning::default();
        // A year of silence cannot take the score below the floor.
        let score = tuning.current(
            100,
            date(1),
            0,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        assert_eq!(score, tuning.floor);
    }

    #[test]
    fn boost_caps_at_maximum() {
        let tuning = HealthTuning::default();
        // 50 recent resources would add 150 points uncapped.
        let score = tuning.current(90, date(15), 50, date(15));
        assert_eq!(score, MAX_SCORE);
    }

    #[test]
    fn future_last_activity_does_not_inflate_the_score() {
        let tuning = HealthTuning::default();
        assert_eq!(tuning.current(72, date(20), 0, date(15)), 72);
    }

    #[test]
    fn bonus_clamps_at_maximum() {
        let tuning = HealthTuning::default();
        assert_eq!(tuning.apply_bonus(99, 5), MAX_SCORE);
        assert_eq!(tuning.apply_bonus(50, 2), 52);
    }

    #[test_case(85, HealthBand::Thriving)]
    #[test_case(72, HealthBand::Healthy)]
    #[test_case(45, HealthBand::NeedsAttention)]
    #[test_case(25, HealthBand::Wilting)]
    #[test_case(10, HealthBand::Critical)]
    fn band_classification(score: u8, expected: HealthBand) {
        assert_eq!(HealthBand::from_score(score), expected);
    }
}
