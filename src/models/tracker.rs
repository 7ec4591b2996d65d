use chrono::{DateTime, Local, Months};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{DaysError, Result};

/// Length of the estimated life span, in years
pub const ESTIMATED_YEARS: u32 = 70;

/// Content written to a fresh tracker file
pub const TRACKER_DEFAULT: &str = r#"{"start":null, "habits":[], "end": null}"#;

/// A tracked habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Display name, also used for lookup
    pub action: String,
    /// Last time this habit was tracked or reset
    #[serde(alias = "createAt")]
    pub created_at: DateTime<Local>,
}

impl Habit {
    pub fn days_since(&self, now: DateTime<Local>) -> i64 {
        dates::days_between(self.created_at, now)
    }

    /// `name (N days since)`
    pub fn describe(&self, now: DateTime<Local>) -> String {
        format!("{} ({} days since)", self.action, self.days_since(now))
    }
}

/// Identifies a habit either by 1-based position or by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    ByIndex(i64),
    ByName(String),
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        match input.parse::<i64>() {
            Ok(index) => Selector::ByIndex(index),
            Err(_) => Selector::ByName(input.to_string()),
        }
    }
}

/// Day counts for the estimated life span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSummary {
    pub days_expected: i64,
    pub days_since_start: i64,
    pub days_to_end: i64,
}

impl LifeSummary {
    pub fn fraction(&self) -> f64 {
        self.days_since_start as f64 / self.days_expected as f64
    }

    /// Percentage of the span already passed, rounded down
    pub fn percentage(&self) -> i64 {
        (self.fraction() * 100.0).floor() as i64
    }

    /// Number of filled cells in a progress bar of `width` cells
    pub fn fill_count(&self, width: usize) -> usize {
        let fill = (self.fraction() * width as f64).floor();
        fill.clamp(0.0, width as f64) as usize
    }
}

/// Habit tracker state, persisted as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// Declared life start
    pub start: Option<DateTime<Local>>,
    /// Habits in creation order
    #[serde(default)]
    pub habits: Vec<Habit>,
    /// Always `start` plus ESTIMATED_YEARS
    pub end: Option<DateTime<Local>>,
}

impl Tracker {
    /// Start tracking a new habit
    pub fn track(&mut self, action: &str, now: DateTime<Local>) {
        self.habits.push(Habit {
            action: action.to_string(),
            created_at: now,
        });
    }

    /// One `index) name (N days since)` line per habit
    pub fn list(&self, now: DateTime<Local>) -> Vec<String> {
        self.habits
            .iter()
            .enumerate()
            .map(|(i, habit)| format!("{}) {}", i + 1, habit.describe(now)))
            .collect()
    }

    /// Storage index of the habit the selector refers to
    pub fn position(&self, selector: &Selector) -> Result<usize> {
        match selector {
            Selector::ByIndex(index) => {
                let len = self.habits.len();
                if *index < 1 || *index as u64 > len as u64 {
                    return Err(DaysError::OutOfRange { index: *index, len });
                }
                Ok(*index as usize - 1)
            }
            Selector::ByName(name) => self
                .habits
                .iter()
                .position(|h| &h.action == name)
                .ok_or_else(|| DaysError::NotFound(name.clone())),
        }
    }

    pub fn since(&self, selector: &Selector) -> Result<&Habit> {
        let position = self.position(selector)?;
        Ok(&self.habits[position])
    }

    /// Restart the count for a habit
    pub fn reset(&mut self, selector: &Selector, now: DateTime<Local>) -> Result<&Habit> {
        let position = self.position(selector)?;
        self.habits[position].created_at = now;
        Ok(&self.habits[position])
    }

    /// Set the life start from a `YYYY-MM-DD` string; the end follows ESTIMATED_YEARS later
    pub fn life_start(&mut self, date: &str) -> Result<()> {
        let start_date = dates::parse_date(date)?;
        let end_date = start_date
            .checked_add_months(Months::new(ESTIMATED_YEARS * 12))
            .ok_or_else(|| DaysError::InvalidDate(date.to_string()))?;

        self.start = Some(dates::local_midnight(start_date)?);
        self.end = Some(dates::local_midnight(end_date)?);
        Ok(())
    }

    /// Day counts since the life start
    pub fn life_end(&self, now: DateTime<Local>) -> Result<LifeSummary> {
        let start = self.start.ok_or_else(|| {
            DaysError::Usage(
                "life start date not set; run 'days life start YYYY-MM-DD' first".to_string(),
            )
        })?;

        let days_expected = i64::from(ESTIMATED_YEARS) * 365;
        let days_since_start = dates::days_between(start, now);

        Ok(LifeSummary {
            days_expected,
            days_since_start,
            days_to_end: days_expected - days_since_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn tracker_with(actions: &[&str], at: DateTime<Local>) -> Tracker {
        let mut tracker = Tracker::default();
        for action in actions {
            tracker.track(action, at);
        }
        tracker
    }

    #[test]
    fn test_track_then_list() {
        let now = noon(2024, 5, 1);
        let tracker = tracker_with(&["X"], now);

        assert_eq!(tracker.list(now), vec!["1) X (0 days since)".to_string()]);
    }

    #[test]
    fn test_list_counts_whole_days() {
        let then = noon(2024, 5, 1);
        let tracker = tracker_with(&["run", "read"], then);

        let lines = tracker.list(then + Duration::days(3) + Duration::hours(5));
        assert_eq!(
            lines,
            vec![
                "1) run (3 days since)".to_string(),
                "2) read (3 days since)".to_string(),
            ]
        );
    }

    #[test]
    fn test_track_allows_duplicates_and_empty_names() {
        let now = noon(2024, 5, 1);
        let tracker = tracker_with(&["A", "A", ""], now);
        assert_eq!(tracker.habits.len(), 3);
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse("2"), Selector::ByIndex(2));
        assert_eq!(Selector::parse("-1"), Selector::ByIndex(-1));
        assert_eq!(Selector::parse("B"), Selector::ByName("B".to_string()));
        assert_eq!(Selector::parse("2b"), Selector::ByName("2b".to_string()));
    }

    #[test]
    fn test_selector_resolution() {
        let tracker = tracker_with(&["A", "B", "C"], noon(2024, 5, 1));

        assert_eq!(tracker.since(&Selector::parse("2")).unwrap().action, "B");
        assert_eq!(tracker.since(&Selector::parse("B")).unwrap().action, "B");
        assert!(matches!(
            tracker.since(&Selector::parse("9")),
            Err(DaysError::OutOfRange { index: 9, len: 3 })
        ));
        assert!(matches!(
            tracker.since(&Selector::parse("0")),
            Err(DaysError::OutOfRange { .. })
        ));
        assert!(matches!(
            tracker.since(&Selector::parse("Z")),
            Err(DaysError::NotFound(_))
        ));
    }

    #[test]
    fn test_name_lookup_is_case_sensitive_and_first_match() {
        let mut tracker = tracker_with(&["run"], noon(2024, 5, 1));
        tracker.track("run", noon(2024, 5, 3));

        let habit = tracker.since(&Selector::parse("run")).unwrap();
        assert_eq!(habit.created_at, noon(2024, 5, 1));
        assert!(tracker.since(&Selector::parse("Run")).is_err());
    }

    #[test]
    fn test_reset_zeroes_count() {
        let then = noon(2024, 5, 1);
        let now = noon(2024, 5, 10);
        let mut tracker = tracker_with(&["A", "B"], then);

        tracker.reset(&Selector::parse("B"), now).unwrap();
        assert_eq!(tracker.habits[1].days_since(now), 0);
        assert_eq!(tracker.habits[0].days_since(now), 9);

        let before = tracker.clone();
        tracker.reset(&Selector::parse("2"), now).unwrap();
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_reset_unknown_habit() {
        let mut tracker = tracker_with(&["A"], noon(2024, 5, 1));
        let before = tracker.clone();

        assert!(tracker
            .reset(&Selector::parse("missing"), noon(2024, 6, 1))
            .is_err());
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_life_start_sets_end_seventy_years_later() {
        let mut tracker = Tracker::default();
        tracker.life_start("2000-01-01").unwrap();

        let start = tracker.start.unwrap();
        let end = tracker.end.unwrap();
        assert_eq!(
            dates::day_of(start),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(
            dates::day_of(end),
            NaiveDate::from_ymd_opt(2070, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_life_start_invalid_date() {
        let mut tracker = Tracker::default();
        assert!(matches!(
            tracker.life_start("January 1st"),
            Err(DaysError::InvalidDate(_))
        ));
        assert!(tracker.start.is_none());
        assert!(tracker.end.is_none());
    }

    #[test]
    fn test_life_end_summary() {
        let mut tracker = Tracker::default();
        tracker.life_start("2000-01-01").unwrap();
        let now = tracker.start.unwrap() + Duration::days(10_000) + Duration::hours(3);

        let summary = tracker.life_end(now).unwrap();
        assert_eq!(summary.days_expected, 25_550);
        assert_eq!(summary.days_since_start, 10_000);
        assert_eq!(summary.days_to_end, 15_550);
        assert_eq!(summary.percentage(), 39);
        assert_eq!(summary.fill_count(50), 19);
    }

    #[test]
    fn test_life_end_without_start() {
        let tracker = Tracker::default();
        assert!(matches!(
            tracker.life_end(noon(2024, 5, 1)),
            Err(DaysError::Usage(_))
        ));
    }

    #[test]
    fn test_fill_count_is_clamped() {
        let summary = LifeSummary {
            days_expected: 100,
            days_since_start: 250,
            days_to_end: -150,
        };
        assert_eq!(summary.fill_count(50), 50);
    }

    #[test]
    fn test_tracker_serialization_roundtrip() {
        let mut tracker = tracker_with(&["A"], noon(2024, 5, 1));
        let json = serde_json::to_string(&tracker).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert_eq!(serde_json::from_str::<Tracker>(&json).unwrap(), tracker);

        tracker.life_start("1990-06-15").unwrap();
        let json = serde_json::to_string(&tracker).unwrap();
        assert_eq!(serde_json::from_str::<Tracker>(&json).unwrap(), tracker);
    }

    #[test]
    fn test_tracker_default_document() {
        let tracker: Tracker = serde_json::from_str(TRACKER_DEFAULT).unwrap();
        assert_eq!(tracker, Tracker::default());
    }

    #[test]
    fn test_habit_reads_legacy_key() {
        let json = r#"{"action":"run","createAt":"2024-05-01T10:00:00Z"}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.action, "run");
    }
}
