//! Timeline week/day index

use crate::domain::entry::DiaryEntry;
use crate::domain::selection::Selection;
use crate::error::{DiaryError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Days of one ISO week that have entries, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDays {
    pub week: u32,
    pub days: Vec<NaiveDate>,
}

/// Entries grouped by ISO week number, most recent week first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Timeline {
    pub weeks: Vec<WeekDays>,
}

/// Group entry dates by ISO week number.
///
/// Weeks are keyed by number alone, so the same week number in two different
/// years shares one bucket. Repeated dates are listed once.
pub fn build_week_index(entries: &[DiaryEntry]) -> Result<Timeline> {
    let mut by_week: BTreeMap<u32, Vec<NaiveDate>> = BTreeMap::new();

    for entry in entries {
        let date = entry.parsed_date()?;
        by_week.entry(date.iso_week().week()).or_default().push(date);
    }

    let weeks = by_week
        .into_iter()
        .rev()
        .map(|(week, mut days)| {
            days.sort_by(|a, b| b.cmp(a));
            days.dedup();
            WeekDays { week, days }
        })
        .collect();

    Ok(Timeline { weeks })
}

impl Timeline {
    pub fn from_entries(entries: &[DiaryEntry]) -> Result<Self> {
        build_week_index(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn latest_week(&self) -> Option<u32> {
        self.weeks.first().map(|w| w.week)
    }

    pub fn earliest_week(&self) -> Option<u32> {
        self.weeks.last().map(|w| w.week)
    }

    /// Most recent week and its most recent day
    pub fn default_selection(&self) -> Option<Selection> {
        let latest = self.weeks.first()?;
        let day = *latest.days.first()?;
        Some(Selection::day(latest.week, day))
    }

    /// Week shown by the control: the selected one or else the latest
    pub fn current_week(&self, selection: Option<&Selection>) -> Option<u32> {
        selection.and_then(|s| s.week).or_else(|| self.latest_week())
    }

    /// Days listed for a week number, empty when the week has no entries
    pub fn days_in_week(&self, week: u32) -> &[NaiveDate] {
        self.weeks
            .iter()
            .find(|w| w.week == week)
            .map(|w| w.days.as_slice())
            .unwrap_or(&[])
    }

    /// Days of the week currently shown
    pub fn current_days(&self, selection: Option<&Selection>) -> &[NaiveDate] {
        match self.current_week(selection) {
            Some(week) => self.days_in_week(week),
            None => &[],
        }
    }

    /// Position of the selected day within the current week, 0 when absent
    pub fn day_index(&self, selection: Option<&Selection>) -> usize {
        let selected = selection.and_then(|s| s.day);
        self.current_days(selection)
            .iter()
            .position(|d| Some(*d) == selected)
            .unwrap_or(0)
    }

    /// Move the week slider; clears the day
    pub fn select_week(&self, week: u32) -> Result<Selection> {
        if self.weeks.iter().any(|w| w.week == week) {
            Ok(Selection::week(week))
        } else {
            Err(DiaryError::InvalidSelection(format!(
                "week {} has no entries",
                week
            )))
        }
    }

    /// Move the day slider within the current week
    pub fn select_day_index(&self, selection: Option<&Selection>, index: usize) -> Result<Selection> {
        let week = self
            .current_week(selection)
            .ok_or_else(|| DiaryError::InvalidSelection("timeline is empty".to_string()))?;
        let day = self.days_in_week(week).get(index).copied().ok_or_else(|| {
            DiaryError::InvalidSelection(format!("week {} has no day at position {}", week, index))
        })?;
        Ok(Selection::day(week, day))
    }

    /// Select a specific date, resolving its week
    pub fn select_date(&self, date: NaiveDate) -> Result<Selection> {
        let week = date.iso_week().week();
        if self.days_in_week(week).contains(&date) {
            Ok(Selection::day(week, date))
        } else {
            Err(DiaryError::InvalidSelection(format!(
                "no entry on {}",
                date.format("%Y-%m-%d")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dates: &[&str]) -> Vec<DiaryEntry> {
        dates.iter().map(|d| DiaryEntry::new(d, d, d)).collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_groups_by_iso_week_descending() {
        // Jan 1 and 3 2025 are ISO week 1, Jan 8 is week 2
        let timeline = build_week_index(&entries(&["2025-01-01", "2025-01-08", "2025-01-03"])).unwrap();
        assert_eq!(
            timeline.weeks,
            vec![
                WeekDays {
                    week: 2,
                    days: vec![date("2025-01-08")]
                },
                WeekDays {
                    week: 1,
                    days: vec![date("2025-01-03"), date("2025-01-01")]
                },
            ]
        );
        assert_eq!(timeline.latest_week(), Some(2));
        assert_eq!(timeline.earliest_week(), Some(1));
    }

    #[test]
    fn test_order_does_not_depend_on_input_order() {
        let a = build_week_index(&entries(&["2025-01-13", "2025-01-06", "2025-01-15"])).unwrap();
        let b = build_week_index(&entries(&["2025-01-15", "2025-01-13", "2025-01-06"])).unwrap();
        assert_eq!(a, b);
        for week in &a.weeks {
            assert!(week.days.windows(2).all(|w| w[0] > w[1]));
        }
        assert!(a.weeks.windows(2).all(|w| w[0].week > w[1].week));
    }

    #[test]
    fn test_duplicate_dates_listed_once() {
        let timeline = build_week_index(&entries(&["2025-01-08", "2025-01-08"])).unwrap();
        assert_eq!(timeline.days_in_week(2), &[date("2025-01-08")]);
    }

    #[test]
    fn test_default_selection_is_latest_week_and_day() {
        let timeline = build_week_index(&entries(&["2025-01-01", "2025-01-08", "2025-01-09"])).unwrap();
        assert_eq!(
            timeline.default_selection(),
            Some(Selection::day(2, date("2025-01-09")))
        );
        assert_eq!(Timeline::default().default_selection(), None);
    }

    #[test]
    fn test_malformed_date_fails() {
        assert!(matches!(
            build_week_index(&entries(&["2025-01-01", "soon"])),
            Err(DiaryError::DateParse(_))
        ));
    }

    #[test]
    fn test_slider_operations() {
        let timeline = build_week_index(&entries(&["2025-01-01", "2025-01-03", "2025-01-08"])).unwrap();

        let sel = timeline.select_week(1).unwrap();
        assert_eq!(sel, Selection::week(1));
        assert_eq!(timeline.current_week(Some(&sel)), Some(1));
        assert_eq!(timeline.day_index(Some(&sel)), 0);

        let sel = timeline.select_day_index(Some(&sel), 1).unwrap();
        assert_eq!(sel, Selection::day(1, date("2025-01-01")));
        assert_eq!(timeline.day_index(Some(&sel)), 1);

        assert!(timeline.select_week(9).is_err());
        assert!(timeline.select_day_index(Some(&sel), 5).is_err());
        assert_eq!(timeline.current_week(None), Some(2));
    }

    #[test]
    fn test_select_date() {
        let timeline = build_week_index(&entries(&["2025-01-03", "2025-01-08"])).unwrap();
        assert_eq!(
            timeline.select_date(date("2025-01-03")).unwrap(),
            Selection::day(1, date("2025-01-03"))
        );
        assert!(timeline.select_date(date("2025-01-04")).is_err());
    }
}
