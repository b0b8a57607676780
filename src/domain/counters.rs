//! Build-day and spend counters

use crate::domain::entry::DiaryEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the "build day" counter is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountersMode {
    /// Number of entries up to the cutoff
    #[default]
    Entries,
    /// Calendar days since the project start, inclusive
    Calendar,
}

impl FromStr for CountersMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entries" => Ok(CountersMode::Entries),
            "calendar" => Ok(CountersMode::Calendar),
            _ => Err(format!(
                "Invalid counters_mode: '{}'. Valid modes are: entries, calendar",
                s
            )),
        }
    }
}

impl std::fmt::Display for CountersMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountersMode::Entries => f.write_str("entries"),
            CountersMode::Calendar => f.write_str("calendar"),
        }
    }
}

/// Current build day.
///
/// `filtered` are the entries already limited to the cutoff. Calendar mode
/// counts from `project_start` to the cutoff (or `today` when there is none),
/// both ends inclusive, and never goes below zero. Without a project start
/// the entry count is used whatever the mode.
pub fn build_day(
    filtered: &[&DiaryEntry],
    mode: CountersMode,
    project_start: Option<NaiveDate>,
    cutoff: Option<NaiveDate>,
    today: NaiveDate,
) -> i64 {
    match (mode, project_start) {
        (CountersMode::Calendar, Some(start)) => {
            let end = cutoff.unwrap_or(today);
            ((end - start).num_days() + 1).max(0)
        }
        _ => filtered.len() as i64,
    }
}

/// Hours and money spent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub hours: f64,
    pub money: f64,
}

/// Sum of the optional spend fields; missing values count as zero
pub fn totals(filtered: &[&DiaryEntry]) -> Totals {
    filtered.iter().fold(Totals::default(), |mut acc, e| {
        acc.hours += e.hours.unwrap_or(0.0);
        acc.money += e.money.unwrap_or(0.0);
        acc
    })
}

/// All three dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Counters {
    pub build_day: i64,
    pub hours: f64,
    pub money: f64,
}

impl Counters {
    pub fn compute(
        filtered: &[&DiaryEntry],
        mode: CountersMode,
        project_start: Option<NaiveDate>,
        cutoff: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let spent = totals(filtered);
        Counters {
            build_day: build_day(filtered, mode, project_start, cutoff, today),
            hours: spent.hours,
            money: spent.money,
        }
    }
}
