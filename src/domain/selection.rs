//! Timeline selection and date cutoff filtering

use crate::domain::entry::{parse_iso_date, DiaryEntry};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Week/day picked on the timeline
///
/// `None` for the whole selection means nothing is picked and every entry is
/// in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    /// ISO week number
    pub week: Option<u32>,
    pub day: Option<NaiveDate>,
}

impl Selection {
    pub fn new(week: Option<u32>, day: Option<NaiveDate>) -> Self {
        Selection { week, day }
    }

    /// Selection of a week and one of its days
    pub fn day(week: u32, day: NaiveDate) -> Self {
        Selection {
            week: Some(week),
            day: Some(day),
        }
    }

    /// Selection of a week with no day picked yet
    pub fn week(week: u32) -> Self {
        Selection {
            week: Some(week),
            day: None,
        }
    }

    /// Build from the textual day used by the UI
    pub fn parse(week: Option<u32>, day: Option<&str>) -> Result<Self> {
        let day = day.map(parse_iso_date).transpose()?;
        Ok(Selection { week, day })
    }

    /// Latest date still in scope
    pub fn cutoff(&self) -> Option<NaiveDate> {
        self.day
    }
}

/// Cutoff date of an optional selection
pub fn cutoff_of(selection: Option<&Selection>) -> Option<NaiveDate> {
    selection.and_then(Selection::cutoff)
}

/// Entries dated on or before the selected day.
///
/// Without a selected day every entry is returned. Any entry whose date does
/// not parse fails the whole call, even when no cutoff applies, so the same
/// content yields the same outcome regardless of selection.
pub fn filter_by_cutoff<'a>(
    entries: &'a [DiaryEntry],
    selection: Option<&Selection>,
) -> Result<Vec<&'a DiaryEntry>> {
    let cutoff = cutoff_of(selection);
    let mut filtered = Vec::with_capacity(entries.len());

    for entry in entries {
        let date = entry.parsed_date()?;
        if cutoff.is_none_or(|c| date <= c) {
            filtered.push(entry);
        }
    }

    Ok(filtered)
}
