//! "Today's challenge" and "Today I learned" cards

use crate::domain::entry::{DiaryEntry, TextOrList};
use crate::domain::selection::Selection;
use chrono::NaiveDate;
use serde::Serialize;

/// Items shown before the card is expanded
const PREVIEW_LEN: usize = 2;

/// Which free-text field a highlight card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightField {
    Challenge,
    TodayILearned,
}

impl HighlightField {
    pub fn title(&self) -> &'static str {
        match self {
            HighlightField::Challenge => "Today's Challenge",
            HighlightField::TodayILearned => "Today I Learned",
        }
    }

    fn value<'a>(&self, entry: &'a DiaryEntry) -> Option<&'a TextOrList> {
        match self {
            HighlightField::Challenge => entry.challenge.as_ref(),
            HighlightField::TodayILearned => entry.til.as_ref(),
        }
    }
}

/// Content of a highlight card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub field: HighlightField,
    /// Date of the entry the items come from
    pub date: String,
    /// The selected day, if the card follows the timeline
    pub for_day: Option<NaiveDate>,
    pub items: Vec<String>,
    pub preview: Vec<String>,
    /// Items hidden until expanded
    pub more: usize,
}

/// Pick the entry a highlight card shows.
///
/// With a selected day only an entry of exactly that date qualifies;
/// otherwise the first entry carrying the field, so callers pass entries
/// newest first.
pub fn highlight(
    entries: &[DiaryEntry],
    selection: Option<&Selection>,
    field: HighlightField,
) -> Option<Highlight> {
    let day = selection.and_then(|s| s.day);

    let (entry, value) = entries.iter().find_map(|e| {
        let value = field.value(e).filter(|v| v.is_present())?;
        match day {
            Some(d) if e.parsed_date().ok() != Some(d) => None,
            _ => Some((e, value)),
        }
    })?;

    let items = value.items();
    let preview: Vec<String> = items.iter().take(PREVIEW_LEN).cloned().collect();
    let more = items.len() - preview.len();

    Some(Highlight {
        field,
        date: entry.date.clone(),
        for_day: day,
        items,
        preview,
        more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<DiaryEntry> {
        let newest = DiaryEntry::new("c", "C", "2025-01-03");
        let mut middle = DiaryEntry::new("b", "B", "2025-01-02");
        middle.challenge = Some(TextOrList::Many(vec![
            "flaky test".to_string(),
            "slow build".to_string(),
            "API limits".to_string(),
        ]));
        middle.til = Some(TextOrList::One("serde untagged enums".to_string()));
        let mut oldest = DiaryEntry::new("a", "A", "2025-01-01");
        oldest.challenge = Some(TextOrList::One("naming".to_string()));
        vec![newest, middle, oldest]
    }

    #[test]
    fn test_latest_entry_with_field_without_selection() {
        let hl = highlight(&sample(), None, HighlightField::Challenge).unwrap();
        assert_eq!(hl.date, "2025-01-02");
        assert_eq!(hl.items.len(), 3);
        assert_eq!(hl.preview, vec!["flaky test", "slow build"]);
        assert_eq!(hl.more, 1);
        assert_eq!(hl.for_day, None);
    }

    #[test]
    fn test_selected_day_must_match_exactly() {
        let entries = sample();
        let sel = Selection::day(1, date("2025-01-01"));
        let hl = highlight(&entries, Some(&sel), HighlightField::Challenge).unwrap();
        assert_eq!(hl.items, vec!["naming"]);
        assert_eq!(hl.more, 0);
        assert_eq!(hl.for_day, Some(date("2025-01-01")));

        let sel = Selection::day(1, date("2025-01-03"));
        assert!(highlight(&entries, Some(&sel), HighlightField::Challenge).is_none());
    }

    #[test]
    fn test_single_string_field() {
        let hl = highlight(&sample(), None, HighlightField::TodayILearned).unwrap();
        assert_eq!(hl.items, vec!["serde untagged enums"]);
        assert_eq!(hl.field.title(), "Today I Learned");
    }

    #[test]
    fn test_no_entries() {
        assert!(highlight(&[], None, HighlightField::Challenge).is_none());
    }
}
