//! Special thanks gallery

use crate::domain::entry::{DiaryEntry, ThanksItem};
use crate::domain::selection::{filter_by_cutoff, Selection};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// A thanks item stamped with the date of its entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub item: ThanksItem,
}

/// Thanks items up to the cutoff, newest first
pub fn thanks_gallery(entries: &[DiaryEntry], selection: Option<&Selection>) -> Result<Vec<GalleryItem>> {
    let mut items = Vec::new();
    for entry in filter_by_cutoff(entries, selection)? {
        let date = entry.parsed_date()?;
        items.extend(entry.thanks.iter().map(|t| GalleryItem {
            date,
            item: t.clone(),
        }));
    }

    // Stable, so items of one entry keep their authored order
    items.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thanks(title: &str) -> ThanksItem {
        ThanksItem {
            title: title.to_string(),
            caption: None,
            img: None,
            link: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_gallery_sorted_newest_first() {
        let mut older = DiaryEntry::new("a", "A", "2025-01-01");
        older.thanks = vec![thanks("Mentor")];
        let mut newer = DiaryEntry::new("b", "B", "2025-01-05");
        newer.thanks = vec![thanks("Beta tester"), thanks("Designer")];

        let gallery = thanks_gallery(&[older, newer], None).unwrap();
        let titles: Vec<&str> = gallery.iter().map(|g| g.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta tester", "Designer", "Mentor"]);
        assert_eq!(gallery[0].date, date("2025-01-05"));
    }

    #[test]
    fn test_gallery_respects_cutoff() {
        let mut older = DiaryEntry::new("a", "A", "2025-01-01");
        older.thanks = vec![thanks("Mentor")];
        let mut newer = DiaryEntry::new("b", "B", "2025-01-05");
        newer.thanks = vec![thanks("Beta tester")];

        let sel = Selection::day(1, date("2025-01-02"));
        let gallery = thanks_gallery(&[older, newer], Some(&sel)).unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].item.title, "Mentor");
    }
}
