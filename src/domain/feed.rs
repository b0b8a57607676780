//! Entry cards shown in the daily feed

use crate::domain::category::Category;
use crate::domain::entry::{Bullet, DiaryEntry};
use crate::domain::selection::Selection;
use crate::error::Result;
use chrono::NaiveDate;
use pulldown_cmark::{html, Options, Parser as MdParser};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entries shown when no day is selected
pub const DEFAULT_FEED_LEN: usize = 5;

/// A bullet prepared for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardBullet {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Code snippet, only kept in the dev section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl CardBullet {
    fn from_bullet(bullet: &Bullet, category: Category) -> Self {
        match bullet {
            Bullet::Plain(text) => CardBullet {
                text: text.clone(),
                link: None,
                img: None,
                code: None,
                lang: None,
            },
            Bullet::Rich(rich) => {
                let code = if category == Category::Dev {
                    rich.code.as_ref().map(|c| c.trim_end().to_string())
                } else {
                    None
                };
                let lang = code
                    .as_ref()
                    .map(|_| rich.lang.clone().unwrap_or_else(|| "text".to_string()));
                CardBullet {
                    text: rich.text.clone(),
                    link: rich.link.clone(),
                    img: rich.img.clone(),
                    code,
                    lang,
                }
            }
        }
    }
}

/// One non-empty category section of a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSection {
    pub category: Category,
    pub label: &'static str,
    pub items: Vec<CardBullet>,
}

/// A link to a discussion thread
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscussionLink {
    pub label: &'static str,
    pub url: String,
}

/// Everything needed to render one diary entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryCard {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    /// e.g. `Jan 3, 2025`
    pub display_date: String,
    pub mood: Option<String>,
    pub metrics: BTreeMap<String, f64>,
    pub sections: Vec<CardSection>,
    pub discussion: Vec<DiscussionLink>,
    pub body_html: String,
}

/// Render markdown to HTML
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = MdParser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

impl EntryCard {
    pub fn from_entry(entry: &DiaryEntry) -> Result<Self> {
        let date = entry.parsed_date()?;

        let sections = Category::ALL
            .iter()
            .filter_map(|&category| {
                let bullets = category.bullets(entry);
                if bullets.is_empty() {
                    return None;
                }
                Some(CardSection {
                    category,
                    label: category.label(),
                    items: bullets
                        .iter()
                        .map(|b| CardBullet::from_bullet(b, category))
                        .collect(),
                })
            })
            .collect();

        let mut discussion = Vec::new();
        if let Some(d) = &entry.discussion {
            let links = [
                ("X / Twitter", &d.x),
                ("LinkedIn", &d.linkedin),
                ("Reddit", &d.reddit),
            ];
            for (label, url) in links {
                if let Some(url) = url {
                    discussion.push(DiscussionLink {
                        label,
                        url: url.clone(),
                    });
                }
            }
        }

        Ok(EntryCard {
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            date,
            display_date: date.format("%b %-d, %Y").to_string(),
            mood: entry.mood.clone(),
            metrics: entry.metrics.clone(),
            sections,
            discussion,
            body_html: render_markdown(&entry.body),
        })
    }
}

/// Cards for the feed.
///
/// A selected day shows the entries dated exactly that day; otherwise the
/// newest few entries are shown.
pub fn entry_feed(entries: &[DiaryEntry], selection: Option<&Selection>) -> Result<Vec<EntryCard>> {
    let mut dated = entries
        .iter()
        .map(|e| e.parsed_date().map(|d| (d, e)))
        .collect::<Result<Vec<_>>>()?;

    match selection.and_then(|s| s.day) {
        Some(day) => dated.retain(|(d, _)| *d == day),
        None => {
            dated.sort_by(|a, b| b.0.cmp(&a.0));
            dated.truncate(DEFAULT_FEED_LEN);
        }
    }

    dated.into_iter().map(|(_, e)| EntryCard::from_entry(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{Discussion, RichBullet};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_card_sections_skip_empty_categories() {
        let mut entry = DiaryEntry::new("day-3", "Day 3", "2025-01-03");
        entry.dev = vec![Bullet::Rich(RichBullet {
            text: "parser".to_string(),
            code: Some("let x = 1;\n\n".to_string()),
            ..Default::default()
        })];
        entry.social = vec![Bullet::Rich(RichBullet {
            text: "meetup".to_string(),
            code: Some("ignored".to_string()),
            ..Default::default()
        })];

        let card = EntryCard::from_entry(&entry).unwrap();
        assert_eq!(card.display_date, "Jan 3, 2025");
        assert_eq!(card.sections.len(), 2);
        assert_eq!(card.sections[0].label, "Dev");
        assert_eq!(card.sections[0].items[0].code.as_deref(), Some("let x = 1;"));
        assert_eq!(card.sections[0].items[0].lang.as_deref(), Some("text"));
        assert_eq!(card.sections[1].items[0].code, None);
    }

    #[test]
    fn test_card_discussion_and_body() {
        let mut entry = DiaryEntry::new("d", "D", "2025-01-03");
        entry.discussion = Some(Discussion {
            x: Some("https://x.com/p".to_string()),
            linkedin: None,
            reddit: Some("https://reddit.com/r".to_string()),
        });
        entry.body = "Some **bold** words".to_string();

        let card = EntryCard::from_entry(&entry).unwrap();
        let labels: Vec<&str> = card.discussion.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["X / Twitter", "Reddit"]);
        assert!(card.body_html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_feed_defaults_to_latest_five() {
        let entries: Vec<DiaryEntry> = (1..=7)
            .map(|d| {
                let day = format!("2025-01-{:02}", d);
                DiaryEntry::new(&day, &day, &day)
            })
            .collect();
        let feed = entry_feed(&entries, None).unwrap();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].date, date("2025-01-07"));
        assert_eq!(feed[4].date, date("2025-01-03"));
    }

    #[test]
    fn test_feed_for_selected_day() {
        let entries = vec![
            DiaryEntry::new("a", "A", "2025-01-02"),
            DiaryEntry::new("b", "B", "2025-01-03"),
        ];
        let sel = Selection::day(1, date("2025-01-02"));
        let feed = entry_feed(&entries, Some(&sel)).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].slug, "a");

        let sel = Selection::day(1, date("2025-01-04"));
        assert!(entry_feed(&entries, Some(&sel)).unwrap().is_empty());
    }
}
