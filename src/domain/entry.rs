//! Diary entry records as authored in front matter

use crate::error::{DiaryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// A trailing time component (`2025-01-17T09:30:00`) is accepted and dropped,
/// comparisons in this crate are by calendar day only.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let day_part = match trimmed.split_once('T') {
        Some((day, _)) => day,
        None => trimmed,
    };

    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .map_err(|_| DiaryError::DateParse(input.to_string()))
}

/// One list item inside a category section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bullet {
    Plain(String),
    Rich(RichBullet),
}

/// Bullet with optional image, link or code snippet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichBullet {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Bullet {
    /// Display text, trimmed
    pub fn display_text(&self) -> &str {
        match self {
            Bullet::Plain(text) => text.trim(),
            Bullet::Rich(rich) => rich.text.trim(),
        }
    }

    pub fn rich(&self) -> Option<&RichBullet> {
        match self {
            Bullet::Plain(_) => None,
            Bullet::Rich(rich) => Some(rich),
        }
    }
}

/// A field that may be written as a single string or as a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    One(String),
    Many(Vec<String>),
}

impl TextOrList {
    pub fn items(&self) -> Vec<String> {
        match self {
            TextOrList::One(text) => vec![text.clone()],
            TextOrList::Many(list) => list.clone(),
        }
    }

    /// Whether the field carries anything worth showing
    pub fn is_present(&self) -> bool {
        match self {
            TextOrList::One(text) => !text.is_empty(),
            TextOrList::Many(_) => true,
        }
    }
}

/// Links to external discussion threads
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Discussion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reddit: Option<String>,
}

/// An item in the special thanks gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThanksItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One diary record for a calendar date
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// File stem; filled in by the content loader
    #[serde(default)]
    pub slug: String,
    pub title: String,
    /// ISO calendar date, kept as authored and parsed on comparison
    pub date: String,

    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub progress: Vec<Bullet>,
    #[serde(default)]
    pub dev: Vec<Bullet>,
    #[serde(default)]
    pub social: Vec<Bullet>,
    #[serde(default)]
    pub personal: Vec<Bullet>,
    #[serde(default)]
    pub discussion: Option<Discussion>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub thanks: Vec<ThanksItem>,
    #[serde(default)]
    pub social_posts: Vec<String>,
    #[serde(default)]
    pub followers_delta: BTreeMap<String, i64>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub money: Option<f64>,
    #[serde(default)]
    pub til: Option<TextOrList>,
    #[serde(default)]
    pub challenge: Option<TextOrList>,

    /// Markdown content following the front matter
    #[serde(skip)]
    pub body: String,
}

impl DiaryEntry {
    pub fn new(slug: &str, title: &str, date: &str) -> Self {
        DiaryEntry {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    /// Calendar date of this entry
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        parse_iso_date(&self.date)
    }
}
