//! Category sections and their item tallies

use crate::domain::entry::{Bullet, DiaryEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four fixed diary sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Progress,
    Dev,
    Social,
    Personal,
}

impl Category {
    /// Iteration order used by every view
    pub const ALL: [Category; 4] = [
        Category::Progress,
        Category::Dev,
        Category::Social,
        Category::Personal,
    ];

    /// Front matter key
    pub fn key(&self) -> &'static str {
        match self {
            Category::Progress => "progress",
            Category::Dev => "dev",
            Category::Social => "social",
            Category::Personal => "personal",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Progress => "Overall",
            Category::Dev => "Dev",
            Category::Social => "Social",
            Category::Personal => "Personal",
        }
    }

    /// Bullets of this category on one entry
    pub fn bullets<'a>(&self, entry: &'a DiaryEntry) -> &'a [Bullet] {
        match self {
            Category::Progress => &entry.progress,
            Category::Dev => &entry.dev,
            Category::Social => &entry.social,
            Category::Personal => &entry.personal,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "progress" => Ok(Category::Progress),
            "dev" => Ok(Category::Dev),
            "social" => Ok(Category::Social),
            "personal" => Ok(Category::Personal),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: progress, dev, social, personal",
                s
            )),
        }
    }
}

/// Sum of bullet-list lengths for one category
pub fn tally<'a, I>(entries: I, category: Category) -> usize
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    entries
        .into_iter()
        .map(|e| category.bullets(e).len())
        .sum()
}

/// Item counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryTally {
    pub progress: usize,
    pub dev: usize,
    pub social: usize,
    pub personal: usize,
}

impl CategoryTally {
    pub fn from_entries(entries: &[&DiaryEntry]) -> Self {
        CategoryTally {
            progress: tally(entries.iter().copied(), Category::Progress),
            dev: tally(entries.iter().copied(), Category::Dev),
            social: tally(entries.iter().copied(), Category::Social),
            personal: tally(entries.iter().copied(), Category::Personal),
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Progress => self.progress,
            Category::Dev => self.dev,
            Category::Social => self.social,
            Category::Personal => self.personal,
        }
    }

    pub fn total(&self) -> usize {
        self.progress + self.dev + self.social + self.personal
    }

    /// Unrounded share of each category; all zero when there are no items
    pub fn percentages(&self) -> CategoryPercentages {
        let total = self.total();
        let pct = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        CategoryPercentages {
            progress: pct(self.progress),
            dev: pct(self.dev),
            social: pct(self.social),
            personal: pct(self.personal),
        }
    }
}

/// Share of items per category, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryPercentages {
    pub progress: f64,
    pub dev: f64,
    pub social: f64,
    pub personal: f64,
}

impl CategoryPercentages {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Progress => self.progress,
            Category::Dev => self.dev,
            Category::Social => self.social,
            Category::Personal => self.personal,
        }
    }

    pub fn sum(&self) -> f64 {
        self.progress + self.dev + self.social + self.personal
    }
}
