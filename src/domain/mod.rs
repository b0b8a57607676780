//! Domain layer - Diary records and the aggregates derived from them

pub mod achievements;
pub mod balance;
pub mod category;
pub mod color;
pub mod counters;
pub mod entry;
pub mod feed;
pub mod highlights;
pub mod progress;
pub mod selection;
pub mod thanks;
pub mod timeline;

pub use achievements::Achievements;
pub use balance::BalancePie;
pub use category::{Category, CategoryTally};
pub use color::{color_for_percent, Hsl};
pub use counters::{Counters, CountersMode};
pub use entry::{Bullet, DiaryEntry};
pub use feed::EntryCard;
pub use highlights::{Highlight, HighlightField};
pub use progress::GoalProgress;
pub use selection::{filter_by_cutoff, Selection};
pub use timeline::Timeline;
