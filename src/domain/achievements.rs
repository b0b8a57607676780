//! Achievement tallies

use crate::domain::category::Category;
use crate::domain::entry::DiaryEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Flattened bullet texts per category plus social reach
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Achievements {
    pub progress: Vec<String>,
    pub dev: Vec<String>,
    pub social: Vec<String>,
    pub personal: Vec<String>,
    /// Number of social posts
    pub posts: usize,
    /// Follower change per platform
    pub followers: BTreeMap<String, i64>,
}

impl Achievements {
    /// Aggregate the entries in scope, keeping their order
    pub fn collect(filtered: &[&DiaryEntry]) -> Self {
        let flatten = |category: Category| -> Vec<String> {
            filtered
                .iter()
                .flat_map(|e| category.bullets(e))
                .map(|b| b.display_text().to_string())
                .collect()
        };

        let mut followers = BTreeMap::new();
        for entry in filtered {
            for (platform, delta) in &entry.followers_delta {
                *followers.entry(platform.clone()).or_insert(0) += *delta;
            }
        }

        Achievements {
            progress: flatten(Category::Progress),
            dev: flatten(Category::Dev),
            social: flatten(Category::Social),
            personal: flatten(Category::Personal),
            posts: filtered.iter().map(|e| e.social_posts.len()).sum(),
            followers,
        }
    }

    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Progress => &self.progress,
            Category::Dev => &self.dev,
            Category::Social => &self.social,
            Category::Personal => &self.personal,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.items(category).len()
    }

    /// Summary line such as `x +12 linkedin +3`
    pub fn followers_summary(&self) -> String {
        self.followers
            .iter()
            .map(|(platform, delta)| format!("{} {:+}", platform, delta))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{Bullet, RichBullet};

    fn sample() -> Vec<DiaryEntry> {
        let mut newer = DiaryEntry::new("b", "B", "2025-01-02");
        newer.progress = vec![
            Bullet::Plain("  launched beta ".to_string()),
            Bullet::Rich(RichBullet {
                text: "wrote docs".to_string(),
                ..Default::default()
            }),
        ];
        newer.social_posts = vec!["https://x.com/1".to_string()];
        newer.followers_delta.insert("x".to_string(), 5);

        let mut older = DiaryEntry::new("a", "A", "2025-01-01");
        older.progress = vec![Bullet::Plain("set up repo".to_string())];
        older.personal = vec![Bullet::Plain("ran 5k".to_string())];
        older.social_posts = vec!["p1".to_string(), "p2".to_string()];
        older.followers_delta.insert("x".to_string(), 2);
        older.followers_delta.insert("linkedin".to_string(), -1);

        vec![newer, older]
    }

    #[test]
    fn test_flattens_in_entry_order() {
        let all = sample();
        let refs: Vec<&DiaryEntry> = all.iter().collect();
        let ach = Achievements::collect(&refs);
        assert_eq!(ach.progress, vec!["launched beta", "wrote docs", "set up repo"]);
        assert_eq!(ach.personal, vec!["ran 5k"]);
        assert!(ach.dev.is_empty());
        assert_eq!(ach.count(Category::Progress), 3);
    }

    #[test]
    fn test_counts_match_category_tallies() {
        let all = sample();
        let refs: Vec<&DiaryEntry> = all.iter().collect();
        let ach = Achievements::collect(&refs);
        let tally = crate::domain::category::CategoryTally::from_entries(&refs);
        for category in Category::ALL {
            assert_eq!(ach.count(category), tally.get(category));
        }
    }

    #[test]
    fn test_posts_and_followers_are_summed() {
        let all = sample();
        let refs: Vec<&DiaryEntry> = all.iter().collect();
        let ach = Achievements::collect(&refs);
        assert_eq!(ach.posts, 3);
        assert_eq!(ach.followers.get("x"), Some(&7));
        assert_eq!(ach.followers.get("linkedin"), Some(&-1));
        assert_eq!(ach.followers_summary(), "linkedin -1 x +7");
    }

    #[test]
    fn test_empty_scope() {
        let ach = Achievements::collect(&[]);
        assert_eq!(ach, Achievements::default());
        assert_eq!(ach.followers_summary(), "");
    }
}
