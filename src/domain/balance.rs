//! Balance pie

use crate::domain::category::{Category, CategoryTally};
use crate::domain::color::{color_for_percent, BalanceStatus, BalanceTheme, Hsl};
use crate::domain::entry::DiaryEntry;
use serde::Serialize;

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub pct: f64,
    pub status: BalanceStatus,
    pub color: Hsl,
}

/// Category balance over the entries in scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancePie {
    pub total: usize,
    pub slices: Vec<Slice>,
    pub theme: BalanceTheme,
}

impl BalancePie {
    pub fn compute(filtered: &[&DiaryEntry]) -> Self {
        let counts = CategoryTally::from_entries(filtered);
        let pcts = counts.percentages();

        let slices = Category::ALL
            .iter()
            .map(|&category| {
                let pct = pcts.get(category);
                Slice {
                    category,
                    label: category.label(),
                    count: counts.get(category),
                    pct,
                    status: BalanceStatus::for_percent(pct),
                    color: color_for_percent(pct),
                }
            })
            .collect();

        BalancePie {
            total: counts.total(),
            slices,
            theme: BalanceTheme::for_progress_share(pcts.progress),
        }
    }

    /// Cumulative start/end percent of each slice, in slice order
    pub fn conic_stops(&self) -> Vec<(f64, f64)> {
        let mut acc = 0.0;
        self.slices
            .iter()
            .map(|s| {
                let start = acc;
                acc += s.pct;
                (start, acc)
            })
            .collect()
    }
}
