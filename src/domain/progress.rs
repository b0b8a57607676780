//! Progress towards the MVP and overall goals

use crate::domain::entry::DiaryEntry;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Average days per month used to turn goal months into days
const DAYS_PER_MONTH: f64 = 30.44;

/// One goal progress bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalBar {
    pub label: String,
    pub months: f64,
    /// Whole percent, capped at 100
    pub pct: i64,
    pub elapsed: i64,
    pub total: i64,
    /// No start date known yet
    pub tbd: bool,
}

impl GoalBar {
    pub fn compute(label: &str, months: f64, start: Option<NaiveDate>, today: NaiveDate) -> Self {
        let total = (DAYS_PER_MONTH * months).round() as i64;

        let Some(start) = start else {
            return GoalBar {
                label: label.to_string(),
                months,
                pct: 0,
                elapsed: 0,
                total,
                tbd: true,
            };
        };

        let elapsed = (today - start).num_days().max(0);
        let pct = if total > 0 {
            ((elapsed as f64 / total as f64) * 100.0).round() as i64
        } else {
            100
        };

        GoalBar {
            label: label.to_string(),
            months,
            pct: pct.min(100),
            elapsed,
            total,
            tbd: false,
        }
    }
}

/// Both goal bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub mvp: GoalBar,
    pub overall: GoalBar,
}

/// Start of the project: the configured date, else the earliest entry
pub fn project_start(configured: Option<NaiveDate>, entries: &[DiaryEntry]) -> Result<Option<NaiveDate>> {
    if configured.is_some() {
        return Ok(configured);
    }

    let mut earliest: Option<NaiveDate> = None;
    for entry in entries {
        let date = entry.parsed_date()?;
        earliest = Some(earliest.map_or(date, |e| e.min(date)));
    }
    Ok(earliest)
}

/// Goal progress as of `today`; independent of the timeline selection
pub fn goal_progress(
    configured_start: Option<NaiveDate>,
    mvp_months: f64,
    overall_months: f64,
    entries: &[DiaryEntry],
    today: NaiveDate,
) -> Result<GoalProgress> {
    let start = project_start(configured_start, entries)?;

    Ok(GoalProgress {
        mvp: GoalBar::compute(&format!("MVP ({} months)", mvp_months), mvp_months, start, today),
        overall: GoalBar::compute(
            &format!("Overall ({} months)", overall_months),
            overall_months,
            start,
            today,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_bar_without_start_is_tbd() {
        let bar = GoalBar::compute("MVP", 3.0, None, date("2025-03-01"));
        assert!(bar.tbd);
        assert_eq!(bar.pct, 0);
        assert_eq!(bar.elapsed, 0);
        assert_eq!(bar.total, 91);
    }

    #[test]
    fn test_bar_percent_rounds_and_caps() {
        // 3 months -> 91 days, 6 months -> 183 days
        let start = date("2025-01-01");
        let bar = GoalBar::compute("MVP", 3.0, Some(start), date("2025-01-31"));
        assert_eq!(bar.elapsed, 30);
        assert_eq!(bar.pct, 33);

        let late = GoalBar::compute("MVP", 3.0, Some(start), date("2026-01-01"));
        assert_eq!(late.pct, 100);

        let overall = GoalBar::compute("Overall", 6.0, Some(start), date("2025-01-31"));
        assert_eq!(overall.total, 183);
        assert_eq!(overall.pct, 16);
    }

    #[test]
    fn test_bar_before_start_is_zero() {
        let bar = GoalBar::compute("MVP", 3.0, Some(date("2025-05-01")), date("2025-04-01"));
        assert_eq!(bar.elapsed, 0);
        assert_eq!(bar.pct, 0);
        assert!(!bar.tbd);
    }

    #[test]
    fn test_start_falls_back_to_earliest_entry() {
        let entries = vec![
            DiaryEntry::new("b", "B", "2025-01-08"),
            DiaryEntry::new("a", "A", "2025-01-02"),
        ];
        assert_eq!(project_start(None, &entries).unwrap(), Some(date("2025-01-02")));
        assert_eq!(
            project_start(Some(date("2024-12-01")), &entries).unwrap(),
            Some(date("2024-12-01"))
        );
        assert_eq!(project_start(None, &[]).unwrap(), None);
    }

    #[test]
    fn test_goal_progress_labels() {
        let progress = goal_progress(None, 3.0, 6.0, &[], date("2025-01-01")).unwrap();
        assert_eq!(progress.mvp.label, "MVP (3 months)");
        assert_eq!(progress.overall.label, "Overall (6 months)");
        assert!(progress.overall.tbd);
    }
}
