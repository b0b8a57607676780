//! Build dashboard view-model

use crate::domain::achievements::Achievements;
use crate::domain::balance::BalancePie;
use crate::domain::counters::Counters;
use crate::domain::feed::{entry_feed, EntryCard};
use crate::domain::highlights::{highlight, Highlight, HighlightField};
use crate::domain::progress::{goal_progress, GoalProgress};
use crate::domain::selection::{filter_by_cutoff, Selection};
use crate::domain::thanks::{thanks_gallery, GalleryItem};
use crate::domain::timeline::{Timeline, WeekDays};
use crate::domain::DiaryEntry;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{SiteConfig, SiteRepository};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

/// State of the timeline control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub weeks: Vec<WeekDays>,
    pub current_week: Option<u32>,
    pub days_in_week: Vec<NaiveDate>,
    pub day_index: usize,
}

/// Everything the build page shows for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Option<Selection>,
    pub goals: GoalProgress,
    pub timeline: TimelineView,
    pub balance: BalancePie,
    pub challenge: Option<Highlight>,
    pub til: Option<Highlight>,
    pub counters: Counters,
    pub achievements: Achievements,
    pub thanks: Vec<GalleryItem>,
    pub entries: Vec<EntryCard>,
}

/// Diary dashboard over a fixed set of entries.
///
/// Holds the timeline selection explicitly; every view is recomputed from
/// the entries, the config and that selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    entries: Vec<DiaryEntry>,
    config: SiteConfig,
    timeline: Timeline,
    selection: Option<Selection>,
}

impl Dashboard {
    /// Build the dashboard, selecting the latest week and day when there are entries
    pub fn new(mut entries: Vec<DiaryEntry>, config: SiteConfig) -> Result<Self> {
        let timeline = Timeline::from_entries(&entries)?;
        // Every date parsed above; newest first from here on
        entries.sort_by_key(|e| Reverse(e.parsed_date().ok()));
        let selection = timeline.default_selection();
        if let Some(sel) = &selection {
            debug!(week = ?sel.week, day = ?sel.day, "initialized default selection");
        }

        Ok(Dashboard {
            entries,
            config,
            timeline,
            selection,
        })
    }

    /// Load entries and config from a site
    pub fn load<R: SiteRepository>(repository: &R) -> Result<Self> {
        let config = repository.load_config()?;
        let entries = repository.load_entries()?;
        Self::new(entries, config)
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Show every entry
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Pick a week; its day is left unselected
    pub fn select_week(&mut self, week: u32) -> Result<()> {
        self.selection = Some(self.timeline.select_week(week)?);
        Ok(())
    }

    /// Pick the n-th newest day of the current week
    pub fn select_day_index(&mut self, index: usize) -> Result<()> {
        self.selection = Some(
            self.timeline
                .select_day_index(self.selection.as_ref(), index)?,
        );
        Ok(())
    }

    /// Pick a day that has an entry
    pub fn select_day(&mut self, day: NaiveDate) -> Result<()> {
        self.selection = Some(self.timeline.select_date(day)?);
        Ok(())
    }

    /// Apply optional week/day choices as given on the command line
    pub fn apply(&mut self, week: Option<u32>, day: Option<NaiveDate>) -> Result<()> {
        match (week, day) {
            (_, Some(day)) => {
                let selection = self.timeline.select_date(day)?;
                if let Some(week) = week.filter(|w| Some(*w) != selection.week) {
                    return Err(DiaryError::InvalidSelection(format!(
                        "{} is not in week {}",
                        day.format("%Y-%m-%d"),
                        week
                    )));
                }
                self.selection = Some(selection);
                Ok(())
            }
            (Some(week), None) => self.select_week(week),
            (None, None) => Ok(()),
        }
    }

    pub fn timeline_view(&self) -> TimelineView {
        let sel = self.selection.as_ref();
        TimelineView {
            weeks: self.timeline.weeks.clone(),
            current_week: self.timeline.current_week(sel),
            days_in_week: self.timeline.current_days(sel).to_vec(),
            day_index: self.timeline.day_index(sel),
        }
    }

    /// Entry cards for the current selection
    pub fn feed(&self) -> Result<Vec<EntryCard>> {
        entry_feed(&self.entries, self.selection.as_ref())
    }

    /// Compute every section as of `today`
    pub fn view(&self, today: NaiveDate) -> Result<DashboardView> {
        let sel = self.selection.as_ref();
        let filtered = filter_by_cutoff(&self.entries, sel)?;

        let goals = goal_progress(
            self.config.project_start,
            self.config.mvp_months,
            self.config.overall_months,
            &self.entries,
            today,
        )?;

        let counters = Counters::compute(
            &filtered,
            self.config.counters_mode,
            self.config.project_start,
            sel.and_then(Selection::cutoff),
            today,
        );

        Ok(DashboardView {
            selection: self.selection,
            goals,
            timeline: self.timeline_view(),
            balance: BalancePie::compute(&filtered),
            challenge: highlight(&self.entries, sel, HighlightField::Challenge),
            til: highlight(&self.entries, sel, HighlightField::TodayILearned),
            counters,
            achievements: Achievements::collect(&filtered),
            thanks: thanks_gallery(&self.entries, sel)?,
            entries: self.feed()?,
        })
    }
}
