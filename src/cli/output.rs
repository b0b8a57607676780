//! Output formatting utilities

use crate::application::dashboard::TimelineView;
use crate::application::DashboardView;
use crate::domain::color::{color_for_percent, BalanceStatus};
use crate::domain::feed::EntryCard;
use crate::domain::highlights::Highlight;
use crate::domain::progress::GoalBar;
use crate::domain::Category;
use std::fmt::Write;

fn format_goal_bar(out: &mut String, bar: &GoalBar) {
    let label = if bar.tbd {
        format!("{} (start: TBD)", bar.label)
    } else {
        bar.label.clone()
    };
    let detail = if bar.tbd {
        "waiting for day 1…".to_string()
    } else {
        format!("{}/{} days", bar.elapsed, bar.total)
    };
    let _ = writeln!(out, "  {:<32} {:>3}%  {}", label, bar.pct, detail);
}

/// Format the timeline control state
pub fn format_timeline(timeline: &TimelineView) -> String {
    if timeline.weeks.is_empty() {
        return "No entries yet".to_string();
    }

    let mut out = String::new();
    for week in &timeline.weeks {
        let marker = if Some(week.week) == timeline.current_week {
            '*'
        } else {
            ' '
        };
        let days: Vec<String> = week
            .days
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        let _ = writeln!(out, "{} Week {:>2}  {}", marker, week.week, days.join(", "));
    }
    out
}

fn format_highlight(out: &mut String, hl: &Highlight) {
    let scope = match hl.for_day {
        Some(day) => format!("for {}", day.format("%Y-%m-%d")),
        None => "latest entry".to_string(),
    };
    let _ = writeln!(out, "{} ({})", hl.field.title(), scope);
    for item in &hl.preview {
        let _ = writeln!(out, "  - {}", item);
    }
    if hl.more > 0 {
        let _ = writeln!(out, "  (+{} more)", hl.more);
    }
    out.push('\n');
}

/// Format entry cards for display
pub fn format_entry_cards(cards: &[EntryCard]) -> String {
    if cards.is_empty() {
        return "No entry for this selection.".to_string();
    }

    let mut out = String::new();
    for card in cards {
        let mood = card
            .mood
            .as_ref()
            .map(|m| format!(" • {}", m))
            .unwrap_or_default();
        let _ = writeln!(out, "{} — {}{}", card.title, card.display_date, mood);

        if !card.metrics.is_empty() {
            let metrics: Vec<String> = card
                .metrics
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            let _ = writeln!(out, "  {}", metrics.join("  "));
        }

        for section in &card.sections {
            let _ = writeln!(out, "  {}", section.label);
            for item in &section.items {
                match &item.link {
                    Some(link) => {
                        let _ = writeln!(out, "    - {} <{}>", item.text, link);
                    }
                    None => {
                        let _ = writeln!(out, "    - {}", item.text);
                    }
                }
                if let Some(code) = &item.code {
                    let lang = item.lang.as_deref().unwrap_or("text");
                    let _ = writeln!(out, "      ```{}", lang);
                    for line in code.lines() {
                        let _ = writeln!(out, "      {}", line);
                    }
                    let _ = writeln!(out, "      ```");
                }
            }
        }

        if !card.discussion.is_empty() {
            let links: Vec<String> = card
                .discussion
                .iter()
                .map(|l| format!("{} <{}>", l.label, l.url))
                .collect();
            let _ = writeln!(out, "  Discuss on: {}", links.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Format the whole dashboard as text
pub fn format_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Build day: {}   Hours spent: {}   Money spent: €{}\n",
        view.counters.build_day, view.counters.hours, view.counters.money
    );

    out.push_str("Progress to Goals\n");
    format_goal_bar(&mut out, &view.goals.mvp);
    format_goal_bar(&mut out, &view.goals.overall);
    out.push('\n');

    out.push_str("Timeline\n");
    out.push_str(format_timeline(&view.timeline).trim_end());
    out.push('\n');
    let day = view
        .selection
        .and_then(|s| s.day)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "  Day: {}\n", day);

    let _ = writeln!(out, "Balance ({} items)", view.balance.total);
    for slice in &view.balance.slices {
        let _ = writeln!(
            out,
            "  {:<9} {:>3}  {:>3}%  {:<20} {}",
            slice.label,
            slice.count,
            slice.pct.round(),
            slice.color.to_css(),
            status_name(slice.status)
        );
    }
    let _ = writeln!(
        out,
        "  Theme: {} → {}\n",
        view.balance.theme.start, view.balance.theme.end
    );

    for hl in [&view.challenge, &view.til].into_iter().flatten() {
        format_highlight(&mut out, hl);
    }

    out.push_str("Achievements\n");
    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|&c| format!("{} {}", c.label(), view.achievements.count(c)))
        .collect();
    let _ = writeln!(out, "  {}", counts.join(" · "));
    let followers = view.achievements.followers_summary();
    if followers.is_empty() {
        let _ = writeln!(out, "  Posts: {}\n", view.achievements.posts);
    } else {
        let _ = writeln!(out, "  Posts: {} · {}\n", view.achievements.posts, followers);
    }

    if !view.thanks.is_empty() {
        let _ = writeln!(out, "Special Thanks ({} items)", view.thanks.len());
        for thanks in &view.thanks {
            match &thanks.item.caption {
                Some(caption) => {
                    let _ = writeln!(out, "  {}  {} — {}", thanks.date, thanks.item.title, caption);
                }
                None => {
                    let _ = writeln!(out, "  {}  {}", thanks.date, thanks.item.title);
                }
            }
        }
        out.push('\n');
    }

    out.push_str("Daily Entries\n");
    out.push_str(&format_entry_cards(&view.entries));
    out
}

fn status_name(status: BalanceStatus) -> &'static str {
    match status {
        BalanceStatus::Balanced => "balanced",
        BalanceStatus::Close => "close",
        BalanceStatus::Off => "off",
    }
}

/// Format the balance color of a percentage
pub fn format_color(percent: f64) -> String {
    let color = color_for_percent(percent);
    format!(
        "{}  (h={:.2} s={:.2} l={:.2})  {}",
        color.to_css(),
        color.h,
        color.s,
        color.l,
        status_name(BalanceStatus::for_percent(percent))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{Bullet, DiaryEntry};
    use crate::domain::timeline::WeekDays;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_empty_cards() {
        assert_eq!(format_entry_cards(&[]), "No entry for this selection.");
    }

    #[test]
    fn test_format_card() {
        let mut entry = DiaryEntry::new("day-3", "Day 3", "2025-01-03");
        entry.mood = Some("tired".to_string());
        entry.progress = vec![Bullet::Plain("shipped".to_string())];
        let card = EntryCard::from_entry(&entry).unwrap();

        let output = format_entry_cards(&[card]);
        assert!(output.contains("Day 3 — Jan 3, 2025 • tired"));
        assert!(output.contains("  Overall\n    - shipped"));
    }

    #[test]
    fn test_format_timeline_marks_current_week() {
        let timeline = TimelineView {
            weeks: vec![
                WeekDays {
                    week: 2,
                    days: vec![date("2025-01-08")],
                },
                WeekDays {
                    week: 1,
                    days: vec![date("2025-01-03"), date("2025-01-01")],
                },
            ],
            current_week: Some(1),
            days_in_week: vec![date("2025-01-03"), date("2025-01-01")],
            day_index: 0,
        };
        let output = format_timeline(&timeline);
        assert!(output.contains("  Week  2  2025-01-08"));
        assert!(output.contains("* Week  1  2025-01-03, 2025-01-01"));
    }

    #[test]
    fn test_format_empty_timeline() {
        let timeline = TimelineView {
            weeks: vec![],
            current_week: None,
            days_in_week: vec![],
            day_index: 0,
        };
        assert_eq!(format_timeline(&timeline), "No entries yet");
    }

    #[test]
    fn test_format_color() {
        let output = format_color(22.5);
        assert!(output.starts_with("hsl(195, 78%, 53%)"));
        assert!(output.contains("balanced"));
    }
}
