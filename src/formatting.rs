//! Formatting helper functions for the dashboard server
//!
//! Every tool answers with plain text; this module turns the computed results
//! into that text. Nothing here touches server state.

use crate::countdown::TestCountdown;
use crate::pomodoro::PomodoroTimer;
use crate::resolver::{PeriodStatus, ScheduleRow};
use crate::schedule::{ScheduleData, class_ids};
use crate::settings::UserSettings;
use crate::todo::TodoList;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Clock line, `HH:MM:SS` in 24-hour form
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Date line with the weekday, e.g. `2025-01-09 (Thu)`
pub fn format_date(now: NaiveDateTime) -> String {
    format!("{} ({})", now.format("%Y-%m-%d"), now.weekday())
}

/// Greeting for the hour of day
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=10 => "Good morning! Let's make today a good one.",
        11..=17 => "Good afternoon! Stay focused for the afternoon classes.",
        18..=23 => "Good evening! Are you ready for tomorrow?",
        _ => "Keep it up today!",
    }
}

pub fn format_period_status(status: &PeriodStatus) -> String {
    match status {
        PeriodStatus::Upcoming {
            subject,
            period,
            minutes_until_start,
        } => format!(
            "Next: {} (period {}) starts in {} min",
            subject, period, minutes_until_start
        ),
        PeriodStatus::InProgress {
            subject,
            period,
            minutes_remaining,
        } => format!(
            "Now: {} (period {}, in progress) - {} min left",
            subject, period, minutes_remaining
        ),
        PeriodStatus::Finished => "Classes are over for today".to_string(),
        PeriodStatus::Holiday => "No school today".to_string(),
    }
}

/// Timetable for one day; the running period is marked with `>`
pub fn format_daily_schedule(day: &str, rows: &[ScheduleRow]) -> String {
    let mut result = format!("Timetable ({}):\n", day);
    for row in rows {
        result.push_str(&format!(
            "{} {}. {} [{} - {}]\n",
            if row.active { ">" } else { " " },
            row.period,
            row.subject.as_deref().unwrap_or("-"),
            row.start,
            row.end
        ));
    }
    result
}

pub fn format_countdown(countdown: &TestCountdown) -> String {
    match countdown {
        TestCountdown::Upcoming {
            name,
            date,
            days_remaining,
        } => format!(
            "Next test: {} on {} - {} day(s) left",
            name, date, days_remaining
        ),
        TestCountdown::None => "No tests scheduled".to_string(),
    }
}

/// Calendar panel: the linked iCal URL, or a hint to set one
pub fn format_calendar(ical_url: &str) -> String {
    if ical_url.is_empty() {
        "Calendar: register an iCal URL in settings".to_string()
    } else {
        format!("Calendar: linked ({})", ical_url)
    }
}

/// Progress line, e.g. `To-do: 1/4 done (25%)`
pub fn format_todo_progress(todos: &TodoList) -> String {
    let progress = todos.progress();
    format!(
        "To-do: {}/{} done ({:.0}%)",
        progress.done, progress.total, progress.percent
    )
}

/// Numbered to-do list followed by the progress line
pub fn format_todos(todos: &TodoList) -> String {
    if todos.is_empty() {
        return format!("No to-do items\n{}", format_todo_progress(todos));
    }

    let mut result = String::new();
    for (idx, item) in todos.items().iter().enumerate() {
        result.push_str(&format!(
            "{}. [{}] {}\n",
            idx + 1,
            if item.done { "x" } else { " " },
            item.text
        ));
    }
    result.push_str(&format_todo_progress(todos));
    result
}

pub fn format_pomodoro(timer: &PomodoroTimer) -> String {
    format!(
        "Pomodoro: {} ({}, {})",
        timer.display(),
        timer.status_line(),
        if timer.is_running() { "running" } else { "stopped" }
    )
}

pub fn format_settings(settings: &UserSettings) -> String {
    format!(
        "Class: {}\niCal URL: {}\nAvailable classes: {}",
        settings.class_id,
        if settings.ical_url.is_empty() {
            "(not set)"
        } else {
            settings.ical_url.as_str()
        },
        class_ids().join(", ")
    )
}

/// Admin view: timings, the editor grid for one class/day, and the test list
pub fn format_admin_view(data: &ScheduleData, class_id: &str, day: &str) -> String {
    let mut result = String::from("Period timings:\n");
    for (idx, timing) in data.time_settings.iter().enumerate() {
        result.push_str(&format!(
            "  {}. {} ~ {}\n",
            idx + 1,
            timing.start,
            timing.end
        ));
    }

    result.push_str(&format!("\nTimetable {} {}:\n", class_id, day));
    let subjects = data.day_schedule(class_id, day);
    for period in 1..=data.time_settings.len() {
        result.push_str(&format!(
            "  {}. {}\n",
            period,
            subjects.get(&period.to_string()).map(String::as_str).unwrap_or("")
        ));
    }

    result.push_str("\nTests:\n");
    if data.tests.is_empty() {
        result.push_str("  (none)\n");
    }
    for (idx, test) in data.tests.iter().enumerate() {
        result.push_str(&format!("  {}. {} ({})\n", idx + 1, test.name, test.date));
    }
    result
}

/// The home page in one block
pub struct DashboardView<'a> {
    pub now: NaiveDateTime,
    pub settings: &'a UserSettings,
    pub status: &'a PeriodStatus,
    pub day: &'a str,
    pub rows: &'a [ScheduleRow],
    pub countdown: &'a TestCountdown,
    pub pomodoro: &'a PomodoroTimer,
}

pub fn format_dashboard(view: &DashboardView<'_>) -> String {
    format!(
        "{} {}\n{}\nClass: {}\n\n{}\n\n{}\n{}\n{}\n{}\n{}",
        format_date(view.now),
        format_clock(view.now),
        greeting(view.now.hour()),
        view.settings.class_id,
        format_period_status(view.status),
        format_daily_schedule(view.day, view.rows),
        format_countdown(view.countdown),
        format_calendar(&view.settings.ical_url),
        format_todo_progress(&view.settings.todos),
        format_pomodoro(view.pomodoro)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_greeting_by_hour() {
        assert!(greeting(5).starts_with("Good morning"));
        assert!(greeting(10).starts_with("Good morning"));
        assert!(greeting(11).starts_with("Good afternoon"));
        assert!(greeting(17).starts_with("Good afternoon"));
        assert!(greeting(18).starts_with("Good evening"));
        assert_eq!(greeting(3), "Keep it up today!");
    }

    #[test]
    fn test_clock_and_date() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 9)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        assert_eq!(format_clock(now), "07:05:03");
        assert_eq!(format_date(now), "2025-01-09 (Thu)");
    }

    #[test]
    fn test_period_status_lines() {
        let upcoming = PeriodStatus::Upcoming {
            subject: "Physics".to_string(),
            period: 2,
            minutes_until_start: 5,
        };
        assert_eq!(
            format_period_status(&upcoming),
            "Next: Physics (period 2) starts in 5 min"
        );
        assert_eq!(format_period_status(&PeriodStatus::Holiday), "No school today");
    }

    #[test]
    fn test_countdown_none_is_distinct_from_zero_days() {
        let today = TestCountdown::Upcoming {
            name: "Math".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            days_remaining: 0,
        };
        assert!(format_countdown(&today).contains("0 day(s)"));
        assert_eq!(format_countdown(&TestCountdown::None), "No tests scheduled");
    }

    #[test]
    fn test_format_todos() {
        let mut todos = TodoList::new();
        assert!(format_todos(&todos).starts_with("No to-do items"));

        todos.add("Essay").unwrap();
        todos.add("Flashcards").unwrap();
        todos.toggle(1).unwrap();
        let text = format_todos(&todos);
        assert!(text.contains("1. [ ] Essay"));
        assert!(text.contains("2. [x] Flashcards"));
        assert!(text.ends_with("To-do: 1/2 done (50%)"));
    }

    #[test]
    fn test_format_calendar() {
        assert!(format_calendar("").contains("register"));
        assert!(format_calendar("https://example.com/a.ics").contains("https://example.com/a.ics"));
    }
}
