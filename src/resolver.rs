//! Period resolution
//!
//! Maps a minute of the day onto the school day: which period is running, which
//! comes next, or whether the day is over. Also builds the daily timetable rows
//! shown on the dashboard.

use crate::schedule::{DaySchedule, PeriodTiming, ScheduleData};

/// Label for a period with no subject assigned
pub const FREE_PERIOD_LABEL: &str = "Free";

/// Where "now" falls in the school day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodStatus {
    /// The next period has not started yet
    Upcoming {
        subject: String,
        period: usize,
        minutes_until_start: u32,
    },
    /// A period is running; `minutes_remaining` counts to its end
    InProgress {
        subject: String,
        period: usize,
        minutes_remaining: u32,
    },
    /// Every period of a scheduled day has ended
    Finished,
    /// Nothing is scheduled today
    Holiday,
}

/// Resolve the current or next period
///
/// Periods are scanned in order and the first one that either starts after
/// `now` or contains `now` wins, so on overlapping input the lowest period
/// number is reported. Timings that fail to parse are skipped.
pub fn resolve_period(now: u32, timings: &[PeriodTiming], day: &DaySchedule) -> PeriodStatus {
    for (idx, timing) in timings.iter().enumerate() {
        let Some((start, end)) = timing.bounds() else {
            continue;
        };
        let period = idx + 1;
        let subject = || {
            ScheduleData::subject(day, period)
                .unwrap_or(FREE_PERIOD_LABEL)
                .to_string()
        };

        if now < start {
            return PeriodStatus::Upcoming {
                subject: subject(),
                period,
                minutes_until_start: start - now,
            };
        }
        if now <= end {
            return PeriodStatus::InProgress {
                subject: subject(),
                period,
                minutes_remaining: end - now,
            };
        }
    }

    if day.is_empty() {
        PeriodStatus::Holiday
    } else {
        PeriodStatus::Finished
    }
}

/// One line of the daily timetable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub period: usize,
    pub subject: Option<String>,
    pub start: String,
    pub end: String,
    /// `now` falls inside this period
    pub active: bool,
}

/// Build the timetable for one day, flagging every period that contains `now`
pub fn daily_rows(now: u32, timings: &[PeriodTiming], day: &DaySchedule) -> Vec<ScheduleRow> {
    timings
        .iter()
        .enumerate()
        .map(|(idx, timing)| ScheduleRow {
            period: idx + 1,
            subject: ScheduleData::subject(day, idx + 1).map(str::to_string),
            start: timing.start.clone(),
            end: timing.end.clone(),
            active: timing.contains(now),
        })
        .collect()
}
