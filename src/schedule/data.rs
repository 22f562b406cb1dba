use super::timing::PeriodTiming;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of periods in a school day
pub const PERIODS_PER_DAY: usize = 7;

/// Class selected when nothing has been saved yet
pub const DEFAULT_CLASS_ID: &str = "21HR";

/// Timetable keys for each weekday, Sunday first
pub const WEEKDAY_CODES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Period number (`"1"`..`"7"`) to subject name
pub type DaySchedule = BTreeMap<String, String>;

/// Weekday code to that day's schedule
pub type ClassTimetable = BTreeMap<String, DaySchedule>;

/// Class id to its weekly timetable
pub type Timetables = BTreeMap<String, ClassTimetable>;

static EMPTY_DAY: DaySchedule = BTreeMap::new();

/// A scheduled test
///
/// `date` is kept as entered (`YYYY-MM-DD`); see [`TestEvent::parsed_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEvent {
    pub name: String,
    pub date: String,
}

impl TestEvent {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// The schedule document: period timings, per-class timetables and tests
///
/// Serializes with the same camelCase keys it is loaded from, so an export
/// can be used as the next startup source. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleData {
    pub time_settings: Vec<PeriodTiming>,
    pub timetables: Timetables,
    pub tests: Vec<TestEvent>,
}

impl Default for ScheduleData {
    fn default() -> Self {
        Self {
            time_settings: vec![PeriodTiming::default(); PERIODS_PER_DAY],
            timetables: Timetables::new(),
            tests: Vec::new(),
        }
    }
}

impl ScheduleData {
    /// Create the built-in fallback store (7 empty periods, no timetables, no tests)
    pub fn new() -> Self {
        Self::default()
    }

    /// Subjects for one class on one weekday
    ///
    /// Missing class or day entries read as an empty schedule.
    pub fn day_schedule(&self, class_id: &str, day: &str) -> &DaySchedule {
        self.timetables
            .get(class_id)
            .and_then(|days| days.get(day))
            .unwrap_or(&EMPTY_DAY)
    }

    /// Subject for a period, treating empty strings as unscheduled
    pub fn subject<'a>(day: &'a DaySchedule, period: usize) -> Option<&'a str> {
        day.get(&period.to_string())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Timetable key for a weekday
pub fn weekday_code(day: Weekday) -> &'static str {
    WEEKDAY_CODES[day.num_days_from_sunday() as usize]
}

pub fn is_weekday_code(code: &str) -> bool {
    WEEKDAY_CODES.contains(&code)
}

/// Class ids offered in settings and the admin panel (`21HR`..`28HR`)
pub fn class_ids() -> Vec<String> {
    (21..=28).map(|n| format!("{}HR", n)).collect()
}

pub fn is_class_id(class_id: &str) -> bool {
    class_ids().iter().any(|c| c == class_id)
}
