//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use classboard_mcp::{DashboardServerHandler, FixedClock, PeriodTiming, ScheduleData, TestEvent};
use tempfile::NamedTempFile;

/// Build a local date-time from literal parts
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// A school week for 21HR: periods 1-2 on Monday, period 1 on Tuesday,
/// two tests in January 2025
pub fn sample_schedule() -> ScheduleData {
    let mut data = ScheduleData::new();
    data.time_settings = vec![
        PeriodTiming::new("08:00", "08:50"),
        PeriodTiming::new("09:00", "09:50"),
        PeriodTiming::new("10:00", "10:50"),
        PeriodTiming::new("11:00", "11:50"),
        PeriodTiming::new("13:00", "13:50"),
        PeriodTiming::new("14:00", "14:50"),
        PeriodTiming::new("15:00", "15:50"),
    ];
    data.set_subject("21HR", "Mon", 1, "Math").unwrap();
    data.set_subject("21HR", "Mon", 2, "Physics").unwrap();
    data.set_subject("21HR", "Tue", 1, "English").unwrap();
    data.set_subject("22HR", "Mon", 1, "History").unwrap();
    data.tests = vec![
        TestEvent::new("Physics quiz", "2025-01-20"),
        TestEvent::new("Math midterm", "2025-01-10"),
    ];
    data
}

/// Create a test handler with temporary storage and the clock pinned to `now`
pub fn get_test_handler_at(now: NaiveDateTime) -> (DashboardServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = DashboardServerHandler::new(temp_file.path().to_str().unwrap(), sample_schedule())
        .unwrap()
        .with_clock(FixedClock(now));
    (handler, temp_file)
}

/// Create a test handler on Monday 2025-01-06 at 08:30
pub fn get_test_handler() -> (DashboardServerHandler, NamedTempFile) {
    get_test_handler_at(at(2025, 1, 6, 8, 30))
}

/// Error text of a failed tool call
pub fn err_message<T: std::fmt::Debug>(result: mcp_attr::Result<T>) -> String {
    format!("{:?}", result.unwrap_err())
}
