//! Schedule data store
//!
//! Holds everything the admin panel edits and the dashboard reads:
//! - `timing`: period start/end times and `HH:MM` parsing
//! - `data`: the store itself (timings, timetables, tests) and its lookups
//! - `editing`: in-place admin edits over the store

mod data;
mod editing;
mod timing;

pub use data::{
    ClassTimetable, DaySchedule, ScheduleData, TestEvent, Timetables, class_ids, is_class_id,
    is_weekday_code, weekday_code, DEFAULT_CLASS_ID, PERIODS_PER_DAY, WEEKDAY_CODES,
};
pub use editing::ScheduleEditError;
pub use timing::{PeriodTiming, TimingField, minutes_of_day, parse_clock_minutes};
