//! Admin edits over the schedule store
//!
//! Edits land in memory immediately. Values are not checked against each
//! other: a period may end before it starts and the same test may be listed
//! twice. Only structural problems (unknown period, empty test form) are
//! rejected.

use super::data::{ScheduleData, TestEvent, is_weekday_code};
use super::timing::{PeriodTiming, TimingField};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleEditError {
    #[error("Period {period} does not exist. Valid periods: 1-{count}")]
    UnknownPeriod { period: usize, count: usize },
    #[error("Invalid weekday '{0}'. Valid weekdays: Sun, Mon, Tue, Wed, Thu, Fri, Sat")]
    UnknownWeekday(String),
    #[error("Test {position} does not exist ({count} test(s) listed)")]
    UnknownTest { position: usize, count: usize },
    #[error("Both a test name and a date are required")]
    IncompleteTest,
}

impl ScheduleData {
    /// Mutable timing for a 1-based period number
    fn timing_mut(&mut self, period: usize) -> Result<&mut PeriodTiming, ScheduleEditError> {
        let count = self.time_settings.len();
        period
            .checked_sub(1)
            .and_then(|idx| self.time_settings.get_mut(idx))
            .ok_or(ScheduleEditError::UnknownPeriod { period, count })
    }

    /// Overwrite one side of a period's timing
    pub fn set_period_time(
        &mut self,
        period: usize,
        field: TimingField,
        value: impl Into<String>,
    ) -> Result<(), ScheduleEditError> {
        let timing = self.timing_mut(period)?;
        match field {
            TimingField::Start => timing.start = value.into(),
            TimingField::End => timing.end = value.into(),
        }
        Ok(())
    }

    /// Set the subject of a class/day/period, creating the class and day entries on demand
    ///
    /// An empty subject is stored as-is and reads back as a free period.
    pub fn set_subject(
        &mut self,
        class_id: &str,
        day: &str,
        period: usize,
        subject: impl Into<String>,
    ) -> Result<(), ScheduleEditError> {
        if !is_weekday_code(day) {
            return Err(ScheduleEditError::UnknownWeekday(day.to_string()));
        }
        let count = self.time_settings.len();
        if period == 0 || period > count {
            return Err(ScheduleEditError::UnknownPeriod { period, count });
        }

        self.timetables
            .entry(class_id.to_string())
            .or_default()
            .entry(day.to_string())
            .or_default()
            .insert(period.to_string(), subject.into());
        Ok(())
    }

    /// Append a test to the end of the list
    pub fn add_test(&mut self, name: &str, date: &str) -> Result<(), ScheduleEditError> {
        if name.is_empty() || date.is_empty() {
            return Err(ScheduleEditError::IncompleteTest);
        }
        self.tests.push(TestEvent::new(name, date));
        Ok(())
    }

    /// Remove the test at a 1-based position; later tests shift up
    pub fn delete_test(&mut self, position: usize) -> Result<TestEvent, ScheduleEditError> {
        let count = self.tests.len();
        if position == 0 || position > count {
            return Err(ScheduleEditError::UnknownTest { position, count });
        }
        Ok(self.tests.remove(position - 1))
    }
}
