//! Home page handlers: dashboard, current period, timetable, test countdown

use crate::countdown::{self, TestCountdown};
use crate::formatting::{self, DashboardView};
use crate::resolver::{self, PeriodStatus, ScheduleRow};
use crate::schedule::{minutes_of_day, weekday_code};
use crate::{DashboardServerHandler, DashboardState, lock};
use chrono::{Datelike, NaiveDateTime};
use mcp_attr::Result as McpResult;

/// Everything the home page derives from the clock and the schedule
struct Today {
    now: NaiveDateTime,
    day: &'static str,
    status: PeriodStatus,
    rows: Vec<ScheduleRow>,
    countdown: TestCountdown,
}

impl Today {
    fn compute(now: NaiveDateTime, state: &DashboardState) -> Self {
        let day = weekday_code(now.weekday());
        let minutes = minutes_of_day(now.time());
        let schedule = &state.schedule;
        let subjects = schedule.day_schedule(&state.settings.class_id, day);

        Self {
            now,
            day,
            status: resolver::resolve_period(minutes, &schedule.time_settings, subjects),
            rows: resolver::daily_rows(minutes, &schedule.time_settings, subjects),
            countdown: countdown::next_test(now, &schedule.tests),
        }
    }
}

impl DashboardServerHandler {
    fn today(&self) -> Today {
        let now = self.clock.now();
        let state = lock(&self.state);
        Today::compute(now, &state)
    }

    /// Renders the full home page.
    pub async fn handle_dashboard(&self) -> McpResult<String> {
        let now = self.clock.now();
        let state = lock(&self.state);
        let today = Today::compute(now, &state);
        let pomodoro = lock(&self.pomodoro).timer.clone();

        Ok(formatting::format_dashboard(&DashboardView {
            now: today.now,
            settings: &state.settings,
            status: &today.status,
            day: today.day,
            rows: &today.rows,
            countdown: &today.countdown,
            pomodoro: &pomodoro,
        }))
    }

    /// Resolves the running or next period for the selected class.
    pub async fn handle_current_period(&self) -> McpResult<String> {
        let today = self.today();
        Ok(formatting::format_period_status(&today.status))
    }

    /// Lists today's periods with the running one highlighted.
    pub async fn handle_daily_schedule(&self) -> McpResult<String> {
        let today = self.today();
        Ok(formatting::format_daily_schedule(today.day, &today.rows))
    }

    /// Counts down to the nearest upcoming test.
    pub async fn handle_test_countdown(&self) -> McpResult<String> {
        let today = self.today();
        Ok(formatting::format_countdown(&today.countdown))
    }
}
