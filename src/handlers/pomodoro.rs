//! Pomodoro handlers for the dashboard server
//!
//! The timer lives behind its own lock so the countdown task never waits on
//! schedule or settings access.

use crate::formatting;
use crate::{DashboardServerHandler, lock};
use mcp_attr::{Result as McpResult, bail_public};

impl DashboardServerHandler {
    /// Reports the timer and drains pending session-finished notices.
    pub async fn handle_pomodoro_status(&self) -> McpResult<String> {
        let mut session = lock(&self.pomodoro);
        let mut result = String::new();
        for transition in session.notifications.drain(..) {
            result.push_str(transition.message());
            result.push('\n');
        }
        result.push_str(&formatting::format_pomodoro(&session.timer));
        Ok(result)
    }

    /// Starts a stopped timer or pauses a running one.
    pub async fn handle_pomodoro_toggle(&self) -> McpResult<String> {
        let (running, display) = {
            let mut session = lock(&self.pomodoro);
            let running = session.timer.toggle();
            (running, formatting::format_pomodoro(&session.timer))
        };

        if running {
            self.start_ticker();
            tracing::debug!("pomodoro started");
            Ok(format!("Timer started\n{}", display))
        } else {
            self.stop_ticker();
            tracing::debug!("pomodoro paused");
            Ok(format!("Timer paused\n{}", display))
        }
    }

    /// Stops the timer and returns to a fresh work session.
    pub async fn handle_pomodoro_reset(&self) -> McpResult<String> {
        self.stop_ticker();
        let mut session = lock(&self.pomodoro);
        session.timer.reset();
        Ok(format!(
            "Timer reset\n{}",
            formatting::format_pomodoro(&session.timer)
        ))
    }

    /// Validates and applies new durations, then resets.
    pub async fn handle_pomodoro_configure(
        &self,
        work_minutes: String,
        break_minutes: String,
    ) -> McpResult<String> {
        let mut session = lock(&self.pomodoro);
        if let Err(e) = session.timer.reconfigure(&work_minutes, &break_minutes) {
            drop(session);
            bail_public!(_, "{}", e);
        }
        let display = formatting::format_pomodoro(&session.timer);
        drop(session);

        self.stop_ticker();
        Ok(format!("Pomodoro durations updated\n{}", display))
    }
}
