//! Admin panel handlers for the dashboard server
//!
//! All tools except `admin_login` require an unlocked session. Schedule edits
//! change the in-memory store only; `admin_export` is the one way to write
//! them out.

use crate::admin::{self, DEFAULT_EXPORT_FILE};
use crate::formatting;
use crate::schedule::DEFAULT_CLASS_ID;
use crate::validation;
use crate::{DashboardServerHandler, DashboardState, lock};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::MutexGuard;

const LOCKED_MESSAGE: &str = "Admin panel is locked. Log in with admin_login first.";

impl DashboardServerHandler {
    /// Lock the state, failing unless the admin session is unlocked
    fn admin_state(&self) -> McpResult<MutexGuard<'_, DashboardState>> {
        let state = lock(&self.state);
        if !state.admin.is_unlocked() {
            drop(state);
            bail_public!(_, "{}", LOCKED_MESSAGE);
        }
        Ok(state)
    }

    pub async fn handle_admin_login(&self, passphrase: String) -> McpResult<String> {
        let mut state = lock(&self.state);
        if !state.admin.login(&passphrase) {
            drop(state);
            tracing::debug!("admin login rejected");
            bail_public!(_, "Incorrect passphrase");
        }
        Ok("Admin panel unlocked".to_string())
    }

    pub async fn handle_admin_logout(&self) -> McpResult<String> {
        lock(&self.state).admin.logout();
        Ok("Admin panel locked".to_string())
    }

    pub async fn handle_admin_view(
        &self,
        class_id: Option<String>,
        day: Option<String>,
    ) -> McpResult<String> {
        let state = self.admin_state()?;
        let class_id = validation::parse_class_id(class_id.as_deref().unwrap_or(DEFAULT_CLASS_ID))?;
        let day = validation::parse_weekday(day.as_deref().unwrap_or("Mon"))?;
        Ok(formatting::format_admin_view(&state.schedule, &class_id, &day))
    }

    pub async fn handle_admin_set_period_time(
        &self,
        period: u32,
        field: String,
        value: String,
    ) -> McpResult<String> {
        let mut state = self.admin_state()?;
        let field = validation::parse_timing_field(&field)?;
        if let Err(e) = state
            .schedule
            .set_period_time(period as usize, field, value)
        {
            drop(state);
            bail_public!(_, "{}", e);
        }

        let timing = &state.schedule.time_settings[period as usize - 1];
        Ok(format!(
            "Period {} is now {} ~ {}",
            period, timing.start, timing.end
        ))
    }

    pub async fn handle_admin_set_subject(
        &self,
        class_id: String,
        day: String,
        period: u32,
        subject: String,
    ) -> McpResult<String> {
        let mut state = self.admin_state()?;
        let class_id = validation::parse_class_id(&class_id)?;
        let day = validation::parse_weekday(&day)?;
        if let Err(e) = state
            .schedule
            .set_subject(&class_id, &day, period as usize, subject.as_str())
        {
            drop(state);
            bail_public!(_, "{}", e);
        }

        Ok(if subject.is_empty() {
            format!("{} {} period {} is now free", class_id, day, period)
        } else {
            format!("{} {} period {} is now {}", class_id, day, period, subject)
        })
    }

    pub async fn handle_admin_add_test(&self, name: String, date: String) -> McpResult<String> {
        let mut state = self.admin_state()?;
        if let Err(e) = state.schedule.add_test(&name, &date) {
            drop(state);
            bail_public!(_, "{}", e);
        }
        Ok(format!(
            "Test added: {} ({})\n{} test(s) listed",
            name,
            date,
            state.schedule.tests.len()
        ))
    }

    pub async fn handle_admin_delete_test(&self, number: u32) -> McpResult<String> {
        let mut state = self.admin_state()?;
        let removed = match state.schedule.delete_test(number as usize) {
            Ok(test) => test,
            Err(e) => {
                drop(state);
                bail_public!(_, "{}", e);
            }
        };
        Ok(format!("Test deleted: {} ({})", removed.name, removed.date))
    }

    pub async fn handle_admin_export(&self, path: Option<String>) -> McpResult<String> {
        let path = path.unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_string());
        let state = self.admin_state()?;
        if let Err(e) = admin::export_to_file(&state.schedule, &path) {
            drop(state);
            bail_public!(_, "Failed to export: {:#}", e);
        }
        tracing::info!(path = %path, "schedule exported");
        Ok(format!("Schedule exported to {}", path))
    }
}
