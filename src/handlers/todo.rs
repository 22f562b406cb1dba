//! To-do handlers for the dashboard server
//!
//! Every successful mutation writes the whole list back to storage and
//! answers with the re-rendered list.

use crate::formatting;
use crate::validation;
use crate::{DashboardServerHandler, DashboardState, lock};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::MutexGuard;

impl DashboardServerHandler {
    /// Persist the list and render it, prefixed by `summary`
    fn save_todos(&self, state: MutexGuard<'_, DashboardState>, summary: &str) -> McpResult<String> {
        if let Err(e) = state.settings.save_todos(&self.storage) {
            drop(state);
            bail_public!(_, "Failed to save: {}", e);
        }
        Ok(format!(
            "{}\n\n{}",
            summary,
            formatting::format_todos(&state.settings.todos)
        ))
    }

    pub async fn handle_todo_list(&self) -> McpResult<String> {
        let state = lock(&self.state);
        Ok(formatting::format_todos(&state.settings.todos))
    }

    pub async fn handle_todo_add(&self, text: String) -> McpResult<String> {
        let mut state = lock(&self.state);
        if let Err(e) = state.settings.todos.add(&text) {
            drop(state);
            bail_public!(_, "{}", e);
        }
        self.save_todos(state, "To-do added")
    }

    pub async fn handle_todo_toggle(&self, number: u32) -> McpResult<String> {
        let index = validation::parse_position(number, "To-do")?;
        let mut state = lock(&self.state);
        let done = match state.settings.todos.toggle(index) {
            Ok(done) => done,
            Err(e) => {
                drop(state);
                bail_public!(_, "{}", e);
            }
        };
        let summary = format!(
            "To-do {} marked as {}",
            number,
            if done { "done" } else { "not done" }
        );
        self.save_todos(state, &summary)
    }

    pub async fn handle_todo_remove(&self, number: u32) -> McpResult<String> {
        let index = validation::parse_position(number, "To-do")?;
        let mut state = lock(&self.state);
        let removed = match state.settings.todos.remove(index) {
            Ok(item) => item,
            Err(e) => {
                drop(state);
                bail_public!(_, "{}", e);
            }
        };
        self.save_todos(state, &format!("Removed to-do: {}", removed.text))
    }
}
