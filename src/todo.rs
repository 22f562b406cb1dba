//! To-do list
//!
//! An insertion-ordered list of items. Positions are 0-based here; the MCP
//! tools translate from the 1-based numbers shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("To-do text cannot be empty")]
    EmptyText,
    #[error("To-do {number} does not exist ({count} item(s) in the list)")]
    NotFound { number: usize, count: usize },
}

/// Completion summary derived from the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodoProgress {
    pub done: usize,
    pub total: usize,
    /// 0.0..=100.0, and 0.0 for an empty list
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn not_found(&self, index: usize) -> TodoError {
        TodoError::NotFound {
            number: index + 1,
            count: self.items.len(),
        }
    }

    /// Append an open item
    ///
    /// Whitespace-only text is rejected; accepted text is stored untrimmed.
    pub fn add(&mut self, text: &str) -> Result<(), TodoError> {
        if text.trim().is_empty() {
            return Err(TodoError::EmptyText);
        }
        self.items.push(TodoItem {
            text: text.to_string(),
            done: false,
        });
        Ok(())
    }

    /// Flip the done flag; returns the new value
    pub fn toggle(&mut self, index: usize) -> Result<bool, TodoError> {
        let err = self.not_found(index);
        let item = self.items.get_mut(index).ok_or(err)?;
        item.done = !item.done;
        Ok(item.done)
    }

    /// Remove an item; later items move up one position
    pub fn remove(&mut self, index: usize) -> Result<TodoItem, TodoError> {
        if index >= self.items.len() {
            return Err(self.not_found(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn progress(&self) -> TodoProgress {
        let total = self.items.len();
        let done = self.items.iter().filter(|item| item.done).count();
        let percent = if total > 0 {
            done as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        TodoProgress {
            done,
            total,
            percent,
        }
    }

    /// JSON array of `{text, done}`, the persisted form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
