//! User settings
//!
//! Selected class, iCal URL and the to-do list. Each field lives under its own
//! storage key and is written back as soon as it changes.

use crate::schedule::DEFAULT_CLASS_ID;
use crate::storage::Storage;
use crate::todo::TodoList;
use anyhow::Result;

pub const KEY_CLASS_ID: &str = "userClassId";
pub const KEY_ICAL_URL: &str = "userIcalUrl";
pub const KEY_TODOS: &str = "userTodos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub class_id: String,
    pub ical_url: String,
    pub todos: TodoList,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            class_id: DEFAULT_CLASS_ID.to_string(),
            ical_url: String::new(),
            todos: TodoList::new(),
        }
    }
}

impl UserSettings {
    /// Load every field, falling back to its default when absent
    ///
    /// Never fails: an unreadable settings file is logged and every field
    /// takes its default, and a stored to-do list that is not valid JSON is
    /// replaced by an empty list.
    pub fn load(storage: &Storage) -> Self {
        Self::read(storage).unwrap_or_else(|e| {
            tracing::warn!(
                path = %storage.file_path().display(),
                error = %format!("{:#}", e),
                "settings file is unreadable, using defaults"
            );
            Self::default()
        })
    }

    fn read(storage: &Storage) -> Result<Self> {
        let defaults = Self::default();

        let class_id = storage.get(KEY_CLASS_ID)?.unwrap_or(defaults.class_id);
        let ical_url = storage.get(KEY_ICAL_URL)?.unwrap_or(defaults.ical_url);
        let todos = match storage.get(KEY_TODOS)? {
            Some(json) => TodoList::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored to-do list is corrupt, starting empty");
                TodoList::new()
            }),
            None => defaults.todos,
        };

        Ok(Self {
            class_id,
            ical_url,
            todos,
        })
    }

    pub fn save_class_id(&self, storage: &Storage) -> Result<()> {
        storage.set(KEY_CLASS_ID, &self.class_id)
    }

    pub fn save_ical_url(&self, storage: &Storage) -> Result<()> {
        storage.set(KEY_ICAL_URL, &self.ical_url)
    }

    pub fn save_todos(&self, storage: &Storage) -> Result<()> {
        storage.set(KEY_TODOS, &self.todos.to_json()?)
    }
}
