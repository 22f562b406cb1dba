//! Admin panel support: the passphrase gate and the schedule export
//!
//! The gate is a plain string compare that hides the editing tools from
//! casual use. It is not access control.

use crate::schedule::ScheduleData;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Passphrase used when none is given on the command line
pub const DEFAULT_ADMIN_PASSPHRASE: &str = "1234";

/// File name the export is written to by default, reusable as the startup source
pub const DEFAULT_EXPORT_FILE: &str = "data.json";

#[derive(Debug, Clone)]
pub struct AdminGate {
    passphrase: String,
    unlocked: bool,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSPHRASE)
    }
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            unlocked: false,
        }
    }

    /// Unlock on a matching passphrase; a wrong one leaves the gate as it was
    pub fn login(&mut self, attempt: &str) -> bool {
        if attempt == self.passphrase {
            self.unlocked = true;
        }
        attempt == self.passphrase
    }

    pub fn logout(&mut self) {
        self.unlocked = false;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// Serialize the whole store as pretty JSON in the startup document shape
pub fn export_json(data: &ScheduleData) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize schedule")
}

/// Write the export to `path`
pub fn export_to_file(data: &ScheduleData, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = export_json(data)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
