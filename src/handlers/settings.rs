//! Settings handlers for the dashboard server

use crate::formatting;
use crate::validation;
use crate::{DashboardServerHandler, lock};
use mcp_attr::{Result as McpResult, bail_public};

impl DashboardServerHandler {
    /// Shows the selected class, the iCal URL and the class choices.
    pub async fn handle_settings(&self) -> McpResult<String> {
        let state = lock(&self.state);
        Ok(format!(
            "{}\n{}",
            formatting::format_settings(&state.settings),
            formatting::format_calendar(&state.settings.ical_url)
        ))
    }

    /// Applies and persists the given settings fields; omitted fields are left alone.
    pub async fn handle_update_settings(
        &self,
        class_id: Option<String>,
        ical_url: Option<String>,
    ) -> McpResult<String> {
        if class_id.is_none() && ical_url.is_none() {
            bail_public!(_, "Nothing to update. Provide class_id and/or ical_url.");
        }

        // Validate before touching anything so a bad class id changes nothing
        let class_id = class_id
            .map(|c| validation::parse_class_id(&c))
            .transpose()?;

        let mut state = lock(&self.state);

        if let Some(class_id) = class_id {
            state.settings.class_id = class_id;
            if let Err(e) = state.settings.save_class_id(&self.storage) {
                drop(state);
                bail_public!(_, "Failed to save: {}", e);
            }
        }

        if let Some(ical_url) = ical_url {
            state.settings.ical_url = ical_url;
            if let Err(e) = state.settings.save_ical_url(&self.storage) {
                drop(state);
                bail_public!(_, "Failed to save: {}", e);
            }
        }

        tracing::info!(class_id = %state.settings.class_id, "settings saved");
        Ok(format!(
            "Settings saved\n{}",
            formatting::format_settings(&state.settings)
        ))
    }
}
