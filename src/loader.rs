//! Startup loading of the schedule document
//!
//! The source is either an `http(s)://` URL or a local file path. Loading never
//! fails: any problem is logged and the built-in defaults are used instead.

use crate::schedule::ScheduleData;
use anyhow::{Context, Result, bail};

/// Default source, matching the file name written by the admin export
pub const DEFAULT_DATA_SOURCE: &str = "./data.json";

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Parse a schedule document
pub fn parse_schedule(json: &str) -> Result<ScheduleData> {
    serde_json::from_str(json).context("Schedule document is not valid")
}

async fn fetch(source: &str) -> Result<ScheduleData> {
    if is_url(source) {
        let response = reqwest::get(source)
            .await
            .with_context(|| format!("Failed to fetch {}", source))?;
        if !response.status().is_success() {
            bail!("Fetching {} returned {}", source, response.status());
        }
        let body = response.text().await?;
        parse_schedule(&body)
    } else {
        let body = tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read {}", source))?;
        parse_schedule(&body)
    }
}

/// Load the schedule, falling back to [`ScheduleData::default`] on any error
pub async fn load_schedule(source: &str) -> ScheduleData {
    match fetch(source).await {
        Ok(data) => {
            tracing::info!(
                source,
                periods = data.time_settings.len(),
                classes = data.timetables.len(),
                tests = data.tests.len(),
                "schedule loaded"
            );
            data
        }
        Err(e) => {
            tracing::warn!(source, error = %format!("{:#}", e), "schedule load failed, using defaults");
            ScheduleData::default()
        }
    }
}
