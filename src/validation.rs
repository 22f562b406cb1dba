//! Validation helper functions for the dashboard server
//!
//! Parameter checks shared by the tool handlers. Each returns an
//! `INVALID_PARAMS` error whose message is shown to the client.

use crate::schedule::{TimingField, class_ids, is_class_id, is_weekday_code, WEEKDAY_CODES};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Check a class id against the selectable classes
pub fn parse_class_id(class_id: &str) -> McpResult<String> {
    let class_id = class_id.trim();
    if is_class_id(class_id) {
        Ok(class_id.to_string())
    } else {
        Err(invalid_params(format!(
            "Invalid class '{}'. Valid classes: {}",
            class_id,
            class_ids().join(", ")
        )))
    }
}

/// Check a weekday code (`Sun`..`Sat`)
pub fn parse_weekday(day: &str) -> McpResult<String> {
    let day = day.trim();
    if is_weekday_code(day) {
        Ok(day.to_string())
    } else {
        Err(invalid_params(format!(
            "Invalid weekday '{}'. Valid weekdays: {}",
            day,
            WEEKDAY_CODES.join(", ")
        )))
    }
}

/// Parse which side of a period to edit
pub fn parse_timing_field(field: &str) -> McpResult<TimingField> {
    field.trim().parse::<TimingField>().map_err(invalid_params)
}

/// Convert a 1-based position shown to the user into a list index
///
/// # Arguments
/// * `number` - Position as displayed (1 = first)
/// * `what` - Name of the list item, used in the error message
pub fn parse_position(number: u32, what: &str) -> McpResult<usize> {
    (number as usize)
        .checked_sub(1)
        .ok_or_else(|| invalid_params(format!("{} numbers start at 1", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_id() {
        assert_eq!(parse_class_id(" 23HR ").unwrap(), "23HR");
        assert!(parse_class_id("20HR").is_err());
        assert!(parse_class_id("").is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Mon").unwrap(), "Mon");
        assert!(parse_weekday("Monday").is_err());
    }

    #[test]
    fn test_parse_timing_field() {
        assert_eq!(parse_timing_field("start").unwrap(), TimingField::Start);
        assert!(parse_timing_field("both").is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(1, "To-do").unwrap(), 0);
        assert_eq!(parse_position(3, "Test").unwrap(), 2);
        assert!(parse_position(0, "To-do").is_err());
    }
}
