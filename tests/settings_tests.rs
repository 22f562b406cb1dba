//! Settings tool tests
mod common;

use classboard_mcp::{DashboardServerHandler, ScheduleData, Storage, settings};
use common::{err_message, get_test_handler};

#[tokio::test]
async fn test_defaults() {
    let (handler, _temp_file) = get_test_handler();
    let result = handler.handle_settings().await.unwrap();

    assert!(result.contains("Class: 21HR"));
    assert!(result.contains("iCal URL: (not set)"));
    assert!(result.contains("21HR, 22HR, 23HR, 24HR, 25HR, 26HR, 27HR, 28HR"));
    assert!(result.contains("register an iCal URL"));
}

#[tokio::test]
async fn test_update_both_fields() {
    let (handler, temp_file) = get_test_handler();
    let result = handler
        .handle_update_settings(
            Some("26HR".to_string()),
            Some("https://example.com/school.ics".to_string()),
        )
        .await
        .unwrap();
    assert!(result.starts_with("Settings saved"));
    assert!(result.contains("Class: 26HR"));

    let storage = Storage::new(temp_file.path());
    assert_eq!(
        storage.get(settings::KEY_CLASS_ID).unwrap().as_deref(),
        Some("26HR")
    );
    assert_eq!(
        storage.get(settings::KEY_ICAL_URL).unwrap().as_deref(),
        Some("https://example.com/school.ics")
    );

    let shown = handler.handle_settings().await.unwrap();
    assert!(shown.contains("Calendar: linked (https://example.com/school.ics)"));
}

#[tokio::test]
async fn test_unknown_class_changes_nothing() {
    let (handler, _temp_file) = get_test_handler();
    let result = handler
        .handle_update_settings(
            Some("99HR".to_string()),
            Some("https://example.com/a.ics".to_string()),
        )
        .await;
    assert!(err_message(result).contains("Invalid class '99HR'"));

    let shown = handler.handle_settings().await.unwrap();
    assert!(shown.contains("Class: 21HR"));
    assert!(shown.contains("iCal URL: (not set)"));
}

#[tokio::test]
async fn test_update_requires_a_field() {
    let (handler, _temp_file) = get_test_handler();
    assert!(handler.handle_update_settings(None, None).await.is_err());
}

#[tokio::test]
async fn test_clear_ical_url() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_update_settings(None, Some("https://example.com/a.ics".to_string()))
        .await
        .unwrap();
    handler
        .handle_update_settings(None, Some(String::new()))
        .await
        .unwrap();

    let shown = handler.handle_settings().await.unwrap();
    assert!(shown.contains("iCal URL: (not set)"));
}

#[tokio::test]
async fn test_class_survives_restart() {
    let (handler, temp_file) = get_test_handler();
    handler
        .handle_update_settings(Some("28HR".to_string()), None)
        .await
        .unwrap();
    drop(handler);

    let reopened =
        DashboardServerHandler::new(temp_file.path().to_str().unwrap(), ScheduleData::new())
            .unwrap();
    let shown = reopened.handle_settings().await.unwrap();
    assert!(shown.contains("Class: 28HR"));
}

#[tokio::test]
async fn test_corrupt_settings_file_starts_with_defaults() {
    let (_, temp_file) = get_test_handler();
    std::fs::write(temp_file.path(), "userClassId = 5\n").unwrap();

    let handler =
        DashboardServerHandler::new(temp_file.path().to_str().unwrap(), ScheduleData::new())
            .unwrap();
    let shown = handler.handle_settings().await.unwrap();
    assert!(shown.contains("Class: 21HR"));

    handler
        .handle_update_settings(Some("24HR".to_string()), None)
        .await
        .unwrap();
    let storage = Storage::new(temp_file.path());
    assert_eq!(
        storage.get(settings::KEY_CLASS_ID).unwrap().as_deref(),
        Some("24HR")
    );
}

#[tokio::test]
async fn test_ical_url_is_stored_verbatim() {
    let (handler, temp_file) = get_test_handler();
    handler
        .handle_update_settings(None, Some(" https://example.com/a.ics ".to_string()))
        .await
        .unwrap();

    let storage = Storage::new(temp_file.path());
    assert_eq!(
        storage.get(settings::KEY_ICAL_URL).unwrap().as_deref(),
        Some(" https://example.com/a.ics ")
    );
}
