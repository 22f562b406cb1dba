//! To-do tool tests
mod common;

use classboard_mcp::{DashboardServerHandler, ScheduleData};
use common::{err_message, get_test_handler};

#[tokio::test]
async fn test_add_and_list() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler.handle_todo_add("Read chapter 4".to_string()).await.unwrap();
    assert!(result.starts_with("To-do added"));
    assert!(result.contains("1. [ ] Read chapter 4"));

    let list = handler.handle_todo_list().await.unwrap();
    assert!(list.contains("1. [ ] Read chapter 4"));
    assert!(list.ends_with("To-do: 0/1 done (0%)"));
}

#[tokio::test]
async fn test_add_empty_is_rejected() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler.handle_todo_add(String::new()).await;
    assert!(err_message(result).contains("cannot be empty"));
    let result = handler.handle_todo_add("   ".to_string()).await;
    assert!(result.is_err());

    let list = handler.handle_todo_list().await.unwrap();
    assert!(list.starts_with("No to-do items"));
}

#[tokio::test]
async fn test_add_padded_text_is_accepted() {
    let (handler, _temp_file) = get_test_handler();
    handler.handle_todo_add("  x ".to_string()).await.unwrap();

    let list = handler.handle_todo_list().await.unwrap();
    assert!(list.contains("1. [ ]   x "));
}

#[tokio::test]
async fn test_toggle_updates_progress() {
    let (handler, _temp_file) = get_test_handler();
    handler.handle_todo_add("a".to_string()).await.unwrap();
    handler.handle_todo_add("b".to_string()).await.unwrap();

    let result = handler.handle_todo_toggle(2).await.unwrap();
    assert!(result.starts_with("To-do 2 marked as done"));
    assert!(result.contains("2. [x] b"));
    assert!(result.ends_with("To-do: 1/2 done (50%)"));

    let result = handler.handle_todo_toggle(2).await.unwrap();
    assert!(result.starts_with("To-do 2 marked as not done"));
}

#[tokio::test]
async fn test_toggle_and_remove_out_of_range() {
    let (handler, _temp_file) = get_test_handler();
    handler.handle_todo_add("a".to_string()).await.unwrap();

    assert!(err_message(handler.handle_todo_toggle(2).await).contains("does not exist"));
    assert!(err_message(handler.handle_todo_toggle(0).await).contains("start at 1"));
    assert!(handler.handle_todo_remove(5).await.is_err());
}

#[tokio::test]
async fn test_remove_shifts_numbers() {
    let (handler, _temp_file) = get_test_handler();
    for text in ["first", "second", "third"] {
        handler.handle_todo_add(text.to_string()).await.unwrap();
    }

    let result = handler.handle_todo_remove(1).await.unwrap();
    assert!(result.starts_with("Removed to-do: first"));
    assert!(result.contains("1. [ ] second"));
    assert!(result.contains("2. [ ] third"));
}

#[tokio::test]
async fn test_todos_persist_across_restart() {
    let (handler, temp_file) = get_test_handler();
    handler.handle_todo_add("Buy notebook".to_string()).await.unwrap();
    handler.handle_todo_toggle(1).await.unwrap();
    drop(handler);

    let reopened =
        DashboardServerHandler::new(temp_file.path().to_str().unwrap(), ScheduleData::new())
            .unwrap();
    let list = reopened.handle_todo_list().await.unwrap();
    assert!(list.contains("1. [x] Buy notebook"));
}
