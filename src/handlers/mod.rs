//! MCP tool handlers for the dashboard server
//!
//! This module contains the implementation of all MCP tool handlers,
//! grouped by dashboard area.

pub mod admin;
pub mod dashboard;
pub mod pomodoro;
pub mod settings;
pub mod todo;
