//! Class Dashboard MCP Server - Main Entry Point
//!
//! This is the main entry point for the dashboard MCP server application.
//! The actual implementation is in the `classboard_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use classboard_mcp::DashboardServerHandler;
use classboard_mcp::admin::DEFAULT_ADMIN_PASSPHRASE;
use classboard_mcp::loader::{self, DEFAULT_DATA_SOURCE};
use classboard_mcp::pomodoro::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES, MAX_SESSION_MINUTES};
use mcp_attr::server::serve_stdio;
use tracing::Level;

/// Class Dashboard MCP Server - timetable, test countdown, to-dos and pomodoro via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the user settings file (class, iCal URL, to-dos)
    settings: String,

    /// Schedule document to load at startup (URL or file path)
    #[arg(long, default_value = DEFAULT_DATA_SOURCE)]
    data: String,

    /// Passphrase that unlocks the admin tools
    #[arg(long, default_value = DEFAULT_ADMIN_PASSPHRASE)]
    admin_passphrase: String,

    /// Initial pomodoro work length in minutes
    #[arg(long, default_value_t = DEFAULT_WORK_MINUTES, value_parser = clap::value_parser!(u32).range(1..=MAX_SESSION_MINUTES as i64))]
    work_minutes: u32,

    /// Initial pomodoro break length in minutes
    #[arg(long, default_value_t = DEFAULT_BREAK_MINUTES, value_parser = clap::value_parser!(u32).range(1..=MAX_SESSION_MINUTES as i64))]
    break_minutes: u32,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .init();

    let schedule = loader::load_schedule(&args.data).await;
    let handler = DashboardServerHandler::new(&args.settings, schedule)?
        .with_admin_passphrase(&args.admin_passphrase)
        .with_pomodoro_durations(args.work_minutes, args.break_minutes);

    tracing::info!(settings = %args.settings, "serving dashboard over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
