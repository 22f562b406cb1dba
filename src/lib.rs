//! Class Dashboard MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a student
//! dashboard: the current class period, the day's timetable, test countdowns,
//! a to-do list, a pomodoro timer, and an admin panel for editing the schedule.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `DashboardServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `schedule`, `resolver`, `countdown`, `pomodoro`, `todo` -
//!   pure computations with no I/O
//! - **Persistence Layer**: `storage`/`settings` for user settings, `loader` and
//!   `admin` for the schedule document
//!
//! # Example
//!
//! ```no_run
//! use classboard_mcp::{DashboardServerHandler, loader};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let schedule = loader::load_schedule("data.json").await;
//!     let handler = DashboardServerHandler::new("settings.toml", schedule)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod clock;
pub mod countdown;
pub mod formatting;
mod handlers;
pub mod loader;
pub mod pomodoro;
pub mod resolver;
pub mod schedule;
pub mod settings;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

// Re-export commonly used types
pub use admin::AdminGate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::TestCountdown;
pub use pomodoro::{ModeTransition, PomodoroMode, PomodoroTimer};
pub use resolver::PeriodStatus;
pub use schedule::{PeriodTiming, ScheduleData, TestEvent};
pub use settings::UserSettings;
pub use storage::Storage;
pub use todo::{TodoItem, TodoList};

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Schedule, settings and admin session, guarded together
pub(crate) struct DashboardState {
    pub(crate) schedule: ScheduleData,
    pub(crate) settings: UserSettings,
    pub(crate) admin: AdminGate,
}

/// The pomodoro timer plus transitions not yet shown to the client
#[derive(Default)]
pub(crate) struct PomodoroSession {
    pub(crate) timer: PomodoroTimer,
    pub(crate) notifications: Vec<ModeTransition>,
}

impl PomodoroSession {
    /// Advance one second; returns whether the countdown should keep going
    pub(crate) fn tick(&mut self) -> bool {
        if !self.timer.is_running() {
            return false;
        }
        match self.timer.tick() {
            Some(transition) => {
                tracing::info!(from = ?transition.from, to = ?transition.to, "pomodoro session finished");
                self.notifications.push(transition);
                false
            }
            None => true,
        }
    }
}

/// MCP Server handler for the class dashboard
///
/// Owns the schedule store, the user settings and the pomodoro timer. Settings
/// changes are written to the storage file as soon as they happen; schedule
/// edits stay in memory until exported.
pub struct DashboardServerHandler {
    pub(crate) state: Mutex<DashboardState>,
    pub(crate) pomodoro: Arc<Mutex<PomodoroSession>>,
    pub(crate) ticker: Mutex<Option<JoinHandle<()>>>,
    pub(crate) storage: Storage,
    pub(crate) clock: Box<dyn Clock>,
}

impl DashboardServerHandler {
    /// Create a new dashboard server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the user settings file (TOML format)
    /// * `schedule` - Schedule store loaded at startup
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use classboard_mcp::{DashboardServerHandler, ScheduleData};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = DashboardServerHandler::new("settings.toml", ScheduleData::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, schedule: ScheduleData) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let settings = UserSettings::load(&storage);
        tracing::debug!(class_id = %settings.class_id, todos = settings.todos.len(), "settings loaded");

        Ok(Self {
            state: Mutex::new(DashboardState {
                schedule,
                settings,
                admin: AdminGate::default(),
            }),
            pomodoro: Arc::new(Mutex::new(PomodoroSession::default())),
            ticker: Mutex::new(None),
            storage,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the wall clock (tests pin time with [`FixedClock`])
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the admin passphrase
    pub fn with_admin_passphrase(self, passphrase: &str) -> Self {
        lock(&self.state).admin = AdminGate::new(passphrase);
        self
    }

    /// Start the pomodoro with custom durations in minutes
    pub fn with_pomodoro_durations(self, work_minutes: u32, break_minutes: u32) -> Self {
        lock(&self.pomodoro).timer = PomodoroTimer::new(work_minutes, break_minutes);
        self
    }

    /// Spawn the one-second countdown task, replacing any previous one
    pub(crate) fn start_ticker(&self) {
        let session = Arc::clone(&self.pomodoro);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if !lock(&session).tick() {
                    break;
                }
            }
        });

        if let Some(previous) = lock(&self.ticker).replace(handle) {
            previous.abort();
        }
    }

    /// Abort the countdown task if there is one
    pub(crate) fn stop_ticker(&self) {
        if let Some(handle) = lock(&self.ticker).take() {
            handle.abort();
        }
    }
}

impl Drop for DashboardServerHandler {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// Student dashboard server: class periods, timetable, tests, to-dos and a pomodoro timer.
///
/// Start with `dashboard` for an overview of the day. The dashboard follows the
/// class selected in `settings` (classes 21HR-28HR).
///
/// Key concepts:
/// - **Periods**: 7 numbered class slots per day with fixed start/end times
/// - **Timetable**: subject per class, weekday (Sun-Sat) and period
/// - **Tests**: the nearest upcoming test is counted down in days
/// - **To-dos**: numbered from 1 in list order
/// - **Pomodoro**: work/break sessions; finishing one pauses the timer
/// - **Admin**: `admin_login` unlocks schedule editing; edits are kept in memory
///   until `admin_export` writes them out
#[mcp_server]
impl McpServer for DashboardServerHandler {
    /// **Home**: Clock, greeting, current period, today's timetable, next test, calendar, to-do progress, pomodoro.
    #[tool]
    async fn dashboard(&self) -> McpResult<String> {
        self.handle_dashboard().await
    }

    /// **Now**: The period in progress or the next one to start, with minutes left/until start.
    #[tool]
    async fn current_period(&self) -> McpResult<String> {
        self.handle_current_period().await
    }

    /// **Timetable**: Today's periods for the selected class; the running period is marked with '>'.
    #[tool]
    async fn daily_schedule(&self) -> McpResult<String> {
        self.handle_daily_schedule().await
    }

    /// **Tests**: Nearest upcoming test and the number of days left.
    #[tool]
    async fn test_countdown(&self) -> McpResult<String> {
        self.handle_test_countdown().await
    }

    /// **Settings**: Show the selected class, the iCal URL and the available classes.
    #[tool]
    async fn settings(&self) -> McpResult<String> {
        self.handle_settings().await
    }

    /// **Settings**: Change the selected class and/or the iCal URL. Saved immediately.
    #[tool]
    async fn update_settings(
        &self,
        /// Class: 21HR-28HR (optional)
        class_id: Option<String>,
        /// iCal URL, ""=clear (optional)
        ical_url: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_settings(class_id, ical_url).await
    }

    /// **To-do**: List items with their numbers and completion progress.
    #[tool]
    async fn todo_list(&self) -> McpResult<String> {
        self.handle_todo_list().await
    }

    /// **To-do**: Add an item at the end of the list.
    #[tool]
    async fn todo_add(
        &self,
        /// Item text (must not be blank)
        text: String,
    ) -> McpResult<String> {
        self.handle_todo_add(text).await
    }

    /// **To-do**: Mark an item done, or not done if it already is.
    #[tool]
    async fn todo_toggle(
        &self,
        /// Item number from todo_list (1 = first)
        number: u32,
    ) -> McpResult<String> {
        self.handle_todo_toggle(number).await
    }

    /// **To-do**: Delete an item. Later items move up one number.
    #[tool]
    async fn todo_remove(
        &self,
        /// Item number from todo_list (1 = first)
        number: u32,
    ) -> McpResult<String> {
        self.handle_todo_remove(number).await
    }

    /// **Pomodoro**: Remaining time, mode and any session-finished notices since the last check.
    #[tool]
    async fn pomodoro_status(&self) -> McpResult<String> {
        self.handle_pomodoro_status().await
    }

    /// **Pomodoro**: Start the timer, or pause it if it is running.
    #[tool]
    async fn pomodoro_toggle(&self) -> McpResult<String> {
        self.handle_pomodoro_toggle().await
    }

    /// **Pomodoro**: Stop and go back to the start of a work session.
    #[tool]
    async fn pomodoro_reset(&self) -> McpResult<String> {
        self.handle_pomodoro_reset().await
    }

    /// **Pomodoro**: Set work and break lengths in whole minutes (at least 1). Resets the timer.
    #[tool]
    async fn pomodoro_configure(
        &self,
        /// Work session length in minutes
        work_minutes: String,
        /// Break length in minutes
        break_minutes: String,
    ) -> McpResult<String> {
        self.handle_pomodoro_configure(work_minutes, break_minutes)
            .await
    }

    /// **Admin**: Unlock schedule editing with the admin passphrase.
    #[tool]
    async fn admin_login(
        &self,
        /// Admin passphrase
        passphrase: String,
    ) -> McpResult<String> {
        self.handle_admin_login(passphrase).await
    }

    /// **Admin**: Lock schedule editing again.
    #[tool]
    async fn admin_logout(&self) -> McpResult<String> {
        self.handle_admin_logout().await
    }

    /// **Admin**: Show period timings, one class/day timetable grid and the test list.
    #[tool]
    async fn admin_view(
        &self,
        /// Class to show (default 21HR)
        class_id: Option<String>,
        /// Weekday Sun-Sat to show (default Mon)
        day: Option<String>,
    ) -> McpResult<String> {
        self.handle_admin_view(class_id, day).await
    }

    /// **Admin**: Change a period's start or end time (HH:MM). Not checked against the other side.
    #[tool]
    async fn admin_set_period_time(
        &self,
        /// Period number 1-7
        period: u32,
        /// "start" or "end"
        field: String,
        /// Time as HH:MM
        value: String,
    ) -> McpResult<String> {
        self.handle_admin_set_period_time(period, field, value)
            .await
    }

    /// **Admin**: Set the subject of a class/day/period. ""=free period.
    #[tool]
    async fn admin_set_subject(
        &self,
        /// Class: 21HR-28HR
        class_id: String,
        /// Weekday: Sun/Mon/Tue/Wed/Thu/Fri/Sat
        day: String,
        /// Period number 1-7
        period: u32,
        /// Subject name
        subject: String,
    ) -> McpResult<String> {
        self.handle_admin_set_subject(class_id, day, period, subject)
            .await
    }

    /// **Admin**: Add a test to the end of the test list.
    #[tool]
    async fn admin_add_test(
        &self,
        /// Test name
        name: String,
        /// Test date YYYY-MM-DD
        date: String,
    ) -> McpResult<String> {
        self.handle_admin_add_test(name, date).await
    }

    /// **Admin**: Delete a test by its number in admin_view.
    #[tool]
    async fn admin_delete_test(
        &self,
        /// Test number (1 = first)
        number: u32,
    ) -> McpResult<String> {
        self.handle_admin_delete_test(number).await
    }

    /// **Admin**: Write the whole schedule as JSON, usable as the next startup data source.
    #[tool]
    async fn admin_export(
        &self,
        /// Output path (default data.json)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_admin_export(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn get_test_handler() -> (DashboardServerHandler, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let handler =
            DashboardServerHandler::new(temp_file.path().to_str().unwrap(), ScheduleData::new())
                .unwrap();
        (handler, temp_file)
    }

    #[test]
    fn test_custom_file_path() {
        let temp_file = NamedTempFile::new().unwrap();
        let custom_path = temp_file.path().to_str().unwrap();

        let handler = DashboardServerHandler::new(custom_path, ScheduleData::new()).unwrap();
        assert_eq!(handler.storage.file_path().to_str().unwrap(), custom_path);
    }

    #[test]
    fn test_session_tick_counts_down() {
        let mut session = PomodoroSession {
            timer: PomodoroTimer::new(1, 1),
            notifications: Vec::new(),
        };
        assert!(!session.tick());

        session.timer.start();
        assert!(session.tick());
        assert_eq!(session.timer.remaining_seconds(), 59);
    }

    #[test]
    fn test_session_tick_records_transition() {
        let mut session = PomodoroSession {
            timer: PomodoroTimer::new(1, 2),
            notifications: Vec::new(),
        };
        session.timer.start();
        for _ in 0..59 {
            assert!(session.tick());
        }
        assert!(!session.tick());

        assert_eq!(session.notifications.len(), 1);
        assert_eq!(session.notifications[0].to, PomodoroMode::Break);
        assert_eq!(session.timer.remaining_seconds(), 120);
        assert!(!session.tick());
    }

    #[tokio::test]
    async fn test_toggle_spawns_and_stops_ticker() {
        let (handler, _temp_file) = get_test_handler();

        handler.pomodoro_toggle().await.unwrap();
        assert!(lock(&handler.pomodoro).timer.is_running());
        assert!(lock(&handler.ticker).is_some());

        handler.pomodoro_toggle().await.unwrap();
        assert!(!lock(&handler.pomodoro).timer.is_running());
        assert!(lock(&handler.ticker).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_counts_down_and_exits_after_transition() {
        let (handler, _temp_file) = get_test_handler();
        let handler = handler.with_pomodoro_durations(1, 1);

        handler.pomodoro_toggle().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(lock(&handler.pomodoro).timer.remaining_seconds(), 50);

        tokio::time::sleep(Duration::from_secs(50)).await;
        {
            let session = lock(&handler.pomodoro);
            assert!(!session.timer.is_running());
            assert_eq!(session.timer.mode(), PomodoroMode::Break);
            assert_eq!(session.notifications.len(), 1);
        }
        assert!(
            lock(&handler.ticker)
                .as_ref()
                .is_some_and(|handle| handle.is_finished())
        );

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(lock(&handler.pomodoro).timer.remaining_seconds(), 60);
    }

    #[tokio::test]
    async fn test_builder_options() {
        let (handler, _temp_file) = get_test_handler();
        let handler = handler
            .with_admin_passphrase("letmein")
            .with_pomodoro_durations(50, 10);

        assert_eq!(lock(&handler.pomodoro).timer.remaining_seconds(), 50 * 60);
        assert!(handler.admin_login("1234".to_string()).await.is_err());
        assert!(handler.admin_login("letmein".to_string()).await.is_ok());
    }
}
