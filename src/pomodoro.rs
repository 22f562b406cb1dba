//! Pomodoro timer
//!
//! A tick-driven state machine alternating work and break sessions. The timer
//! itself never sleeps: whoever owns it calls [`PomodoroTimer::tick`] once per
//! elapsed second while [`PomodoroTimer::is_running`] is true. When a session
//! runs out the timer flips mode, refills, pauses, and hands back a
//! [`ModeTransition`] for the caller to announce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default work session length in minutes
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default break length in minutes
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
/// Longest session whose length in seconds still fits the countdown
pub const MAX_SESSION_MINUTES: u32 = u32::MAX / 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PomodoroMode {
    Work,
    Break,
}

impl PomodoroMode {
    pub fn flipped(self) -> Self {
        match self {
            PomodoroMode::Work => PomodoroMode::Break,
            PomodoroMode::Break => PomodoroMode::Work,
        }
    }
}

/// Raised when a session runs out and the timer switches mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: PomodoroMode,
    pub to: PomodoroMode,
}

impl ModeTransition {
    pub fn message(&self) -> &'static str {
        match self.to {
            PomodoroMode::Break => "Work session finished! Time for a break.",
            PomodoroMode::Work => "Break is over! Back to work.",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PomodoroError {
    #[error(
        "Durations must be whole numbers from 1 to {max} minutes (got work='{work}', break='{brk}')",
        max = MAX_SESSION_MINUTES
    )]
    InvalidDuration { work: String, brk: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroTimer {
    mode: PomodoroMode,
    remaining_seconds: u32,
    running: bool,
    work_minutes: u32,
    break_minutes: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_BREAK_MINUTES)
    }
}

impl PomodoroTimer {
    /// Create an idle timer at the start of a work session
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            mode: PomodoroMode::Work,
            remaining_seconds: minutes_to_seconds(work_minutes),
            running: false,
            work_minutes,
            break_minutes,
        }
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    fn duration_seconds(&self, mode: PomodoroMode) -> u32 {
        match mode {
            PomodoroMode::Work => minutes_to_seconds(self.work_minutes),
            PomodoroMode::Break => minutes_to_seconds(self.break_minutes),
        }
    }

    /// Begin counting down
    ///
    /// Returns `false` without touching anything if the timer is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down, keeping the remaining time
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause a running timer or start a stopped one; returns the new running state
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Advance by one second
    ///
    /// Does nothing while stopped. When the session reaches zero the timer
    /// stops, switches mode, refills with the new mode's duration and reports
    /// the transition.
    pub fn tick(&mut self) -> Option<ModeTransition> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        let from = self.mode;
        self.running = false;
        self.mode = from.flipped();
        self.remaining_seconds = self.duration_seconds(self.mode);
        Some(ModeTransition {
            from,
            to: self.mode,
        })
    }

    /// Stop and return to the beginning of a work session
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = PomodoroMode::Work;
        self.remaining_seconds = self.duration_seconds(PomodoroMode::Work);
    }

    /// Change both durations from user input, then reset
    ///
    /// Both values must parse as whole minutes in `1..=MAX_SESSION_MINUTES`;
    /// otherwise nothing changes.
    pub fn reconfigure(&mut self, work: &str, brk: &str) -> Result<(), PomodoroError> {
        let parse = |s: &str| {
            s.trim()
                .parse::<u32>()
                .ok()
                .filter(|m| (1..=MAX_SESSION_MINUTES).contains(m))
        };
        let (Some(work_minutes), Some(break_minutes)) = (parse(work), parse(brk)) else {
            return Err(PomodoroError::InvalidDuration {
                work: work.to_string(),
                brk: brk.to_string(),
            });
        };

        self.work_minutes = work_minutes;
        self.break_minutes = break_minutes;
        self.reset();
        Ok(())
    }

    /// Remaining time as `MM:SS`; minutes are not capped at 59
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    /// Short description of the current session, e.g. "25 min focus"
    pub fn status_line(&self) -> String {
        match self.mode {
            PomodoroMode::Work => format!("{} min focus", self.work_minutes),
            PomodoroMode::Break => format!("{} min break", self.break_minutes),
        }
    }
}

fn minutes_to_seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(60)
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
