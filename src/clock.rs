//! Wall-clock abstraction
//!
//! Every time-dependent computation (period resolution, countdowns, the
//! dashboard snapshot) reads "now" through [`Clock`] so tests can pin it.

use chrono::{Local, NaiveDateTime};

/// Source of local wall-clock time. No timezone handling happens past this point.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
