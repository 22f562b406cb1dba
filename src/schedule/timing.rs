use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Start and end of one period, as entered by the admin (`"HH:MM"`)
///
/// The strings are kept verbatim so an exported document matches what was
/// loaded. They are only interpreted by [`PeriodTiming::bounds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTiming {
    pub start: String,
    pub end: String,
}

impl PeriodTiming {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Start and end as minutes of day, or `None` if either side is not a valid `HH:MM`
    pub fn bounds(&self) -> Option<(u32, u32)> {
        Some((
            parse_clock_minutes(&self.start)?,
            parse_clock_minutes(&self.end)?,
        ))
    }

    /// Whether `now` (minutes of day) lies inside the closed interval [start, end]
    pub fn contains(&self, now: u32) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= now && now <= end)
    }
}

impl Default for PeriodTiming {
    fn default() -> Self {
        Self::new("00:00", "00:00")
    }
}

/// Which side of a period an admin edit touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingField {
    Start,
    End,
}

impl FromStr for TimingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(TimingField::Start),
            "end" => Ok(TimingField::End),
            _ => Err(format!(
                "Invalid timing field '{}'. Valid options are: start, end",
                s
            )),
        }
    }
}

/// Parse `"HH:MM"` into minutes since midnight
pub fn parse_clock_minutes(s: &str) -> Option<u32> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .ok()
        .map(minutes_of_day)
}

/// Minutes since midnight (0..=1439), seconds dropped
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
