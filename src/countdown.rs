//! Test countdown
//!
//! Picks the nearest test that is still ahead of us and counts the days to it.
//! A test stays "upcoming" for the whole of its day (until 23:59:59).

use crate::schedule::TestEvent;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Result of a countdown lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCountdown {
    /// The nearest qualifying test
    Upcoming {
        name: String,
        date: NaiveDate,
        days_remaining: i64,
    },
    /// No test lies ahead
    None,
}

/// Last second a test counts as upcoming
fn deadline(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::seconds(SECONDS_PER_DAY - 1)
}

/// Whole days from `now` until the test day begins, rounded up
///
/// A test tomorrow morning is 1 day away; on the test day itself it is 0.
pub fn days_until(now: NaiveDateTime, date: NaiveDate) -> i64 {
    let seconds = (date.and_time(NaiveTime::MIN) - now).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0)
}

/// Select the nearest test whose day has not ended yet
///
/// Ties on the date keep list order. Tests with unparsable dates are ignored.
pub fn next_test(now: NaiveDateTime, tests: &[TestEvent]) -> TestCountdown {
    let nearest = tests
        .iter()
        .filter_map(|test| test.parsed_date().map(|date| (test, date)))
        .filter(|(_, date)| deadline(*date) >= now)
        .min_by_key(|(_, date)| *date);

    match nearest {
        Some((test, date)) => TestCountdown::Upcoming {
            name: test.name.clone(),
            date,
            days_remaining: days_until(now, date),
        },
        None => TestCountdown::None,
    }
}
