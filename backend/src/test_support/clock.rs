//! Deterministic clock for comment ordering tests.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Clock that returns its current instant and then moves forward one step.
///
/// Successive comments therefore receive strictly increasing timestamps.
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            now: Mutex::new(start),
            step,
        }
    }

    /// Instant the next reading will return.
    pub fn peek(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.now.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        let start = match Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single() {
            Some(start) => start,
            None => panic!("fixed start instant"),
        };
        Self::new(start, TimeDelta::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.lock_clock();
        let current = *now;
        *now += self.step;
        current
    }
}
