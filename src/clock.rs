/// Wall-clock access for the timer core.
use chrono::{DateTime, Local};

/// Supplies the current local instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real device clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::{ManualClock, local};
