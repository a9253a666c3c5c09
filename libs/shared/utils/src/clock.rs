use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for anything that filters on wall-clock time.
///
/// Timestamps in the portal are local wall-clock values, so the clock hands
/// out naive local date-times rather than UTC instants.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
