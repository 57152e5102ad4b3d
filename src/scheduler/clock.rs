use chrono::{Local, NaiveTime};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}
