use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Represents an entity responsible for providing the current moment across application. This
/// keeps "today" out of the streak computations and allows tests to pin it.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Sync + Send + 'static {
    fn now(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock stopped at noon of a single day, so relative dates resolve against that day.
pub struct DayClock(DateTime<Local>);

impl DayClock {
    pub fn new(day: NaiveDate) -> Result<Self> {
        day.and_hms_opt(12, 0, 0)
            .and_then(|noon| Local.from_local_datetime(&noon).earliest())
            .map(Self)
            .ok_or_else(|| anyhow!("No local noon on {day}"))
    }
}

impl Clock for DayClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Calendar day of the clock, without any time of day.
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.now().date_naive()
}
