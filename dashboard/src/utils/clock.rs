use chrono::{Local, NaiveDate};

/// Source of "today" for new records and export file names
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same day, used in tests
#[derive(Clone, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
