use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// What the rules need to know about the outside world: the calendar day
/// that counts as "today" for the not-in-the-future checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    today: Date,
}

impl ValidationContext {
    pub fn on(today: Date) -> Self {
        Self { today }
    }

    /// Today in the system time zone.
    pub fn now_local() -> Self {
        Self::on(Zoned::now().date())
    }

    /// Today in `tz`.
    pub fn now_in(tz: &TimeZone) -> Self {
        Self::on(Timestamp::now().to_zoned(tz.clone()).date())
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn is_future(&self, date: Date) -> bool {
        date > self.today
    }
}
