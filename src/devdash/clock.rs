//! # Clock
//!
//! Every date devdash records (creation dates, `lastUpdated`, visit days) and
//! every streak it computes is relative to "today". Reading the system clock
//! directly would make that logic untestable, so all of it goes through the
//! [`Clock`] trait instead.
//!
//! - [`SystemClock`]: local wall-clock time, used by the CLI.
//! - [`FixedClock`]: a pinned instant, used by tests.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date, truncated to day granularity.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Noon on the given day, far from either midnight.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: date.and_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_today_is_its_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let clock = FixedClock::on(day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn today_ignores_time_of_day() {
        let late = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(
            FixedClock::at(late).today(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }
}
