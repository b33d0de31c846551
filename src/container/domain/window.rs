//! Operating-day windows in site time.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// One calendar day in site time, from midnight to 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Returns the window for `date` read in `offset`.
    #[must_use]
    pub fn for_date(date: NaiveDate, offset: FixedOffset) -> Self {
        let start = local_to_utc(date.and_time(NaiveTime::MIN), offset);
        let end = start + TimeDelta::days(1) - TimeDelta::milliseconds(1);
        Self { date, start, end }
    }

    /// Returns the window containing `instant`.
    #[must_use]
    pub fn containing(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::for_date(instant.with_timezone(&offset).date_naive(), offset)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns local midnight as a UTC instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the last millisecond of the day as a UTC instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `instant` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns the UTC instant of local `time` on this day.
    #[must_use]
    pub fn at(&self, time: NaiveTime) -> DateTime<Utc> {
        self.start + (time - NaiveTime::MIN)
    }
}

fn local_to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    local.and_utc() - TimeDelta::seconds(i64::from(offset.local_minus_utc()))
}
