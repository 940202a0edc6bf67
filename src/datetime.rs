//! The date-time value shared by every utility in the crate.
//!
//! A [`DateTime`] is an instant with millisecond precision that remembers the
//! UTC offset it was constructed in. Calendar accessors such as [`DateTime::year`]
//! read the fields in that offset, while the `utc_*` accessors always read
//! them in UTC. Equality, ordering and hashing only look at the instant.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::utils::iso8601;

/// An immutable instant with calendar fields in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    inner: chrono::DateTime<FixedOffset>,
}

impl DateTime {
    /// Instant from milliseconds since the Unix epoch, expressed in UTC.
    pub fn from_millis(millis: i64) -> Option<Self> {
        chrono::DateTime::from_timestamp_millis(millis).map(Self::from)
    }

    /// Build a value from UTC calendar fields. `month` is 1-based.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Option<Self> {
        let naive = naive_from_fields(year, month, day, hour, minute, second, millisecond)?;
        Some(Self::from(Utc.from_utc_datetime(&naive)))
    }

    /// Build a value from calendar fields in the system timezone.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant;
    /// nonexistent local times (DST spring-forward gap) yield `None`.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Option<Self> {
        let naive = naive_from_fields(year, month, day, hour, minute, second, millisecond)?;
        Local.from_local_datetime(&naive).earliest().map(Self::from)
    }

    /// Build a value from calendar fields at a fixed offset east of UTC.
    #[allow(clippy::too_many_arguments)]
    pub fn from_offset(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        offset_minutes: i32,
    ) -> Option<Self> {
        let naive = naive_from_fields(year, month, day, hour, minute, second, millisecond)?;
        let offset = FixedOffset::east_opt(offset_minutes.checked_mul(60)?)?;
        offset.from_local_datetime(&naive).single().map(Self::from)
    }

    /// The current instant, in the system timezone.
    pub fn now() -> Self {
        Self::from(Local::now())
    }

    /// Milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.inner.timestamp_millis()
    }

    /// Elapsed milliseconds from `self` to `other` (`other - self`).
    pub fn millis_until(&self, other: &DateTime) -> i64 {
        other.millis() - self.millis()
    }

    /// Offset of the calendar fields east of UTC, in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.inner.offset().local_minus_utc() / 60
    }

    /// Same instant, expressed in the system timezone.
    pub fn to_local(&self) -> Self {
        Self::from(self.inner.with_timezone(&Local))
    }

    /// Same instant, expressed in UTC.
    pub fn to_utc(&self) -> Self {
        Self::from(self.inner.with_timezone(&Utc))
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Month of the year, 1 to 12.
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn millisecond(&self) -> u32 {
        millis_of(self.inner.nanosecond())
    }

    pub fn utc_year(&self) -> i32 {
        self.utc_naive().year()
    }

    pub fn utc_month(&self) -> u32 {
        self.utc_naive().month()
    }

    pub fn utc_day(&self) -> u32 {
        self.utc_naive().day()
    }

    pub fn utc_hour(&self) -> u32 {
        self.utc_naive().hour()
    }

    pub fn utc_minute(&self) -> u32 {
        self.utc_naive().minute()
    }

    pub fn utc_second(&self) -> u32 {
        self.utc_naive().second()
    }

    pub fn utc_millisecond(&self) -> u32 {
        millis_of(self.utc_naive().nanosecond())
    }

    /// Day of the week in the value's own offset.
    pub fn weekday(&self) -> chrono::Weekday {
        self.inner.weekday()
    }

    /// ISO 8601 extended form with milliseconds, e.g. `2016-01-19T08:07:37.000Z`.
    ///
    /// A zero offset is written as `Z`, anything else as `±HH:MM`.
    pub fn to_iso8601(&self) -> String {
        self.inner.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// RFC 2822 form, e.g. `Tue, 26 Jan 2016 13:48:02 +0000`.
    ///
    /// RFC 2822 only has room for four-digit years, so values before year 0
    /// or after 9999 yield `None`.
    pub fn to_rfc2822(&self) -> Option<String> {
        if (0..=9999).contains(&self.year()) {
            Some(self.inner.to_rfc2822())
        } else {
            None
        }
    }

    /// Borrow the underlying chrono value.
    pub fn as_chrono(&self) -> &chrono::DateTime<FixedOffset> {
        &self.inner
    }

    fn utc_naive(&self) -> NaiveDateTime {
        self.inner.naive_utc()
    }
}

fn naive_from_fields(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, millisecond)
}

// Leap-second nanos run past 1e9; they still belong to the same millisecond slot.
fn millis_of(nanos: u32) -> u32 {
    (nanos % 1_000_000_000) / 1_000_000
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self {
            inner: value.fixed_offset().trunc_subsecs(3),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        iso8601::parse_iso8601(s)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        iso8601::parse_iso8601(&text).map_err(serde::de::Error::custom)
    }
}
