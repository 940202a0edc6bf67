//! Elapsed-time formatting as `HH:mm:ss.sss`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::datetime::DateTime;

/// How to render a span whose end precedes its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeSpanPolicy {
    /// Leading `-` followed by the magnitude, e.g. `-01:00:00.000`.
    #[default]
    Signed,
    /// The magnitude only, as if start and end were swapped.
    Absolute,
    /// Clamp to `00:00:00.000`.
    Zero,
}

/// A signed span of whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan {
    millis: i64,
}

impl TimeSpan {
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Span from `start` to `end` (`end - start`).
    pub fn between(start: &DateTime, end: &DateTime) -> Self {
        Self::from_millis(start.millis_until(end))
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// Whole hours of the magnitude. Not wrapped at 24.
    pub fn hours(&self) -> u64 {
        self.magnitude() / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> u64 {
        (self.magnitude() % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> u64 {
        (self.magnitude() % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn milliseconds(&self) -> u64 {
        self.magnitude() % MILLIS_PER_SECOND
    }

    /// Render as `HH:mm:ss.sss`, applying `policy` when the span is negative.
    pub fn format_with(&self, policy: NegativeSpanPolicy) -> String {
        let span = match policy {
            NegativeSpanPolicy::Zero if self.is_negative() => Self::from_millis(0),
            NegativeSpanPolicy::Absolute => Self::from_millis(self.millis.saturating_abs()),
            _ => *self,
        };
        span.to_string()
    }

    fn magnitude(&self) -> u64 {
        self.millis.unsigned_abs()
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.milliseconds()
        )
    }
}

/// Format the time elapsed from `start` to `end` as `HH:mm:ss.sss`.
///
/// Hours are not wrapped at 24, so a 30-hour span is `30:00:00.000`. When
/// `end` precedes `start` the result carries a leading `-`.
pub fn format_time_span(start: &DateTime, end: &DateTime) -> String {
    format_time_span_with(start, end, NegativeSpanPolicy::default())
}

/// [`format_time_span`] with an explicit policy for negative spans.
pub fn format_time_span_with(start: &DateTime, end: &DateTime, policy: NegativeSpanPolicy) -> String {
    TimeSpan::between(start, end).format_with(policy)
}
