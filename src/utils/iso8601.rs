//! ISO 8601 extended date-time parsing.
//!
//! Accepted shape: `YYYY-MM-DDThh:mm[:ss[.fff]]` followed by `Z` or `±hh:mm`.
//! Years outside 0 to 9999 use the signed expanded form, e.g. `+10000` or `-0001`.
//! The timezone designator is mandatory so every accepted string names exactly
//! one instant.

use crate::datetime::DateTime;
use crate::error::{DateFormat, ParseError, ParseErrorKind};
use crate::utils::calendar::days_in_month;
use crate::utils::scanner::{ScanResult, Scanner};

/// Parse an ISO 8601 extended date-time string such as `2016-01-19T16:07:37+08:00`.
///
/// The result carries the parsed offset, so its calendar fields match the text
/// while [`DateTime::millis`] is the absolute instant.
///
/// Fractional seconds of any length are truncated to milliseconds. `24:00`
/// denotes midnight at the end of the given day. A leap second (`:60`) is
/// clamped to `:59`.
///
/// # Errors
/// Returns a [`ParseError`] when the string is not in the format above or a
/// field is out of range.
pub fn parse_iso8601(text: &str) -> Result<DateTime, ParseError> {
    match scan(text) {
        Ok(dt) => {
            log::trace!("Parsed ISO 8601 date {:?} as {}", text, dt);
            Ok(dt)
        }
        Err(kind) => {
            log::debug!("Rejected ISO 8601 date {:?}: {}", text, kind);
            Err(ParseError::new(DateFormat::Iso8601, text, kind))
        }
    }
}

fn scan(text: &str) -> ScanResult<DateTime> {
    if text.is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    let mut s = Scanner::new(text);

    let year = year(&mut s)?;
    s.expect(b'-', "'-' after year")?;
    let month = s.fixed_digits(2, "two-digit month")?;
    s.expect(b'-', "'-' after month")?;
    let day = s.fixed_digits(2, "two-digit day")?;
    s.expect(b'T', "'T' between date and time")?;

    let hour = s.fixed_digits(2, "two-digit hour")?;
    s.expect(b':', "':' after hour")?;
    let minute = s.fixed_digits(2, "two-digit minute")?;

    let mut second = 0;
    let mut millisecond = 0;
    let mut fraction_is_zero = true;
    if s.eat(b':') {
        second = s.fixed_digits(2, "two-digit second")?;
        if s.eat(b'.') || s.eat(b',') {
            let digits = s.digit_str();
            if digits.is_empty() {
                return Err(s.unexpected("fraction digits"));
            }
            millisecond = fraction_to_millis(digits);
            fraction_is_zero = digits.bytes().all(|b| b == b'0');
        }
    }

    let offset_minutes = offset(&mut s)?;
    if !s.is_eof() {
        return Err(ParseErrorKind::TrailingInput(s.position()));
    }

    if !(1..=12).contains(&month) {
        return Err(ParseErrorKind::OutOfRange("month"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(ParseErrorKind::OutOfRange("day"));
    }
    if minute > 59 {
        return Err(ParseErrorKind::OutOfRange("minute"));
    }
    if second > 60 {
        return Err(ParseErrorKind::OutOfRange("second"));
    }

    let (year, month, day, hour) = match hour {
        0..=23 => (year, month, day, hour),
        24 if minute == 0 && second == 0 && fraction_is_zero => {
            let (y, m, d) = next_day(year, month, day);
            (y, m, d, 0)
        }
        _ => return Err(ParseErrorKind::OutOfRange("hour")),
    };

    DateTime::from_offset(year, month, day, hour, minute, second.min(59), millisecond, offset_minutes)
        .ok_or(ParseErrorKind::OutOfRange("date"))
}

/// `YYYY`, or the expanded `±YYYY[YY]` form used for years outside 0 to 9999.
fn year(s: &mut Scanner<'_>) -> ScanResult<i32> {
    match s.sign() {
        Some(sign) => {
            let (value, _) = s.digits(4, 6, "expanded year")?;
            Ok(sign * value as i32)
        }
        None => Ok(s.fixed_digits(4, "four-digit year")? as i32),
    }
}

/// `Z` or `±hh:mm`, as minutes east of UTC.
fn offset(s: &mut Scanner<'_>) -> ScanResult<i32> {
    if s.eat(b'Z') {
        return Ok(0);
    }
    let sign = s
        .sign()
        .ok_or_else(|| s.unexpected("timezone designator 'Z' or '±hh:mm'"))?;
    let hours = s.fixed_digits(2, "two-digit offset hours")?;
    s.expect(b':', "':' in offset")?;
    let minutes = s.fixed_digits(2, "two-digit offset minutes")?;
    if hours > 23 {
        return Err(ParseErrorKind::OutOfRange("offset hours"));
    }
    if minutes > 59 {
        return Err(ParseErrorKind::OutOfRange("offset minutes"));
    }
    Ok(sign * (hours * 60 + minutes) as i32)
}

// Truncates, never rounds: ".9999" is 999ms.
fn fraction_to_millis(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn next_day(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    if day < days_in_month(year, month) {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year + 1, 1, 1)
    }
}
