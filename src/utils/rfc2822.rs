//! RFC 2822 (section 3.3) date-time parsing.
//!
//! Besides the strict grammar this accepts the obsolete forms still seen in
//! mail headers: two- and three-digit years, the US zone names, whitespace and
//! comments around the time separators, and `GMT+01` style offsets.

use chrono::Weekday;

use crate::datetime::DateTime;
use crate::error::{DateFormat, ParseError, ParseErrorKind};
use crate::utils::calendar::days_in_month;
use crate::utils::scanner::{ScanResult, Scanner};

const MONTHS: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

const WEEKDAYS: [(&str, &str, Weekday); 7] = [
    ("mon", "monday", Weekday::Mon),
    ("tue", "tuesday", Weekday::Tue),
    ("wed", "wednesday", Weekday::Wed),
    ("thu", "thursday", Weekday::Thu),
    ("fri", "friday", Weekday::Fri),
    ("sat", "saturday", Weekday::Sat),
    ("sun", "sunday", Weekday::Sun),
];

/// Parse an RFC 2822 date such as `Tue, 26 Jan 2016 13:48:02 GMT`.
///
/// The day of week and the seconds are optional; the zone is not. When a day
/// of week is given it has to agree with the date. The result keeps the
/// parsed offset, and a leap second (`:60`) is clamped to `:59`.
///
/// # Errors
/// Returns a [`ParseError`] for anything that is not a valid RFC 2822 date.
pub fn parse_rfc2822(text: &str) -> Result<DateTime, ParseError> {
    match scan(text) {
        Ok(dt) => {
            log::trace!("Parsed RFC 2822 date {:?} as {}", text, dt);
            Ok(dt)
        }
        Err(kind) => {
            log::debug!("Rejected RFC 2822 date {:?}: {}", text, kind);
            Err(ParseError::new(DateFormat::Rfc2822, text, kind))
        }
    }
}

fn scan(text: &str) -> ScanResult<DateTime> {
    if text.trim().is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    let mut s = Scanner::new(text);
    s.skip_cfws()?;

    let weekday = if s.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
        let name = s.word();
        let weekday = weekday_from_name(name).ok_or_else(|| ParseErrorKind::UnknownWeekday(name.to_string()))?;
        s.skip_cfws()?;
        s.expect(b',', "',' after day of week")?;
        s.skip_cfws()?;
        Some(weekday)
    } else {
        None
    };

    let (day, _) = s.digits(1, 2, "day of month")?;
    s.require_cfws("whitespace after day")?;

    let name = s.word();
    if name.is_empty() {
        return Err(s.unexpected("month name"));
    }
    let month = month_from_name(name).ok_or_else(|| ParseErrorKind::UnknownMonth(name.to_string()))?;
    s.require_cfws("whitespace after month")?;

    let (raw_year, year_digits) = s.digits(2, 9, "year")?;
    let year = match year_digits {
        2 if raw_year < 50 => 2000 + raw_year,
        2 | 3 => 1900 + raw_year,
        _ => raw_year,
    } as i32;
    s.require_cfws("whitespace after year")?;

    let hour = s.fixed_digits(2, "two-digit hour")?;
    s.skip_cfws()?;
    s.expect(b':', "':' after hour")?;
    s.skip_cfws()?;
    let minute = s.fixed_digits(2, "two-digit minute")?;

    let mut second = 0;
    let gap = s.skip_cfws()?;
    if s.eat(b':') {
        s.skip_cfws()?;
        second = s.fixed_digits(2, "two-digit second")?;
        s.require_cfws("whitespace before timezone")?;
    } else if !gap {
        return Err(s.unexpected("whitespace before timezone"));
    }

    let offset_minutes = zone(&mut s)?;
    s.skip_cfws()?;
    if !s.is_eof() {
        return Err(ParseErrorKind::TrailingInput(s.position()));
    }

    if day == 0 || day > days_in_month(year, month) {
        return Err(ParseErrorKind::OutOfRange("day"));
    }
    if hour > 23 {
        return Err(ParseErrorKind::OutOfRange("hour"));
    }
    if minute > 59 {
        return Err(ParseErrorKind::OutOfRange("minute"));
    }
    if second > 60 {
        return Err(ParseErrorKind::OutOfRange("second"));
    }

    let dt = DateTime::from_offset(year, month, day, hour, minute, second.min(59), 0, offset_minutes)
        .ok_or(ParseErrorKind::OutOfRange("date"))?;

    match weekday {
        Some(found) if found != dt.weekday() => Err(ParseErrorKind::WeekdayMismatch {
            found,
            actual: dt.weekday(),
        }),
        _ => Ok(dt),
    }
}

/// Zone as minutes east of UTC.
fn zone(s: &mut Scanner<'_>) -> ScanResult<i32> {
    if let Some(sign) = s.sign() {
        let hours = s.fixed_digits(2, "four-digit zone offset")?;
        let minutes = s.fixed_digits(2, "four-digit zone offset")?;
        return signed_offset(sign, hours, minutes);
    }

    let start = s.position();
    let name = s.word();
    if name.is_empty() {
        return Err(s.unexpected("timezone"));
    }
    let upper = name.to_ascii_uppercase();
    let minutes = match upper.as_str() {
        "UT" | "UTC" | "GMT" | "Z" => 0,
        "EDT" => -4 * 60,
        "EST" | "CDT" => -5 * 60,
        "CST" | "MDT" => -6 * 60,
        "MST" | "PDT" => -7 * 60,
        "PST" => -8 * 60,
        _ => return Err(ParseErrorKind::UnknownZone(name.to_string())),
    };

    if matches!(upper.as_str(), "UT" | "UTC" | "GMT") {
        if let Some(sign) = s.sign() {
            return gmt_offset(s, sign, start);
        }
    }
    Ok(minutes)
}

/// The `GMT+1`, `GMT+01`, `GMT+01:00` and `GMT+0100` suffix forms.
fn gmt_offset(s: &mut Scanner<'_>, sign: i32, start: usize) -> ScanResult<i32> {
    let (value, len) = s.digits(1, 4, "zone offset")?;
    let (hours, minutes) = match len {
        1 | 2 if s.eat(b':') => (value, s.fixed_digits(2, "two-digit zone minutes")?),
        1 | 2 => (value, 0),
        4 => (value / 100, value % 100),
        _ => return Err(ParseErrorKind::UnknownZone(s.slice_from(start).to_string())),
    };
    signed_offset(sign, hours, minutes)
}

fn signed_offset(sign: i32, hours: u32, minutes: u32) -> ScanResult<i32> {
    if hours > 23 || minutes > 59 {
        return Err(ParseErrorKind::OutOfRange("zone offset"));
    }
    Ok(sign * (hours * 60 + minutes) as i32)
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|(abbr, full)| lower == *abbr || lower == *full)
        .map(|index| index as u32 + 1)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lower = name.to_ascii_lowercase();
    WEEKDAYS
        .iter()
        .find(|(abbr, full, _)| lower == *abbr || lower == *full)
        .map(|(_, _, weekday)| *weekday)
}
