//! Gregorian calendar arithmetic.

use crate::datetime::DateTime;

/// Whether the calendar year of `dt` is a leap year.
///
/// Only [`DateTime::year`] is consulted, i.e. the year in the offset the value
/// was constructed with. `2016-01-01T02:00+08:00` is in 2016 even though the
/// same instant falls in 2015 in UTC.
pub fn is_leap_year(dt: &DateTime) -> bool {
    is_leap(dt.year())
}

/// Gregorian leap-year rule for a bare year number.
pub fn is_leap(year: i32) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Number of days in `month` (1-12) of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap(year) {
        366
    } else {
        365
    }
}
