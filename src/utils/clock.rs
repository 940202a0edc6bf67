//! Angle between the hands of an analog clock.

use std::f64::consts::PI;

use crate::constants::{CLOCK_DIAL_HOURS, HOUR_HAND_DEGREES_PER_MINUTE, MINUTE_HAND_DEGREES_PER_MINUTE};
use crate::datetime::DateTime;

/// Smaller angle between the hour and minute hands at the UTC time of `dt`, in degrees.
///
/// Only hours strictly above 12 are folded back, so both 00:00 and 12:00 keep
/// their hour value. At 12:00 the hour hand sits at 360°, which still yields 0°
/// once the reflex angle is folded.
pub fn clock_hand_degrees(dt: &DateTime) -> f64 {
    let mut hour = dt.utc_hour();
    if hour > CLOCK_DIAL_HOURS {
        hour -= CLOCK_DIAL_HOURS;
    }
    let minute = dt.utc_minute();

    let hour_angle = HOUR_HAND_DEGREES_PER_MINUTE * f64::from(hour * 60 + minute);
    let minute_angle = MINUTE_HAND_DEGREES_PER_MINUTE * f64::from(minute);

    let diff = (hour_angle - minute_angle).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Smaller angle between the hour and minute hands at the UTC time of `dt`,
/// in radians within `[0, π]`.
pub fn clock_hand_angle(dt: &DateTime) -> f64 {
    clock_hand_degrees(dt) * (PI / 180.0)
}
