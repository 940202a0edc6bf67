use std::f64::consts::{FRAC_PI_2, PI};
use timekit::utils::clock::*;
use timekit::{parse_iso8601, DateTime};

const EPSILON: f64 = 1e-12;

fn utc_at(hour: u32, minute: u32) -> DateTime {
    DateTime::from_utc(2016, 1, 26, hour, minute, 0, 0).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_midnight() {
    assert_eq!(clock_hand_angle(&utc_at(0, 0)), 0.0);
}

#[test]
fn test_three_oclock() {
    assert_close(clock_hand_angle(&utc_at(3, 0)), FRAC_PI_2);
}

#[test]
fn test_six_pm() {
    assert_close(clock_hand_angle(&utc_at(18, 0)), PI);
}

#[test]
fn test_nine_pm() {
    assert_close(clock_hand_angle(&utc_at(21, 0)), FRAC_PI_2);
}

#[test]
fn test_noon_is_kept_as_twelve() {
    assert_eq!(clock_hand_angle(&utc_at(12, 0)), 0.0);
    assert_close(clock_hand_angle(&utc_at(12, 30)), 165.0 * PI / 180.0);
}

#[test]
fn test_uses_utc_fields() {
    // 11:00 at +08:00 is 03:00 UTC
    let dt = parse_iso8601("2016-01-26T11:00:00+08:00").unwrap();
    assert_close(clock_hand_angle(&dt), FRAC_PI_2);
    assert_eq!(clock_hand_degrees(&dt), 90.0);
}

#[test]
fn test_angle_stays_within_half_turn() {
    for hour in 0..24 {
        for minute in 0..60 {
            let angle = clock_hand_angle(&utc_at(hour, minute));
            assert!((0.0..=PI + EPSILON).contains(&angle), "{:02}:{:02} gave {}", hour, minute, angle);
        }
    }
}
