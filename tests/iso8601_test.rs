use timekit::utils::iso8601::parse_iso8601;
use timekit::{DateFormat, DateTime, ParseErrorKind};

#[test]
fn test_parse_utc_designator() {
    let dt = parse_iso8601("2016-01-19T08:07:37Z").unwrap();
    assert_eq!(dt, DateTime::from_utc(2016, 1, 19, 8, 7, 37, 0).unwrap());
    assert_eq!(dt.offset_minutes(), 0);
}

#[test]
fn test_offsets_name_the_same_instant() {
    let utc = parse_iso8601("2016-01-19T08:07:37Z").unwrap();
    let east = parse_iso8601("2016-01-19T16:07:37+08:00").unwrap();
    let zero = parse_iso8601("2016-01-19T08:07:37+00:00").unwrap();
    let west = parse_iso8601("2016-01-19T03:07:37-05:00").unwrap();

    assert_eq!(utc, east);
    assert_eq!(utc, zero);
    assert_eq!(utc, west);
    assert_eq!(utc.millis(), east.millis());
}

#[test]
fn test_offset_keeps_written_fields() {
    let dt = parse_iso8601("2016-01-19T16:07:37+08:00").unwrap();
    assert_eq!(dt.hour(), 16);
    assert_eq!(dt.utc_hour(), 8);
    assert_eq!(dt.offset_minutes(), 480);
}

#[test]
fn test_offset_crossing_year_boundary() {
    let dt = parse_iso8601("2016-01-01T02:00:00+08:00").unwrap();
    assert_eq!(dt.year(), 2016);
    assert_eq!(dt.utc_year(), 2015);
    assert_eq!(dt.utc_month(), 12);
    assert_eq!(dt.utc_day(), 31);
}

#[test]
fn test_fractional_seconds() {
    assert_eq!(parse_iso8601("2016-01-19T08:07:37.250Z").unwrap().millisecond(), 250);
    assert_eq!(parse_iso8601("2016-01-19T08:07:37.5Z").unwrap().millisecond(), 500);
    assert_eq!(parse_iso8601("2016-01-19T08:07:37,125Z").unwrap().millisecond(), 125);
    // truncated, not rounded
    assert_eq!(parse_iso8601("2016-01-19T08:07:37.123999Z").unwrap().millisecond(), 123);
}

#[test]
fn test_seconds_optional() {
    let dt = parse_iso8601("2016-01-19T08:07Z").unwrap();
    assert_eq!(dt, DateTime::from_utc(2016, 1, 19, 8, 7, 0, 0).unwrap());
}

#[test]
fn test_end_of_day() {
    let dt = parse_iso8601("2015-12-31T24:00:00Z").unwrap();
    assert_eq!(dt, DateTime::from_utc(2016, 1, 1, 0, 0, 0, 0).unwrap());

    let err = parse_iso8601("2015-12-31T24:00:01Z").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::OutOfRange("hour"));
}

#[test]
fn test_leap_day() {
    assert!(parse_iso8601("2016-02-29T00:00:00Z").is_ok());
    assert!(parse_iso8601("2000-02-29T00:00:00Z").is_ok());
    assert_eq!(
        parse_iso8601("1900-02-29T00:00:00Z").unwrap_err().kind(),
        &ParseErrorKind::OutOfRange("day")
    );
}

#[test]
fn test_round_trip() {
    let originals = [
        DateTime::from_utc(2016, 1, 19, 8, 7, 37, 0).unwrap(),
        DateTime::from_offset(2016, 1, 19, 16, 7, 37, 999, 480).unwrap(),
        DateTime::from_offset(1969, 12, 31, 23, 59, 59, 1, -150).unwrap(),
        DateTime::from_millis(0).unwrap(),
    ];
    for dt in originals {
        let parsed = parse_iso8601(&dt.to_iso8601()).unwrap();
        assert_eq!(parsed, dt);
        assert_eq!(parsed.to_iso8601(), dt.to_iso8601());
    }
}

#[test]
fn test_round_trip_at_year_limits() {
    let values = [
        DateTime::from_utc(0, 1, 1, 0, 0, 0, 0).unwrap(),
        DateTime::from_utc(9999, 12, 31, 23, 59, 59, 999).unwrap(),
        DateTime::from_utc(10000, 1, 1, 0, 0, 0, 0).unwrap(),
        DateTime::from_utc(-1, 6, 1, 0, 0, 0, 0).unwrap(),
        DateTime::from_offset(-9999, 3, 1, 12, 0, 0, 0, -330).unwrap(),
        DateTime::from_offset(123456, 7, 4, 8, 30, 0, 250, 60).unwrap(),
    ];
    for dt in values {
        let text = dt.to_iso8601();
        let parsed = parse_iso8601(&text).unwrap_or_else(|e| panic!("{}: {}", text, e));
        assert_eq!(parsed, dt);
        assert_eq!(parsed.year(), dt.year());
        assert_eq!(parsed.to_iso8601(), text);
    }
}

#[test]
fn test_expanded_year_forms() {
    let dt = parse_iso8601("+10000-01-01T00:00:00.000Z").unwrap();
    assert_eq!(dt.year(), 10000);
    let dt = parse_iso8601("-0001-06-01T00:00:00Z").unwrap();
    assert_eq!(dt.year(), -1);
    // unsigned years stay four digits
    assert!(parse_iso8601("10000-01-01T00:00:00Z").is_err());
}

#[test]
fn test_missing_designator() {
    let err = parse_iso8601("2016-01-19T08:07:37").unwrap_err();
    assert_eq!(err.format(), DateFormat::Iso8601);
    assert_eq!(
        err.kind(),
        &ParseErrorKind::UnexpectedEnd {
            expected: "timezone designator 'Z' or '±hh:mm'"
        }
    );
}

#[test]
fn test_out_of_range_fields() {
    for (text, field) in [
        ("2016-13-19T08:07:37Z", "month"),
        ("2016-00-19T08:07:37Z", "month"),
        ("2016-01-32T08:07:37Z", "day"),
        ("2016-01-00T08:07:37Z", "day"),
        ("2016-01-19T25:07:37Z", "hour"),
        ("2016-01-19T08:60:37Z", "minute"),
        ("2016-01-19T08:07:61Z", "second"),
        ("2016-01-19T08:07:37+24:00", "offset hours"),
        ("2016-01-19T08:07:37+08:60", "offset minutes"),
    ] {
        let err = parse_iso8601(text).unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::OutOfRange(field), "input {:?}", text);
    }
}

#[test]
fn test_rejects_malformed() {
    for text in [
        "",
        "2016-01-19",
        "2016-01-19 08:07:37Z",
        "2016-01-19t08:07:37Z",
        "2016-1-19T08:07:37Z",
        "16-01-19T08:07:37Z",
        "2016-01-19T8:07:37Z",
        "2016-01-19T08:07:37.Z",
        "2016-01-19T08:07:37+0800",
        "2016-01-19T08:07:37z",
        "2016-01-19T08:07:37Z ",
        "Tue, 26 Jan 2016 13:48:02 GMT",
    ] {
        assert!(parse_iso8601(text).is_err(), "input {:?}", text);
    }
}

#[test]
fn test_trailing_input_position() {
    let err = parse_iso8601("2016-01-19T08:07:37Zjunk").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::TrailingInput(20));
}
