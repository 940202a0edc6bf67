//! timekit - Small, pure date and time utilities
//!
//! This library parses RFC 2822 and ISO 8601 date strings, answers calendar
//! questions such as whether a year is a leap year, formats elapsed time as
//! `HH:mm:ss.sss`, and computes the angle between the hands of a clock.
//!
//! # Modules
//!
//! * [`datetime`] - The [`DateTime`] value every function works with
//! * [`error`] - Parse error types
//! * [`utils`] - The parsing, calendar, timespan and clock functions
//! * [`config`] - Optional configuration file support
//! * [`logger`] - Optional file logging setup
//!
//! # Example
//!
//! ```
//! use timekit::{format_time_span, parse_iso8601, parse_rfc2822};
//!
//! let start = parse_rfc2822("Tue, 26 Jan 2016 13:48:02 GMT").unwrap();
//! let end = parse_iso8601("2016-01-26T15:00:00.125Z").unwrap();
//! assert_eq!(format_time_span(&start, &end), "01:11:58.125");
//! ```

/// Configuration module for managing library settings
pub mod config;

/// Library constants and default values
pub mod constants;

/// Date-time value with millisecond precision
pub mod datetime;

/// Error types for parsing
pub mod error;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Utility functions for date/time parsing, calendar math and formatting
pub mod utils;

pub use datetime::DateTime;
pub use error::{DateFormat, ParseError, ParseErrorKind};
pub use utils::calendar::is_leap_year;
pub use utils::clock::{clock_hand_angle, clock_hand_degrees};
pub use utils::iso8601::parse_iso8601;
pub use utils::rfc2822::parse_rfc2822;
pub use utils::timespan::{format_time_span, format_time_span_with, NegativeSpanPolicy, TimeSpan};
