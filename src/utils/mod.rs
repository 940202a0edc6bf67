//! Date and time utility functions.
//!
//! Every function here is pure: it reads a [`DateTime`](crate::DateTime) or a
//! string and returns a new value, with no shared state.
//!
//! # Available Utilities
//!
//! - [`rfc2822`] - Parsing email-style dates such as `Tue, 26 Jan 2016 13:48:02 GMT`
//! - [`iso8601`] - Parsing extended ISO 8601 timestamps with a timezone designator
//! - [`calendar`] - Leap years and month lengths
//! - [`timespan`] - Formatting elapsed time as `HH:mm:ss.sss`
//! - [`clock`] - Angle between the hands of an analog clock

pub mod calendar;
pub mod clock;
pub mod iso8601;
pub mod rfc2822;
pub(crate) mod scanner;
pub mod timespan;
