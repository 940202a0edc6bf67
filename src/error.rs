//! Error types for date parsing.

use std::fmt;

/// The textual date format a parser was trying to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    Rfc2822,
    Iso8601,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Rfc2822 => f.write_str("RFC 2822"),
            DateFormat::Iso8601 => f.write_str("ISO 8601"),
        }
    }
}

/// What went wrong while scanning a date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("input is empty")]
    Empty,

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("expected {expected} at byte {position}, found {found:?}")]
    Unexpected {
        expected: &'static str,
        found: char,
        position: usize,
    },

    #[error("{0} is out of range")]
    OutOfRange(&'static str),

    #[error("unknown month name {0:?}")]
    UnknownMonth(String),

    #[error("unknown day of week {0:?}")]
    UnknownWeekday(String),

    #[error("unknown timezone {0:?}")]
    UnknownZone(String),

    #[error("day of week {found} does not match the date, which falls on a {actual}")]
    WeekdayMismatch {
        found: chrono::Weekday,
        actual: chrono::Weekday,
    },

    #[error("unterminated comment")]
    UnterminatedComment,

    #[error("trailing input at byte {0}")]
    TrailingInput(usize),
}

/// A date string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {format} date {input:?}: {kind}")]
pub struct ParseError {
    format: DateFormat,
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(format: DateFormat, input: &str, kind: ParseErrorKind) -> Self {
        Self {
            format,
            input: input.to_string(),
            kind,
        }
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
