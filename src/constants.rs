//! Constants used throughout the library
//!
//! This module centralizes unit conversions, file names and other constant
//! values to improve maintainability and consistency.

// Time Units
pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

// Clock Face
/// The hour hand sweeps 30° per hour, i.e. 0.5° per minute
pub const HOUR_HAND_DEGREES_PER_MINUTE: f64 = 0.5;
/// The minute hand sweeps 360° per hour, i.e. 6° per minute
pub const MINUTE_HAND_DEGREES_PER_MINUTE: f64 = 6.0;
/// Hours above this are folded onto the 12-hour dial
pub const CLOCK_DIAL_HOURS: u32 = 12;

// Files and Directories
pub const APP_DIR_NAME: &str = "timekit";
pub const LOCAL_CONFIG_FILE: &str = "timekit.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "timekit.log";

// Logging
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
