// Utility functions
// Formatting, validation, helpers

pub mod time;

pub use time::{format_timestamp, is_timestamp_format, parse_timestamp, to_date_string, TimeBasis};
