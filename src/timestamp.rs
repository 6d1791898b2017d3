//! Timestamp normalization
//!
//! Chapter markers use `M:SS`, `MM:SS`, `H:MM:SS` or `HH:MM:SS`. The
//! rightmost two fields are always minutes and seconds.

use crate::error::TimestampError;

/// Convert a `MM:SS` or `HH:MM:SS` timestamp into whole seconds.
///
/// Hours are unbounded, so `25:00:00` is accepted as 90000 seconds.
pub fn timestamp_to_seconds(timestamp: &str) -> Result<u64, TimestampError> {
    let parts: Vec<&str> = timestamp.trim().split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => ("0", *minutes, *seconds),
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        _ => return Err(TimestampError::InvalidFormat(timestamp.to_string())),
    };

    let hours = parse_field("hours", hours)?;
    let minutes = parse_field("minutes", minutes)?;
    let seconds = parse_field("seconds", seconds)?;

    Ok(hours * 3600 + minutes * 60 + seconds)
}

fn parse_field(field: &'static str, value: &str) -> Result<u64, TimestampError> {
    value.parse::<u64>().map_err(|_| TimestampError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Format seconds the way a description would write them: `H:MM:SS` from one
/// hour upwards, `M:SS` below. The leading field is never zero-padded.
pub fn format_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
