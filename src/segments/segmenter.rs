/// Description segmentation: marker lines to time-coded segments
use super::line::{classify_line, LineKind};
use super::Segment;
use crate::error::TimestampError;
use crate::timestamp::{format_seconds, timestamp_to_seconds};
use tracing::{debug, warn};

/// A marker line found during the first pass
#[derive(Debug, Clone)]
struct Marker<'a> {
    line_number: usize,
    timestamp: &'a str,
    content: &'a str,
}

/// Splits a description into chapter segments.
///
/// Each marker runs until the next marker found anywhere later in the text,
/// or until the end of the media when it is the last one.
#[derive(Debug, Clone, Default)]
pub struct DescriptionSegmenter;

impl DescriptionSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Segment one description.
    ///
    /// `source` only labels log messages. Segments whose computed duration is
    /// zero or negative are dropped with a warning. An error means a matched
    /// timestamp failed to normalize, which aborts the whole description.
    pub fn segment(
        &self,
        description: &str,
        media_duration_seconds: u64,
        source: &str,
    ) -> Result<Vec<Segment>, TimestampError> {
        let markers: Vec<Marker<'_>> = description
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| match classify_line(line) {
                LineKind::Marker { timestamp, content } => Some(Marker {
                    line_number: index + 1,
                    timestamp,
                    content,
                }),
                LineKind::Plain => None,
            })
            .collect();

        if markers.is_empty() {
            debug!("No chapter markers in {}", source);
            return Ok(Vec::new());
        }

        let media_end = format_seconds(media_duration_seconds);
        let mut segments = Vec::with_capacity(markers.len());

        for (index, marker) in markers.iter().enumerate() {
            let end_timestamp = markers
                .get(index + 1)
                .map(|next| next.timestamp)
                .unwrap_or(media_end.as_str());

            let start_seconds = timestamp_to_seconds(marker.timestamp)?;
            let end_seconds = timestamp_to_seconds(end_timestamp)?;

            if end_seconds <= start_seconds {
                warn!(
                    "⚠️ Dropping segment '{}' at {} line {}: {} -> {} is not a positive duration",
                    marker.content, source, marker.line_number, marker.timestamp, end_timestamp
                );
                continue;
            }

            segments.push(Segment {
                line_number: marker.line_number,
                start_timestamp: marker.timestamp.to_string(),
                end_timestamp: end_timestamp.to_string(),
                start_seconds,
                end_seconds,
                duration_seconds: end_seconds - start_seconds,
                content: marker.content.to_string(),
            });
        }

        debug!(
            "📝 {}: {} segments from {} markers",
            source,
            segments.len(),
            markers.len()
        );

        Ok(segments)
    }
}
