/// Chapter marker parsing and segmentation
///
/// Turns the free-text chapter list of a video description into
/// time-coded segments.

pub mod line;
pub mod segmenter;

pub use line::{classify_line, LineKind};
pub use segmenter::DescriptionSegmenter;

use serde::{Deserialize, Serialize};

/// One chapter of a video, bounded by its marker and the next one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// 1-based line of the marker in the original description
    pub line_number: usize,
    /// Start timestamp as written in the description
    pub start_timestamp: String,
    /// Next marker's timestamp, or the formatted media duration
    pub end_timestamp: String,
    pub start_seconds: u64,
    pub end_seconds: u64,
    /// Always greater than zero
    pub duration_seconds: u64,
    /// Label following the timestamp
    pub content: String,
}
