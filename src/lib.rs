/// Chapter Segmenter
///
/// Parses the timestamped chapter lists embedded in video descriptions and
/// assembles them into one sorted, time-coded segment table.

pub mod config;
pub mod corpus;
pub mod error;
pub mod segments;
pub mod source;
pub mod timestamp;

// Re-export main types for easy access
pub use crate::config::{Config, ConfigBuilder};
pub use crate::corpus::{AssemblyReport, CorpusAssembler, CorpusWriter, FileOutcome, RunOutcome, SegmentRecord};
pub use crate::error::{AssemblyError, SourceError, TimestampError};
pub use crate::segments::{classify_line, DescriptionSegmenter, LineKind, Segment};
pub use crate::source::{LoadedSource, SourceRecord};
pub use crate::timestamp::{format_seconds, timestamp_to_seconds};
