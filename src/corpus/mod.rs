/// Corpus assembly: segment every source file and build one sorted table

pub mod assembler;
pub mod writer;

pub use assembler::CorpusAssembler;
pub use writer::CorpusWriter;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::segments::Segment;
use crate::source::LoadedSource;

/// One row of the output table. Field order is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentRecord {
    pub video_date: NaiveDate,
    pub video_id: String,
    pub title: String,
    pub line_number: usize,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration_seconds: u64,
    pub content: String,
}

impl SegmentRecord {
    pub fn new(source: &LoadedSource, segment: Segment) -> Self {
        Self {
            video_date: source.video_date,
            video_id: source.video_id.clone(),
            title: source.record.title().to_string(),
            line_number: segment.line_number,
            start_timestamp: segment.start_timestamp,
            end_timestamp: segment.end_timestamp,
            duration_seconds: segment.duration_seconds,
            content: segment.content,
        }
    }
}

/// What happened to a single source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed {
        file: String,
        video_id: String,
        rows: usize,
    },
    Failed {
        file: String,
        reason: String,
    },
}

impl FileOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, FileOutcome::Processed { .. })
    }

    pub fn file(&self) -> &str {
        match self {
            FileOutcome::Processed { file, .. } | FileOutcome::Failed { file, .. } => file,
        }
    }
}

/// Per-file outcomes and totals for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub source_dir: PathBuf,
    pub files: Vec<FileOutcome>,
    pub total_rows: usize,
    pub elapsed: Duration,
}

impl AssemblyReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_processed()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_processed())
    }
}

/// Sorted rows plus the report that produced them
#[derive(Debug, Clone)]
pub struct Corpus {
    pub records: Vec<SegmentRecord>,
    pub report: AssemblyReport,
}

/// How a full run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// The table was written
    Written {
        output: PathBuf,
        report: AssemblyReport,
    },
    /// Every file failed or had no chapters; nothing was written
    NothingToProcess { report: AssemblyReport },
    /// The artifact was already there; no work was done
    OutputExists { output: PathBuf },
}
