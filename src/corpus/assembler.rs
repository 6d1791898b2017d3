/// Corpus assembler: runs the segmenter over a directory of source records
use super::{AssemblyReport, Corpus, CorpusWriter, FileOutcome, RunOutcome, SegmentRecord};
use crate::config::Config;
use crate::error::{AssemblyError, SourceError};
use crate::segments::{DescriptionSegmenter, Segment};
use crate::source::{display_name, LoadedSource};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};
use walkdir::WalkDir;

/// Builds the sorted segment table from every source file in a directory
#[derive(Debug, Clone)]
pub struct CorpusAssembler {
    source_extensions: Vec<String>,
    segmenter: DescriptionSegmenter,
    writer: CorpusWriter,
    save_report: bool,
}

impl CorpusAssembler {
    pub fn new(config: &Config) -> Self {
        Self {
            source_extensions: config
                .input
                .source_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            segmenter: DescriptionSegmenter::new(),
            writer: CorpusWriter::new(config.output.write_bom),
            save_report: config.output.save_report,
        }
    }

    /// Assemble the corpus and write it to `output`.
    ///
    /// Does nothing if `output` already exists, and writes nothing if no
    /// segment survived. The optional JSON report is best-effort.
    pub fn run(&self, source_dir: &Path, output: &Path) -> Result<RunOutcome, AssemblyError> {
        if output.exists() {
            return Ok(RunOutcome::OutputExists {
                output: output.to_path_buf(),
            });
        }

        let corpus = self.assemble(source_dir)?;

        if corpus.records.is_empty() {
            return Ok(RunOutcome::NothingToProcess {
                report: corpus.report,
            });
        }

        self.writer.write_csv(&corpus.records, output)?;

        // The table is already on disk; a missing report does not fail the run.
        if self.save_report {
            let report_path = CorpusWriter::report_path(output);
            if let Err(e) = self.writer.write_report(&corpus.report, &report_path) {
                error!("❌ Failed to save report {}: {}", report_path.display(), e);
            }
        }

        Ok(RunOutcome::Written {
            output: output.to_path_buf(),
            report: corpus.report,
        })
    }

    /// Segment every source file and sort the rows by (video_date, line_number).
    ///
    /// Files are visited in filename order and the sort is stable, so rows of
    /// different videos sharing a date and line number keep filename order.
    pub fn assemble(&self, source_dir: &Path) -> Result<Corpus, AssemblyError> {
        let start_time = Instant::now();
        let sources = self.discover_sources(source_dir)?;

        info!("🔍 Found {} source files in {}", sources.len(), source_dir.display());

        let mut records = Vec::new();
        let mut report = AssemblyReport {
            source_dir: source_dir.to_path_buf(),
            ..Default::default()
        };

        for path in &sources {
            let file = display_name(path);
            match self.process_file(path) {
                Ok((source, segments)) => {
                    let rows = segments.len();
                    records.extend(
                        segments
                            .into_iter()
                            .map(|segment| SegmentRecord::new(&source, segment)),
                    );
                    info!("✅ {}: {} segments", file, rows);
                    report.files.push(FileOutcome::Processed {
                        file,
                        video_id: source.video_id,
                        rows,
                    });
                }
                Err(e) => {
                    error!("❌ Error processing {}: {}", file, e);
                    report.files.push(FileOutcome::Failed {
                        file,
                        reason: e.to_string(),
                    });
                }
            }
        }

        records.sort_by_key(|r| (r.video_date, r.line_number));

        report.total_rows = records.len();
        report.elapsed = start_time.elapsed();

        Ok(Corpus { records, report })
    }

    /// Load and segment a single source file
    pub fn process_file(&self, path: &Path) -> Result<(LoadedSource, Vec<Segment>), SourceError> {
        let source = LoadedSource::load(path)?;
        let segments = self.segmenter.segment(
            &source.record.description,
            source.record.duration_seconds,
            &source.file_name(),
        )?;
        Ok((source, segments))
    }

    /// Source files directly inside `dir`, sorted by filename
    pub fn discover_sources(&self, dir: &Path) -> Result<Vec<PathBuf>, AssemblyError> {
        if !dir.is_dir() {
            return Err(AssemblyError::MissingSourceDir(dir.to_path_buf()));
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() && self.is_source_file(entry.path()) {
                sources.push(entry.into_path());
            }
        }

        Ok(sources)
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.source_extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}
