/// CSV and report serialization for the assembled corpus
use super::{AssemblyReport, SegmentRecord};
use crate::error::AssemblyError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the segment table and, optionally, the run report
#[derive(Debug, Clone)]
pub struct CorpusWriter {
    write_bom: bool,
}

impl CorpusWriter {
    pub fn new(write_bom: bool) -> Self {
        Self { write_bom }
    }

    /// Write rows as CSV with a header. Refuses to replace an existing file;
    /// a partially written file is removed on failure.
    pub fn write_csv(&self, records: &[SegmentRecord], path: &Path) -> Result<(), AssemblyError> {
        let file = create_new(path)?;

        if let Err(e) = self.write_rows(file, records) {
            let _ = std::fs::remove_file(path);
            return Err(e);
        }

        info!("📝 Wrote {} rows to: {}", records.len(), path.display());
        Ok(())
    }

    fn write_rows(&self, file: File, records: &[SegmentRecord]) -> Result<(), AssemblyError> {
        let mut out = BufWriter::new(file);
        if self.write_bom {
            out.write_all(UTF8_BOM)?;
        }

        let mut writer = csv::Writer::from_writer(out);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the report as pretty JSON. Refuses to replace an existing file.
    pub fn write_report(&self, report: &AssemblyReport, path: &Path) -> Result<(), AssemblyError> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = create_new(path)?;
        file.write_all(json.as_bytes())?;
        info!("💾 Report saved to: {}", path.display());
        Ok(())
    }

    /// Report location for a given table path
    pub fn report_path(output: &Path) -> PathBuf {
        output.with_extension("report.json")
    }
}

impl Default for CorpusWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn create_new(path: &Path) -> Result<File, AssemblyError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().write(true).create_new(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(line_number: usize, content: &str) -> SegmentRecord {
        SegmentRecord {
            video_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            video_id: "abc123".to_string(),
            title: "Conseils, épisode 3".to_string(),
            line_number,
            start_timestamp: "0:00".to_string(),
            end_timestamp: "1:30".to_string(),
            duration_seconds: 90,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");

        CorpusWriter::new(false)
            .write_csv(&[record(2, "Présentation")], &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("video_date,video_id,title,line_number,start_timestamp,end_timestamp,duration_seconds,content")
        );
        assert_eq!(
            lines.next(),
            Some("2024-01-05,abc123,\"Conseils, épisode 3\",2,0:00,1:30,90,Présentation")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_bom_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");

        CorpusWriter::new(true).write_csv(&[record(1, "Intro")], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert!(bytes[UTF8_BOM.len()..].starts_with(b"video_date,"));
    }

    #[test]
    fn test_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");
        std::fs::write(&path, "keep me").unwrap();

        let result = CorpusWriter::default().write_csv(&[record(1, "Intro")], &path);
        assert!(matches!(result, Err(AssemblyError::Io(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_report_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.report.json");
        std::fs::write(&path, "earlier report").unwrap();

        let result = CorpusWriter::default().write_report(&AssemblyReport::default(), &path);
        assert!(matches!(result, Err(AssemblyError::Io(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier report");
    }

    #[test]
    fn test_report_path() {
        assert_eq!(
            CorpusWriter::report_path(Path::new("out/video_descriptions_table.csv")),
            PathBuf::from("out/video_descriptions_table.report.json")
        );
    }
}
