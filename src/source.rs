//! Source records: one JSON description container per video

use crate::error::SourceError;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Date embedded at the end of the file stem, e.g. `description_cc_05-01-2024`
static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([0-9]{2}-[0-9]{2}-[0-9]{4})$").unwrap());

static EMBEDDED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).unwrap());

/// Day-month-year, as written in source filenames
pub const FILENAME_DATE_FORMAT: &str = "%d-%m-%Y";

/// Per-video metadata as left on disk by the description fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    pub description: String,

    /// Total media length in seconds
    #[serde(alias = "duration")]
    pub duration_seconds: u64,

    /// Platform upload date (`YYYYMMDD`)
    #[serde(default)]
    pub upload_date: Option<String>,

    #[serde(default)]
    pub view_count: Option<u64>,
}

impl SourceRecord {
    /// Parse a record from JSON text
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Use `video_id` when present, else the first watch URL in the description
    pub fn resolve_video_id(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| video_id_from_text(&self.description))
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// A source record with its filename date and resolved identifier
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub video_date: NaiveDate,
    pub video_id: String,
    pub record: SourceRecord,
}

impl LoadedSource {
    /// Read and validate one source file.
    ///
    /// Fails on a filename without a valid `_DD-MM-YYYY` date, unreadable or
    /// malformed JSON, or a video id that cannot be resolved.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let video_date = extract_video_date(path)?;

        let content = std::fs::read_to_string(path)?;
        let record = SourceRecord::from_json(&content)?;

        let video_id = record
            .resolve_video_id()
            .ok_or_else(|| SourceError::UnresolvedVideoId(display_name(path)))?;

        debug!("📄 Loaded {} ({}, {})", path.display(), video_id, video_date);

        Ok(Self {
            path: path.to_path_buf(),
            video_date,
            video_id,
            record,
        })
    }

    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Extract the `DD-MM-YYYY` date that ends a source file's stem
pub fn extract_video_date(path: &Path) -> Result<NaiveDate, SourceError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SourceError::MissingDate(display_name(path)))?;

    let raw = FILENAME_DATE
        .captures(stem)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SourceError::MissingDate(display_name(path)))?;

    NaiveDate::parse_from_str(raw, FILENAME_DATE_FORMAT)
        .map_err(|_| SourceError::InvalidDate(raw.to_string()))
}

/// Find the `v` parameter of the first watch-page URL in free text
pub fn video_id_from_text(text: &str) -> Option<String> {
    EMBEDDED_URL
        .find_iter(text)
        .filter_map(|m| Url::parse(m.as_str()).ok())
        .filter(|url| url.path().ends_with("/watch"))
        .find_map(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| {
                    value
                        .chars()
                        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                        .collect::<String>()
                })
                .filter(|id| !id.is_empty())
        })
}

/// File name of `path` for logs and reports
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_video_date() {
        let date = extract_video_date(Path::new("descriptions/description_cc_05-01-2024.json")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_extract_video_date_missing() {
        let err = extract_video_date(Path::new("description.json")).unwrap_err();
        assert!(matches!(err, SourceError::MissingDate(_)));

        let err = extract_video_date(Path::new("description_2024-01-05.json")).unwrap_err();
        assert!(matches!(err, SourceError::MissingDate(_)));
    }

    #[test]
    fn test_extract_video_date_invalid() {
        let err = extract_video_date(Path::new("description_cc_31-02-2024.json")).unwrap_err();
        assert!(matches!(err, SourceError::InvalidDate(d) if d == "31-02-2024"));
    }

    #[test]
    fn test_video_id_from_text() {
        assert_eq!(
            video_id_from_text("Replay: https://host/watch?v=XYZ123 merci"),
            Some("XYZ123".to_string())
        );
        assert_eq!(
            video_id_from_text("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            video_id_from_text("(voir https://www.youtube.com/watch?list=PL1&v=ab_c-D)"),
            Some("ab_c-D".to_string())
        );
    }

    #[test]
    fn test_video_id_from_text_skips_other_links() {
        let text = "Site: https://example.com/about\nhttps://www.youtube.com/watch?v=first\nhttps://www.youtube.com/watch?v=second";
        assert_eq!(video_id_from_text(text), Some("first".to_string()));

        assert_eq!(video_id_from_text("https://youtu.be/abc"), None);
        assert_eq!(video_id_from_text("no links here"), None);
        assert_eq!(video_id_from_text("https://host/watch?v="), None);
    }

    #[test]
    fn test_record_fields_and_duration_alias() {
        let record = SourceRecord::from_json(
            r#"{"video_id": "abc", "title": "Épisode 1", "description": "0:00 Intro", "duration": 120, "view_count": 42}"#,
        )
        .unwrap();

        assert_eq!(record.duration_seconds, 120);
        assert_eq!(record.title(), "Épisode 1");
        assert_eq!(record.view_count, Some(42));
        assert_eq!(record.resolve_video_id(), Some("abc".to_string()));
    }

    #[test]
    fn test_record_missing_description() {
        let err = SourceRecord::from_json(r#"{"video_id": "abc", "duration": 120}"#).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn test_blank_video_id_falls_back_to_description() {
        let record = SourceRecord::from_json(
            r#"{"video_id": " ", "description": "https://www.youtube.com/watch?v=XYZ123", "duration_seconds": 10}"#,
        )
        .unwrap();
        assert_eq!(record.resolve_video_id(), Some("XYZ123".to_string()));
        assert_eq!(record.title(), "");
    }

    #[test]
    fn test_load_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("description_cc_14-12-2023.json");
        std::fs::write(
            &path,
            r#"{"title": "T", "description": "0:00 A\nhttps://www.youtube.com/watch?v=gIxTj562cZ0", "duration": 60}"#,
        )
        .unwrap();

        let source = LoadedSource::load(&path).unwrap();
        assert_eq!(source.video_id, "gIxTj562cZ0");
        assert_eq!(source.video_date, NaiveDate::from_ymd_opt(2023, 12, 14).unwrap());
        assert_eq!(source.file_name(), "description_cc_14-12-2023.json");
    }

    #[test]
    fn test_load_source_unresolved_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("description_cc_14-12-2023.json");
        std::fs::write(&path, r#"{"description": "0:00 A", "duration": 60}"#).unwrap();

        let err = LoadedSource::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::UnresolvedVideoId(name) if name == "description_cc_14-12-2023.json"));
    }
}
