use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config files searched, in order, when none is given explicitly
pub const CONFIG_FILE_NAMES: [&str; 2] = ["chapter-segmenter.toml", "config/chapter-segmenter.toml"];

/// Configuration for the chapter segmenter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source record discovery
    pub input: InputConfig,

    /// Corpus artifact settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding one description file per video
    pub source_dir: PathBuf,

    /// File extensions treated as source records
    pub source_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV segment table
    pub path: PathBuf,

    /// Prefix the CSV with a UTF-8 byte-order mark
    pub write_bom: bool,

    /// Write the run report as JSON next to the table
    pub save_report: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for this crate (trace, debug, info, warn, error)
    pub level: String,
}

impl Config {
    /// Load the first config file found in the working directory, else the
    /// environment. A config file that exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        match Self::locate_in(Path::new(".")) {
            Some(path) => Self::load_from(&path),
            None => Self::from_env(),
        }
    }

    /// First existing config file under `base`
    pub fn locate_in(base: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| base.join(name))
            .find(|path| path.is_file())
    }

    /// Load configuration from a specific TOML file. Missing keys keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Cannot read config {}: {}", path.display(), e))?;
        toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(source_dir) = std::env::var("CHAPTER_SEGMENTER_SOURCE_DIR") {
            config.input.source_dir = PathBuf::from(source_dir);
        }

        if let Ok(output) = std::env::var("CHAPTER_SEGMENTER_OUTPUT") {
            config.output.path = PathBuf::from(output);
        }

        if let Ok(log_level) = std::env::var("CHAPTER_SEGMENTER_LOG_LEVEL") {
            config.logging.level = log_level;
        }

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.source_extensions.is_empty() {
            return Err(anyhow!("source_extensions must not be empty"));
        }

        if self
            .input
            .source_extensions
            .iter()
            .any(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(anyhow!("source_extensions are written without a leading dot"));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(anyhow!("output path must not be empty"));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(anyhow!("Unknown log level: {}", other)),
        }

        Ok(())
    }

    /// Runtime configuration summary
    pub fn summary(&self) -> String {
        format!(
            "Chapter Segmenter Configuration:\n\
            - Source Directory: {}\n\
            - Source Extensions: {}\n\
            - Output: {}\n\
            - UTF-8 BOM: {}\n\
            - Save Report: {}\n\
            - Log Level: {}",
            self.input.source_dir.display(),
            self.input.source_extensions.join(", "),
            self.output.path.display(),
            self.output.write_bom,
            self.output.save_report,
            self.logging.level
        )
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("descriptions"),
            source_extensions: vec!["json".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("video_descriptions_table.csv"),
            write_bom: true,
            save_report: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_source_dir(mut self, dir: PathBuf) -> Self {
        self.config.input.source_dir = dir;
        self
    }

    pub fn with_source_extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.input.source_extensions = extensions;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.config.output.path = path;
        self
    }

    pub fn write_bom(mut self, enable: bool) -> Self {
        self.config.output.write_bom = enable;
        self
    }

    pub fn save_report(mut self, enable: bool) -> Self {
        self.config.output.save_report = enable;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
