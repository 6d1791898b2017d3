use anyhow::Result;
use chapter_segmenter::{Config, CorpusAssembler, RunOutcome};
use clap::{Arg, Command};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = Command::new("Chapter Segmenter")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Builds a time-coded segment table from video description chapter markers")
        .arg(
            Arg::new("input-dir")
                .short('d')
                .long("input-dir")
                .value_name("DIR")
                .help("Directory containing description JSON files")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("CSV file to create")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Also write the run report as JSON next to the table")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("no-bom")
                .long("no-bom")
                .help("Do not prefix the CSV with a UTF-8 byte-order mark")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .or_else(|| Config::locate_in(Path::new(".")));

    let mut config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::from_env()?,
    };

    if let Some(dir) = matches.get_one::<String>("input-dir") {
        config.input.source_dir = PathBuf::from(dir);
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output.path = PathBuf::from(output);
    }
    if matches.get_flag("report") {
        config.output.save_report = true;
    }
    if matches.get_flag("no-bom") {
        config.output.write_bom = false;
    }
    if matches.get_flag("verbose") {
        config.logging.level = "debug".to_string();
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "chapter_segmenter={},warn",
            config.logging.level
        )))
        .init();

    match &config_path {
        Some(path) => info!("📄 Loaded configuration from: {}", path.display()),
        None => debug!("No config file found, using defaults and environment"),
    }

    config.validate()?;
    debug!("{}", config.summary());

    info!("🚀 Chapter Segmenter starting...");
    info!("📁 Input directory: {}", config.input.source_dir.display());
    info!("📄 Output table: {}", config.output.path.display());

    let assembler = CorpusAssembler::new(&config);

    match assembler.run(&config.input.source_dir, &config.output.path)? {
        RunOutcome::OutputExists { output } => {
            warn!(
                "⏭️ {} already exists, skipping. Delete it first to regenerate.",
                output.display()
            );
        }
        RunOutcome::NothingToProcess { report } => {
            warn!(
                "📭 Nothing to process: no segments found in {}",
                report.source_dir.display()
            );
            info!("✅ Successful: {}", report.succeeded());
            info!("❌ Failed: {}", report.failed());
            info!("📊 Rows: 0");
        }
        RunOutcome::Written { output, report } => {
            info!("🎉 Created {} in {:.2}s", output.display(), report.elapsed.as_secs_f64());
            info!("✅ Successful: {}", report.succeeded());
            info!("❌ Failed: {}", report.failed());
            info!("📊 Rows: {}", report.total_rows);
        }
    }

    Ok(())
}
