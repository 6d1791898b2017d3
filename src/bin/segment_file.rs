use anyhow::Result;
use chapter_segmenter::{CorpusAssembler, Config, SegmentRecord};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "segment-file")]
#[command(about = "Show the chapter segments of a single description file")]
struct Cli {
    /// Description JSON file (name must end in _DD-MM-YYYY)
    file: PathBuf,

    /// Print an aligned table instead of JSON
    #[arg(long)]
    table: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("chapter_segmenter=info,warn")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let assembler = CorpusAssembler::new(&Config::default());

    let (source, segments) = assembler.process_file(&cli.file)?;
    info!(
        "🎬 {} ({}, {}s): {} segments",
        source.video_id,
        source.video_date,
        source.record.duration_seconds,
        segments.len()
    );

    let records: Vec<SegmentRecord> = segments
        .into_iter()
        .map(|segment| SegmentRecord::new(&source, segment))
        .collect();

    if cli.table {
        for record in &records {
            println!(
                "{:>4}  {:>8} -> {:<8} {:>6}s  {}",
                record.line_number,
                record.start_timestamp,
                record.end_timestamp,
                record.duration_seconds,
                record.content
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    Ok(())
}
