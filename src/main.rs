use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use messenger_stats::export::RawConversationPart;
use messenger_stats::{logging, render, stats_builder, timefmt};

#[derive(Parser)]
#[command(name = "messenger-stats")]
#[command(about = "Analyse a Messenger conversation export", long_about = None)]
struct Cli {
    /// Export part files for one conversation (usually `message_1.json`,
    /// `message_2.json`, ...)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write the full statistics structure as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write the Markdown report to this path instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    info!(parts = cli.files.len(), "reading export parts");
    let parts = cli
        .files
        .iter()
        .map(|path| RawConversationPart::load_from_file(path))
        .collect::<Result<Vec<_>>>()?;

    let stats = stats_builder::analyze(&parts)?;
    info!(
        "conversation spans {} to {}",
        timefmt::format_datetime(stats.start_ms),
        timefmt::format_datetime(stats.end_ms)
    );

    if let Some(json_path) = &cli.json {
        let json = serde_json::to_string_pretty(&stats)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("Failed to write stats JSON: {}", json_path.display()))?;
        info!("stats JSON written to: {}", json_path.display());
    }

    let markdown = render::render(&stats)?;
    match &cli.output {
        Some(output_path) => {
            std::fs::write(output_path, markdown)
                .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
            info!("report written to: {}", output_path.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
