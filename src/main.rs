use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use reflow::reader::{DocumentReader, ReaderConfig, DEFAULT_INPUT};
use reflow::stats::{unix_timestamp, RunStats};
use reflow::{output_path, write_document, Transformer, DEFAULT_TITLE};

#[derive(Parser, Debug)]
#[command(name = "reflow")]
#[command(about = "Put each sentence of a book excerpt on its own line, leaving code blocks intact")]
#[command(version)]
struct Args {
    /// Text file to transform
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Title the output file name is derived from
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Directory the output file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    let run_start = unix_timestamp();
    let start_time = Instant::now();

    info!(?args, "Parsed CLI arguments");

    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let reader = DocumentReader::new(ReaderConfig::default());
    let (document, read_stats) = reader
        .read_document(&args.input)
        .await
        .context("Reading input failed")?;

    let transformer = Transformer::with_default_rules().context("Building transformer failed")?;
    let transform_start = Instant::now();
    let (output, transform_stats) = transformer
        .transform_with_stats(&document)
        .with_context(|| format!("Transforming {} failed", args.input.display()))?;
    let transform_time_ms = transform_start.elapsed().as_millis() as u64;

    let out_path = output_path(&args.output_dir, &args.title);
    let write_stats = write_document(&out_path, &output)
        .await
        .context("Writing output failed")?;

    println!("reflow v{}", env!("CARGO_PKG_VERSION"));
    println!("  Input:  {} ({} bytes)", read_stats.file_path, read_stats.bytes_read);
    println!("  Output: {} ({} bytes)", write_stats.file_path, write_stats.bytes_written);
    println!(
        "  Lines removed: {}, sentence breaks: {}",
        transform_stats.lines_removed,
        transform_stats.normalizer_breaks + transform_stats.splitter_breaks
    );

    if let Some(stats_path) = &args.stats_out {
        let run_stats = RunStats {
            run_start,
            input_path: read_stats.file_path.clone(),
            output_path: write_stats.file_path.clone(),
            bytes_read: read_stats.bytes_read,
            bytes_written: write_stats.bytes_written,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            transform_time_ms,
            transform: transform_stats,
        };
        run_stats
            .save(stats_path)
            .await
            .with_context(|| format!("Writing stats to {} failed", stats_path.display()))?;
        info!("Stats written to {}", stats_path.display());
    }

    info!("Run completed in {}ms", start_time.elapsed().as_millis());
    Ok(())
}
