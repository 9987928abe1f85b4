//! Command-line interface for writebench
//!
//! # Usage Examples
//!
//! ```bash
//! # Write one million records to a Parquet file
//! writebench /tmp/students.parquet 1000000
//!
//! # Smaller batches, zstd-compressed pages
//! writebench /tmp/students.parquet 1000000 \
//!   --batch-size 4096 \
//!   --compression zstd
//! ```
//!
//! Progress is printed to stdout as `<percent>%` lines at roughly 1%
//! granularity; `write end` is printed on success. Timing and throughput are
//! logged at info level (set `RUST_LOG=info` to see them).

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use writebench::WriteDriver;
use writebench_core::RecordSchema;
use writebench_sink_parquet::{CompressionCodec, ParquetSink, ParquetSinkOptions};

#[derive(Parser)]
#[command(name = "writebench")]
#[command(about = "Benchmark columnar write throughput with synthetic student records")]
#[command(long_about = None)]
struct Cli {
    /// Output Parquet file path
    output: PathBuf,

    /// Number of records to generate and write
    count: u64,

    /// Rows buffered per record batch
    #[arg(long, default_value = "8192")]
    batch_size: usize,

    /// Compression codec for data pages
    #[arg(long, value_enum, default_value = "snappy")]
    compression: CompressionArg,
}

/// Compression codec choices exposed on the CLI.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionArg {
    None,
    Snappy,
    Zstd,
}

impl From<CompressionArg> for CompressionCodec {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => CompressionCodec::None,
            CompressionArg::Snappy => CompressionCodec::Snappy,
            CompressionArg::Zstd => CompressionCodec::Zstd,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "writing {} records to {}",
        cli.count,
        cli.output.display()
    );

    let schema = RecordSchema::student();
    let options = ParquetSinkOptions {
        batch_size: cli.batch_size,
        compression: cli.compression.into(),
    };
    let sink = ParquetSink::with_options(&cli.output, &schema, options)
        .with_context(|| format!("Failed to open output file {:?}", cli.output))?;

    let mut driver =
        WriteDriver::new(cli.count).with_progress(|percent| println!("{percent}%"));
    let metrics = driver
        .run(sink)
        .with_context(|| format!("Failed to write records to {:?}", cli.output))?;

    let file_size = std::fs::metadata(&cli.output).map(|m| m.len()).unwrap_or(0);
    tracing::info!(
        "{} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        file_size,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    println!("write end");
    Ok(())
}
