//! `spritesheet` CLI - Pack folders of PNG sprites into one spritesheet.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spritesheet::{Composer, Config, Mode, DEFAULT_OUTPUT_NAME};

/// Pack a folder of PNG sprites into a single spritesheet.
#[derive(Parser, Debug)]
#[command(name = "spritesheet")]
#[command(version, about, long_about = None)]
struct Args {
    /// Layout mode: "a"/"action" stacks the folder's PNGs vertically,
    /// "i"/"individual" makes one row per subfolder.
    #[arg(value_name = "MODE", value_parser = Mode::from_str)]
    mode: Mode,

    /// Folder holding the sprites. The spritesheet is written here.
    #[arg(value_name = "FOLDER")]
    folder: PathBuf,

    /// Output file name.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME, value_name = "NAME")]
    output: String,

    /// Treat an existing output file in the folder as an input sprite.
    #[arg(long)]
    include_output: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("spritesheet={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    if !args.folder.is_dir() {
        anyhow::bail!("Folder does not exist: {}", args.folder.display());
    }

    let config = Config {
        output_name: args.output.clone(),
        exclude_output: !args.include_output,
    };

    let composer = Composer::new(config).context("Invalid configuration")?;

    let summary = composer
        .compose(args.mode, &args.folder)
        .with_context(|| format!("Failed to compose {} spritesheet", args.mode))?;

    println!(
        "Spritesheet created successfully: {} ({} rows, {} columns, {}x{})",
        summary.output.display(),
        summary.rows,
        summary.columns,
        summary.width,
        summary.height
    );

    Ok(())
}
