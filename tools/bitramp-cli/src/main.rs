//! bitramp CLI — print a per-frame bitrate schedule for an image sequence.
//!
//! Usage:
//!   bitramp                    `<folder>/<file> <bitrate>` for every frame
//!   bitramp --bitrate-only     Only the bitrate of every frame
//!   bitramp <ANY>...           Same as --bitrate-only

use std::path::PathBuf;

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "bitramp",
    about = "Exponential per-frame bitrate ramp for an image sequence",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Directory holding the frames
    #[arg(long, default_value = "frames")]
    folder: PathBuf,

    /// Bitrate of the first frame
    #[arg(long, default_value = "32")]
    min_bitrate: f64,

    /// Bitrate of the last frame
    #[arg(long, default_value = "240")]
    max_bitrate: f64,

    /// Base of the exponential ramp (must be > 1)
    #[arg(long, default_value = "6")]
    base: f64,

    /// Print exact bitrates instead of rounding to integers
    #[arg(long)]
    no_round: bool,

    /// Fixed curve length in frames minus one, instead of the frame count
    #[arg(long)]
    frame_span: Option<usize>,

    /// Print only the bitrate values
    #[arg(long)]
    bitrate_only: bool,

    /// Any extra argument also selects bitrate-only output
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    extra: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    bitramp_common::logging::init_logging(&bitramp_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: cli.log_json,
    });

    let config = bitramp_common::config::CurveConfig {
        frames_folder: cli.folder,
        min_bitrate: cli.min_bitrate,
        max_bitrate: cli.max_bitrate,
        integer_bitrate: !cli.no_round,
        exponent_base: cli.base,
        frame_span: cli.frame_span,
    };

    let mode = if cli.bitrate_only || !cli.extra.is_empty() {
        bitramp_common::config::OutputMode::BitrateOnly
    } else {
        bitramp_common::config::OutputMode::Paired
    };

    commands::generate::run(config, mode)
}
