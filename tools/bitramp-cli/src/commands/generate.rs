//! Generate and print the bitrate schedule.

use std::io::{BufWriter, Write};

use anyhow::Context;
use bitramp_common::config::{CurveConfig, OutputMode};
use bitramp_curve::{generate, write_schedule, DirectoryListing};

pub fn run(config: CurveConfig, mode: OutputMode) -> anyhow::Result<()> {
    let resolved = config.to_json()?;
    tracing::debug!(config = %resolved, ?mode, "Resolved configuration");

    let listing = DirectoryListing::new(&config.frames_folder);
    let frames = generate(&config, &listing).with_context(|| {
        format!(
            "Failed to build schedule for {}",
            config.frames_folder.display()
        )
    })?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_schedule(&mut out, &config.frames_folder, &frames, mode)
        .context("Failed to write schedule")?;
    out.flush()?;

    tracing::debug!(frames = frames.len(), "Schedule written");
    Ok(())
}
