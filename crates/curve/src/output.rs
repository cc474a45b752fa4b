//! Plain-text schedule output.
//!
//! One line per frame, newline-terminated, no header or summary:
//! `<folder>/<file> <bitrate>` in paired mode, `<bitrate>` otherwise.

use std::io::Write;
use std::path::Path;

use bitramp_common::{BitrampResult, OutputMode};

use crate::generate::FrameBitrate;

/// Write the schedule for `frames` to `writer`.
///
/// `folder` is printed as given, joined to each name with `/`.
pub fn write_schedule<W: Write>(
    writer: &mut W,
    folder: &Path,
    frames: &[FrameBitrate],
    mode: OutputMode,
) -> BitrampResult<()> {
    let folder = folder.display();
    for frame in frames {
        match mode {
            OutputMode::Paired => {
                writeln!(writer, "{}/{} {}", folder, frame.name, frame.bitrate)?
            }
            OutputMode::BitrateOnly => writeln!(writer, "{}", frame.bitrate)?,
        }
    }
    writer.flush()?;
    Ok(())
}
