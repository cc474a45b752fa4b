//! bitramp Curve — per-frame bitrate ramps
//!
//! Assigns each frame of an image sequence a target bitrate that rises
//! exponentially from a minimum on the first frame to a maximum on the last:
//! - **Curve:** the exponential ramp itself
//! - **Listing:** sorted frame names from a directory or from memory
//! - **Generate:** the ramp laid over a listing
//! - **Output:** the plain-text schedule format
//!
//! Apart from [`listing::DirectoryListing`], this crate does no I/O of its
//! own; the schedule is written to whatever writer the caller supplies.

pub mod curve;
pub mod generate;
pub mod listing;
pub mod output;

pub use curve::ExponentialCurve;
pub use generate::{generate, Bitrate, FrameBitrate};
pub use listing::{DirectoryListing, FrameSource, StaticListing};
pub use output::write_schedule;
