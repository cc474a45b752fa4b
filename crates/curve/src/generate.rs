//! Lay the ramp over a frame listing.

use std::fmt;

use bitramp_common::{BitrampResult, CurveConfig};

use crate::curve::ExponentialCurve;
use crate::listing::FrameSource;

/// A single bitrate value as it will be printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bitrate {
    /// Unrounded value, printed in shortest round-trip form.
    Exact(f64),
    /// Value rounded to the nearest integer, ties to even.
    Rounded(i64),
}

impl Bitrate {
    /// Wrap a raw value, rounding it when `integer` is set.
    pub fn from_value(value: f64, integer: bool) -> Self {
        if integer {
            Self::Rounded(value.round_ties_even() as i64)
        } else {
            Self::Exact(value)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Exact(v) => v,
            Self::Rounded(v) => v as f64,
        }
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rounded(v) => write!(f, "{v}"),
            Self::Exact(v) => write_real(f, v),
        }
    }
}

/// Shortest round-trip form with a mandatory decimal point, switching to
/// `1e-05` / `1e+16` style below 1e-4 and from 1e16 upwards.
fn write_real(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{v:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// One frame with its assigned bitrate.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBitrate {
    /// Position in the sorted listing.
    pub index: usize,
    /// File name inside the frames folder.
    pub name: String,
    pub bitrate: Bitrate,
}

/// Compute the bitrate of every frame `source` lists.
///
/// The first frame gets `min_bitrate` and the last gets `max_bitrate`. A
/// lone frame gets `min_bitrate`; an empty listing yields nothing. With a
/// fixed `frame_span`, frames past the span stay at `max_bitrate`.
pub fn generate(
    config: &CurveConfig,
    source: &dyn FrameSource,
) -> BitrampResult<Vec<FrameBitrate>> {
    config.validate()?;

    let names = source.frame_names()?;
    let curve = ExponentialCurve::from_config(config);

    match (names.len(), config.frame_span) {
        (0, _) => {
            tracing::warn!(
                folder = %config.frames_folder.display(),
                "No frames found, nothing to generate"
            );
            return Ok(Vec::new());
        }
        (1, None) => {
            tracing::warn!(
                folder = %config.frames_folder.display(),
                "Single frame, assigning minimum bitrate"
            );
        }
        _ => {}
    }

    let span = config.frame_span.unwrap_or(names.len() - 1);
    tracing::debug!(frames = names.len(), span, "Generating bitrate ramp");

    let frames = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let value = curve.bitrate_at(index, span);
            FrameBitrate {
                index,
                name,
                bitrate: Bitrate::from_value(value, config.integer_bitrate),
            }
        })
        .collect();

    Ok(frames)
}
