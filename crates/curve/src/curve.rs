//! Exponential bitrate ramp.
//!
//! The ramp maps a normalized position `t` in `[0, 1]` to
//! `min + (max - min) * (base^t - 1) / (base - 1)`. The shape term is
//! 0 at `t = 0` and 1 at `t = 1`, so the ramp starts at `min` and ends at
//! `max`, rising slowly at first and steeply near the end.

use bitramp_common::CurveConfig;

/// An exponential ramp between two bitrates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCurve {
    min: f64,
    max: f64,
    base: f64,
}

impl ExponentialCurve {
    /// Create a ramp from `min` to `max` with the given exponent base.
    ///
    /// `base` is expected to be greater than 1; see [`CurveConfig::validate`].
    pub fn new(min: f64, max: f64, base: f64) -> Self {
        Self { min, max, base }
    }

    /// Build the ramp described by a configuration.
    pub fn from_config(config: &CurveConfig) -> Self {
        Self::new(config.min_bitrate, config.max_bitrate, config.exponent_base)
    }

    /// Normalized shape term `(base^t - 1) / (base - 1)`.
    pub fn shape(&self, t: f64) -> f64 {
        (self.base.powf(t) - 1.0) / (self.base - 1.0)
    }

    /// Bitrate at normalized position `t`.
    ///
    /// Endpoints are exact: `t <= 0` gives `min` and `t >= 1` gives `max`.
    /// The product is taken before the division by `base - 1`; results are
    /// bit-for-bit those of `min + ((max - min) * (base^t - 1)) / (base - 1)`.
    pub fn bitrate_at_fraction(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.min;
        }
        if t >= 1.0 {
            return self.max;
        }
        self.min + (self.max - self.min) * (self.base.powf(t) - 1.0) / (self.base - 1.0)
    }

    /// Bitrate of frame `index` on a ramp whose last frame is `span`.
    ///
    /// A zero span has a single frame, which sits at `min`.
    pub fn bitrate_at(&self, index: usize, span: usize) -> f64 {
        if span == 0 {
            return self.min;
        }
        self.bitrate_at_fraction(index as f64 / span as f64)
    }
}

impl Default for ExponentialCurve {
    fn default() -> Self {
        Self::from_config(&CurveConfig::default())
    }
}
