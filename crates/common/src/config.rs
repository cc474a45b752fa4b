//! Run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{BitrampError, BitrampResult};

/// Parameters of one bitrate ramp over a frames directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Directory whose entries are the frames.
    pub frames_folder: PathBuf,

    /// Bitrate assigned to the first frame.
    pub min_bitrate: f64,

    /// Bitrate assigned to the last frame.
    pub max_bitrate: f64,

    /// Round each bitrate to the nearest integer (ties to even).
    pub integer_bitrate: bool,

    /// Base of the exponential ramp. Must be greater than 1.
    pub exponent_base: f64,

    /// Fixed curve denominator. `None` uses `frame count - 1`.
    pub frame_span: Option<usize>,
}

/// How each generated frame is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// `<folder>/<file> <bitrate>`
    #[default]
    Paired,
    /// `<bitrate>`
    BitrateOnly,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "bitramp_curve=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            frames_folder: PathBuf::from("frames"),
            min_bitrate: 32.0,
            max_bitrate: 240.0,
            integer_bitrate: true,
            exponent_base: 6.0,
            frame_span: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl CurveConfig {
    /// Reject parameter combinations the ramp is undefined for.
    pub fn validate(&self) -> BitrampResult<()> {
        if !self.exponent_base.is_finite() || self.exponent_base <= 1.0 {
            return Err(BitrampError::config(format!(
                "exponent base must be a finite number greater than 1, got {}",
                self.exponent_base
            )));
        }
        if !self.min_bitrate.is_finite() || !self.max_bitrate.is_finite() {
            return Err(BitrampError::config(format!(
                "bitrate bounds must be finite, got {}..{}",
                self.min_bitrate, self.max_bitrate
            )));
        }
        if self.min_bitrate > self.max_bitrate {
            return Err(BitrampError::config(format!(
                "minimum bitrate {} exceeds maximum bitrate {}",
                self.min_bitrate, self.max_bitrate
            )));
        }
        if self.frame_span == Some(0) {
            return Err(BitrampError::config("frame span must be at least 1"));
        }
        Ok(())
    }

    /// Render the configuration as a single-line JSON object.
    pub fn to_json(&self) -> BitrampResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CurveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frames_folder, PathBuf::from("frames"));
        assert_eq!(config.min_bitrate, 32.0);
        assert_eq!(config.max_bitrate, 240.0);
        assert_eq!(config.exponent_base, 6.0);
        assert!(config.integer_bitrate);
    }

    #[test]
    fn test_rejects_flat_or_decaying_base() {
        for base in [1.0, 0.5, -3.0, f64::NAN, f64::INFINITY] {
            let config = CurveConfig {
                exponent_base: base,
                ..CurveConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(BitrampError::Config { .. })),
                "base {base} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = CurveConfig {
            min_bitrate: 300.0,
            ..CurveConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let config = CurveConfig {
            min_bitrate: 100.0,
            max_bitrate: 100.0,
            ..CurveConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_frame_span() {
        let config = CurveConfig {
            frame_span: Some(0),
            ..CurveConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_json_includes_folder() {
        let json = CurveConfig::default().to_json().unwrap();
        assert!(json.contains("\"frames_folder\":\"frames\""), "{json}");
        assert!(json.contains("\"frame_span\":null"), "{json}");
    }

    #[test]
    fn test_output_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&OutputMode::BitrateOnly).unwrap();
        assert_eq!(json, "\"bitrate-only\"");
    }
}
