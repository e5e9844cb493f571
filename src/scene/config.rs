use std::path::Path;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{BuzzError, BuzzResult};

/// Immutable clip configuration, fixed before any generation begins.
///
/// Video frame count and audio sample count both derive from the single `duration_secs`
/// value, so the two streams always cover the same wall-clock span.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Clip length in seconds.
    pub duration_secs: f64,
    /// Video frame rate.
    pub fps: Fps,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Root random seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            duration_secs: 10.0,
            fps: Fps::default(),
            sample_rate: 44_100,
            seed: None,
        }
    }
}

impl ClipConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BuzzResult<Self> {
        serde_json::from_str(s).map_err(|e| BuzzError::serde(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> BuzzResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read clip config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check that every dimension, rate and duration is positive and finite.
    pub fn validate(&self) -> BuzzResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(BuzzError::configuration(
                "canvas width/height must be non-zero",
            ));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(BuzzError::configuration(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.sample_rate == 0 {
            return Err(BuzzError::configuration("sample_rate must be non-zero"));
        }
        Ok(())
    }

    /// Number of video frames: `floor(duration * fps)`.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_secs)
    }

    /// Number of audio samples: `round(duration * sample_rate)`.
    pub fn sample_count(&self) -> u64 {
        sample_count(self.duration_secs, self.sample_rate)
    }
}

/// `round(duration_secs * sample_rate)`, clamped at zero.
pub(crate) fn sample_count(duration_secs: f64, sample_rate: u32) -> u64 {
    (duration_secs * f64::from(sample_rate)).round().max(0.0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
