use crate::audio::waveform::Waveform;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{BuzzError, BuzzResult};
use crate::render::frame::FrameRGB;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Audio track description, when the session carries one.
    pub audio: Option<AudioInputConfig>,
}

/// Raw PCM audio description for sinks that also encode audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInputConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count (the buzz track is mono).
    pub channels: u16,
    /// Total sample frames in the track.
    pub total_samples: u64,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Call order: `begin`, then `push_audio` at most once, then `push_frame` in strictly increasing
/// `FrameIndex` order, then `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BuzzResult<()>;
    /// Receive the complete audio track. Sinks without audio support ignore it.
    fn push_audio(&mut self, _waveform: &Waveform) -> BuzzResult<()> {
        Ok(())
    }
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> BuzzResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> BuzzResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    audio: Option<Waveform>,
    frames: Vec<(FrameIndex, FrameRGB)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured audio track, if one was pushed.
    pub fn audio(&self) -> Option<&Waveform> {
        self.audio.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGB)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BuzzResult<()> {
        self.cfg = Some(cfg);
        self.audio = None;
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_audio(&mut self, waveform: &Waveform) -> BuzzResult<()> {
        if self.cfg.is_none() {
            return Err(BuzzError::evaluation("in-memory sink not started"));
        }
        self.audio = Some(waveform.clone());
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> BuzzResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BuzzError::evaluation("in-memory sink not started"))?;
        if let Some((last, _)) = self.frames.last()
            && idx.0 <= last.0
        {
            return Err(BuzzError::evaluation(
                "in-memory sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(BuzzError::evaluation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BuzzResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
