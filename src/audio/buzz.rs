use std::f64::consts::TAU;

use rand::Rng;

use crate::audio::waveform::Waveform;
use crate::foundation::error::{BuzzError, BuzzResult};
use crate::foundation::rng::standard_normal;
use crate::scene::config::sample_count;

/// Tone, noise and modulation constants of the insect buzz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuzzParams {
    /// Centre frequency of the fundamental in Hz.
    pub base_hz: f64,
    /// Peak deviation of the pitch wobble in Hz.
    pub wobble_depth_hz: f64,
    /// Rate of the pitch wobble in Hz.
    pub wobble_rate_hz: f64,
    /// Amplitude of the fundamental.
    pub fundamental_amp: f64,
    /// `(frequency ratio, amplitude)` of each overtone, relative to the instantaneous pitch.
    pub overtones: [(f64, f64); 2],
    /// Scale of the additive Gaussian noise.
    pub noise_amp: f64,
    /// Depth of the wingbeat tremolo.
    pub tremolo_depth: f64,
    /// Rate of the wingbeat tremolo in Hz.
    pub tremolo_rate_hz: f64,
}

impl Default for BuzzParams {
    fn default() -> Self {
        Self {
            base_hz: 200.0,
            wobble_depth_hz: 50.0,
            wobble_rate_hz: 2.0,
            fundamental_amp: 0.5,
            overtones: [(1.5, 0.3), (2.0, 0.2)],
            noise_amp: 0.1,
            tremolo_depth: 0.3,
            tremolo_rate_hz: 100.0,
        }
    }
}

impl BuzzParams {
    /// Noise-free buzz value at time `t` seconds, before normalization.
    pub fn tone_at(&self, t: f64) -> f64 {
        let freq = self.base_hz + self.wobble_depth_hz * (TAU * self.wobble_rate_hz * t).sin();
        let mut v = self.fundamental_amp * (TAU * freq * t).sin();
        for &(ratio, amp) in &self.overtones {
            v += amp * (TAU * ratio * freq * t).sin();
        }
        v
    }

    /// Tremolo gain at time `t` seconds.
    pub fn tremolo_at(&self, t: f64) -> f64 {
        1.0 + self.tremolo_depth * (TAU * self.tremolo_rate_hz * t).sin()
    }
}

/// Synthesize the buzz track with default [`BuzzParams`].
///
/// Returns exactly `round(duration_secs * sample_rate)` samples.
pub fn synthesize_buzz<R: Rng + ?Sized>(
    duration_secs: f64,
    sample_rate: u32,
    rng: &mut R,
) -> BuzzResult<Waveform> {
    synthesize_buzz_with_params(duration_secs, sample_rate, &BuzzParams::default(), rng)
}

/// Synthesize the buzz track.
///
/// The time axis spans `[0, duration_secs]` inclusive with evenly spaced samples. Each sample is
/// the multi-harmonic tone plus scaled Gaussian noise, multiplied by the tremolo gain. The
/// signal is then peak-normalized to the full 16-bit range and truncated toward zero.
#[tracing::instrument(skip(params, rng))]
pub fn synthesize_buzz_with_params<R: Rng + ?Sized>(
    duration_secs: f64,
    sample_rate: u32,
    params: &BuzzParams,
    rng: &mut R,
) -> BuzzResult<Waveform> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(BuzzError::configuration(format!(
            "audio duration must be positive, got {duration_secs}"
        )));
    }
    if sample_rate == 0 {
        return Err(BuzzError::configuration("audio sample_rate must be non-zero"));
    }

    let n = sample_count(duration_secs, sample_rate) as usize;
    let step = if n > 1 {
        duration_secs / (n - 1) as f64
    } else {
        0.0
    };

    let mut signal = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 * step;
        let noisy = params.tone_at(t) + params.noise_amp * standard_normal(rng);
        signal.push(noisy * params.tremolo_at(t));
    }

    let samples = quantize_pcm16(&signal)?;
    tracing::debug!(samples = samples.len(), sample_rate, "buzz synthesized");
    Ok(Waveform {
        samples,
        sample_rate,
    })
}

/// Peak-normalize `signal` to `[-32767, 32767]` and truncate each value toward zero.
///
/// An empty signal yields no samples. A non-empty signal whose peak is zero or not finite cannot
/// be normalized and is rejected.
pub fn quantize_pcm16(signal: &[f64]) -> BuzzResult<Vec<i16>> {
    if signal.is_empty() {
        return Ok(Vec::new());
    }
    let peak = signal.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if signal.iter().any(|v| !v.is_finite()) || peak == 0.0 {
        return Err(BuzzError::degenerate_signal(format!(
            "cannot normalize signal with peak amplitude {peak}"
        )));
    }
    let full_scale = f64::from(i16::MAX);
    Ok(signal
        .iter()
        .map(|v| ((v / peak) * full_scale) as i16)
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/buzz.rs"]
mod tests;
