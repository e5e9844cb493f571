use rayon::prelude::*;

use crate::audio::buzz::synthesize_buzz;
use crate::audio::waveform::Waveform;
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{BuzzError, BuzzResult};
use crate::foundation::rng::{RngStream, fresh_root_seed, stream_rng};
use crate::motion::path::{Trajectory, simulate_path};
use crate::render::frame::FrameRGB;
use crate::render::insect::{InsectStyle, render_insect_frame};
use crate::scene::background::generate_background;
use crate::scene::config::ClipConfig;

/// Options controlling `ClipSession` range rendering behavior.
#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    /// Enable frame-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Frames rendered per batch before they are handed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

impl RenderSessionOpts {
    fn validate(&self) -> BuzzResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(BuzzError::configuration(
                "render 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Frames rendered and delivered to the sink.
    pub frames_rendered: u64,
}

/// Owns one generated clip: configuration, background, trajectory and audio track.
///
/// Everything is generated once in [`ClipSession::new`] and is read-only afterwards, so frame
/// rendering can run from any number of threads. Each render call returns its own buffer.
pub struct ClipSession {
    cfg: ClipConfig,
    seed: u64,
    background: FrameRGB,
    trajectory: Trajectory,
    waveform: Waveform,
    style: InsectStyle,
    opts: RenderSessionOpts,
}

impl std::fmt::Debug for ClipSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipSession")
            .field("cfg", &self.cfg)
            .field("seed", &self.seed)
            .field("frames", &self.trajectory.len())
            .field("samples", &self.waveform.len())
            .finish_non_exhaustive()
    }
}

impl ClipSession {
    /// Validate `cfg` and generate the clip with default render options.
    pub fn new(cfg: ClipConfig) -> BuzzResult<Self> {
        Self::with_opts(cfg, RenderSessionOpts::default())
    }

    /// Validate `cfg` and generate background, trajectory and audio track.
    #[tracing::instrument(skip(cfg, opts))]
    pub fn with_opts(cfg: ClipConfig, opts: RenderSessionOpts) -> BuzzResult<Self> {
        cfg.validate()?;
        opts.validate()?;

        let seed = match cfg.seed {
            Some(seed) => seed,
            None => {
                let seed = fresh_root_seed();
                tracing::info!(seed, "no seed configured; drew a fresh root seed");
                seed
            }
        };

        let background =
            generate_background(cfg.canvas, &mut stream_rng(seed, RngStream::Background));
        let trajectory = simulate_path(
            cfg.canvas,
            cfg.duration_secs,
            cfg.fps,
            &mut stream_rng(seed, RngStream::Path),
        )?;
        let waveform = synthesize_buzz(
            cfg.duration_secs,
            cfg.sample_rate,
            &mut stream_rng(seed, RngStream::Audio),
        )?;

        debug_assert_eq!(trajectory.len() as u64, cfg.frame_count());
        debug_assert_eq!(waveform.len() as u64, cfg.sample_count());
        tracing::debug!(
            seed,
            frames = trajectory.len(),
            samples = waveform.len(),
            "clip session ready"
        );

        Ok(Self {
            cfg,
            seed,
            background,
            trajectory,
            waveform,
            style: InsectStyle::default(),
            opts,
        })
    }

    /// Configuration the session was built from.
    pub fn config(&self) -> &ClipConfig {
        &self.cfg
    }

    /// Root seed actually used (configured or freshly drawn).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The static background every frame is composited over.
    pub fn background(&self) -> &FrameRGB {
        &self.background
    }

    /// Per-frame insect positions.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Complete audio track for `[0, duration)`.
    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// Number of video frames in the clip.
    pub fn frame_count(&self) -> u64 {
        self.trajectory.len() as u64
    }

    /// Map a timestamp to its frame index: `floor(t * fps)`.
    ///
    /// Returns `None` for times outside `[0, duration)` or past the last frame.
    pub fn frame_index_at(&self, t: f64) -> Option<FrameIndex> {
        if !t.is_finite() || t < 0.0 || t >= self.cfg.duration_secs {
            return None;
        }
        let idx = self.cfg.fps.secs_to_frames_floor(t);
        (idx < self.frame_count()).then_some(FrameIndex(idx))
    }

    /// Render the frame for `frame`. Indices past the end yield the plain background.
    pub fn render_frame(&self, frame: FrameIndex) -> FrameRGB {
        render_insect_frame(&self.background, &self.trajectory, frame, &self.style)
    }

    /// Render the frame shown at time `t` seconds.
    ///
    /// Out-of-range times are not an error: they resolve to the plain background.
    pub fn render_at(&self, t: f64) -> FrameRGB {
        match self.frame_index_at(t) {
            Some(idx) => self.render_frame(idx),
            None => {
                tracing::debug!(t, "render time outside clip; returning background");
                self.background.clone()
            }
        }
    }

    /// Sink configuration describing this clip's video and audio streams.
    pub fn sink_config(&self) -> SinkConfig {
        self.sink_config_for(FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.frame_count()),
        })
    }

    /// Audio covering exactly the wall-clock span of `range`.
    ///
    /// Sample bounds are the frame boundaries converted at the clip's sample rate, clamped to
    /// the synthesized track.
    pub fn waveform_for(&self, range: FrameRange) -> Waveform {
        let (start, end) = self.sample_bounds(range);
        self.waveform.slice(start, end)
    }

    fn sample_bounds(&self, range: FrameRange) -> (u64, u64) {
        let total = self.waveform.len() as u64;
        let rate = self.waveform.sample_rate;
        let start = self.cfg.fps.frame_to_sample(range.start.0, rate).min(total);
        let end = self.cfg.fps.frame_to_sample(range.end.0, rate).min(total);
        (start, end.max(start))
    }

    fn sink_config_for(&self, range: FrameRange) -> SinkConfig {
        let (start, end) = self.sample_bounds(range);
        SinkConfig {
            width: self.cfg.canvas.width,
            height: self.cfg.canvas.height,
            fps: self.cfg.fps,
            audio: Some(AudioInputConfig {
                sample_rate: self.waveform.sample_rate,
                channels: 1,
                total_samples: end - start,
            }),
        }
    }

    /// Render every frame of the clip into `sink`.
    pub fn render_all(&self, sink: &mut dyn FrameSink) -> BuzzResult<RenderStats> {
        let range = FrameRange::new(FrameIndex(0), FrameIndex(self.frame_count()))?;
        self.render_range(range, sink)
    }

    /// Render a frame range and stream it into a sink.
    ///
    /// The sink receives the configuration, then the audio covering the same span as `range`,
    /// then frames in strictly increasing index order. With `parallel` enabled each chunk renders on a dedicated rayon
    /// pool and is delivered in order once complete.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> BuzzResult<RenderStats> {
        if range.end.0 > self.frame_count() {
            return Err(BuzzError::configuration(
                "render_range range must be within clip duration",
            ));
        }

        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };
        let chunk_size = normalized_chunk_size(self.opts.chunk_size);

        sink.begin(self.sink_config_for(range))?;
        sink.push_audio(&self.waveform_for(range))?;

        let mut stats = RenderStats {
            frames_total: range.len_frames(),
            frames_rendered: 0,
        };
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let frames: Vec<FrameRGB> = match pool.as_ref() {
                Some(pool) => pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|f| self.render_frame(FrameIndex(f)))
                        .collect()
                }),
                None => (chunk_start..chunk_end)
                    .map(|f| self.render_frame(FrameIndex(f)))
                    .collect(),
            };

            for (f, frame) in (chunk_start..chunk_end).zip(&frames) {
                sink.push_frame(FrameIndex(f), frame)?;
            }
            stats.frames_rendered += frames.len() as u64;
            chunk_start = chunk_end;
        }

        sink.end()?;
        Ok(stats)
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> BuzzResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BuzzError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/clip_session.rs"]
mod tests;
