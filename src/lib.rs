//! buzzclip procedurally generates a short clip of a buzzing insect.
//!
//! A [`ClipSession`] turns one immutable [`ClipConfig`] into two synchronized streams:
//!
//! 1. **Background**: a textured canvas generated once per session
//! 2. **Trajectory**: a bounded velocity random walk, one position per frame
//! 3. **Frames**: `background + insect(position)` rendered lazily per frame tick ([`FrameRGB`])
//! 4. **Audio**: a multi-harmonic buzz with noise and tremolo, peak-normalized to 16-bit PCM
//!    ([`Waveform`])
//!
//! Frame count (`floor(duration * fps)`) and sample count (`round(duration * sample_rate)`) both
//! derive from the single configured duration. Encoding and muxing are left to an external
//! collaborator implementing [`FrameSink`].
//!
//! All randomness flows through explicit `rand::Rng` parameters; sessions derive independent
//! per-component streams from one root seed, so a configured seed reproduces a clip exactly.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod audio;
mod foundation;
mod motion;
mod render;
mod scene;

/// Encoder hand-off sinks.
pub mod encode;
/// Session-oriented clip generation API.
pub mod session;

pub use audio::buzz::{BuzzParams, quantize_pcm16, synthesize_buzz, synthesize_buzz_with_params};
pub use audio::waveform::Waveform;
pub use encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Canvas, Fps, FrameIndex, FrameRange, Point, Position, Rgb8, Vec2, Velocity,
};
pub use foundation::error::{BuzzError, BuzzResult};
pub use foundation::rng::{
    RngStream, derive_stream_seed, fresh_root_seed, standard_normal, stream_rng,
};
pub use motion::path::{PathParams, Trajectory, simulate_frames, simulate_path};
pub use render::frame::{FrameRGB, PixelRect};
pub use render::insect::{InsectStyle, draw_insect, render_insect_frame};
pub use scene::background::{BackgroundStyle, generate_background, generate_background_with_style};
pub use scene::config::ClipConfig;
pub use session::clip_session::{ClipSession, RenderSessionOpts, RenderStats};
