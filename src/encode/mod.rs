//! Encoder hand-off.
//!
//! Sinks consume rendered frames in timeline order plus the complete audio track. Container
//! encoding and muxing live outside this crate, behind [`sink::FrameSink`].

/// Generic frame sink trait and built-in sinks.
pub mod sink;
