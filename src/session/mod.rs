/// Session-oriented clip generation API.
pub mod clip_session;
