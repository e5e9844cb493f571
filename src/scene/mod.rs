pub(crate) mod background;
pub(crate) mod config;
