pub(crate) mod buzz;
pub(crate) mod waveform;
