use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Independent random streams derived from one root seed.
///
/// Each generator draws from its own stream, so the number of values one component consumes
/// never shifts another component's sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngStream {
    /// Background texture noise and darkening patches.
    Background,
    /// Insect start position and velocity random walk.
    Path,
    /// Gaussian roughness in the buzz waveform.
    Audio,
}

impl RngStream {
    fn salt(self) -> u64 {
        match self {
            Self::Background => 0x6267_5f74_6578_7475,
            Self::Path => 0x7061_7468_5f77_616c,
            Self::Audio => 0x6175_6469_6f5f_6e7a,
        }
    }
}

/// One SplitMix64 step; returns the mixed output for `state`.
pub(crate) fn split_mix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derive the seed for `stream` from a root seed.
pub fn derive_stream_seed(root: u64, stream: RngStream) -> u64 {
    split_mix64(root ^ stream.salt())
}

/// Build the deterministic generator for `stream`.
pub fn stream_rng(root: u64, stream: RngStream) -> Pcg32 {
    Pcg32::seed_from_u64(derive_stream_seed(root, stream))
}

/// Draw a fresh root seed from the thread-local OS-seeded generator.
pub fn fresh_root_seed() -> u64 {
    rand::rng().random()
}

/// Standard normal sample (mean 0, variance 1) via the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // `1 - u` keeps the log argument in (0, 1].
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
