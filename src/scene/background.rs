use rand::Rng;

use crate::foundation::core::{Canvas, Rgb8};
use crate::render::frame::{FrameRGB, PixelRect};

/// Parameters of the procedural background texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStyle {
    /// Base tint the canvas is filled with before texturing.
    pub base: Rgb8,
    /// Per-channel noise is drawn uniformly from `[0, noise_max)` and subtracted.
    pub noise_max: u8,
    /// Number of darkening patches.
    pub patch_count: u32,
    /// Patch radius is drawn uniformly from `[patch_radius_min, patch_radius_max)`.
    pub patch_radius_min: u32,
    /// Exclusive upper bound of the patch radius.
    pub patch_radius_max: u32,
    /// Multiplicative darkening applied inside each patch.
    pub patch_factor: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            base: Rgb8::new(200, 230, 180),
            noise_max: 30,
            patch_count: 50,
            patch_radius_min: 5,
            patch_radius_max: 15,
            patch_factor: 0.8,
        }
    }
}

/// Generate the static textured background with the default [`BackgroundStyle`].
pub fn generate_background<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> FrameRGB {
    generate_background_with_style(canvas, &BackgroundStyle::default(), rng)
}

/// Generate the static textured background.
///
/// The canvas is filled with `style.base`, every channel of every pixel is lowered by an
/// independent noise value (saturating at 0), then `style.patch_count` square patches with a
/// random centre and radius are darkened. Patches are clipped to the canvas and compound where
/// they overlap.
#[tracing::instrument(skip(style, rng))]
pub fn generate_background_with_style<R: Rng + ?Sized>(
    canvas: Canvas,
    style: &BackgroundStyle,
    rng: &mut R,
) -> FrameRGB {
    let mut frame = FrameRGB::filled(canvas, style.base);

    if style.noise_max > 0 {
        for c in &mut frame.data {
            let noise: u8 = rng.random_range(0..style.noise_max);
            *c = c.saturating_sub(noise);
        }
    }

    if canvas.width == 0 || canvas.height == 0 {
        return frame;
    }

    let radius_max = style
        .patch_radius_max
        .max(style.patch_radius_min.saturating_add(1));
    for _ in 0..style.patch_count {
        let cx = rng.random_range(0..canvas.width);
        let cy = rng.random_range(0..canvas.height);
        let radius = rng.random_range(style.patch_radius_min..radius_max);
        frame.scale_rect(
            PixelRect::around(i64::from(cx), i64::from(cy), i64::from(radius)),
            style.patch_factor,
        );
    }

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        patches = style.patch_count,
        "background generated"
    );
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/scene/background.rs"]
mod tests;
