use crate::foundation::core::{FrameIndex, Position, Rgb8};
use crate::foundation::math::round_to_pixel;
use crate::motion::path::Trajectory;
use crate::render::frame::{FrameRGB, PixelRect};

/// Geometry and tints of the insect sprite, relative to its rounded centre pixel `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsectStyle {
    /// Wings span `[x - wing_width, x)` and `[x, x + wing_width)` horizontally.
    pub wing_width: i64,
    /// Wings span `[y - wing_half_height, y + wing_half_height)` vertically.
    pub wing_half_height: i64,
    /// Multiplicative tint under each wing.
    pub wing_factor: f64,
    /// Shadow spans `[y + shadow_top, y + shadow_top + 2 * body_half)`.
    pub shadow_top: i64,
    /// Multiplicative tint under the shadow.
    pub shadow_factor: f64,
    /// Body is the square `[x - body_half, x + body_half) x [y - body_half, y + body_half)`.
    pub body_half: i64,
    /// Opaque body colour.
    pub body_color: Rgb8,
}

impl Default for InsectStyle {
    fn default() -> Self {
        Self {
            wing_width: 4,
            wing_half_height: 3,
            wing_factor: 0.7,
            shadow_top: 2,
            shadow_factor: 0.8,
            body_half: 2,
            body_color: Rgb8::new(40, 20, 10),
        }
    }
}

/// Render one frame: a copy of `background` with the insect drawn at `frame`'s position.
///
/// `background` is never mutated. When `frame` is past the end of `trajectory` the result is an
/// unmodified copy of the background.
pub fn render_insect_frame(
    background: &FrameRGB,
    trajectory: &Trajectory,
    frame: FrameIndex,
    style: &InsectStyle,
) -> FrameRGB {
    let mut out = background.clone();
    if let Some(pos) = trajectory.get(frame) {
        draw_insect(&mut out, pos, style);
    }
    out
}

/// Composite the insect into `frame` at `pos`, back to front.
///
/// Wings then shadow are multiplicative tints (so they compound where they overlap); the opaque
/// body is drawn last and overwrites both. Every layer is clipped to the frame.
pub fn draw_insect(frame: &mut FrameRGB, pos: Position, style: &InsectStyle) {
    let x = round_to_pixel(pos.x);
    let y = round_to_pixel(pos.y);
    let s = style;

    let wing_y0 = y - s.wing_half_height;
    let wing_y1 = y + s.wing_half_height;
    frame.scale_rect(PixelRect::new(x - s.wing_width, wing_y0, x, wing_y1), s.wing_factor);
    frame.scale_rect(PixelRect::new(x, wing_y0, x + s.wing_width, wing_y1), s.wing_factor);

    let shadow_y0 = y + s.shadow_top;
    frame.scale_rect(
        PixelRect::new(
            x - s.body_half,
            shadow_y0,
            x + s.body_half,
            shadow_y0 + 2 * s.body_half,
        ),
        s.shadow_factor,
    );

    frame.fill_rect(PixelRect::around(x, y, s.body_half), s.body_color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/insect.rs"]
mod tests;
