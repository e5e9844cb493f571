use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::math::scale_channel;

/// A rendered frame (or the static background) as RGB8 pixels.
///
/// Pixels are tightly packed, row-major, three bytes per pixel. Every channel is a `u8`, so all
/// writes are inherently clamped to `[0, 255]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Allocate a frame of `canvas` size filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgb8) -> Self {
        let mut data = Vec::with_capacity(canvas.pixel_count() * 3);
        for _ in 0..canvas.pixel_count() {
            data.extend_from_slice(&color.to_array());
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Read the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        let i = self.offset(x, y)?;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Overwrite the pixel at `(x, y)`. Writes outside the frame are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 3].copy_from_slice(&color.to_array());
        }
    }

    /// Multiply every pixel inside `rect` by `factor`, truncating each channel.
    ///
    /// `rect` is clipped to the frame first; regions fully off-canvas are a no-op.
    pub fn scale_rect(&mut self, rect: PixelRect, factor: f64) {
        let Some(r) = rect.clip_to(self.width, self.height) else {
            return;
        };
        let stride = self.width as usize * 3;
        for y in r.y0..r.y1 {
            let row = y as usize * stride;
            let span = &mut self.data[row + r.x0 as usize * 3..row + r.x1 as usize * 3];
            for c in span {
                *c = scale_channel(*c, factor);
            }
        }
    }

    /// Set every pixel inside `rect` to `color`, clipped to the frame.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgb8) {
        let Some(r) = rect.clip_to(self.width, self.height) else {
            return;
        };
        let stride = self.width as usize * 3;
        let rgb = color.to_array();
        for y in r.y0..r.y1 {
            let row = y as usize * stride;
            let span = &mut self.data[row + r.x0 as usize * 3..row + r.x1 as usize * 3];
            for px in span.chunks_exact_mut(3) {
                px.copy_from_slice(&rgb);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }
}

/// Half-open integer pixel rectangle `[x0, x1) x [y0, y1)`.
///
/// Bounds are signed so shapes may hang off any canvas edge before clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Inclusive left edge.
    pub x0: i64,
    /// Inclusive top edge.
    pub y0: i64,
    /// Exclusive right edge.
    pub x1: i64,
    /// Exclusive bottom edge.
    pub y1: i64,
}

impl PixelRect {
    /// Rectangle from its half-open bounds.
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square of side `2 * radius` centred on `(cx, cy)`: `[cx - r, cx + r)`.
    pub fn around(cx: i64, cy: i64, radius: i64) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Intersect with `[0, width) x [0, height)`. Returns `None` when nothing is left.
    pub fn clip_to(self, width: u32, height: u32) -> Option<Self> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(i64::from(width));
        let y1 = self.y1.min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self { x0, y0, x1, y1 })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
