/// Multiply an 8-bit channel by `factor` in `[0, 1]`, truncating toward zero.
pub(crate) fn scale_channel(v: u8, factor: f64) -> u8 {
    (f64::from(v) * factor).clamp(0.0, 255.0) as u8
}

/// Round a canvas coordinate to the nearest integer pixel (half away from zero).
pub(crate) fn round_to_pixel(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
