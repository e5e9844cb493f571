use super::*;

fn small() -> FrameRGB {
    FrameRGB::filled(
        Canvas {
            width: 8,
            height: 6,
        },
        Rgb8::new(100, 200, 50),
    )
}

#[test]
fn filled_has_expected_size_and_color() {
    let f = small();
    assert_eq!(f.data.len(), 8 * 6 * 3);
    assert_eq!(f.pixel(7, 5), Some(Rgb8::new(100, 200, 50)));
    assert_eq!(f.pixel(8, 0), None);
    assert_eq!(f.pixel(0, 6), None);
}

#[test]
fn clip_to_handles_negative_and_overhanging_bounds() {
    let r = PixelRect::new(-4, -2, 3, 2).clip_to(8, 6).unwrap();
    assert_eq!(r, PixelRect::new(0, 0, 3, 2));

    let r = PixelRect::new(6, 4, 12, 9).clip_to(8, 6).unwrap();
    assert_eq!(r, PixelRect::new(6, 4, 8, 6));

    assert!(PixelRect::new(-5, 0, 0, 6).clip_to(8, 6).is_none());
    assert!(PixelRect::new(8, 0, 10, 6).clip_to(8, 6).is_none());
    assert!(PixelRect::new(2, 2, 2, 4).clip_to(8, 6).is_none());
}

#[test]
fn scale_rect_only_touches_clipped_region() {
    let mut f = small();
    f.scale_rect(PixelRect::new(-1, -1, 2, 2), 0.5);
    assert_eq!(f.pixel(0, 0), Some(Rgb8::new(50, 100, 25)));
    assert_eq!(f.pixel(1, 1), Some(Rgb8::new(50, 100, 25)));
    assert_eq!(f.pixel(2, 1), Some(Rgb8::new(100, 200, 50)));
    assert_eq!(f.pixel(1, 2), Some(Rgb8::new(100, 200, 50)));
}

#[test]
fn overlapping_scales_compound() {
    let mut f = small();
    f.scale_rect(PixelRect::new(0, 0, 4, 4), 0.8);
    f.scale_rect(PixelRect::new(2, 2, 6, 6), 0.8);
    // 100 -> 80 -> 64
    assert_eq!(f.pixel(3, 3).unwrap().r, 64);
    assert_eq!(f.pixel(0, 0).unwrap().r, 80);
}

#[test]
fn fill_rect_overwrites_and_clips() {
    let mut f = small();
    f.fill_rect(PixelRect::around(7, 5, 2), Rgb8::new(1, 2, 3));
    assert_eq!(f.pixel(7, 5), Some(Rgb8::new(1, 2, 3)));
    assert_eq!(f.pixel(5, 3), Some(Rgb8::new(1, 2, 3)));
    assert_eq!(f.pixel(4, 3), Some(Rgb8::new(100, 200, 50)));
}

#[test]
fn set_pixel_ignores_out_of_bounds() {
    let mut f = small();
    let before = f.clone();
    f.set_pixel(100, 100, Rgb8::new(0, 0, 0));
    assert_eq!(f, before);
    f.set_pixel(0, 0, Rgb8::new(0, 0, 0));
    assert_eq!(f.pixel(0, 0), Some(Rgb8::new(0, 0, 0)));
}
