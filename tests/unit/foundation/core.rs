use super::*;

#[test]
fn frame_range_len_is_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert_eq!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .len_frames(),
        0
    );
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(24, 0).is_err());
    assert!(Fps::new(24, 1).is_ok());
}

#[test]
fn frame_to_sample_uses_rational_fps() {
    let fps = Fps::new(24, 1).unwrap();
    assert_eq!(fps.frame_to_sample(0, 44_100), 0);
    assert_eq!(fps.frame_to_sample(240, 44_100), 441_000);
    assert_eq!(fps.frame_to_sample(1, 44_100), 1838); // 1837.5 rounds up

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.frame_to_sample(30_000, 48_000), 48_048_000);
}

#[test]
fn fps_floor_matches_clip_frame_count() {
    let fps = Fps::new(24, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(10.0), 240);
    assert_eq!(fps.secs_to_frames_floor(0.99), 23);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
}

#[test]
fn canvas_pixel_count() {
    assert_eq!(Canvas::default().pixel_count(), 640 * 480);
}
