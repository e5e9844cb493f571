use super::*;
use crate::foundation::core::{Canvas, Rgb8};

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: Fps::new(24, 1).unwrap(),
        audio: None,
    }
}

fn frame(width: u32, height: u32) -> FrameRGB {
    FrameRGB::filled(Canvas { width, height }, Rgb8::new(1, 2, 3))
}

#[test]
fn captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(4, 2)).unwrap();
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.config(), Some(&cfg()));
}

#[test]
fn rejects_out_of_order_and_duplicate_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(4, 2)).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &frame(4, 2)).is_err());
    assert!(sink.push_frame(FrameIndex(2), &frame(4, 2)).is_err());
}

#[test]
fn rejects_frames_before_begin_or_with_wrong_size() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(4, 2)).is_err());
    sink.begin(cfg()).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 4)).is_err());
}

#[test]
fn stores_audio() {
    let wf = Waveform {
        samples: vec![0, 1, -1],
        sample_rate: 8_000,
    };
    let mut sink = InMemorySink::new();
    assert!(sink.push_audio(&wf).is_err());
    sink.begin(cfg()).unwrap();
    sink.push_audio(&wf).unwrap();
    assert_eq!(sink.audio(), Some(&wf));
}
