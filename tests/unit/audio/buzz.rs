use super::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn sample_count_is_rounded_duration_times_rate() {
    let mut rng = Pcg32::seed_from_u64(1);
    assert_eq!(synthesize_buzz(1.0, 8_000, &mut rng).unwrap().len(), 8_000);
    assert_eq!(synthesize_buzz(0.5, 44_100, &mut rng).unwrap().len(), 22_050);
    // 0.25 s * 10 Hz = 2.5 -> 3
    assert_eq!(synthesize_buzz(0.25, 10, &mut rng).unwrap().len(), 3);
}

#[test]
fn peak_hits_full_scale() {
    let mut rng = Pcg32::seed_from_u64(2);
    let wf = synthesize_buzz(0.25, 22_050, &mut rng).unwrap();
    assert_eq!(wf.peak(), i16::MAX as u16);
    assert!(wf.samples.iter().all(|&s| s >= -i16::MAX));
}

#[test]
fn waveform_duration_matches_request() {
    let mut rng = Pcg32::seed_from_u64(3);
    let wf = synthesize_buzz(2.0, 16_000, &mut rng).unwrap();
    assert_eq!(wf.sample_rate, 16_000);
    assert!((wf.duration_secs() - 2.0).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_configuration_errors() {
    let mut rng = Pcg32::seed_from_u64(4);
    assert!(matches!(
        synthesize_buzz(0.0, 44_100, &mut rng),
        Err(BuzzError::Configuration(_))
    ));
    assert!(matches!(
        synthesize_buzz(-1.0, 44_100, &mut rng),
        Err(BuzzError::Configuration(_))
    ));
    assert!(matches!(
        synthesize_buzz(1.0, 0, &mut rng),
        Err(BuzzError::Configuration(_))
    ));
}

#[test]
fn silent_signal_is_degenerate() {
    let err = quantize_pcm16(&[0.0; 16]).unwrap_err();
    assert!(matches!(err, BuzzError::DegenerateSignal(_)));

    let err = quantize_pcm16(&[0.5, f64::NAN]).unwrap_err();
    assert!(matches!(err, BuzzError::DegenerateSignal(_)));

    let params = BuzzParams {
        fundamental_amp: 0.0,
        overtones: [(1.5, 0.0), (2.0, 0.0)],
        noise_amp: 0.0,
        ..BuzzParams::default()
    };
    let mut rng = Pcg32::seed_from_u64(5);
    assert!(matches!(
        synthesize_buzz_with_params(0.1, 8_000, &params, &mut rng),
        Err(BuzzError::DegenerateSignal(_))
    ));
}

#[test]
fn quantize_truncates_toward_zero() {
    let out = quantize_pcm16(&[1.0, -1.0, 0.5, -0.5, 0.0]).unwrap();
    assert_eq!(out, vec![32767, -32767, 16383, -16383, 0]);
    assert!(quantize_pcm16(&[]).unwrap().is_empty());
}

#[test]
fn noise_free_tone_starts_at_zero_and_stays_bounded() {
    let params = BuzzParams::default();
    assert_eq!(params.tone_at(0.0), 0.0);
    for i in 0..1000 {
        let t = i as f64 / 1000.0;
        assert!(params.tone_at(t).abs() <= 1.0 + 1e-12);
        let g = params.tremolo_at(t);
        assert!((0.7 - 1e-12..=1.3 + 1e-12).contains(&g));
    }
}

#[test]
fn same_seed_same_waveform() {
    let a = synthesize_buzz(0.1, 8_000, &mut Pcg32::seed_from_u64(6)).unwrap();
    let b = synthesize_buzz(0.1, 8_000, &mut Pcg32::seed_from_u64(6)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn to_f32_is_unit_scaled() {
    let wf = Waveform {
        samples: vec![i16::MAX, 0, -i16::MAX],
        sample_rate: 8_000,
    };
    assert_eq!(wf.to_f32(), vec![1.0, 0.0, -1.0]);
}

#[test]
fn slice_clamps_to_track() {
    let wf = Waveform {
        samples: vec![1, 2, 3, 4],
        sample_rate: 8_000,
    };
    assert_eq!(wf.slice(1, 3).samples, vec![2, 3]);
    assert_eq!(wf.slice(2, 99).samples, vec![3, 4]);
    assert!(wf.slice(3, 1).is_empty());
    assert!(wf.slice(10, 20).is_empty());
    assert_eq!(wf.slice(0, 4).sample_rate, 8_000);
}
