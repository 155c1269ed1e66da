//! Integration tests for sismo-augment transforms and pipelines.
//!
//! Tests exercise the public API end-to-end: filters on tones with known
//! spectra, noise at a measured signal-to-noise ratio, channel
//! reordering, pipeline composition, and seeded reproducibility.

use std::f32::consts::PI;

use sismo_augment::{
    AdditiveNoise, ChannelFlip, Compose, HighPassFilter, LowPassFilter, PeakNormalize,
    PolarityInvert, RandomLowPassFilter, Taper, Transform,
};
use sismo_core::{AugmentError, Seed, Waveform, linear_to_db, peak, rms};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a sine wave at a given frequency and amplitude.
fn sine(freq_hz: f32, sample_rate: f32, num_samples: usize, amplitude: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f32 / sample_rate).sin())
        .collect()
}

/// Three-channel waveform with a distinct tone per channel.
fn three_channel_wave(num_samples: usize) -> Waveform {
    Waveform::from_channels(&[
        sine(2.0, 100.0, num_samples, 1.0),
        sine(5.0, 100.0, num_samples, 0.8),
        sine(9.0, 100.0, num_samples, 0.6),
    ])
    .unwrap()
}

// ===========================================================================
// 1. Filter behaviour on known tones
// ===========================================================================

#[test]
fn lowpass_attenuates_tone_above_cutoff() {
    let wave = Waveform::new(1, sine(30.0, 100.0, 600, 1.0)).unwrap();
    let input_rms = rms(wave.samples());

    let mut filter = LowPassFilter::seeded(5.0, 1.0, Seed::new(1)).unwrap();
    let out = filter.apply(wave, 100).unwrap();

    let output_rms = rms(out.samples());
    assert!(
        output_rms < 0.05 * input_rms,
        "30 Hz tone should be deep in the stopband of a 5 Hz lowpass, rms {output_rms}"
    );
}

#[test]
fn lowpass_passes_tone_below_cutoff() {
    let wave = Waveform::new(1, sine(2.0, 100.0, 600, 1.0)).unwrap();
    let input_rms = rms(wave.samples());

    let mut filter = LowPassFilter::seeded(10.0, 1.0, Seed::new(2)).unwrap();
    let out = filter.apply(wave, 100).unwrap();

    let output_rms = rms(out.samples());
    assert!(
        output_rms > 0.9 * input_rms,
        "2 Hz tone should pass a 10 Hz lowpass nearly unchanged, rms {output_rms} vs {input_rms}"
    );
}

#[test]
fn highpass_plus_lowpass_reconstructs_input() {
    let data: Vec<f32> = sine(2.0, 100.0, 600, 1.0)
        .iter()
        .zip(&sine(30.0, 100.0, 600, 0.5))
        .map(|(a, b)| a + b)
        .collect();
    let wave = Waveform::new(1, data).unwrap();

    let mut low = LowPassFilter::seeded(8.0, 1.0, Seed::new(3)).unwrap();
    let mut high = HighPassFilter::seeded(8.0, 1.0, Seed::new(4)).unwrap();
    let low_out = low.apply(wave.clone(), 100).unwrap();
    let high_out = high.apply(wave.clone(), 100).unwrap();

    for i in 0..wave.num_samples() {
        let sum = low_out.samples()[i] + high_out.samples()[i];
        assert!(
            (sum - wave.samples()[i]).abs() < 1e-4,
            "complement identity broke at sample {i}"
        );
    }
}

#[test]
fn random_lowpass_attenuates_far_stopband_tone_for_any_draw() {
    // Any cutoff drawn from [2, 4] Hz leaves a 30 Hz tone deep in the
    // stopband, so the assertion holds regardless of the draw.
    let wave = Waveform::new(1, sine(30.0, 100.0, 600, 1.0)).unwrap();
    let input_rms = rms(wave.samples());

    let mut filter = RandomLowPassFilter::seeded(2.0, 4.0, 1.0, Seed::new(5)).unwrap();
    for _ in 0..5 {
        let out = filter.apply(wave.clone(), 100).unwrap();
        assert!(rms(out.samples()) < 0.1 * input_rms);
    }
}

// ===========================================================================
// 2. Noise injection at a measured SNR
// ===========================================================================

#[test]
fn additive_noise_hits_target_snr_per_channel() {
    let wave = three_channel_wave(2000);
    let target_db = 6.0;

    let mut noise = AdditiveNoise::seeded(target_db, 1.0, Seed::new(6)).unwrap();
    let out = noise.apply(wave.clone(), 100).unwrap();

    for channel in 0..3 {
        let injected: Vec<f32> = out
            .channel(channel)
            .iter()
            .zip(wave.channel(channel))
            .map(|(after, before)| after - before)
            .collect();
        let measured_db = linear_to_db(rms(wave.channel(channel)) / rms(&injected));
        assert!(
            (measured_db - target_db).abs() < 0.05,
            "channel {channel}: measured {measured_db:.3} dB, target {target_db} dB"
        );
    }
}

// ===========================================================================
// 3. Channel reordering and envelope shaping
// ===========================================================================

#[test]
fn channel_flip_swaps_horizontals_and_keeps_vertical() {
    let wave = three_channel_wave(200);
    let mut flip = ChannelFlip::seeded("ZNE", 1.0, Seed::new(7)).unwrap();
    let out = flip.apply(wave.clone(), 100).unwrap();

    assert_eq!(out.channel(0), wave.channel(0), "Z must be untouched");
    assert_eq!(out.channel(1), wave.channel(2), "N must hold the old E");
    assert_eq!(out.channel(2), wave.channel(1), "E must hold the old N");
}

#[test]
fn taper_then_normalize_bounds_peak_at_one() {
    let mut pipeline = Compose::new()
        .with_transform(Taper::seeded(Some(0.1), None, 1.0, Seed::new(8)).unwrap())
        .with_transform(PeakNormalize::seeded(1.0, Seed::new(9)).unwrap());

    let out = pipeline.apply(three_channel_wave(600), 100).unwrap();
    let out_peak = peak(out.samples());
    assert!((out_peak - 1.0).abs() < 1e-3, "peak {out_peak} should sit at one");
}

// ===========================================================================
// 4. Pipeline composition
// ===========================================================================

#[test]
fn pipeline_matches_manual_sequential_application() {
    let wave = three_channel_wave(400);

    let mut pipeline = Compose::new()
        .with_transform(Taper::seeded(Some(0.05), None, 1.0, Seed::new(10)).unwrap())
        .with_transform(AdditiveNoise::seeded(12.0, 1.0, Seed::new(11)).unwrap())
        .with_transform(PeakNormalize::seeded(1.0, Seed::new(12)).unwrap());
    let via_pipeline = pipeline.apply(wave.clone(), 100).unwrap();

    let mut taper = Taper::seeded(Some(0.05), None, 1.0, Seed::new(10)).unwrap();
    let mut noise = AdditiveNoise::seeded(12.0, 1.0, Seed::new(11)).unwrap();
    let mut normalize = PeakNormalize::seeded(1.0, Seed::new(12)).unwrap();
    let manual = normalize
        .apply(
            noise.apply(taper.apply(wave, 100).unwrap(), 100).unwrap(),
            100,
        )
        .unwrap();

    assert_eq!(via_pipeline, manual);
}

#[test]
fn nested_pipeline_applies_in_declaration_order() {
    let inner = Compose::new()
        .with_transform(PolarityInvert::seeded(1.0, Seed::new(13)).unwrap());
    let mut outer = Compose::new()
        .with_pipeline(inner)
        .with_transform(PolarityInvert::seeded(1.0, Seed::new(14)).unwrap());

    let wave = three_channel_wave(100);
    let out = outer.apply(wave.clone(), 100).unwrap();
    assert_eq!(out, wave, "two inversions must cancel");
}

#[test]
fn empty_pipeline_is_identity() {
    let wave = three_channel_wave(50);
    let out = Compose::new().apply(wave.clone(), 100).unwrap();
    assert_eq!(out, wave);
}

#[test]
fn pipeline_rejects_empty_waveform() {
    let mut pipeline = Compose::new()
        .with_transform(PolarityInvert::seeded(1.0, Seed::new(15)).unwrap());
    let err = pipeline.apply(Waveform::new(1, vec![]).unwrap(), 100).unwrap_err();
    assert!(matches!(err, AugmentError::InvalidInput { .. }));
}

// ===========================================================================
// 5. Reproducibility and gating
// ===========================================================================

#[test]
fn identical_seeds_reproduce_identical_outputs() {
    let wave = three_channel_wave(300);

    let build = || {
        Compose::new()
            .with_transform(RandomLowPassFilter::seeded(3.0, 20.0, 0.8, Seed::new(21)).unwrap())
            .with_transform(AdditiveNoise::seeded(10.0, 0.8, Seed::new(22)).unwrap())
    };

    let first = build().apply(wave.clone(), 100).unwrap();
    let second = build().apply(wave, 100).unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seeds_diverge() {
    let wave = three_channel_wave(300);

    let mut a = AdditiveNoise::seeded(10.0, 1.0, Seed::new(1)).unwrap();
    let mut b = AdditiveNoise::seeded(10.0, 1.0, Seed::new(2)).unwrap();
    let out_a = a.apply(wave.clone(), 100).unwrap();
    let out_b = b.apply(wave, 100).unwrap();
    assert_ne!(out_a.samples(), out_b.samples());
}

#[test]
fn zero_probability_pipeline_passes_input_through() {
    let wave = three_channel_wave(100);
    let mut pipeline = Compose::new()
        .with_transform(PolarityInvert::seeded(0.0, Seed::new(16)).unwrap())
        .with_transform(AdditiveNoise::seeded(6.0, 0.0, Seed::new(17)).unwrap())
        .with_transform(Taper::seeded(Some(0.3), None, 0.0, Seed::new(18)).unwrap());

    let out = pipeline.apply(wave.clone(), 100).unwrap();
    assert_eq!(out, wave);
}
