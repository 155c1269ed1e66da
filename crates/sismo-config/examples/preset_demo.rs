//! Preset demo: TOML pipeline policies, building, and seeded replay.
//!
//! Run with: cargo run -p sismo-config --example preset_demo

use sismo_config::{PipelinePreset, TransformSpec};
use sismo_core::{Waveform, peak, rms};

fn main() {
    // --- Parse a policy from TOML ---
    println!("=== Parsed Policy ===\n");

    let toml = r#"
name = "teleseism train"
description = "Training-time augmentation for teleseismic picks"
seed = 42

[[transforms]]
type = "taper"
max_percentage = 0.05

[[transforms]]
type = "random_low_pass"
cutoff_range = [2.0, 20.0]
p = 0.5

[[transforms]]
type = "additive_noise"
snr_db = 10.0
p = 0.5

[[transforms]]
type = "peak_normalize"
"#;

    let preset = PipelinePreset::from_toml(toml).unwrap();
    println!("Preset: {}", preset.name);
    println!(
        "Description: {}",
        preset.description.as_deref().unwrap_or("none")
    );
    println!("Master seed: {:?}", preset.seed);
    println!("Transforms ({}):", preset.len());
    for (i, spec) in preset.iter().enumerate() {
        println!("  {}: {} (p = {})", i, spec.kind(), spec.probability());
    }

    // --- Build and apply ---
    println!("\n=== Build and Apply ===\n");

    let wave = Waveform::from_channels(&[
        synthetic_tone(2.0),
        synthetic_tone(5.0),
        synthetic_tone(9.0),
    ])
    .unwrap();
    println!(
        "Input:  {} channels x {} samples, peak {:.4}, rms {:.4}",
        wave.channels(),
        wave.num_samples(),
        peak(wave.samples()),
        rms(wave.samples())
    );

    let mut pipeline = preset.build().unwrap();
    let out = pipeline.apply(wave.clone(), 100).unwrap();
    println!(
        "Output: {} channels x {} samples, peak {:.4}, rms {:.4}",
        out.channels(),
        out.num_samples(),
        peak(out.samples()),
        rms(out.samples())
    );

    // --- Seeded replay ---
    println!("\n=== Seeded Replay ===\n");

    let replay = preset.build().unwrap().apply(wave, 100).unwrap();
    println!("Rebuilt pipeline replays identically: {}", replay == out);

    // --- Programmatic preset and serialization ---
    println!("\n=== Serialized TOML ===\n");

    let programmatic = PipelinePreset::new("quick denoise")
        .with_seed(7)
        .with_transform(TransformSpec::HighPass {
            cutoff_hz: 0.5,
            p: 1.0,
        })
        .with_transform(TransformSpec::PeakNormalize { p: 1.0 });

    println!("{}", programmatic.to_toml().unwrap());
    println!("Preset demo complete.");
}

/// 4 s tone at 100 Hz with a decaying envelope.
fn synthetic_tone(freq_hz: f32) -> Vec<f32> {
    (0..400)
        .map(|i| {
            let t = i as f32 / 100.0;
            (-0.3 * t).exp() * (2.0 * std::f32::consts::PI * freq_hz * t).sin()
        })
        .collect()
}
