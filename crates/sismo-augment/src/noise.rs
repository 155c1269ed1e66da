//! Additive Gaussian noise at a target signal-to-noise ratio
//!
//! Draws white Gaussian noise per channel and rescales it so the ratio of
//! signal RMS to noise RMS hits the configured SNR, simulating recordings
//! from noisier sites or smaller events.

use sismo_core::{AugmentError, Result, Seed, Waveform, db_to_linear, fill_gaussian, rms};

use crate::transform::{Gate, Transform};

/// Additive Gaussian noise scaled to a target SNR in dB.
///
/// Each channel gets an independent noise draw scaled against that
/// channel's own RMS, so quiet horizontals are not drowned out by a hot
/// vertical. A silent channel (RMS exactly zero) receives no noise at
/// all; the desired noise amplitude for it is zero and dividing by its
/// noise RMS would poison the output with non-finite values.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{AdditiveNoise, Transform};
/// use sismo_core::{Seed, Waveform, rms};
///
/// // SNR 0 dB: the injected noise is exactly as loud as the signal
/// let mut noise = AdditiveNoise::seeded(0.0, 1.0, Seed::new(4))?;
/// let wave = Waveform::new(1, vec![0.5; 4096])?;
/// let out = noise.apply(wave.clone(), 100)?;
///
/// let injected: Vec<f32> = out
///     .samples()
///     .iter()
///     .zip(wave.samples())
///     .map(|(a, b)| a - b)
///     .collect();
/// assert!((rms(&injected) - 0.5).abs() < 1e-3);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveNoise {
    snr_db: f32,
    gate: Gate,
}

impl AdditiveNoise {
    /// Creates an additive noise transform targeting `snr_db`, applied
    /// with probability `p`.
    pub fn new(snr_db: f32, p: f32) -> Result<Self> {
        Self::seeded(snr_db, p, Seed::from_entropy())
    }

    /// Creates an additive noise transform with a fixed seed.
    pub fn seeded(snr_db: f32, p: f32, seed: Seed) -> Result<Self> {
        if !snr_db.is_finite() {
            return Err(AugmentError::invalid_config(
                "additive_noise",
                format!("snr_db must be finite, got {snr_db}"),
            ));
        }
        Ok(Self {
            snr_db,
            gate: Gate::seeded("additive_noise", p, seed)?,
        })
    }

    /// Returns the target signal-to-noise ratio in dB.
    pub fn snr_db(&self) -> f32 {
        self.snr_db
    }
}

impl Transform for AdditiveNoise {
    fn name(&self) -> &'static str {
        "additive_noise"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, _sample_rate: u32) -> Result<Waveform> {
        let snr_linear = db_to_linear(self.snr_db);
        let mut out = waveform.clone();
        let mut noise = vec![0.0f32; waveform.num_samples()];

        for c in 0..waveform.channels() {
            fill_gaussian(self.gate.rng(), &mut noise);
            let signal_rms = rms(waveform.channel(c));
            let noise_rms = rms(&noise);

            // silent channel or degenerate draw: nothing to add
            if signal_rms == 0.0 || noise_rms == 0.0 {
                continue;
            }

            let scale = (signal_rms / snr_linear) / noise_rms;
            for (sample, &n) in out.channel_mut(c).iter_mut().zip(noise.iter()) {
                *sample += scale * n;
            }
        }

        Ok(out)
    }
}
