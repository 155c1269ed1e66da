//! Polarity inversion
//!
//! Flips the sign of every sample. First-motion polarity depends on the
//! source mechanism and station placement, so models should not key on it.

use sismo_core::{Result, Seed, Waveform};

use crate::transform::{Gate, Transform};

/// Polarity inversion: multiplies the waveform by -1.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{PolarityInvert, Transform};
/// use sismo_core::{Seed, Waveform};
///
/// let mut invert = PolarityInvert::seeded(1.0, Seed::new(4))?;
/// let wave = Waveform::new(1, vec![1.0, -2.0])?;
/// let out = invert.apply(wave, 100)?;
/// assert_eq!(out.samples(), &[-1.0, 2.0]);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolarityInvert {
    gate: Gate,
}

impl PolarityInvert {
    /// Creates a polarity inversion applied with probability `p`.
    pub fn new(p: f32) -> Result<Self> {
        Ok(Self {
            gate: Gate::new("polarity_invert", p)?,
        })
    }

    /// Creates a polarity inversion with a fixed seed.
    pub fn seeded(p: f32, seed: Seed) -> Result<Self> {
        Ok(Self {
            gate: Gate::seeded("polarity_invert", p, seed)?,
        })
    }
}

impl Transform for PolarityInvert {
    fn name(&self) -> &'static str {
        "polarity_invert"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, _sample_rate: u32) -> Result<Waveform> {
        Ok(waveform.map(|x| -x))
    }
}
