//! Peak normalization
//!
//! Rescales the waveform so its largest absolute sample sits at 1.0,
//! removing absolute-amplitude information that varies with magnitude and
//! epicentral distance.

use sismo_core::{Result, Seed, Waveform, peak};

use crate::transform::{Gate, Transform};

/// Epsilon added to the global peak so an all-zero waveform divides safely.
pub const PEAK_EPSILON: f32 = 1e-8;

/// Peak normalization: divides every channel by the global peak amplitude.
///
/// The peak is taken over all channels and samples together, so relative
/// channel amplitudes are preserved; only the overall scale changes.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{PeakNormalize, Transform};
/// use sismo_core::{Seed, Waveform};
///
/// let mut normalize = PeakNormalize::seeded(1.0, Seed::new(4))?;
/// let wave = Waveform::new(1, vec![0.5, -2.0, 1.0])?;
/// let out = normalize.apply(wave, 100)?;
/// assert!((out.samples()[1] + 1.0).abs() < 1e-6);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PeakNormalize {
    gate: Gate,
}

impl PeakNormalize {
    /// Creates a peak normalization applied with probability `p`.
    pub fn new(p: f32) -> Result<Self> {
        Ok(Self {
            gate: Gate::new("peak_normalize", p)?,
        })
    }

    /// Creates a peak normalization with a fixed seed.
    pub fn seeded(p: f32, seed: Seed) -> Result<Self> {
        Ok(Self {
            gate: Gate::seeded("peak_normalize", p, seed)?,
        })
    }
}

impl Transform for PeakNormalize {
    fn name(&self) -> &'static str {
        "peak_normalize"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, _sample_rate: u32) -> Result<Waveform> {
        let denom = peak(waveform.samples()) + PEAK_EPSILON;
        Ok(waveform.map(|x| x / denom))
    }
}
