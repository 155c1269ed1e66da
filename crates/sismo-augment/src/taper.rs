//! Hann taper transform
//!
//! Fades the edges of every channel with the rising and falling halves of
//! a Hann window, leaving the middle untouched. Tapering suppresses the
//! edge discontinuities that otherwise smear energy across the spectrum
//! when a windowed trace is filtered or transformed downstream.

use sismo_core::{AugmentError, Result, Seed, Waveform, hann};

use crate::transform::{Gate, Transform};

/// Default cap on the tapered fraction of the trace.
pub const DEFAULT_MAX_PERCENTAGE: f32 = 0.5;

/// Default cap on the taper length in seconds.
pub const DEFAULT_MAX_LENGTH_SECS: f32 = 100.0;

/// Edge taper using half Hann windows.
///
/// The taper length per edge is the tightest of three caps: half the
/// trace, `max_percentage` of the trace, and `max_length_secs` worth of
/// samples. When the two ramps meet in the middle the whole trace is
/// shaped by one symmetric Hann window.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{Taper, Transform};
/// use sismo_core::{Seed, Waveform};
///
/// let mut taper = Taper::seeded(Some(0.05), None, 1.0, Seed::new(11))?;
/// let wave = Waveform::new(1, vec![1.0; 200])?;
/// let out = taper.apply(wave, 100)?;
/// // 5% of 200 samples tapered per edge, the middle untouched
/// assert_eq!(out.samples()[0], 0.0);
/// assert_eq!(out.samples()[100], 1.0);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Taper {
    max_percentage: Option<f32>,
    max_length_secs: Option<f32>,
    gate: Gate,
}

impl Taper {
    /// Creates a taper with the given caps, applied with probability `p`.
    ///
    /// `None` leaves the corresponding cap out; with both `None` the
    /// ramps always meet in the middle.
    pub fn new(max_percentage: Option<f32>, max_length_secs: Option<f32>, p: f32) -> Result<Self> {
        Self::seeded(max_percentage, max_length_secs, p, Seed::from_entropy())
    }

    /// Creates a taper with a fixed seed.
    pub fn seeded(
        max_percentage: Option<f32>,
        max_length_secs: Option<f32>,
        p: f32,
        seed: Seed,
    ) -> Result<Self> {
        if let Some(pct) = max_percentage
            && !(0.0..=1.0).contains(&pct)
        {
            return Err(AugmentError::invalid_config(
                "taper",
                format!("max_percentage must lie in [0, 1], got {pct}"),
            ));
        }
        if let Some(secs) = max_length_secs
            && (secs < 0.0 || !secs.is_finite())
        {
            return Err(AugmentError::invalid_config(
                "taper",
                format!("max_length_secs must be non-negative and finite, got {secs}"),
            ));
        }
        Ok(Self {
            max_percentage,
            max_length_secs,
            gate: Gate::seeded("taper", p, seed)?,
        })
    }

    /// Creates a taper with the stock caps of 50% and 100 seconds.
    pub fn with_defaults(p: f32) -> Result<Self> {
        Self::new(Some(DEFAULT_MAX_PERCENTAGE), Some(DEFAULT_MAX_LENGTH_SECS), p)
    }

    /// Taper length per edge, in samples, for a trace of `num_samples`.
    fn half_width(&self, num_samples: usize, sample_rate: u32) -> usize {
        let mut half = num_samples / 2;
        if let Some(pct) = self.max_percentage {
            half = half.min((pct * num_samples as f32) as usize);
        }
        if let Some(secs) = self.max_length_secs {
            half = half.min((secs * sample_rate as f32) as usize);
        }
        half
    }
}

impl Transform for Taper {
    fn name(&self) -> &'static str {
        "taper"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform> {
        let n = waveform.num_samples();
        let half = self.half_width(n, sample_rate);
        if half == 0 {
            return Ok(waveform.clone());
        }

        // When the ramps meet exactly, the even-length window has no
        // flat centre sample; otherwise the odd-length window's peak
        // belongs to the untouched middle.
        let window = if 2 * half == n {
            hann(2 * half)
        } else {
            hann(2 * half + 1)
        };

        let mut curve = Vec::with_capacity(n);
        curve.extend_from_slice(&window[..half]);
        curve.resize(n - half, 1.0);
        curve.extend_from_slice(&window[window.len() - half..]);

        let mut out = waveform.clone();
        for channel in 0..out.channels() {
            for (sample, &weight) in out.channel_mut(channel).iter_mut().zip(&curve) {
                *sample *= weight;
            }
        }
        Ok(out)
    }
}
