//! Fixed and randomized low-pass / high-pass filter transforms
//!
//! All four transforms ride on the windowed-sinc lowpass from
//! [`sismo_core::lowpass`]. The high-pass variants return the spectral
//! complement `waveform - lowpass(waveform)` instead of designing an
//! independent high-pass kernel; with a zero-phase unity-DC lowpass the
//! two halves sum back to the input exactly.
//!
//! Cutoffs are physical frequencies in Hz. They are normalized against
//! the sample rate at apply time, which is the first moment the Nyquist
//! constraint `cutoff / sample_rate < 0.5` can be checked.

use rand::Rng;
use sismo_core::{AugmentError, Result, Seed, Waveform, lowpass};

use crate::transform::{Gate, Transform};

/// Validates a construction-time cutoff frequency.
fn validate_cutoff(transform: &'static str, cutoff_hz: f32) -> Result<()> {
    if cutoff_hz <= 0.0 || !cutoff_hz.is_finite() {
        return Err(AugmentError::invalid_config(
            transform,
            format!("cutoff frequency must be positive and finite, got {cutoff_hz} Hz"),
        ));
    }
    Ok(())
}

/// Validates a construction-time cutoff range.
fn validate_cutoff_range(transform: &'static str, low_hz: f32, high_hz: f32) -> Result<()> {
    validate_cutoff(transform, low_hz)?;
    if high_hz < low_hz || !high_hz.is_finite() {
        return Err(AugmentError::invalid_config(
            transform,
            format!("cutoff range [{low_hz}, {high_hz}] Hz is not ordered"),
        ));
    }
    Ok(())
}

/// Normalizes a cutoff against the sample rate, enforcing Nyquist.
fn normalized_cutoff(transform: &'static str, cutoff_hz: f32, sample_rate: u32) -> Result<f32> {
    let normalized = cutoff_hz / sample_rate as f32;
    if normalized >= 0.5 {
        return Err(AugmentError::invalid_parameter(
            transform,
            "cutoff_hz",
            format!(
                "{cutoff_hz} Hz is at or above Nyquist ({} Hz) for sample rate {sample_rate}",
                sample_rate as f32 / 2.0
            ),
        ));
    }
    Ok(normalized)
}

/// Subtracts the lowpassed waveform from the original.
fn spectral_complement(original: &Waveform, lowpassed: &Waveform) -> Waveform {
    let mut out = original.clone();
    for (sample, &low) in out.samples_mut().iter_mut().zip(lowpassed.samples()) {
        *sample -= low;
    }
    out
}

/// Low-pass filter with a fixed cutoff frequency.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{LowPassFilter, Transform};
/// use sismo_core::{Seed, Waveform};
///
/// let mut filter = LowPassFilter::seeded(10.0, 1.0, Seed::new(4))?;
/// let wave = Waveform::new(1, vec![0.5; 512])?;
/// let out = filter.apply(wave, 100)?;
/// assert_eq!(out.num_samples(), 512);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    cutoff_hz: f32,
    gate: Gate,
}

impl LowPassFilter {
    /// Creates a low-pass filter at `cutoff_hz`, applied with
    /// probability `p`.
    pub fn new(cutoff_hz: f32, p: f32) -> Result<Self> {
        Self::seeded(cutoff_hz, p, Seed::from_entropy())
    }

    /// Creates a low-pass filter with a fixed seed.
    pub fn seeded(cutoff_hz: f32, p: f32, seed: Seed) -> Result<Self> {
        validate_cutoff("low_pass", cutoff_hz)?;
        Ok(Self {
            cutoff_hz,
            gate: Gate::seeded("low_pass", p, seed)?,
        })
    }

    /// Returns the cutoff frequency in Hz.
    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }
}

impl Transform for LowPassFilter {
    fn name(&self) -> &'static str {
        "low_pass"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform> {
        let normalized = normalized_cutoff("low_pass", self.cutoff_hz, sample_rate)?;
        Ok(lowpass(waveform, normalized))
    }
}

/// High-pass filter with a fixed cutoff frequency.
///
/// Computed as the spectral complement of the low-pass response at the
/// same cutoff, not as an independently designed kernel.
#[derive(Debug, Clone)]
pub struct HighPassFilter {
    cutoff_hz: f32,
    gate: Gate,
}

impl HighPassFilter {
    /// Creates a high-pass filter at `cutoff_hz`, applied with
    /// probability `p`.
    pub fn new(cutoff_hz: f32, p: f32) -> Result<Self> {
        Self::seeded(cutoff_hz, p, Seed::from_entropy())
    }

    /// Creates a high-pass filter with a fixed seed.
    pub fn seeded(cutoff_hz: f32, p: f32, seed: Seed) -> Result<Self> {
        validate_cutoff("high_pass", cutoff_hz)?;
        Ok(Self {
            cutoff_hz,
            gate: Gate::seeded("high_pass", p, seed)?,
        })
    }

    /// Returns the cutoff frequency in Hz.
    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }
}

impl Transform for HighPassFilter {
    fn name(&self) -> &'static str {
        "high_pass"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform> {
        let normalized = normalized_cutoff("high_pass", self.cutoff_hz, sample_rate)?;
        let lowpassed = lowpass(waveform, normalized);
        Ok(spectral_complement(waveform, &lowpassed))
    }
}

/// Low-pass filter that draws a fresh cutoff per application.
///
/// Each application samples `cutoff_hz ~ Uniform[low_hz, high_hz)` from
/// the transform's own random source, so repeated applications shape the
/// spectrum differently every time.
#[derive(Debug, Clone)]
pub struct RandomLowPassFilter {
    low_hz: f32,
    high_hz: f32,
    gate: Gate,
}

impl RandomLowPassFilter {
    /// Creates a randomized low-pass filter drawing cutoffs from
    /// `[low_hz, high_hz)`, applied with probability `p`.
    pub fn new(low_hz: f32, high_hz: f32, p: f32) -> Result<Self> {
        Self::seeded(low_hz, high_hz, p, Seed::from_entropy())
    }

    /// Creates a randomized low-pass filter with a fixed seed.
    pub fn seeded(low_hz: f32, high_hz: f32, p: f32, seed: Seed) -> Result<Self> {
        validate_cutoff_range("random_low_pass", low_hz, high_hz)?;
        Ok(Self {
            low_hz,
            high_hz,
            gate: Gate::seeded("random_low_pass", p, seed)?,
        })
    }

    /// Returns the cutoff range in Hz.
    pub fn cutoff_range(&self) -> (f32, f32) {
        (self.low_hz, self.high_hz)
    }

    fn draw_cutoff(&mut self) -> f32 {
        if self.low_hz == self.high_hz {
            self.low_hz
        } else {
            self.gate.rng().gen_range(self.low_hz..self.high_hz)
        }
    }
}

impl Transform for RandomLowPassFilter {
    fn name(&self) -> &'static str {
        "random_low_pass"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform> {
        let cutoff_hz = self.draw_cutoff();
        #[cfg(feature = "tracing")]
        tracing::trace!("random_low_pass: drew cutoff {cutoff_hz:.2} Hz");
        let normalized = normalized_cutoff("random_low_pass", cutoff_hz, sample_rate)?;
        Ok(lowpass(waveform, normalized))
    }
}

/// High-pass filter that draws a fresh cutoff per application.
///
/// The spectral complement of [`RandomLowPassFilter`] at the drawn cutoff.
#[derive(Debug, Clone)]
pub struct RandomHighPassFilter {
    low_hz: f32,
    high_hz: f32,
    gate: Gate,
}

impl RandomHighPassFilter {
    /// Creates a randomized high-pass filter drawing cutoffs from
    /// `[low_hz, high_hz)`, applied with probability `p`.
    pub fn new(low_hz: f32, high_hz: f32, p: f32) -> Result<Self> {
        Self::seeded(low_hz, high_hz, p, Seed::from_entropy())
    }

    /// Creates a randomized high-pass filter with a fixed seed.
    pub fn seeded(low_hz: f32, high_hz: f32, p: f32, seed: Seed) -> Result<Self> {
        validate_cutoff_range("random_high_pass", low_hz, high_hz)?;
        Ok(Self {
            low_hz,
            high_hz,
            gate: Gate::seeded("random_high_pass", p, seed)?,
        })
    }

    /// Returns the cutoff range in Hz.
    pub fn cutoff_range(&self) -> (f32, f32) {
        (self.low_hz, self.high_hz)
    }

    fn draw_cutoff(&mut self) -> f32 {
        if self.low_hz == self.high_hz {
            self.low_hz
        } else {
            self.gate.rng().gen_range(self.low_hz..self.high_hz)
        }
    }
}

impl Transform for RandomHighPassFilter {
    fn name(&self) -> &'static str {
        "random_high_pass"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform> {
        let cutoff_hz = self.draw_cutoff();
        #[cfg(feature = "tracing")]
        tracing::trace!("random_high_pass: drew cutoff {cutoff_hz:.2} Hz");
        let normalized = normalized_cutoff("random_high_pass", cutoff_hz, sample_rate)?;
        let lowpassed = lowpass(waveform, normalized);
        Ok(spectral_complement(waveform, &lowpassed))
    }
}
