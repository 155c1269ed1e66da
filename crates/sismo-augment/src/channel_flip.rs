//! Channel order flip for three-component recordings
//!
//! Swaps the two horizontal components of a Z, N, E recording, producing
//! the Z, E, N ordering. Horizontal orientation is a station convention,
//! not a property of the wavefield, so models should be robust to it.

use sismo_core::{AugmentError, Result, Seed, Waveform};

use crate::transform::{Gate, Transform};

/// Channel flip: reorders a `ZNE` waveform to `ZEN`.
///
/// Only the `ZNE` input order is supported; there is no permutation table
/// for any other convention, so other orders are rejected at construction.
/// At apply time the waveform must have exactly 3 channels.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{ChannelFlip, Transform};
/// use sismo_core::{Seed, Waveform};
///
/// let mut flip = ChannelFlip::seeded("ZNE", 1.0, Seed::new(4))?;
/// let wave = Waveform::from_channels(&[
///     vec![1.0, 1.0],
///     vec![2.0, 2.0],
///     vec![3.0, 3.0],
/// ])?;
/// let out = flip.apply(wave, 100)?;
/// assert_eq!(out.channel(1), &[3.0, 3.0]);
/// assert_eq!(out.channel(2), &[2.0, 2.0]);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChannelFlip {
    gate: Gate,
}

impl ChannelFlip {
    /// Creates a channel flip for recordings in the given input order,
    /// applied with probability `p`.
    pub fn new(input_order: &str, p: f32) -> Result<Self> {
        Self::seeded(input_order, p, Seed::from_entropy())
    }

    /// Creates a channel flip with a fixed seed.
    pub fn seeded(input_order: &str, p: f32, seed: Seed) -> Result<Self> {
        if input_order != "ZNE" {
            return Err(AugmentError::invalid_config(
                "channel_flip",
                format!("unsupported channel order '{input_order}', only 'ZNE' is supported"),
            ));
        }
        Ok(Self {
            gate: Gate::seeded("channel_flip", p, seed)?,
        })
    }
}

impl Transform for ChannelFlip {
    fn name(&self) -> &'static str {
        "channel_flip"
    }

    fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    fn apply_transform(&mut self, waveform: &Waveform, _sample_rate: u32) -> Result<Waveform> {
        if waveform.channels() != 3 {
            return Err(AugmentError::invalid_input(format!(
                "channel_flip requires a 3-component waveform, got {} channels",
                waveform.channels()
            )));
        }

        // Z stays, the horizontals swap: [Z, N, E] -> [Z, E, N]
        let mut out = Waveform::zeros(3, waveform.num_samples());
        out.channel_mut(0).copy_from_slice(waveform.channel(0));
        out.channel_mut(1).copy_from_slice(waveform.channel(2));
        out.channel_mut(2).copy_from_slice(waveform.channel(1));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_horizontals() {
        let mut flip = ChannelFlip::seeded("ZNE", 1.0, Seed::new(1)).unwrap();
        let wave = Waveform::from_channels(&[
            vec![1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0],
            vec![3.0, 3.0, 3.0],
        ])
        .unwrap();
        let out = flip.apply(wave, 100).unwrap();
        assert_eq!(out.channel(0), &[1.0, 1.0, 1.0]);
        assert_eq!(out.channel(1), &[3.0, 3.0, 3.0]);
        assert_eq!(out.channel(2), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_shape_preserved() {
        let mut flip = ChannelFlip::seeded("ZNE", 1.0, Seed::new(2)).unwrap();
        let wave = Waveform::zeros(3, 17);
        let out = flip.apply(wave, 100).unwrap();
        assert_eq!(out.channels(), 3);
        assert_eq!(out.num_samples(), 17);
    }

    #[test]
    fn test_rejects_unsupported_order_at_construction() {
        let err = ChannelFlip::new("NEZ", 1.0).unwrap_err();
        assert!(matches!(err, AugmentError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_wrong_channel_count_at_apply() {
        let mut flip = ChannelFlip::seeded("ZNE", 1.0, Seed::new(3)).unwrap();
        let wave = Waveform::zeros(4, 8);
        let err = flip.apply(wave, 100).unwrap_err();
        assert!(matches!(err, AugmentError::InvalidInput { .. }));
    }

    #[test]
    fn test_gated_out_skips_channel_count_check() {
        // a gated-out transform returns any valid waveform untouched,
        // even one it could not process
        let mut flip = ChannelFlip::seeded("ZNE", 0.0, Seed::new(4)).unwrap();
        let wave = Waveform::zeros(5, 8);
        let out = flip.apply(wave, 100).unwrap();
        assert_eq!(out.channels(), 5);
    }
}
