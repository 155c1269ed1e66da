//! Multi-channel waveform container.
//!
//! A [`Waveform`] holds `C` channels of `N` samples each in one flat
//! row-major buffer: all of channel 0, then all of channel 1, and so on.
//! Seismic recordings are typically three-component (vertical Z plus the
//! N and E horizontals), but any non-zero channel count is accepted.

use crate::error::{AugmentError, Result};

/// A multi-channel time series of `f32` samples.
///
/// Stored row-major in a single `Vec<f32>` so each channel is a contiguous
/// slice. Augmentations treat waveforms as values: they read the input and
/// return a freshly allocated output of identical shape, never mutating the
/// caller's buffer.
///
/// # Example
///
/// ```
/// use sismo_core::Waveform;
///
/// let wave = Waveform::from_channels(&[
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
/// ])?;
/// assert_eq!(wave.channels(), 2);
/// assert_eq!(wave.num_samples(), 3);
/// assert_eq!(wave.channel(1), &[4.0, 5.0, 6.0]);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    channels: usize,
    data: Vec<f32>,
}

impl Waveform {
    /// Creates a waveform from a flat row-major buffer.
    ///
    /// `data.len()` must be a multiple of `channels`; an empty buffer is a
    /// valid (zero-sample) waveform.
    pub fn new(channels: usize, data: Vec<f32>) -> Result<Self> {
        if channels == 0 {
            return Err(AugmentError::invalid_input("channel count must be non-zero"));
        }
        if data.len() % channels != 0 {
            return Err(AugmentError::invalid_input(format!(
                "flat buffer of {} samples does not divide into {} channels",
                data.len(),
                channels
            )));
        }
        Ok(Self { channels, data })
    }

    /// Creates a waveform from per-channel sample rows.
    ///
    /// At least one row is required and all rows must have the same length.
    pub fn from_channels(rows: &[Vec<f32>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(AugmentError::invalid_input("channel count must be non-zero"));
        };
        let num_samples = first.len();
        let mut data = Vec::with_capacity(rows.len() * num_samples);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != num_samples {
                return Err(AugmentError::invalid_input(format!(
                    "channel {index} has {} samples, expected {num_samples}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            channels: rows.len(),
            data,
        })
    }

    /// Creates an all-zero waveform of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero.
    pub fn zeros(channels: usize, num_samples: usize) -> Self {
        assert!(channels > 0, "channel count must be non-zero");
        Self {
            channels,
            data: vec![0.0; channels * num_samples],
        }
    }

    /// Returns the number of channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the number of samples per channel.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.data.len() / self.channels
    }

    /// Returns true if the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the flat row-major view of every sample.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Returns the mutable flat row-major view of every sample.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the waveform, returning its flat buffer.
    pub fn into_samples(self) -> Vec<f32> {
        self.data
    }

    /// Returns one channel's samples as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= channels()`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[f32] {
        let n = self.num_samples();
        &self.data[channel * n..(channel + 1) * n]
    }

    /// Returns one channel's samples as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= channels()`.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        let n = self.num_samples();
        &mut self.data[channel * n..(channel + 1) * n]
    }

    /// Iterates over per-channel slices in channel order.
    pub fn iter_channels(&self) -> impl Iterator<Item = &[f32]> {
        // chunk size must be non-zero; an empty buffer yields no chunks either way
        self.data.chunks_exact(self.num_samples().max(1))
    }

    /// Applies `f` to every sample, returning a new waveform of the same shape.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Waveform {
        Waveform {
            channels: self.channels,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}
