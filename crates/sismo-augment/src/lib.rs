//! Sismo Augment - Stochastic waveform augmentation.
//!
//! This crate provides composable augmentation transforms for
//! multi-channel seismic waveforms, built on sismo-core:
//!
//! - [`ChannelFlip`] - Swaps the horizontal components of a ZNE trace
//! - [`AdditiveNoise`] - Gaussian noise at a target signal-to-noise ratio
//! - [`LowPassFilter`] / [`HighPassFilter`] - Windowed-sinc filters at a fixed cutoff
//! - [`RandomLowPassFilter`] / [`RandomHighPassFilter`] - Fresh cutoff drawn per application
//! - [`Taper`] - Hann edge fades
//! - [`PolarityInvert`] - Sign flip
//! - [`PeakNormalize`] - Scales the global peak to unity
//! - [`Compose`] - Ordered pipelines of the above
//!
//! Every transform carries an application probability `p`: each call
//! draws once and either applies or hands the input back untouched.
//! Seeded constructors make whole pipelines replayable.
//!
//! ## Example
//!
//! ```rust
//! use sismo_augment::{AdditiveNoise, Compose, PeakNormalize, Taper};
//! use sismo_core::{Seed, Waveform};
//!
//! let mut pipeline = Compose::new()
//!     .with_transform(Taper::seeded(Some(0.05), None, 1.0, Seed::new(1))?)
//!     .with_transform(AdditiveNoise::seeded(20.0, 0.5, Seed::new(2))?)
//!     .with_transform(PeakNormalize::seeded(1.0, Seed::new(3))?);
//!
//! let wave = Waveform::new(3, (0..600).map(|i| (i as f32 * 0.07).sin()).collect())?;
//! let out = pipeline.apply(wave, 100)?;
//! assert!(sismo_core::peak(out.samples()) <= 1.0 + 1e-4);
//! # Ok::<(), sismo_core::AugmentError>(())
//! ```

pub mod channel_flip;
pub mod compose;
pub mod filter;
pub mod noise;
pub mod normalize;
pub mod polarity;
pub mod taper;
pub mod transform;

// Re-export main types at crate root
pub use channel_flip::ChannelFlip;
pub use compose::{Compose, Stage};
pub use filter::{HighPassFilter, LowPassFilter, RandomHighPassFilter, RandomLowPassFilter};
pub use noise::AdditiveNoise;
pub use normalize::{PEAK_EPSILON, PeakNormalize};
pub use polarity::PolarityInvert;
pub use taper::{DEFAULT_MAX_LENGTH_SECS, DEFAULT_MAX_PERCENTAGE, Taper};
pub use transform::{Gate, Transform};
