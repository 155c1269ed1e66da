//! Sismo Core - waveform types and DSP primitives for seismic augmentation
//!
//! This crate provides the foundations the augmentation pipeline is built
//! on: the multi-channel waveform container, the shared error taxonomy,
//! seedable randomness, and the small set of DSP routines (windowing,
//! lowpass filtering, level math) the transforms need.
//!
//! # Core Abstractions
//!
//! ## Waveform
//!
//! - [`Waveform`] - `C x N` multi-channel time series, row-major `f32`
//!
//! ## Errors
//!
//! - [`AugmentError`] - configuration / input / parameter error taxonomy
//! - [`Result`] - crate-wide result alias
//!
//! ## Randomness
//!
//! - [`Seed`] - reproducible ChaCha8 seeding with key derivation
//! - [`gaussian_pair`] / [`fill_gaussian`] - Box-Muller standard normals
//!
//! ## DSP
//!
//! - [`hann`] - symmetric Hann window
//! - [`lowpass`] / [`lowpass_kernel`] - zero-phase windowed-sinc lowpass
//! - [`rms`], [`peak`], [`db_to_linear`], [`linear_to_db`] - level math
//!
//! # Example
//!
//! ```rust
//! use sismo_core::{Waveform, lowpass, rms};
//!
//! let wave = Waveform::from_channels(&[vec![1.0; 64], vec![0.5; 64]])?;
//! let smoothed = lowpass(&wave, 0.1);
//! assert_eq!(smoothed.channels(), 2);
//! assert!((rms(smoothed.channel(0)) - 1.0).abs() < 1e-3);
//! # Ok::<(), sismo_core::AugmentError>(())
//! ```

pub mod error;
pub mod lowpass;
pub mod math;
pub mod rng;
pub mod waveform;
pub mod window;

// Re-export main types at crate root
pub use error::{AugmentError, Result};
pub use lowpass::{FILTER_ZEROS, lowpass, lowpass_kernel};
pub use math::{db_to_linear, linear_to_db, peak, rms};
pub use rng::{Seed, fill_gaussian, gaussian_pair};
pub use waveform::Waveform;
pub use window::hann;
