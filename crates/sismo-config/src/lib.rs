//! Configuration and preset management for sismo augmentation pipelines.
//!
//! This crate provides the file format glue for sismo: augmentation
//! pipelines described as TOML presets, parsed into typed transform
//! entries and built into runnable [`Compose`](sismo_augment::Compose)
//! pipelines.
//!
//! # Features
//!
//! - **Preset System**: Load and save pipeline presets from TOML files
//! - **Typed Entries**: Each transform is a tagged table with per-field defaults
//! - **Validated Construction**: Bad parameters fail at build time with the entry position
//! - **Seeding**: A master seed makes the whole pipeline replayable
//!
//! # Example
//!
//! ```rust,no_run
//! use sismo_config::{PipelinePreset, TransformSpec};
//!
//! // Load a preset from file and build the pipeline
//! let preset = PipelinePreset::load("train_policy.toml").unwrap();
//! let mut pipeline = preset.build().unwrap();
//!
//! // Or create a preset programmatically
//! let preset = PipelinePreset::new("teleseism train")
//!     .with_seed(42)
//!     .with_transform(TransformSpec::AdditiveNoise { snr_db: 6.0, p: 0.5 })
//!     .with_transform(TransformSpec::PeakNormalize { p: 1.0 });
//! preset.save("train_policy.toml").unwrap();
//! ```

mod error;
mod preset;
mod transform_spec;

pub use error::PresetError;
pub use preset::PipelinePreset;
pub use transform_spec::TransformSpec;
