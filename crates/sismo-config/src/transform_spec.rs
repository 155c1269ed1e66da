//! Transform entries of a preset file.
//!
//! Each entry is a TOML table tagged by `type`, carrying only the
//! parameters that transform understands. Omitted parameters fall back
//! to the stock values listed per variant, so a minimal entry is just
//! `type = "peak_normalize"`.

use serde::{Deserialize, Serialize};

use sismo_augment::{
    AdditiveNoise, ChannelFlip, HighPassFilter, LowPassFilter, PeakNormalize, PolarityInvert,
    RandomHighPassFilter, RandomLowPassFilter, Taper, Transform,
};
use sismo_core::{AugmentError, Seed};

/// One transform entry in a pipeline preset.
///
/// The `type` tag selects the transform and the remaining keys are its
/// parameters. Every entry takes an application probability `p`,
/// defaulting to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    /// Swap the horizontal components of a ZNE recording.
    ChannelFlip {
        /// Channel order of the incoming traces.
        #[serde(default = "default_input_order")]
        input_order: String,
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Add Gaussian noise at a target signal-to-noise ratio.
    AdditiveNoise {
        /// Target signal-to-noise ratio in dB.
        #[serde(default = "default_snr_db")]
        snr_db: f32,
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Low-pass filter at a fixed cutoff.
    LowPass {
        /// Cutoff frequency in Hz.
        #[serde(default = "default_cutoff_hz")]
        cutoff_hz: f32,
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// High-pass filter at a fixed cutoff.
    HighPass {
        /// Cutoff frequency in Hz.
        #[serde(default = "default_cutoff_hz")]
        cutoff_hz: f32,
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Low-pass filter with a cutoff drawn fresh per application.
    RandomLowPass {
        /// Inclusive-exclusive cutoff range in Hz.
        #[serde(default = "default_cutoff_range")]
        cutoff_range: [f32; 2],
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// High-pass filter with a cutoff drawn fresh per application.
    RandomHighPass {
        /// Inclusive-exclusive cutoff range in Hz.
        #[serde(default = "default_cutoff_range")]
        cutoff_range: [f32; 2],
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Hann edge fades.
    Taper {
        /// Cap on the tapered fraction of the trace, per edge.
        #[serde(default = "default_max_percentage")]
        max_percentage: f32,
        /// Cap on the taper length in seconds, per edge.
        #[serde(default = "default_max_length_secs")]
        max_length_secs: f32,
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Sign flip of every sample.
    PolarityInvert {
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },

    /// Scale the global peak to unity.
    PeakNormalize {
        /// Application probability.
        #[serde(default = "default_probability")]
        p: f32,
    },
}

fn default_probability() -> f32 {
    1.0
}

fn default_input_order() -> String {
    "ZNE".to_string()
}

fn default_snr_db() -> f32 {
    1.0
}

fn default_cutoff_hz() -> f32 {
    1.0
}

fn default_cutoff_range() -> [f32; 2] {
    [1.0, 10.0]
}

fn default_max_percentage() -> f32 {
    0.5
}

fn default_max_length_secs() -> f32 {
    100.0
}

impl TransformSpec {
    /// The `type` tag of this entry.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformSpec::ChannelFlip { .. } => "channel_flip",
            TransformSpec::AdditiveNoise { .. } => "additive_noise",
            TransformSpec::LowPass { .. } => "low_pass",
            TransformSpec::HighPass { .. } => "high_pass",
            TransformSpec::RandomLowPass { .. } => "random_low_pass",
            TransformSpec::RandomHighPass { .. } => "random_high_pass",
            TransformSpec::Taper { .. } => "taper",
            TransformSpec::PolarityInvert { .. } => "polarity_invert",
            TransformSpec::PeakNormalize { .. } => "peak_normalize",
        }
    }

    /// The application probability of this entry.
    pub fn probability(&self) -> f32 {
        match self {
            TransformSpec::ChannelFlip { p, .. }
            | TransformSpec::AdditiveNoise { p, .. }
            | TransformSpec::LowPass { p, .. }
            | TransformSpec::HighPass { p, .. }
            | TransformSpec::RandomLowPass { p, .. }
            | TransformSpec::RandomHighPass { p, .. }
            | TransformSpec::Taper { p, .. }
            | TransformSpec::PolarityInvert { p }
            | TransformSpec::PeakNormalize { p } => *p,
        }
    }

    /// Constructs the transform this entry describes.
    ///
    /// With `seed` given the transform replays deterministically;
    /// without it the transform seeds itself from entropy. Parameter
    /// validation happens here, in the transform constructors.
    pub fn build(
        &self,
        seed: Option<Seed>,
    ) -> Result<Box<dyn Transform + Send>, AugmentError> {
        let seed = seed.unwrap_or_else(Seed::from_entropy);
        Ok(match *self {
            TransformSpec::ChannelFlip { ref input_order, p } => {
                Box::new(ChannelFlip::seeded(input_order, p, seed)?)
            }
            TransformSpec::AdditiveNoise { snr_db, p } => {
                Box::new(AdditiveNoise::seeded(snr_db, p, seed)?)
            }
            TransformSpec::LowPass { cutoff_hz, p } => {
                Box::new(LowPassFilter::seeded(cutoff_hz, p, seed)?)
            }
            TransformSpec::HighPass { cutoff_hz, p } => {
                Box::new(HighPassFilter::seeded(cutoff_hz, p, seed)?)
            }
            TransformSpec::RandomLowPass { cutoff_range, p } => Box::new(
                RandomLowPassFilter::seeded(cutoff_range[0], cutoff_range[1], p, seed)?,
            ),
            TransformSpec::RandomHighPass { cutoff_range, p } => Box::new(
                RandomHighPassFilter::seeded(cutoff_range[0], cutoff_range[1], p, seed)?,
            ),
            TransformSpec::Taper {
                max_percentage,
                max_length_secs,
                p,
            } => Box::new(Taper::seeded(
                Some(max_percentage),
                Some(max_length_secs),
                p,
                seed,
            )?),
            TransformSpec::PolarityInvert { p } => Box::new(PolarityInvert::seeded(p, seed)?),
            TransformSpec::PeakNormalize { p } => Box::new(PeakNormalize::seeded(p, seed)?),
        })
    }
}
