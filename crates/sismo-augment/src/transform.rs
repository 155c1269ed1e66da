//! Core Transform trait and the shared probability gate.
//!
//! Every augmentation implements [`Transform`]: the required
//! [`apply_transform`](Transform::apply_transform) holds the actual
//! algorithm, and the provided [`apply`](Transform::apply) entry point
//! validates the call, rolls the probability gate, and either hands the
//! input back unchanged or delegates to the algorithm. Concrete transforms
//! never reimplement the gating.
//!
//! ## Design Decisions
//!
//! - **Value semantics**: `apply` takes the waveform by value. The gated
//!   path returns the same allocation untouched; the transformed path
//!   returns a fresh waveform of identical shape.
//!
//! - **Owned randomness**: every transform owns a [`Gate`] carrying its own
//!   ChaCha8 generator, so one seed fixes one instance's entire behavior.
//!   `apply` takes `&mut self` because the generator advances; sharing an
//!   instance across threads is a compile error, cloning gives each worker
//!   an independent generator state.
//!
//! - **Object-safe**: pipelines store stages as `Box<dyn Transform + Send>`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use sismo_core::{AugmentError, Result, Seed, Waveform};

/// Probability gate plus the random source of one transform instance.
///
/// The gate rolls the activation draw and supplies every other random
/// value the owning transform needs (noise samples, cutoff draws).
#[derive(Debug, Clone)]
pub struct Gate {
    probability: f32,
    rng: ChaCha8Rng,
}

impl Gate {
    /// Creates a gate with the given activation probability, seeded from
    /// entropy.
    ///
    /// `transform` names the owner in the error when `probability` falls
    /// outside `[0, 1]`.
    pub fn new(transform: &'static str, probability: f32) -> Result<Self> {
        Self::seeded(transform, probability, Seed::from_entropy())
    }

    /// Creates a gate with the given activation probability and seed.
    pub fn seeded(transform: &'static str, probability: f32, seed: Seed) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(AugmentError::invalid_config(
                transform,
                format!("probability {probability} outside [0, 1]"),
            ));
        }
        Ok(Self {
            probability,
            rng: seed.to_rng(),
        })
    }

    /// Returns the activation probability.
    pub fn probability(&self) -> f32 {
        self.probability
    }

    /// Rolls the activation draw: true when the transform should run.
    ///
    /// Draws `r ~ Uniform[0, 1)` and passes when `r <= p`, so `p = 1`
    /// always runs and `p = 0` effectively never does.
    pub fn passes(&mut self) -> bool {
        self.rng.gen_range(0.0..1.0f32) <= self.probability
    }

    /// Returns the owned random source for transform-specific draws.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Replaces the random source with one seeded from `seed`.
    pub fn reseed(&mut self, seed: Seed) {
        self.rng = seed.to_rng();
    }
}

/// Core trait for all waveform augmentations.
///
/// Implementations provide the unconditional algorithm in
/// [`apply_transform`](Transform::apply_transform) and expose their
/// [`Gate`]; the probabilistic entry point [`apply`](Transform::apply) is
/// provided once here and is not meant to be overridden.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{Gate, Transform};
/// use sismo_core::{Result, Seed, Waveform};
///
/// /// Scales every sample by a fixed factor.
/// struct Scale {
///     factor: f32,
///     gate: Gate,
/// }
///
/// impl Transform for Scale {
///     fn name(&self) -> &'static str {
///         "scale"
///     }
///
///     fn gate_mut(&mut self) -> &mut Gate {
///         &mut self.gate
///     }
///
///     fn apply_transform(&mut self, waveform: &Waveform, _sample_rate: u32) -> Result<Waveform> {
///         Ok(waveform.map(|x| x * self.factor))
///     }
/// }
///
/// let mut scale = Scale {
///     factor: 2.0,
///     gate: Gate::seeded("scale", 1.0, Seed::new(7))?,
/// };
/// let wave = Waveform::new(1, vec![1.0, 2.0])?;
/// let out = scale.apply(wave, 100)?;
/// assert_eq!(out.samples(), &[2.0, 4.0]);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
pub trait Transform {
    /// Short lowercase identifier used in errors and trace output.
    fn name(&self) -> &'static str;

    /// The probability gate owning this transform's random source.
    fn gate_mut(&mut self) -> &mut Gate;

    /// The unconditional algorithm.
    ///
    /// Runs only when the gate passes. Implementations may assume the
    /// waveform is non-empty and the sample rate positive; both were
    /// checked by [`apply`](Transform::apply).
    fn apply_transform(&mut self, waveform: &Waveform, sample_rate: u32) -> Result<Waveform>;

    /// Applies the transform to a waveform.
    ///
    /// Validates the call, draws `r ~ Uniform[0, 1)` from the gate, and
    /// returns the input unchanged when `r > p`; otherwise delegates to
    /// [`apply_transform`](Transform::apply_transform).
    fn apply(&mut self, waveform: Waveform, sample_rate: u32) -> Result<Waveform> {
        if waveform.is_empty() {
            return Err(AugmentError::invalid_input("waveform has no samples"));
        }
        if sample_rate == 0 {
            return Err(AugmentError::invalid_input("sample rate must be positive"));
        }
        if !self.gate_mut().passes() {
            #[cfg(feature = "tracing")]
            tracing::trace!("augment_skip: {} gated out", self.name());
            return Ok(waveform);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            "augment_apply: {} on {}x{} at {} Hz",
            self.name(),
            waveform.channels(),
            waveform.num_samples(),
            sample_rate
        );
        self.apply_transform(&waveform, sample_rate)
    }
}
