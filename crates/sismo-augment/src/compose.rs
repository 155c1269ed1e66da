//! Ordered transform pipelines
//!
//! [`Compose`] chains transforms into a single reusable unit: the output
//! waveform of each stage feeds the next. Stages are either boxed
//! transforms or nested pipelines, so an augmentation policy can be
//! assembled from smaller named pieces.
//!
//! A pipeline has no application probability of its own. Stochastic
//! behaviour lives entirely in the per-stage gates, which keeps the
//! effective rate of every stage readable straight off its `p`.

use sismo_core::{Result, Waveform};

use crate::transform::Transform;

/// One stage of a pipeline.
pub enum Stage {
    /// A single boxed transform.
    Transform(Box<dyn Transform + Send>),
    /// A nested pipeline applied as one unit.
    Pipeline(Compose),
}

impl Stage {
    fn apply(&mut self, waveform: Waveform, sample_rate: u32) -> Result<Waveform> {
        match self {
            Stage::Transform(transform) => transform.apply(waveform, sample_rate),
            Stage::Pipeline(pipeline) => pipeline.apply(waveform, sample_rate),
        }
    }

    /// Name of the transform, or `"pipeline"` for a nested pipeline.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Transform(transform) => transform.name(),
            Stage::Pipeline(_) => "pipeline",
        }
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Transform(transform) => write!(f, "Transform({})", transform.name()),
            Stage::Pipeline(pipeline) => f.debug_tuple("Pipeline").field(pipeline).finish(),
        }
    }
}

/// An ordered chain of augmentation stages.
///
/// # Example
///
/// ```rust
/// use sismo_augment::{Compose, PeakNormalize, PolarityInvert};
/// use sismo_core::{Seed, Waveform};
///
/// let mut pipeline = Compose::new()
///     .with_transform(PolarityInvert::seeded(1.0, Seed::new(1))?)
///     .with_transform(PeakNormalize::seeded(1.0, Seed::new(2))?);
///
/// let wave = Waveform::new(1, vec![0.0, 2.0, -4.0])?;
/// let out = pipeline.apply(wave, 100)?;
/// assert_eq!(out.samples(), &[0.0, -0.5, 1.0]);
/// # Ok::<(), sismo_core::AugmentError>(())
/// ```
#[derive(Debug, Default)]
pub struct Compose {
    stages: Vec<Stage>,
}

impl Compose {
    /// Creates an empty pipeline, which applies as the identity.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a transform stage.
    #[must_use]
    pub fn with_transform(mut self, transform: impl Transform + Send + 'static) -> Self {
        self.stages.push(Stage::Transform(Box::new(transform)));
        self
    }

    /// Appends a nested pipeline stage.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Compose) -> Self {
        self.stages.push(Stage::Pipeline(pipeline));
        self
    }

    /// Appends an already boxed transform stage.
    pub fn push_boxed(&mut self, transform: Box<dyn Transform + Send>) {
        self.stages.push(Stage::Transform(transform));
    }

    /// Number of stages in this pipeline, not counting nested contents.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Applies every stage in order, feeding each output into the next.
    ///
    /// The first failing stage short-circuits the chain and its error is
    /// returned unchanged.
    pub fn apply(&mut self, waveform: Waveform, sample_rate: u32) -> Result<Waveform> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "pipeline: applying {} stages to {}x{} at {sample_rate} Hz",
            self.stages.len(),
            waveform.channels(),
            waveform.num_samples()
        );
        let mut current = waveform;
        for stage in &mut self.stages {
            #[cfg(feature = "tracing")]
            tracing::trace!("pipeline: stage {}", stage.name());
            current = stage.apply(current, sample_rate)?;
        }
        Ok(current)
    }
}
