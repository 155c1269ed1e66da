//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use sismo_augment::Compose;
use sismo_core::Seed;

use crate::error::PresetError;
use crate::transform_spec::TransformSpec;

/// Preset file format for augmentation pipelines.
///
/// Presets are stored as TOML files containing an ordered list of
/// transforms with their parameters. They can be loaded from files,
/// created programmatically, and saved to disk. [`build`](Self::build)
/// turns a preset into a runnable [`Compose`] pipeline.
///
/// # TOML Format
///
/// ```toml
/// name = "teleseism train"
/// seed = 42
///
/// [[transforms]]
/// type = "additive_noise"
/// snr_db = 6.0
/// p = 0.5
///
/// [[transforms]]
/// type = "random_low_pass"
/// cutoff_range = [1.0, 10.0]
/// p = 0.3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelinePreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Master seed for reproducible pipelines.
    ///
    /// When set, every transform gets a distinct seed derived from it,
    /// so rebuilding the preset replays the same augmentations. When
    /// absent, transforms seed themselves from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Ordered list of transforms in the pipeline.
    #[serde(default)]
    pub transforms: Vec<TransformSpec>,
}

impl PipelinePreset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            seed: None,
            transforms: Vec::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a transform to the preset.
    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Add multiple transforms to the preset.
    pub fn with_transforms(mut self, transforms: impl IntoIterator<Item = TransformSpec>) -> Self {
        self.transforms.extend(transforms);
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PresetError::read_file(path, e))?;
        let preset: PipelinePreset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| PresetError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| PresetError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, PresetError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the runnable pipeline this preset describes.
    ///
    /// Each entry goes through its transform's validating constructor,
    /// so a bad parameter fails here with the entry's position rather
    /// than at apply time. With a master seed each entry receives a
    /// distinct derived seed; rebuilding the same preset replays the
    /// same augmentation stream.
    pub fn build(&self) -> Result<Compose, PresetError> {
        let mut pipeline = Compose::new();
        for (index, spec) in self.transforms.iter().enumerate() {
            let seed = self
                .seed
                .map(|master| Seed::new(master).derive(&format!("transform-{index}")));
            let transform = spec
                .build(seed)
                .map_err(|e| PresetError::build(index, spec.kind(), e))?;
            pipeline.push_boxed(transform);
        }
        Ok(pipeline)
    }

    /// Get the number of transforms in the preset.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the preset is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get a transform entry by index.
    pub fn get(&self, index: usize) -> Option<&TransformSpec> {
        self.transforms.get(index)
    }

    /// Iterate over transform entries.
    pub fn iter(&self) -> impl Iterator<Item = &TransformSpec> {
        self.transforms.iter()
    }

    /// Get the list of transform type tags, in pipeline order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.transforms.iter().map(TransformSpec::kind).collect()
    }
}

impl Default for PipelinePreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_new() {
        let preset = PipelinePreset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert!(preset.seed.is_none());
        assert!(preset.transforms.is_empty());
    }

    #[test]
    fn test_preset_builder() {
        let preset = PipelinePreset::new("My Preset")
            .with_description("A test preset")
            .with_seed(42)
            .with_transform(TransformSpec::PolarityInvert { p: 0.5 })
            .with_transform(TransformSpec::PeakNormalize { p: 1.0 });

        assert_eq!(preset.name, "My Preset");
        assert_eq!(preset.description, Some("A test preset".to_string()));
        assert_eq!(preset.seed, Some(42));
        assert_eq!(preset.len(), 2);
        assert_eq!(preset.kinds(), vec!["polarity_invert", "peak_normalize"]);
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Test"
description = "A test preset"
seed = 7

[[transforms]]
type = "additive_noise"
snr_db = 6.0
p = 0.5

[[transforms]]
type = "taper"
max_percentage = 0.05
"#;

        let preset = PipelinePreset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.description, Some("A test preset".to_string()));
        assert_eq!(preset.seed, Some(7));
        assert_eq!(preset.len(), 2);

        assert_eq!(
            preset.transforms[0],
            TransformSpec::AdditiveNoise {
                snr_db: 6.0,
                p: 0.5
            }
        );
        assert_eq!(
            preset.transforms[1],
            TransformSpec::Taper {
                max_percentage: 0.05,
                max_length_secs: 100.0,
                p: 1.0
            }
        );
    }

    #[test]
    fn test_preset_to_toml() {
        let preset = PipelinePreset::new("Test")
            .with_description("Test description")
            .with_transform(TransformSpec::LowPass {
                cutoff_hz: 5.0,
                p: 1.0,
            });

        let toml = preset.to_toml().unwrap();

        assert!(toml.contains("name = \"Test\""), "got: {toml}");
        assert!(toml.contains("description = \"Test description\""), "got: {toml}");
        assert!(toml.contains("type = \"low_pass\""), "got: {toml}");
        assert!(toml.contains("cutoff_hz = 5.0"), "got: {toml}");
    }

    #[test]
    fn test_preset_roundtrip() {
        let original = PipelinePreset::new("Roundtrip Test")
            .with_seed(1234)
            .with_transform(TransformSpec::ChannelFlip {
                input_order: "ZNE".to_string(),
                p: 0.5,
            })
            .with_transform(TransformSpec::RandomHighPass {
                cutoff_range: [0.5, 4.0],
                p: 0.3,
            });

        let toml = original.to_toml().unwrap();
        let parsed = PipelinePreset::from_toml(&toml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_minimal_toml() {
        let toml = r#"
name = "Minimal"

[[transforms]]
type = "peak_normalize"
"#;

        let preset = PipelinePreset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Minimal");
        assert!(preset.description.is_none());
        assert!(preset.seed.is_none());
        assert_eq!(preset.len(), 1);
        assert_eq!(preset.kinds(), vec!["peak_normalize"]);
    }

    #[test]
    fn test_build_reports_failing_entry_position() {
        let preset = PipelinePreset::new("Broken")
            .with_transform(TransformSpec::PolarityInvert { p: 1.0 })
            .with_transform(TransformSpec::LowPass {
                cutoff_hz: -2.0,
                p: 1.0,
            });

        let err = preset.build().unwrap_err();
        assert!(
            matches!(err, PresetError::Build { index: 1, ref kind, .. } if kind == "low_pass"),
            "got: {err}"
        );
    }

    #[test]
    fn test_build_empty_preset_gives_empty_pipeline() {
        let pipeline = PipelinePreset::new("Empty").build().unwrap();
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_preset_default() {
        let preset = PipelinePreset::default();
        assert_eq!(preset.name, "Untitled");
        assert!(preset.is_empty());
    }
}
