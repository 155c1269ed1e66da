//! Error types for preset operations.

use std::path::PathBuf;
use thiserror::Error;

use sismo_core::AugmentError;

/// Errors that can occur while loading, saving, or building presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A transform entry was rejected at construction
    #[error("failed to build transform {index} ('{kind}'): {source}")]
    Build {
        /// Zero-based position of the entry in the preset.
        index: usize,
        /// Type tag of the rejected entry.
        kind: String,
        /// Construction error from the transform.
        #[source]
        source: AugmentError,
    },
}

impl PresetError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a build error for the preset entry at `index`.
    pub fn build(index: usize, kind: impl Into<String>, source: AugmentError) -> Self {
        PresetError::Build {
            index,
            kind: kind.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    // --- factory methods ---

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = PresetError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, PresetError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn build_factory_produces_correct_variant() {
        let err = PresetError::build(2, "taper", AugmentError::invalid_config("taper", "bad"));
        assert!(matches!(err, PresetError::Build { index: 2, .. }));
    }

    // --- Display formatting ---

    #[test]
    fn read_file_display() {
        let err = PresetError::read_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn write_file_display() {
        let err = PresetError::write_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn build_display_names_index_and_kind() {
        let err = PresetError::build(
            0,
            "low_pass",
            AugmentError::invalid_config("low_pass", "cutoff frequency must be positive"),
        );
        let msg = err.to_string();
        assert!(msg.contains("transform 0"), "got: {msg}");
        assert!(msg.contains("low_pass"), "got: {msg}");
    }

    // --- Error::source() chains ---

    #[test]
    fn read_file_source_is_some() {
        let err = PresetError::read_file("/x", mock_io_err());
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn build_source_is_the_augment_error() {
        let err = PresetError::build(1, "noise", AugmentError::invalid_config("noise", "bad"));
        let source = err.source().expect("Build must expose its source");
        assert!(source.to_string().contains("invalid configuration"));
    }

    #[test]
    fn toml_parse_source_is_some() {
        let parse_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err = PresetError::from(parse_err);
        assert!(matches!(err, PresetError::TomlParse(_)));
    }
}
