//! Error types for waveform augmentation.

use thiserror::Error;

/// Convenience alias for fallible augmentation operations.
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Errors produced while constructing or applying augmentations.
///
/// The three variants separate the moment a problem can be detected:
/// [`InvalidConfig`](AugmentError::InvalidConfig) at construction,
/// [`InvalidInput`](AugmentError::InvalidInput) when a call argument fails a
/// structural precondition, and
/// [`InvalidParameter`](AugmentError::InvalidParameter) when a value computed
/// at apply time violates a physical constraint.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// Construction-time parameters are malformed
    #[error("invalid configuration for '{transform}': {reason}")]
    InvalidConfig {
        /// Name of the transform that rejected its configuration.
        transform: &'static str,
        /// Description of why the configuration is invalid.
        reason: String,
    },

    /// A waveform or call argument fails a structural precondition
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the failed precondition.
        reason: String,
    },

    /// A parameter derived at apply time violates a physical constraint
    #[error("invalid parameter '{param}' for '{transform}': {reason}")]
    InvalidParameter {
        /// Name of the transform the parameter belongs to.
        transform: &'static str,
        /// Name of the offending parameter.
        param: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl AugmentError {
    /// Create a construction-time configuration error.
    pub fn invalid_config(transform: &'static str, reason: impl Into<String>) -> Self {
        AugmentError::InvalidConfig {
            transform,
            reason: reason.into(),
        }
    }

    /// Create a call-time structural input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AugmentError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an apply-time parameter constraint error.
    pub fn invalid_parameter(
        transform: &'static str,
        param: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        AugmentError::InvalidParameter {
            transform,
            param,
            reason: reason.into(),
        }
    }
}
