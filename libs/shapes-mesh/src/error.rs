//! # Mesh Errors
//!
//! Error types for mesh generation and processing operations.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation and transformation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A generator or operation received an argument outside its domain
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The operation needs at least one point
    #[error("Empty mesh passed to {operation}")]
    EmptyMesh { operation: &'static str },

    /// Too many points for a 16-bit index buffer
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Invalid weld configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an empty mesh error for the named operation.
    pub fn empty_mesh(operation: &'static str) -> Self {
        Self::EmptyMesh { operation }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("slices must be at least 3: 2");
        assert!(err.to_string().contains("slices"));

        let err = MeshError::empty_mesh("weld");
        assert!(err.to_string().contains("weld"));

        let err = MeshError::TooManyVertices { count: 70_000, max: 65_536 };
        assert!(err.to_string().contains("70000"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidGridSize(1).into();
        assert!(matches!(err, MeshError::InvalidConfig(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
