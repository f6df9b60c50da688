use std::fmt;

/// Result type for cvact operations
pub type Result<T> = std::result::Result<T, CvactError>;

/// Main error type for the cvact library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvactError {
    /// String identifier not present in the activation lookup table
    UnknownActivation {
        name: String,
    },

    /// Identifier value that is neither null, a string, nor an activation unit
    InvalidIdentifier {
        type_name: String,
    },

    /// Built unit invoked with an incompatible trailing dimension
    ShapeMismatch {
        expected: String,
        actual: String,
    },
}

impl fmt::Display for CvactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvactError::UnknownActivation { name } => {
                write!(f, "Selected activation '{}' not implemented in complex activations", name)
            }
            CvactError::InvalidIdentifier { type_name } => {
                write!(f, "Could not interpret activation function identifier of type {}", type_name)
            }
            CvactError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for CvactError {}

// Helper functions for common error patterns
impl CvactError {
    pub fn unknown_activation<S: Into<String>>(name: S) -> Self {
        CvactError::UnknownActivation { name: name.into() }
    }

    pub fn invalid_identifier<S: Into<String>>(type_name: S) -> Self {
        CvactError::InvalidIdentifier { type_name: type_name.into() }
    }

    pub fn shape_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        CvactError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
