//! Error types for orientation operations.

use std::fmt;

/// Result type for orientation operations.
pub type OrientResult<T> = Result<T, OrientError>;

/// Errors that can occur during orientation operations.
///
/// Every error is local to the call that produced it. No operation retries,
/// substitutes a default, or returns a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum OrientError {
    /// Axis convention name or tuple is not one of the 24 recognized forms.
    InvalidConvention { name: String },

    /// Matrix is not a proper rotation (non-orthonormal or a reflection).
    InvalidRotationMatrix {
        determinant: f64,
        orthogonality_error: f64,
    },

    /// Normalization of a zero-magnitude quantity.
    DivideByZero { context: String },

    /// Operation requires at least one sample.
    EmptyInput { context: String },

    /// Result is numerically undetermined (e.g. repeated leading eigenvalue).
    NumericalDegenerate { context: String, message: String },

    /// Input contained NaN or infinity.
    NonFinite { context: String },

    /// Input has the wrong number of elements.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },
}

impl fmt::Display for OrientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConvention { name } => {
                write!(f, "Invalid axis convention '{}'", name)
            }
            Self::InvalidRotationMatrix {
                determinant,
                orthogonality_error,
            } => {
                write!(
                    f,
                    "Invalid rotation matrix: determinant {}, max |R^T R - I| {}",
                    determinant, orthogonality_error
                )
            }
            Self::DivideByZero { context } => {
                write!(f, "Division by zero in {}", context)
            }
            Self::EmptyInput { context } => {
                write!(f, "Empty input in {}", context)
            }
            Self::NumericalDegenerate { context, message } => {
                write!(f, "Numerically degenerate input in {}: {}", context, message)
            }
            Self::NonFinite { context } => {
                write!(f, "Non-finite value in {}", context)
            }
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for OrientError {}

impl OrientError {
    pub(crate) fn divide_by_zero(context: &str) -> Self {
        Self::DivideByZero {
            context: context.to_string(),
        }
    }

    pub(crate) fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = OrientError::divide_by_zero("normalize");
        assert_eq!(err.to_string(), "Division by zero in normalize");

        let err = OrientError::InvalidConvention {
            name: "sxxz".to_string(),
        };
        assert!(err.to_string().contains("sxxz"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = OrientError::ShapeMismatch {
            expected: 8,
            actual: 7,
            context: "orientation sample".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch in orientation sample: expected 8, got 7"
        );
    }
}
