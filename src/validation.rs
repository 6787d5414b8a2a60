//! Validation helpers for orientation inputs.

use crate::error::{OrientError, OrientResult};

/// Validate that every value is finite (no NaN or infinity).
pub fn validate_finite(values: &[f64], context: &'static str) -> OrientResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(OrientError::NonFinite {
            context: context.to_string(),
        })
    }
}

/// Validate that a slice has exactly `expected` elements.
pub fn validate_len(values: &[f64], expected: usize, context: &'static str) -> OrientResult<()> {
    if values.len() != expected {
        return Err(OrientError::ShapeMismatch {
            expected,
            actual: values.len(),
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Validate that a norm can be divided by.
///
/// Only an exact zero is rejected. Tiny but nonzero norms are divided through.
pub fn validate_nonzero(norm: f64, context: &'static str) -> OrientResult<()> {
    if !norm.is_finite() {
        return Err(OrientError::NonFinite {
            context: context.to_string(),
        });
    }
    if norm == 0.0 {
        return Err(OrientError::divide_by_zero(context));
    }
    Ok(())
}
