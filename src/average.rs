//! Eigenvector-based quaternion averaging.
//!
//! Implements the method of Markley, Cheng, Crassidis and Oshman,
//! "Averaging Quaternions" (2007): the mean is the eigenvector of
//! `M = (1/n)·Σ qᵢ qᵢᵀ` with the largest eigenvalue. Because `q` and `-q`
//! contribute the same outer product, the result is unaffected by the
//! double cover, unlike a component-wise mean.

use log::{trace, warn};
use nalgebra::{DMatrix, Matrix4, SymmetricEigen, Vector4};

use crate::error::{OrientError, OrientResult};
use crate::quaternion::Quaternion;
use crate::validation::validate_finite;

/// Options for [`average_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageOptions {
    /// Relative gap `(λ₁ - λ₂) / λ₁` between the two largest eigenvalues at or
    /// below which the mean is reported as degenerate.
    /// Default: 1e-9
    pub degeneracy_tolerance: f64,
}

impl Default for AverageOptions {
    fn default() -> Self {
        Self {
            degeneracy_tolerance: 1e-9,
        }
    }
}

/// Mean orientation together with the spectrum it was chosen from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageResult {
    /// Unit mean quaternion, signed so its dot product with the first sample is
    /// non-negative.
    pub mean: Quaternion,

    /// Eigenvalues of the accumulated matrix, largest first.
    pub eigenvalues: [f64; 4],
}

/// How quaternions are laid out in a 2-D sample matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleAxis {
    /// One quaternion per row, shape `[n, 4]` (axis 0).
    Rows,
    /// One quaternion per column, shape `[4, n]` (axis 1).
    #[default]
    Columns,
}

impl TryFrom<usize> for SampleAxis {
    type Error = OrientError;

    fn try_from(axis: usize) -> OrientResult<Self> {
        match axis {
            0 => Ok(Self::Rows),
            1 => Ok(Self::Columns),
            _ => Err(OrientError::ShapeMismatch {
                expected: 1,
                actual: axis,
                context: "sample axis (0 or 1)".to_string(),
            }),
        }
    }
}

/// Average orientation of `samples` with default options.
///
/// # Errors
///
/// - [`OrientError::EmptyInput`] if `samples` is empty
/// - [`OrientError::NumericalDegenerate`] if the largest eigenvalue is not unique
pub fn average(samples: &[Quaternion]) -> OrientResult<Quaternion> {
    Ok(average_with(samples, &AverageOptions::default())?.mean)
}

/// Average orientation of `samples`, returning the spectrum as well.
pub fn average_with(samples: &[Quaternion], options: &AverageOptions) -> OrientResult<AverageResult> {
    let first = samples
        .first()
        .ok_or_else(|| OrientError::empty_input("quaternion average"))?;

    let mut accum = Matrix4::<f64>::zeros();
    for q in samples {
        validate_finite(&q.to_array(), "quaternion average sample")?;
        let v: Vector4<f64> = (*q).into();
        accum += v * v.transpose();
    }
    accum /= samples.len() as f64;
    trace!("averaging {} quaternion samples", samples.len());

    let eigen = SymmetricEigen::new(accum);

    let mut order = [0usize, 1, 2, 3];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));
    let eigenvalues = order.map(|idx| eigen.eigenvalues[idx]);

    let gap = eigenvalues[0] - eigenvalues[1];
    if gap <= options.degeneracy_tolerance * eigenvalues[0].abs() {
        warn!(
            "quaternion average is degenerate: leading eigenvalues {} and {}",
            eigenvalues[0], eigenvalues[1]
        );
        return Err(OrientError::NumericalDegenerate {
            context: "quaternion average".to_string(),
            message: format!(
                "largest eigenvalue {} is not unique (next {})",
                eigenvalues[0], eigenvalues[1]
            ),
        });
    }

    let v = eigen.eigenvectors.column(order[0]);
    let mut mean = Quaternion::new(v[0], v[1], v[2], v[3]).normalize()?;
    if mean.dot(first) < 0.0 {
        mean = -mean;
    }

    Ok(AverageResult { mean, eigenvalues })
}

/// Average quaternions stored in a 2-D matrix along `axis`.
///
/// # Errors
///
/// [`OrientError::ShapeMismatch`] if the quaternion dimension is not 4, plus
/// everything [`average`] returns.
pub fn average_matrix(samples: &DMatrix<f64>, axis: SampleAxis) -> OrientResult<Quaternion> {
    let dim = match axis {
        SampleAxis::Rows => samples.ncols(),
        SampleAxis::Columns => samples.nrows(),
    };
    if dim != 4 {
        return Err(OrientError::ShapeMismatch {
            expected: 4,
            actual: dim,
            context: "quaternion sample dimension".to_string(),
        });
    }

    let quats: Vec<Quaternion> = match axis {
        SampleAxis::Rows => samples
            .row_iter()
            .map(|r| Quaternion::new(r[0], r[1], r[2], r[3]))
            .collect(),
        SampleAxis::Columns => samples
            .column_iter()
            .map(|c| Quaternion::new(c[0], c[1], c[2], c[3]))
            .collect(),
    };
    average(&quats)
}
