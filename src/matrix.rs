//! Quaternion ↔ rotation matrix conversion.
//!
//! The rotation matrix is only an intermediate form between quaternions and
//! Euler angles. Matrices act on column vectors: `R * v` equals `q.rotate(v)`.

use nalgebra::Matrix3;

use crate::error::{OrientError, OrientResult};
use crate::quaternion::Quaternion;
use crate::validation::validate_finite;

/// 3×3 rotation matrix, row-major indexing `m[(row, col)]`.
pub type RotationMatrix = Matrix3<f64>;

/// Tolerances used to accept a matrix as a proper rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixTolerance {
    /// Maximum allowed `|det(R) - 1|`.
    /// Default: 1e-6
    pub determinant: f64,

    /// Relative tolerance for the element-wise `RᵗR ≈ I` check.
    /// Default: 1e-5
    pub rtol: f64,

    /// Absolute tolerance for the element-wise `RᵗR ≈ I` check.
    /// Default: 1e-8
    pub atol: f64,
}

impl Default for MatrixTolerance {
    fn default() -> Self {
        Self {
            determinant: 1e-6,
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl MatrixTolerance {
    /// Check that `m` is orthonormal with determinant one.
    pub fn validate(&self, m: &RotationMatrix) -> OrientResult<()> {
        validate_finite(m.as_slice(), "rotation matrix")?;

        let determinant = m.determinant();
        let gram = m.transpose() * m;
        let identity = RotationMatrix::identity();

        let mut orthogonality_error = 0.0_f64;
        let mut orthonormal = true;
        for (a, b) in gram.iter().zip(identity.iter()) {
            let diff = (a - b).abs();
            orthogonality_error = orthogonality_error.max(diff);
            if diff > self.atol + self.rtol * b.abs() {
                orthonormal = false;
            }
        }

        if !orthonormal || (determinant - 1.0).abs() > self.determinant {
            return Err(OrientError::InvalidRotationMatrix {
                determinant,
                orthogonality_error,
            });
        }
        Ok(())
    }
}

impl Quaternion {
    /// Rotation matrix of the normalized quaternion.
    pub fn to_matrix(&self) -> OrientResult<RotationMatrix> {
        let Quaternion { w, x, y, z } = self.normalize()?;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        #[rustfmt::skip]
        let m = RotationMatrix::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy),
        );
        Ok(m)
    }

    /// Quaternion from a proper rotation matrix, using default tolerances.
    ///
    /// See [`Quaternion::from_matrix_with`].
    pub fn from_matrix(m: &RotationMatrix) -> OrientResult<Self> {
        Self::from_matrix_with(m, &MatrixTolerance::default())
    }

    /// Quaternion from a proper rotation matrix.
    ///
    /// Uses Shepperd's method, branching on the largest of the trace and the
    /// diagonal terms, so accuracy holds up near 180° rotations. Which of `q`
    /// and `-q` is returned depends on the branch taken.
    ///
    /// # Errors
    ///
    /// [`OrientError::InvalidRotationMatrix`] if `|det(R) - 1|` or any element
    /// of `RᵗR - I` exceeds the given tolerance (reflections included).
    pub fn from_matrix_with(m: &RotationMatrix, tolerance: &MatrixTolerance) -> OrientResult<Self> {
        tolerance.validate(m)?;

        let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

        let trace = m00 + m11 + m22;

        let (w, x, y, z) = if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            (0.25 / s, (m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            ((m21 - m12) / s, 0.25 * s, (m01 + m10) / s, (m02 + m20) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            ((m02 - m20) / s, (m01 + m10) / s, 0.25 * s, (m12 + m21) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            ((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, 0.25 * s)
        };

        Self::new(w, x, y, z).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::Vector3;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn assert_same_rotation(a: &Quaternion, b: &Quaternion) {
        let err = (a.dot(b).abs() - 1.0).abs();
        assert!(err < 1e-9, "{a:?} and {b:?} differ (|dot| - 1 = {err})");
    }

    #[test]
    fn test_to_matrix_quarter_turn_about_z() {
        let half = PI / 4.0;
        let q = Quaternion::new(half.cos(), 0.0, 0.0, half.sin());
        let m = q.to_matrix().unwrap();

        // 90 deg Z rotation: [[0, -1, 0], [1, 0, 0], [0, 0, 1]]
        assert!(m[(0, 0)].abs() < 1e-12);
        assert!((m[(0, 1)] + 1.0).abs() < 1e-12);
        assert!((m[(1, 0)] - 1.0).abs() < 1e-12);
        assert!((m[(2, 2)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_matrix_agrees_with_rotate() {
        let mut rng = StdRng::seed_from_u64(1);
        let v = Vector3::new(-0.4, 0.9, 1.7);
        for _ in 0..10 {
            let q = Quaternion::random(&mut rng);
            let m = q.to_matrix().unwrap();
            assert_abs_diff_eq!(m * v, q.rotate(&v).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_to_matrix_is_proper_rotation() {
        let q = Quaternion::new(3.0, -1.0, 0.5, 2.0);
        let m = q.to_matrix().unwrap();
        assert!(MatrixTolerance::default().validate(&m).is_ok());
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_round_trip() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let q = Quaternion::random(&mut rng);
            let back = Quaternion::from_matrix(&q.to_matrix().unwrap()).unwrap();
            assert_same_rotation(&q, &back);
        }
    }

    #[test]
    fn test_matrix_round_trip_near_half_turn() {
        let angle = PI - 1e-9;
        let axis = Vector3::new(1.0, 2.0, -2.0).normalize();
        let q = Quaternion::from_parts((angle / 2.0).cos(), &(axis * (angle / 2.0).sin()));

        let back = Quaternion::from_matrix(&q.to_matrix().unwrap()).unwrap();
        assert_same_rotation(&q, &back);
    }

    #[test]
    fn test_from_matrix_rejects_reflection() {
        let m = RotationMatrix::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));
        match Quaternion::from_matrix(&m) {
            Err(OrientError::InvalidRotationMatrix { determinant, .. }) => {
                assert!((determinant + 1.0).abs() < 1e-12);
            }
            other => panic!("expected InvalidRotationMatrix, got {other:?}"),
        }
    }

    #[test]
    fn test_from_matrix_rejects_scaled() {
        let m = RotationMatrix::identity() * 1.01;
        assert!(matches!(
            Quaternion::from_matrix(&m),
            Err(OrientError::InvalidRotationMatrix { .. })
        ));
    }

    #[test]
    fn test_from_matrix_rejects_shear() {
        let mut m = RotationMatrix::identity();
        m[(0, 1)] = 1e-3;
        assert!(Quaternion::from_matrix(&m).is_err());
    }

    #[test]
    fn test_from_matrix_custom_tolerance() {
        let m = RotationMatrix::identity() * (1.0 + 1e-4);
        let loose = MatrixTolerance {
            determinant: 1e-3,
            rtol: 1e-3,
            atol: 1e-3,
        };
        let q = Quaternion::from_matrix_with(&m, &loose).unwrap();
        assert_abs_diff_eq!(q, Quaternion::identity(), epsilon = 1e-12);
    }
}
