//! Axis-angle, rotation vector and swing-twist forms.

use crate::error::{OrientError, OrientResult};
use crate::quaternion::{Quaternion, Vector3};
use crate::validation::{validate_finite, validate_nonzero};

/// Angles below this magnitude have no well-defined axis.
pub const AXIS_ANGLE_EPSILON: f64 = 1e-6;

/// Rotation by `angle` radians about `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    /// Rotation angle in radians, in `[0, 2π]`.
    pub angle: f64,
    /// Unit rotation axis, or the zero vector when degenerate.
    pub axis: Vector3,
}

impl AxisAngle {
    /// Whether the rotation is too small to have an axis.
    ///
    /// A degenerate value means "no rotation"; its axis is the zero vector.
    pub fn is_degenerate(&self) -> bool {
        self.angle.abs() < AXIS_ANGLE_EPSILON
    }

    /// Axis scaled by angle.
    pub fn rotation_vector(&self) -> Vector3 {
        self.axis * self.angle
    }
}

/// Decomposition `q = swing ∘ twist` about a chosen axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingTwist {
    /// Residual rotation, with axis orthogonal to the twist axis.
    pub swing: Quaternion,
    /// Pure rotation about the twist axis.
    pub twist: Quaternion,
}

impl SwingTwist {
    /// Recompose into a single rotation.
    pub fn compose(&self) -> OrientResult<Quaternion> {
        Quaternion::from_swing_twist(&self.swing, &self.twist)
    }
}

impl Quaternion {
    /// Angle and axis of the normalized rotation.
    ///
    /// `angle = 2·atan2(|xyz|, w)`. When `|angle| < AXIS_ANGLE_EPSILON` the
    /// axis is the zero vector.
    pub fn to_axis_angle(&self) -> OrientResult<AxisAngle> {
        let q = self.normalize()?;
        let v = q.vector();

        let angle = 2.0 * v.norm().atan2(q.w);
        let axis = if angle.abs() < AXIS_ANGLE_EPSILON {
            Vector3::zeros()
        } else {
            v / (0.5 * angle).sin()
        };

        Ok(AxisAngle { angle, axis })
    }

    /// `(cos(θ/2), sin(θ/2)·axis)`, normalized.
    ///
    /// The axis is expected to be a unit vector; it is used as given.
    pub fn from_axis_angle(angle: f64, axis: &Vector3) -> OrientResult<Self> {
        validate_finite(&[angle, axis.x, axis.y, axis.z], "from_axis_angle")?;
        let (s, c) = (0.5 * angle).sin_cos();
        Self::from_parts(c, &(axis * s)).normalize()
    }

    /// Rotation vector (axis scaled by angle).
    pub fn to_rotation_vector(&self) -> OrientResult<Vector3> {
        Ok(self.to_axis_angle()?.rotation_vector())
    }

    /// Rotation from a rotation vector. A zero vector gives the identity.
    pub fn from_rotation_vector(v: &Vector3) -> OrientResult<Self> {
        let angle = v.norm();
        if angle < 1e-10 {
            return Ok(Self::identity());
        }
        Self::from_axis_angle(angle, &(v / angle))
    }

    /// Split into a twist about `axis` and the residual swing.
    ///
    /// The quaternion is normalized, its vector part projected onto the unit
    /// axis gives `p`, `twist = normalize((w, p))` and `swing = q ∘ twist*`.
    ///
    /// # Errors
    ///
    /// [`OrientError::DivideByZero`] if `axis` is zero, or if the rotation is a
    /// half turn about an axis orthogonal to `axis` (the twist is undefined).
    pub fn to_swing_twist(&self, axis: &Vector3) -> OrientResult<SwingTwist> {
        let axis_norm = axis.norm();
        validate_nonzero(axis_norm, "swing-twist axis")?;
        let axis = axis / axis_norm;

        let q = self.normalize()?;
        let p = axis * q.vector().dot(&axis);

        let twist = Self::from_parts(q.w, &p)
            .normalize()
            .map_err(|err| match err {
                OrientError::DivideByZero { .. } => {
                    OrientError::divide_by_zero("swing-twist (half turn orthogonal to twist axis)")
                }
                other => other,
            })?;
        let swing = q.multiply(&twist.conjugate());

        Ok(SwingTwist { swing, twist })
    }

    /// `normalize(swing ∘ twist)`.
    pub fn from_swing_twist(swing: &Self, twist: &Self) -> OrientResult<Self> {
        swing.multiply(twist).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn random_axis(rng: &mut StdRng) -> Vector3 {
        loop {
            let v = Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            if v.norm() > 0.1 {
                return v;
            }
        }
    }

    fn assert_same_rotation(a: &Quaternion, b: &Quaternion) {
        assert!((a.dot(b).abs() - 1.0).abs() < 1e-9, "{a:?} != ±{b:?}");
    }

    #[test]
    fn test_to_axis_angle_quarter_turn_about_x() {
        let q = Quaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);
        let aa = q.to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aa.axis, Vector3::x(), epsilon = 1e-12);
        assert!(!aa.is_degenerate());
    }

    #[test]
    fn test_to_axis_angle_identity_is_degenerate() {
        let aa = Quaternion::identity().to_axis_angle().unwrap();
        assert_eq!(aa.angle, 0.0);
        assert_eq!(aa.axis, Vector3::zeros());
        assert!(aa.is_degenerate());
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let axis = random_axis(&mut rng).normalize();
            let angle = rng.random_range(0.01..(2.0 * PI - 0.01));

            let q = Quaternion::from_axis_angle(angle, &axis).unwrap();
            let aa = q.to_axis_angle().unwrap();

            assert_relative_eq!(aa.angle, angle, epsilon = 1e-9);
            assert_abs_diff_eq!(aa.axis, axis, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_axis_angle_negative_angle_flips_axis() {
        let q = Quaternion::from_axis_angle(-0.5, &Vector3::z()).unwrap();
        let aa = q.to_axis_angle().unwrap();
        assert_relative_eq!(aa.angle, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(aa.axis, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_vector_round_trip() {
        let v = Vector3::new(0.3, -0.2, 0.9);
        let q = Quaternion::from_rotation_vector(&v).unwrap();
        assert_abs_diff_eq!(q.to_rotation_vector().unwrap(), v, epsilon = 1e-12);

        let zero = Quaternion::from_rotation_vector(&Vector3::zeros()).unwrap();
        assert_eq!(zero, Quaternion::identity());
        assert_eq!(zero.to_rotation_vector().unwrap(), Vector3::zeros());
    }

    #[test]
    fn test_swing_twist_round_trip() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let q = Quaternion::random(&mut rng);
            let axis = random_axis(&mut rng);

            let st = q.to_swing_twist(&axis).unwrap();
            let back = Quaternion::from_swing_twist(&st.swing, &st.twist).unwrap();
            assert_same_rotation(&back, &q);
            assert_same_rotation(&st.compose().unwrap(), &q);
        }
    }

    #[test]
    fn test_swing_twist_axes() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let q = Quaternion::random(&mut rng);
            let axis = random_axis(&mut rng).normalize();
            let st = q.to_swing_twist(&axis).unwrap();

            // Twist is about the axis, swing is orthogonal to it.
            assert!(st.twist.vector().cross(&axis).norm() < 1e-9);
            assert!(st.swing.vector().dot(&axis).abs() < 1e-9);
            assert!(st.swing.is_unit(1e-12));
            assert!(st.twist.is_unit(1e-12));
        }
    }

    #[test]
    fn test_swing_twist_pure_twist() {
        let q = Quaternion::from_axis_angle(0.8, &Vector3::x()).unwrap();
        let st = q.to_swing_twist(&Vector3::new(2.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(st.twist, q, epsilon = 1e-12);
        assert_abs_diff_eq!(st.swing, Quaternion::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_swing_twist_zero_axis() {
        let err = Quaternion::identity()
            .to_swing_twist(&Vector3::zeros())
            .unwrap_err();
        assert!(matches!(err, OrientError::DivideByZero { .. }));
    }

    #[test]
    fn test_swing_twist_half_turn_orthogonal() {
        let q = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let err = q.to_swing_twist(&Vector3::x()).unwrap_err();
        assert!(matches!(err, OrientError::DivideByZero { .. }));
    }
}
