//! Quaternion value type and core algebra.
//!
//! Quaternions are stored scalar-first as `(w, x, y, z)`, representing
//! `w + xi + yj + zk`. Unit magnitude is a precondition for geometric meaning,
//! not a type invariant: a `Quaternion` may hold any four finite scalars, and
//! every rotation operation normalizes its input before use.
//!
//! Composition follows the Hamilton product. Rotating a vector `v` by `q`
//! computes `q ∘ (0, v) ∘ q⁻¹`, so `(q2 * q1).rotate(v)` applies `q1` first and
//! `q2` second.

mod interpolate;
mod ops;

use log::debug;
use nalgebra::Vector3 as NVector3;

use crate::error::{OrientError, OrientResult};
use crate::validation::validate_nonzero;

/// 3-vector used for rotation axes and rotated points.
pub type Vector3 = NVector3<f64>;

/// Normalized dot product above which `between_vectors` treats its inputs as
/// coincident and returns the identity.
pub const COINCIDENT_DOT: f64 = 0.999;

/// Quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar part.
    pub w: f64,
    /// First vector component.
    pub x: f64,
    /// Second vector component.
    pub y: f64,
    /// Third vector component.
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Create a quaternion from its four components, scalar first.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Build a quaternion from a scalar part and a vector part.
    pub fn from_parts(w: f64, v: &Vector3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Pure quaternion `(0, v)`.
    pub fn pure(v: &Vector3) -> Self {
        Self::from_parts(0.0, v)
    }

    /// Components as `[w, x, y, z]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of the four components.
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Whether the magnitude is within `tolerance` of one.
    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() <= tolerance
    }

    /// Divide by the magnitude.
    ///
    /// # Errors
    ///
    /// - [`OrientError::DivideByZero`] if the magnitude is exactly zero
    /// - [`OrientError::NonFinite`] if any component is NaN or infinite
    pub fn normalize(&self) -> OrientResult<Self> {
        let norm = self.magnitude();
        validate_nonzero(norm, "quaternion normalize")?;
        Ok(self.scale(1.0 / norm))
    }

    /// Negate the vector part: `(w, -x, -y, -z)`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Inverse rotation, `normalize(conjugate(q))`.
    ///
    /// For a non-unit input this is the inverse of the normalized rotation, so
    /// callers get the inverse rotation regardless of scale.
    pub fn inverse(&self) -> OrientResult<Self> {
        self.conjugate().normalize()
    }

    /// Hamilton product `self ∘ rhs`. Not commutative.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (w1, x1, y1, z1) = (self.w, self.x, self.y, self.z);
        let (w2, x2, y2, z2) = (rhs.w, rhs.x, rhs.y, rhs.z);

        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }

    /// Rotation taking the `src` frame onto the `dest` frame:
    /// `normalize(inverse(src) ∘ dest)`.
    pub fn relative(src: &Self, dest: &Self) -> OrientResult<Self> {
        src.inverse()?.multiply(dest).normalize()
    }

    /// Rotate a vector by this quaternion (normalized first).
    pub fn rotate(&self, v: &Vector3) -> OrientResult<Vector3> {
        let q = self.normalize()?;
        let rotated = q.multiply(&Self::pure(v)).multiply(&q.conjugate());
        Ok(rotated.vector())
    }

    /// Shortest-arc rotation mapping `v1` onto `v2`.
    ///
    /// When the normalized dot product exceeds [`COINCIDENT_DOT`] the vectors
    /// are treated as coincident and the identity is returned.
    ///
    /// Antiparallel vectors are not supported: the cross product vanishes and
    /// no rotation axis can be chosen, which surfaces as
    /// [`OrientError::DivideByZero`].
    pub fn between_vectors(v1: &Vector3, v2: &Vector3) -> OrientResult<Self> {
        let n1 = v1.norm();
        let n2 = v2.norm();
        validate_nonzero(n1, "between_vectors source vector")?;
        validate_nonzero(n2, "between_vectors target vector")?;

        let d = v1.dot(v2) / (n1 * n2);
        if d > COINCIDENT_DOT {
            debug!("between_vectors: dot {d} above coincidence threshold, returning identity");
            return Ok(Self::identity());
        }

        let axis = v1.cross(v2);
        let axis_norm = axis.norm();
        if axis_norm == 0.0 {
            return Err(OrientError::divide_by_zero(
                "between_vectors (antiparallel vectors have no rotation axis)",
            ));
        }

        let half = 0.5 * d.clamp(-1.0, 1.0).acos();
        Self::from_parts(half.cos(), &(axis * (half.sin() / axis_norm))).normalize()
    }

    /// Rotation angle in `[0, π]`. `q` and `-q` give the same angle.
    pub fn angle(&self) -> OrientResult<f64> {
        let q = self.normalize()?;
        Ok(2.0 * q.vector().norm().atan2(q.w.abs()))
    }

    pub(crate) fn scale(&self, s: f64) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}
