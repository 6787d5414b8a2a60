//! Operator and conversion impls for [`Quaternion`].

use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};

use super::Quaternion;

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product.
    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self.scale(-1.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion> for nalgebra::Vector4<f64> {
    /// Column vector `[w, x, y, z]`.
    fn from(q: Quaternion) -> Self {
        nalgebra::Vector4::new(q.w, q.x, q.y, q.z)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mul_matches_multiply() {
        let a = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        let b = Quaternion::new(-0.5, 0.6, -0.7, 0.8);
        assert_eq!(a * b, a.multiply(&b));
    }

    #[test]
    fn test_mul_matches_nalgebra() {
        let a = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        let b = Quaternion::new(-0.5, 0.6, -0.7, 0.8);

        let na: nalgebra::Quaternion<f64> = a.into();
        let nb: nalgebra::Quaternion<f64> = b.into();
        assert_relative_eq!(a * b, Quaternion::from(na * nb), epsilon = 1e-15);
    }

    #[test]
    fn test_array_conversion() {
        let q = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.w, 1.0);
        assert_eq!(q.z, 4.0);
        let arr: [f64; 4] = q.into();
        assert_eq!(arr, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_neg() {
        let q = -Quaternion::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(q, Quaternion::new(-1.0, 2.0, -3.0, 4.0));
    }
}
