//! Spherical interpolation and random sampling of unit quaternions.

use std::f64::consts::TAU;

use rand::Rng;

use super::Quaternion;
use crate::error::OrientResult;

/// Dot product above which slerp falls back to normalized linear interpolation.
const SLERP_LINEAR_DOT: f64 = 0.9995;

impl Quaternion {
    /// Spherical linear interpolation from `self` (t = 0) to `other` (t = 1).
    ///
    /// Both inputs are normalized first. The shorter of the two great-circle
    /// arcs is taken, so the result may be the antipode of `other` at `t = 1`.
    pub fn slerp(&self, other: &Self, t: f64) -> OrientResult<Self> {
        let mut q1 = self.normalize()?;
        let q2 = other.normalize()?;

        let mut dot = q1.dot(&q2);
        if dot < 0.0 {
            q1 = -q1;
            dot = -dot;
        }

        let (scale1, scale2) = if dot > SLERP_LINEAR_DOT {
            (1.0 - t, t)
        } else {
            let theta = dot.acos();
            let sin_theta = theta.sin();
            (
                ((1.0 - t) * theta).sin() / sin_theta,
                (t * theta).sin() / sin_theta,
            )
        };

        Self::new(
            scale1 * q1.w + scale2 * q2.w,
            scale1 * q1.x + scale2 * q2.x,
            scale1 * q1.y + scale2 * q2.y,
            scale1 * q1.z + scale2 * q2.z,
        )
        .normalize()
    }

    /// Unit quaternion drawn uniformly from SO(3) (Shoemake's method).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        let u3: f64 = rng.random();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();

        Self::new(
            b * (TAU * u3).cos(),
            a * (TAU * u2).sin(),
            a * (TAU * u2).cos(),
            b * (TAU * u3).sin(),
        )
    }
}
