//! Quaternion ↔ Euler angle conversion for every axis convention.

use log::debug;

use super::convention::{AxisConvention, AxisTuple, Frame};
use crate::error::OrientResult;
use crate::quaternion::Quaternion;
use crate::validation::validate_finite;

/// Threshold below which Euler extraction treats the matrix as gimbal locked.
pub const EULER_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Next axis in cyclic x → y → z order, padded so `first_axis + parity` indexes safely.
const NEXT_AXIS: [usize; 4] = [1, 2, 0, 1];

/// Three angles in radians, meaningful only under their convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Angles in the order named by the convention.
    pub angles: [f64; 3],
    /// Convention the angles are expressed in.
    pub convention: AxisConvention,
}

impl EulerAngles {
    pub fn new(angles: [f64; 3], convention: AxisConvention) -> Self {
        Self { angles, convention }
    }

    /// Quaternion for these angles.
    pub fn to_quaternion(&self) -> OrientResult<Quaternion> {
        Quaternion::from_euler(self.angles, self.convention)
    }

    /// Re-express the same rotation under another convention.
    pub fn convert(&self, convention: AxisConvention) -> OrientResult<Self> {
        self.to_quaternion()?.to_euler(convention)
    }
}

impl Quaternion {
    /// Euler angles under `convention`, extracted from the rotation matrix.
    ///
    /// At a gimbal-lock singularity the third angle is fixed at zero and the
    /// first absorbs the combined rotation.
    pub fn to_euler(&self, convention: AxisConvention) -> OrientResult<EulerAngles> {
        let m = self.to_matrix()?;
        let AxisTuple {
            first_axis: i,
            parity,
            repetition,
            frame,
        } = convention.tuple();

        let p = usize::from(parity);
        let j = NEXT_AXIS[i + p];
        let k = NEXT_AXIS[i + 1 - p];

        let [mut ax, mut ay, mut az] = if repetition {
            let sy = (m[(i, j)] * m[(i, j)] + m[(i, k)] * m[(i, k)]).sqrt();
            if sy > EULER_EPSILON {
                [
                    m[(i, j)].atan2(m[(i, k)]),
                    sy.atan2(m[(i, i)]),
                    m[(j, i)].atan2(-m[(k, i)]),
                ]
            } else {
                debug!("to_euler({convention}): gimbal lock, sy = {sy:e}");
                [(-m[(j, k)]).atan2(m[(j, j)]), sy.atan2(m[(i, i)]), 0.0]
            }
        } else {
            let cy = (m[(i, i)] * m[(i, i)] + m[(j, i)] * m[(j, i)]).sqrt();
            if cy > EULER_EPSILON {
                [
                    m[(k, j)].atan2(m[(k, k)]),
                    (-m[(k, i)]).atan2(cy),
                    m[(j, i)].atan2(m[(i, i)]),
                ]
            } else {
                debug!("to_euler({convention}): gimbal lock, cy = {cy:e}");
                [(-m[(j, k)]).atan2(m[(j, j)]), (-m[(k, i)]).atan2(cy), 0.0]
            }
        };

        if parity {
            ax = -ax;
            ay = -ay;
            az = -az;
        }
        if frame == Frame::Rotating {
            std::mem::swap(&mut ax, &mut az);
        }

        Ok(EulerAngles::new([ax, ay, az], convention))
    }

    /// Quaternion from Euler angles (radians) under `convention`.
    pub fn from_euler(angles: [f64; 3], convention: AxisConvention) -> OrientResult<Self> {
        validate_finite(&angles, "from_euler angles")?;

        let AxisTuple {
            first_axis,
            parity,
            repetition,
            frame,
        } = convention.tuple();

        // Component indices into [w, x, y, z].
        let p = usize::from(parity);
        let i = first_axis + 1;
        let j = NEXT_AXIS[i + p - 1] + 1;
        let k = NEXT_AXIS[i - p] + 1;

        let [mut ai, mut aj, mut ak] = angles;
        if frame == Frame::Rotating {
            std::mem::swap(&mut ai, &mut ak);
        }
        if parity {
            aj = -aj;
        }

        let (si, ci) = (ai / 2.0).sin_cos();
        let (sj, cj) = (aj / 2.0).sin_cos();
        let (sk, ck) = (ak / 2.0).sin_cos();

        let cc = ci * ck;
        let cs = ci * sk;
        let sc = si * ck;
        let ss = si * sk;

        let mut q = [0.0; 4];
        if repetition {
            q[0] = cj * (cc - ss);
            q[i] = cj * (cs + sc);
            q[j] = sj * (cc + ss);
            q[k] = sj * (cs - sc);
        } else {
            q[0] = cj * cc + sj * ss;
            q[i] = cj * sc - sj * cs;
            q[j] = cj * ss + sj * cc;
            q[k] = cj * cs - sj * sc;
        }
        if parity {
            q[j] = -q[j];
        }

        Quaternion::from(q).normalize()
    }

    /// Roll, pitch and yaw (the `sxyz` angles) in closed form.
    ///
    /// The pitch argument is clamped to `[-1, 1]` before `asin`, so slightly
    /// non-unit inputs near ±90° pitch do not produce NaN.
    pub fn to_roll_pitch_yaw(&self) -> OrientResult<[f64; 3]> {
        let Quaternion { w, x, y, z } = self.normalize()?;

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        Ok([roll, pitch, yaw])
    }
}

/// Euler angles of `q` under the named convention (e.g. `"sxyz"`).
///
/// # Errors
///
/// [`crate::OrientError::InvalidConvention`] if `convention` is not one of the 24 names.
pub fn to_euler(q: &Quaternion, convention: &str) -> OrientResult<EulerAngles> {
    q.to_euler(convention.parse()?)
}

/// Quaternion from Euler angles under the named convention.
pub fn from_euler(angles: [f64; 3], convention: &str) -> OrientResult<Quaternion> {
    Quaternion::from_euler(angles, convention.parse()?)
}
