//! Paired tracker/calibrator orientation samples.
//!
//! A control loop receives one 8-scalar record per tick, the tracker
//! quaternion followed by the calibrator quaternion, and asks for the
//! tracker's orientation relative to the calibrator. Transport and text
//! parsing belong to the caller.

use crate::error::OrientResult;
use crate::euler::{AxisConvention, EulerAngles};
use crate::quaternion::Quaternion;
use crate::validation::{validate_finite, validate_len};

/// Scalars per record: tracker `(w, x, y, z)` then calibrator `(w, x, y, z)`.
pub const SAMPLE_LEN: usize = 8;

/// One tracker/calibrator reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationSample {
    /// Orientation of the tracked body.
    pub tracker: Quaternion,
    /// Orientation of the reference body.
    pub calibrator: Quaternion,
}

impl OrientationSample {
    pub fn new(tracker: Quaternion, calibrator: Quaternion) -> Self {
        Self {
            tracker,
            calibrator,
        }
    }

    /// Rotation from the calibrator frame to the tracker frame.
    pub fn relative_orientation(&self) -> OrientResult<Quaternion> {
        Quaternion::relative(&self.calibrator, &self.tracker)
    }

    /// Relative orientation as Euler angles under `convention`.
    ///
    /// Pure and deterministic: the same record always yields the same angles.
    pub fn relative_euler(&self, convention: AxisConvention) -> OrientResult<EulerAngles> {
        self.relative_orientation()?.to_euler(convention)
    }
}

impl TryFrom<&[f64]> for OrientationSample {
    type Error = crate::error::OrientError;

    fn try_from(record: &[f64]) -> OrientResult<Self> {
        validate_len(record, SAMPLE_LEN, "orientation sample")?;
        validate_finite(record, "orientation sample")?;

        Ok(Self::new(
            Quaternion::new(record[0], record[1], record[2], record[3]),
            Quaternion::new(record[4], record[5], record[6], record[7]),
        ))
    }
}

impl From<OrientationSample> for [f64; SAMPLE_LEN] {
    fn from(sample: OrientationSample) -> Self {
        let [tw, tx, ty, tz] = sample.tracker.to_array();
        let [cw, cx, cy, cz] = sample.calibrator.to_array();
        [tw, tx, ty, tz, cw, cx, cy, cz]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrientError;
    use approx::assert_abs_diff_eq;

    const CALIBRATOR: [f64; 4] = [-0.7151, 0.016, 0.0146, 0.6986];
    const TRACKER: [f64; 4] = [-0.1321, -0.6958, -0.6965, 0.1149];

    fn reference_sample() -> OrientationSample {
        OrientationSample::new(Quaternion::from(TRACKER), Quaternion::from(CALIBRATOR))
    }

    #[test]
    fn test_reference_pair_is_deterministic() {
        let sample = reference_sample();
        let first = sample.relative_euler(AxisConvention::Sxyz).unwrap();
        for _ in 0..10 {
            assert_eq!(sample.relative_euler(AxisConvention::Sxyz).unwrap(), first);
        }
    }

    #[test]
    fn test_reference_pair_values() {
        let sample = reference_sample();
        let rel = sample.relative_orientation().unwrap();
        assert_abs_diff_eq!(
            rel,
            Quaternion::new(0.153449, 0.011429, 0.988028, 0.011107),
            epsilon = 1e-5
        );

        let angles = sample.relative_euler(AxisConvention::Sxyz).unwrap().angles;
        let expected = [3.114879, 0.307807, 3.114314];
        for (a, e) in angles.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{angles:?}");
        }
    }

    #[test]
    fn test_reference_pair_euler_round_trip() {
        let angles = reference_sample()
            .relative_euler(AxisConvention::Sxyz)
            .unwrap();
        let again = angles
            .to_quaternion()
            .unwrap()
            .to_euler(AxisConvention::Sxyz)
            .unwrap();
        for (a, b) in angles.angles.iter().zip(again.angles.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_string_convention_matches_enum() {
        let sample = reference_sample();
        let rel = sample.relative_orientation().unwrap();
        assert_eq!(
            crate::euler::to_euler(&rel, "sxyz").unwrap(),
            sample.relative_euler(AxisConvention::Sxyz).unwrap()
        );
    }

    #[test]
    fn test_identical_readings_give_identity() {
        let q = Quaternion::from(CALIBRATOR);
        let sample = OrientationSample::new(q, q);
        let angles = sample.relative_euler(AxisConvention::Sxyz).unwrap().angles;
        assert!(angles.iter().all(|a| a.abs() < 1e-12));
    }

    #[test]
    fn test_from_record() {
        let record = [
            TRACKER[0],
            TRACKER[1],
            TRACKER[2],
            TRACKER[3],
            CALIBRATOR[0],
            CALIBRATOR[1],
            CALIBRATOR[2],
            CALIBRATOR[3],
        ];
        let sample = OrientationSample::try_from(&record[..]).unwrap();
        assert_eq!(sample, reference_sample());

        let flat: [f64; SAMPLE_LEN] = sample.into();
        assert_eq!(flat, record);
    }

    #[test]
    fn test_from_record_wrong_length() {
        let record = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        assert!(matches!(
            OrientationSample::try_from(&record[..]),
            Err(OrientError::ShapeMismatch {
                expected: 8,
                actual: 7,
                ..
            })
        ));
    }

    #[test]
    fn test_from_record_non_finite() {
        let record = [1.0, 0.0, 0.0, 0.0, 1.0, f64::INFINITY, 0.0, 0.0];
        assert!(matches!(
            OrientationSample::try_from(&record[..]),
            Err(OrientError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_zero_calibrator_fails() {
        let sample = OrientationSample::new(Quaternion::identity(), Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert!(matches!(
            sample.relative_orientation(),
            Err(OrientError::DivideByZero { .. })
        ));
    }
}
