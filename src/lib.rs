//! orientr - Quaternion Orientation Algebra
//!
//! orientr provides the numerical core for working with 3-D rotations: a
//! quaternion value type with Hamilton algebra, rotation-matrix conversion,
//! Euler angles under all 24 axis conventions, axis-angle and swing-twist
//! decomposition, and eigenvector-based averaging of orientation samples.
//! Everything is pure and synchronous over `f64` values.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        sample (tracker/calibrator relative pose)        │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌────────────┬─────────────▼────────────┬─────────────────┐
//! │   euler    │       axis_angle         │     average     │
//! │ (24 conv.) │ (axis-angle, swing-twist)│ (Markley mean)  │
//! └─────┬──────┴─────────────┬────────────┴────────┬────────┘
//!       │ matrix             │                     │ nalgebra eigen
//! ┌─────▼────────────────────▼─────────────────────▼────────┐
//! │        quaternion (value type, Hamilton algebra)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`quaternion`] - Value type, product, inverse, rotation, slerp
//! - [`matrix`] - Rotation matrix conversion and validation
//! - [`euler`] - Euler angle conversion under the 24 axis conventions
//! - [`axis_angle`] - Axis-angle, rotation vector and swing-twist forms
//! - [`average`] - Orientation averaging by the largest eigenvector
//! - [`sample`] - Paired tracker/calibrator readings
//! - [`error`] - Error type shared by all fallible operations
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `serde` | Serialize/Deserialize for value types | serde |
//!
//! # Example
//!
//! ```
//! use orientr::{AxisConvention, Quaternion};
//!
//! # fn main() -> orientr::OrientResult<()> {
//! let calibrator = Quaternion::new(-0.7151, 0.016, 0.0146, 0.6986);
//! let tracker = Quaternion::new(-0.1321, -0.6958, -0.6965, 0.1149);
//!
//! let relative = Quaternion::relative(&calibrator, &tracker)?;
//! let euler = relative.to_euler(AxisConvention::Sxyz)?;
//!
//! let back = euler.to_quaternion()?;
//! assert!((back.dot(&relative).abs() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub mod average;
pub mod axis_angle;
pub mod error;
pub mod euler;
pub mod matrix;
pub mod quaternion;
pub mod sample;
pub mod validation;

// Re-export main types for convenience
pub use average::{AverageOptions, AverageResult, SampleAxis, average, average_matrix, average_with};
pub use axis_angle::{AXIS_ANGLE_EPSILON, AxisAngle, SwingTwist};
pub use error::{OrientError, OrientResult};
pub use euler::{AxisConvention, AxisTuple, EULER_EPSILON, EulerAngles, Frame, from_euler, to_euler};
pub use matrix::{MatrixTolerance, RotationMatrix};
pub use quaternion::{COINCIDENT_DOT, Quaternion, Vector3};
pub use sample::{OrientationSample, SAMPLE_LEN};
