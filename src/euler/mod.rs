//! Euler angle conversion under the 24 standard axis conventions.
//!
//! Conversions go through the rotation matrix form. A convention decodes to
//! `(first_axis, parity, repetition, frame)`; the working axis triple is
//! derived from the first axis and parity, repeated-axis (proper Euler) and
//! Tait-Bryan conventions take separate extraction branches, and the frame
//! decides whether the first and last angle are swapped.
//!
//! ```text
//! static  (s): sxyz sxyx sxzy sxzx syzx syzy syxz syxy szxy szxz szyx szyz
//! rotating(r): rzyx rxyx ryzx rxzx rxzy ryzy rzxy ryxy ryxz rzxz rxyz rzyz
//! ```

mod convention;
mod convert;

pub use convention::{AxisConvention, AxisTuple, Frame};
pub use convert::{EULER_EPSILON, EulerAngles, from_euler, to_euler};
