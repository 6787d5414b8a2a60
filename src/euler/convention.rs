//! The 24 Euler axis conventions.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::{OrientError, OrientResult};

/// Reference frame of an axis convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// Extrinsic rotations about fixed axes (`s` prefix).
    Static,
    /// Intrinsic rotations about the moving axes (`r` prefix).
    Rotating,
}

/// Decoded form of an axis convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisTuple {
    /// Index of the first axis, 0 = x, 1 = y, 2 = z.
    pub first_axis: usize,
    /// Whether the axis triple is an odd permutation of x, y, z.
    pub parity: bool,
    /// Whether the first and last axis coincide.
    pub repetition: bool,
    /// Static (extrinsic) or rotating (intrinsic) frame.
    pub frame: Frame,
}

impl AxisTuple {
    const fn new(first_axis: usize, parity: u8, repetition: u8, frame: Frame) -> Self {
        Self {
            first_axis,
            parity: parity == 1,
            repetition: repetition == 1,
            frame,
        }
    }
}

/// Euler axis convention.
///
/// The first letter selects the frame (`S` static, `R` rotating); the next
/// three name the axes in order. Any other name is rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisConvention {
    #[default]
    Sxyz,
    Sxyx,
    Sxzy,
    Sxzx,
    Syzx,
    Syzy,
    Syxz,
    Syxy,
    Szxy,
    Szxz,
    Szyx,
    Szyz,
    Rzyx,
    Rxyx,
    Ryzx,
    Rxzx,
    Rxzy,
    Ryzy,
    Rzxy,
    Ryxy,
    Ryxz,
    Rzxz,
    Rxyz,
    Rzyz,
}

impl AxisConvention {
    /// Every recognized convention.
    pub const ALL: [AxisConvention; 24] = [
        Self::Sxyz,
        Self::Sxyx,
        Self::Sxzy,
        Self::Sxzx,
        Self::Syzx,
        Self::Syzy,
        Self::Syxz,
        Self::Syxy,
        Self::Szxy,
        Self::Szxz,
        Self::Szyx,
        Self::Szyz,
        Self::Rzyx,
        Self::Rxyx,
        Self::Ryzx,
        Self::Rxzx,
        Self::Rxzy,
        Self::Ryzy,
        Self::Rzxy,
        Self::Ryxy,
        Self::Ryxz,
        Self::Rzxz,
        Self::Rxyz,
        Self::Rzyz,
    ];

    /// Lowercase name, e.g. `"sxyz"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sxyz => "sxyz",
            Self::Sxyx => "sxyx",
            Self::Sxzy => "sxzy",
            Self::Sxzx => "sxzx",
            Self::Syzx => "syzx",
            Self::Syzy => "syzy",
            Self::Syxz => "syxz",
            Self::Syxy => "syxy",
            Self::Szxy => "szxy",
            Self::Szxz => "szxz",
            Self::Szyx => "szyx",
            Self::Szyz => "szyz",
            Self::Rzyx => "rzyx",
            Self::Rxyx => "rxyx",
            Self::Ryzx => "ryzx",
            Self::Rxzx => "rxzx",
            Self::Rxzy => "rxzy",
            Self::Ryzy => "ryzy",
            Self::Rzxy => "rzxy",
            Self::Ryxy => "ryxy",
            Self::Ryxz => "ryxz",
            Self::Rzxz => "rzxz",
            Self::Rxyz => "rxyz",
            Self::Rzyz => "rzyz",
        }
    }

    /// Decode into `(first_axis, parity, repetition, frame)`.
    ///
    /// A rotating-frame convention decodes to the static tuple of its reversed
    /// axis order, so `rzyx` shares `first_axis = 0` with `sxyz`.
    pub const fn tuple(&self) -> AxisTuple {
        use Frame::{Rotating as R, Static as S};
        match self {
            Self::Sxyz => AxisTuple::new(0, 0, 0, S),
            Self::Sxyx => AxisTuple::new(0, 0, 1, S),
            Self::Sxzy => AxisTuple::new(0, 1, 0, S),
            Self::Sxzx => AxisTuple::new(0, 1, 1, S),
            Self::Syzx => AxisTuple::new(1, 0, 0, S),
            Self::Syzy => AxisTuple::new(1, 0, 1, S),
            Self::Syxz => AxisTuple::new(1, 1, 0, S),
            Self::Syxy => AxisTuple::new(1, 1, 1, S),
            Self::Szxy => AxisTuple::new(2, 0, 0, S),
            Self::Szxz => AxisTuple::new(2, 0, 1, S),
            Self::Szyx => AxisTuple::new(2, 1, 0, S),
            Self::Szyz => AxisTuple::new(2, 1, 1, S),
            Self::Rzyx => AxisTuple::new(0, 0, 0, R),
            Self::Rxyx => AxisTuple::new(0, 0, 1, R),
            Self::Ryzx => AxisTuple::new(0, 1, 0, R),
            Self::Rxzx => AxisTuple::new(0, 1, 1, R),
            Self::Rxzy => AxisTuple::new(1, 0, 0, R),
            Self::Ryzy => AxisTuple::new(1, 0, 1, R),
            Self::Rzxy => AxisTuple::new(1, 1, 0, R),
            Self::Ryxy => AxisTuple::new(1, 1, 1, R),
            Self::Ryxz => AxisTuple::new(2, 0, 0, R),
            Self::Rzxz => AxisTuple::new(2, 0, 1, R),
            Self::Rxyz => AxisTuple::new(2, 1, 0, R),
            Self::Rzyz => AxisTuple::new(2, 1, 1, R),
        }
    }

    /// Inverse of [`AxisConvention::tuple`].
    ///
    /// # Errors
    ///
    /// [`OrientError::InvalidConvention`] if the tuple is not one of the 24.
    pub fn from_tuple(tuple: AxisTuple) -> OrientResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.tuple() == tuple)
            .ok_or_else(|| OrientError::InvalidConvention {
                name: format!("{tuple:?}"),
            })
    }
}

impl fmt::Display for AxisConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisConvention {
    type Err = OrientError;

    /// Case-insensitive parse of one of the 24 convention names.
    fn from_str(s: &str) -> OrientResult<Self> {
        let lower = s.to_ascii_lowercase();
        let convention = Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| OrientError::InvalidConvention {
                name: s.to_string(),
            })?;
        trace!("decoded axis convention {s:?} as {:?}", convention.tuple());
        Ok(convention)
    }
}

impl TryFrom<&str> for AxisConvention {
    type Error = OrientError;

    fn try_from(s: &str) -> OrientResult<Self> {
        s.parse()
    }
}
