use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The coordinate dimension of a geometry.
///
/// Determines which ordinates each coordinate tuple carries, and therefore how many 8-byte
/// floats a tuple occupies on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Derive the dimension from independent Z and M flags.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (true, true) => Dimension::XYZM,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (false, false) => Dimension::XY,
        }
    }

    /// Whether coordinates carry an elevation.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates carry a measure.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}
