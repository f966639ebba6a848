//! Line strings: an ordered sequence of coordinate tuples plus an optional SRID.

pub use scalar::LineString;

mod scalar;

use crate::coord::{Xy, Xym, Xyz, Xyzm};
use crate::srid::{NoSrid, Srid};

/// A 2D line string.
pub type LineStringXY = LineString<Xy, NoSrid>;
/// A line string with elevation.
pub type LineStringXYZ = LineString<Xyz, NoSrid>;
/// A line string with a measure.
pub type LineStringXYM = LineString<Xym, NoSrid>;
/// A line string with elevation and a measure.
pub type LineStringXYZM = LineString<Xyzm, NoSrid>;
/// A 2D line string with an SRID.
pub type SridLineStringXY = LineString<Xy, Srid>;
/// A line string with elevation and an SRID.
pub type SridLineStringXYZ = LineString<Xyz, Srid>;
/// A line string with a measure and an SRID.
pub type SridLineStringXYM = LineString<Xym, Srid>;
/// A line string with elevation, a measure and an SRID.
pub type SridLineStringXYZM = LineString<Xyzm, Srid>;
