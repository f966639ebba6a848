//! Points: a single coordinate tuple plus an optional SRID.

pub use scalar::Point;

mod scalar;

use crate::coord::{Xy, Xym, Xyz, Xyzm};
use crate::srid::{NoSrid, Srid};

/// A 2D point.
pub type PointXY = Point<Xy, NoSrid>;
/// A point with elevation.
pub type PointXYZ = Point<Xyz, NoSrid>;
/// A point with a measure.
pub type PointXYM = Point<Xym, NoSrid>;
/// A point with elevation and a measure.
pub type PointXYZM = Point<Xyzm, NoSrid>;
/// A 2D point with an SRID.
pub type SridPointXY = Point<Xy, Srid>;
/// A point with elevation and an SRID.
pub type SridPointXYZ = Point<Xyz, Srid>;
/// A point with a measure and an SRID.
pub type SridPointXYM = Point<Xym, Srid>;
/// A point with elevation, a measure and an SRID.
pub type SridPointXYZM = Point<Xyzm, Srid>;
