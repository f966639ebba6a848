//! Convert to and from [`geo`] scalars.
//!
//! [`geo`] types are planar, so conversions out of 3D or measured values keep only X and Y.

use crate::coord::{Coord, Xy};
use crate::linestring::LineString;
use crate::point::Point;
use crate::srid::NoSrid;
use crate::trait_::SridSlot;

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &impl Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert any Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept and the SRID is dropped.
pub fn point_to_geo<C: Coord, S: SridSlot>(point: &Point<C, S>) -> geo::Point {
    geo::Point(coord_to_geo(&point.coord()))
}

/// Convert any LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept and the SRID is dropped.
pub fn line_string_to_geo<C: Coord, S: SridSlot>(
    line_string: &LineString<C, S>,
) -> geo::LineString {
    geo::LineString::new(
        line_string
            .coords()
            .iter()
            .map(|coord| coord_to_geo(coord))
            .collect(),
    )
}

impl From<geo::Coord> for Xy {
    fn from(value: geo::Coord) -> Self {
        Xy::new(value.x, value.y)
    }
}

impl From<geo::Point> for Xy {
    fn from(value: geo::Point) -> Self {
        value.0.into()
    }
}

impl From<Xy> for geo::Coord {
    fn from(value: Xy) -> Self {
        coord_to_geo(&value)
    }
}

impl From<geo::Point> for Point<Xy, NoSrid> {
    fn from(value: geo::Point) -> Self {
        Point::new(value.into())
    }
}

impl From<geo::LineString> for LineString<Xy, NoSrid> {
    fn from(value: geo::LineString) -> Self {
        value.0.into_iter().map(Xy::from).collect()
    }
}

impl<C: Coord, S: SridSlot> From<&Point<C, S>> for geo::Point {
    fn from(value: &Point<C, S>) -> Self {
        point_to_geo(value)
    }
}

impl<C: Coord, S: SridSlot> From<Point<C, S>> for geo::Point {
    fn from(value: Point<C, S>) -> Self {
        point_to_geo(&value)
    }
}

impl<C: Coord, S: SridSlot> From<&LineString<C, S>> for geo::LineString {
    fn from(value: &LineString<C, S>) -> Self {
        line_string_to_geo(value)
    }
}

impl<C: Coord, S: SridSlot> From<LineString<C, S>> for geo::LineString {
    fn from(value: LineString<C, S>) -> Self {
        line_string_to_geo(&value)
    }
}
