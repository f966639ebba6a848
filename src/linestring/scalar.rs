use serde::{Deserialize, Serialize};

use crate::common::WkbGeometryType;
use crate::coord::{Coord, Xy};
use crate::dimension::Dimension;
use crate::error::EwkbResult;
use crate::point::Point;
use crate::reader::EwkbReader;
use crate::srid::{NoSrid, Srid};
use crate::trait_::{Body, BodyMut, Geometry, SridSlot, VariableBody};
use crate::writer::EwkbWriter;

/// Upper bound on tuples reserved ahead of reading them.
///
/// The element count comes from the stream; a larger count grows the buffer as tuples
/// actually arrive.
const MAX_PREALLOCATED_COORDS: usize = 4096;

/// A line string geometry.
///
/// The SRID, if any, belongs to the whole line string; the tuples never carry their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString<C = Xy, S = NoSrid> {
    coords: Vec<C>,
    srid: S,
}

impl<C: Coord> LineString<C, NoSrid> {
    pub fn new(coords: Vec<C>) -> Self {
        Self {
            coords,
            srid: NoSrid,
        }
    }
}

impl<C: Coord> LineString<C, Srid> {
    pub fn new_with_srid(coords: Vec<C>, srid: impl Into<Srid>) -> Self {
        Self {
            coords,
            srid: srid.into(),
        }
    }
}

impl<C: Coord, S: SridSlot> LineString<C, S> {
    pub fn from_parts(coords: Vec<C>, srid: S) -> Self {
        Self { coords, srid }
    }

    pub fn coords(&self) -> &[C] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn push(&mut self, coord: C) {
        self.coords.push(coord)
    }

    /// The `i`th vertex as a point without an SRID.
    pub fn point(&self, i: usize) -> Option<Point<C>> {
        self.coords.get(i).copied().map(Point::new)
    }

    /// The SRID, if this line string's type carries one.
    pub fn srid(&self) -> Option<i32> {
        self.srid.get()
    }

    pub fn into_coords(self) -> Vec<C> {
        self.coords
    }
}

impl<C: Coord> FromIterator<C> for LineString<C, NoSrid> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<C: Coord, S: SridSlot> VariableBody for LineString<C, S> {
    fn element_count(&self) -> usize {
        self.coords.len()
    }

    fn write_elements(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        for coord in &self.coords {
            coord.write(writer)?;
        }
        Ok(())
    }

    fn read_elements(&mut self, reader: &mut EwkbReader<'_>, count: u32) -> EwkbResult<()> {
        let count = count as usize;
        self.coords.clear();
        self.coords.reserve(count.min(MAX_PREALLOCATED_COORDS));
        for _ in 0..count {
            self.coords.push(C::read(reader)?);
        }
        Ok(())
    }

    fn elements_size(&self) -> usize {
        self.coords.len() * C::wkb_size()
    }
}

impl<C: Coord, S: SridSlot> Geometry for LineString<C, S> {
    const GEOMETRY_TYPE: WkbGeometryType = WkbGeometryType::LineString;
    const DIMENSION: Dimension = C::DIMENSION;
    const HAS_SRID: bool = S::HAS_SRID;

    fn srid(&self) -> Option<i32> {
        self.srid.get()
    }

    fn srid_mut(&mut self) -> Option<&mut i32> {
        self.srid.get_mut()
    }

    fn body(&self) -> Body<'_> {
        Body::Variable(self)
    }

    fn body_mut(&mut self) -> BodyMut<'_> {
        BodyMut::Variable(self)
    }
}
