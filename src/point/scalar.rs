use serde::{Deserialize, Serialize};

use crate::common::WkbGeometryType;
use crate::coord::{Coord, Xy};
use crate::dimension::Dimension;
use crate::error::EwkbResult;
use crate::reader::EwkbReader;
use crate::srid::{NoSrid, Srid};
use crate::trait_::{Body, BodyMut, FixedBody, Geometry, SridSlot};
use crate::writer::EwkbWriter;

/// A point geometry.
///
/// `C` fixes the coordinate dimension and `S` whether an SRID is carried. See the aliases in
/// [crate::point] for the eight concrete shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<C = Xy, S = NoSrid> {
    coord: C,
    srid: S,
}

impl<C: Coord> Point<C, NoSrid> {
    pub fn new(coord: C) -> Self {
        Self {
            coord,
            srid: NoSrid,
        }
    }
}

impl<C: Coord> Point<C, Srid> {
    pub fn new_with_srid(coord: C, srid: impl Into<Srid>) -> Self {
        Self {
            coord,
            srid: srid.into(),
        }
    }
}

impl<C: Coord, S: SridSlot> Point<C, S> {
    pub fn from_parts(coord: C, srid: S) -> Self {
        Self { coord, srid }
    }

    pub fn coord(&self) -> C {
        self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.z()
    }

    pub fn m(&self) -> Option<f64> {
        self.coord.m()
    }

    /// The SRID, if this point's type carries one.
    pub fn srid(&self) -> Option<i32> {
        self.srid.get()
    }

    pub fn into_parts(self) -> (C, S) {
        (self.coord, self.srid)
    }
}

impl<C: Coord, S: SridSlot> FixedBody for Point<C, S> {
    fn read_fixed(&mut self, reader: &mut EwkbReader<'_>) -> EwkbResult<()> {
        self.coord = C::read(reader)?;
        Ok(())
    }

    fn write_fixed(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        self.coord.write(writer)
    }

    fn fixed_size(&self) -> usize {
        C::wkb_size()
    }
}

impl<C: Coord, S: SridSlot> Geometry for Point<C, S> {
    const GEOMETRY_TYPE: WkbGeometryType = WkbGeometryType::Point;
    const DIMENSION: Dimension = C::DIMENSION;
    const HAS_SRID: bool = S::HAS_SRID;

    fn srid(&self) -> Option<i32> {
        self.srid.get()
    }

    fn srid_mut(&mut self) -> Option<&mut i32> {
        self.srid.get_mut()
    }

    fn body(&self) -> Body<'_> {
        Body::Fixed(self)
    }

    fn body_mut(&mut self) -> BodyMut<'_> {
        BodyMut::Fixed(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::{from_ewkb, to_ewkb};
    use crate::common::GeometryTypeCode;
    use crate::error::EwkbError;
    use crate::point::*;
    use crate::test::point::{xy, xym, xyz, xyzm};

    fn round_trip<G: Geometry + Default + PartialEq + std::fmt::Debug>(geom: G) {
        let buf = to_ewkb(&geom).unwrap();
        let decoded: G = from_ewkb(&buf).unwrap();
        assert_eq!(decoded, geom);

        let value = geom.value().unwrap();
        let mut scanned = G::default();
        scanned.scan(value.as_str().into()).unwrap();
        assert_eq!(scanned, geom);
    }

    #[test]
    fn round_trip_all_shapes() {
        round_trip(PointXY::new(xy()));
        round_trip(PointXYZ::new(xyz()));
        round_trip(PointXYM::new(xym()));
        round_trip(PointXYZM::new(xyzm()));
        round_trip(SridPointXY::new_with_srid(xy(), 4326));
        round_trip(SridPointXYZ::new_with_srid(xyz(), -1));
        round_trip(SridPointXYM::new_with_srid(xym(), 0));
        round_trip(SridPointXYZM::new_with_srid(xyzm(), i32::MAX));
    }

    #[test]
    fn srid_4326() {
        let point = SridPointXY::new_with_srid(Xy::new(-122.4194, 37.7749), 4326);
        let value = point.value().unwrap();

        let mut scanned = SridPointXY::default();
        scanned.scan(value.as_bytes().into()).unwrap();
        assert_eq!(scanned.srid(), Some(4326));
        assert_eq!(scanned.x(), -122.4194);
        assert_eq!(scanned.y(), 37.7749);
    }

    #[test]
    fn type_codes() {
        let codes = [
            (PointXY::default().type_code().pack(), 0x0000_0001),
            (PointXYZ::default().type_code().pack(), 0x8000_0001),
            (PointXYM::default().type_code().pack(), 0x4000_0001),
            (PointXYZM::default().type_code().pack(), 0xC000_0001),
            (SridPointXY::default().type_code().pack(), 0x2000_0001),
            (SridPointXYZ::default().type_code().pack(), 0xA000_0001),
            (SridPointXYM::default().type_code().pack(), 0x6000_0001),
            (SridPointXYZM::default().type_code().pack(), 0xE000_0001),
        ];
        for (actual, expected) in codes {
            assert_eq!(actual, expected);
            assert_eq!(
                GeometryTypeCode::unpack(actual).geometry_type(),
                Some(WkbGeometryType::Point)
            );
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(PointXY::default().wkb_size(), 21);
        assert_eq!(PointXYZ::default().wkb_size(), 29);
        assert_eq!(SridPointXYM::default().wkb_size(), 33);
        assert_eq!(SridPointXYZM::default().wkb_size(), 41);
    }

    #[test]
    fn srid_point_into_plain_point_fails() {
        let value = SridPointXYZ::new_with_srid(xyz(), 4326).value().unwrap();
        let mut point = PointXYZ::default();
        assert!(matches!(
            point.scan(value.as_str().into()),
            Err(EwkbError::UnexpectedSrid { .. })
        ));
    }

    #[test]
    fn accessors() {
        let point = SridPointXYZM::new_with_srid(Xyzm::new(1., 2., 3., 4.), 3857);
        assert_eq!(point.z(), Some(3.));
        assert_eq!(point.m(), Some(4.));
        let (coord, srid) = point.into_parts();
        assert_eq!(coord, Xyzm::new(1., 2., 3., 4.));
        assert_eq!(srid, Srid(3857));

        let point = PointXY::from_parts(Xy::new(5., 6.), NoSrid);
        assert_eq!(point.srid(), None);
        assert_eq!(point.z(), None);
    }

    #[test]
    fn serde() {
        let point = SridPointXY::new_with_srid(Xy::new(1.5, -2.), 4326);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"coord":{"x":1.5,"y":-2.0},"srid":4326}"#);
        let parsed: SridPointXY = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }
}
