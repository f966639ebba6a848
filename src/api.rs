//! Whole-buffer entry points.

use crate::error::EwkbResult;
use crate::io::hex::{decode_hex, encode_hex};
use crate::reader::read_ewkb;
use crate::trait_::Geometry;
use crate::writer::write_ewkb;

/// Decode an EWKB buffer into a new geometry of type `G`.
///
/// Bytes after the geometry's body are ignored.
pub fn from_ewkb<G: Geometry + Default>(buf: &[u8]) -> EwkbResult<G> {
    let mut geom = G::default();
    read_ewkb(&mut &buf[..], &mut geom)?;
    Ok(geom)
}

/// Encode a geometry as little-endian EWKB.
pub fn to_ewkb<G: Geometry>(geom: &G) -> EwkbResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(geom.wkb_size());
    write_ewkb(&mut buf, geom)?;
    Ok(buf)
}

/// Decode a hex-encoded EWKB string, as printed by PostGIS.
pub fn from_hex_ewkb<G: Geometry + Default>(hex: &str) -> EwkbResult<G> {
    from_ewkb(&decode_hex(hex.as_bytes())?)
}

/// Encode a geometry as a hex-encoded EWKB string.
pub fn to_hex_ewkb<G: Geometry>(geom: &G) -> EwkbResult<String> {
    Ok(encode_hex(&to_ewkb(geom)?))
}

/// Construct a geometry from EWKB.
pub trait FromEwkb: Sized {
    fn from_ewkb(buf: &[u8]) -> EwkbResult<Self>;

    fn from_hex_ewkb(hex: &str) -> EwkbResult<Self> {
        Self::from_ewkb(&decode_hex(hex.as_bytes())?)
    }
}

impl<G: Geometry + Default> FromEwkb for G {
    fn from_ewkb(buf: &[u8]) -> EwkbResult<Self> {
        from_ewkb(buf)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xy;
    use crate::error::EwkbError;
    use crate::linestring::{LineStringXY, SridLineStringXY};
    use crate::point::{PointXY, SridPointXY};

    #[test]
    fn postgis_hex() {
        // SELECT 'SRID=4326;POINT(10 -20)'::geometry
        let point: SridPointXY =
            from_hex_ewkb("0101000020E6100000000000000000244000000000000034C0").unwrap();
        assert_eq!(point, SridPointXY::new_with_srid(Xy::new(10., -20.), 4326));
        assert_eq!(
            to_hex_ewkb(&point).unwrap(),
            "0101000020E6100000000000000000244000000000000034C0"
        );

        // SELECT 'LINESTRING (10 -20, 0 -0.5)'::geometry
        let hex = "010200000002000000000000000000244000000000000034C00000000000000000000000000000E0BF";
        let line = LineStringXY::from_hex_ewkb(hex).unwrap();
        assert_eq!(line.coords(), &[Xy::new(10., -20.), Xy::new(0., -0.5)]);
        assert_eq!(to_hex_ewkb(&line).unwrap(), hex);
    }

    #[test]
    fn srid_line_string_hex() {
        let line = SridLineStringXY::new_with_srid(vec![Xy::new(10., -20.), Xy::new(0., -0.5)], 4326);
        assert_eq!(
            to_hex_ewkb(&line).unwrap(),
            "0102000020E610000002000000000000000000244000000000000034C00000000000000000000000000000E0BF"
        );
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut buf = to_ewkb(&PointXY::new(Xy::new(1., 2.))).unwrap();
        buf.extend_from_slice(&[0xAA, 0xBB]);
        let point = PointXY::from_ewkb(&buf).unwrap();
        assert_eq!(point.coord(), Xy::new(1., 2.));
    }

    #[test]
    fn malformed_hex() {
        assert!(matches!(
            from_hex_ewkb::<PointXY>("0101000"),
            Err(EwkbError::MalformedTransportEncoding(_))
        ));
    }
}
