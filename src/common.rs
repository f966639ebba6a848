use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::dimension::Dimension;
use crate::error::{EwkbError, EwkbResult};
use crate::reader::Endianness;

/// Type code flag announcing a Z ordinate.
pub const Z_FLAG: u32 = 0x8000_0000;

/// Type code flag announcing an M ordinate.
pub const M_FLAG: u32 = 0x4000_0000;

/// Type code flag announcing a trailing SRID.
pub const SRID_FLAG: u32 = 0x2000_0000;

/// Bits of the type code holding the base kind.
pub const BASE_KIND_MASK: u32 = 0x1FFF_FFFF;

/// The base geometry kinds of the (E)WKB type code space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbGeometryType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

/// An unpacked EWKB type code.
///
/// The 32-bit word packs the base kind into its low 29 bits and three flags into the high
/// bits: Z (bit 31), M (bit 30) and SRID (bit 29).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryTypeCode {
    /// Base kind, `code & 0x1FFFFFFF`.
    pub base_kind: u32,
    /// Coordinate dimension derived from the Z and M flags.
    pub dimension: Dimension,
    /// Whether an SRID follows the type code.
    pub has_srid: bool,
}

impl GeometryTypeCode {
    /// Create a new type code.
    ///
    /// `base_kind` must be below `0x20000000`, otherwise [Self::pack] loses bits.
    pub fn new(base_kind: u32, dimension: Dimension, has_srid: bool) -> Self {
        Self {
            base_kind,
            dimension,
            has_srid,
        }
    }

    /// Split a raw type code into base kind and flags.
    ///
    /// Never fails; an unknown base kind is reported when the body is dispatched.
    pub fn unpack(code: u32) -> Self {
        Self {
            base_kind: code & BASE_KIND_MASK,
            dimension: Dimension::from_flags(code & Z_FLAG != 0, code & M_FLAG != 0),
            has_srid: code & SRID_FLAG != 0,
        }
    }

    /// Combine base kind and flags into a raw type code.
    pub fn pack(&self) -> u32 {
        let mut code = self.base_kind;
        if self.dimension.has_z() {
            code |= Z_FLAG;
        }
        if self.dimension.has_m() {
            code |= M_FLAG;
        }
        if self.has_srid {
            code |= SRID_FLAG;
        }
        code
    }

    /// The named base kind, if the type code space defines one.
    pub fn geometry_type(&self) -> Option<WkbGeometryType> {
        WkbGeometryType::try_from_primitive(self.base_kind).ok()
    }

    /// Read the byte order marker and type code from the start of an EWKB buffer.
    ///
    /// Nothing past the type code is touched.
    pub fn from_buffer(buf: &[u8]) -> EwkbResult<Self> {
        let mut reader = Cursor::new(buf);
        let byte_order = reader
            .read_u8()
            .map_err(|err| EwkbError::from_read(err, "byte order"))?;
        let code = match Endianness::try_from(byte_order)? {
            Endianness::BigEndian => reader.read_u32::<BigEndian>(),
            Endianness::LittleEndian => reader.read_u32::<LittleEndian>(),
        }
        .map_err(|err| EwkbError::from_read(err, "type code"))?;
        Ok(Self::unpack(code))
    }
}

impl From<u32> for GeometryTypeCode {
    fn from(value: u32) -> Self {
        Self::unpack(value)
    }
}

impl From<GeometryTypeCode> for u32 {
    fn from(value: GeometryTypeCode) -> Self {
        value.pack()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DIMS: [Dimension; 4] = [
        Dimension::XY,
        Dimension::XYZ,
        Dimension::XYM,
        Dimension::XYZM,
    ];

    #[test]
    fn pack_unpack_round_trip() {
        for base_kind in [WkbGeometryType::Point, WkbGeometryType::LineString] {
            for dim in DIMS {
                for has_srid in [false, true] {
                    let code = GeometryTypeCode::new(base_kind.into(), dim, has_srid);
                    let raw = code.pack();
                    assert_eq!(raw & !(Z_FLAG | M_FLAG | SRID_FLAG | BASE_KIND_MASK), 0);
                    assert_eq!(GeometryTypeCode::unpack(raw), code);
                    assert_eq!(code.geometry_type(), Some(base_kind));
                }
            }
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(GeometryTypeCode::new(1, Dimension::XY, false).pack(), 0x0000_0001);
        assert_eq!(GeometryTypeCode::new(1, Dimension::XY, true).pack(), 0x2000_0001);
        assert_eq!(GeometryTypeCode::new(1, Dimension::XYZ, false).pack(), 0x8000_0001);
        assert_eq!(GeometryTypeCode::new(2, Dimension::XYM, false).pack(), 0x4000_0002);
        assert_eq!(GeometryTypeCode::new(2, Dimension::XYZM, true).pack(), 0xE000_0002);
    }

    #[test]
    fn unpack_any_word() {
        let code = GeometryTypeCode::unpack(0xFFFF_FFFF);
        assert_eq!(code.base_kind, BASE_KIND_MASK);
        assert_eq!(code.dimension, Dimension::XYZM);
        assert!(code.has_srid);
        assert_eq!(code.geometry_type(), None);

        let code = GeometryTypeCode::unpack(3);
        assert_eq!(code.geometry_type(), Some(WkbGeometryType::Polygon));
        assert!(!code.has_srid);
    }

    #[test]
    fn from_buffer() {
        // SRID=4326;POINT(10 -20), little endian
        let buf = [1, 1, 0, 0, 32, 230, 16, 0, 0];
        let code = GeometryTypeCode::from_buffer(&buf).unwrap();
        assert_eq!(code.geometry_type(), Some(WkbGeometryType::Point));
        assert!(code.has_srid);

        // LINESTRING Z, big endian
        let buf = [0, 0x80, 0, 0, 2];
        let code = GeometryTypeCode::from_buffer(&buf).unwrap();
        assert_eq!(code.geometry_type(), Some(WkbGeometryType::LineString));
        assert_eq!(code.dimension, Dimension::XYZ);
    }

    #[test]
    fn from_bad_buffer() {
        assert!(matches!(
            GeometryTypeCode::from_buffer(&[]),
            Err(EwkbError::Truncated { field: "byte order" })
        ));
        assert!(matches!(
            GeometryTypeCode::from_buffer(&[1, 1, 0]),
            Err(EwkbError::Truncated { field: "type code" })
        ));
        assert!(matches!(
            GeometryTypeCode::from_buffer(&[7, 1, 0, 0, 0]),
            Err(EwkbError::UnsupportedByteOrder(7))
        ));
    }
}
