//! The capabilities a geometry value exposes to the EWKB framing code.
//!
//! Every value implements [Geometry]. Its body is reached through exactly one of
//! [FixedBody] (a single coordinate tuple) or [VariableBody] (a counted run of tuples), and
//! its SRID through [SridSlot], whose presence is fixed by the value's type.

use crate::common::{GeometryTypeCode, WkbGeometryType};
use crate::dimension::Dimension;
use crate::error::{EwkbError, EwkbResult};
use crate::io::hex::{decode_hex, encode_hex};
use crate::reader::{read_ewkb, EwkbReader};
use crate::writer::{write_ewkb, EwkbWriter};

/// Storage for an optional spatial reference id.
///
/// Whether a geometry can carry an SRID is a property of its type: [crate::srid::Srid] has
/// room for one, [crate::srid::NoSrid] does not.
pub trait SridSlot: Copy + Default + std::fmt::Debug + PartialEq {
    /// Whether this slot stores an SRID.
    const HAS_SRID: bool;

    /// The stored SRID, if this slot has one.
    fn get(&self) -> Option<i32>;

    /// Mutable access to the stored SRID, if this slot has one.
    fn get_mut(&mut self) -> Option<&mut i32>;
}

/// A body made of one coordinate tuple.
pub trait FixedBody {
    /// Read the coordinate fields in X, Y, \[Z\], \[M\] order.
    fn read_fixed(&mut self, reader: &mut EwkbReader<'_>) -> EwkbResult<()>;

    /// Write the coordinate fields in X, Y, \[Z\], \[M\] order.
    fn write_fixed(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()>;

    /// Byte length of the encoded body.
    fn fixed_size(&self) -> usize;
}

/// A body made of a counted sequence of coordinate tuples.
///
/// The element count itself is framed by [Geometry::write_body] and the decode orchestrator.
pub trait VariableBody {
    fn element_count(&self) -> usize;

    /// Write every element, in order, without the leading count.
    fn write_elements(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()>;

    /// Replace the current contents with `count` elements read in order.
    fn read_elements(&mut self, reader: &mut EwkbReader<'_>, count: u32) -> EwkbResult<()>;

    /// Byte length of all elements, without the leading count.
    fn elements_size(&self) -> usize;
}

/// Read access to the body of a geometry.
pub enum Body<'a> {
    Fixed(&'a dyn FixedBody),
    Variable(&'a dyn VariableBody),
}

/// Write access to the body of a geometry.
pub enum BodyMut<'a> {
    Fixed(&'a mut dyn FixedBody),
    Variable(&'a mut dyn VariableBody),
}

/// A value that can be framed as EWKB.
pub trait Geometry {
    /// Base kind written into the type code.
    const GEOMETRY_TYPE: WkbGeometryType;

    /// Coordinate dimension written into the type code.
    const DIMENSION: Dimension;

    /// Whether the value carries an SRID, written as the SRID flag of the type code.
    const HAS_SRID: bool;

    /// The SRID, if the value carries one.
    fn srid(&self) -> Option<i32>;

    /// Mutable access to the SRID, or `None` if the value cannot hold one.
    fn srid_mut(&mut self) -> Option<&mut i32>;

    fn body(&self) -> Body<'_>;

    fn body_mut(&mut self) -> BodyMut<'_>;

    /// The type code this value is written with.
    fn type_code(&self) -> GeometryTypeCode {
        GeometryTypeCode::new(
            Self::GEOMETRY_TYPE.into(),
            Self::DIMENSION,
            Self::HAS_SRID,
        )
    }

    /// Write everything after the type code and SRID.
    fn write_body(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        match self.body() {
            Body::Fixed(body) => body.write_fixed(writer),
            Body::Variable(body) => {
                let count =
                    u32::try_from(body.element_count()).map_err(|_| EwkbError::Overflow)?;
                writer.write_u32(count)?;
                body.write_elements(writer)
            }
        }
    }

    /// The number of bytes [write_ewkb] produces for this value.
    fn wkb_size(&self) -> usize {
        let header = 1 + 4;
        let srid = if Self::HAS_SRID { 4 } else { 0 };
        let body = match self.body() {
            Body::Fixed(body) => body.fixed_size(),
            Body::Variable(body) => 4 + body.elements_size(),
        };
        header + srid + body
    }

    /// Populate this value from a hex-encoded EWKB database value.
    ///
    /// On error the value is left in an unspecified state and should be discarded.
    fn scan(&mut self, value: ScanValue<'_>) -> EwkbResult<()>
    where
        Self: Sized,
    {
        let bytes = match value {
            ScanValue::Text(text) => decode_hex(text.as_bytes())?,
            ScanValue::Bytes(bytes) => decode_hex(bytes)?,
        };
        read_ewkb(&mut bytes.as_slice(), self)
    }

    /// Encode this value as a hex-encoded EWKB database value.
    fn value(&self) -> EwkbResult<String>
    where
        Self: Sized,
    {
        let mut buf: Vec<u8> = Vec::with_capacity(self.wkb_size());
        write_ewkb(&mut buf, self)?;
        Ok(encode_hex(&buf))
    }
}

/// A database value handed to [Geometry::scan].
///
/// Drivers deliver geometry columns either as text or as the raw bytes of that text; both
/// hold hex-encoded EWKB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanValue<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for ScanValue<'a> {
    fn from(value: &'a str) -> Self {
        ScanValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for ScanValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        ScanValue::Bytes(value)
    }
}
