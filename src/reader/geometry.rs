use std::io::Read;

use crate::common::{GeometryTypeCode, WkbGeometryType};
use crate::error::{EwkbError, EwkbResult};
use crate::reader::EwkbReader;
use crate::trait_::{BodyMut, Geometry};

/// Decode one EWKB geometry from `reader` into `geom`.
///
/// The stream is consumed as byte order marker, type code, optional SRID, then body. Bytes
/// after the body are left unread. If this returns an error, `geom` may be partially
/// overwritten and should be discarded.
pub fn read_ewkb<R: Read, G: Geometry + ?Sized>(reader: &mut R, geom: &mut G) -> EwkbResult<()> {
    let mut reader = EwkbReader::from_marker(reader)?;

    let raw_type_code = reader.read_u32("type code")?;
    let type_code = GeometryTypeCode::unpack(raw_type_code);
    log::trace!(
        "EWKB header: byte order {:?}, base kind {}, dimension {}, srid {}",
        reader.byte_order(),
        type_code.base_kind,
        type_code.dimension,
        type_code.has_srid
    );

    if type_code.has_srid {
        let slot = geom.srid_mut().ok_or(EwkbError::UnexpectedSrid {
            type_code: raw_type_code,
        })?;
        *slot = reader.read_i32("srid")?;
    }

    let unsupported = || EwkbError::UnsupportedGeometryType {
        found: type_code.base_kind,
        expected: G::GEOMETRY_TYPE,
    };

    match (type_code.geometry_type(), geom.body_mut()) {
        (Some(WkbGeometryType::Point), BodyMut::Fixed(body)) => {
            check_dimension::<G>(&type_code)?;
            body.read_fixed(&mut reader)
        }
        (Some(WkbGeometryType::LineString), BodyMut::Variable(body)) => {
            check_dimension::<G>(&type_code)?;
            let count = reader.read_u32("element count")?;
            body.read_elements(&mut reader, count)
        }
        _ => Err(unsupported()),
    }
}

fn check_dimension<G: Geometry + ?Sized>(type_code: &GeometryTypeCode) -> EwkbResult<()> {
    if type_code.dimension != G::DIMENSION {
        return Err(EwkbError::DimensionMismatch {
            expected: G::DIMENSION,
            found: type_code.dimension,
        });
    }
    Ok(())
}
