use std::io::Write;

use crate::error::EwkbResult;
use crate::trait_::Geometry;
use crate::writer::EwkbWriter;

/// Encode a geometry as little-endian EWKB.
///
/// The type code is derived from the geometry's static shape: its base kind, its dimension
/// and whether its type carries an SRID.
pub fn write_ewkb<W: Write, G: Geometry + ?Sized>(writer: &mut W, geom: &G) -> EwkbResult<()> {
    let mut writer = EwkbWriter::new(writer);
    let type_code = geom.type_code();
    log::trace!(
        "Writing EWKB: base kind {}, dimension {}, srid {:?}",
        type_code.base_kind,
        type_code.dimension,
        geom.srid()
    );

    writer.write_marker()?;
    writer.write_u32(type_code.pack())?;
    if let Some(srid) = geom.srid() {
        writer.write_i32(srid)?;
    }
    geom.write_body(&mut writer)
}
