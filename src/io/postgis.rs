//! Bind points and line strings to PostGIS `geometry` columns through [`sqlx`].
//!
//! Postgres sends `geometry` as raw EWKB in the binary protocol and as hex-encoded EWKB in
//! the text protocol; both are decoded. Values are always sent as raw little-endian EWKB.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueFormat, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::coord::Coord;
use crate::linestring::LineString;
use crate::point::Point;
use crate::reader::read_ewkb;
use crate::trait_::{Geometry, ScanValue, SridSlot};
use crate::writer::write_ewkb;

/// The Postgres type name of PostGIS geometries.
pub const GEOMETRY_TYPE_NAME: &str = "geometry";

fn decode_geometry<G: Geometry + Default>(value: PgValueRef<'_>) -> Result<G, BoxDynError> {
    let mut geom = G::default();
    match value.format() {
        PgValueFormat::Binary => {
            log::debug!("Decoding binary EWKB into {:?}", G::GEOMETRY_TYPE);
            read_ewkb(&mut value.as_bytes()?, &mut geom)?;
        }
        PgValueFormat::Text => {
            log::debug!("Decoding hex EWKB into {:?}", G::GEOMETRY_TYPE);
            geom.scan(ScanValue::Text(value.as_str()?))?;
        }
    }
    Ok(geom)
}

fn encode_geometry<G: Geometry>(geom: &G, buf: &mut Vec<u8>) -> IsNull {
    let start = buf.len();
    match write_ewkb(buf, geom) {
        Ok(()) => IsNull::No,
        Err(err) => {
            // Encode cannot report failure, so send NULL rather than a partial value
            log::error!("Failed to encode {:?} as EWKB: {err}", G::GEOMETRY_TYPE);
            buf.truncate(start);
            IsNull::Yes
        }
    }
}

macro_rules! impl_sqlx {
    ($struct_name:ident) => {
        impl<C: Coord, S: SridSlot> Type<Postgres> for $struct_name<C, S> {
            fn type_info() -> <Postgres as sqlx::Database>::TypeInfo {
                PgTypeInfo::with_name(GEOMETRY_TYPE_NAME)
            }
        }

        impl<'r, C: Coord, S: SridSlot> Decode<'r, Postgres> for $struct_name<C, S> {
            fn decode(
                value: <Postgres as sqlx::database::HasValueRef<'r>>::ValueRef,
            ) -> Result<Self, BoxDynError> {
                decode_geometry(value)
            }
        }

        impl<'q, C: Coord, S: SridSlot> Encode<'q, Postgres> for $struct_name<C, S> {
            fn encode_by_ref(
                &self,
                buf: &mut <Postgres as sqlx::database::HasArguments<'q>>::ArgumentBuffer,
            ) -> IsNull {
                encode_geometry(self, buf)
            }

            fn size_hint(&self) -> usize {
                self.wkb_size()
            }
        }
    };
}

impl_sqlx!(Point);
impl_sqlx!(LineString);

#[cfg(test)]
mod test {
    use sqlx::TypeInfo;

    use super::*;
    use crate::coord::Xy;
    use crate::linestring::SridLineStringXY;
    use crate::point::PointXYZ;

    #[test]
    fn type_name() {
        assert_eq!(PointXYZ::type_info().name(), "geometry");
        assert_eq!(SridLineStringXY::type_info().name(), "geometry");
    }

    #[test]
    fn encode_writes_raw_ewkb() {
        let line = SridLineStringXY::new_with_srid(vec![Xy::new(10., -20.)], 4326);
        let mut buf = vec![];
        assert!(matches!(encode_geometry(&line, &mut buf), IsNull::No));
        assert_eq!(buf, crate::api::to_ewkb(&line).unwrap());
    }
}
