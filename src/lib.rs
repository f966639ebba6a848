//! A reader and writer for the Extended Well-Known Binary (EWKB) geometry encoding used by
//! PostGIS.
//!
//! Points and line strings are generic over their coordinate tuple ([coord::Xy],
//! [coord::Xyz], [coord::Xym], [coord::Xyzm]) and over whether they carry an SRID
//! ([srid::Srid] or [srid::NoSrid]), so each of the sixteen EWKB shapes is one concrete type.
//!
//! ```
//! use ewkb::coord::Xy;
//! use ewkb::point::SridPointXY;
//! use ewkb::{from_ewkb, to_ewkb};
//!
//! let point = SridPointXY::new_with_srid(Xy::new(-122.4194, 37.7749), 4326);
//! let buf = to_ewkb(&point).unwrap();
//! let decoded: SridPointXY = from_ewkb(&buf).unwrap();
//! assert_eq!(decoded.srid(), Some(4326));
//! ```
//!
//! Input in either byte order is accepted; output is always little-endian.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use api::{from_ewkb, from_hex_ewkb, to_ewkb, to_hex_ewkb, FromEwkb};
pub use common::{GeometryTypeCode, WkbGeometryType};
pub use dimension::Dimension;
pub use error::{EwkbError, EwkbResult};
pub use reader::read_ewkb;
pub use trait_::{Geometry, ScanValue};
pub use writer::write_ewkb;

mod api;
pub mod common;
pub mod coord;
mod dimension;
pub mod error;
pub mod io;
pub mod linestring;
pub mod point;
pub mod reader;
pub mod srid;
pub mod trait_;
pub mod writer;
