//! Adapters around the EWKB codec: hex transport, conversion to [`geo`] types and, behind the
//! `postgis` feature, `sqlx` value binding.

pub mod geo;
pub mod hex;
#[cfg(feature = "postgis")]
pub mod postgis;
