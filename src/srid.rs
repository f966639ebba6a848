//! Type-level SRID slots.

use serde::{Deserialize, Serialize};

use crate::trait_::SridSlot;

/// No SRID. Geometries with this slot reject streams that carry one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoSrid;

/// An SRID, carried once per geometry.
///
/// Defaults to `0` when decoding a stream without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srid(pub i32);

impl SridSlot for NoSrid {
    const HAS_SRID: bool = false;

    fn get(&self) -> Option<i32> {
        None
    }

    fn get_mut(&mut self) -> Option<&mut i32> {
        None
    }
}

impl SridSlot for Srid {
    const HAS_SRID: bool = true;

    fn get(&self) -> Option<i32> {
        Some(self.0)
    }

    fn get_mut(&mut self) -> Option<&mut i32> {
        Some(&mut self.0)
    }
}

impl From<i32> for Srid {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
