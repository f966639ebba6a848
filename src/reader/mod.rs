//! Decoding EWKB: the byte-order-aware primitive reader and the framing orchestrator.

mod geometry;

pub use geometry::read_ewkb;

use std::io::Read;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{EwkbError, EwkbResult};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = EwkbError;

    fn try_from(value: u8) -> EwkbResult<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(EwkbError::UnsupportedByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => 0,
            Endianness::LittleEndian => 1,
        }
    }
}

/// Reads fixed-width primitives from a byte source in the byte order selected by the stream's
/// marker byte.
///
/// Every read names the field it belongs to, so running out of input reports
/// [EwkbError::Truncated] with that name.
pub struct EwkbReader<'a> {
    inner: &'a mut dyn Read,
    byte_order: Endianness,
}

impl<'a> EwkbReader<'a> {
    pub fn new(inner: &'a mut dyn Read, byte_order: Endianness) -> Self {
        Self { inner, byte_order }
    }

    /// Read the marker byte and return a reader for the rest of the stream.
    pub fn from_marker(inner: &'a mut dyn Read) -> EwkbResult<Self> {
        let marker = inner
            .read_u8()
            .map_err(|err| EwkbError::from_read(err, "byte order"))?;
        let byte_order = Endianness::try_from(marker)?;
        Ok(Self::new(inner, byte_order))
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn read_u32(&mut self, field: &'static str) -> EwkbResult<u32> {
        match self.byte_order {
            Endianness::BigEndian => self.inner.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.inner.read_u32::<LittleEndian>(),
        }
        .map_err(|err| EwkbError::from_read(err, field))
    }

    pub fn read_i32(&mut self, field: &'static str) -> EwkbResult<i32> {
        match self.byte_order {
            Endianness::BigEndian => self.inner.read_i32::<BigEndian>(),
            Endianness::LittleEndian => self.inner.read_i32::<LittleEndian>(),
        }
        .map_err(|err| EwkbError::from_read(err, field))
    }

    pub fn read_f64(&mut self, field: &'static str) -> EwkbResult<f64> {
        match self.byte_order {
            Endianness::BigEndian => self.inner.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.inner.read_f64::<LittleEndian>(),
        }
        .map_err(|err| EwkbError::from_read(err, field))
    }
}
