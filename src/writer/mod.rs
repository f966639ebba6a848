//! Encoding EWKB. Output is always little-endian.

mod geometry;

pub use geometry::write_ewkb;

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::EwkbResult;
use crate::reader::Endianness;

/// Writes fixed-width little-endian primitives to a byte sink.
pub struct EwkbWriter<'a> {
    inner: &'a mut dyn Write,
}

impl<'a> EwkbWriter<'a> {
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner }
    }

    /// Write the little-endian byte order marker.
    pub fn write_marker(&mut self) -> EwkbResult<()> {
        self.inner.write_u8(Endianness::LittleEndian.into())?;
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> EwkbResult<()> {
        self.inner.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_i32(&mut self, value: i32) -> EwkbResult<()> {
        self.inner.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_f64(&mut self, value: f64) -> EwkbResult<()> {
        self.inner.write_f64::<LittleEndian>(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn little_endian_primitives() {
        let mut buf: Vec<u8> = vec![];
        let mut writer = EwkbWriter::new(&mut buf);
        writer.write_marker().unwrap();
        writer.write_u32(0x2000_0001).unwrap();
        writer.write_i32(4326).unwrap();
        writer.write_f64(-0.5).unwrap();
        assert_eq!(
            buf,
            [1, 1, 0, 0, 32, 230, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0xE0, 0xBF]
        );
    }
}
