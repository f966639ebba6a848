//! Coordinate tuples, one type per [Dimension].

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::EwkbResult;
use crate::reader::EwkbReader;
use crate::writer::EwkbWriter;

/// A fixed-size coordinate tuple.
///
/// The tuple's type fixes its dimension, and with it the number of 8-byte floats it
/// occupies on the wire.
pub trait Coord: Copy + Default + std::fmt::Debug + PartialEq {
    const DIMENSION: Dimension;

    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn z(&self) -> Option<f64> {
        None
    }

    fn m(&self) -> Option<f64> {
        None
    }

    /// Read the ordinates in X, Y, \[Z\], \[M\] order.
    fn read(reader: &mut EwkbReader<'_>) -> EwkbResult<Self>;

    /// Write the ordinates in X, Y, \[Z\], \[M\] order.
    fn write(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()>;

    /// The byte length of an encoded tuple.
    fn wkb_size() -> usize {
        Self::DIMENSION.size() * 8
    }
}

/// A planar coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

/// A coordinate with elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A coordinate with a measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xym {
    pub x: f64,
    pub y: f64,
    pub m: f64,
}

/// A coordinate with elevation and a measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyzm {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Xy {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Xym {
    pub fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }
}

impl Xyzm {
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }
}

impl Coord for Xy {
    const DIMENSION: Dimension = Dimension::XY;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn read(reader: &mut EwkbReader<'_>) -> EwkbResult<Self> {
        Ok(Self {
            x: reader.read_f64("coordinate")?,
            y: reader.read_f64("coordinate")?,
        })
    }

    fn write(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)
    }
}

impl Coord for Xyz {
    const DIMENSION: Dimension = Dimension::XYZ;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn read(reader: &mut EwkbReader<'_>) -> EwkbResult<Self> {
        Ok(Self {
            x: reader.read_f64("coordinate")?,
            y: reader.read_f64("coordinate")?,
            z: reader.read_f64("coordinate")?,
        })
    }

    fn write(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)?;
        writer.write_f64(self.z)
    }
}

impl Coord for Xym {
    const DIMENSION: Dimension = Dimension::XYM;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn read(reader: &mut EwkbReader<'_>) -> EwkbResult<Self> {
        Ok(Self {
            x: reader.read_f64("coordinate")?,
            y: reader.read_f64("coordinate")?,
            m: reader.read_f64("coordinate")?,
        })
    }

    fn write(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)?;
        writer.write_f64(self.m)
    }
}

impl Coord for Xyzm {
    const DIMENSION: Dimension = Dimension::XYZM;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn read(reader: &mut EwkbReader<'_>) -> EwkbResult<Self> {
        Ok(Self {
            x: reader.read_f64("coordinate")?,
            y: reader.read_f64("coordinate")?,
            z: reader.read_f64("coordinate")?,
            m: reader.read_f64("coordinate")?,
        })
    }

    fn write(&self, writer: &mut EwkbWriter<'_>) -> EwkbResult<()> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)?;
        writer.write_f64(self.z)?;
        writer.write_f64(self.m)
    }
}
