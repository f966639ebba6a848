//! Defines [`EwkbError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::common::WkbGeometryType;
use crate::dimension::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EwkbError {
    /// The hex transport encoding around the EWKB bytes is broken.
    #[error("Malformed transport encoding: {0}")]
    MalformedTransportEncoding(String),

    /// The leading byte-order marker was neither `0` nor `1`.
    #[error("Unsupported byte order marker: expected 0 or 1, found {0}")]
    UnsupportedByteOrder(u8),

    /// The type code announces an SRID but the destination has no SRID slot.
    #[error("Unexpected SRID: type code {type_code:#010x} carries an SRID but the destination cannot hold one")]
    UnexpectedSrid {
        /// The raw type code read from the stream.
        type_code: u32,
    },

    /// The base kind is unknown, or the destination cannot decode a body of that kind.
    #[error("Unsupported geometry type: found base kind {found}, destination is a {expected:?}")]
    UnsupportedGeometryType {
        /// The base kind read from the stream.
        found: u32,
        /// The base kind of the destination.
        expected: WkbGeometryType,
    },

    /// The wire dimensionality flags disagree with the destination's coordinate layout.
    #[error("Dimension mismatch: destination is {expected}, stream is {found}")]
    DimensionMismatch {
        /// Dimension of the destination.
        expected: Dimension,
        /// Dimension announced by the stream.
        found: Dimension,
    },

    /// The byte source ran out in the middle of a field.
    #[error("Truncated input while reading {field}")]
    Truncated {
        /// Name of the field being read.
        field: &'static str,
    },

    /// A sequence has more elements than a 32-bit count can frame.
    #[error("Overflow: element count does not fit in u32")]
    Overflow,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl EwkbError {
    /// Map an I/O error raised while reading `field`.
    ///
    /// Running out of bytes becomes [EwkbError::Truncated]; anything else is passed through.
    pub(crate) fn from_read(err: std::io::Error, field: &'static str) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => EwkbError::Truncated { field },
            _ => EwkbError::IOError(err),
        }
    }
}

/// Crate-specific result type.
pub type EwkbResult<T> = std::result::Result<T, EwkbError>;

#[cfg(test)]
mod test {
    use std::io;

    use super::*;

    #[test]
    fn eof_becomes_truncated() {
        let err = EwkbError::from_read(io::Error::from(io::ErrorKind::UnexpectedEof), "srid");
        assert!(matches!(err, EwkbError::Truncated { field: "srid" }));
        assert_eq!(err.to_string(), "Truncated input while reading srid");
    }

    #[test]
    fn other_io_errors_pass_through() {
        let err = EwkbError::from_read(io::Error::from(io::ErrorKind::BrokenPipe), "srid");
        assert!(matches!(err, EwkbError::IOError(_)));
    }

    #[test]
    fn display() {
        assert_eq!(
            EwkbError::UnexpectedSrid {
                type_code: 0x2000_0001
            }
            .to_string(),
            "Unexpected SRID: type code 0x20000001 carries an SRID but the destination cannot hold one"
        );
        assert_eq!(
            EwkbError::UnsupportedByteOrder(2).to_string(),
            "Unsupported byte order marker: expected 0 or 1, found 2"
        );
        assert_eq!(
            EwkbError::DimensionMismatch {
                expected: Dimension::XY,
                found: Dimension::XYZ
            }
            .to_string(),
            "Dimension mismatch: destination is XY, stream is XYZ"
        );
    }
}
