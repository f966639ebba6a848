//! Hex transport encoding, the form in which Postgres hands out geometry values.

use crate::error::{EwkbError, EwkbResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode bytes as an upper-case hex string, as PostGIS prints EWKB.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Decode a hex string. Both letter cases are accepted.
pub fn decode_hex(hex: &[u8]) -> EwkbResult<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(EwkbError::MalformedTransportEncoding(format!(
            "odd number of hex digits: {}",
            hex.len()
        )));
    }

    hex.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> EwkbResult<u8> {
            Ok((nibble(pair[0], 2 * i)? << 4) | nibble(pair[1], 2 * i + 1)?)
        })
        .collect()
}

fn nibble(digit: u8, position: usize) -> EwkbResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(EwkbError::MalformedTransportEncoding(format!(
            "invalid hex digit {:?} at position {position}",
            digit as char
        ))),
    }
}
