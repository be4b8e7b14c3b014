use std::fmt;
use std::str::FromStr;

use crate::error::SmcError;

/// A FourCC identifier naming one SMC-exposed value, e.g. `TC0P`.
///
/// Exactly 4 ASCII bytes; the canonical protocol form is the big-endian
/// `u32` produced by [`SensorKey::code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorKey([u8; 4]);

impl SensorKey {
    pub fn new(s: &str) -> Result<Self, SmcError> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii()) {
            return Err(SmcError::InvalidKeyFormat(s.to_string()));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Big-endian pack, most-significant byte first.
    pub const fn code(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn from_code(code: u32) -> Self {
        Self(code.to_be_bytes())
    }
}

impl FromStr for SensorKey {
    type Err = SmcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SensorKey({self})")
    }
}

/// Renders an SMC data-type code as its 4-character tag, e.g. `sp78`.
pub fn type_tag(code: u32) -> String {
    String::from_utf8_lossy(&code.to_be_bytes()).into_owned()
}

/// Fractional bits of the signed fixed-point temperature encoding (`sp78`).
pub const TEMP_FRACTIONAL_BITS: u32 = 8;

/// Decodes a big-endian signed fixed-point value.
///
/// The byte sequence is interpreted as a two's-complement integer of
/// `bytes.len() * 8` bits and scaled down by `2^fractional_bits`. The SMC's
/// temperature keys use the 16-bit, 8-fraction-bit form where `0x1900`
/// is 25.0 degrees. Zero-length input decodes to 0.0; some keys expose
/// zero-length sentinel metadata.
pub fn decode_fixed_point(bytes: &[u8], fractional_bits: u32) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let size = bytes.len().min(8);
    let mut raw: i64 = 0;
    for &b in &bytes[..size] {
        raw = (raw << 8) | i64::from(b);
    }
    let shift = 64 - size as u32 * 8;
    let signed = (raw << shift) >> shift;
    signed as f64 / f64::from(1u32 << fractional_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_packs_big_endian() {
        let key = SensorKey::new("TC0P").unwrap();
        assert_eq!(key.code(), u32::from_be_bytes(*b"TC0P"));
        assert_eq!(SensorKey::from_code(key.code()), key);
    }

    #[test]
    fn key_round_trips_through_type_tag() {
        for name in ["TC0P", "sp78", "flag", "LSOO", "#KEY"] {
            let key = SensorKey::new(name).unwrap();
            assert_eq!(type_tag(key.code()), name);
        }
    }

    #[test]
    fn key_rejects_wrong_lengths() {
        assert!(matches!(
            SensorKey::new("ABC"),
            Err(SmcError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            SensorKey::new("ABCDE"),
            Err(SmcError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            SensorKey::new(""),
            Err(SmcError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn key_rejects_non_ascii() {
        assert!(matches!(
            SensorKey::new("T°0P"),
            Err(SmcError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn key_parses_from_str() {
        let key: SensorKey = "TB0T".parse().unwrap();
        assert_eq!(key.to_string(), "TB0T");
    }

    #[test]
    fn fixed_point_decodes_whole_degrees() {
        assert_eq!(decode_fixed_point(&[0x19, 0x00], 8), 25.0);
    }

    #[test]
    fn fixed_point_decodes_fractions() {
        assert_eq!(decode_fixed_point(&[0x00, 0x40], 8), 0.25);
    }

    #[test]
    fn fixed_point_is_twos_complement() {
        assert_eq!(decode_fixed_point(&[0xFF, 0x00], 8), -1.0);
        assert!(decode_fixed_point(&[0x80, 0x00], 8) < 0.0);
    }

    #[test]
    fn fixed_point_respects_width() {
        // Single-byte value with 8 fractional bits.
        assert_eq!(decode_fixed_point(&[0x80], 8), -0.5);
        // 32-bit value, still /256.
        assert_eq!(decode_fixed_point(&[0x00, 0x00, 0x19, 0x00], 8), 25.0);
    }

    #[test]
    fn fixed_point_tolerates_zero_length() {
        assert_eq!(decode_fixed_point(&[], 8), 0.0);
    }
}
