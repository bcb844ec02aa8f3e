// Mon Oct 19 2026 - Alex

use std::fmt;

use bytes::Buf;

use crate::memory::error::MemoryError;
use crate::utils::StringUtils;

pub const RAW_VALUE_LEN: usize = 4;

/// One big-endian 32-bit word as observed at a watched address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawValue([u8; RAW_VALUE_LEN]);

impl RawValue {
    pub const fn new(bytes: [u8; RAW_VALUE_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn from_word(word: u32) -> Self {
        Self(word.to_be_bytes())
    }

    pub fn from_i32(value: i32) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn from_f32(value: f32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Parses a hex word as printed by memory watchers, which drop leading zeros.
    pub fn parse_hex(s: &str) -> Result<Self, MemoryError> {
        StringUtils::parse_hex_u32(s)
            .map(Self::from_word)
            .ok_or_else(|| MemoryError::InvalidRawValue(s.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8; RAW_VALUE_LEN] {
        &self.0
    }

    pub fn as_i32(&self) -> i32 {
        let mut buf = &self.0[..];
        buf.get_i32()
    }

    pub fn as_u32(&self) -> u32 {
        let mut buf = &self.0[..];
        buf.get_u32()
    }

    pub fn as_f32(&self) -> f32 {
        let mut buf = &self.0[..];
        buf.get_f32()
    }
}

impl TryFrom<&[u8]> for RawValue {
    type Error = MemoryError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; RAW_VALUE_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| MemoryError::InvalidRawLength {
                expected: RAW_VALUE_LEN,
                actual: bytes.len(),
            })
    }
}

impl From<[u8; RAW_VALUE_LEN]> for RawValue {
    fn from(bytes: [u8; RAW_VALUE_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_lengths() {
        for len in [0usize, 1, 3, 5, 8] {
            let bytes = vec![0u8; len];
            let err = RawValue::try_from(bytes.as_slice()).unwrap_err();
            assert_eq!(err, MemoryError::InvalidRawLength { expected: 4, actual: len });
        }
    }

    #[test]
    fn test_big_endian_interpretation() {
        let raw = RawValue::try_from(&[0x12u8, 0x34, 0x56, 0x78][..]).unwrap();
        assert_eq!(raw.as_u32(), 0x1234_5678);
        assert_eq!(raw.as_i32(), 0x1234_5678);
        assert_eq!(RawValue::from_i32(-2).as_bytes(), &[0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(RawValue::from_f32(1.5).as_f32(), 1.5);
    }

    #[test]
    fn test_parse_hex_pads_short_words() {
        assert_eq!(RawValue::parse_hex("3fc00000").unwrap().as_f32(), 1.5);
        assert_eq!(RawValue::parse_hex("2A").unwrap().as_bytes(), &[0, 0, 0, 0x2A]);
        assert!(RawValue::parse_hex("123456789").is_err());
        assert!(RawValue::parse_hex("zz").is_err());
    }
}
