// Mon Oct 19 2026 - Alex

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::memory::error::MemoryError;
use crate::utils::StringUtils;

/// Width of the canonical textual form of an address.
pub const ADDRESS_WIDTH: usize = 8;

/// A 32-bit location in the emulated console's address space.
///
/// The canonical form is eight uppercase hex digits with no prefix
/// (`80479D60`). Parsing is case-insensitive and accepts a `0x` prefix and
/// stripped leading zeros, so every spelling of the same location compares
/// equal once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: u32,
}

impl Address {
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    pub const fn zero() -> Self {
        Self { value: 0 }
    }

    pub const fn as_u32(&self) -> u32 {
        self.value
    }

    pub fn parse(s: &str) -> Result<Self, MemoryError> {
        StringUtils::parse_hex_u32(s)
            .map(Self::new)
            .ok_or_else(|| MemoryError::InvalidAddress(s.to_string()))
    }

    /// Adds a signed byte offset, failing if the result leaves the 32-bit space.
    pub fn checked_offset(&self, offset: i64) -> Result<Self, MemoryError> {
        let target = self.value as i64 + offset;
        u32::try_from(target)
            .map(Self::new)
            .map_err(|_| MemoryError::AddressOutOfRange { base: self.value, offset })
    }

    /// `self + stride * index`, with a negative stride walking downwards.
    pub fn strided(&self, stride: i64, index: u8) -> Result<Self, MemoryError> {
        self.checked_offset(stride * index as i64)
    }

    pub fn to_canonical(&self) -> String {
        format!("{:08X}", self.value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.value)
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl FromStr for Address {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = MemoryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Add<u32> for Address {
    type Output = Self;
    fn add(self, rhs: u32) -> Self::Output {
        Self { value: self.value.wrapping_add(rhs) }
    }
}

impl Sub<u32> for Address {
    type Output = Self;
    fn sub(self, rhs: u32) -> Self::Output {
        Self { value: self.value.wrapping_sub(rhs) }
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Address::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_is_padded_uppercase() {
        assert_eq!(Address::new(0x8045_3080).to_string(), "80453080");
        assert_eq!(Address::new(0x1).to_string(), "00000001");
        assert_eq!(Address::new(0xabc).to_canonical().len(), ADDRESS_WIDTH);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper: Address = "804D6CAD".parse().unwrap();
        let lower: Address = "804d6cad".parse().unwrap();
        let prefixed: Address = "0x804d6CAD".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, prefixed);
        assert_eq!(lower.to_string(), "804D6CAD");
    }

    #[test]
    fn test_parse_accepts_stripped_leading_zeros() {
        let short: Address = "1F".parse().unwrap();
        assert_eq!(short, Address::new(0x1F));
        assert_eq!(short.to_string(), "0000001F");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Address::parse("").is_err());
        assert!(Address::parse("0x").is_err());
        assert!(Address::parse("80479D6G").is_err());
        assert!(Address::parse("180479D60").is_err());
        assert!(Address::parse("-1").is_err());
    }

    #[test]
    fn test_strided_negative_and_positive() {
        let cursor = Address::new(0x8111_8DEC);
        assert_eq!(cursor.strided(-0xB80, 2).unwrap(), Address::new(0x8111_8DEC - 2 * 0xB80));
        let status = Address::new(0x803F_0E08);
        assert_eq!(status.strided(0x24, 3).unwrap(), Address::new(0x803F_0E08 + 3 * 0x24));
    }

    #[test]
    fn test_checked_offset_out_of_range() {
        assert!(Address::new(0x10).checked_offset(-0x20).is_err());
        assert!(Address::new(0xFFFF_FFF0).checked_offset(0x20).is_err());
        assert_eq!(Address::new(0x10).checked_offset(-0x10).unwrap(), Address::zero());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&Address::new(0x8047_9D60)).unwrap();
        assert_eq!(json, "\"80479D60\"");
        let back: Address = serde_json::from_str("\"80479d60\"").unwrap();
        assert_eq!(back, Address::new(0x8047_9D60));
    }
}
