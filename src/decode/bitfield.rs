// Mon Oct 19 2026 - Alex

use std::fmt;

use crate::decode::value::Value;
use crate::decode::wrapper::{refine, Wrapper};
use crate::memory::RawValue;

pub const BYTE_MASK: u32 = 0xFF;
pub const SHORT_MASK: u32 = 0xFFFF;
pub const WORD_MASK: u32 = 0xFFFF_FFFF;

/// Reads the word as a signed big-endian integer, then `(word >> shift) & mask`.
///
/// The shift is arithmetic, so the sign bit fills from the left before the
/// mask is applied. A full-word mask therefore keeps negative numbers
/// negative.
#[derive(Debug, Clone, Copy)]
pub struct IntDecoder {
    shift: u32,
    mask: u32,
    wrapper: Option<Wrapper>,
    default: Value,
}

impl IntDecoder {
    pub const WORD: IntDecoder = IntDecoder::new(0, WORD_MASK);
    pub const TOP_BYTE: IntDecoder = IntDecoder::new(24, BYTE_MASK);
    pub const TOP_SHORT: IntDecoder = IntDecoder::new(16, SHORT_MASK);

    pub const fn new(shift: u32, mask: u32) -> Self {
        Self {
            shift,
            mask,
            wrapper: None,
            default: Value::Int(0),
        }
    }

    pub const fn masked(mask: u32) -> Self {
        Self::new(0, mask)
    }

    pub const fn with_wrapper(mut self, wrapper: Wrapper, default: Value) -> Self {
        self.wrapper = Some(wrapper);
        self.default = default;
        self
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn extract(&self, raw: RawValue) -> i32 {
        let word = raw.as_i32();
        let shifted = word.checked_shr(self.shift).unwrap_or(word >> 31);
        shifted & self.mask as i32
    }

    pub fn decode(&self, raw: RawValue) -> Value {
        refine(Value::Int(self.extract(raw)), self.wrapper, self.default)
    }
}

impl Default for IntDecoder {
    fn default() -> Self {
        Self::WORD
    }
}

impl fmt::Display for IntDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "int(shift={}, mask=0x{:X})", self.shift, self.mask)?;
        if self.wrapper.is_some() {
            write!(f, " wrapped, default={}", self.default)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FloatDecoder {
    wrapper: Option<Wrapper>,
    default: Value,
}

impl FloatDecoder {
    pub const PLAIN: FloatDecoder = FloatDecoder::new();

    pub const fn new() -> Self {
        Self {
            wrapper: None,
            default: Value::Float(0.0),
        }
    }

    pub const fn with_wrapper(mut self, wrapper: Wrapper, default: Value) -> Self {
        self.wrapper = Some(wrapper);
        self.default = default;
        self
    }

    pub fn decode(&self, raw: RawValue) -> Value {
        refine(Value::Float(raw.as_f32()), self.wrapper, self.default)
    }
}

impl Default for FloatDecoder {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl fmt::Display for FloatDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("float")?;
        if self.wrapper.is_some() {
            write!(f, " wrapped, default={}", self.default)?;
        }
        Ok(())
    }
}

/// Total function from a raw word to a [`Value`].
#[derive(Debug, Clone, Copy)]
pub enum Decoder {
    Int(IntDecoder),
    Float(FloatDecoder),
}

impl Decoder {
    pub const WORD: Decoder = Decoder::Int(IntDecoder::WORD);
    pub const TOP_BYTE: Decoder = Decoder::Int(IntDecoder::TOP_BYTE);
    pub const TOP_SHORT: Decoder = Decoder::Int(IntDecoder::TOP_SHORT);
    pub const FLOAT: Decoder = Decoder::Float(FloatDecoder::PLAIN);

    pub fn decode(&self, raw: RawValue) -> Value {
        match self {
            Decoder::Int(decoder) => decoder.decode(raw),
            Decoder::Float(decoder) => decoder.decode(raw),
        }
    }
}

impl From<IntDecoder> for Decoder {
    fn from(decoder: IntDecoder) -> Self {
        Decoder::Int(decoder)
    }
}

impl From<FloatDecoder> for Decoder {
    fn from(decoder: FloatDecoder) -> Self {
        Decoder::Float(decoder)
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoder::Int(decoder) => fmt::Display::fmt(decoder, f),
            Decoder::Float(decoder) => fmt::Display::fmt(decoder, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::wrapper::non_negative;

    #[test]
    fn test_full_word_round_trip() {
        for v in [0, 1, -1, 42, -7, i32::MAX, i32::MIN, 0x1234_5678, -0x0102_0304] {
            assert_eq!(IntDecoder::WORD.decode(RawValue::from_i32(v)), Value::Int(v));
        }
    }

    #[test]
    fn test_bitfield_extraction() {
        let raw = RawValue::from_word(0x1234_5678);
        assert_eq!(IntDecoder::TOP_BYTE.decode(raw), Value::Int(0x12));
        assert_eq!(IntDecoder::TOP_SHORT.decode(raw), Value::Int(0x1234));
        assert_eq!(IntDecoder::new(8, BYTE_MASK).decode(raw), Value::Int(0x56));
        assert_eq!(IntDecoder::masked(BYTE_MASK).decode(raw), Value::Int(0x78));
    }

    #[test]
    fn test_high_bit_fields_stay_unsigned() {
        let raw = RawValue::from_word(0x8234_5678);
        assert_eq!(IntDecoder::TOP_BYTE.decode(raw), Value::Int(0x82));
        assert_eq!(IntDecoder::TOP_SHORT.decode(raw), Value::Int(0x8234));
    }

    #[test]
    fn test_single_bit_mask() {
        assert_eq!(IntDecoder::masked(0x2).decode(RawValue::from_word(0x7)), Value::Int(2));
        assert_eq!(IntDecoder::masked(0x2).decode(RawValue::from_word(0x5)), Value::Int(0));
    }

    #[test]
    fn test_oversized_shift_is_sign_fill() {
        assert_eq!(IntDecoder::new(40, WORD_MASK).decode(RawValue::from_i32(-5)), Value::Int(-1));
        assert_eq!(IntDecoder::new(40, WORD_MASK).decode(RawValue::from_i32(5)), Value::Int(0));
    }

    #[test]
    fn test_float_decode() {
        assert_eq!(FloatDecoder::PLAIN.decode(RawValue::new([0x3F, 0xC0, 0x00, 0x00])), Value::Float(1.5));
        assert_eq!(Decoder::FLOAT.decode(RawValue::from_f32(-2.25)), Value::Float(-2.25));
    }

    #[test]
    fn test_wrapper_fallback_absorbs_domain_failure() {
        let decoder = IntDecoder::WORD.with_wrapper(non_negative, Value::Int(0));
        assert_eq!(decoder.decode(RawValue::from_i32(-7)), Value::Int(0));
        assert_eq!(decoder.decode(RawValue::from_i32(7)), Value::Int(7));
    }

    #[test]
    fn test_float_wrapper_fallback() {
        let decoder = FloatDecoder::new().with_wrapper(non_negative, Value::Float(-1.0));
        assert_eq!(decoder.decode(RawValue::from_f32(-3.0)), Value::Float(-1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Decoder::TOP_SHORT.to_string(), "int(shift=16, mask=0xFFFF)");
        assert_eq!(Decoder::FLOAT.to_string(), "float");
    }
}
