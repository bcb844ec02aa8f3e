// Mon Oct 19 2026 - Alex

pub mod bitfield;
pub mod value;
pub mod wrapper;

pub use bitfield::{Decoder, FloatDecoder, IntDecoder, BYTE_MASK, SHORT_MASK, WORD_MASK};
pub use value::Value;
pub use wrapper::{DomainError, Wrapper};
