// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Invalid address: {0:?} (expected up to 8 hex digits)")]
    InvalidAddress(String),
    #[error("Address {base:08X} offset by {offset} leaves the 32-bit address space")]
    AddressOutOfRange { base: u32, offset: i64 },
    #[error("Raw value must be exactly {expected} bytes, got {actual}")]
    InvalidRawLength { expected: usize, actual: usize },
    #[error("Invalid raw value: {0:?} (expected up to 8 hex digits)")]
    InvalidRawValue(String),
}
