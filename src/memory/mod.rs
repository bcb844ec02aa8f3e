// Mon Oct 19 2026 - Alex

pub mod address;
pub mod error;
pub mod raw;

pub use address::Address;
pub use error::MemoryError;
pub use raw::RawValue;
