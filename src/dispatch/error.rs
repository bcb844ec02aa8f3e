// Mon Oct 19 2026 - Alex

use thiserror::Error;

use crate::memory::{Address, MemoryError};
use crate::state::StateError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid address: {0}")]
    InvalidAddress(#[source] MemoryError),
    #[error("Unknown address {0}: not registered")]
    UnknownAddress(Address),
    #[error("Malformed raw value for {address}: {source}")]
    MalformedRawValue {
        address: Address,
        #[source]
        source: MemoryError,
    },
    #[error("Failed to apply value at {address}: {source}")]
    State {
        address: Address,
        #[source]
        source: StateError,
    },
}

#[derive(Error, Debug)]
pub enum ObservationError {
    #[error("line {line}: expected `<address> <value>`, got {text:?}")]
    Syntax { line: usize, text: String },
    #[error("line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: MemoryError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
