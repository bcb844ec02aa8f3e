// Mon Oct 19 2026 - Alex

use thiserror::Error;

use crate::memory::{Address, MemoryError};
use crate::state::StateError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Address arithmetic failed: {0}")]
    Memory(#[from] MemoryError),
    #[error("Entity {0} was added twice")]
    DuplicateEntity(u8),
    #[error("Address {address} is claimed by entities {first} and {second}; check region strides")]
    EntityOverlap { address: Address, first: u8, second: u8 },
    #[error("Path `{path}` is written by more than one handler (again at {address})")]
    DuplicatePath { path: String, address: Address },
    #[error("Handler at {address} conflicts with another handler's path: {source}")]
    PathConflict {
        address: Address,
        #[source]
        source: StateError,
    },
}
