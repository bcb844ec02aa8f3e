// Mon Oct 19 2026 - Alex

pub mod config;
pub mod decode;
pub mod dispatch;
pub mod memory;
pub mod output;
pub mod registry;
pub mod state;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use decode::{Decoder, FloatDecoder, IntDecoder, Value};
pub use dispatch::{DispatchError, Dispatcher, Observation};
pub use memory::{Address, RawValue};
pub use registry::{AddressBinding, AddressRegistry, FieldHandler, RegistryBuilder};
pub use state::{Path, StateTree};
