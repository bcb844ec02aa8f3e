// Mon Oct 19 2026 - Alex

pub mod engine;
pub mod error;
pub mod observation;

pub use engine::{DispatchReport, Dispatcher};
pub use error::{DispatchError, ObservationError};
pub use observation::{Observation, ObservationReader};
