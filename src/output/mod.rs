// Mon Oct 19 2026 - Alex

pub mod locations;
pub mod snapshot;

pub use locations::{read_locations, LocationsError, LocationsWriter};
pub use snapshot::SnapshotFormatter;
