// Mon Oct 19 2026 - Alex

pub mod error;
pub mod path;
pub mod shared;
pub mod tree;

pub use error::StateError;
pub use path::{Path, PathSegment};
pub use shared::SharedState;
pub use tree::{Node, StateTree};
