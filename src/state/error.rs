// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot write to an empty path")]
    EmptyPath,
    #[error("Structural mismatch at `{path}` (segment {depth}): expected {expected}, found {found}")]
    StructuralMismatch {
        path: String,
        depth: usize,
        expected: &'static str,
        found: &'static str,
    },
}
