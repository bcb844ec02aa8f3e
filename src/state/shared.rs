// Mon Oct 19 2026 - Alex

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::state::tree::StateTree;

/// A state tree that several threads feed observations into.
///
/// Every write goes through the one lock, keeping a single writer per tree.
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<StateTree>>,
}

impl SharedState {
    pub fn new(tree: StateTree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, StateTree> {
        self.inner.lock()
    }

    pub fn snapshot(&self) -> StateTree {
        self.inner.lock().clone()
    }
}
