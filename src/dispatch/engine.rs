// Mon Oct 19 2026 - Alex

use std::sync::Arc;

use crate::dispatch::error::DispatchError;
use crate::dispatch::observation::Observation;
use crate::memory::{Address, RawValue};
use crate::registry::{AddressBinding, AddressRegistry};
use crate::state::{SharedState, StateTree};

/// Outcome of a best-effort batch, see [`Dispatcher::handle_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub applied: usize,
    pub unknown: usize,
    pub failed: usize,
}

impl DispatchReport {
    pub fn total(&self) -> usize {
        self.applied + self.unknown + self.failed
    }
}

/// Routes observations to the handlers registered for their address.
///
/// The dispatcher only reads the registry, so clones can run on any number
/// of threads. Each state tree must still have a single writer at a time.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<AddressRegistry>,
}

impl Dispatcher {
    pub fn new(registry: AddressRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &AddressRegistry {
        &self.registry
    }

    pub fn locations(&self) -> Vec<Address> {
        self.registry.locations()
    }

    fn binding(&self, address: Address) -> Result<&AddressBinding, DispatchError> {
        self.registry
            .get(&address)
            .ok_or(DispatchError::UnknownAddress(address))
    }

    /// Decodes `raw` with every handler bound to `address` and writes the results into `tree`.
    ///
    /// `address` is parsed case-insensitively; `raw` must be exactly four
    /// big-endian bytes. Nothing is written when the address is unknown or
    /// the value is malformed. Returns the number of handlers applied.
    pub fn handle(&self, tree: &mut StateTree, address: &str, raw: &[u8]) -> Result<usize, DispatchError> {
        let address = Address::parse(address).map_err(DispatchError::InvalidAddress)?;
        let binding = self.binding(address)?;
        let raw = RawValue::try_from(raw)
            .map_err(|source| DispatchError::MalformedRawValue { address, source })?;
        apply(binding, tree, address, raw)
    }

    pub fn handle_observation(&self, tree: &mut StateTree, observation: &Observation) -> Result<usize, DispatchError> {
        let binding = self.binding(observation.address)?;
        apply(binding, tree, observation.address, observation.raw)
    }

    pub fn handle_shared(&self, state: &SharedState, observation: &Observation) -> Result<usize, DispatchError> {
        let binding = self.binding(observation.address)?;
        let mut tree = state.lock();
        apply(binding, &mut tree, observation.address, observation.raw)
    }

    /// Applies a whole batch, counting failures instead of stopping at them.
    pub fn handle_all<I>(&self, tree: &mut StateTree, observations: I) -> DispatchReport
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut report = DispatchReport::default();

        for observation in observations {
            match self.handle_observation(tree, &observation) {
                Ok(_) => report.applied += 1,
                Err(DispatchError::UnknownAddress(address)) => {
                    log::warn!("skipping unregistered address {}", address);
                    report.unknown += 1;
                }
                Err(err) => {
                    log::warn!("{}", err);
                    report.failed += 1;
                }
            }
        }
        report
    }
}

fn apply(binding: &AddressBinding, tree: &mut StateTree, address: Address, raw: RawValue) -> Result<usize, DispatchError> {
    match binding {
        AddressBinding::Single(handler) => {
            log::trace!("{} = {} -> {}", address, raw, handler.path());
            handler
                .apply(tree, raw)
                .map_err(|source| DispatchError::State { address, source })?;
            Ok(1)
        }
        AddressBinding::Multiple(handlers) => {
            for handler in handlers {
                log::trace!("{} = {} -> {}", address, raw, handler.path());
                handler
                    .apply(tree, raw)
                    .map_err(|source| DispatchError::State { address, source })?;
            }
            Ok(handlers.len())
        }
    }
}
