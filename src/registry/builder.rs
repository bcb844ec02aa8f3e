// Mon Oct 19 2026 - Alex

use ahash::AHashSet;
use indexmap::map::Entry;

use crate::decode::Value;
use crate::memory::Address;
use crate::registry::binding::AddressBinding;
use crate::registry::entity::EntityAddressGenerator;
use crate::registry::error::RegistryError;
use crate::registry::handler::FieldHandler;
use crate::registry::layout::{GlobalField, PlayerLayout, GLOBAL_FIELDS};
use crate::registry::{AddressMap, AddressRegistry};
use crate::state::{Path, StateTree};

/// Accumulates bindings for an [`AddressRegistry`].
///
/// Every entry, global or per-player, goes through [`RegistryBuilder::insert`]:
/// a new address gets a single binding, an existing one gets the handler
/// appended. Nothing is ever overwritten.
pub struct RegistryBuilder {
    layout: PlayerLayout,
    bindings: AddressMap<AddressBinding>,
    entity_owners: AddressMap<u8>,
    overlaps: Vec<RegistryError>,
    players: Vec<u8>,
}

impl RegistryBuilder {
    pub fn new(layout: PlayerLayout) -> Self {
        Self {
            layout,
            bindings: AddressMap::default(),
            entity_owners: AddressMap::default(),
            overlaps: Vec::new(),
            players: Vec::new(),
        }
    }

    /// The game's layout with the global fields already inserted.
    pub fn melee() -> Self {
        Self::new(PlayerLayout::default()).with_globals(GLOBAL_FIELDS)
    }

    pub fn with_globals(mut self, fields: &[GlobalField]) -> Self {
        for field in fields {
            let handler = FieldHandler::new(Path::root().key(field.name), field.decoder);
            self.insert(field.address, handler, None);
        }
        self
    }

    pub fn with_players<I>(mut self, players: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = u8>,
    {
        for player in players {
            self.add_player(player)?;
        }
        Ok(self)
    }

    pub fn add_player(&mut self, player: u8) -> Result<&mut Self, RegistryError> {
        if self.players.contains(&player) {
            return Err(RegistryError::DuplicateEntity(player));
        }

        let entries = EntityAddressGenerator::new(&self.layout).generate(player)?;
        for (address, handler) in entries {
            self.insert(address, handler, Some(player));
        }
        self.players.push(player);
        Ok(self)
    }

    /// Binds `handler` to `address`, appending when the address is taken.
    pub fn insert(&mut self, address: Address, handler: FieldHandler, owner: Option<u8>) {
        if let Some(player) = owner {
            match self.entity_owners.entry(address) {
                Entry::Occupied(existing) if *existing.get() != player => {
                    self.overlaps.push(RegistryError::EntityOverlap {
                        address,
                        first: *existing.get(),
                        second: player,
                    });
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(slot) => {
                    slot.insert(player);
                }
            }
        }

        match self.bindings.entry(address) {
            Entry::Occupied(mut binding) => binding.get_mut().push(handler),
            Entry::Vacant(slot) => {
                slot.insert(AddressBinding::Single(handler));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn build(mut self) -> Result<AddressRegistry, RegistryError> {
        if !self.overlaps.is_empty() {
            return Err(self.overlaps.swap_remove(0));
        }
        validate_paths(&self.bindings)?;

        let registry = AddressRegistry::from_parts(self.bindings, self.players);
        log::debug!(
            "built address registry: {} addresses, {} handlers, players {:?}",
            registry.len(),
            registry.handler_count(),
            registry.players()
        );
        Ok(registry)
    }
}

/// Replays every handler path into a scratch tree so that conflicting
/// container shapes surface here instead of during dispatch.
fn validate_paths(bindings: &AddressMap<AddressBinding>) -> Result<(), RegistryError> {
    let mut seen: AHashSet<&Path> = AHashSet::new();
    let mut scratch = StateTree::new();

    for (address, binding) in bindings {
        for handler in binding.handlers() {
            if !seen.insert(handler.path()) {
                return Err(RegistryError::DuplicatePath {
                    path: handler.path().to_string(),
                    address: *address,
                });
            }
            scratch
                .set_path(handler.path(), Value::Int(0))
                .map_err(|source| RegistryError::PathConflict { address: *address, source })?;
        }
    }
    Ok(())
}
