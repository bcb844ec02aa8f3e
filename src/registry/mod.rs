// Mon Oct 19 2026 - Alex

pub mod binding;
pub mod builder;
pub mod entity;
pub mod error;
pub mod handler;
pub mod layout;

pub use binding::AddressBinding;
pub use builder::RegistryBuilder;
pub use entity::EntityAddressGenerator;
pub use error::RegistryError;
pub use handler::FieldHandler;
pub use layout::{PlayerLayout, DEFAULT_PLAYERS, MAX_PLAYERS};

use indexmap::IndexMap;

use crate::config::Config;
use crate::memory::Address;

pub type AddressMap<V> = IndexMap<Address, V, ahash::RandomState>;

/// Immutable mapping from watched address to the handlers decoding it.
#[derive(Debug, Clone)]
pub struct AddressRegistry {
    bindings: AddressMap<AddressBinding>,
    players: Vec<u8>,
}

impl AddressRegistry {
    /// Builds the game's registry for the given player slots.
    pub fn new<I>(players: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = u8>,
    {
        RegistryBuilder::melee().with_players(players)?.build()
    }

    pub fn with_default_players() -> Result<Self, RegistryError> {
        Self::new(DEFAULT_PLAYERS)
    }

    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        Self::new(config.player_ids.iter().copied())
    }

    pub(crate) fn from_parts(bindings: AddressMap<AddressBinding>, players: Vec<u8>) -> Self {
        Self { bindings, players }
    }

    pub fn get(&self, address: &Address) -> Option<&AddressBinding> {
        self.bindings.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.bindings.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn handler_count(&self) -> usize {
        self.bindings.values().map(AddressBinding::len).sum()
    }

    pub fn players(&self) -> &[u8] {
        &self.players
    }

    /// Registered addresses in registration order.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.bindings.keys().copied()
    }

    /// Registered addresses sorted ascending, as handed to a memory watcher.
    pub fn locations(&self) -> Vec<Address> {
        let mut locations: Vec<Address> = self.addresses().collect();
        locations.sort_unstable();
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{Decoder, IntDecoder, Value};
    use crate::memory::RawValue;
    use crate::registry::layout::{OffsetField, OffsetTable, DATA_FIELDS, GLOBAL_FIELDS, STATIC_FIELDS};
    use crate::state::{Path, StateTree};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_default_registry_shape() {
        let registry = AddressRegistry::with_default_players().unwrap();
        let per_player_handlers = 2 + 2 + STATIC_FIELDS.len() + DATA_FIELDS.len();
        let per_player_addresses = per_player_handlers - 1;

        assert_eq!(registry.players(), &[0, 1, 2, 3]);
        assert_eq!(registry.handler_count(), GLOBAL_FIELDS.len() + 4 * per_player_handlers);
        assert_eq!(registry.len(), GLOBAL_FIELDS.len() + 4 * per_player_addresses);
        assert!(registry.contains(&Address::new(0x8047_9D60)));
        assert!(registry.contains(&Address::new(0x804D_6CAD)));
    }

    #[test]
    fn test_registry_is_shareable() {
        assert_send_sync::<AddressRegistry>();
    }

    #[test]
    fn test_status_word_is_multiple_binding() {
        let registry = AddressRegistry::new([0, 2]).unwrap();
        let binding = registry.get(&Address::new(0x803F_0E08 + 2 * 0x24)).unwrap();
        assert!(binding.is_multiple());
        assert_eq!(binding.len(), 2);
        assert!(registry.get(&Address::new(0x803F_0E08 + 0x24)).is_none());
    }

    #[test]
    fn test_locations_sorted_and_unique() {
        let registry = AddressRegistry::with_default_players().unwrap();
        let locations = registry.locations();
        assert_eq!(locations.len(), registry.len());
        assert!(locations.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_no_players_keeps_globals() {
        let registry = AddressRegistry::new(Vec::new()).unwrap();
        assert_eq!(registry.len(), GLOBAL_FIELDS.len());
    }

    #[test]
    fn test_colliding_offsets_accumulate_for_every_player() {
        let mut layout = PlayerLayout::default();
        layout.tables.push(OffsetTable {
            name: "packed",
            base: Address::new(0x8060_0000),
            stride: 0x100,
            fields: vec![
                OffsetField { offset: 0x10, name: "shield", decoder: Decoder::TOP_SHORT },
                OffsetField { offset: 0x10, name: "shield_low", decoder: Decoder::Int(IntDecoder::masked(0xFFFF)) },
            ],
        });

        let registry = RegistryBuilder::new(layout).with_players([0, 1]).unwrap().build().unwrap();
        for player in 0..2u32 {
            let address = Address::new(0x8060_0010 + 0x100 * player);
            let binding = registry.get(&address).unwrap();
            assert_eq!(binding.len(), 2);

            let mut tree = StateTree::new();
            for handler in binding.handlers() {
                handler.apply(&mut tree, RawValue::from_word(0x0032_0007)).unwrap();
            }
            let base = Path::root().key("players").index(player as usize);
            assert_eq!(tree.value_at(&base.clone().key("shield")), Some(&Value::Int(0x32)));
            assert_eq!(tree.value_at(&base.key("shield_low")), Some(&Value::Int(0x7)));
        }
    }
}
