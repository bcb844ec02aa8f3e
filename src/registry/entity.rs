// Mon Oct 19 2026 - Alex

use crate::decode::Decoder;
use crate::memory::Address;
use crate::registry::error::RegistryError;
use crate::registry::handler::FieldHandler;
use crate::registry::layout::{PlayerLayout, PLAYERS_KEY};
use crate::state::Path;

/// Derives every address and handler belonging to one player slot.
pub struct EntityAddressGenerator<'a> {
    layout: &'a PlayerLayout,
}

impl<'a> EntityAddressGenerator<'a> {
    pub fn new(layout: &'a PlayerLayout) -> Self {
        Self { layout }
    }

    pub fn player_path(player: u8) -> Path {
        Path::root().key(PLAYERS_KEY).index(player as usize)
    }

    fn handler(player: u8, name: &str, decoder: Decoder) -> FieldHandler {
        FieldHandler::new(Self::player_path(player).key(name), decoder)
    }

    pub fn cursor_addresses(&self, player: u8) -> Result<Vec<Address>, RegistryError> {
        let stride = -(self.layout.cursor.stride as i64);
        self.layout
            .cursor
            .fields
            .iter()
            .map(|field| field.base.strided(stride, player).map_err(RegistryError::from))
            .collect()
    }

    pub fn status_address(&self, player: u8) -> Result<Address, RegistryError> {
        let status = &self.layout.status;
        Ok(status.base.strided(status.stride as i64, player)?)
    }

    /// Addresses paired with their handlers, in declaration order.
    ///
    /// Several entries may share an address; the caller decides how to merge
    /// them.
    pub fn generate(&self, player: u8) -> Result<Vec<(Address, FieldHandler)>, RegistryError> {
        let mut entries = Vec::new();

        let cursor_addresses = self.cursor_addresses(player)?;
        for (field, address) in self.layout.cursor.fields.iter().zip(cursor_addresses) {
            entries.push((address, Self::handler(player, field.name, field.decoder)));
        }

        let status_address = self.status_address(player)?;
        for field in &self.layout.status.fields {
            entries.push((status_address, Self::handler(player, field.name, field.decoder)));
        }

        for table in &self.layout.tables {
            let block = table.base.strided(table.stride as i64, player)?;
            for field in &table.fields {
                let address = block.checked_offset(field.offset as i64)?;
                entries.push((address, Self::handler(player, field.name, field.decoder)));
            }
            log::trace!("player {}: {} block at {}", player, table.name, block);
        }

        log::trace!("player {}: generated {} field handlers", player, entries.len());
        Ok(entries)
    }
}
