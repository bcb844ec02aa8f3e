// Mon Oct 19 2026 - Alex

//! The address list handed to a memory watcher: one canonical address per
//! line and nothing else.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::memory::{Address, MemoryError};
use crate::registry::AddressRegistry;

pub struct LocationsWriter;

impl LocationsWriter {
    pub fn render(registry: &AddressRegistry) -> String {
        let mut text = registry.locations().iter().join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn write_to<W: Write>(registry: &AddressRegistry, writer: &mut W) -> io::Result<()> {
        writer.write_all(Self::render(registry).as_bytes())
    }

    pub fn write_file(registry: &AddressRegistry, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(registry, &mut writer)?;
        writer.flush()?;
        log::info!("wrote {} locations to {}", registry.len(), path.display());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocationsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Address {
        line: usize,
        #[source]
        source: MemoryError,
    },
}

/// Reads an address list back, ignoring blank lines.
pub fn read_locations<R: BufRead>(reader: R) -> Result<Vec<Address>, LocationsError> {
    let mut addresses = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let address = Address::parse(&line).map_err(|source| LocationsError::Address { line: index + 1, source })?;
        addresses.push(address);
    }
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_render_is_one_canonical_address_per_line() {
        let registry = AddressRegistry::with_default_players().unwrap();
        let text = LocationsWriter::render(&registry);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), registry.len());
        assert!(text.ends_with('\n'));
        for line in &lines {
            assert_eq!(line.len(), 8);
            assert!(line.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
        assert!(lines.contains(&"80479D60"));
    }

    #[test]
    fn test_write_then_read_back() {
        let registry = AddressRegistry::new([1]).unwrap();
        let mut buffer = Vec::new();
        LocationsWriter::write_to(&registry, &mut buffer).unwrap();

        let addresses = read_locations(Cursor::new(buffer)).unwrap();
        assert_eq!(addresses, registry.locations());
    }

    #[test]
    fn test_read_reports_bad_line() {
        let err = read_locations(Cursor::new("80479D60\nnope\n")).unwrap_err();
        assert!(matches!(err, LocationsError::Address { line: 2, .. }));
    }
}
