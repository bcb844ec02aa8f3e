// Mon Oct 19 2026 - Alex

use std::fmt;

use crate::decode::{Decoder, Value};
use crate::memory::RawValue;
use crate::state::{Path, StateError, StateTree};

/// Decodes a raw word and stores the result at one path.
#[derive(Debug, Clone)]
pub struct FieldHandler {
    path: Path,
    decoder: Decoder,
}

impl FieldHandler {
    pub fn new(path: Path, decoder: Decoder) -> Self {
        Self { path, decoder }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn decode(&self, raw: RawValue) -> Value {
        self.decoder.decode(raw)
    }

    pub fn apply(&self, tree: &mut StateTree, raw: RawValue) -> Result<(), StateError> {
        tree.set_path(&self.path, self.decode(raw))
    }
}

impl fmt::Display for FieldHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.path, self.decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_writes_exactly_one_path() {
        let handler = FieldHandler::new(Path::root().key("players").index(0).key("stock"), Decoder::TOP_BYTE);
        let mut tree = StateTree::new();
        handler.apply(&mut tree, RawValue::from_word(0x0400_0000)).unwrap();

        assert_eq!(tree.value_at(handler.path()), Some(&Value::Int(4)));
        assert_eq!(tree.to_json(false).unwrap(), r#"{"players":{"0":{"stock":4}}}"#);
    }

    #[test]
    fn test_display() {
        let handler = FieldHandler::new(Path::root().key("frame"), Decoder::WORD);
        assert_eq!(handler.to_string(), "frame <- int(shift=0, mask=0xFFFFFFFF)");
    }
}
