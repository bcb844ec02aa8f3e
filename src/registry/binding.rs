// Mon Oct 19 2026 - Alex

use crate::registry::handler::FieldHandler;

/// What a registered address is bound to: one handler, or several handlers
/// decoding independent sub-fields of the same word.
#[derive(Debug, Clone)]
pub enum AddressBinding {
    Single(FieldHandler),
    Multiple(Vec<FieldHandler>),
}

impl AddressBinding {
    /// Appends a handler, promoting a single binding to a list.
    pub fn push(&mut self, handler: FieldHandler) {
        let previous = std::mem::replace(self, AddressBinding::Multiple(Vec::new()));
        *self = match previous {
            AddressBinding::Single(first) => AddressBinding::Multiple(vec![first, handler]),
            AddressBinding::Multiple(mut handlers) => {
                handlers.push(handler);
                AddressBinding::Multiple(handlers)
            }
        };
    }

    pub fn handlers(&self) -> &[FieldHandler] {
        match self {
            AddressBinding::Single(handler) => std::slice::from_ref(handler),
            AddressBinding::Multiple(handlers) => handlers,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers().is_empty()
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, AddressBinding::Multiple(_))
    }
}

impl From<FieldHandler> for AddressBinding {
    fn from(handler: FieldHandler) -> Self {
        AddressBinding::Single(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decoder;
    use crate::state::Path;

    fn handler(name: &str) -> FieldHandler {
        FieldHandler::new(Path::root().key(name), Decoder::WORD)
    }

    #[test]
    fn test_push_promotes_and_keeps_order() {
        let mut binding = AddressBinding::from(handler("a"));
        assert!(!binding.is_multiple());
        binding.push(handler("b"));
        binding.push(handler("c"));

        assert!(binding.is_multiple());
        let names: Vec<String> = binding.handlers().iter().map(|h| h.path().to_string()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
