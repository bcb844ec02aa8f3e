// Mon Oct 19 2026 - Alex

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::decode::Value;
use crate::state::error::StateError;
use crate::state::path::{Path, PathSegment};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Value(Value),
    Map(IndexMap<String, Node>),
    Indexed(BTreeMap<usize, Node>),
}

impl Node {
    fn container_for(segment: &PathSegment) -> Node {
        match segment {
            PathSegment::Key(_) => Node::Map(IndexMap::new()),
            PathSegment::Index(_) => Node::Indexed(BTreeMap::new()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Value(_) => "value",
            Node::Map(_) => "map",
            Node::Indexed(_) => "indexed container",
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    fn child(&self, segment: &PathSegment) -> Option<&Node> {
        match (self, segment) {
            (Node::Map(map), PathSegment::Key(key)) => map.get(key),
            (Node::Indexed(items), PathSegment::Index(index)) => items.get(index),
            _ => None,
        }
    }

    fn expected_for(segment: &PathSegment) -> &'static str {
        match segment {
            PathSegment::Key(_) => "map",
            PathSegment::Index(_) => "indexed container",
        }
    }
}

/// Nested output state that decoded fields are written into.
///
/// Intermediate containers are created on demand: a key segment makes a map,
/// an index segment makes an indexed container. Descending through an
/// existing scalar, or replacing a container with a scalar, is a
/// [`StateError::StructuralMismatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StateTree {
    root: Node,
}

impl Default for StateTree {
    fn default() -> Self {
        Self::new()
    }
}

impl StateTree {
    pub fn new() -> Self {
        Self {
            root: Node::Map(IndexMap::new()),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        match &self.root {
            Node::Map(map) => map.is_empty(),
            Node::Indexed(items) => items.is_empty(),
            Node::Value(_) => false,
        }
    }

    pub fn set_path(&mut self, path: &Path, value: Value) -> Result<(), StateError> {
        let (last, parents) = path.segments().split_last().ok_or(StateError::EmptyPath)?;

        let mut node = &mut self.root;
        for (depth, segment) in parents.iter().enumerate() {
            let next = &path.segments()[depth + 1];
            node = descend(node, segment, next, path, depth)?;
        }

        assign(node, last, value, path, parents.len())
    }

    pub fn get(&self, path: &Path) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    pub fn value_at(&self, path: &Path) -> Option<&Value> {
        self.get(path).and_then(Node::as_value)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn mismatch(path: &Path, depth: usize, segment: &PathSegment, found: &Node) -> StateError {
    StateError::StructuralMismatch {
        path: path.to_string(),
        depth,
        expected: Node::expected_for(segment),
        found: found.kind(),
    }
}

fn descend<'a>(
    node: &'a mut Node,
    segment: &PathSegment,
    next: &PathSegment,
    path: &Path,
    depth: usize,
) -> Result<&'a mut Node, StateError> {
    let child = match (node, segment) {
        (Node::Map(map), PathSegment::Key(key)) => map
            .entry(key.clone())
            .or_insert_with(|| Node::container_for(next)),
        (Node::Indexed(items), PathSegment::Index(index)) => items
            .entry(*index)
            .or_insert_with(|| Node::container_for(next)),
        (other, segment) => return Err(mismatch(path, depth, segment, other)),
    };

    if let Node::Value(_) = child {
        return Err(mismatch(path, depth + 1, next, child));
    }
    Ok(child)
}

fn assign(
    node: &mut Node,
    segment: &PathSegment,
    value: Value,
    path: &Path,
    depth: usize,
) -> Result<(), StateError> {
    let slot = match (node, segment) {
        (Node::Map(map), PathSegment::Key(key)) => map.entry(key.clone()).or_insert(Node::Value(value)),
        (Node::Indexed(items), PathSegment::Index(index)) => items.entry(*index).or_insert(Node::Value(value)),
        (other, segment) => return Err(mismatch(path, depth, segment, other)),
    };

    match slot {
        Node::Value(current) => {
            *current = value;
            Ok(())
        }
        container => Err(StateError::StructuralMismatch {
            path: path.to_string(),
            depth: depth + 1,
            expected: "value",
            found: container.kind(),
        }),
    }
}
