/*!
# Key Mapper

Interns vertex keys to dense [`Node`] slots and back.
Slots of removed keys are tombstoned rather than reused, so node ids that an algorithm
obtained earlier never silently change meaning while the graph is edited.
*/

use fxhash::FxHashMap;

use crate::node::*;

/// Bidirectional mapping between vertex keys and node slots.
///
/// Iterating over [`KeyMapper::nodes`] yields live slots in insertion order.
#[derive(Debug, Clone)]
pub struct KeyMapper<K> {
    keys: Vec<Option<K>>,
    ids: FxHashMap<K, Node>,
}

impl<K: VertexKey> Default for KeyMapper<K> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K: VertexKey> KeyMapper<K> {
    /// Creates an empty mapper
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapper with room for `n` keys
    pub fn with_capacity(n: usize) -> Self {
        Self {
            keys: Vec::with_capacity(n),
            ids: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Returns the slot of `key`, assigning the next free slot if the key is new.
    /// The flag is *true* exactly if the key was inserted by this call.
    pub fn insert(&mut self, key: K) -> (Node, bool) {
        if let Some(&u) = self.ids.get(&key) {
            return (u, false);
        }

        let u = self.keys.len() as Node;
        debug_assert!(u < INVALID_NODE);
        self.ids.insert(key.clone(), u);
        self.keys.push(Some(key));
        (u, true)
    }

    /// Returns the slot of `key` if it is live
    pub fn node_of(&self, key: &K) -> Option<Node> {
        self.ids.get(key).copied()
    }

    /// Returns the key stored in slot `u` if the slot is live
    pub fn key_of(&self, u: Node) -> Option<&K> {
        self.keys.get(u as usize).and_then(Option::as_ref)
    }

    /// Tombstones slot `u` and returns its key
    pub fn remove(&mut self, u: Node) -> Option<K> {
        let key = self.keys.get_mut(u as usize)?.take()?;
        self.ids.remove(&key);
        Some(key)
    }

    /// Returns *true* if slot `u` holds a key
    pub fn is_live(&self, u: Node) -> bool {
        self.key_of(u).is_some()
    }

    /// Number of live keys
    pub fn len(&self) -> NumNodes {
        self.ids.len() as NumNodes
    }

    /// Returns *true* if no key is live
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of slots ever handed out (live or tombstoned).
    /// Every live node is strictly smaller than this bound.
    pub fn bound(&self) -> NumNodes {
        self.keys.len() as NumNodes
    }

    /// Iterates over all live slots in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(u, k)| k.as_ref().map(|_| u as Node))
    }

    /// Iterates over all live `(slot, key)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Node, &K)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(u, k)| k.as_ref().map(|k| (u as Node, k)))
    }
}
