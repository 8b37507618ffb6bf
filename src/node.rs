/*!
# Node Representation

Vertices are addressed by arbitrary user keys (see [`VertexKey`]), but every algorithm in this crate
works on dense `Node = u32` slots that a graph assigns to its keys on insertion.
This lets the algorithms index plain vectors instead of hashing keys in their inner loops,
and only translate back to keys when they build their result records.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Anything that can name a vertex.
///
/// Blanket-implemented for every type that is cheap enough to clone, hashable and printable,
/// so `String`, `&str` and all integer types can be used directly.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let mut named = Graph::<&str>::undirected();
/// named.add_vertex("A");
///
/// let mut numbered = Graph::<u64>::directed();
/// numbered.add_vertex(42);
/// ```
pub trait VertexKey: Clone + Eq + Hash + Debug + Display {}

impl<K> VertexKey for K where K: Clone + Eq + Hash + Debug + Display {}
