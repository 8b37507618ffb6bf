/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A lazy traversal iterator ([`TraversalSearch`]) whose order is determined by its
  [`NodeSequencer`]: a queue yields BFS order.
- A frame-based depth-first search ([`DepthFirstSearch`]) that reports when a node is
  discovered and when it is finished, without recursion.
- The keyed entry points [`Traversal::bfs`], [`Traversal::dfs`] and [`Traversal::topological_sort`]
  that turn these searches into result records.
*/

use std::marker::PhantomData;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Generic traversal iterator.
///
/// Maintains a frontier (queue or stack) of discovered nodes and the set of visited nodes.
/// A node is marked visited when it is pushed, so every node is yielded at most once.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: Vec<bool>,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting nodes in breadth-first order from a given node.
pub type BFS<'a, G> = TraversalSearch<'a, G, Queue<Node>, Node>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Queue<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for nb in self.graph.neighbors_of(u) {
            if !self.visited[nb.node as usize] {
                self.visited[nb.node as usize] = true;
                self.sequencer.push(I::new_with_predecessor(u, nb.node));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.node_bound() as usize];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the first yet unvisited node (in vertex order) and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.sequencer.is_exhausted());
        let node = self.graph.vertices().find(|&u| !self.visited[u as usize]);
        match node {
            None => false,
            Some(x) => {
                self.visited[x as usize] = true;
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }
}

/// Events reported by a [`DepthFirstSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` was reached for the first time from `parent` at the given depth
    Discover {
        node: Node,
        parent: Option<Node>,
        depth: NumNodes,
    },
    /// All neighbors of the node have been examined
    Finish(Node),
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    cursor: usize,
    depth: NumNodes,
}

/// Depth-first search over an explicit stack of frames `(node, next neighbor to examine)`.
///
/// Each node is discovered once and finished once; the sequence of
/// [`DfsEvent::Finish`] events is a post-order of the search forest.
pub struct DepthFirstSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: Vec<bool>,
    frames: Stack<Frame>,
    pending: Option<DfsEvent>,
}

impl<'a, G: AdjacencyList> DepthFirstSearch<'a, G> {
    /// Creates a search that has not started yet; use [`DepthFirstSearch::restart_at`]
    pub fn unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.node_bound() as usize],
            frames: Stack::new(),
            pending: None,
        }
    }

    /// Creates a search starting at `start`
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut search = Self::unstarted(graph);
        search.restart_at(start);
        search
    }

    /// Starts a new tree of the search forest at `u` unless `u` was visited already.
    /// Returns *true* if the search was restarted.
    pub fn restart_at(&mut self, u: Node) -> bool {
        debug_assert!(self.frames.is_empty() && self.pending.is_none());
        if self.visited[u as usize] {
            return false;
        }

        self.visited[u as usize] = true;
        self.frames.push(Frame {
            node: u,
            cursor: 0,
            depth: 0,
        });
        self.pending = Some(DfsEvent::Discover {
            node: u,
            parent: None,
            depth: 0,
        });
        true
    }

    /// Restarts at the first unvisited node in vertex order; see [`DepthFirstSearch::restart_at`]
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        match self.graph.vertices().find(|&u| !self.visited[u as usize]) {
            Some(u) => self.restart_at(u),
            None => false,
        }
    }
}

impl<G: AdjacencyList> Iterator for DepthFirstSearch<'_, G> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<DfsEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let Frame {
            node: u,
            cursor,
            depth,
        } = *self.frames.last()?;

        let nbs = self.graph.neighbors_of(u);
        if let Some(offset) = nbs[cursor..]
            .iter()
            .position(|nb| !self.visited[nb.node as usize])
        {
            let v = nbs[cursor + offset].node;
            if let Some(top) = self.frames.last_mut() {
                top.cursor = cursor + offset + 1;
            }

            self.visited[v as usize] = true;
            self.frames.push(Frame {
                node: v,
                cursor: 0,
                depth: depth + 1,
            });
            return Some(DfsEvent::Discover {
                node: v,
                parent: Some(u),
                depth: depth + 1,
            });
        }

        self.frames.pop();
        Some(DfsEvent::Finish(u))
    }
}

/// Result of a breadth-first search
#[derive(Debug, Clone)]
pub struct BfsTree<K> {
    /// Vertices in the order they were dequeued
    pub order: Vec<K>,
    /// Discovering vertex of every reached vertex; `None` for the source
    pub parent: FxHashMap<K, Option<K>>,
    /// Minimum number of hops from the source to every reached vertex
    pub distance: FxHashMap<K, NumNodes>,
}

impl<K: VertexKey> BfsTree<K> {
    /// Returns *true* if `key` was reached from the source
    pub fn reached(&self, key: &K) -> bool {
        self.distance.contains_key(key)
    }

    /// Returns a path with the fewest hops from the source to `target`, if `target` was reached
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        path_from_parents(&self.parent, target)
    }
}

/// Result of a depth-first search
#[derive(Debug, Clone)]
pub struct DfsTree<K> {
    /// Vertices in discovery order
    pub order: Vec<K>,
    /// Depth in the search tree at the time of discovery
    pub distance: FxHashMap<K, NumNodes>,
    /// Discovering vertex of every reached vertex; `None` for the source
    pub parent: FxHashMap<K, Option<K>>,
    /// Vertices in the order they were finished (post-order)
    pub finish: Vec<K>,
    /// Finish label (position in `finish`) of every reached vertex
    pub labels: FxHashMap<K, NumNodes>,
}

/// Result of [`Traversal::topological_sort`]
#[derive(Debug, Clone)]
pub struct TopologicalOrder<K> {
    /// Global finish label of every vertex
    pub labels: FxHashMap<K, NumNodes>,
    /// Concatenated finish orders of all depth-first searches
    pub finish: Vec<K>,
}

impl<K: VertexKey> TopologicalOrder<K> {
    /// Vertices ordered such that every edge points forward (on acyclic graphs)
    pub fn ordering(&self) -> Vec<K> {
        self.finish.iter().rev().cloned().collect()
    }
}

/// Follows the parent pointers from `target` up to the root.
/// Returns `None` if `target` has no parent entry or the pointers run in a cycle.
pub(crate) fn path_from_parents<K: VertexKey>(
    parent: &FxHashMap<K, Option<K>>,
    target: &K,
) -> Option<Vec<K>> {
    let mut path = vec![target.clone()];
    let mut current = parent.get(target)?;
    while let Some(p) = current {
        if path.len() > parent.len() {
            return None;
        }
        path.push(p.clone());
        current = parent.get(p)?;
    }
    path.reverse();
    Some(path)
}

/// Traversal algorithms, exposed as methods on every [`AdjacencyList`]
pub trait Traversal: AdjacencyList {
    /// Returns a lazy breadth-first iterator starting at node `start`
    fn bfs_search(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Like [`Traversal::bfs_search`] but yields `(predecessor, node)` pairs
    fn bfs_search_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a frame-based depth-first search starting at node `start`
    fn dfs_search(&self, start: Node) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }

    /// Breadth-first search from `source`.
    /// Vertices not reachable from `source` are absent from the result.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(false, [("a", "b"), ("b", "c"), ("a", "d")]);
    /// let tree = g.bfs(&"a").unwrap();
    ///
    /// assert_eq!(tree.distance[&"c"], 2);
    /// assert_eq!(tree.parent[&"c"], Some("b"));
    /// assert_eq!(tree.parent[&"a"], None);
    /// ```
    fn bfs(&self, source: &Self::Key) -> Result<BfsTree<Self::Key>> {
        let s = self.try_node_of(source)?;

        let mut depth = vec![0 as NumNodes; self.node_bound() as usize];
        let mut tree = BfsTree {
            order: Vec::new(),
            parent: FxHashMap::default(),
            distance: FxHashMap::default(),
        };

        for item in self.bfs_search_with_predecessor(s) {
            let (pred, u) = item.predecessor_with_item();
            depth[u as usize] = pred.map_or(0, |p| depth[p as usize] + 1);

            let key = self.key_of(u).clone();
            tree.order.push(key.clone());
            tree.parent
                .insert(key.clone(), pred.map(|p| self.key_of(p).clone()));
            tree.distance.insert(key, depth[u as usize]);
        }

        Ok(tree)
    }

    /// Depth-first search from `source` without recursion.
    /// A vertex is finished (and labeled) once all its neighbors have been examined.
    fn dfs(&self, source: &Self::Key) -> Result<DfsTree<Self::Key>> {
        let s = self.try_node_of(source)?;

        let mut tree = DfsTree {
            order: Vec::new(),
            distance: FxHashMap::default(),
            parent: FxHashMap::default(),
            finish: Vec::new(),
            labels: FxHashMap::default(),
        };

        let mut label: NumNodes = 0;
        for event in self.dfs_search(s) {
            match event {
                DfsEvent::Discover {
                    node,
                    parent,
                    depth,
                } => {
                    let key = self.key_of(node).clone();
                    tree.order.push(key.clone());
                    tree.distance.insert(key.clone(), depth);
                    tree.parent
                        .insert(key, parent.map(|p| self.key_of(p).clone()));
                }
                DfsEvent::Finish(node) => {
                    let key = self.key_of(node).clone();
                    tree.labels.insert(key.clone(), label);
                    tree.finish.push(key);
                    label += 1;
                }
            }
        }

        Ok(tree)
    }

    /// Runs a depth-first search from every unvisited vertex (in vertex order) and concatenates
    /// the finish orders. On cyclic graphs the result is not a topological order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [("shirt", "tie"), ("tie", "jacket"), ("pants", "jacket")]);
    /// let order = g.topological_sort().ordering();
    ///
    /// let pos = |k: &str| order.iter().position(|x| *x == k).unwrap();
    /// assert!(pos("shirt") < pos("tie"));
    /// assert!(pos("tie") < pos("jacket"));
    /// assert!(pos("pants") < pos("jacket"));
    /// ```
    fn topological_sort(&self) -> TopologicalOrder<Self::Key> {
        let mut result = TopologicalOrder {
            labels: FxHashMap::default(),
            finish: Vec::with_capacity(self.len()),
        };

        let mut search = DepthFirstSearch::unstarted(self);
        let mut trees = 0;
        while search.try_restart_at_unvisited() {
            trees += 1;
            for event in search.by_ref() {
                if let DfsEvent::Finish(u) = event {
                    let key = self.key_of(u).clone();
                    result.labels.insert(key.clone(), result.finish.len() as NumNodes);
                    result.finish.push(key);
                }
            }
        }

        trace!("topological sort used {trees} depth-first searches");
        result
    }
}

impl<G: AdjacencyList> Traversal for G {}
