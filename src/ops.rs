use crate::{error::Result, *};

/// Provides the orientation of a graph
pub trait GraphType {
    /// Returns *true* if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is stored in both directions
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns `Err(GraphError::NotUndirected)` for directed graphs
    fn require_undirected(&self) -> Result<()> {
        if self.is_directed() {
            Err(GraphError::NotUndirected)
        } else {
            Ok(())
        }
    }

    /// Returns `Err(GraphError::NotDirected)` for undirected graphs
    fn require_directed(&self) -> Result<()> {
        if self.is_directed() {
            Ok(())
        } else {
            Err(GraphError::NotDirected)
        }
    }
}

/// Provides getters pertaining to the vertices of a graph and the key <-> node translation
pub trait GraphNodeOrder {
    /// Type used to name vertices
    type Key: VertexKey;

    /// Returns the number of (live) vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an upper bound on all node ids; use it to size node-indexed vectors
    fn node_bound(&self) -> NumNodes;

    /// Returns an iterator over all live nodes in insertion order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns the node a key is stored in
    fn node_of(&self, key: &Self::Key) -> Option<Node>;

    /// Returns the key of a node.
    /// ** Panics if `u` is not a live node **
    fn key_of(&self, u: Node) -> &Self::Key;

    /// Like [`GraphNodeOrder::node_of`] but reports a missing vertex as an error
    fn try_node_of(&self, key: &Self::Key) -> Result<Node> {
        self.node_of(key).ok_or_else(|| GraphError::missing(key))
    }

    /// Returns an iterator over all keys in insertion order
    fn keys(&self) -> impl Iterator<Item = &Self::Key> + '_ {
        self.vertices().map(|u| self.key_of(u))
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges are counted individually; undirected edges once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns the neighbor list of a given vertex in insertion order.
    /// ** Panics if `u` is not a live node **
    fn neighbors_of(&self, u: Node) -> &[Neighbor];

    /// Returns the number of neighbor entries of `u` (counting parallel edges)
    /// ** Panics if `u` is not a live node **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }

    /// Returns an iterator over all entries `(u, neighbor)` of the graph.
    /// Undirected edges appear once per direction.
    fn edges(&self) -> impl Iterator<Item = (Node, Neighbor)> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors_of(u).iter().map(move |&nb| (u, nb)))
    }

    /// Returns every edge as keyed [`Edge`]; undirected edges appear once, oriented
    /// from the endpoint that comes first in iteration order
    fn keyed_edges(&self) -> Vec<Edge<Self::Key>> {
        let mut rank = vec![INVALID_NODE; self.node_bound() as usize];
        for (i, u) in self.vertices().enumerate() {
            rank[u as usize] = i as Node;
        }

        let mut seen_loops = fxhash::FxHashMap::<(Node, u64), usize>::default();
        self.edges()
            .filter(|&(u, nb)| {
                if self.is_directed() {
                    return true;
                }
                if u == nb.node {
                    // a self-loop is stored twice in an undirected list
                    let count = seen_loops.entry((u, nb.weight().to_bits())).or_default();
                    *count += 1;
                    return *count % 2 == 1;
                }
                rank[u as usize] < rank[nb.node as usize]
            })
            .map(|(u, nb)| {
                Edge::new(
                    self.key_of(u).clone(),
                    self.key_of(nb.node).clone(),
                    nb.weight(),
                )
            })
            .collect()
    }

    /// Returns all edges sorted ascending by weight (stable w.r.t. iteration order)
    fn sorted_edges(&self) -> Vec<Edge<Self::Key>> {
        let mut edges = self.keyed_edges();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        edges
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `key` is a vertex of the graph
    fn contains(&self, key: &Self::Key) -> bool {
        self.node_of(key).is_some()
    }

    /// Returns *true* if the edge `(u, v)` exists. Missing vertices yield *false*.
    fn is_neighbor(&self, u: &Self::Key, v: &Self::Key) -> bool {
        self.edge_multiplicity(u, v) > 0
    }

    /// Returns how many parallel `(u, v)` entries exist. Missing vertices yield `0`.
    fn edge_multiplicity(&self, u: &Self::Key, v: &Self::Key) -> NumEdges;
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph
    fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates an empty graph with room for `n` vertices
    fn with_capacity(directed: bool, n: usize) -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphNodeOrder {
    /// Adds a vertex with an empty neighbor list.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, key: Self::Key) -> bool;

    /// Adds all vertices in the collection
    fn add_vertices(&mut self, keys: impl IntoIterator<Item = Self::Key>) {
        for key in keys {
            self.add_vertex(key);
        }
    }

    /// Removes a vertex together with all edges incident to it
    fn remove_vertex(&mut self, key: &Self::Key) -> Result<()>;

    /// Removes the vertex only if its neighbor list is empty.
    /// Returns *true* if the vertex was removed.
    fn remove_degree_zero(&mut self, key: &Self::Key) -> Result<bool>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphVertexEditing {
    /// Adds the edge `(u, v)` (and `(v, u)` for undirected graphs) without checking for duplicates.
    /// A weight of `0` stores an unweighted edge.
    fn add_edge(&mut self, u: &Self::Key, v: &Self::Key, weight: Weight) -> Result<()>;

    /// Adds the edge `(u, v)` unless it exists; an existing edge keeps the smaller weight
    fn add_edge_no_duplicates(&mut self, u: &Self::Key, v: &Self::Key, weight: Weight)
    -> Result<()>;

    /// Removes all `(u, v)` entries (and `(v, u)` for undirected graphs)
    fn remove_edge(&mut self, u: &Self::Key, v: &Self::Key) -> Result<()>;

    /// Adds both endpoints if needed, then the edge.
    /// If `allow_duplicates` is *false*, [`GraphEdgeEditing::add_edge_no_duplicates`] is used.
    fn add_vertices_and_edge(
        &mut self,
        u: Self::Key,
        v: Self::Key,
        weight: Weight,
        allow_duplicates: bool,
    ) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        // both endpoints exist at this point
        let res = if allow_duplicates {
            self.add_edge(&u, &v, weight)
        } else {
            self.add_edge_no_duplicates(&u, &v, weight)
        };
        debug_assert!(res.is_ok());
    }

    /// Adds all edges in the collection, creating missing endpoints
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge<Self::Key>>>) {
        for e in edges {
            let Edge {
                source,
                target,
                weight,
            } = e.into();
            self.add_vertices_and_edge(source, target, weight, true);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphNodeOrder {
    /// Create a graph from an iterator over edges; endpoints are added on the fly
    fn from_edges(
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge<Self::Key>>>,
    ) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge<Self::Key>>>,
    ) -> Self {
        let mut graph = Self::new(directed);
        graph.add_edges(edges);
        graph
    }
}
