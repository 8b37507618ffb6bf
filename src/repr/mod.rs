/*!
# Graph Representation

[`Graph`] is a mutable adjacency list over arbitrary vertex keys.
Keys are interned to dense [`Node`] slots by a [`KeyMapper`] so that neighbor lists,
visited-flags and distance tables can be plain vectors.

## Directed vs Undirected

The orientation is fixed at construction:

- In an **undirected** graph every edge `(u, v, w)` is stored as the two entries `u -> v` and `v -> u`
  with the same weight; both are added and removed together.
- In a **directed** graph only the entry `u -> v` is stored.

Parallel edges are allowed (see [`GraphEdgeEditing::add_edge`]) and counted individually;
[`GraphEdgeEditing::add_edge_no_duplicates`] keeps a simple graph instead.
*/

use std::fmt::{Display, Formatter};

use crate::{error::Result, ops::*, utils::KeyMapper, *};

/// Mutable adjacency-list graph over vertex keys `K`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = Graph::undirected();
/// g.add_vertex("A");
/// g.add_vertex("B");
/// g.add_edge(&"A", &"B", 3.0).unwrap();
///
/// assert!(g.is_neighbor(&"B", &"A"));
/// assert_eq!(g.number_of_edges(), 1);
/// assert!(g.add_edge(&"A", &"C", 1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K> {
    directed: bool,
    mapper: KeyMapper<K>,
    nbs: Vec<Vec<Neighbor>>,
    num_entries: usize,
}

impl<K: VertexKey> Graph<K> {
    /// Creates an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Returns the neighbor list of `key` as `(neighbor key, weight)` pairs,
    /// where unweighted entries report `None`
    pub fn neighbors(
        &self,
        key: &K,
    ) -> Result<impl Iterator<Item = (&K, Option<Weight>)> + '_> {
        let u = self.try_node_of(key)?;
        Ok(self.nbs[u as usize]
            .iter()
            .map(|nb| (self.key_of(nb.node), nb.weight)))
    }

    /// Returns the smallest weight among all `(u, v)` entries, if any
    pub fn weight_of(&self, u: &K, v: &K) -> Option<Weight> {
        let (u, v) = (self.node_of(u)?, self.node_of(v)?);
        self.nbs[u as usize]
            .iter()
            .filter(|nb| nb.node == v)
            .map(Neighbor::weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Removes all entries of `u`'s neighbor list matching `predicate` and returns how many were removed
    fn retain_neighbors<F: FnMut(&Neighbor) -> bool>(&mut self, u: Node, mut keep: F) -> usize {
        let list = &mut self.nbs[u as usize];
        let before = list.len();
        list.retain(|nb| keep(nb));
        let removed = before - list.len();
        self.num_entries -= removed;
        removed
    }

    fn push_entry(&mut self, u: Node, nb: Neighbor) {
        self.nbs[u as usize].push(nb);
        self.num_entries += 1;
    }
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<K: VertexKey> GraphType for Graph<K> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<K: VertexKey> GraphNodeOrder for Graph<K> {
    type Key = K;

    fn number_of_nodes(&self) -> NumNodes {
        self.mapper.len()
    }

    fn node_bound(&self) -> NumNodes {
        self.mapper.bound()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.mapper.nodes()
    }

    fn node_of(&self, key: &K) -> Option<Node> {
        self.mapper.node_of(key)
    }

    fn key_of(&self, u: Node) -> &K {
        self.mapper
            .key_of(u)
            .unwrap_or_else(|| panic!("node {u} is not part of the graph"))
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.mapper.iter().map(|(_, k)| k)
    }
}

impl<K: VertexKey> GraphEdgeOrder for Graph<K> {
    fn number_of_edges(&self) -> NumEdges {
        if self.directed {
            self.num_entries as NumEdges
        } else {
            (self.num_entries / 2) as NumEdges
        }
    }
}

impl<K: VertexKey> AdjacencyList for Graph<K> {
    fn neighbors_of(&self, u: Node) -> &[Neighbor] {
        debug_assert!(self.mapper.is_live(u));
        &self.nbs[u as usize]
    }
}

impl<K: VertexKey> AdjacencyTest for Graph<K> {
    fn edge_multiplicity(&self, u: &K, v: &K) -> NumEdges {
        match (self.node_of(u), self.node_of(v)) {
            (Some(u), Some(v)) => self.nbs[u as usize]
                .iter()
                .filter(|nb| nb.node == v)
                .count() as NumEdges,
            _ => 0,
        }
    }
}

impl<K: VertexKey> GraphNew for Graph<K> {
    fn with_capacity(directed: bool, n: usize) -> Self {
        Self {
            directed,
            mapper: KeyMapper::with_capacity(n),
            nbs: Vec::with_capacity(n),
            num_entries: 0,
        }
    }
}

impl<K: VertexKey> GraphVertexEditing for Graph<K> {
    fn add_vertex(&mut self, key: K) -> bool {
        let (_, inserted) = self.mapper.insert(key);
        if inserted {
            self.nbs.push(Vec::new());
        }
        debug_assert_eq!(self.nbs.len(), self.mapper.bound() as usize);
        inserted
    }

    fn remove_vertex(&mut self, key: &K) -> Result<()> {
        let v = self.try_node_of(key)?;

        while let Some(nb) = self.nbs[v as usize].pop() {
            self.num_entries -= 1;
            if !self.directed && nb.node != v {
                self.retain_neighbors(nb.node, |x| x.node != v);
            }
        }

        if self.directed {
            let others = self.mapper.nodes().filter(|&u| u != v).collect::<Vec<_>>();
            for u in others {
                self.retain_neighbors(u, |x| x.node != v);
            }
        }

        self.mapper.remove(v);
        Ok(())
    }

    fn remove_degree_zero(&mut self, key: &K) -> Result<bool> {
        let u = self.try_node_of(key)?;
        if self.nbs[u as usize].is_empty() {
            self.remove_vertex(key)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl<K: VertexKey> GraphEdgeEditing for Graph<K> {
    fn add_edge(&mut self, u: &K, v: &K, weight: Weight) -> Result<()> {
        let (u, v) = (self.try_node_of(u)?, self.try_node_of(v)?);

        self.push_entry(u, Neighbor::new(v, weight));
        if !self.directed {
            self.push_entry(v, Neighbor::new(u, weight));
        }
        Ok(())
    }

    fn add_edge_no_duplicates(&mut self, u: &K, v: &K, weight: Weight) -> Result<()> {
        let (un, vn) = (self.try_node_of(u)?, self.try_node_of(v)?);

        let Some(pos) = self.nbs[un as usize].iter().position(|nb| nb.node == vn) else {
            return self.add_edge(u, v, weight);
        };

        // keep the cheaper of both edges
        if weight < self.nbs[un as usize][pos].weight() {
            let lowered = Neighbor::new(vn, weight).weight;
            self.nbs[un as usize][pos].weight = lowered;

            if !self.directed {
                if let Some(mirror) = self.nbs[vn as usize].iter_mut().find(|nb| nb.node == un) {
                    mirror.weight = lowered;
                }
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &K, v: &K) -> Result<()> {
        let (u, v) = (self.try_node_of(u)?, self.try_node_of(v)?);

        self.retain_neighbors(u, |nb| nb.node != v);
        if !self.directed && u != v {
            self.retain_neighbors(v, |nb| nb.node != u);
        }
        Ok(())
    }
}

impl<K: VertexKey> Display for Graph<K> {
    /// One line per neighbor entry: `u - v - w` (undirected) or `u -> v - w` (directed);
    /// the weight is omitted for unweighted entries
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "-" };
        for (u, nb) in self.edges() {
            let (u, v) = (self.key_of(u), self.key_of(nb.node));
            match nb.weight {
                Some(w) => writeln!(f, "{u} {arrow} {v} - {w}")?,
                None => writeln!(f, "{u} {arrow} {v}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn neighbor_keys<'a>(g: &'a Graph<&'static str>, u: &str) -> Vec<&'a str> {
        let u = g.node_of(&u).unwrap();
        g.neighbors_of(u).iter().map(|nb| *g.key_of(nb.node)).collect()
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::undirected();
        assert!(g.add_vertex("A"));
        assert!(!g.add_vertex("A"));
        assert_eq!(g.number_of_nodes(), 1);
        assert!(g.contains(&"A"));
        assert!(!g.contains(&"B"));
    }

    #[test]
    fn add_edge_requires_endpoints() {
        let mut g = Graph::directed();
        g.add_vertex("A");
        assert_eq!(
            g.add_edge(&"A", &"B", 1.0),
            Err(GraphError::MissingVertex("B".into()))
        );
        assert_eq!(
            g.remove_edge(&"C", &"A"),
            Err(GraphError::MissingVertex("C".into()))
        );
        assert!(g.is_singleton_graph());
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let g = scenario_graph();
        for (u, nb) in g.edges() {
            let back = g
                .neighbors_of(nb.node)
                .iter()
                .filter(|x| x.node == u && x.weight == nb.weight)
                .count();
            assert!(back >= 1);
        }
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.weight_of(&"C", &"B"), Some(2.0));
    }

    #[test]
    fn parallel_edges_are_counted() {
        let mut g = Graph::undirected();
        g.add_vertices_and_edge("u", "v", 0.0, true);
        g.add_vertices_and_edge("u", "v", 0.0, true);
        g.add_vertices_and_edge("v", "u", 0.0, true);

        assert_eq!(g.edge_multiplicity(&"u", &"v"), 3);
        assert_eq!(g.edge_multiplicity(&"v", &"u"), 3);
        assert_eq!(g.number_of_edges(), 3);

        g.remove_edge(&"v", &"u").unwrap();
        assert_eq!(g.edge_multiplicity(&"u", &"v"), 0);
        assert!(g.is_singleton_graph());
    }

    #[test]
    fn no_duplicates_keeps_minimum() {
        let mut g = Graph::undirected();
        g.add_vertices_and_edge("a", "b", 5.0, false);
        g.add_vertices_and_edge("a", "b", 7.0, false);
        assert_eq!(g.weight_of(&"a", &"b"), Some(5.0));

        g.add_vertices_and_edge("a", "b", 2.0, false);
        assert_eq!(g.weight_of(&"a", &"b"), Some(2.0));
        assert_eq!(g.weight_of(&"b", &"a"), Some(2.0));
        assert_eq!(g.edge_multiplicity(&"a", &"b"), 1);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn remove_vertex_removes_incident_edges() {
        let mut g = scenario_graph();
        g.remove_vertex(&"C").unwrap();

        assert!(!g.contains(&"C"));
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(neighbor_keys(&g, "A"), vec!["B"]);
        assert!(neighbor_keys(&g, "D").is_empty());

        assert_eq!(g.remove_degree_zero(&"A"), Ok(false));
        assert_eq!(g.remove_degree_zero(&"D"), Ok(true));
        assert!(!g.contains(&"D"));
        assert!(g.remove_degree_zero(&"D").is_err());
    }

    #[test]
    fn parallel_edges_and_loops_are_removed_entirely() {
        let mut g = Graph::undirected();
        g.add_vertices(["a", "b", "c"]);
        for (u, v) in [("a", "b"), ("a", "b"), ("b", "c"), ("b", "b")] {
            g.add_edge(&u, &v, 1.0).unwrap();
        }
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.edge_multiplicity(&"b", &"b"), 2);
        let mut h = g.clone();

        g.remove_edge(&"a", &"b").unwrap();
        assert_eq!(g.edge_multiplicity(&"a", &"b"), 0);
        assert_eq!(g.edge_multiplicity(&"b", &"a"), 0);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.edges().count(), 4);
        assert_eq!(neighbor_keys(&g, "b"), vec!["c", "b", "b"]);

        g.remove_vertex(&"b").unwrap();
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.edges().count(), 0);
        assert!(neighbor_keys(&g, "c").is_empty());

        // parallel edges to the removed vertex vanish from both sides at once
        h.remove_vertex(&"b").unwrap();
        assert_eq!(h.number_of_nodes(), 2);
        assert_eq!(h.number_of_edges(), 0);
        assert!(neighbor_keys(&h, "a").is_empty());

        h.add_vertex("b");
        h.add_edge(&"b", &"b", 0.5).unwrap();
        h.remove_edge(&"b", &"b").unwrap();
        assert_eq!(h.number_of_edges(), 0);
        assert_eq!(h.degree_of(h.node_of(&"b").unwrap()), 0);
    }

    #[test]
    fn remove_vertex_directed_drops_incoming() {
        let mut g = Graph::from_edges(true, [("a", "b"), ("b", "c"), ("c", "b"), ("c", "a")]);
        g.remove_vertex(&"b").unwrap();

        assert_eq!(g.number_of_edges(), 1);
        assert!(g.is_neighbor(&"c", &"a"));
        assert!(neighbor_keys(&g, "a").is_empty());
    }

    #[test]
    fn removed_key_can_be_added_again() {
        let mut g = scenario_graph();
        g.remove_vertex(&"A").unwrap();
        assert!(g.add_vertex("A"));
        assert_eq!(g.keys().copied().collect_vec(), vec!["B", "C", "D", "A"]);
        assert_eq!(g.degree_of(g.node_of(&"A").unwrap()), 0);
    }

    #[test]
    fn display_format() {
        let mut g = Graph::directed();
        g.add_vertices_and_edge(1, 2, 4.0, true);
        g.add_vertices_and_edge(2, 3, 0.0, true);
        assert_eq!(g.to_string(), "1 -> 2 - 4\n2 -> 3\n");

        let mut g = Graph::undirected();
        g.add_vertices_and_edge("x", "y", 0.0, true);
        assert_eq!(g.to_string(), "x - y\ny - x\n");
    }

    #[test]
    fn keyed_edges_lists_undirected_edges_once() {
        let g = scenario_graph();
        let edges = g
            .keyed_edges()
            .into_iter()
            .map(|e| (e.source, e.target, e.weight))
            .collect_vec();
        assert_eq!(
            edges,
            vec![
                ("A", "B", 1.0),
                ("A", "C", 4.0),
                ("B", "C", 2.0),
                ("C", "D", 1.0)
            ]
        );

        let sorted = g.sorted_edges().into_iter().map(|e| e.weight).collect_vec();
        assert_eq!(sorted, vec![1.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn random_editing_keeps_counts_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for _ in 0..20 {
                let mut g = random_graph(rng, 15, 40, directed);
                for _ in 0..10 {
                    let u = rng.random_range(0..15u32);
                    if rng.random_bool(0.5) {
                        let _ = g.remove_vertex(&u);
                    } else {
                        let v = rng.random_range(0..15u32);
                        let _ = g.remove_edge(&u, &v);
                    }

                    let entries = g.edges().count();
                    let expected = if directed { entries } else { entries / 2 };
                    assert_eq!(g.number_of_edges() as usize, expected);
                    assert!(g.edges().all(|(_, nb)| g.vertices().contains(&nb.node)));
                }
            }
        }
    }
}
