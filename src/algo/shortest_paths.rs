/*!
# Single-Source Shortest Paths

- [`ShortestPaths::dijkstra`] for non-negative weights, driven by any [`PriorityQueue`]
- [`ShortestPaths::bellman_ford`] for arbitrary weights, reporting negative cycles as data

Unweighted entries count as weight `0`. Unreachable vertices have distance `+∞`.
*/

use super::*;
use crate::heap::{BinaryMinHeap, FibonacciHeap, HeapKind, PriorityQueue};

/// Distances and parent pointers computed from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree<K> {
    /// Distance of every vertex; `+∞` if unreachable
    pub distance: FxHashMap<K, Weight>,
    /// Parent of every reached vertex; `None` for the source
    pub parent: FxHashMap<K, Option<K>>,
}

impl<K: VertexKey> ShortestPathTree<K> {
    /// Returns the finite distance to `target`, or `None` if it is unreachable or unknown
    pub fn distance_to(&self, target: &K) -> Option<Weight> {
        self.distance
            .get(target)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Returns the vertices on the path from the source to `target` (both included)
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        path_from_parents(&self.parent, target)
    }
}

/// Result of [`ShortestPaths::bellman_ford`]
#[derive(Debug, Clone)]
pub struct BellmanFord<K> {
    /// Cost of every vertex; `+∞` if unreachable
    pub costs: FxHashMap<K, Weight>,
    /// Parent of every reached vertex; `None` for the source
    pub parent: FxHashMap<K, Option<K>>,
    /// *true* if costs still decreased in the last pass, i.e. a negative cycle is reachable
    pub cycle: bool,
}

impl<K: VertexKey> BellmanFord<K> {
    /// Returns the vertices on the path from the source to `target`.
    /// If the parent pointers run into a negative cycle, `None` is returned.
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        path_from_parents(&self.parent, target)
    }
}

fn keyed_tree<G: AdjacencyList>(
    graph: &G,
    dist: &[Weight],
    parent: &[Option<Node>],
    source: Node,
) -> (FxHashMap<G::Key, Weight>, FxHashMap<G::Key, Option<G::Key>>) {
    let mut distance = FxHashMap::default();
    let mut parents = FxHashMap::default();

    for u in graph.vertices() {
        let key = graph.key_of(u);
        distance.insert(key.clone(), dist[u as usize]);
        if u == source || parent[u as usize].is_some() {
            parents.insert(
                key.clone(),
                parent[u as usize].map(|p| graph.key_of(p).clone()),
            );
        }
    }

    (distance, parents)
}

/// Single-source shortest path algorithms, exposed on every [`AdjacencyList`]
pub trait ShortestPaths: AdjacencyList {
    /// Dijkstra's algorithm with the priority queue `H`.
    ///
    /// Every vertex is settled at most once; edge weights must be non-negative for the
    /// distances to be correct.
    fn dijkstra_in<H: PriorityQueue<Node>>(
        &self,
        source: &Self::Key,
    ) -> Result<ShortestPathTree<Self::Key>> {
        let s = self.try_node_of(source)?;
        let n = self.node_bound() as usize;

        let mut dist = vec![Weight::INFINITY; n];
        let mut parent: Vec<Option<Node>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut handles: Vec<Option<H::Handle>> = vec![None; n];

        let mut heap = H::default();
        dist[s as usize] = 0.0;
        handles[s as usize] = Some(heap.insert(s, 0.0));

        let mut dequeues = 0usize;
        while let Some((u, _)) = heap.extract_min() {
            dequeues += 1;
            if settled[u as usize] {
                continue;
            }
            settled[u as usize] = true;

            for nb in self.neighbors_of(u) {
                let v = nb.node as usize;
                if settled[v] {
                    continue;
                }

                let d = dist[u as usize] + nb.weight();
                if d < dist[v] {
                    dist[v] = d;
                    parent[v] = Some(u);

                    let decreased = handles[v].as_ref().and_then(|h| heap.decrease_key(h, d));
                    handles[v] = Some(match decreased {
                        Some(h) => h,
                        None => heap.insert(nb.node, d),
                    });
                }
            }
        }

        debug!(
            "dijkstra: {dequeues} dequeues, {} nodes, {} left in heap",
            self.number_of_nodes(),
            heap.len()
        );

        let (distance, parent) = keyed_tree(self, &dist, &parent, s);
        Ok(ShortestPathTree { distance, parent })
    }

    /// Dijkstra's algorithm with the priority queue selected at runtime
    fn dijkstra_with(
        &self,
        source: &Self::Key,
        heap: HeapKind,
    ) -> Result<ShortestPathTree<Self::Key>> {
        match heap {
            HeapKind::Binary => self.dijkstra_in::<BinaryMinHeap<Node>>(source),
            HeapKind::Fibonacci => self.dijkstra_in::<FibonacciHeap<Node>>(source),
        }
    }

    /// Dijkstra's algorithm with a binary heap.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)]);
    /// let tree = g.dijkstra(&"A").unwrap();
    ///
    /// assert_eq!(tree.distance[&"C"], 3.0);
    /// assert_eq!(tree.path_to(&"C"), Some(vec!["A", "B", "C"]));
    /// ```
    fn dijkstra(&self, source: &Self::Key) -> Result<ShortestPathTree<Self::Key>> {
        self.dijkstra_in::<BinaryMinHeap<Node>>(source)
    }

    /// Bellman-Ford with early termination.
    ///
    /// Runs up to `|V|` relaxation passes over all edges and stops as soon as a pass changes
    /// nothing. If costs still change in pass `|V|`, a negative cycle is reachable from `source`
    /// and `cycle` is set.
    fn bellman_ford(&self, source: &Self::Key) -> Result<BellmanFord<Self::Key>> {
        let s = self.try_node_of(source)?;
        let n = self.node_bound() as usize;

        let mut costs = vec![Weight::INFINITY; n];
        let mut parent: Vec<Option<Node>> = vec![None; n];
        costs[s as usize] = 0.0;

        let mut changed = false;
        let mut passes = 0;
        for _ in 0..self.number_of_nodes() {
            passes += 1;
            changed = false;
            for (u, nb) in self.edges() {
                let d = costs[u as usize] + nb.weight();
                if d < costs[nb.node as usize] {
                    costs[nb.node as usize] = d;
                    parent[nb.node as usize] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        debug!("bellman-ford: {passes} passes, negative cycle: {changed}");

        let (costs, parent) = keyed_tree(self, &costs, &parent, s);
        Ok(BellmanFord {
            costs,
            parent,
            cycle: changed,
        })
    }
}

impl<G: AdjacencyList> ShortestPaths for G {}
