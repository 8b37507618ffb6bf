/*!
# Minimum Spanning Trees

- [`SpanningTree::prim`]: grows a tree from a source vertex with a priority queue
- [`SpanningTree::kruskal`]: scans the edges by ascending weight and joins components
  with a [`DisjointSet`]
- [`SpanningTree::kruskal_clustering`]: single-link clustering on top of the Kruskal loop

All of them require an undirected graph.
*/

use super::*;
use crate::disjoint::*;
use crate::heap::{BinaryMinHeap, FibonacciHeap, HeapKind, PriorityQueue};

/// A spanning tree (or forest) together with its total weight
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree<G> {
    pub tree: G,
    pub cost: Weight,
}

/// Minimum spanning tree algorithms for undirected graphs
pub trait SpanningTree: AdjacencyList + GraphNew + GraphEdgeEditing {
    /// Prim's algorithm from `source` with the priority queue `H`.
    /// Only the component of `source` is spanned.
    fn prim_in<H: PriorityQueue<Node>>(
        &self,
        source: &Self::Key,
    ) -> Result<MinimumSpanningTree<Self>> {
        self.require_undirected()?;
        let s = self.try_node_of(source)?;
        let n = self.node_bound() as usize;

        let mut edge_cost = vec![Weight::INFINITY; n];
        let mut parent: Vec<Option<Node>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut handles: Vec<Option<H::Handle>> = vec![None; n];

        let mut heap = H::default();
        edge_cost[s as usize] = 0.0;
        handles[s as usize] = Some(heap.insert(s, 0.0));

        let mut tree = Self::new(false);
        let mut cost = 0.0;
        let mut dequeues = 0usize;

        while let Some((u, _)) = heap.extract_min() {
            dequeues += 1;
            if in_tree[u as usize] {
                continue;
            }
            in_tree[u as usize] = true;

            cost += edge_cost[u as usize];
            tree.add_vertex(self.key_of(u).clone());
            if let Some(p) = parent[u as usize] {
                tree.add_edge(self.key_of(u), self.key_of(p), edge_cost[u as usize])?;
            }

            for nb in self.neighbors_of(u) {
                let v = nb.node as usize;
                if in_tree[v] || nb.weight() >= edge_cost[v] {
                    continue;
                }

                edge_cost[v] = nb.weight();
                parent[v] = Some(u);

                let decreased = handles[v]
                    .as_ref()
                    .and_then(|h| heap.decrease_key(h, nb.weight()));
                handles[v] = Some(match decreased {
                    Some(h) => h,
                    None => heap.insert(nb.node, nb.weight()),
                });
            }
        }

        debug!(
            "prim: {dequeues} dequeues, {} of {} nodes spanned",
            tree.number_of_nodes(),
            self.number_of_nodes()
        );
        Ok(MinimumSpanningTree { tree, cost })
    }

    /// Prim's algorithm with the priority queue selected at runtime
    fn prim_with(&self, source: &Self::Key, heap: HeapKind) -> Result<MinimumSpanningTree<Self>> {
        match heap {
            HeapKind::Binary => self.prim_in::<BinaryMinHeap<Node>>(source),
            HeapKind::Fibonacci => self.prim_in::<FibonacciHeap<Node>>(source),
        }
    }

    /// Prim's algorithm with a binary heap
    fn prim(&self, source: &Self::Key) -> Result<MinimumSpanningTree<Self>> {
        self.prim_in::<BinaryMinHeap<Node>>(source)
    }

    /// Kruskal's algorithm with the disjoint-set `D`.
    ///
    /// Edges are scanned by ascending weight (ties in edge order); an edge is taken unless both
    /// endpoints are already in the same set. The result contains every vertex of the graph,
    /// so it is a spanning forest if the graph is disconnected.
    fn kruskal_in<D: DisjointSet<Node>>(&self) -> Result<MinimumSpanningTree<Self>> {
        self.require_undirected()?;

        let mut sets = D::default();
        for u in self.vertices() {
            sets.make_set(u);
        }

        let mut tree = Self::with_capacity(false, self.len());
        tree.add_vertices(self.keys().cloned());

        let mut cost = 0.0;
        for e in self.sorted_edges() {
            let (u, v) = (self.try_node_of(&e.source)?, self.try_node_of(&e.target)?);
            if sets.union(&u, &v) {
                tree.add_edge(&e.source, &e.target, e.weight)?;
                cost += e.weight;
            }
        }

        Ok(MinimumSpanningTree { tree, cost })
    }

    /// Kruskal's algorithm with the disjoint-set selected at runtime.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{disjoint::DisjointSetKind, prelude::*};
    ///
    /// let g = Graph::from_edges(false, [("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 4.0)]);
    /// let mst = g.kruskal(DisjointSetKind::Forest).unwrap();
    ///
    /// assert_eq!(mst.cost, 3.0);
    /// assert!(!mst.tree.is_neighbor(&"a", &"c"));
    /// ```
    fn kruskal(&self, kind: DisjointSetKind) -> Result<MinimumSpanningTree<Self>> {
        match kind {
            DisjointSetKind::Forest => self.kruskal_in::<ForestSet<Node>>(),
            DisjointSetKind::List => self.kruskal_in::<ListSet<Node>>(),
        }
    }

    /// Single-link clustering with the counting disjoint-set `D`: runs the Kruskal loop and
    /// returns the weight of the edge whose union leaves `target - 1` clusters, i.e. the
    /// spacing of the best clustering into `target` clusters.
    /// Returns `None` if that number of clusters is never reached.
    fn kruskal_clustering_in<D: CountingDisjointSet<Node>>(
        &self,
        target: usize,
    ) -> Result<Option<Weight>> {
        self.require_undirected()?;

        let mut sets = D::default();
        for u in self.vertices() {
            sets.make_set(u);
        }

        for e in self.sorted_edges() {
            let (u, v) = (self.try_node_of(&e.source)?, self.try_node_of(&e.target)?);
            if sets.union(&u, &v) && sets.number_of_sets() + 1 == target {
                return Ok(Some(e.weight));
            }
        }

        Ok(None)
    }

    /// Single-link clustering with the disjoint-set selected at runtime.
    /// The forest variant does not count its sets and is refused with
    /// [`GraphError::UncountedDisjointSet`].
    fn kruskal_clustering(&self, kind: DisjointSetKind, target: usize) -> Result<Option<Weight>> {
        match kind {
            DisjointSetKind::Forest => Err(GraphError::UncountedDisjointSet),
            DisjointSetKind::List => self.kruskal_clustering_in::<ListSet<Node>>(target),
        }
    }
}

impl<G: AdjacencyList + GraphNew + GraphEdgeEditing> SpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn tree_edges(g: &Graph<&'static str>) -> Vec<(&'static str, &'static str, Weight)> {
        g.keyed_edges()
            .into_iter()
            .map(|e| {
                let (a, b) = if e.source < e.target {
                    (e.source, e.target)
                } else {
                    (e.target, e.source)
                };
                (a, b, e.weight)
            })
            .sorted_by(|x, y| x.0.cmp(y.0).then(x.1.cmp(y.1)))
            .collect()
    }

    #[test]
    fn kruskal_scenario() {
        let g = scenario_graph();

        for kind in [DisjointSetKind::Forest, DisjointSetKind::List] {
            let mst = g.kruskal(kind).unwrap();
            assert_eq!(mst.cost, 4.0);
            assert_eq!(
                tree_edges(&mst.tree),
                vec![("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 1.0)]
            );
        }
    }

    #[test]
    fn prim_scenario() {
        let g = scenario_graph();

        for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
            let mst = g.prim_with(&"D", kind).unwrap();
            assert_eq!(mst.cost, 4.0);
            assert_eq!(
                tree_edges(&mst.tree),
                vec![("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 1.0)]
            );
        }
    }

    #[test]
    fn prim_and_kruskal_agree() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        for _ in 0..30 {
            let g = random_connected_graph(rng, 25, 60);
            let s = *g.keys().next().unwrap();

            let forest = g.kruskal(DisjointSetKind::Forest).unwrap();
            let list = g.kruskal(DisjointSetKind::List).unwrap();
            let bin = g.prim_with(&s, HeapKind::Binary).unwrap();
            let fib = g.prim_with(&s, HeapKind::Fibonacci).unwrap();

            for mst in [&forest, &list, &bin, &fib] {
                assert_eq!(mst.cost, forest.cost);
                assert_eq!(mst.tree.number_of_nodes(), g.number_of_nodes());
                assert_eq!(mst.tree.number_of_edges(), g.number_of_nodes() - 1);
                assert_eq!(mst.tree.undirect_connectivity().unwrap().len(), 1);
            }
        }
    }

    #[test]
    fn kruskal_spans_forest() {
        let mut g = Graph::from_edges(false, [(1, 2, 3.0), (3, 4, 1.0)]);
        g.add_vertex(5);

        let mst = g.kruskal(DisjointSetKind::List).unwrap();
        assert_eq!(mst.cost, 4.0);
        assert_eq!(mst.tree.number_of_nodes(), 5);
        assert_eq!(mst.tree.undirect_connectivity().unwrap().len(), 3);

        let partial = g.prim(&1).unwrap();
        assert_eq!(partial.cost, 3.0);
        assert_eq!(partial.tree.number_of_nodes(), 2);
    }

    #[test]
    fn directed_graphs_are_refused() {
        let g = Graph::from_edges(true, [("a", "b", 1.0)]);
        assert_eq!(g.prim(&"a").err(), Some(GraphError::NotUndirected));
        assert_eq!(
            g.kruskal(DisjointSetKind::Forest).err(),
            Some(GraphError::NotUndirected)
        );
        assert_eq!(
            g.kruskal_clustering(DisjointSetKind::List, 2),
            Err(GraphError::NotUndirected)
        );
    }

    #[test]
    fn clustering_spacing() {
        let g = Graph::from_edges(
            false,
            [("a", "b", 1.0), ("c", "d", 2.0), ("b", "c", 10.0), ("a", "d", 12.0)],
        );

        assert_eq!(
            g.kruskal_clustering(DisjointSetKind::Forest, 2),
            Err(GraphError::UncountedDisjointSet)
        );
        assert_eq!(g.kruskal_clustering(DisjointSetKind::List, 4), Ok(Some(1.0)));
        assert_eq!(g.kruskal_clustering(DisjointSetKind::List, 3), Ok(Some(2.0)));
        assert_eq!(g.kruskal_clustering(DisjointSetKind::List, 2), Ok(Some(10.0)));
        assert_eq!(g.kruskal_clustering(DisjointSetKind::List, 5), Ok(None));
        assert_eq!(g.kruskal_clustering(DisjointSetKind::List, 0), Ok(None));
    }
}
