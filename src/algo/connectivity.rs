use itertools::Itertools;

use super::*;

/// Connected components, graph reversal and strongly connected components
pub trait Connectivity: AdjacencyList + Traversal {
    /// Returns an iterator over the connected components (as node lists in BFS order).
    /// Components are started at the first unvisited vertex in vertex order.
    /// On directed graphs this yields the sets reachable by consecutive searches.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the connected components of an undirected graph as lists of keys,
    /// one BFS per component.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut g = Graph::from_edges(false, [(1, 2), (3, 4), (4, 5)]);
    /// g.add_vertex(6);
    ///
    /// let ccs = g.undirect_connectivity().unwrap();
    /// assert_eq!(ccs, vec![vec![1, 2], vec![3, 4, 5], vec![6]]);
    /// ```
    fn undirect_connectivity(&self) -> Result<Vec<Vec<Self::Key>>> {
        self.require_undirected()?;
        Ok(self
            .connected_components()
            .map(|cc| cc.into_iter().map(|u| self.key_of(u).clone()).collect())
            .collect())
    }

    /// Returns a new directed graph with every edge flipped (weights preserved).
    /// Every vertex is kept, also isolated ones.
    fn reverse(&self) -> Result<Self>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        self.require_directed()?;

        let mut rev = Self::with_capacity(true, self.len());
        rev.add_vertices(self.keys().cloned());
        for (u, nb) in self.edges() {
            rev.add_edge(self.key_of(nb.node), self.key_of(u), nb.weight())?;
        }
        Ok(rev)
    }

    /// Computes the strongly connected components of a directed graph (Kosaraju).
    ///
    /// The finish order of the reversed graph is computed first; then searches on this graph are
    /// started in reverse finish order, skipping vertices reached by earlier searches.
    /// Every component is returned as list of keys, starting with its leader.
    fn strongly_connected_components(&self) -> Result<Vec<Vec<Self::Key>>>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let finish = self.reverse()?.topological_sort().finish;

        let mut search = DepthFirstSearch::unstarted(self);
        let mut sccs = Vec::new();
        for key in finish.iter().rev() {
            let Some(u) = self.node_of(key) else {
                continue;
            };
            if !search.restart_at(u) {
                continue;
            }

            let scc = search
                .by_ref()
                .filter_map(|event| match event {
                    DfsEvent::Discover { node, .. } => Some(self.key_of(node).clone()),
                    DfsEvent::Finish(_) => None,
                })
                .collect_vec();
            sccs.push(scc);
        }

        debug!(
            "found {} strongly connected components in graph with {} nodes",
            sccs.len(),
            self.number_of_nodes()
        );
        Ok(sccs)
    }

    /// Maps the leader of every strongly connected component to the size of the component.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [("a", "b"), ("b", "a"), ("b", "c")]);
    /// let leaders = g.kosaraju().unwrap();
    ///
    /// assert_eq!(leaders.len(), 2);
    /// assert_eq!(leaders.values().sum::<u32>(), 3);
    /// assert_eq!(leaders.get(&"c"), Some(&1));
    /// ```
    fn kosaraju(&self) -> Result<FxHashMap<Self::Key, NumNodes>>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        Ok(self
            .strongly_connected_components()?
            .into_iter()
            .filter_map(|scc| {
                let size = scc.len() as NumNodes;
                scc.into_iter().next().map(|leader| (leader, size))
            })
            .collect())
    }
}

impl<G: AdjacencyList> Connectivity for G {}

/// Iterator over the components found by consecutive breadth-first searches
pub struct ConnectedComponents<'a, G: AdjacencyList> {
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G: AdjacencyList> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: graph.vertices().next().map(|s| graph.bfs_search(s)),
        }
    }
}

impl<G: AdjacencyList> Iterator for ConnectedComponents<'_, G> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
