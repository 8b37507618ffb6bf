use rand::Rng;

use super::*;

/// Randomized minimum cut by edge contraction (Karger) on undirected multigraphs
pub trait MinCut: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + Clone {
    /// Merges `v` into `u`: every edge `(v, w)` with `w != u` is replaced by the same number of
    /// parallel edges `(u, w)`, edges between `u` and `v` are dropped, and vertices left without
    /// any edge are removed. Merging stops early once only two vertices remain.
    fn contract(&mut self, u: &Self::Key, v: &Self::Key) -> Result<()> {
        let vn = self.try_node_of(v)?;
        self.try_node_of(u)?;
        if u == v {
            return Ok(());
        }

        while self.contains(v) && self.contains(u) && self.number_of_nodes() > 2 {
            let Some(&first) = self.neighbors_of(vn).first() else {
                self.remove_vertex(v)?;
                break;
            };
            let w = self.key_of(first.node).clone();

            if &w != u {
                for _ in 0..self.edge_multiplicity(v, &w) {
                    self.add_edge(u, &w, first.weight())?;
                }
            }
            self.remove_edge(v, &w)?;

            self.remove_degree_zero(v)?;
            if self.contains(&w) {
                self.remove_degree_zero(&w)?;
            }
        }

        Ok(())
    }

    /// One run of Karger's contraction algorithm; the graph is contracted in place.
    ///
    /// While more than two vertices remain, a uniformly random vertex is picked and merged with a
    /// uniformly random entry of its neighbor list (vertices without edges are removed instead).
    /// Returns the number of edges between the two remaining vertices, which is the size of some
    /// cut of the original graph. Repeat on copies of the graph to find a minimum cut with
    /// high probability (see [`MinCut::repeated_karger_min_cut`]).
    ///
    /// On a disconnected graph a contraction can drop both merged vertices once their last
    /// edges are gone, so fewer than two vertices may remain; the cut reported is then `0`.
    fn karger_min_cut<R: Rng>(&mut self, rng: &mut R) -> Result<NumEdges> {
        self.require_undirected()?;

        let mut contractions = 0;
        while self.number_of_nodes() > 2 {
            let index = rng.random_range(0..self.len());
            let Some(u) = self.vertices().nth(index) else {
                break;
            };
            let u_key = self.key_of(u).clone();

            let degree = self.degree_of(u) as usize;
            if degree == 0 {
                self.remove_vertex(&u_key)?;
                continue;
            }

            let v = self.neighbors_of(u)[rng.random_range(0..degree)].node;
            let v_key = self.key_of(v).clone();
            trace!("contracting {v_key} into {u_key}");

            self.contract(&u_key, &v_key)?;
            contractions += 1;
        }

        debug!(
            "karger: {contractions} contractions, cut of size {}",
            self.number_of_edges()
        );
        Ok(self.number_of_edges())
    }

    /// Runs [`MinCut::karger_min_cut`] on `trials` independent copies (at least one) of the graph
    /// and returns the smallest cut found. The graph itself is not modified.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use wgraphs::prelude::*;
    ///
    /// // two triangles joined by a single edge
    /// let g = Graph::from_edges(
    ///     false,
    ///     [(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4), (3, 4)],
    /// );
    /// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(7);
    ///
    /// assert_eq!(g.repeated_karger_min_cut(100, rng).unwrap(), 1);
    /// assert_eq!(g.number_of_edges(), 7);
    /// ```
    fn repeated_karger_min_cut<R: Rng>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> Result<NumEdges> {
        self.require_undirected()?;

        let mut best = NumEdges::MAX;
        for _ in 0..trials.max(1) {
            best = best.min(self.clone().karger_min_cut(rng)?);
        }
        Ok(best)
    }
}

impl<G> MinCut for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + Clone {}
