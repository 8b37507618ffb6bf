use super::*;

/// All-pairs shortest path table computed by [`AllPairsShortestPaths::floyd_warshall`].
///
/// Vertices are numbered by their position in vertex order. Layer `0` holds the direct
/// edge costs; layer `t` holds the costs of paths whose intermediate vertices are among the
/// first `t` vertices. All layers are kept.
#[derive(Debug, Clone)]
pub struct FloydWarshall<K> {
    keys: Vec<K>,
    index: FxHashMap<K, usize>,
    costs: Vec<Weight>,
    parents: Vec<Option<usize>>,
}

impl<K: VertexKey> FloydWarshall<K> {
    /// Vertices in the order they were added as intermediates
    pub fn vertices(&self) -> &[K] {
        &self.keys
    }

    /// Number of layers, i.e. number of vertices plus one
    pub fn number_of_layers(&self) -> usize {
        self.keys.len() + 1
    }

    fn cell(&self, layer: usize, i: usize, j: usize) -> Weight {
        let n = self.keys.len();
        self.costs[layer * n * n + i * n + j]
    }

    fn pair(&self, i: &K, j: &K) -> Option<(usize, usize)> {
        Some((*self.index.get(i)?, *self.index.get(j)?))
    }

    /// Cost of a shortest path from `i` to `j`; `+∞` if there is none.
    /// Returns `None` if one of the keys is unknown.
    pub fn cost(&self, i: &K, j: &K) -> Option<Weight> {
        self.cost_in_layer(i, j, self.keys.len())
    }

    /// Cost from `i` to `j` using only the first `layer` vertices as intermediates
    pub fn cost_in_layer(&self, i: &K, j: &K, layer: usize) -> Option<Weight> {
        let (i, j) = self.pair(i, j)?;
        (layer < self.number_of_layers()).then(|| self.cell(layer, i, j))
    }

    /// Cost from `i` to `j` using only intermediates up to (and including) `k` in vertex order
    pub fn cost_via(&self, i: &K, j: &K, k: &K) -> Option<Weight> {
        let layer = self.index.get(k)? + 1;
        self.cost_in_layer(i, j, layer)
    }

    /// The last intermediate vertex that improved the cost from `i` to `j`;
    /// `None` if the best path is a direct edge (or there is none)
    pub fn intermediate(&self, i: &K, j: &K) -> Option<&K> {
        let (i, j) = self.pair(i, j)?;
        let k = self.parents[i * self.keys.len() + j]?;
        Some(&self.keys[k])
    }

    /// The vertex added as intermediate last, i.e. the last vertex in vertex order
    pub fn last_intermediate(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Reconstructs a shortest path from `i` to `j` (both included) by recursively splitting
    /// at the recorded intermediates. Returns `None` if `j` is unreachable from `i`.
    pub fn path(&self, i: &K, j: &K) -> Option<Vec<K>> {
        let (si, sj) = self.pair(i, j)?;
        let n = self.keys.len();
        if !self.cell(n, si, sj).is_finite() {
            return None;
        }

        let mut path = vec![si];
        let mut segments = vec![(si, sj)];
        let mut steps = 0;
        while let Some((a, b)) = segments.pop() {
            steps += 1;
            if steps > 2 * n + 2 {
                // only possible on graphs with negative cycles
                return None;
            }

            match self.parents[a * n + b] {
                Some(k) if k != a && k != b => {
                    segments.push((k, b));
                    segments.push((a, k));
                }
                _ if a != b => path.push(b),
                _ => {}
            }
        }

        Some(path.into_iter().map(|x| self.keys[x].clone()).collect())
    }
}

/// Floyd-Warshall, exposed on every [`AdjacencyList`]
pub trait AllPairsShortestPaths: AdjacencyList {
    /// Computes the costs of shortest paths between all pairs of vertices in *O(n^3)*.
    ///
    /// Negative weights are allowed; negative cycles are not detected.
    /// Among parallel edges the cheapest one is used.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [(1, 2, 3.0), (2, 3, -1.0), (1, 3, 5.0)]);
    /// let fw = g.floyd_warshall();
    ///
    /// assert_eq!(fw.cost(&1, &3), Some(2.0));
    /// assert_eq!(fw.cost(&3, &1), Some(f64::INFINITY));
    /// assert_eq!(fw.intermediate(&1, &3), Some(&2));
    /// assert_eq!(fw.path(&1, &3), Some(vec![1, 2, 3]));
    /// ```
    fn floyd_warshall(&self) -> FloydWarshall<Self::Key> {
        let keys = self.keys().cloned().collect::<Vec<_>>();
        let n = keys.len();

        let mut pos = vec![usize::MAX; self.node_bound() as usize];
        for (i, u) in self.vertices().enumerate() {
            pos[u as usize] = i;
        }

        let mut costs = vec![Weight::INFINITY; (n + 1) * n * n];
        for i in 0..n {
            costs[i * n + i] = 0.0;
        }
        for (u, nb) in self.edges() {
            let cell = &mut costs[pos[u as usize] * n + pos[nb.node as usize]];
            *cell = cell.min(nb.weight());
        }

        let mut parents = vec![None; n * n];
        for k in 0..n {
            let (done, rest) = costs.split_at_mut((k + 1) * n * n);
            let prev = &done[k * n * n..];
            let next = &mut rest[..n * n];

            for i in 0..n {
                for j in 0..n {
                    let last = prev[i * n + j];
                    let via = prev[i * n + k] + prev[k * n + j];
                    if via < last {
                        next[i * n + j] = via;
                        parents[i * n + j] = Some(k);
                    } else {
                        next[i * n + j] = last;
                    }
                }
            }
        }

        debug!("floyd-warshall: {n} nodes, {} layers", n + 1);

        let index = keys.iter().enumerate().map(|(i, k)| (k.clone(), i)).collect();
        FloydWarshall {
            keys,
            index,
            costs,
            parents,
        }
    }
}

impl<G: AdjacencyList> AllPairsShortestPaths for G {}
