//! Fixtures shared by the unit tests of this crate

use fxhash::FxHashMap;
use rand::Rng;

use crate::{ops::*, *};

/// Initializes `env_logger` for tests; set `RUST_LOG=debug` to see the algorithm logs
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The weighted square-with-tail used throughout the docs:
/// `A - B (1)`, `B - C (2)`, `A - C (4)`, `C - D (1)`
pub fn scenario_graph() -> Graph<&'static str> {
    let mut g = Graph::undirected();
    g.add_vertices(["A", "B", "C", "D"]);
    for (u, v, w) in [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0), ("C", "D", 1.0)] {
        g.add_vertices_and_edge(u, v, w, true);
    }
    g
}

fn random_weight(rng: &mut impl Rng) -> Weight {
    rng.random_range(1..10) as Weight
}

/// Vertices `0..n` and `m` random attempts at a non-loop edge with integer weight in `1..10`.
/// Repeated edges are merged, so the graph is simple.
pub fn random_graph(rng: &mut impl Rng, n: u32, m: u32, directed: bool) -> Graph<u32> {
    let mut g = Graph::new(directed);
    g.add_vertices(0..n);

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            let w = random_weight(rng);
            g.add_vertices_and_edge(u, v, w, false);
        }
    }
    g
}

fn random_dag_edges(rng: &mut impl Rng, n: u32, m: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
    (0..m).filter_map(move |_| {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        (u != v).then(|| (u.min(v), u.max(v)))
    })
}

/// Directed acyclic graph on `0..n` whose edges point from smaller to larger keys
pub fn random_dag(rng: &mut impl Rng, n: u32, m: u32) -> Graph<u32> {
    let mut g = Graph::directed();
    g.add_vertices(0..n);

    let edges = random_dag_edges(rng, n, m).collect::<Vec<_>>();
    for (u, v) in edges {
        let w = random_weight(rng);
        g.add_vertices_and_edge(u, v, w, false);
    }
    g
}

/// Like [`random_dag`] but with integer weights in `-5..10`, so there is no negative cycle
pub fn random_dag_with_negative_weights(rng: &mut impl Rng, n: u32, m: u32) -> Graph<u32> {
    let mut g = Graph::directed();
    g.add_vertices(0..n);

    let edges = random_dag_edges(rng, n, m).collect::<Vec<_>>();
    for (u, v) in edges {
        let w = rng.random_range(-5..10) as Weight;
        g.add_vertices_and_edge(u, v, w, false);
    }
    g
}

/// Undirected connected multigraph on `0..n`: the path `0 - 1 - ... - (n-1)` plus random
/// non-loop edges until there are `m` edges. Weights are integers in `1..10`.
pub fn random_connected_graph(rng: &mut impl Rng, n: u32, m: u32) -> Graph<u32> {
    let mut g = Graph::undirected();
    g.add_vertices(0..n);

    for u in 1..n {
        let w = random_weight(rng);
        g.add_vertices_and_edge(u - 1, u, w, true);
    }

    while g.number_of_edges() < m && n > 1 {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            let w = random_weight(rng);
            g.add_vertices_and_edge(u, v, w, true);
        }
    }
    g
}

/// Hop distances between all pairs, indexed by position in vertex order.
/// Computed with an unweighted Floyd-Warshall, independent of the traversal code.
pub fn hop_distances<K: VertexKey>(g: &Graph<K>) -> Vec<Vec<Option<NumNodes>>> {
    let n = g.len();
    let index: FxHashMap<Node, usize> = g.vertices().enumerate().map(|(i, u)| (u, i)).collect();

    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (u, nb) in g.edges() {
        let (i, j) = (index[&u], index[&nb.node]);
        if i != j {
            dist[i][j] = Some(1);
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

/// Exact minimum cut (counting parallel edges) by trying every bipartition.
/// Only feasible for small graphs.
pub fn brute_force_min_cut(g: &Graph<u32>) -> NumEdges {
    let n = g.len();
    assert!((2..=20).contains(&n));

    let index: FxHashMap<u32, usize> = g.keys().enumerate().map(|(i, &k)| (k, i)).collect();
    let edges = g
        .keyed_edges()
        .into_iter()
        .map(|e| (index[&e.source], index[&e.target]))
        .collect::<Vec<_>>();

    // the last vertex always stays on the unset side
    (1u32..(1 << (n - 1)))
        .map(|mask| {
            edges
                .iter()
                .filter(|&&(u, v)| ((mask >> u) & 1) != ((mask >> v) & 1))
                .count() as NumEdges
        })
        .min()
        .unwrap_or(0)
}
