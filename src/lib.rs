/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **keyed** : Vertices are named by arbitrary hashable keys (`&str`, `String`, integers, ...)
- **weighted** : Edges optionally carry an `f64` weight; unweighted edges count as `0`
- directed or undirected, chosen when the graph is created

# Representation

A [`Graph`] stores one neighbor list per vertex. Keys are interned to dense `u32` slots
([`Node`]) on insertion, and every algorithm runs on those slots and only translates back to keys
when it builds its result. Parallel edges are allowed; an undirected edge is stored once in
each endpoint's list.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, the graph itself, all basic graph operations and all algorithm traits,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(&start)`),
  Dijkstra, Bellman-Ford, Floyd-Warshall, Prim, Kruskal, Kosaraju and Karger's min-cut,
- [`heap`] and [`disjoint`] include the priority queues and disjoint-set structures the algorithms are generic over,
- [`io`] includes readers and writers for edge lists and (weighted) adjacency lists.

Operations that cannot be applied (a missing vertex, a directed graph for an undirected-only
algorithm, ...) report a [`GraphError`]. Algorithms log their progress through the [`log`] facade.

```
use wgraphs::prelude::*;

let mut g = Graph::undirected();
g.add_vertices_and_edge("A", "B", 1.0, true);
g.add_vertices_and_edge("B", "C", 2.0, true);
g.add_vertices_and_edge("A", "C", 4.0, true);

assert_eq!(g.dijkstra(&"A").unwrap().distance[&"C"], 3.0);
assert_eq!(g.kruskal(DisjointSetKind::List).unwrap().cost, 3.0);
```

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod disjoint;
pub mod edge;
pub mod error;
pub mod heap;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::GraphError;
pub use node::*;
pub use repr::Graph;

/// `wgraphs::prelude` includes definitions for nodes and edges, the graph, all basic graph operation traits as well as all algorithm traits.
pub mod prelude {
    pub use super::{
        algo::*,
        disjoint::DisjointSetKind,
        edge::*,
        error::GraphError,
        heap::HeapKind,
        io::{FileFormat, GraphRead, GraphWrite},
        node::*,
        ops::*,
        repr::Graph,
    };
}
