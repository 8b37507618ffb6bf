/*!
# Graph Algorithms

This module provides the classical algorithms on top of [`Graph`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::{algo::*, prelude::*};
```
and gain access to traversals, components, shortest paths, spanning trees and min-cuts.

Algorithms are provided as traits that are implemented on every suitable graph, so they are
called directly on the graph (`graph.dijkstra(&source)`). They work on dense node ids internally
and return keyed result records. Searches are also available as lazy iterators.
*/

mod all_pairs;
mod connectivity;
mod min_cut;
mod shortest_paths;
mod spanning_tree;
mod traversal;

use crate::{error::Result, ops::*, repr::Graph, utils::*, *};
use fxhash::FxHashMap;
use log::{debug, trace};

pub use all_pairs::*;
pub use connectivity::*;
pub use min_cut::*;
pub use shortest_paths::*;
pub use spanning_tree::*;
pub use traversal::*;
