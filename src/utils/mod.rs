/*!
# Utilities

Internal helpers shared by the graph and its algorithms:
- [`KeyMapper`]: the bidirectional key <-> node interning behind [`Graph`](crate::repr::Graph),
- [`Queue`], [`Stack`] and the [`NodeSequencer`] abstraction that drives the traversals.
*/

pub mod key_mapper;
pub mod sequencer;

pub use key_mapper::KeyMapper;
pub use sequencer::*;
