/*!
# Queue & Stack

FIFO and LIFO containers that drive the iteration order of the traversals.

- [`Queue`] (`VecDeque`) -> queue semantics -> **BFS**, behind the [`NodeSequencer`] interface
- [`Stack`] (`Vec`) -> stack semantics -> holds the frames of the **DFS**
*/

use std::collections::VecDeque;

/// FIFO container
pub type Queue<T> = VecDeque<T>;

/// LIFO container
pub type Stack<T> = Vec<T>;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// items during a traversal; the implementation determines the order.
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Returns *true* if the frontier is exhausted
    fn is_exhausted(&self) -> bool {
        self.cardinality() == 0
    }
}

impl<T> NodeSequencer<T> for Queue<T> {
    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}
