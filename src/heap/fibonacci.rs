/*!
# Fibonacci Heap

Classic Fibonacci heap (Fredman & Tarjan) with

| Operation | Bound |
|-----------|-------|
| insert | *O(1)* |
| peek | *O(1)* |
| decrease_key | *O(1)* amortized |
| extract_min | *O(log n)* amortized |

Nodes live in an arena owned by the heap and link to each other by index: siblings form
circular doubly-linked lists, every node knows its parent and one of its children.
Slots of extracted nodes are not reused, so a stale [`FibonacciHandle`] is detected
instead of aliasing a newer element.
*/

use smallvec::SmallVec;

use super::PriorityQueue;
use crate::Weight;

/// Opaque reference to an element of a [`FibonacciHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FibonacciHandle(usize);

#[derive(Debug, Clone)]
struct FibNode<K> {
    key: Option<K>,
    priority: Weight,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
}

impl<K> FibNode<K> {
    fn is_queued(&self) -> bool {
        self.key.is_some()
    }
}

/// Min-priority queue with amortized constant-time decrease-key
#[derive(Debug, Clone)]
pub struct FibonacciHeap<K> {
    nodes: Vec<FibNode<K>>,
    min: Option<usize>,
    len: usize,
}

impl<K> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            min: None,
            len: 0,
        }
    }
}

impl<K> FibonacciHeap<K> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current priority of the element behind `handle` if it is still queued
    pub fn priority_of(&self, handle: &FibonacciHandle) -> Option<Weight> {
        let node = self.nodes.get(handle.0)?;
        node.is_queued().then_some(node.priority)
    }

    /// Detaches `x` from its sibling list and makes it a singleton list
    fn unlink(&mut self, x: usize) {
        let (l, r) = (self.nodes[x].left, self.nodes[x].right);
        self.nodes[l].right = r;
        self.nodes[r].left = l;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Inserts the singleton `x` into the sibling list of `at`, right of `at`
    fn splice(&mut self, x: usize, at: usize) {
        let r = self.nodes[at].right;
        self.nodes[x].left = at;
        self.nodes[x].right = r;
        self.nodes[at].right = x;
        self.nodes[r].left = x;
    }

    /// Returns all members of the sibling list containing `start`
    fn siblings(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut x = self.nodes[start].right;
        while x != start {
            members.push(x);
            x = self.nodes[x].right;
        }
        members
    }

    /// Adds the singleton `x` to the root list and updates the minimum
    fn add_root(&mut self, x: usize) {
        self.nodes[x].parent = None;
        match self.min {
            None => self.min = Some(x),
            Some(m) => {
                self.splice(x, m);
                if self.nodes[x].priority < self.nodes[m].priority {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: usize, x: usize) {
        self.unlink(y);
        self.nodes[y].parent = Some(x);
        self.nodes[y].marked = false;
        match self.nodes[x].child {
            None => self.nodes[x].child = Some(y),
            Some(c) => self.splice(y, c),
        }
        self.nodes[x].degree += 1;
    }

    /// Merges roots of equal degree until all root degrees are distinct
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        let mut by_degree: SmallVec<[Option<usize>; 32]> = SmallVec::new();
        for w in self.siblings(start) {
            let mut x = w;
            let mut d = self.nodes[x].degree;
            loop {
                if by_degree.len() <= d {
                    by_degree.resize(d + 1, None);
                }
                let Some(mut y) = by_degree[d].take() else {
                    break;
                };
                if self.nodes[y].priority < self.nodes[x].priority {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
            by_degree[d] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.nodes[root].left = root;
            self.nodes[root].right = root;
            self.add_root(root);
        }
    }

    /// Moves `x` from the child list of `parent` to the root list
    fn cut(&mut self, x: usize, parent: usize) {
        if self.nodes[parent].child == Some(x) {
            let next = self.nodes[x].right;
            self.nodes[parent].child = (next != x).then_some(next);
        }
        self.unlink(x);
        self.nodes[parent].degree -= 1;
        self.nodes[x].marked = false;
        self.add_root(x);
    }

    fn cascading_cut(&mut self, mut y: usize) {
        while let Some(z) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return;
            }
            self.cut(y, z);
            y = z;
        }
    }
}

impl<K> PriorityQueue<K> for FibonacciHeap<K> {
    type Handle = FibonacciHandle;

    fn insert(&mut self, key: K, priority: Weight) -> FibonacciHandle {
        let x = self.nodes.len();
        self.nodes.push(FibNode {
            key: Some(key),
            priority,
            parent: None,
            child: None,
            left: x,
            right: x,
            degree: 0,
            marked: false,
        });
        self.add_root(x);
        self.len += 1;
        FibonacciHandle(x)
    }

    fn extract_min(&mut self) -> Option<(K, Weight)> {
        let z = self.min?;

        if let Some(c) = self.nodes[z].child.take() {
            for child in self.siblings(c) {
                self.nodes[child].left = child;
                self.nodes[child].right = child;
                self.nodes[child].parent = None;
                self.nodes[child].marked = false;
                self.splice(child, z);
            }
            self.nodes[z].degree = 0;
        }

        if self.nodes[z].right == z {
            self.min = None;
        } else {
            self.min = Some(self.nodes[z].right);
            self.unlink(z);
            self.consolidate();
        }

        self.len -= 1;
        let key = self.nodes[z].key.take()?;
        Some((key, self.nodes[z].priority))
    }

    fn peek_min(&self) -> Option<(&K, Weight)> {
        let node = &self.nodes[self.min?];
        node.key.as_ref().map(|k| (k, node.priority))
    }

    fn decrease_key(&mut self, handle: &FibonacciHandle, priority: Weight) -> Option<FibonacciHandle> {
        let x = handle.0;
        let node = self.nodes.get(x)?;
        if !node.is_queued() || priority > node.priority {
            return None;
        }

        self.nodes[x].priority = priority;
        if let Some(parent) = self.nodes[x].parent {
            if priority < self.nodes[parent].priority {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(m) = self.min {
            if priority < self.nodes[m].priority {
                self.min = Some(x);
            }
        }
        Some(*handle)
    }

    fn len(&self) -> usize {
        self.len
    }
}
