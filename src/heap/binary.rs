use std::hash::Hash;

use fxhash::FxHashMap;

use super::PriorityQueue;
use crate::Weight;

/// Array-backed binary min-heap.
///
/// Positions of all queued keys are indexed in a hash map, so [`PriorityQueue::decrease_key`]
/// locates an element by its key in *O(1)* and restores the heap order in *O(log n)*.
/// Keys are unique: inserting a queued key again replaces its priority.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<K> {
    entries: Vec<(K, Weight)>,
    positions: FxHashMap<K, usize>,
}

impl<K> Default for BinaryMinHeap<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<K: Clone + Eq + Hash> BinaryMinHeap<K> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns *true* if `key` is queued
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of `key` if it is queued
    pub fn priority_of(&self, key: &K) -> Option<Weight> {
        self.positions.get(key).map(|&i| self.entries[i].1)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        for k in [i, j] {
            if let Some(pos) = self.positions.get_mut(&self.entries[k].0) {
                *pos = k;
            }
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].1 >= self.entries[parent].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < n && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < n && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<K: Clone + Eq + Hash> PriorityQueue<K> for BinaryMinHeap<K> {
    type Handle = K;

    fn insert(&mut self, key: K, priority: Weight) -> K {
        if let Some(&i) = self.positions.get(&key) {
            let old = self.entries[i].1;
            self.entries[i].1 = priority;
            if priority < old {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
            return key;
        }

        let i = self.entries.len();
        self.positions.insert(key.clone(), i);
        self.entries.push((key.clone(), priority));
        self.sift_up(i);
        key
    }

    fn extract_min(&mut self) -> Option<(K, Weight)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.entries.pop()?;
        self.positions.remove(&key);
        self.sift_down(0);
        Some((key, priority))
    }

    fn peek_min(&self) -> Option<(&K, Weight)> {
        self.entries.first().map(|(k, p)| (k, *p))
    }

    fn decrease_key(&mut self, key: &K, priority: Weight) -> Option<K> {
        let i = *self.positions.get(key)?;
        if priority > self.entries[i].1 {
            return None;
        }

        self.entries[i].1 = priority;
        self.sift_up(i);
        Some(key.clone())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrease_moves_to_front() {
        let mut heap = BinaryMinHeap::new();
        for (k, p) in [("a", 4.0), ("b", 2.0), ("c", 7.0), ("d", 5.0)] {
            heap.insert(k, p);
        }
        assert_eq!(heap.peek_min(), Some((&"b", 2.0)));

        assert_eq!(heap.decrease_key(&"c", 1.0), Some("c"));
        assert_eq!(heap.priority_of(&"c"), Some(1.0));
        assert_eq!(heap.extract_min(), Some(("c", 1.0)));
        assert!(!heap.contains(&"c"));
        assert_eq!(heap.decrease_key(&"c", 0.0), None);

        assert_eq!(heap.extract_min(), Some(("b", 2.0)));
        assert_eq!(heap.extract_min(), Some(("a", 4.0)));
        assert_eq!(heap.extract_min(), Some(("d", 5.0)));
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn reinsert_replaces_priority() {
        let mut heap = BinaryMinHeap::new();
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        heap.insert(1, 3.0);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.extract_min(), Some((2, 2.0)));
        assert_eq!(heap.extract_min(), Some((1, 3.0)));
    }
}
