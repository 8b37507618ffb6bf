use std::hash::Hash;

use fxhash::FxHashMap;

use super::{CountingDisjointSet, DisjointSet};

/// Linked-list disjoint-set.
///
/// Each set is a list whose head is the leader; every element stores the id of the list it
/// belongs to. `find` is *O(1)*, `union` moves the members of the shorter list onto the longer
/// one (on equal length the list of `x` is moved onto the list of `y`).
#[derive(Debug, Clone)]
pub struct ListSet<K> {
    elements: Vec<K>,
    index: FxHashMap<K, usize>,
    list_of: Vec<usize>,
    lists: Vec<Vec<usize>>,
    live: usize,
}

impl<K> Default for ListSet<K> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            index: FxHashMap::default(),
            list_of: Vec::new(),
            lists: Vec::new(),
            live: 0,
        }
    }
}

impl<K: Clone + Eq + Hash> ListSet<K> {
    /// Returns the members of `x`'s set, leader first
    pub fn members_of(&self, x: &K) -> Option<impl Iterator<Item = &K> + '_> {
        let i = *self.index.get(x)?;
        Some(self.lists[self.list_of[i]].iter().map(|&m| &self.elements[m]))
    }

    /// Moves all members of list `from` to the end of list `to`
    fn absorb(&mut self, to: usize, from: usize) {
        let moved = std::mem::take(&mut self.lists[from]);
        for &m in &moved {
            self.list_of[m] = to;
        }
        self.lists[to].extend(moved);
    }
}

impl<K: Clone + Eq + Hash> DisjointSet<K> for ListSet<K> {
    fn make_set(&mut self, x: K) -> bool {
        if self.index.contains_key(&x) {
            return false;
        }
        let i = self.elements.len();
        self.index.insert(x.clone(), i);
        self.elements.push(x);
        self.list_of.push(self.lists.len());
        self.lists.push(vec![i]);
        self.live += 1;
        true
    }

    fn find(&mut self, x: &K) -> Option<K> {
        let i = *self.index.get(x)?;
        let leader = *self.lists[self.list_of[i]].first()?;
        Some(self.elements[leader].clone())
    }

    fn union(&mut self, x: &K, y: &K) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(x), self.index.get(y)) else {
            return false;
        };

        let (lx, ly) = (self.list_of[i], self.list_of[j]);
        if lx == ly {
            return false;
        }

        if self.lists[lx].len() > self.lists[ly].len() {
            self.absorb(lx, ly);
        } else {
            self.absorb(ly, lx);
        }
        self.live -= 1;
        true
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<K: Clone + Eq + Hash> CountingDisjointSet<K> for ListSet<K> {
    fn number_of_sets(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn shorter_list_is_appended() {
        let mut sets = ListSet::default();
        for x in ["a", "b", "c", "d"] {
            sets.make_set(x);
        }

        // equal length: x's list moves onto y's
        assert!(sets.union(&"a", &"b"));
        assert_eq!(sets.find(&"a"), Some("b"));

        // {c} is shorter than {b, a}
        assert!(sets.union(&"b", &"c"));
        assert_eq!(sets.find(&"c"), Some("b"));
        assert_eq!(sets.members_of(&"c").unwrap().copied().collect_vec(), vec!["b", "a", "c"]);

        assert_eq!(sets.number_of_sets(), 2);
        assert!(sets.union(&"d", &"a"));
        assert_eq!(sets.find(&"d"), Some("b"));
        assert_eq!(sets.number_of_sets(), 1);
    }
}
