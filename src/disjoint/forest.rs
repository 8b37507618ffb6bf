use std::hash::Hash;

use fxhash::FxHashMap;

use super::DisjointSet;

/// Disjoint-set forest with union by rank and path compression.
/// All operations run in amortized *O(α(n))*.
///
/// The forest does not track how many sets are live; use [`super::ListSet`] if that is needed.
#[derive(Debug, Clone)]
pub struct ForestSet<K> {
    elements: Vec<K>,
    index: FxHashMap<K, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<K> Default for ForestSet<K> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            index: FxHashMap::default(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> ForestSet<K> {
    /// Returns the root of `x`'s tree and points every node on the path directly to it
    fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }
}

impl<K: Clone + Eq + Hash> DisjointSet<K> for ForestSet<K> {
    fn make_set(&mut self, x: K) -> bool {
        if self.index.contains_key(&x) {
            return false;
        }
        let i = self.elements.len();
        self.index.insert(x.clone(), i);
        self.elements.push(x);
        self.parent.push(i);
        self.rank.push(0);
        true
    }

    fn find(&mut self, x: &K) -> Option<K> {
        let i = *self.index.get(x)?;
        let root = self.root(i);
        Some(self.elements[root].clone())
    }

    fn union(&mut self, x: &K, y: &K) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(x), self.index.get(y)) else {
            return false;
        };

        let (rx, ry) = (self.root(i), self.root(j));
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_compression() {
        let mut sets = ForestSet::default();
        for x in 0..8 {
            sets.make_set(x);
        }
        for x in 0..7 {
            sets.union(&x, &(x + 1));
        }

        let leader = sets.find(&7).unwrap();
        for x in 0..8 {
            assert_eq!(sets.find(&x), Some(leader));
            let i = sets.index[&x];
            assert_eq!(sets.parent[sets.parent[i]], sets.parent[i]);
        }
        assert_eq!(sets.len(), 8);
    }
}
