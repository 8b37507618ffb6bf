/*!
# Disjoint Sets

Union-find structures used by [`SpanningTree`](crate::algo::SpanningTree):

- [`ForestSet`]: disjoint-set forest with union by rank and path compression
- [`ListSet`]: every set is a list headed by its leader; each element points back to its list,
  so `find` is a single lookup and `union` appends the shorter list to the longer one.
  It also counts the live sets ([`CountingDisjointSet`]).

Elements are arbitrary hashable keys and are interned to dense indices internally.
*/

pub mod forest;
pub mod list;

pub use forest::ForestSet;
pub use list::ListSet;

/// Partition of keys into disjoint, named sets.
///
/// # Examples
/// ```
/// use wgraphs::disjoint::*;
///
/// let mut sets = ListSet::default();
/// for x in 0..4 {
///     sets.make_set(x);
/// }
/// assert!(sets.union(&0, &1));
/// assert!(!sets.union(&1, &0));
/// assert!(sets.same_set(&0, &1));
/// assert_eq!(sets.number_of_sets(), 3);
/// ```
pub trait DisjointSet<K>: Default {
    /// Adds `x` as a singleton set. Returns *false* (and does nothing) if `x` is already known.
    fn make_set(&mut self, x: K) -> bool;

    /// Returns the leader of the set containing `x`, or `None` if `x` is unknown
    fn find(&mut self, x: &K) -> Option<K>;

    /// Merges the sets of `x` and `y`.
    /// Returns *true* exactly if two different sets were merged.
    fn union(&mut self, x: &K, y: &K) -> bool;

    /// Returns *true* if both keys are known and belong to the same set
    fn same_set(&mut self, x: &K, y: &K) -> bool
    where
        K: PartialEq,
    {
        match (self.find(x), self.find(y)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of keys in the structure
    fn len(&self) -> usize;

    /// Returns *true* if no key was added yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`DisjointSet`] that knows how many sets are currently live
pub trait CountingDisjointSet<K>: DisjointSet<K> {
    /// Number of live (non-empty) sets
    fn number_of_sets(&self) -> usize;
}

/// Runtime selector for the disjoint-set used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisjointSetKind {
    #[default]
    Forest,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn forest_and_list_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let n = rng.random_range(1..60u32);
            let mut forest = ForestSet::default();
            let mut list = ListSet::default();
            for x in 0..n {
                forest.make_set(x);
                list.make_set(x);
            }

            for _ in 0..n {
                let (x, y) = (rng.random_range(0..n), rng.random_range(0..n));
                let before = list.number_of_sets();
                let merged = list.union(&x, &y);
                assert_eq!(forest.union(&x, &y), merged);
                assert_eq!(list.number_of_sets(), before - merged as usize);

                for _ in 0..5 {
                    let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
                    assert_eq!(forest.same_set(&a, &b), list.same_set(&a, &b));
                }
            }
        }
    }

    #[test]
    fn unknown_keys() {
        let mut forest = ForestSet::default();
        let mut list = ListSet::default();
        forest.make_set("a");
        list.make_set("a");

        assert_eq!(forest.find(&"b"), None);
        assert_eq!(list.find(&"b"), None);
        assert!(!forest.union(&"a", &"b"));
        assert!(!list.union(&"b", &"a"));
        assert!(!forest.same_set(&"a", &"b"));
        assert!(!forest.make_set("a"));
        assert_eq!(list.number_of_sets(), 1);
    }
}
