use std::fmt::{Debug, Display};

use crate::node::*;

/// Edge weights are plain floating point numbers so that `+inf` can mark unreachable vertices.
/// Negative weights are allowed but only meaningful for Bellman-Ford and Floyd-Warshall.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// One entry of a neighbor list: the endpoint's slot and an optional weight.
///
/// A missing weight is semantically `0` and marks the entry as *unweighted*.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Option<Weight>,
}

impl Neighbor {
    /// Creates a new entry; a weight of exactly `0` is stored as unweighted
    pub fn new(node: Node, weight: Weight) -> Self {
        Self {
            node,
            weight: (weight != 0.0).then_some(weight),
        }
    }

    /// Returns the weight of the entry, treating unweighted entries as `0`
    pub fn weight(&self) -> Weight {
        self.weight.unwrap_or(0.0)
    }

    /// Returns *true* if the entry carries an explicit weight
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

/// An edge between two keyed vertices.
/// It is up to the graph whether an `Edge` is directed or not.
#[derive(Clone, PartialEq)]
pub struct Edge<K> {
    pub source: K,
    pub target: K,
    pub weight: Weight,
}

impl<K> Edge<K> {
    pub fn new(source: K, target: K, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

impl<K: PartialEq> Edge<K> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<K: Display> Display for Edge<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.source, self.target, self.weight)
    }
}

impl<K: Display> Debug for Edge<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<K> From<(K, K)> for Edge<K> {
    fn from(value: (K, K)) -> Self {
        Edge::new(value.0, value.1, 0.0)
    }
}

impl<K> From<(K, K, Weight)> for Edge<K> {
    fn from(value: (K, K, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weight_is_unweighted() {
        assert!(!Neighbor::new(3, 0.0).is_weighted());
        assert_eq!(Neighbor::new(3, 0.0).weight(), 0.0);

        let nb = Neighbor::new(3, -2.5);
        assert!(nb.is_weighted());
        assert_eq!(nb.weight(), -2.5);
    }

    #[test]
    fn edge_conversions() {
        let e: Edge<&str> = ("a", "b", 4.0).into();
        assert_eq!(e.to_string(), "(a,b;4)");
        assert!(!e.is_loop());

        let r = e.reverse();
        assert_eq!((r.source, r.target), ("b", "a"));

        let l: Edge<u32> = (7, 7).into();
        assert!(l.is_loop());
        assert_eq!(l.weight, 0.0);
    }
}
