/*!
# Priority Queues

Min-priority queues with *decrease-key* used by [`ShortestPaths`](crate::algo::ShortestPaths) and
[`SpanningTree`](crate::algo::SpanningTree). Two implementations share the [`PriorityQueue`] interface:

- [`BinaryMinHeap`]: array-backed binary heap; an element is addressed by its key
- [`FibonacciHeap`]: arena-backed Fibonacci heap with amortized *O(1)* insert and decrease-key;
  an element is addressed by an opaque [`FibonacciHandle`]

[`HeapKind`] selects one of them at runtime.
*/

pub mod binary;
pub mod fibonacci;

pub use binary::BinaryMinHeap;
pub use fibonacci::{FibonacciHandle, FibonacciHeap};

use crate::Weight;

/// Min-priority queue over keys `K` with numeric priorities.
///
/// # Examples
/// ```
/// use wgraphs::heap::*;
///
/// let mut heap = FibonacciHeap::default();
/// let a = heap.insert("a", 5.0);
/// heap.insert("b", 3.0);
///
/// assert!(heap.decrease_key(&a, 1.0).is_some());
/// assert_eq!(heap.extract_min(), Some(("a", 1.0)));
/// assert_eq!(heap.extract_min(), Some(("b", 3.0)));
/// assert!(heap.is_empty());
/// ```
pub trait PriorityQueue<K>: Default {
    /// Reference to a queued element that stays valid until the element is extracted
    type Handle: Clone;

    /// Inserts `key` with `priority` and returns a handle to it
    fn insert(&mut self, key: K, priority: Weight) -> Self::Handle;

    /// Removes and returns the element with the smallest priority
    fn extract_min(&mut self) -> Option<(K, Weight)>;

    /// Returns the element with the smallest priority without removing it
    fn peek_min(&self) -> Option<(&K, Weight)>;

    /// Lowers the priority of the element behind `handle`.
    ///
    /// Returns `None` if the element is not (or no longer) queued; the caller must insert it then.
    /// A priority larger than the current one is refused with `None` and leaves the heap unchanged.
    fn decrease_key(&mut self, handle: &Self::Handle, priority: Weight) -> Option<Self::Handle>;

    /// Number of queued elements
    fn len(&self) -> usize;

    /// Returns *true* if no element is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runtime selector for the priority queue used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapKind {
    #[default]
    Binary,
    Fibonacci,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Random inserts/decreases/extracts; every extracted priority must be the minimum of a
    /// naive model of the queue.
    fn stress<H: PriorityQueue<u32>>(seed: u64) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);

        let mut heap = H::default();
        let mut model: Vec<Option<(H::Handle, Weight)>> = vec![None; 200];
        let mut last = f64::NEG_INFINITY;

        for step in 0..2000u32 {
            match rng.random_range(0..10) {
                0..=3 => {
                    let key = rng.random_range(0..200u32);
                    if model[key as usize].is_none() {
                        let prio = rng.random_range(0.0..100.0);
                        let h = heap.insert(key, prio);
                        model[key as usize] = Some((h, prio));
                        last = f64::NEG_INFINITY;
                    }
                }
                4..=6 => {
                    let key = rng.random_range(0..200u32);
                    if let Some((h, prio)) = model[key as usize].clone() {
                        let lower = prio - rng.random_range(0.0..50.0);
                        let h = heap.decrease_key(&h, lower).unwrap();
                        model[key as usize] = Some((h, lower));
                        last = f64::NEG_INFINITY;
                    }
                }
                _ => {
                    let expected = model
                        .iter()
                        .filter_map(|x| x.as_ref().map(|(_, p)| *p))
                        .min_by(|a, b| a.total_cmp(b));

                    match heap.extract_min() {
                        Some((key, prio)) => {
                            assert_eq!(Some(prio), expected, "step {step}");
                            assert_eq!(model[key as usize].as_ref().unwrap().1, prio);
                            assert!(prio >= last);
                            last = prio;
                            model[key as usize] = None;
                        }
                        None => assert!(expected.is_none()),
                    }
                }
            }
            assert_eq!(heap.len(), model.iter().flatten().count());
        }
    }

    fn drain_sorted<H: PriorityQueue<u32>>(seed: u64) {
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let mut heap = H::default();
        for k in 0..500 {
            heap.insert(k, rng.random_range(-10.0..10.0));
        }

        let mut prev = f64::NEG_INFINITY;
        let mut count = 0;
        while let Some((_, p)) = heap.extract_min() {
            assert!(p >= prev);
            prev = p;
            count += 1;
        }
        assert_eq!(count, 500);
    }

    #[test]
    fn binary_heap_order() {
        for seed in 0..5 {
            stress::<BinaryMinHeap<u32>>(seed);
            drain_sorted::<BinaryMinHeap<u32>>(seed);
        }
    }

    #[test]
    fn fibonacci_heap_order() {
        for seed in 0..5 {
            stress::<FibonacciHeap<u32>>(seed);
            drain_sorted::<FibonacciHeap<u32>>(seed);
        }
    }

    #[test]
    fn increase_is_refused() {
        let mut bin = BinaryMinHeap::default();
        bin.insert('x', 2.0);
        assert_eq!(bin.decrease_key(&'x', 3.0), None);
        assert_eq!(bin.decrease_key(&'y', 1.0), None);
        assert_eq!(bin.peek_min(), Some((&'x', 2.0)));

        let mut fib = FibonacciHeap::default();
        let h = fib.insert('x', 2.0);
        assert_eq!(fib.decrease_key(&h, 3.0), None);
        assert_eq!(fib.peek_min(), Some((&'x', 2.0)));
        assert_eq!(fib.extract_min(), Some(('x', 2.0)));
        assert_eq!(fib.decrease_key(&h, 1.0), None);
    }
}
