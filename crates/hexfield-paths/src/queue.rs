//! A min-priority queue with FIFO tie-break.

use std::collections::BinaryHeap;

struct Entry<V> {
    key: f64,
    seq: u64,
    value: V,
}

impl<V> PartialEq for Entry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

// Keys are never NaN here (the queue owner guarantees finite costs), so the
// reflexivity Eq requires holds.
impl<V> Eq for Entry<V> {}

impl<V> Ord for Entry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first;
        // equal keys pop in insertion order.
        other
            .key
            .total_cmp(&self.key)
            .then(other.seq.cmp(&self.seq))
    }
}

impl<V> PartialOrd for Entry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ascending-key priority queue; equal keys preserve insertion (FIFO) order,
/// which keeps searches deterministic on symmetric grids.
pub(crate) struct OpenQueue<V> {
    heap: BinaryHeap<Entry<V>>,
    seq: u64,
}

impl<V> OpenQueue<V> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, key: f64, value: V) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { key, seq, value });
    }

    pub(crate) fn pop(&mut self) -> Option<V> {
        self.heap.pop().map(|e| e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut q = OpenQueue::new();
        q.push(3.0, "c");
        q.push(1.0, "a");
        q.push(2.0, "b");
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn equal_keys_pop_fifo() {
        let mut q = OpenQueue::new();
        for v in 0..16 {
            q.push(1.0, v);
        }
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(order, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn mixed_keys_interleave_correctly() {
        let mut q = OpenQueue::new();
        q.push(2.0, "x1");
        q.push(1.0, "y1");
        q.push(2.0, "x2");
        q.push(1.0, "y2");
        assert_eq!(q.pop(), Some("y1"));
        assert_eq!(q.pop(), Some("y2"));
        assert_eq!(q.pop(), Some("x1"));
        assert_eq!(q.pop(), Some("x2"));
    }
}
