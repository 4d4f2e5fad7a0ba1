//! Open sets for the queue-driven strategies. Depth-first search keeps its own frame stack and
//! the random walk has no open set at all, so neither appears here.
use crate::node::NodeId;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Discovered nodes that have not been expanded yet.
pub trait Frontier {
    /// Priority type. FIFO frontiers accept and ignore it.
    type Key: Zero + Copy;

    fn push(&mut self, node: NodeId, key: Self::Key);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Expands nodes in discovery order.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> FifoFrontier {
        FifoFrontier::default()
    }
}

impl Frontier for FifoFrontier {
    type Key = f64;

    fn push(&mut self, node: NodeId, _key: f64) {
        self.queue.push_back(node);
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn clear(&mut self) {
        self.queue.clear();
    }
}

struct SmallestKeyHolder<K> {
    key: K,
    seq: u64,
    node: NodeId,
}

impl<K: PartialOrd> Eq for SmallestKeyHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestKeyHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestKeyHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestKeyHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse on key, then on insertion sequence so that equal
        // keys come out first in, first out.
        match other.key.partial_cmp(&self.key) {
            Some(Ordering::Equal) | None => other.seq.cmp(&self.seq),
            Some(s) => s,
        }
    }
}

/// Min-key-first. Equal keys are dequeued in insertion order.
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<SmallestKeyHolder<K>>,
    seq: u64,
}

impl<K: PartialOrd> Default for PriorityFrontier<K> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<K: PartialOrd> PriorityFrontier<K> {
    pub fn new() -> PriorityFrontier<K> {
        PriorityFrontier::default()
    }
    /// Smallest key currently queued.
    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|h| &h.key)
    }
}

impl<K: PartialOrd + Zero + Copy> Frontier for PriorityFrontier<K> {
    type Key = K;

    fn push(&mut self, node: NodeId, key: K) {
        self.heap.push(SmallestKeyHolder {
            key,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|h| h.node)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut f = FifoFrontier::new();
        for i in 0..4 {
            f.push(NodeId(i), 10.0 - i as f64);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(order, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
        assert!(f.is_empty());
    }

    #[test]
    fn priority_pops_minimum_key() {
        let mut f: PriorityFrontier<f64> = PriorityFrontier::new();
        f.push(NodeId(0), 4.3);
        f.push(NodeId(1), 2.1);
        f.push(NodeId(2), 3.0);
        assert_eq!(f.peek_key(), Some(&2.1));
        assert_eq!(f.pop(), Some(NodeId(1)));
        assert_eq!(f.pop(), Some(NodeId(2)));
        assert_eq!(f.pop(), Some(NodeId(0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn priority_ties_are_fifo() {
        let mut f: PriorityFrontier<i32> = PriorityFrontier::new();
        for i in 0..5 {
            f.push(NodeId(i), 7);
        }
        f.push(NodeId(9), 1);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(
            order,
            vec![NodeId(9), NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4)]
        );
    }
}
