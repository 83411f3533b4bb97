use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over `(item, priority)` pairs, backed by a `BinaryHeap`
///
/// The same item may be queued several times with different priorities;
/// callers discard stale entries when they pop them. Ties on priority pop the
/// smaller item first.
#[derive(Debug, Clone)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, item))| (*item, *priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut queue = MinQueue::new();
        queue.push(3usize, 30i64);
        queue.push(1, 10);
        queue.push(2, 20);

        assert_eq!(queue.peek(), Some((1, 10)));
        assert_eq!(queue.pop(), Some((1, 10)));
        assert_eq!(queue.pop(), Some((2, 20)));
        assert_eq!(queue.pop(), Some((3, 30)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut queue = MinQueue::new();
        queue.push(4usize, 7i64);
        queue.push(4, 2);
        queue.push(0, 2);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((0, 2)));
        assert_eq!(queue.pop(), Some((4, 2)));
        assert_eq!(queue.pop(), Some((4, 7)));
    }
}
