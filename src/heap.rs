//! An array backed binary min-heap, used by the tree builder to repeatedly find
//! the two lightest nodes.

/// A min-priority queue ordered by a caller supplied weight.
///
/// Items with equal weight are extracted in the order they were inserted. Every insertion
/// is tagged with an increasing sequence number and the heap is ordered by
/// `(weight, sequence)`, which makes the extraction order fully deterministic.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, W = usize> {
    entries: Vec<Entry<T, W>>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct Entry<T, W> {
    item: T,
    weight: W,
    sequence: u64,
}

impl<T, W: Ord + Copy> Entry<T, W> {
    fn key(&self) -> (W, u64) {
        (self.weight, self.sequence)
    }
}

impl<T, W: Ord + Copy> Default for MinPriorityQueue<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W: Ord + Copy> MinPriorityQueue<T, W> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Insert `item`, then swap it upwards while its parent is heavier.
    pub fn insert(&mut self, item: T, weight: W) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(Entry {
            item,
            weight,
            sequence,
        });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the lightest item, `None` if the queue is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract_min_with_weight().map(|(item, _)| item)
    }

    /// Like [`MinPriorityQueue::extract_min`] but also returns the weight the item was inserted with.
    pub fn extract_min_with_weight(&mut self) -> Option<(T, W)> {
        if self.entries.is_empty() {
            return None;
        }
        // Move the last element into the root slot, then restore the heap from the top
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((min.item, min.weight))
    }

    /// Weight of the lightest item without removing it
    pub fn peek_weight(&self) -> Option<W> {
        self.entries.first().map(|entry| entry.weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].key() < self.entries[parent].key() {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < len && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|idx| self.entries[(idx - 1) / 2].key() <= self.entries[idx].key())
    }
}

#[cfg(test)]
mod tests {
    use super::MinPriorityQueue;
    use rand::{Rng, SeedableRng};

    #[test]
    fn extracts_in_weight_order() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
        let mut queue = MinPriorityQueue::new();
        let mut weights = Vec::new();
        for idx in 0..500 {
            let weight: usize = rng.gen_range(0..100);
            queue.insert(idx, weight);
            weights.push(weight);
            assert!(queue.is_valid_heap());
        }
        weights.sort_unstable();

        let mut extracted = Vec::new();
        while let Some((_, weight)) = queue.extract_min_with_weight() {
            assert!(queue.is_valid_heap());
            extracted.push(weight);
        }
        assert_eq!(extracted, weights);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_weights_are_fifo() {
        let mut queue = MinPriorityQueue::new();
        queue.insert('c', 1);
        queue.insert('x', 3);
        queue.insert('d', 1);
        queue.insert('y', 3);
        queue.insert('e', 1);

        let order: Vec<char> = core::iter::from_fn(|| queue.extract_min()).collect();
        assert_eq!(order, vec!['c', 'd', 'e', 'x', 'y']);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut queue = MinPriorityQueue::with_capacity(2);
        for weight in (0..1000_usize).rev() {
            queue.insert(weight, weight);
        }
        assert_eq!(queue.len(), 1000);
        assert_eq!(queue.peek_weight(), Some(0));
        for expected in 0..1000 {
            assert_eq!(queue.extract_min(), Some(expected));
        }
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    fn interleaved_insert_and_extract() {
        let mut queue = MinPriorityQueue::new();
        queue.insert("five", 5);
        queue.insert("two", 2);
        assert_eq!(queue.extract_min(), Some("two"));
        queue.insert("one", 1);
        queue.insert("seven", 7);
        assert_eq!(queue.extract_min(), Some("one"));
        assert_eq!(queue.extract_min(), Some("five"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.extract_min(), Some("seven"));
        assert_eq!(queue.peek_weight(), None);
    }
}
