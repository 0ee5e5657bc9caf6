//! A min-oriented priority queue backed by a binary heap.
//!
//! Positions are 1-indexed so the parent of `k` is `k / 2` and its children
//! are `2k` and `2k + 1`; position `k` lives at `heap[k - 1]`. Storage grows
//! by doubling when full and halves once occupancy falls to a quarter.

/// Capacity below which the queue never shrinks.
const MIN_CAPACITY: usize = 4;

#[derive(Clone, Debug)]
pub struct MinPq<K> {
    heap: Vec<K>,
}

impl<K: Ord> MinPq<K> {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            heap: Vec::with_capacity(max.max(MIN_CAPACITY)),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// The smallest key, without removing it.
    pub fn min(&self) -> Option<&K> {
        self.heap.first()
    }

    pub fn insert(&mut self, key: K) {
        if self.heap.len() == self.heap.capacity() {
            self.heap.reserve_exact(self.heap.capacity().max(1));
        }
        self.heap.push(key);
        self.swim(self.heap.len());
    }

    /// Removes and returns the smallest key.
    pub fn extract_min(&mut self) -> Option<K> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        self.sink(1);

        let capacity = self.heap.capacity();
        if capacity > MIN_CAPACITY && self.heap.len() <= capacity / 4 {
            self.heap.shrink_to((capacity / 2).max(MIN_CAPACITY));
        }
        Some(min)
    }

    /// Checks heap order over positions `1..=len`.
    pub fn is_heap(&self) -> bool {
        let n = self.heap.len();
        (1..=n / 2).all(|k| {
            let j = 2 * k;
            !self.more(k, j) && (j + 1 > n || !self.more(k, j + 1))
        })
    }

    // Bottom-up reheapify
    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.more(k / 2, k) {
            self.exch(k / 2, k);
            k /= 2;
        }
    }

    // Top-down reheapify
    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.more(j, j + 1) {
                j += 1;
            }
            if !self.more(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }

    fn more(&self, i: usize, j: usize) -> bool {
        self.heap[i - 1] > self.heap[j - 1]
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.heap.swap(i - 1, j - 1);
    }
}

impl<K: Ord> Default for MinPq<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a queue from arbitrary keys with a bottom-up heap construction.
impl<K: Ord> From<Vec<K>> for MinPq<K> {
    fn from(keys: Vec<K>) -> Self {
        let mut pq = Self { heap: keys };
        for k in (1..=pq.heap.len() / 2).rev() {
            pq.sink(k);
        }
        pq
    }
}
