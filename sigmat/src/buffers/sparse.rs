//! Hash-based sparse storage over linear indices

use hashbrown::HashMap;
use sigmat_core::{BackingBuffer, Result};

/// Sparse backing buffer with a configurable default value
///
/// Only non-default values occupy an entry: [`set`](BackingBuffer::set) to
/// the default removes, [`get`](BackingBuffer::get) of an absent index
/// yields the default. [`allocate`](BackingBuffer::allocate) only records
/// the logical size; the map grows with occupancy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseBuffer {
    entries: HashMap<usize, f32>,
    default_value: f32,
    size: usize,
    allocated: bool,
}

impl SparseBuffer {
    /// Create an unallocated buffer defaulting to 0
    pub fn new() -> Self {
        Self::with_default_value(0.0)
    }

    /// Create an unallocated buffer with the given default value
    pub fn with_default_value(default_value: f32) -> Self {
        Self {
            entries: HashMap::new(),
            default_value,
            size: 0,
            allocated: false,
        }
    }

    /// The value reported for indices with no stored entry
    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    /// Number of non-default entries actually stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SparseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingBuffer for SparseBuffer {
    fn allocate(&mut self, size: usize) {
        debug_assert!(!self.allocated, "backing buffer allocated twice");
        self.size = size;
        self.allocated = true;
    }

    fn is_allocated(&self) -> bool {
        self.allocated
    }

    fn len(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> f32 {
        debug_assert!(self.allocated, "backing buffer used before allocate");
        debug_assert!(index < self.size, "index outside buffer");
        self.entries.get(&index).copied().unwrap_or(self.default_value)
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        debug_assert!(self.allocated, "backing buffer used before allocate");
        debug_assert!(index < self.size, "index outside buffer");
        if value == self.default_value {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entries_yield_default() {
        let mut buffer = SparseBuffer::with_default_value(1.5);
        buffer.allocate(100);

        assert_eq!(buffer.get(42), 1.5);
        assert_eq!(buffer.nnz(), 0);
    }

    #[test]
    fn test_default_writes_remove_entries() {
        let mut buffer = SparseBuffer::new();
        buffer.allocate(10);

        buffer.set(3, 2.0).unwrap();
        assert_eq!(buffer.nnz(), 1);
        assert_eq!(buffer.get(3), 2.0);

        buffer.set(3, 0.0).unwrap();
        assert_eq!(buffer.nnz(), 0);
        assert_eq!(buffer.get(3), 0.0);
    }
}
