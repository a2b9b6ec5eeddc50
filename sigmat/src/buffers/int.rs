//! Dense storage rounded to whole numbers

use sigmat_core::{BackingBuffer, Result};

/// Dense backing buffer that rounds every value to the nearest integer
///
/// The rounding happens on [`set`](BackingBuffer::set) and is
/// irreversible; [`get`](BackingBuffer::get) returns the stored integer as
/// an `f32`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntBuffer {
    values: Vec<i32>,
    allocated: bool,
}

impl IntBuffer {
    /// Create an unallocated buffer
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            allocated: false,
        }
    }

    /// Create a buffer already allocated to `size`
    pub fn allocated(size: usize) -> Self {
        let mut buffer = Self::new();
        buffer.allocate(size);
        buffer
    }

    /// The stored integers
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingBuffer for IntBuffer {
    fn allocate(&mut self, size: usize) {
        debug_assert!(!self.allocated, "backing buffer allocated twice");
        self.values = vec![0; size];
        self.allocated = true;
    }

    fn is_allocated(&self) -> bool {
        self.allocated
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> f32 {
        debug_assert!(self.allocated, "backing buffer used before allocate");
        self.values[index] as f32
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        debug_assert!(self.allocated, "backing buffer used before allocate");
        self.values[index] = value.round() as i32;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_on_set() {
        let mut buffer = IntBuffer::allocated(4);

        buffer.set(0, 1.4).unwrap();
        buffer.set(1, 1.5).unwrap();
        buffer.set(2, -2.6).unwrap();
        buffer.set(3, 3.0).unwrap();

        assert_eq!(buffer.get(0), 1.0);
        assert_eq!(buffer.get(1), 2.0);
        assert_eq!(buffer.get(2), -3.0);
        assert_eq!(buffer.get(3), 3.0);
    }
}
