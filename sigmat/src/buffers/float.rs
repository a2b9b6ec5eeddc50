//! Exact dense f32 storage, heap-backed or in native memory
//!
//! The native mode places the values in an anonymous memory mapping
//! instead of the heap. Semantics are identical to the heap mode; the
//! mapping only changes locality and allocation lifetime.

#[cfg(feature = "mmap")]
use memmap2::MmapMut;
use sigmat_core::{BackingBuffer, Result};

/// Dense f32 backing buffer with no precision loss
///
/// Created unallocated; [`allocate`](BackingBuffer::allocate) sizes it
/// exactly once. Cloning deep-copies the contents in O(len) and must not
/// race with mutation of the source.
#[derive(Debug)]
pub struct FloatBuffer {
    storage: Storage,
    native: bool,
}

#[derive(Debug)]
enum Storage {
    Unallocated,
    Heap(Vec<f32>),
    #[cfg(feature = "mmap")]
    Native(MmapMut),
}

impl FloatBuffer {
    /// Create an unallocated heap-backed buffer
    pub fn new() -> Self {
        Self {
            storage: Storage::Unallocated,
            native: false,
        }
    }

    /// Create a heap-backed buffer already allocated to `size`
    pub fn allocated(size: usize) -> Self {
        let mut buffer = Self::new();
        buffer.allocate(size);
        buffer
    }

    /// Create an unallocated buffer that will allocate in native memory
    #[cfg(feature = "mmap")]
    pub fn native() -> Self {
        Self {
            storage: Storage::Unallocated,
            native: true,
        }
    }

    /// Whether this buffer allocates in native memory
    pub fn is_native(&self) -> bool {
        self.native
    }

    /// The stored values; empty before allocation
    pub fn as_slice(&self) -> &[f32] {
        match &self.storage {
            Storage::Unallocated => &[],
            Storage::Heap(values) => values,
            #[cfg(feature = "mmap")]
            Storage::Native(map) => bytemuck::cast_slice(&map[..]),
        }
    }

    /// The stored values as raw bytes in native layout
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        match &mut self.storage {
            Storage::Unallocated => &mut [],
            Storage::Heap(values) => values,
            #[cfg(feature = "mmap")]
            Storage::Native(map) => bytemuck::cast_slice_mut(&mut map[..]),
        }
    }

    fn allocate_storage(native: bool, size: usize) -> Storage {
        #[cfg(feature = "mmap")]
        if native && size > 0 {
            // An anonymous mapping failure is an allocation failure, same
            // class as a failed Vec allocation
            let map = MmapMut::map_anon(size * core::mem::size_of::<f32>())
                .expect("failed to allocate anonymous mapping");
            return Storage::Native(map);
        }
        #[cfg(not(feature = "mmap"))]
        let _ = native;
        Storage::Heap(vec![0.0; size])
    }
}

impl Default for FloatBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingBuffer for FloatBuffer {
    fn allocate(&mut self, size: usize) {
        debug_assert!(!self.is_allocated(), "backing buffer allocated twice");
        self.storage = Self::allocate_storage(self.native, size);
    }

    fn is_allocated(&self) -> bool {
        !matches!(self.storage, Storage::Unallocated)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> f32 {
        debug_assert!(self.is_allocated(), "backing buffer used before allocate");
        self.as_slice()[index]
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        debug_assert!(self.is_allocated(), "backing buffer used before allocate");
        self.as_mut_slice()[index] = value;
        Ok(())
    }
}

impl Clone for FloatBuffer {
    fn clone(&self) -> Self {
        let mut copy = Self {
            storage: Storage::Unallocated,
            native: self.native,
        };
        if self.is_allocated() {
            copy.allocate(self.len());
            copy.as_mut_slice().copy_from_slice(self.as_slice());
        }
        copy
    }
}

impl PartialEq for FloatBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.is_allocated() == other.is_allocated() && self.as_slice() == other.as_slice()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FloatBuffer {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        let contents = self.is_allocated().then(|| self.as_slice().to_vec());
        serde::Serialize::serialize(&contents, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FloatBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let contents = <Option<Vec<f32>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self {
            storage: match contents {
                Some(values) => Storage::Heap(values),
                None => Storage::Unallocated,
            },
            native: false,
        })
    }
}
