//! Growable Integer Buffer
//!
//! A resizable container of `i32` values used to collect the integers read from
//! the input stream before they are sorted in place.
//!
//! Growth is explicit: when the buffer is full, its capacity is at least doubled
//! before the new value is stored, which gives amortized O(1) appends.

/// Capacity of a freshly created buffer.
pub const INITIAL_CAPACITY: usize = 16;

/// Resizable, exclusively owned buffer of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntBuffer {
    values: Vec<i32>,
}

impl IntBuffer {
    /// Create an empty buffer with [`INITIAL_CAPACITY`] slots reserved.
    pub fn new() -> Self {
        IntBuffer {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append `value` as the new last element.
    ///
    /// If the buffer is full its capacity is doubled first, preserving the
    /// existing elements and their order. A released buffer starts over from
    /// [`INITIAL_CAPACITY`].
    pub fn push(&mut self, value: i32) {
        let capacity = self.values.capacity();
        if self.values.len() == capacity {
            let additional = if capacity == 0 {
                INITIAL_CAPACITY
            } else {
                capacity
            };
            self.values.reserve_exact(additional);
        }
        self.values.push(value);
    }

    /// Free the backing storage. The buffer is left empty with zero capacity.
    pub fn release(&mut self) {
        self.values = Vec::new();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values the buffer can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Mutable view used by the sort engine for in-place sorting.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for IntBuffer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for IntBuffer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut buffer = IntBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_new_is_empty_with_initial_capacity() {
        let buffer = IntBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut buffer = IntBuffer::new();
        for value in [5, -3, 8, 1] {
            buffer.push(value);
        }
        assert_eq!(buffer.as_slice(), &[5, -3, 8, 1]);
    }

    #[test]
    fn test_capacity_doubles_when_full() {
        let mut buffer = IntBuffer::new();
        let initial = buffer.capacity();
        for value in 0..initial as i32 {
            buffer.push(value);
        }
        assert_eq!(buffer.capacity(), initial);

        buffer.push(-1);
        assert!(buffer.capacity() >= initial * 2);
        assert_eq!(buffer.len(), initial + 1);
        assert_eq!(buffer.as_slice()[initial], -1);
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut rng = rand::thread_rng();
        let mut buffer = IntBuffer::new();
        for _ in 0..10_000 {
            buffer.push(rng.gen());
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(buffer.len(), 10_000);
    }

    #[test]
    fn test_release_frees_storage() {
        let mut buffer: IntBuffer = (0..100).collect();
        buffer.release();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);

        // Usable again after release.
        buffer.push(7);
        assert_eq!(buffer.as_slice(), &[7]);
        assert!(buffer.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn test_mut_slice_writes_through() {
        let mut buffer: IntBuffer = vec![3, 2, 1].into_iter().collect();
        buffer.as_mut_slice().reverse();
        assert_eq!(buffer.into_vec(), vec![1, 2, 3]);
    }
}
