use std::{iter, mem};

/// The slot storage behind [`DynamicArray`].
///
/// It owns exactly `capacity` initialized slots in one heap block. Slots past
/// the logical length of the owning array are never observed by callers and
/// hold either `T::default()` or a stale value left behind by a shrinking
/// operation.
///
/// The block is released once, when the buffer is dropped. Growth allocates a
/// fresh block and moves the live prefix into it without cloning.
///
/// [`DynamicArray`]: crate::DynamicArray
pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T> Buffer<T> {
    /// Creates a buffer with zero slots and without allocating.
    pub fn dangling() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    #[inline]
    pub fn prefix(&self, len: usize) -> &[T] {
        &self.slots[..len]
    }

    /// The first `len` slots, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    #[inline]
    pub fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.slots[..len]
    }

    /// All slots, including the ones past the logical length.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Gives the block up as a `Vec` whose length is the full capacity.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T> Buffer<T>
where
    T: Default,
{
    /// Allocates `capacity` slots, each holding `T::default()`.
    pub fn alloc(capacity: usize) -> Self {
        Self {
            slots: iter::repeat_with(T::default).take(capacity).collect(),
        }
    }

    /// Replaces the block with one of `new_capacity` slots and moves the
    /// first `len` elements over.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity` or `len > new_capacity`.
    pub fn realloc(&mut self, new_capacity: usize, len: usize) {
        trace!(
            "realloc: capacity {} -> {}, moving {} elements",
            self.capacity(),
            new_capacity,
            len
        );
        let mut grown = Self::alloc(new_capacity);
        for (dst, src) in grown.slots.iter_mut().zip(self.slots[..len].iter_mut()) {
            mem::swap(dst, src);
        }
        *self = grown;
    }
}
