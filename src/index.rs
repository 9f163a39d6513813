use crate::DynamicArray;
use std::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

/// Indexes the live elements like a slice.
///
/// # Panics
///
/// Panics when the index or range reaches past the length, even if it is
/// within the capacity. Use [`DynamicArray::at`] for a fallible lookup.
impl<T, I> Index<I> for DynamicArray<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I> IndexMut<I> for DynamicArray<T>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
