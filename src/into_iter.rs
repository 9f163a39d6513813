use crate::{iter::delegate_iter, DynamicArray};
use std::{iter::FusedIterator, vec};

/// An iterator that moves out of a [`DynamicArray`].
///
/// This struct is created by the [`into_iter`] method, provided by the
/// [`IntoIterator`] trait. Spare slots past the length are dropped up front.
///
/// [`into_iter`]: DynamicArray::into_iter
#[derive(Debug, Clone)]
pub struct IntoIter<T>(pub(crate) vec::IntoIter<T>);

impl<T> IntoIter<T> {
    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Returns the remaining items as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(Vec::from(self).into_iter())
    }
}

delegate_iter!(IntoIter<T>, T);
