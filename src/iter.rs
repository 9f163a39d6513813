use crate::DynamicArray;
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    slice,
};

/// Implements the iterator traits for a newtype over a standard iterator by
/// forwarding to the wrapped iterator.
macro_rules! delegate_iter {
    ($t:ty, $item:ty $(, $lifetime:tt)?) => {
        impl<$($lifetime,)? T> Iterator for $t {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.0.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }

            fn count(self) -> usize
            where
                Self: Sized,
            {
                self.0.count()
            }

            #[inline]
            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.0.nth(n)
            }

            fn last(self) -> Option<Self::Item>
            where
                Self: Sized,
            {
                self.0.last()
            }

            fn fold<B, F>(self, init: B, f: F) -> B
            where
                Self: Sized,
                F: FnMut(B, Self::Item) -> B,
            {
                self.0.fold(init, f)
            }
        }

        impl<$($lifetime,)? T> DoubleEndedIterator for $t {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.0.next_back()
            }

            #[inline]
            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.0.nth_back(n)
            }
        }

        impl<$($lifetime,)? T> FusedIterator for $t {}
        impl<$($lifetime,)? T> ExactSizeIterator for $t {}
    };
}

pub(crate) use delegate_iter;

/// Immutable [`DynamicArray`] iterator.
///
/// This struct is created by the [`iter`] method.
///
/// [`iter`]: DynamicArray::iter
pub struct Iter<'a, T>(pub(crate) slice::Iter<'a, T>);

impl<'a, T> Iter<'a, T> {
    /// Returns a slice of all elements that have not been yielded yet.
    pub fn as_slice(&self) -> &'a [T] {
        self.0.as_slice()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> Debug for Iter<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


delegate_iter!(Iter<'a, T>, &'a T, 'a);
