use crate::{iter::delegate_iter, DynamicArray};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    slice,
};

/// Mutable [`DynamicArray`] iterator.
///
/// This struct is created by the [`iter_mut`] method.
///
/// [`iter_mut`]: DynamicArray::iter_mut
pub struct IterMut<'a, T>(pub(crate) slice::IterMut<'a, T>);

impl<'a, T> IterMut<'a, T> {
    /// Returns an immutable slice of all elements that have not been yielded
    /// yet.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Returns a mutable slice of all elements that have not been yielded yet.
    ///
    /// To avoid creating `&mut` references that alias, this is forced to
    /// consume the iterator.
    pub fn into_slice(self) -> &'a mut [T] {
        self.0.into_slice()
    }
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> Debug for IterMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

delegate_iter!(IterMut<'a, T>, &'a mut T, 'a);

#[cfg(test)]
mod tests {
    use crate::dynarray;

    #[test]
    fn modifies_every_element() {
        let mut array = dynarray![1, 2, 3];
        for element in &mut array {
            *element += 1;
        }
        assert_eq!(array, [2, 3, 4]);
    }

    #[test]
    fn into_slice_exposes_rest() {
        let mut array = dynarray![1, 2, 3];
        let mut iter = array.iter_mut();
        iter.next();
        let rest = iter.into_slice();
        rest[0] = 20;
        assert_eq!(array, [1, 20, 3]);
    }
}
