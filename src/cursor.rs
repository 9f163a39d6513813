use crate::{DynamicArray, Iter};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

/// A read-only position in a [`DynamicArray`].
///
/// A cursor is an index into the live range `0..=len`, where `len` is the
/// end position that has no element. It borrows the array, so the array can
/// not be reallocated while the cursor exists. Moving a cursor outside of
/// `0..=len` is caught by debug assertions; in release builds such a cursor
/// simply yields no element.
///
/// This struct is created by [`cursor_front`], [`cursor_end`] and [`find`].
///
/// # Examples
///
/// ```
/// # use dynarray::dynarray;
/// let array = dynarray![1, 2, 3];
/// let mut cursor = array.cursor_front();
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(&2));
/// assert_eq!(array.cursor_end() - cursor, 2);
/// assert_eq!((cursor + 2).get(), None);
/// ```
///
/// [`cursor_front`]: DynamicArray::cursor_front
/// [`cursor_end`]: DynamicArray::cursor_end
/// [`find`]: DynamicArray::find
pub struct Cursor<'a, T> {
    array: &'a DynamicArray<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>, index: usize) -> Self {
        debug_assert!(index <= array.len(), "cursor out of range");
        Self { array, index }
    }

    /// The index this cursor points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.index >= self.array.len()
    }

    /// Returns the element under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.array.as_slice().get(self.index)
    }

    /// Advances to the next position.
    pub fn move_next(&mut self) {
        debug_assert!(self.index < self.array.len(), "cursor moved past the end");
        self.index = self.index.wrapping_add(1);
    }

    /// Steps back to the previous position.
    pub fn move_prev(&mut self) {
        debug_assert!(self.index > 0, "cursor moved before the start");
        self.index = self.index.wrapping_sub(1);
    }

    /// Returns a cursor `count` positions away from this one.
    pub fn offset(self, count: isize) -> Self {
        Self::new(self.array, self.index.wrapping_add_signed(count))
    }

    /// The number of positions from `origin` to this cursor.
    ///
    /// Both cursors must come from the same array.
    pub fn distance(&self, origin: &Self) -> isize {
        debug_assert!(
            ptr::eq(self.array, origin.array),
            "distance between cursors of different arrays"
        );
        self.index.wrapping_sub(origin.index) as isize
    }

    /// Returns an iterator over the elements from the cursor to the end.
    pub fn iter(&self) -> Iter<'a, T> {
        let rest = self.array.as_slice().get(self.index..).unwrap_or(&[]);
        Iter(rest.iter())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.array.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Cursors into different arrays are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.array, other.array) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.array, self.index.wrapping_add(rhs))
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self::Output {
        Self::new(self.array, self.index.wrapping_sub(rhs))
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> Self::Output {
        self.distance(&rhs)
    }
}

/// A mutable position in a [`DynamicArray`].
///
/// Like [`Cursor`], but holds the array mutably so the element under it can
/// be modified. It is therefore not `Copy`; use [`as_cursor`] for read-only
/// arithmetic and comparisons.
///
/// This struct is created by [`cursor_front_mut`], [`cursor_end_mut`] and
/// [`find_mut`].
///
/// [`as_cursor`]: CursorMut::as_cursor
/// [`cursor_front_mut`]: DynamicArray::cursor_front_mut
/// [`cursor_end_mut`]: DynamicArray::cursor_end_mut
/// [`find_mut`]: DynamicArray::find_mut
pub struct CursorMut<'a, T> {
    array: &'a mut DynamicArray<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>, index: usize) -> Self {
        debug_assert!(index <= array.len(), "cursor out of range");
        Self { array, index }
    }

    /// The index this cursor points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.index >= self.array.len()
    }

    /// Returns the element under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&T> {
        self.array.as_slice().get(self.index)
    }

    /// Returns the element under the cursor mutably, or `None` at the end.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.array.as_mut_slice().get_mut(self.index)
    }

    /// Consumes the cursor, returning the element under it for the whole
    /// lifetime of the borrow.
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self { array, index } = self;
        array.as_mut_slice().get_mut(index)
    }

    /// Advances to the next position.
    pub fn move_next(&mut self) {
        debug_assert!(self.index < self.array.len(), "cursor moved past the end");
        self.index = self.index.wrapping_add(1);
    }

    /// Steps back to the previous position.
    pub fn move_prev(&mut self) {
        debug_assert!(self.index > 0, "cursor moved before the start");
        self.index = self.index.wrapping_sub(1);
    }

    /// Moves the cursor `count` positions.
    pub fn offset(self, count: isize) -> Self {
        let index = self.index.wrapping_add_signed(count);
        Self::new(self.array, index)
    }

    /// Borrows this cursor as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            array: &*self.array,
            index: self.index,
        }
    }
}

impl<T> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.array.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::dynarray;

    #[test]
    fn walks_forward_to_end() {
        let array = dynarray![1, 2, 3];
        let mut cursor = array.cursor_front();
        let mut seen = vec![];
        while let Some(element) = cursor.get() {
            seen.push(*element);
            cursor.move_next();
        }
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(cursor, array.cursor_end());
        assert!(cursor.is_end());
    }

    #[test]
    fn walks_backward_from_end() {
        let array = dynarray!['a', 'b', 'c'];
        let mut cursor = array.cursor_end();
        let mut seen = vec![];
        while cursor != array.cursor_front() {
            cursor.move_prev();
            seen.push(*cursor.get().unwrap());
        }
        assert_eq!(seen, ['c', 'b', 'a']);
    }

    #[test]
    fn empty_array_front_is_end() {
        let array = crate::DynamicArray::<u8>::new();
        assert_eq!(array.cursor_front(), array.cursor_end());
        assert_eq!(array.cursor_front().get(), None);
    }

    #[test]
    fn arithmetic_and_distance() {
        let array = dynarray![10, 20, 30, 40];
        let front = array.cursor_front();
        let end = array.cursor_end();
        assert_eq!(end - front, 4);
        assert_eq!(front - end, -4);
        assert_eq!(front.distance(&front), 0);
        assert_eq!((front + 3).get(), Some(&40));
        assert_eq!((end - 1).get(), Some(&40));
        assert_eq!(front.offset(2).index(), 2);
        assert_eq!(end.offset(-4), front);

        let mut cursor = front;
        cursor += 2;
        assert_eq!(cursor.get(), Some(&30));
        cursor -= 1;
        assert_eq!(cursor.get(), Some(&20));
    }

    #[test]
    fn ordering_within_one_array() {
        let array = dynarray![1, 2];
        let front = array.cursor_front();
        let end = array.cursor_end();
        assert!(front < end);
        assert!(end > front + 1);
        assert!(front <= array.cursor_front());
    }

    #[test]
    fn different_arrays_are_unordered() {
        let a = dynarray![1];
        let b = dynarray![1];
        assert_ne!(a.cursor_front(), b.cursor_front());
        assert_eq!(a.cursor_front().partial_cmp(&b.cursor_front()), None);
    }

    #[test]
    fn iter_from_cursor() {
        let array = dynarray![1, 2, 3, 4];
        let rest: Vec<_> = array.find(&3).iter().copied().collect();
        assert_eq!(rest, [3, 4]);
        assert_eq!(array.cursor_end().iter().count(), 0);
    }

    #[test]
    fn find_restarts_from_front() {
        let array = dynarray![7, 8, 7];
        assert_eq!(array.find(&7).index(), 0);
        assert_eq!(array.find(&7).index(), 0);
    }

    #[test]
    fn cursor_mut_edits_in_place() {
        let mut array = dynarray![1, 2, 3];
        let mut cursor = array.cursor_front_mut();
        while let Some(element) = cursor.get_mut() {
            *element *= 10;
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert_eq!(cursor.as_cursor().index(), 3);
        assert_eq!(array, [10, 20, 30]);
    }

    #[test]
    fn cursor_mut_backward() {
        let mut array = dynarray![1, 2, 3];
        let mut cursor = array.cursor_end_mut();
        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&3));
        let cursor = cursor.offset(-2);
        assert_eq!(cursor.index(), 0);
        *cursor.into_mut().unwrap() = 0;
        assert_eq!(array, [0, 2, 3]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic = "cursor moved past the end"]
    fn moving_past_end_is_caught() {
        let array = dynarray![1];
        let mut cursor = array.cursor_end();
        cursor.move_next();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic = "cursor out of range"]
    fn offset_out_of_range_is_caught() {
        let array = dynarray![1, 2];
        let _ = array.cursor_front() + 3;
    }
}
