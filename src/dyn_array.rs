use crate::{buffer::Buffer, next_capacity, Cursor, CursorMut, Iter, IterMut, OutOfRange};
use std::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    mem,
};

/// A contiguous growable array with power-of-two capacity.
///
/// The array distinguishes its length, the number of elements that are part
/// of the sequence, from its capacity, the number of allocated slots. The
/// capacity is always zero or a power of two, and it is only ever raised:
/// removing elements keeps the allocation around for later pushes.
///
/// Every allocated slot holds an initialized `T`. Slots past the length hold
/// `T::default()` or a value that was logically removed, which is why most
/// growing operations require `T: Default`.
///
/// # Examples
///
/// ```
/// use dynarray::{DynamicArray, dynarray};
///
/// let mut array = DynamicArray::new();
/// array.push(1);
/// array.push(2);
/// array.push(3);
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 4);
///
/// array.remove(1).unwrap();
/// assert_eq!(array, dynarray![1, 3]);
/// assert_eq!(array.capacity(), 4);
/// ```
pub struct DynamicArray<T> {
    buf: Buffer<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Constructs a new, empty array.
    ///
    /// The array will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynamicArray;
    /// let array = DynamicArray::<u32>::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            buf: Buffer::dangling(),
            len: 0,
        }
    }

    /// Returns the number of elements in the array.
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    ///
    /// This is zero or a power of two, and never less than [`len`].
    ///
    /// [`len`]: DynamicArray::len
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Extracts a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.prefix(self.len)
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.prefix_mut(self.len)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_slice().iter())
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut_slice().iter_mut())
    }

    /// Returns a reference to the element at `index`, or an error if `index`
    /// is not less than the length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::{dynarray, OutOfRange};
    /// let array = dynarray![10, 20];
    /// assert_eq!(array.at(1), Ok(&20));
    /// assert_eq!(array.at(2), Err(OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`, or an error if
    /// `index` is not less than the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked index out of range");
        // SAFETY: The caller guarantees that index is within the live range
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns the first element, or `None` if the array is empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the array is empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Sets the length to zero.
    ///
    /// The allocation is kept and the slots are left as they are, so the
    /// capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges the contents of two arrays without moving any element.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out into a new array, leaving `self` empty and
    /// without an allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut a = dynarray![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns a cursor at the first element, or at the end if the array is
    /// empty.
    #[doc(alias = "begin")]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor one past the last element.
    #[doc(alias = "end")]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Returns a mutable cursor at the first element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Grows the allocation so that `len` elements fit, without changing the
    /// length.
    fn grow_to(&mut self, len: usize)
    where
        T: Default,
    {
        if len > self.capacity() {
            self.buf.realloc(next_capacity(len), self.len);
        }
    }

    pub(crate) fn into_buffer(self) -> (Buffer<T>, usize) {
        (self.buf, self.len)
    }
}

impl<T> DynamicArray<T>
where
    T: Default,
{
    /// Constructs an array of `len` default elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynamicArray;
    /// let array = DynamicArray::<u8>::with_len(5);
    /// assert_eq!(array, [0; 5]);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: Buffer::alloc(next_capacity(len)),
            len,
        }
    }

    /// Constructs an empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Buffer::alloc(next_capacity(capacity)),
            len: 0,
        }
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let required = match self.len.checked_add(additional) {
            Some(required) => required,
            None => panic!("capacity overflow"),
        };
        self.grow_to(required);
    }

    /// Appends an element to the back of the array.
    ///
    /// Reallocates to the next power of two when the array is full.
    #[doc(alias = "push_back")]
    pub fn push(&mut self, element: T) {
        self.grow_to(self.len + 1);
        self.buf.slots_mut()[self.len] = element;
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the array is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf.slots_mut()[self.len]))
        }
    }

    /// Inserts an element at `index`, shifting all elements after it to the
    /// right.
    ///
    /// Inserting at `index == len` is the same as [`push`]. Fails without
    /// modifying the array if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 3];
    /// array.insert(1, 2).unwrap();
    /// array.insert(3, 4).unwrap();
    /// assert_eq!(array, [1, 2, 3, 4]);
    /// assert!(array.insert(5, 6).is_err());
    /// ```
    ///
    /// [`push`]: DynamicArray::push
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        self.push(element);
        self.as_mut_slice()[index..].rotate_right(1);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left.
    ///
    /// The capacity is unchanged. Fails without modifying the array if
    /// `index >= len`.
    #[doc(alias = "erase")]
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check_index(index)?;
        self.as_mut_slice()[index..].rotate_left(1);
        self.len -= 1;
        Ok(mem::take(&mut self.buf.slots_mut()[self.len]))
    }

    /// Changes the length to `new_len`.
    ///
    /// Growing fills the new positions with `T::default()` and reallocates
    /// only when `new_len` exceeds the capacity. Shrinking just lowers the
    /// length; the capacity never shrinks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// array.resize(1);
    /// assert_eq!(array, [1]);
    /// array.resize(3);
    /// assert_eq!(array, [1, 0, 0]);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.len {
            self.grow_to(new_len);
            for slot in &mut self.buf.slots_mut()[self.len..new_len] {
                *slot = T::default();
            }
        }
        self.len = new_len;
    }

    /// Overwrites every element with `T::default()`, keeping the length.
    pub fn reset(&mut self) {
        for element in self.as_mut_slice() {
            *element = T::default();
        }
    }
}

impl<T> DynamicArray<T>
where
    T: Clone + Default,
{
    /// Constructs an array of `len` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynamicArray;
    /// let array = DynamicArray::filled(3, 'x');
    /// assert_eq!(array, ['x', 'x', 'x']);
    /// ```
    pub fn filled(len: usize, value: T) -> Self {
        let mut out = Self::with_len(len);
        out.reset_with(value);
        out
    }
}

impl<T> DynamicArray<T>
where
    T: Clone,
{
    /// Returns a copy of the element at `index`.
    ///
    /// This is the unwrapped counterpart to [`at`] for callers that have
    /// already validated the index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// [`at`]: DynamicArray::at
    pub fn get(&self, index: usize) -> T {
        self.as_slice()[index].clone()
    }

    /// Overwrites every element with a copy of `value`, keeping the length.
    pub fn reset_with(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T> DynamicArray<T>
where
    T: PartialEq,
{
    /// Returns a cursor at the first element equal to `value`, or at the end
    /// if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let array = dynarray![1, 9, 3];
    /// assert_eq!(array.find(&9).index(), 1);
    /// assert!(array.find(&4).is_end());
    /// ```
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        let index = self.position(value).unwrap_or(self.len);
        Cursor::new(self, index)
    }

    /// Returns a mutable cursor at the first element equal to `value`, or at
    /// the end if there is none.
    pub fn find_mut(&mut self, value: &T) -> CursorMut<'_, T> {
        let index = self.position(value).unwrap_or(self.len);
        CursorMut::new(self, index)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Returns true if the array contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DynamicArray<T>
where
    T: Clone + Default,
{
    /// The clone is sized for the live elements only, so its capacity may be
    /// smaller than the source array's.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.buf.prefix_mut(self.len).clone_from_slice(self.as_slice());
        out.len = self.len;
        out
    }

    /// Reuses the existing allocation when `source` fits in it.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            debug!(
                "clone_from: {} elements exceed capacity {}, reallocating",
                source.len,
                self.capacity()
            );
            *self = source.clone();
        } else {
            self.len = source.len;
            self.as_mut_slice().clone_from_slice(source.as_slice());
        }
    }
}

impl<T> Debug for DynamicArray<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> PartialOrd for DynamicArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynamicArray<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynamicArray<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T>
where
    T: Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T> Extend<&'a T> for DynamicArray<T>
where
    T: 'a + Copy + Default,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynamicArray<T>
where
    T: Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T>
where
    T: Default,
{
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<&[T]> for DynamicArray<T>
where
    T: Clone + Default,
{
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T>
where
    T: Default,
{
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(value: DynamicArray<T>) -> Self {
        let (buf, len) = value.into_buffer();
        let mut out = buf.into_vec();
        out.truncate(len);
        out
    }
}
