use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The error returned by bounds-checked operations on [`DynamicArray`].
///
/// The operation that produced it did not modify the array.
///
/// [`DynamicArray`]: crate::DynamicArray
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OutOfRange {
    /// The index that was passed in.
    pub index: usize,
    /// The length of the array at the time of the call.
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl Error for OutOfRange {}
