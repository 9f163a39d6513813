//! A growable array with power-of-two capacity, checked mutation and
//! index-based cursors.
//!
//! [`DynamicArray`] keeps its length separate from its capacity. The capacity
//! is always zero or a power of two and is only ever raised, so a run of
//! [`push`] calls costs amortized O(1) per element and removing elements never
//! gives memory back. All allocated slots hold initialized values, which is
//! why growth requires `T: Default`.
//!
//! ```
//! use dynarray::{DynamicArray, dynarray};
//!
//! let mut array = DynamicArray::new();
//! for i in 1..=3 {
//!     array.push(i);
//! }
//! assert_eq!(array, [1, 2, 3]);
//! assert_eq!(array.capacity(), 4);
//!
//! array.remove(1).unwrap();
//! array.insert(1, 9).unwrap();
//! assert_eq!(array, dynarray![1, 9, 3]);
//! assert_eq!(array.find(&9).index(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` as a plain sequence.
//! - `logging`: reallocation events through the `log` crate.
//!
//! [`push`]: DynamicArray::push

#[macro_use]
mod logging;

mod buffer;
mod capacity;
mod cursor;
mod dyn_array;
mod eq_impl;
mod error;
mod index;
mod into_iter;
mod iter;
mod iter_mut;
mod macros;

#[cfg(feature = "serde")]
mod serde;

pub use capacity::next_capacity;
pub use cursor::{Cursor, CursorMut};
pub use dyn_array::DynamicArray;
pub use error::OutOfRange;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
