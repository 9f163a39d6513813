/// Creates a [`DynamicArray`] containing the arguments.
///
/// `dynarray!` allows a `DynamicArray` to be defined with the same syntax as
/// array expressions, the same way `vec!` does for `Vec`. The capacity is the
/// smallest power of two that fits the elements.
///
/// - Create a [`DynamicArray`] containing a given list of elements:
///
/// ```
/// # use dynarray::dynarray;
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 4);
/// ```
///
/// - Create a [`DynamicArray`] from a given element and size:
///
/// ```
/// # use dynarray::dynarray;
/// let array = dynarray![1; 3];
/// assert_eq!(array, [1, 1, 1]);
/// ```
///
/// [`DynamicArray`]: crate::DynamicArray
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };

    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::filled($n, $elem)
    };

    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;

    #[test]
    fn empty() {
        let array: DynamicArray<u8> = dynarray![];
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn list_with_trailing_comma() {
        let array = dynarray!["a", "b", "c", "d", "e",];
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array[4], "e");
    }

    #[test]
    fn repeated() {
        let array = dynarray![String::from("x"); 2];
        assert_eq!(array, [String::from("x"), String::from("x")]);
        let none: DynamicArray<u8> = dynarray![7; 0];
        assert_eq!(none.capacity(), 0);
    }

    #[test]
    fn same_contents_same_array() {
        let listed = dynarray![1, 2, 3];
        let mut rebuilt = DynamicArray::filled(3, 0);
        rebuilt[0] = 1;
        rebuilt[1] = 2;
        rebuilt[2] = 3;
        assert_eq!(listed, rebuilt);
    }
}
