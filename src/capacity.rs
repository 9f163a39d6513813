/// Returns the number of slots to allocate so that `len` elements fit.
///
/// This is the smallest power of two greater than or equal to `len`, or zero
/// when `len` is zero. Growing through this function doubles the capacity at
/// each reallocation, which keeps repeated [`push`] amortized O(1).
///
/// # Panics
///
/// Panics if the next power of two does not fit in a `usize`.
///
/// # Examples
///
/// ```
/// use dynarray::next_capacity;
/// assert_eq!(next_capacity(0), 0);
/// assert_eq!(next_capacity(1), 1);
/// assert_eq!(next_capacity(3), 4);
/// assert_eq!(next_capacity(64), 64);
/// assert_eq!(next_capacity(65), 128);
/// ```
///
/// [`push`]: crate::DynamicArray::push
#[inline]
pub const fn next_capacity(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match len.checked_next_power_of_two() {
        Some(capacity) => capacity,
        None => panic!("capacity overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::next_capacity;

    #[test]
    fn zero_stays_zero() {
        assert_eq!(next_capacity(0), 0);
    }

    #[test]
    fn powers_of_two_are_fixed_points() {
        for shift in 0..usize::BITS {
            let n = 1usize << shift;
            assert_eq!(next_capacity(n), n);
        }
    }

    #[test]
    fn rounds_up_between_powers() {
        assert_eq!(next_capacity(3), 4);
        assert_eq!(next_capacity(5), 8);
        assert_eq!(next_capacity(1000), 1024);
        assert_eq!(next_capacity(1025), 2048);
    }

    #[test]
    fn smallest_power_not_below_len() {
        for n in 1..4096usize {
            let cap = next_capacity(n);
            assert!(cap.is_power_of_two());
            assert!(cap >= n);
            assert!(cap / 2 < n, "{cap} is not the smallest for {n}");
        }
    }

    #[test]
    #[should_panic = "capacity overflow"]
    fn overflow_panics() {
        next_capacity(usize::MAX);
    }
}
