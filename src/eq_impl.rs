use crate::DynamicArray;

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T $(,$($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq,
        {
            fn eq(&self, other: &$u) -> bool {
                let me: &[T] = self.as_ref();
                let other: &[T] = other.as_ref();
                me == other
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        uni!($t, $u $(, $($b)+)?);

        impl<T $(,$($b)+)?> PartialEq<$t> for $u
        where
            T: PartialEq,
        {
            fn eq(&self, other: &$t) -> bool {
                let me: &[T] = self.as_ref();
                let other: &[T] = other.as_ref();
                me == other
            }
        }
    };
}

bi!(DynamicArray<T>, Vec<T>);
bi!(DynamicArray<T>, [T]);
bi!(DynamicArray<T>, &[T]);
bi!(DynamicArray<T>, &mut [T]);
bi!(DynamicArray<T>, [T; N], const N: usize);
bi!(DynamicArray<T>, &[T; N], const N: usize);
