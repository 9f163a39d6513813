use dynarray::{DynamicArray, OutOfRange, next_capacity};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn with_len_has_smallest_power_of_two_capacity(len: u16) -> bool {
    let len = len as usize;
    let array = DynamicArray::<u8>::with_len(len);
    let capacity = array.capacity();
    array.len() == len
        && capacity == next_capacity(len)
        && capacity >= len
        && (capacity == 0) == (len == 0)
        && (capacity == 0 || capacity.is_power_of_two())
}

#[quickcheck]
fn push_matches_vec(values: Vec<i32>) -> bool {
    let mut array = DynamicArray::new();
    for &value in &values {
        array.push(value);
    }
    array == values && array.capacity() == next_capacity(values.len())
}

#[quickcheck]
fn insert_matches_vec(values: Vec<i32>, index: usize, value: i32) -> bool {
    let index = index % (values.len() + 1);
    let mut array = DynamicArray::from(values.clone());
    let mut expected = values;
    array.insert(index, value).unwrap();
    expected.insert(index, value);
    array == expected
}

#[quickcheck]
fn remove_matches_vec(values: Vec<i32>, index: usize) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let index = index % values.len();
    let mut array = DynamicArray::from(values.clone());
    let mut expected = values;
    let capacity = array.capacity();
    let removed = array.remove(index);
    TestResult::from_bool(
        removed == Ok(expected.remove(index))
            && array == expected
            && array.capacity() == capacity,
    )
}

#[quickcheck]
fn insert_then_remove_restores_sequence(values: Vec<i32>, index: usize, value: i32) -> bool {
    let index = index % (values.len() + 1);
    let mut array = DynamicArray::from(values.clone());
    array.insert(index, value).unwrap();
    let removed = array.remove(index);
    removed == Ok(value) && array == values
}

#[quickcheck]
fn reset_is_idempotent(values: Vec<i32>) -> bool {
    let mut once = DynamicArray::from(values.clone());
    once.reset();
    let mut twice = once.clone();
    twice.reset();
    once == twice && once.len() == values.len() && once.iter().all(|&x| x == 0)
}

#[quickcheck]
fn equality_ignores_capacity(values: Vec<i32>, extra: u8) -> bool {
    let mut roomy = DynamicArray::with_capacity(values.len() + extra as usize);
    roomy.extend(values.iter().copied());
    let tight: DynamicArray<_> = values.into_iter().collect();
    roomy == tight && tight == roomy && roomy == roomy.clone()
}

#[quickcheck]
fn copy_is_independent(values: Vec<i32>, value: i32) -> bool {
    let a = DynamicArray::from(values.clone());
    let mut b = a.clone();
    b.push(value);
    b.reset_with(value);
    a == values && b.len() == values.len() + 1
}

#[quickcheck]
fn take_leaves_source_empty(values: Vec<i32>) -> bool {
    let mut a = DynamicArray::from(values.clone());
    let b = a.take();
    a.is_empty() && a.capacity() == 0 && b == values
}

#[quickcheck]
fn bounds_are_checked_at_len(values: Vec<i32>, value: i32) -> bool {
    let mut array = DynamicArray::from(values.clone());
    let len = array.len();
    let error = OutOfRange { index: len, len };
    let mut pushed = array.clone();
    pushed.push(value);
    array.at(len) == Err(error)
        && array.remove(len) == Err(error)
        && array.insert(len, value).is_ok()
        && array == pushed
}

#[quickcheck]
fn find_returns_first_match(values: Vec<u8>, needle: u8) -> bool {
    let array = DynamicArray::from(values.clone());
    let cursor = array.find(&needle);
    match values.iter().position(|&x| x == needle) {
        Some(index) => cursor.index() == index && cursor.get() == Some(&needle),
        None => cursor.is_end() && cursor == array.cursor_end(),
    }
}

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    Resize(u8),
    Clear,
    Reset,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 7 {
            0 => Op::Push(i32::arbitrary(g)),
            1 => Op::Pop,
            2 => Op::Insert(usize::arbitrary(g), i32::arbitrary(g)),
            3 => Op::Remove(usize::arbitrary(g)),
            4 => Op::Resize(u8::arbitrary(g)),
            5 => Op::Clear,
            _ => Op::Reset,
        }
    }
}

#[quickcheck]
fn behaves_like_vec(ops: Vec<Op>) -> bool {
    let mut array = DynamicArray::new();
    let mut expected = Vec::new();
    let mut max_len = 0;

    for op in ops {
        match op {
            Op::Push(value) => {
                array.push(value);
                expected.push(value);
            }
            Op::Pop => {
                if array.pop() != expected.pop() {
                    return false;
                }
            }
            Op::Insert(index, value) => {
                let result = array.insert(index, value);
                if index <= expected.len() {
                    expected.insert(index, value);
                    if result.is_err() {
                        return false;
                    }
                } else if result.is_ok() {
                    return false;
                }
            }
            Op::Remove(index) => {
                let result = array.remove(index);
                if index < expected.len() {
                    if result != Ok(expected.remove(index)) {
                        return false;
                    }
                } else if result.is_ok() {
                    return false;
                }
            }
            Op::Resize(len) => {
                array.resize(len as usize);
                expected.resize(len as usize, 0);
            }
            Op::Clear => {
                array.clear();
                expected.clear();
            }
            Op::Reset => {
                array.reset();
                expected.fill(0);
            }
        }

        max_len = max_len.max(expected.len());
        if array != expected || array.capacity() != next_capacity(max_len) {
            return false;
        }
    }
    true
}
