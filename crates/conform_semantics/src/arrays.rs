//! Array allocation, default values and bounds.

use conform_core::{CaseError, Registry, RegistryError, check, check_eq, check_err};
use thiserror::Error;

use crate::Group;

pub const GROUP: &str = "arrays";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("array index {index} out of bounds for length {length}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub length: usize,
}

/// Fixed-size, zero-initialised integer array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTest {
    pub array: Vec<i32>,
}

impl ArrayTest {
    pub fn new(size: usize) -> Self {
        Self { array: vec![0; size] }
    }

    pub fn get(&self, index: usize) -> Result<i32, IndexOutOfBounds> {
        self.array.get(index).copied().ok_or(IndexOutOfBounds {
            index,
            length: self.array.len(),
        })
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        let length = self.array.len();
        let slot = self.array.get_mut(index).ok_or(IndexOutOfBounds { index, length })?;
        *slot = value;
        Ok(())
    }
}

/// Rectangular two-dimensional array allocated from a list of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiArrayTest {
    pub multi_array: Vec<Vec<i32>>,
}

impl MultiArrayTest {
    pub fn new(sizes: [usize; 2]) -> Self {
        Self {
            multi_array: vec![vec![0; sizes[1]]; sizes[0]],
        }
    }

    pub fn get(&self, outer: usize, inner: usize) -> Result<i32, IndexOutOfBounds> {
        let row = self.multi_array.get(outer).ok_or(IndexOutOfBounds {
            index: outer,
            length: self.multi_array.len(),
        })?;
        row.get(inner).copied().ok_or(IndexOutOfBounds {
            index: inner,
            length: row.len(),
        })
    }
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("allocation_length", || check_eq(ArrayTest::new(10).array.len(), 10))?
        .case("zero_initialised", || {
            check(ArrayTest::new(10).array.iter().all(|&v| v == 0), "all elements are 0")
        })?
        .case("element_writes", || {
            let mut test = ArrayTest::new(10);
            for i in 0..test.array.len() {
                test.set(i, i as i32 + 10).map_err(CaseError::crash)?;
            }
            let read = (0..10)
                .map(|j| test.get(j))
                .collect::<Result<Vec<_>, _>>()
                .map_err(CaseError::crash)?;
            check_eq(read, (10..20).collect())
        })?
        .case("out_of_bounds_is_an_error", || {
            let err = check_err(ArrayTest::new(10).get(10), "get(10)")?;
            check_eq(err, IndexOutOfBounds { index: 10, length: 10 })
        })?
        .case("multi_dimensional_lengths", || {
            let test = MultiArrayTest::new([4, 7]);
            check_eq((test.multi_array.len(), test.multi_array[0].len()), (4, 7))
        })?
        .case("multi_dimensional_default", || {
            check_eq(MultiArrayTest::new([4, 7]).get(3, 6), Ok(0))
        })?
        .case("multi_dimensional_write", || {
            let mut test = MultiArrayTest::new([4, 7]);
            test.multi_array[3][6] = 36;
            check_eq(test.get(3, 6), Ok(36))
        })?
        .case("rows_are_distinct", || {
            let mut test = MultiArrayTest::new([4, 7]);
            test.multi_array[0][0] = 1;
            check_eq(test.get(1, 0), Ok(0))
        })?;
    Ok(())
}
