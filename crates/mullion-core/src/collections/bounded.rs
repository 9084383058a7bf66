//! Capacity-bounded ordered collection.
//!
//! [`BoundedVec`] behaves like a `Vec` with a hard upper limit on its length.
//! Pushing past the limit is a reported failure that hands the rejected
//! element back, never a silent drop.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Default capacity for containers constructed with [`BoundedVec::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Error returned when a push would exceed the container's capacity.
///
/// Carries the rejected element so the caller can recover it.
pub struct CapacityError<T> {
    element: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    /// Consume the error and get back the element that was rejected.
    pub fn into_element(self) -> T {
        self.element
    }

    /// The capacity of the container that rejected the element.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is full (capacity {})", self.capacity)
    }
}

impl<T> std::error::Error for CapacityError<T> {}

/// An ordered collection with a fixed maximum capacity.
///
/// Invariant: `len() <= capacity()` at all times. Elements are exclusively
/// owned; moving the container moves the elements without copying.
///
/// # Example
///
/// ```
/// use mullion_core::collections::BoundedVec;
///
/// let mut v = BoundedVec::with_capacity(2);
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// assert!(v.push(3).is_err());
/// assert_eq!(v.items(), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedVec<T> {
    /// Create an empty container with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty container with the given capacity.
    ///
    /// A capacity of 0 is legal; every push will fail.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Append an element at the end.
    ///
    /// Fails with [`CapacityError`] when the container is full; the error
    /// carries the rejected element and the container is left unchanged.
    pub fn push(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.items.len() < self.capacity {
            self.items.push(item);
            Ok(())
        } else {
            Err(CapacityError {
                element: item,
                capacity: self.capacity,
            })
        }
    }

    /// Read-only view of the elements in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Checked indexed access. Out of range returns `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Checked mutable indexed access. Out of range returns `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The maximum number of elements this container may hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many more elements fit before the container is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Remove all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for BoundedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics on out-of-range access, like std containers. Use
/// [`BoundedVec::get`] for the checked form.
impl<T> Index<usize> for BoundedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for BoundedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> IntoIterator for BoundedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
