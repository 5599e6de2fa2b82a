//! Ordered JSON array container with explicit capacity discipline.

use std::ops::{Index, IndexMut};

use crate::value::Value;

/// Ordered sequence of [`Value`]s.
///
/// Unlike a plain `Vec`, growth is explicit: `size <= capacity` always holds,
/// capacity 0 means no backing storage, [`reserve`](Array::reserve) only ever
/// grows, and [`push`](Array::push)/[`insert`](Array::insert) double the
/// capacity (or set it to 1 from 0) when full. The decoder trims arrays to
/// `capacity == size` when it closes them.
#[derive(Debug, Clone, Default)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Empty array with no backing storage.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Empty array with backing storage for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Grows the backing storage to hold at least `capacity` elements.
    /// No-op when the current capacity is already sufficient.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - self.items.len());
        }
    }

    /// Trims the backing storage down to exactly the current size.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Appends a fresh `Null` slot and returns a borrow to it, doubling the
    /// capacity (1 from 0) when full.
    pub fn push(&mut self) -> &mut Value {
        self.grow_if_full();
        let index = self.items.len();
        self.items.push(Value::Null);
        &mut self.items[index]
    }

    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics when the array is empty.
    pub fn pop(&mut self) {
        assert!(!self.items.is_empty(), "pop from empty array");
        self.items.pop();
    }

    /// Shifts elements at and after `index` one slot right and installs a
    /// fresh `Null` in the vacated slot, returning a borrow to it. Grows with
    /// the same doubling policy as [`push`](Array::push).
    ///
    /// # Panics
    ///
    /// Panics when `index > len`.
    pub fn insert(&mut self, index: usize) -> &mut Value {
        self.grow_if_full();
        self.items.insert(index, Value::Null);
        &mut self.items[index]
    }

    /// Drops `count` elements starting at `index` and shifts the remainder
    /// left.
    ///
    /// # Panics
    ///
    /// Panics when `index + count > len`.
    pub fn erase(&mut self, index: usize, count: usize) {
        assert!(
            index + count <= self.items.len(),
            "erase range {index}..{} out of bounds (len {})",
            index + count,
            self.items.len()
        );
        self.items.drain(index..index + count);
    }

    /// Drops every element; the backing storage is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let capacity = self.items.capacity();
            self.reserve(if capacity == 0 { 1 } else { capacity * 2 });
        }
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
