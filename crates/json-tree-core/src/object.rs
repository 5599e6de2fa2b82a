//! Ordered JSON object container: key/value members with linear-scan lookup.

use crate::value::Value;

/// A key/value entry inside an [`Object`].
///
/// Keys are raw bytes with explicit length, like string payloads.
#[derive(Debug, Clone)]
pub struct Member {
    key: Vec<u8>,
    value: Value,
}

impl Member {
    pub(crate) fn new(key: Vec<u8>, value: Value) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Key as `&str`, when it happens to be valid UTF-8.
    pub fn key_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.key).ok()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}

/// Ordered sequence of [`Member`]s.
///
/// Insertion order is preserved and duplicate keys are representable: the
/// decoder appends members as they appear in the text, and only
/// [`set`](Object::set) deduplicates. Lookup is a linear first-match scan
/// over (length, bytes) pairs; there is no hashing. Capacity discipline and
/// growth policy match [`Array`](crate::Array).
#[derive(Debug, Clone, Default)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    /// Empty object with no backing storage.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Empty object with backing storage for exactly `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    pub fn member(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    /// Key of the member at `index`. Panics out of range.
    pub fn key(&self, index: usize) -> &[u8] {
        &self.members[index].key
    }

    /// Value of the member at `index`. Panics out of range.
    pub fn value(&self, index: usize) -> &Value {
        &self.members[index].value
    }

    /// Mutable value of the member at `index`. Panics out of range.
    pub fn value_mut(&mut self, index: usize) -> &mut Value {
        &mut self.members[index].value
    }

    /// Index of the first member whose key equals `key` byte for byte.
    pub fn find(&self, key: &[u8]) -> Option<usize> {
        self.members.iter().position(|m| m.key == key)
    }

    /// Value of the first member with the given key.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.find(key).map(|i| &self.members[i].value)
    }

    /// Mutable value of the first member with the given key.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        match self.find(key) {
            Some(i) => Some(&mut self.members[i].value),
            None => None,
        }
    }

    /// Returns the value slot for `key`, appending a new `Null` member with a
    /// duplicated key when no member matches. An existing member's slot is
    /// returned as-is; no duplicate is inserted.
    pub fn set(&mut self, key: &[u8]) -> &mut Value {
        if let Some(i) = self.find(key) {
            return &mut self.members[i].value;
        }
        self.grow_if_full();
        self.members.push(Member::new(key.to_vec(), Value::Null));
        let index = self.members.len() - 1;
        &mut self.members[index].value
    }

    /// Appends a member without deduplication. The decoder uses this to
    /// preserve duplicate keys exactly as they appear in the input.
    pub(crate) fn push_member(&mut self, key: Vec<u8>, value: Value) {
        self.grow_if_full();
        self.members.push(Member::new(key, value));
    }

    /// Drops the member at `index` (key and value) and shifts the remainder
    /// left.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len`.
    pub fn remove(&mut self, index: usize) {
        assert!(
            index < self.members.len(),
            "remove index {index} out of bounds (len {})",
            self.members.len()
        );
        self.members.remove(index);
    }

    /// Grows the backing storage to hold at least `capacity` members.
    /// No-op when the current capacity is already sufficient.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.members.capacity() {
            self.members.reserve_exact(capacity - self.members.len());
        }
    }

    /// Trims the backing storage down to exactly the current size.
    pub fn shrink_to_fit(&mut self) {
        self.members.shrink_to_fit();
    }

    /// Drops every member; the backing storage is kept.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Member> {
        self.members.iter_mut()
    }

    fn grow_if_full(&mut self) {
        if self.members.len() == self.members.capacity() {
            let capacity = self.members.capacity();
            self.reserve(if capacity == 0 { 1 } else { capacity * 2 });
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
