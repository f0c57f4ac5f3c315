use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable handle of a body inside a [`crate::System`].
///
/// Ids are never reused within one arena, so a stale id can only miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(u32);

impl BodyId {
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    pub fn into_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arena<T> {
    inner: BTreeMap<BodyId, T>,
    next_id: u32,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, x: T) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.inner.insert(id, x);
        id
    }

    pub fn remove(&mut self, id: BodyId) -> Option<T> {
        self.inner.remove(&id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn get(&self, id: BodyId) -> Option<&T> {
        self.inner.get(&id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut T> {
        self.inner.get_mut(&id)
    }

    /// Iterates in id order, which is also insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &T)> {
        self.inner.iter().map(|(i, v)| (*i, v))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused() {
        let mut arena = Arena::new();
        let a = arena.push("a");
        arena.remove(a);
        let b = arena.push("b");

        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 1);
    }
}
