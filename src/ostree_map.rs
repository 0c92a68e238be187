use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec;

use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::raw::{Handle, OwnerId, RawOSTree, Side};

mod capacity;
mod cursor;
mod order_statistic;

pub use cursor::{Cursor, Position};

/// An ordered map backed by an order-statistic red-black tree.
///
/// Keys are unique and ordered by the comparator `C`, which defaults to the
/// keys' [`Ord`] implementation (see [`Compare`]). Lookups, inserts and
/// removals are O(log n). Every node also tracks the size of its subtree, so
/// [`rank`](OSTreeMap::rank) and [`kth`](OSTreeMap::kth) are O(log n) as well.
///
/// Traversal follows parent and child links: stepping a [`Position`] is
/// O(log n) worst case and amortized O(1), and a full pass is O(n).
///
/// Inserting an existing key keeps the stored value; use
/// [`get_mut`](OSTreeMap::get_mut) or
/// [`get_or_insert_default`](OSTreeMap::get_or_insert_default) to update.
///
/// Cloning copies the tree node for node into a map with its own identity.
/// Equality is identity: a map equals itself and nothing else, not even its
/// clone.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to other keys changes while it is in the map.
///
/// # Examples
///
/// ```
/// use sentinel_collections::OSTreeMap;
///
/// let mut map = OSTreeMap::new();
/// for key in [5, 3, 8, 1, 4] {
///     map.insert(key, key * 10);
/// }
///
/// assert_eq!(map.get_at(map.begin()), Ok((&1, &10)));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
/// assert_eq!(map.count(&3), 1);
/// assert_eq!(map.count(&9), 0);
///
/// map.erase(map.find(&3))?;
/// assert_eq!(map.find(&3), map.end());
/// # Ok::<(), sentinel_collections::Error>(())
/// ```
pub struct OSTreeMap<K, V, C = Natural> {
    raw: RawOSTree<K, V, C>,
    owner: OwnerId,
}

/// An iterator over the entries of an `OSTreeMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OSTreeMap`].
///
/// [`iter`]: OSTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C = Natural> {
    tree: &'a RawOSTree<K, V, C>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// A mutable iterator over the entries of an `OSTreeMap`, in key order.
///
/// This `struct` is created by the [`iter_mut`] method on [`OSTreeMap`].
///
/// [`iter_mut`]: OSTreeMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: vec::IntoIter<(&'a K, &'a mut V)>,
}

/// An owning iterator over the entries of an `OSTreeMap`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`OSTreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OSTreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`OSTreeMap`].
///
/// [`keys`]: OSTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `OSTreeMap`.
///
/// This `struct` is created by the [`values`] method on [`OSTreeMap`].
///
/// [`values`]: OSTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

impl<K, V> OSTreeMap<K, V> {
    /// Makes a new, empty `OSTreeMap` ordered by [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let mut map = OSTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OSTreeMap::with_comparator(Natural)
    }
}

impl<K, V, C> OSTreeMap<K, V, C> {
    /// Makes a new, empty `OSTreeMap` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let mut map = OSTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        OSTreeMap {
            raw: RawOSTree::new(compare),
            owner: OwnerId::fresh(),
        }
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry. Previously obtained positions become stale.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    const fn position(&self, node: Option<Handle>) -> Position {
        Position { node, owner: self.owner }
    }

    /// Checks that `position` was issued by this map and, unless it is the
    /// end position, still names a live node.
    fn resolve(&self, position: Position, op: &'static str) -> Result<Option<Handle>> {
        if position.owner != self.owner {
            return Err(Error::InvalidIterator.raised_by(op));
        }
        match position.node {
            Some(node) if !self.raw.contains(node) => Err(Error::InvalidIterator.raised_by(op)),
            node => Ok(node),
        }
    }

    /// Like [`resolve`](Self::resolve), but also rejects the end position.
    fn resolve_entry(&self, position: Position, op: &'static str) -> Result<Handle> {
        self.resolve(position, op)?.ok_or_else(|| Error::InvalidIterator.raised_by(op))
    }

    /// Position of the smallest key, or [`end`](OSTreeMap::end) if empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn begin(&self) -> Position {
        self.kth(1)
    }

    /// The end position, one past the largest key.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.position(None)
    }

    /// Returns a read-only cursor at `position`. The position is checked when
    /// the cursor is used, not here.
    pub const fn cursor(&self, position: Position) -> Cursor<'_, K, V, C> {
        Cursor::new(self, position)
    }

    /// The position of the in-order successor of `position`; the successor of
    /// the largest key is [`end`](OSTreeMap::end).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] at the end position, or if `position` is
    /// foreign or stale.
    pub fn next(&self, position: Position) -> Result<Position> {
        let node = self.resolve_entry(position, "next")?;
        Ok(self.position(self.raw.neighbour(node, Side::Right)))
    }

    /// The position of the in-order predecessor of `position`. Stepping back
    /// from [`end`](OSTreeMap::end) reaches the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] at the smallest key, at the end position of
    /// an empty map, or if `position` is foreign or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, OSTreeMap};
    ///
    /// let map = OSTreeMap::from([(1, 'a'), (2, 'b')]);
    /// let last = map.prev(map.end())?;
    /// assert_eq!(map.get_at(last), Ok((&2, &'b')));
    /// assert_eq!(map.prev(map.begin()), Err(Error::InvalidIterator));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn prev(&self, position: Position) -> Result<Position> {
        let previous = match self.resolve(position, "prev")? {
            Some(node) => self.raw.neighbour(node, Side::Left),
            None => self.raw.last(),
        };
        previous
            .map(|node| self.position(Some(node)))
            .ok_or_else(|| Error::InvalidIterator.raised_by("prev"))
    }

    /// Dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] at the end position, or if `position` is
    /// foreign or stale.
    pub fn get_at(&self, position: Position) -> Result<(&K, &V)> {
        let node = self.resolve_entry(position, "get_at")?;
        Ok(self.raw.entry(node))
    }

    /// Mutable counterpart of [`get_at`](OSTreeMap::get_at). The key stays
    /// read-only.
    pub fn get_at_mut(&mut self, position: Position) -> Result<(&K, &mut V)> {
        let node = self.resolve_entry(position, "get_at_mut")?;
        Ok(self.raw.entry_mut(node))
    }

    /// Removes the entry at `position` and returns it.
    ///
    /// Positions at other entries stay valid, except the position of the
    /// removed entry's in-order successor when the removed node had two
    /// children (see [`Position`]).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] at the end position, or if `position` is
    /// foreign or stale. Nothing is removed.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn erase(&mut self, position: Position) -> Result<(K, V)> {
        let node = self.resolve_entry(position, "erase")?;
        Ok(self.raw.erase(node))
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|node| self.raw.entry(node))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|node| self.raw.entry(node))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&1, &"a")));
    /// assert_eq!(iter.next_back(), Some((&3, &"c")));
    /// assert_eq!(iter.len(), 1);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let mut map = OSTreeMap::from([(1, 10), (2, 20)]);
    /// for (_, value) in map.iter_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [11, 21]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.raw.entries_mut().into_iter(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }
}

impl<K, V, C: Compare<K>> OSTreeMap<K, V, C> {
    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBound`] if the key is absent. The map is never
    /// modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, OSTreeMap};
    ///
    /// let map = OSTreeMap::from([("a", 1)]);
    /// assert_eq!(map.at(&"a"), Ok(&1));
    /// assert_eq!(map.at(&"b"), Err(Error::IndexOutOfBound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or_else(|| Error::IndexOutOfBound.raised_by("at"))
    }

    /// Mutable counterpart of [`at`](OSTreeMap::at).
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.raw.find(key) {
            Some(node) => Ok(self.raw.entry_mut(node).1),
            None => Err(Error::IndexOutOfBound.raised_by("at_mut")),
        }
    }

    /// Returns a reference to the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.find(key).map(|node| self.raw.entry(node).1)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.raw.find(key)?;
        Some(self.raw.entry_mut(node).1)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.find(key).is_some()
    }

    /// Number of entries stored under `key`: 0 or 1.
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Position of `key`, or [`end`](OSTreeMap::end) if it is absent.
    #[must_use]
    pub fn find(&self, key: &K) -> Position {
        self.position(self.raw.find(key))
    }

    /// Inserts `key` with `value` unless the key is already present.
    ///
    /// Returns the position of the entry stored under `key` and whether it
    /// was newly inserted. An existing entry is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let mut map = OSTreeMap::new();
    /// let (first, inserted) = map.insert(37, "a");
    /// assert!(inserted);
    ///
    /// let (again, inserted) = map.insert(37, "b");
    /// assert!(!inserted);
    /// assert_eq!(again, first);
    /// assert_eq!(map.get_at(again), Ok((&37, &"a")));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        let (node, inserted) = self.raw.insert(key, value);
        (self.position(Some(node)), inserted)
    }

    /// Returns the value stored under `key`, inserting `V::default()` first
    /// if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let mut counts: OSTreeMap<char, u32> = OSTreeMap::new();
    /// for c in "hello".chars() {
    ///     *counts.get_or_insert_default(c) += 1;
    /// }
    /// assert_eq!(counts.at(&'l'), Ok(&2));
    /// assert_eq!(counts.len(), 4);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let node = match self.raw.find(&key) {
            Some(node) => node,
            None => self.raw.insert(key, V::default()).0,
        };
        self.raw.entry_mut(node).1
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove(key).map(|(_, value)| value)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OSTreeMap<K, V, C> {
    fn clone(&self) -> Self {
        OSTreeMap {
            raw: self.raw.clone(),
            owner: OwnerId::fresh(),
        }
    }

    /// Replaces the contents with a copy of `source`, keeping this map's
    /// identity.
    fn clone_from(&mut self, source: &Self) {
        self.raw = source.raw.clone();
    }
}

/// Identity comparison: `true` only for the same instance.
impl<K, V, C> PartialEq for OSTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl<K, V, C> Eq for OSTreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OSTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for OSTreeMap<K, V, C> {
    fn default() -> Self {
        OSTreeMap::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for OSTreeMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OSTreeMap::default();
        map.extend(iter);
        map
    }
}

/// Inserts each pair; pairs whose key is already present are dropped.
impl<K, V, C: Compare<K>> Extend<(K, V)> for OSTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Compare<K>> Extend<(&'a K, &'a V)> for OSTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OSTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

/// Looks up `key` like [`at`](OSTreeMap::at).
///
/// # Panics
///
/// Panics if the key is not present in the map.
impl<K, V, C: Compare<K>> Index<&K> for OSTreeMap<K, V, C> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a OSTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut OSTreeMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, C> IntoIterator for OSTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.front?;
        let tree = self.tree;
        self.front = tree.neighbour(node, Side::Right);
        self.remaining -= 1;
        Some(tree.entry(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.back?;
        let tree = self.tree;
        self.back = tree.neighbour(node, Side::Left);
        self.remaining -= 1;
        Some(tree.entry(node))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for Keys<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, C> fmt::Debug for Values<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
