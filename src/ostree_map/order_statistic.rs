use super::{OSTreeMap, Position};
use crate::compare::Compare;

impl<K, V, C> OSTreeMap<K, V, C> {
    /// Returns the position of the entry with 1-indexed rank `k` in key order,
    /// or [`end`](OSTreeMap::end) if `k` is zero or greater than `len()`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([(30, 'c'), (10, 'a'), (20, 'b')]);
    ///
    /// assert_eq!(map.get_at(map.kth(2)), Ok((&20, &'b')));
    /// assert_eq!(map.kth(1), map.begin());
    /// assert_eq!(map.kth(4), map.end());
    /// ```
    #[must_use]
    pub fn kth(&self, k: usize) -> Position {
        self.position(self.raw.kth(k))
    }
}

impl<K, V, C: Compare<K>> OSTreeMap<K, V, C> {
    /// Returns the 1-indexed rank of `key` in key order, or `None` if the key
    /// is not present.
    ///
    /// `rank` and [`kth`](OSTreeMap::kth) are inverses over present keys.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([(30, 'c'), (10, 'a'), (20, 'b')]);
    ///
    /// assert_eq!(map.rank(&10), Some(1));
    /// assert_eq!(map.rank(&30), Some(3));
    /// assert_eq!(map.rank(&15), None);
    /// ```
    #[must_use]
    pub fn rank(&self, key: &K) -> Option<usize> {
        self.raw.rank(key)
    }
}
