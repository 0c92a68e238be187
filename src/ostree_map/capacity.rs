use super::OSTreeMap;
use crate::compare::Natural;
use crate::raw::{OwnerId, RawOSTree};

impl<K, V> OSTreeMap<K, V> {
    /// Creates an empty map with node storage for at least `capacity`
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::OSTreeMap;
    ///
    /// let map: OSTreeMap<i32, i32> = OSTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSTreeMap::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> OSTreeMap<K, V, C> {
    /// Creates an empty map ordered by `compare`, with node storage for at
    /// least `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        OSTreeMap {
            raw: RawOSTree::with_capacity(capacity, compare),
            owner: OwnerId::fresh(),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
