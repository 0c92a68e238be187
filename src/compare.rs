use core::cmp::Ordering;

/// A total order over keys, used by [`OSTreeMap`](crate::OSTreeMap).
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// are reverses of each other and the order is transitive. Breaking this is a
/// logic error; the map will not misbehave in an unsafe way but lookups may
/// miss.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator:
///
/// ```
/// use sentinel_collections::OSTreeMap;
///
/// let mut by_len = OSTreeMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// by_len.insert("three", 3);
/// by_len.insert("one", 1);
/// by_len.insert("sixteen", 16);
///
/// let keys: Vec<_> = by_len.keys().copied().collect();
/// assert_eq!(keys, ["one", "three", "sixteen"]);
/// ```
pub trait Compare<K: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Compare<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
