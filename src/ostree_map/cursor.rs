use core::fmt;

use super::OSTreeMap;
use crate::error::Result;
use crate::raw::{Handle, OwnerId};

/// A position in an [`OSTreeMap`]: an entry, or the end position one past the
/// largest key.
///
/// Positions do not borrow the map. Two positions are equal only if they come
/// from the same map instance and name the same node. Erasing an entry makes
/// positions at that entry stale; when the erased entry had two children, its
/// in-order successor's node is the one released, so positions at the
/// successor go stale as well while positions at the erased key now see the
/// successor's entry. The map rejects a stale position with
/// [`Error::InvalidIterator`](crate::Error::InvalidIterator) as long as its
/// node has not been reused by a later insert.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub(super) node: Option<Handle>,
    pub(super) owner: OwnerId,
}

impl Position {
    /// Returns `true` for the end position.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

/// A read-only view of an [`OSTreeMap`] at some [`Position`].
///
/// Created by [`OSTreeMap::cursor`].
///
/// # Examples
///
/// ```
/// use sentinel_collections::OSTreeMap;
///
/// let map = OSTreeMap::from([(1, "a"), (2, "b")]);
/// let mut cursor = map.cursor(map.end());
///
/// cursor.move_prev()?;
/// assert_eq!(cursor.get(), Ok((&2, &"b")));
/// cursor.move_prev()?;
/// assert_eq!(cursor.position(), map.begin());
/// assert!(cursor.move_prev().is_err());
/// # Ok::<(), sentinel_collections::Error>(())
/// ```
pub struct Cursor<'a, K, V, C> {
    map: &'a OSTreeMap<K, V, C>,
    position: Position,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(super) const fn new(map: &'a OSTreeMap<K, V, C>, position: Position) -> Self {
        Self { map, position }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The entry under the cursor. Fails at the end position.
    pub fn get(&self) -> Result<(&'a K, &'a V)> {
        self.map.get_at(self.position)
    }

    /// Steps to the in-order successor. Fails at the end position.
    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.map.next(self.position)?;
        Ok(())
    }

    /// Steps to the in-order predecessor; from the end position this is the
    /// last entry. Fails at the first entry.
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.map.prev(self.position)?;
        Ok(())
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> PartialEq for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<K, V, C> Eq for Cursor<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("position", &self.position).finish()
    }
}
