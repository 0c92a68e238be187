use super::LinkedDeque;
use crate::error::Result;
use crate::raw::{Handle, OwnerId};

/// A position in a [`LinkedDeque`]: either a value cell or the end boundary.
///
/// Positions do not borrow the deque, so they can be kept across
/// [`insert`](LinkedDeque::insert) and [`erase`](LinkedDeque::erase). Two
/// positions are equal only if they come from the same deque instance and
/// name the same cell. A position whose cell was erased is stale; the deque
/// rejects it with [`Error::InvalidIterator`](crate::Error::InvalidIterator)
/// as long as the cell has not been reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub(super) cell: Handle,
    pub(super) owner: OwnerId,
}

/// A read-only view of a [`LinkedDeque`] at some [`Position`].
///
/// Created by [`LinkedDeque::cursor`]. Every method forwards to the deque, so
/// the same provenance and boundary checks apply.
///
/// # Examples
///
/// ```
/// use sentinel_collections::LinkedDeque;
///
/// let deque = LinkedDeque::from([1, 2, 3]);
/// let mut cursor = deque.cursor(deque.begin());
/// assert_eq!(cursor.get(), Ok(&1));
///
/// cursor.move_next()?;
/// assert_eq!(cursor.get(), Ok(&2));
/// assert_eq!(cursor.offset(2)?.position(), deque.end());
/// # Ok::<(), sentinel_collections::Error>(())
/// ```
pub struct Cursor<'a, T> {
    deque: &'a LinkedDeque<T>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) const fn new(deque: &'a LinkedDeque<T>, position: Position) -> Self {
        Self { deque, position }
    }

    /// The position this cursor points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The value under the cursor. Fails on the end boundary.
    pub fn get(&self) -> Result<&'a T> {
        self.deque.get_at(self.position)
    }

    /// A cursor `n` cells away; negative `n` moves towards the front.
    pub fn offset(&self, n: isize) -> Result<Self> {
        Ok(Self::new(self.deque, self.deque.advance(self.position, n)?))
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.deque.next(self.position)?;
        Ok(())
    }

    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.deque.prev(self.position)?;
        Ok(())
    }

    /// Signed number of steps from `other` to `self`.
    pub fn distance(&self, other: &Self) -> Result<isize> {
        self.deque.distance(self.position, other.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> core::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor").field("position", &self.position).finish()
    }
}
