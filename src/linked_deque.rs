use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

use alloc::vec::{self, Vec};
use tracing::trace;

use crate::error::{Error, Result};
use crate::raw::{Arena, Cell, Handle, OwnerId};

mod cursor;

pub use cursor::{Cursor, Position};

/// A double-ended queue stored as a doubly linked chain of cells.
///
/// The chain always ends in a boundary cell that holds no value; it is the
/// position returned by [`end`](LinkedDeque::end). [`begin`](LinkedDeque::begin)
/// is the first value cell, or the boundary when the deque is empty.
///
/// Pushes, pops, [`insert`](LinkedDeque::insert) and [`erase`](LinkedDeque::erase)
/// splice a single cell in or out in O(1) and leave every other [`Position`]
/// valid. Indexed access walks the chain and is O(index).
///
/// Cloning copies every element into a new deque with its own identity.
/// Equality is identity: a deque equals itself and nothing else, not even its
/// clone. Compare contents with `a.iter().eq(b.iter())`.
///
/// # Examples
///
/// ```
/// use sentinel_collections::LinkedDeque;
///
/// let mut deque = LinkedDeque::new();
/// deque.push_back(10);
/// deque.push_back(20);
/// deque.push_front(5);
///
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [5, 10, 20]);
/// assert_eq!(deque.at(1), Ok(&10));
///
/// assert_eq!(deque.pop_front(), Ok(5));
/// assert_eq!(deque.front(), Ok(&10));
/// ```
pub struct LinkedDeque<T> {
    cells: Arena<Cell<T>>,
    // First value cell; equal to `tail` when empty.
    head: Handle,
    // The end boundary.
    tail: Handle,
    len: usize,
    owner: OwnerId,
}

/// An iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`iter`] method on [`LinkedDeque`].
///
/// [`iter`]: LinkedDeque::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    cells: &'a Arena<Cell<T>>,
    front: Handle,
    // One past the next element yielded from the back.
    back: Handle,
    remaining: usize,
}

/// A mutable iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`LinkedDeque`].
///
/// [`iter_mut`]: LinkedDeque::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T> {
    inner: vec::IntoIter<&'a mut T>,
}

/// An owning iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`LinkedDeque`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    deque: LinkedDeque<T>,
}

impl<T> LinkedDeque<T> {
    /// Makes a new, empty `LinkedDeque`.
    ///
    /// Only the end boundary cell is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.begin(), deque.end());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_arena(Arena::new())
    }

    /// Makes an empty deque with room for at least `capacity` elements before
    /// its cell storage grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::with_capacity(16);
    /// assert!(deque.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(Arena::with_capacity(capacity.saturating_add(1)))
    }

    fn from_arena(mut cells: Arena<Cell<T>>) -> Self {
        let tail = cells.alloc(Cell::boundary());
        Self {
            cells,
            head: tail,
            tail,
            len: 0,
            owner: OwnerId::fresh(),
        }
    }

    /// Number of elements the deque can hold without reallocating cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.capacity().saturating_sub(1)
    }

    /// Returns the number of elements in the deque.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element. Previously obtained positions become stale.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.tail = self.cells.alloc(Cell::boundary());
        self.head = self.tail;
        self.len = 0;
        trace!("deque cleared, boundary reallocated");
    }

    const fn position(&self, cell: Handle) -> Position {
        Position { cell, owner: self.owner }
    }

    /// Position of the first element, or [`end`](LinkedDeque::end) if empty.
    #[must_use]
    pub const fn begin(&self) -> Position {
        self.position(self.head)
    }

    /// Position of the end boundary, one past the last element.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.position(self.tail)
    }

    /// Returns a read-only cursor at `position`. The position is checked when
    /// the cursor is used, not here.
    pub const fn cursor(&self, position: Position) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    /// Checks that `position` was issued by this deque and still names a
    /// live cell.
    fn resolve(&self, position: Position, op: &'static str) -> Result<Handle> {
        if position.owner != self.owner || !self.cells.contains(position.cell) {
            return Err(Error::InvalidIterator.raised_by(op));
        }
        Ok(position.cell)
    }

    fn value(&self, cell: Handle) -> &T {
        self.cells.get(cell).value().expect("`LinkedDeque::value()` - boundary cell in value position!")
    }

    fn value_mut(&mut self, cell: Handle) -> &mut T {
        self.cells
            .get_mut(cell)
            .value_mut()
            .expect("`LinkedDeque::value_mut()` - boundary cell in value position!")
    }

    fn last_cell(&self) -> Option<Handle> {
        self.cells.get(self.tail).prev
    }

    /// Walks `index` steps from the front. `index` must be below `len`.
    fn nth_cell(&self, index: usize) -> Handle {
        let mut cell = self.head;
        for _ in 0..index {
            cell = self.cells.get(cell).next.expect("`LinkedDeque::nth_cell()` - chain shorter than len!");
        }
        cell
    }

    /// Handles of the value cells, front to back.
    fn value_cells(&self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len);
        let mut cell = self.head;
        while cell != self.tail {
            order.push(cell);
            cell = self.cells.get(cell).next.expect("`LinkedDeque::value_cells()` - chain broken before boundary!");
        }
        order
    }

    /// Splices a new value cell in front of `at`.
    fn link_before(&mut self, at: Handle, value: T) -> Handle {
        let prev = self.cells.get(at).prev;
        let cell = self.cells.alloc(Cell::occupied(value, prev, Some(at)));
        if let Some(prev) = prev {
            self.cells.get_mut(prev).next = Some(cell);
        }
        self.cells.get_mut(at).prev = Some(cell);

        if at == self.head {
            if self.len == 0 {
                trace!("first value linked before boundary");
            }
            self.head = cell;
        }
        self.len += 1;
        cell
    }

    /// Splices the value cell `cell` out. Returns its value and the handle of
    /// the cell that followed it.
    fn unlink(&mut self, cell: Handle) -> (T, Handle) {
        let removed = self.cells.take(cell);
        let next = removed.next.expect("`LinkedDeque::unlink()` - value cell without successor!");
        if let Some(prev) = removed.prev {
            self.cells.get_mut(prev).next = Some(next);
        }
        self.cells.get_mut(next).prev = removed.prev;

        if cell == self.head {
            self.head = next;
        }
        self.len -= 1;
        (removed.into_value(), next)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`Error::ContainerEmpty`] if the deque is empty.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::ContainerEmpty.raised_by("front"));
        }
        Ok(self.value(self.head))
    }

    /// Mutable counterpart of [`front`](LinkedDeque::front).
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::ContainerEmpty.raised_by("front_mut"));
        }
        Ok(self.value_mut(self.head))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`Error::ContainerEmpty`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, LinkedDeque};
    ///
    /// let mut deque = LinkedDeque::new();
    /// assert_eq!(deque.back(), Err(Error::ContainerEmpty));
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T> {
        match self.last_cell() {
            Some(cell) => Ok(self.value(cell)),
            None => Err(Error::ContainerEmpty.raised_by("back")),
        }
    }

    /// Mutable counterpart of [`back`](LinkedDeque::back).
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.last_cell() {
            Some(cell) => Ok(self.value_mut(cell)),
            None => Err(Error::ContainerEmpty.raised_by("back_mut")),
        }
    }

    /// Returns a reference to the element at `index`, counting from the front.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBound`] if `index >= len()`.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, LinkedDeque};
    ///
    /// let deque = LinkedDeque::from(['a', 'b', 'c']);
    /// assert_eq!(deque.at(2), Ok(&'c'));
    /// assert_eq!(deque.at(3), Err(Error::IndexOutOfBound));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBound.raised_by("at"));
        }
        Ok(self.value(self.nth_cell(index)))
    }

    /// Mutable counterpart of [`at`](LinkedDeque::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBound.raised_by("at_mut"));
        }
        let cell = self.nth_cell(index);
        Ok(self.value_mut(cell))
    }

    /// Appends an element to the back.
    pub fn push_back(&mut self, value: T) {
        self.link_before(self.tail, value);
    }

    /// Prepends an element to the front.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::ContainerEmpty`] if the deque is empty; nothing is modified.
    pub fn pop_back(&mut self) -> Result<T> {
        let cell = self.last_cell().ok_or_else(|| Error::ContainerEmpty.raised_by("pop_back"))?;
        Ok(self.unlink(cell).0)
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::ContainerEmpty`] if the deque is empty; nothing is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, LinkedDeque};
    ///
    /// let mut deque = LinkedDeque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(Error::ContainerEmpty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::ContainerEmpty.raised_by("pop_front"));
        }
        Ok(self.unlink(self.head).0)
    }

    /// Inserts `value` in front of `position` and returns the new element's
    /// position. Inserting at [`begin`](LinkedDeque::begin) makes the new
    /// element the first; inserting at [`end`](LinkedDeque::end) appends.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] if `position` belongs to another deque or
    /// names an erased cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::from([1, 3]);
    /// let three = deque.next(deque.begin())?;
    /// let two = deque.insert(three, 2)?;
    ///
    /// assert_eq!(deque.get_at(two), Ok(&2));
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// # Ok::<(), sentinel_collections::Error>(())
    /// ```
    pub fn insert(&mut self, position: Position, value: T) -> Result<Position> {
        let at = self.resolve(position, "insert")?;
        let cell = self.link_before(at, value);
        Ok(self.position(cell))
    }

    /// Removes the element at `position` and returns the position that
    /// followed it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] if `position` is the end boundary, belongs
    /// to another deque or names an erased cell.
    pub fn erase(&mut self, position: Position) -> Result<Position> {
        let cell = self.resolve(position, "erase")?;
        if self.cells.get(cell).is_boundary() {
            return Err(Error::InvalidIterator.raised_by("erase"));
        }
        let (_, next) = self.unlink(cell);
        Ok(self.position(next))
    }

    /// Dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] on the end boundary, a foreign position or
    /// an erased cell.
    pub fn get_at(&self, position: Position) -> Result<&T> {
        let cell = self.resolve(position, "get_at")?;
        self.cells.get(cell).value().ok_or_else(|| Error::InvalidIterator.raised_by("get_at"))
    }

    /// Mutable counterpart of [`get_at`](LinkedDeque::get_at).
    pub fn get_at_mut(&mut self, position: Position) -> Result<&mut T> {
        let cell = self.resolve(position, "get_at_mut")?;
        self.cells.get_mut(cell).value_mut().ok_or_else(|| Error::InvalidIterator.raised_by("get_at_mut"))
    }

    /// Moves `n` cells from `position`: towards the back for positive `n`,
    /// towards the front for negative `n`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] if the walk would leave the chain (before
    /// the first element or past the end boundary), or if `position` is not
    /// a live position of this deque.
    ///
    /// # Complexity
    ///
    /// O(|n|)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::{Error, LinkedDeque};
    ///
    /// let deque = LinkedDeque::from([1, 2, 3]);
    /// let last = deque.advance(deque.end(), -1)?;
    /// assert_eq!(deque.get_at(last), Ok(&3));
    /// assert_eq!(deque.advance(deque.begin(), 3)?, deque.end());
    /// assert_eq!(deque.advance(deque.begin(), 4), Err(Error::InvalidIterator));
    /// # Ok::<(), sentinel_collections::Error>(())
    /// ```
    pub fn advance(&self, position: Position, n: isize) -> Result<Position> {
        let mut cell = self.resolve(position, "advance")?;
        let forward = n >= 0;
        for _ in 0..n.unsigned_abs() {
            let links = self.cells.get(cell);
            let step = if forward { links.next } else { links.prev };
            cell = step.ok_or_else(|| Error::InvalidIterator.raised_by("advance"))?;
        }
        Ok(self.position(cell))
    }

    /// The position after `position`. Fails on the end boundary.
    pub fn next(&self, position: Position) -> Result<Position> {
        self.advance(position, 1)
    }

    /// The position before `position`. Fails on the first element.
    pub fn prev(&self, position: Position) -> Result<Position> {
        self.advance(position, -1)
    }

    /// Signed number of steps from `to` to `from`, i.e. `from - to`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterator`] unless both positions are live positions of
    /// this deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.distance(deque.end(), deque.begin()), Ok(4));
    /// assert_eq!(deque.distance(deque.begin(), deque.end()), Ok(-4));
    /// ```
    pub fn distance(&self, from: Position, to: Position) -> Result<isize> {
        let from = self.resolve(from, "distance")?;
        let to = self.resolve(to, "distance")?;

        for forward in [false, true] {
            let mut steps: isize = 0;
            let mut current = Some(from);
            while let Some(cell) = current {
                if cell == to {
                    return Ok(steps);
                }
                let links = self.cells.get(cell);
                if forward {
                    steps -= 1;
                    current = links.next;
                } else {
                    steps += 1;
                    current = links.prev;
                }
            }
        }
        Err(Error::InvalidIterator.raised_by("distance"))
    }

    /// Gets an iterator over the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_collections::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([1, 2, 3]);
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.len(), 1);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cells: &self.cells,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Gets a mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let order = self.value_cells();
        let values: Vec<&mut T> = self
            .cells
            .ordered_mut(&order)
            .into_iter()
            .map(|cell| cell.value_mut().expect("`LinkedDeque::iter_mut()` - boundary cell in value position!"))
            .collect();
        IterMut {
            inner: values.into_iter(),
        }
    }
}

impl<T: Clone> Clone for LinkedDeque<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.extend(self.iter().cloned());
        copy
    }

    /// Replaces the contents with a copy of `source`, keeping this deque's
    /// identity.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

/// Identity comparison: `true` only for the same instance.
impl<T> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl<T> Eq for LinkedDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        LinkedDeque::new()
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = LinkedDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedDeque<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

/// Indexes from the front.
///
/// # Panics
///
/// Panics if `index >= len()`.
impl<T> Index<usize> for LinkedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index).expect("index out of bounds")
    }
}

impl<T> IndexMut<usize> for LinkedDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index).expect("index out of bounds")
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let cell = self.cells.get(self.front);
        self.remaining -= 1;
        if let Some(next) = cell.next {
            self.front = next;
        }
        cell.value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        self.back = self.cells.get(self.back).prev?;
        self.remaining -= 1;
        self.cells.get(self.back).value()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cells: self.cells,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.deque.is_empty() {
            return None;
        }
        let head = self.deque.head;
        Some(self.deque.unlink(head).0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let cell = self.deque.last_cell()?;
        Some(self.deque.unlink(cell).0)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}
