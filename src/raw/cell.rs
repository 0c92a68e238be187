use super::handle::Handle;

/// Contents of a deque cell.
pub(crate) enum Slot<T> {
    /// The one-past-the-end marker. Never holds a value.
    Boundary,
    Occupied(T),
}

/// One link of the deque chain.
///
/// The chain runs from the first value cell to the trailing boundary cell;
/// `prev` of the first cell and `next` of the boundary are `None`.
pub(crate) struct Cell<T> {
    pub(crate) slot: Slot<T>,
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

impl<T> Cell<T> {
    pub(crate) const fn boundary() -> Self {
        Self {
            slot: Slot::Boundary,
            prev: None,
            next: None,
        }
    }

    pub(crate) const fn occupied(value: T, prev: Option<Handle>, next: Option<Handle>) -> Self {
        Self {
            slot: Slot::Occupied(value),
            prev,
            next,
        }
    }

    pub(crate) const fn is_boundary(&self) -> bool {
        matches!(self.slot, Slot::Boundary)
    }

    #[inline]
    pub(crate) const fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Occupied(value) => Some(value),
            Slot::Boundary => None,
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Occupied(value) => Some(value),
            Slot::Boundary => None,
        }
    }

    /// Consumes the cell, returning its value. Panics on the boundary cell.
    pub(crate) fn into_value(self) -> T {
        match self.slot {
            Slot::Occupied(value) => value,
            Slot::Boundary => panic!("`Cell::into_value()` - boundary cell holds no value!"),
        }
    }
}
