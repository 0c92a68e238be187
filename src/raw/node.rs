use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A red-black tree node augmented with its subtree size.
///
/// Absent links (`None`) stand for the shared null leaf: black, size zero.
/// `parent` is a back-reference only; nodes are owned by the arena.
pub(crate) struct Node<K, V> {
    pub(crate) entry: (K, V),
    pub(crate) color: Color,
    // Number of entries in the subtree rooted here, this node included.
    pub(crate) size: usize,
    pub(crate) children: [Option<Handle>; 2],
    pub(crate) parent: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// A freshly inserted node: red, size one, no children.
    pub(crate) const fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            entry: (key, value),
            color: Color::Red,
            size: 1,
            children: [None, None],
            parent,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        self.children[side as usize]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        self.children[side as usize] = child;
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.entry.0
    }
}
