use core::cmp::Ordering;
use core::mem;

use alloc::vec::Vec;
use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use crate::compare::Compare;

/// The order-statistic red-black tree backing `OSTreeMap`.
///
/// Links are arena handles; a missing link is the black, size-zero null leaf.
/// Every structural mutation leaves `size` consistent on the path to the root
/// before any recolouring or rotation takes place.
pub(crate) struct RawOSTree<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    compare: C,
}

impl<K, V, C> RawOSTree<K, V, C> {
    pub(crate) const fn new(compare: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            compare,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            compare,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.size(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns true if `handle` names a live node of this tree.
    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.nodes.contains(handle)
    }

    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let (key, value) = &self.nodes.get(handle).entry;
        (key, value)
    }

    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let (key, value) = &mut self.nodes.get_mut(handle).entry;
        (&*key, value)
    }

    #[inline]
    fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    fn size(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |h| self.node(h).size)
    }

    #[inline]
    fn color(&self, link: Option<Handle>) -> Color {
        link.map_or(Color::Black, |h| self.node(h).color)
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.node_mut(handle).color = color;
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).parent
    }

    #[inline]
    fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.node(handle).child(side)
    }

    /// The side of `parent` on which `child` hangs.
    #[inline]
    fn side_of(&self, parent: Handle, child: Option<Handle>) -> Side {
        if self.child(parent, Side::Left) == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn update_size(&mut self, handle: Handle) {
        let node = self.node(handle);
        let size = self.size(node.child(Side::Left)) + self.size(node.child(Side::Right)) + 1;
        self.node_mut(handle).size = size;
    }

    /// Recomputes sizes from `from` up to the root.
    fn update_sizes_upward(&mut self, from: Option<Handle>) {
        let mut current = from;
        while let Some(handle) = current {
            self.update_size(handle);
            current = self.parent(handle);
        }
    }

    /// Points whatever referenced `old` (its parent's child slot, or the root)
    /// at `new` instead. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_of(p, Some(old));
                self.node_mut(p).set_child(side, new);
            }
        }
    }

    /// Moves `x` down towards `side`, lifting its child from the other side.
    fn rotate(&mut self, x: Handle, side: Side) {
        let y = self.child(x, side.opposite()).expect("`RawOSTree::rotate()` - no child to lift!");
        trace!(?side, "rotate");

        let inner = self.child(y, side);
        self.node_mut(x).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let parent = self.parent(x);
        self.node_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));

        self.node_mut(y).set_child(side, Some(x));
        self.node_mut(x).parent = Some(y);

        self.update_size(x);
        self.update_size(y);
    }

    /// Descends from `from` as far as possible towards `side`.
    fn extreme(&self, from: Handle, side: Side) -> Handle {
        let mut current = from;
        while let Some(next) = self.child(current, side) {
            current = next;
        }
        current
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// In-order successor (`Side::Right`) or predecessor (`Side::Left`).
    pub(crate) fn neighbour(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.child(handle, side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut node = handle;
        let mut parent = self.parent(handle);
        while let Some(p) = parent {
            if self.child(p, side) != Some(node) {
                break;
            }
            node = p;
            parent = self.parent(p);
        }
        parent
    }

    /// The node with 1-indexed in-order rank `k`.
    pub(crate) fn kth(&self, k: usize) -> Option<Handle> {
        if k == 0 || k > self.len() {
            return None;
        }

        let mut remaining = k;
        let mut current = self.root;
        while let Some(handle) = current {
            let rank = self.size(self.child(handle, Side::Left)) + 1;
            match remaining.cmp(&rank) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => current = self.child(handle, Side::Left),
                Ordering::Greater => {
                    remaining -= rank;
                    current = self.child(handle, Side::Right);
                }
            }
        }
        unreachable!("`RawOSTree::kth()` - subtree sizes disagree with len!")
    }

    /// Handles of all nodes in key order.
    fn in_order(&self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.first();
        while let Some(handle) = current {
            order.push(handle);
            current = self.neighbour(handle, Side::Right);
        }
        order
    }

    /// Mutable access to every entry, in key order.
    pub(crate) fn entries_mut(&mut self) -> Vec<(&K, &mut V)> {
        let order = self.in_order();
        self.nodes
            .ordered_mut(&order)
            .into_iter()
            .map(|node| {
                let (key, value) = &mut node.entry;
                (&*key, value)
            })
            .collect()
    }

    /// Removes every entry, returning them in key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order = self.in_order();
        let entries = order.into_iter().map(|handle| self.nodes.take(handle).entry).collect();
        self.clear();
        entries
    }

    /// Unlinks the node at `z` and returns its entry.
    ///
    /// A node with two children keeps its handle: its in-order successor is
    /// spliced out instead and the successor's entry moves into `z`.
    pub(crate) fn erase(&mut self, z: Handle) -> (K, V) {
        let y = match self.node(z).children {
            [Some(_), Some(right)] => self.extreme(right, Side::Left),
            _ => z,
        };
        let x = self.child(y, Side::Left).or(self.child(y, Side::Right));
        let parent = self.parent(y);
        let side = parent.map_or(Side::Left, |p| self.side_of(p, Some(y)));

        if let Some(x) = x {
            self.node_mut(x).parent = parent;
        }
        self.replace_child(parent, y, x);

        let mut removed = self.nodes.take(y);
        if y != z {
            mem::swap(&mut self.node_mut(z).entry, &mut removed.entry);
        }

        self.update_sizes_upward(parent);
        if removed.color == Color::Black {
            self.delete_fixup(x, parent, side);
        }
        removed.entry
    }

    /// Restores the red-black invariants after a black node was spliced out,
    /// leaving `x` (hanging off `parent` on `side`) one black short.
    fn delete_fixup(&mut self, mut x: Option<Handle>, mut parent: Option<Handle>, mut side: Side) {
        while x != self.root && self.color(x) == Color::Black {
            let p = parent.expect("`RawOSTree::delete_fixup()` - non-root link without parent!");
            let sibling = move |tree: &Self| {
                tree.child(p, side.opposite())
                    .expect("`RawOSTree::delete_fixup()` - doubly black link without sibling!")
            };

            let mut w = sibling(self);
            if self.color(Some(w)) == Color::Red {
                trace!("delete fixup: red sibling");
                self.set_color(w, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                w = sibling(self);
            }

            let near = self.child(w, side);
            let far = self.child(w, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup: black sibling, black nephews");
                self.set_color(w, Color::Red);
                x = Some(p);
                parent = self.parent(p);
                if let Some(grandparent) = parent {
                    side = self.side_of(grandparent, x);
                }
                continue;
            }

            if self.color(far) == Color::Black {
                trace!("delete fixup: near nephew red");
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(w, Color::Red);
                self.rotate(w, side.opposite());
                w = sibling(self);
            }

            trace!("delete fixup: far nephew red");
            let parent_color = self.node(p).color;
            self.set_color(w, parent_color);
            self.set_color(p, Color::Black);
            if let Some(far) = self.child(w, side.opposite()) {
                self.set_color(far, Color::Black);
            }
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }
}

impl<K, V, C: Compare<K>> RawOSTree<K, V, C> {
    pub(crate) fn find(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            current = match self.compare.compare(key, self.node(handle).key()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => self.child(handle, Side::Left),
                Ordering::Greater => self.child(handle, Side::Right),
            };
        }
        None
    }

    /// The 1-indexed position of `key` in key order.
    pub(crate) fn rank(&self, key: &K) -> Option<usize> {
        let mut preceding = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let rank = self.size(self.child(handle, Side::Left)) + 1;
            current = match self.compare.compare(key, self.node(handle).key()) {
                Ordering::Equal => return Some(preceding + rank),
                Ordering::Less => self.child(handle, Side::Left),
                Ordering::Greater => {
                    preceding += rank;
                    self.child(handle, Side::Right)
                }
            };
        }
        None
    }

    /// Inserts `key` unless it is present. Returns the node holding `key` and
    /// whether it was newly created; an existing entry is left untouched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (Handle, bool) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(handle) = current {
            side = match self.compare.compare(&key, self.node(handle).key()) {
                Ordering::Equal => return (handle, false),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(handle);
            current = self.child(handle, side);
        }

        let z = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(z),
            Some(p) => self.node_mut(p).set_child(side, Some(z)),
        }
        self.update_sizes_upward(parent);
        self.insert_fixup(z);
        (z, true)
    }

    fn insert_fixup(&mut self, mut z: Handle) {
        while let Some(p) = self.parent(z).filter(|&p| self.color(Some(p)) == Color::Red) {
            let g = self.parent(p).expect("`RawOSTree::insert_fixup()` - red root!");
            let side = self.side_of(g, Some(p));
            let uncle = self.child(g, side.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.color(Some(u)) == Color::Red) {
                trace!("insert fixup: red uncle");
                self.set_color(p, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(g, Color::Red);
                z = g;
                continue;
            }

            if self.child(p, side.opposite()) == Some(z) {
                trace!("insert fixup: inner child");
                z = p;
                self.rotate(z, side);
            }

            trace!("insert fixup: outer child");
            let p = self.parent(z).expect("`RawOSTree::insert_fixup()` - lost parent after rotation!");
            self.set_color(p, Color::Black);
            self.set_color(g, Color::Red);
            self.rotate(g, side.opposite());
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let handle = self.find(key)?;
        Some(self.erase(handle))
    }
}

/// Copies shape, colours and sizes node for node.
impl<K: Clone, V: Clone, C: Clone> Clone for RawOSTree<K, V, C> {
    fn clone(&self) -> Self {
        fn copy_subtree<K: Clone, V: Clone>(
            source: &Arena<Node<K, V>>,
            target: &mut Arena<Node<K, V>>,
            from: Option<Handle>,
            parent: Option<Handle>,
        ) -> Option<Handle> {
            let node = source.get(from?);
            let (key, value) = &node.entry;
            let copy = target.alloc(Node {
                entry: (key.clone(), value.clone()),
                color: node.color,
                size: node.size,
                children: [None, None],
                parent,
            });
            let left = copy_subtree(source, target, node.child(Side::Left), Some(copy));
            let right = copy_subtree(source, target, node.child(Side::Right), Some(copy));
            target.get_mut(copy).children = [left, right];
            Some(copy)
        }

        let mut nodes = Arena::with_capacity(self.nodes.len());
        let root = copy_subtree(&self.nodes, &mut nodes, self.root, None);
        trace!(len = self.len(), "deep-copied tree");

        Self {
            nodes,
            root,
            compare: self.compare.clone(),
        }
    }
}
