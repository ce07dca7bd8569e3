use core::cmp::Ordering;

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::{Iter, Spine};
use super::node::{Node, Tree};
use super::size::Size;
use crate::Comparator;

/// The randomized binary search tree backing `OrderedSet`.
///
/// Owns every node, the comparator and the random source. Roots are not stored here: each
/// operation takes the subtree it works on and returns the subtree that replaces it, so
/// callers can hold split halves independently before merging them back.
///
/// Balance comes entirely from `merge`, which keeps the larger side on top with probability
/// proportional to its size. Nothing rotates, and nodes carry no priority.
#[derive(Clone)]
pub(crate) struct RawTreap<T, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    cmp: C,
    rng: SmallRng,
}

impl<T, C> RawTreap<T, C> {
    /// Creates a treap with no nodes.
    pub(crate) fn new(cmp: C, seed: u64, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            cmp,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of nodes alive in the arena, across all subtrees.
    pub(crate) const fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node. All outstanding subtrees become invalid.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &T {
        self.nodes.get(handle).value()
    }

    /// Number of elements in `tree`.
    #[inline]
    pub(crate) fn count(&self, tree: Tree) -> usize {
        tree.map_or(0, |handle| self.nodes.get(handle).size())
    }

    /// Recomputes the size of `handle` from its children.
    fn update(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = Size::of_children(self.count(node.left()), self.count(node.right()));
        self.nodes.get_mut(handle).set_size(size);
    }

    /// Returns the node at in-order position `index`, if `index < count(tree)`.
    pub(crate) fn find_by_index(&self, tree: Tree, index: usize) -> Option<Handle> {
        if index >= self.count(tree) {
            return None;
        }

        let mut current = tree?;
        let mut remaining = index;

        loop {
            let node = self.nodes.get(current);
            let left_size = self.count(node.left());
            match remaining.cmp(&left_size) {
                Ordering::Less => current = node.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    current = node.right()?;
                }
            }
        }
    }

    /// Splits `tree` into its first `k` elements and the rest.
    ///
    /// A `k` past the end leaves everything on the left.
    pub(crate) fn split(&mut self, tree: Tree, k: usize) -> (Tree, Tree) {
        let Some(handle) = tree else {
            return (None, None);
        };

        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let left_size = self.count(left);

        if k <= left_size {
            let (lower, upper) = self.split(left, k);
            self.nodes.get_mut(handle).set_left(upper);
            self.update(handle);
            (lower, Some(handle))
        } else {
            let (lower, upper) = self.split(right, k - left_size - 1);
            self.nodes.get_mut(handle).set_right(lower);
            self.update(handle);
            (Some(handle), upper)
        }
    }

    /// Concatenates two trees. Every element of `left` must order before or equal to every
    /// element of `right`; this is not checked.
    pub(crate) fn merge(&mut self, left: Tree, right: Tree) -> Tree {
        let (Some(l), Some(r)) = (left, right) else {
            return left.or(right);
        };

        let left_size = self.count(left);
        let right_size = self.count(right);

        if self.rng.random_range(0..left_size + right_size) < left_size {
            let far = self.nodes.get(l).right();
            let merged = self.merge(far, right);
            self.nodes.get_mut(l).set_right(merged);
            self.update(l);
            Some(l)
        } else {
            let far = self.nodes.get(r).left();
            let merged = self.merge(left, far);
            self.nodes.get_mut(r).set_left(merged);
            self.update(r);
            Some(r)
        }
    }

    /// Inserts `value` so that it becomes the element at position `k`.
    pub(crate) fn insert_at(&mut self, tree: Tree, k: usize, value: T) -> Tree {
        let (lower, upper) = self.split(tree, k);
        let leaf = Some(self.nodes.alloc(Node::leaf(value)));
        let lower = self.merge(lower, leaf);
        self.merge(lower, upper)
    }

    /// Removes the element at position `k`, returning the new tree and the removed value.
    ///
    /// A `k` past the end leaves the tree as it was.
    pub(crate) fn remove_at(&mut self, tree: Tree, k: usize) -> (Tree, Option<T>) {
        let (prefix, suffix) = self.split(tree, k);
        let (target, rest) = self.split(suffix, 1);
        let removed = target.map(|handle| self.nodes.take(handle).into_value());
        (self.merge(prefix, rest), removed)
    }

    /// Returns an in-order iterator over `tree`.
    pub(crate) fn iter(&self, tree: Tree) -> Iter<'_, T> {
        Iter::new(&self.nodes, tree, self.count(tree))
    }

    /// Moves every element of `tree` out in order, releasing its nodes.
    pub(crate) fn drain(&mut self, tree: Tree) -> Vec<T> {
        let mut values = Vec::with_capacity(self.count(tree));
        let mut spine = Spine::new();
        let mut next = tree;

        loop {
            while let Some(handle) = next {
                spine.push(handle);
                next = self.nodes.get(handle).left();
            }
            let Some(handle) = spine.pop() else {
                break;
            };
            let node = self.nodes.take(handle);
            next = node.right();
            values.push(node.into_value());
        }

        if self.nodes.is_empty() {
            self.nodes.clear();
        }
        values
    }

    /// Checks the size and ordering invariants of `tree`.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violation found.
    pub(crate) fn assert_invariants(&self, tree: Tree)
    where
        C: Comparator<T>,
    {
        let mut visited = 0;
        let mut spine: SmallVec<[(Handle, bool); 32]> = SmallVec::new();

        if let Some(root) = tree {
            spine.push((root, false));
        }

        // Sizes are checked bottom-up on the way back out of each node.
        while let Some((handle, children_done)) = spine.pop() {
            let node = self.nodes.get(handle);
            if children_done {
                let expected = 1 + self.count(node.left()) + self.count(node.right());
                assert_eq!(node.size(), expected, "subtree size out of date at slot {}", handle.slot());
                continue;
            }

            spine.push((handle, true));
            if let Some(right) = node.right() {
                spine.push((right, false));
            }
            visited += 1;
            if let Some(left) = node.left() {
                spine.push((left, false));
            }
        }

        let mut values = self.iter(tree);
        if let Some(mut previous) = values.next() {
            for (position, value) in values.enumerate() {
                assert_ne!(
                    self.cmp.compare(previous, value),
                    Ordering::Greater,
                    "in-order sequence is not sorted at position {}",
                    position + 1
                );
                previous = value;
            }
        }

        assert_eq!(visited, self.count(tree), "root size disagrees with reachable nodes");
    }
}

impl<T, C: Comparator<T>> RawTreap<T, C> {
    /// Returns a node equal to `target`, if any.
    pub(crate) fn find(&self, tree: Tree, target: &T) -> Option<Handle> {
        let mut current = tree;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.cmp.compare(node.value(), target) {
                Ordering::Greater => node.left(),
                Ordering::Less => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }

        None
    }

    /// Number of elements strictly less than `value`.
    pub(crate) fn lower_bound(&self, tree: Tree, value: &T) -> usize {
        self.rank_by(tree, |ord| ord != Ordering::Less, value)
    }

    /// Number of elements less than or equal to `value`.
    pub(crate) fn upper_bound(&self, tree: Tree, value: &T) -> usize {
        self.rank_by(tree, |ord| ord == Ordering::Greater, value)
    }

    /// The first element not less than `value`.
    pub(crate) fn lower_bound_value(&self, tree: Tree, value: &T) -> Option<Handle> {
        self.bound_by(tree, |ord| ord != Ordering::Less, value)
    }

    /// The first element greater than `value`.
    pub(crate) fn upper_bound_value(&self, tree: Tree, value: &T) -> Option<Handle> {
        self.bound_by(tree, |ord| ord == Ordering::Greater, value)
    }

    /// Inserts `value` after every element less than it.
    pub(crate) fn insert(&mut self, tree: Tree, value: T) -> Tree {
        let k = self.lower_bound(tree, &value);
        self.insert_at(tree, k, value)
    }

    /// Removes the first occurrence of `value`. An absent value leaves the tree unchanged.
    pub(crate) fn remove(&mut self, tree: Tree, value: &T) -> (Tree, Option<T>) {
        if self.find(tree, value).is_none() {
            return (tree, None);
        }

        let k = self.lower_bound(tree, value);
        self.remove_at(tree, k)
    }

    // Descends left whenever `go_left(cmp(node, value))`, counting the nodes passed on the
    // way right.
    fn rank_by(&self, tree: Tree, go_left: impl Fn(Ordering) -> bool, value: &T) -> usize {
        let mut current = tree;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if go_left(self.cmp.compare(node.value(), value)) {
                current = node.left();
            } else {
                rank += self.count(node.left()) + 1;
                current = node.right();
            }
        }

        rank
    }

    // Same descent as `rank_by`, remembering the last node we turned left at.
    fn bound_by(&self, tree: Tree, go_left: impl Fn(Ordering) -> bool, value: &T) -> Option<Handle> {
        let mut current = tree;
        let mut found = None;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if go_left(self.cmp.compare(node.value(), value)) {
                found = Some(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        found
    }
}
