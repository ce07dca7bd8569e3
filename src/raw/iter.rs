use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Tree};

/// Pending ancestors of an in-order walk. Expected depth is logarithmic, so most walks
/// never leave the inline buffer.
pub(crate) type Spine = SmallVec<[Handle; 32]>;

/// Lazy in-order walk over one subtree, from both ends.
///
/// The front and back walks are independent; `remaining` stops them before they cross.
pub(crate) struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, tree: Tree, len: usize) -> Self {
        let mut iter = Self {
            nodes,
            front: Spine::new(),
            back: Spine::new(),
            remaining: len,
        };
        iter.descend_left(tree);
        iter.descend_right(tree);
        iter
    }

    fn descend_left(&mut self, mut tree: Tree) {
        while let Some(handle) = tree {
            self.front.push(handle);
            tree = self.nodes.get(handle).left();
        }
    }

    fn descend_right(&mut self, mut tree: Tree) {
        while let Some(handle) = tree {
            self.back.push(handle);
            tree = self.nodes.get(handle).right();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front.pop()?;
        let node = self.nodes.get(handle);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back.pop()?;
        let node = self.nodes.get(handle);
        self.descend_right(node.left());
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
