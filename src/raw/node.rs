use super::handle::Handle;
use super::size::Size;

/// A root handle, or `None` for the empty tree.
pub(crate) type Tree = Option<Handle>;

/// One stored element.
///
/// There is no priority field: the merge step balances by subtree size alone.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    left: Tree,
    right: Tree,
    // Nodes in the subtree rooted here, including this one.
    size: Size,
}

impl<T> Node<T> {
    /// Creates a detached single-node tree.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Tree {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Tree {
        self.right
    }

    #[inline]
    pub(crate) fn set_left(&mut self, left: Tree) {
        self.left = left;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, right: Tree) {
        self.right = right;
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size.to_usize()
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
