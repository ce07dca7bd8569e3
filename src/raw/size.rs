use super::handle::{Handle, RawHandle};

/// Number of nodes in a subtree, including its root.
///
/// Shares the handle's integer width: a subtree can never hold more nodes than the arena
/// can address.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(size as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// The size of a node whose children hold `left` and `right` nodes.
    #[inline]
    pub(crate) const fn of_children(left: usize, right: usize) -> Self {
        Self::from_usize(left + right + 1)
    }
}
