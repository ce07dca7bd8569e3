use core::ops::Index;

use log::trace;

use super::OrderedSet;
use crate::{Comparator, OutOfRange, Rank};

impl<T, C> OrderedSet<T, C> {
    /// Returns the element at position `index` in sorted order.
    ///
    /// The index is zero-based and counts duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([10, 20, 30]);
    /// assert_eq!(set.element_at(1), Ok(&20));
    /// assert!(set.element_at(3).is_err());
    /// ```
    pub fn element_at(&self, index: usize) -> Result<&T, OutOfRange> {
        match self.tree.find_by_index(self.root, index) {
            Some(handle) => Ok(self.tree.value(handle)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Removes and returns the element at position `index` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] and leaves the set untouched if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([2, 7, 9]);
    /// assert_eq!(set.remove_at(1), Ok(7));
    /// assert_eq!(set.to_vec(), [2, 9]);
    /// assert!(set.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }

        let (root, removed) = self.tree.remove_at(self.root, index);
        self.root = root;
        Ok(removed.expect("`OrderedSet::remove_at()` - bound-checked index removed nothing!"))
    }

    fn out_of_range(&self, index: usize) -> OutOfRange {
        let len = self.len();
        trace!("index {index} out of range for ordered set of length {len}");
        OutOfRange { index, len }
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Returns the inclusive range of positions occupied by elements equal to `value`, or
    /// `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().multi(true).build_from([1, 3, 3, 3, 5]);
    /// assert_eq!(set.equal_range(&3), Some((1, 3)));
    /// assert_eq!(set.equal_range(&5), Some((4, 4)));
    /// assert_eq!(set.equal_range(&4), None);
    /// ```
    #[must_use]
    pub fn equal_range(&self, value: &T) -> Option<(usize, usize)> {
        if !self.contains(value) {
            return None;
        }

        Some((self.lower_bound(value), self.upper_bound(value) - 1))
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rbst_set::{OrderedSet, Rank};
///
/// let set = OrderedSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
impl<T, C> Index<Rank> for OrderedSet<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.element_at(rank.0) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
