use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;
use log::{debug, trace};

use crate::raw::{self, RawTreap, Tree};
use crate::{Comparator, Natural};

mod builder;
mod capacity;
mod order_statistic;

pub use builder::Builder;

/// An ordered set or multiset based on a randomized binary search tree.
///
/// Elements are kept sorted by a [`Comparator`] (by default [`Natural`], the element's
/// [`Ord`]). On top of membership queries the set answers positional ones: the element at a
/// sorted index, the number of elements below a value, and the index range a value
/// occupies. All of these take expected O(log n) time.
///
/// A set built with [`new`](OrderedSet::new) ignores duplicates. A set built with
/// [`new_multi`](OrderedSet::new_multi) keeps every inserted copy; a new copy is placed
/// before the equal elements already stored.
///
/// A set may be configured with a *sentinel* value through the [`Builder`]. Boundary
/// queries ([`min`](OrderedSet::min), [`max`](OrderedSet::max),
/// [`lower_bound_value`](OrderedSet::lower_bound_value),
/// [`upper_bound_value`](OrderedSet::upper_bound_value)) return the sentinel instead of
/// `None` when no element qualifies.
///
/// It is a logic error for an element to be modified in such a way that its ordering
/// relative to any other element changes while it is in the set. The behavior resulting
/// from such a logic error is not specified, but will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use rbst_set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.insert(7);
/// set.insert(2);
/// set.insert(2);
/// set.insert(9);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_vec(), [2, 7, 9]);
/// assert_eq!(set.equal_range(&2), Some((0, 0)));
/// assert_eq!(set.equal_range(&5), None);
/// ```
pub struct OrderedSet<T, C = Natural> {
    tree: RawTreap<T, C>,
    root: Tree,
    multi: bool,
    sentinel: Option<T>,
}

/// An iterator over the elements of an `OrderedSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedSet`].
///
/// # Examples
///
/// ```
/// use rbst_set::OrderedSet;
///
/// let set = OrderedSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: raw::Iter<'a, T>,
}

/// An owning iterator over the elements of an `OrderedSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: OrderedSet#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> OrderedSet<T> {
    /// Makes a new, empty strict set ordered by `T`'s [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Builder::new().build()
    }

    /// Makes a new, empty multiset ordered by `T`'s [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new_multi();
    /// set.extend([5, 3, 8, 3, 1]);
    /// assert_eq!(set.to_vec(), [1, 3, 3, 5, 8]);
    /// ```
    #[must_use]
    pub fn new_multi() -> Self {
        Builder::new().multi(true).build()
    }

    /// Makes a new, empty strict set ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_comparator(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10)));
    /// set.extend([13, 21, 32, 43]);
    /// // 43 ties with 13 on the last digit and is dropped as a duplicate.
    /// assert_eq!(set.to_vec(), [21, 32, 13]);
    /// ```
    #[must_use]
    pub fn with_comparator<F>(cmp: F) -> OrderedSet<T, F>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Builder::new().comparator(cmp).build()
    }

    /// Returns a [`Builder`] for configuring a set before it is created.
    pub fn builder() -> Builder<T> {
        Builder::new()
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Returns the number of elements in the set, counting duplicates.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new_multi();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.count(self.root)
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if the set keeps duplicate elements.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        self.multi
    }

    /// Returns the sentinel returned by boundary queries that find nothing, if one was
    /// configured.
    #[must_use]
    pub const fn sentinel(&self) -> Option<&T> {
        self.sentinel.as_ref()
    }

    /// Returns the comparator ordering this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Removes every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing ordered set of {} elements", self.len());
        self.tree.clear();
        self.root = None;
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// The iterator is lazy and can be restarted by calling `iter` again.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let values: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.iter(self.root),
        }
    }

    /// Copies the elements, in ascending order, into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the smallest element, or the sentinel if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::builder().sentinel(i32::MAX).build();
    /// assert_eq!(set.min(), Some(&i32::MAX));
    /// set.extend([4, 2]);
    /// assert_eq!(set.min(), Some(&2));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.nth_or_sentinel(0)
    }

    /// Returns the largest element, or the sentinel if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([4, 2, 8]);
    /// assert_eq!(set.max(), Some(&8));
    /// assert_eq!(OrderedSet::<i32>::new().max(), None);
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        match self.len().checked_sub(1) {
            Some(last) => self.nth_or_sentinel(last),
            None => self.sentinel.as_ref(),
        }
    }

    fn nth_or_sentinel(&self, index: usize) -> Option<&T> {
        self.tree
            .find_by_index(self.root, index)
            .map(|handle| self.tree.value(handle))
            .or(self.sentinel.as_ref())
    }

    fn value_or_sentinel(&self, found: Tree) -> Option<&T> {
        found.map(|handle| self.tree.value(handle)).or(self.sentinel.as_ref())
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self)
    where
        C: Comparator<T>,
    {
        self.tree.assert_invariants(self.root);
        assert_eq!(self.tree.live_nodes(), self.len(), "arena holds nodes outside the tree");
        if !self.multi {
            let mut values = self.iter();
            if let Some(mut previous) = values.next() {
                for value in values {
                    assert_ne!(
                        self.comparator().compare(previous, value),
                        Ordering::Equal,
                        "strict set holds duplicate elements"
                    );
                    previous = value;
                }
            }
        }
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was stored: a strict set ignores a value equal to one it
    /// already holds, a multiset always stores it.
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
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if !self.multi && self.tree.find(self.root, &value).is_some() {
            return false;
        }

        self.root = self.tree.insert(self.root, value);
        true
    }

    /// Removes one occurrence of `value` from the set. Returns whether one was present.
    ///
    /// In a multiset only a single copy is removed. Removing an absent value does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new_multi();
    /// set.extend([3, 3]);
    /// assert!(set.remove(&3));
    /// assert_eq!(set.len(), 1);
    /// assert!(!set.remove(&4));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns one element equal to `value`, if any.
    ///
    /// The first of several equal elements (in sorted order) is the one returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let (root, removed) = self.tree.remove(self.root, value);
        self.root = root;
        if removed.is_none() {
            trace!("removal target not present in ordered set of {} elements", self.len());
        }
        removed
    }

    /// Returns `true` if the set contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.tree.find(self.root, value).is_some()
    }

    /// Returns how many elements equal `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().multi(true).build_from([1, 3, 3, 5]);
    /// assert_eq!(set.count_of(&3), 2);
    /// assert_eq!(set.count_of(&4), 0);
    /// ```
    #[must_use]
    pub fn count_of(&self, value: &T) -> usize {
        self.upper_bound(value) - self.lower_bound(value)
    }

    /// Returns the number of elements strictly less than `value`.
    ///
    /// This is also the position at which `value` would be inserted. An empty set
    /// returns `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().multi(true).build_from([1, 3, 3, 5, 8]);
    /// assert_eq!(set.lower_bound(&3), 1);
    /// assert_eq!(set.lower_bound(&4), 3);
    /// ```
    #[must_use]
    pub fn lower_bound(&self, value: &T) -> usize {
        self.tree.lower_bound(self.root, value)
    }

    /// Returns the number of elements less than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().multi(true).build_from([1, 3, 3, 5, 8]);
    /// assert_eq!(set.upper_bound(&3), 3);
    /// assert_eq!(set.upper_bound(&9), 5);
    /// ```
    #[must_use]
    pub fn upper_bound(&self, value: &T) -> usize {
        self.tree.upper_bound(self.root, value)
    }

    /// Returns the smallest element not less than `value`, or the sentinel if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().sentinel(u32::MAX).build_from([10, 20]);
    /// assert_eq!(set.lower_bound_value(&10), Some(&10));
    /// assert_eq!(set.lower_bound_value(&11), Some(&20));
    /// assert_eq!(set.lower_bound_value(&21), Some(&u32::MAX));
    /// ```
    #[must_use]
    pub fn lower_bound_value(&self, value: &T) -> Option<&T> {
        self.value_or_sentinel(self.tree.lower_bound_value(self.root, value))
    }

    /// Returns the smallest element greater than `value`, or the sentinel if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([10, 20]);
    /// assert_eq!(set.upper_bound_value(&10), Some(&20));
    /// assert_eq!(set.upper_bound_value(&20), None);
    /// ```
    #[must_use]
    pub fn upper_bound_value(&self, value: &T) -> Option<&T> {
        self.value_or_sentinel(self.tree.upper_bound_value(self.root, value))
    }
}

impl<T: Clone, C: Clone> Clone for OrderedSet<T, C> {
    fn clone(&self) -> Self {
        OrderedSet {
            tree: self.tree.clone(),
            root: self.root,
            multi: self.multi,
            sentinel: self.sentinel.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedSet<T> {
    /// Creates an empty strict set ordered by `T`'s [`Ord`].
    fn default() -> Self {
        OrderedSet::new()
    }
}

/// Two sets are equal when they hold equal elements in the same order. Mode, comparator
/// and sentinel are not compared.
impl<T: PartialEq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    /// Converts a `[T; N]` into a strict `OrderedSet<T>`, dropping duplicates.
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the set's contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let values: Vec<_> = set.into_iter().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        let values = self.tree.drain(self.root);
        self.root = None;
        IntoIter {
            inner: values.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
