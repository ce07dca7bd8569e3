use core::cmp::Ordering;

use log::debug;

use super::OrderedSet;
use crate::raw::RawTreap;
use crate::{Comparator, Natural};

/// Seed used when none is configured. Any value is correct; the seed only changes the
/// shape of the tree, never the results of a query.
const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Configuration for an [`OrderedSet`].
///
/// Created by [`OrderedSet::builder`]. Every setting has a default: a strict set, natural
/// ordering, no sentinel, a fixed seed and no preallocated capacity.
///
/// # Examples
///
/// ```
/// use rbst_set::OrderedSet;
///
/// let mut set = OrderedSet::builder()
///     .multi(true)
///     .sentinel(i64::MAX)
///     .comparator(|a: &i64, b: &i64| b.cmp(a))
///     .seed(42)
///     .build();
///
/// set.extend([1, 3, 3, 2]);
/// assert_eq!(set.to_vec(), [3, 3, 2, 1]);
/// assert_eq!(set.upper_bound_value(&1), Some(&i64::MAX));
/// ```
#[must_use = "a builder does nothing until `build` is called"]
#[derive(Clone)]
pub struct Builder<T, C = Natural> {
    cmp: C,
    multi: bool,
    sentinel: Option<T>,
    seed: u64,
    capacity: usize,
}

impl<T> Builder<T> {
    /// Creates a builder with the default settings.
    pub fn new() -> Self {
        Builder {
            cmp: Natural,
            multi: false,
            sentinel: None,
            seed: DEFAULT_SEED,
            capacity: 0,
        }
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Builder::new()
    }
}

impl<T, C> Builder<T, C> {
    /// Whether the set keeps duplicate elements.
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Value returned by boundary queries when no element qualifies.
    pub fn sentinel(mut self, sentinel: T) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    /// Seed for the random source that balances the tree.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of elements to reserve room for up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Orders elements with `cmp` instead of the current comparator.
    pub fn comparator<F>(self, cmp: F) -> Builder<T, F>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Builder {
            cmp,
            multi: self.multi,
            sentinel: self.sentinel,
            seed: self.seed,
            capacity: self.capacity,
        }
    }

    /// Creates an empty set with these settings.
    pub fn build(self) -> OrderedSet<T, C> {
        debug!(
            "building ordered {} (seed {:#x}, capacity {}, sentinel: {})",
            if self.multi { "multiset" } else { "set" },
            self.seed,
            self.capacity,
            self.sentinel.is_some()
        );

        OrderedSet {
            tree: RawTreap::new(self.cmp, self.seed, self.capacity),
            root: None,
            multi: self.multi,
            sentinel: self.sentinel,
        }
    }

    /// Creates a set with these settings holding the elements of `iter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set = OrderedSet::builder().multi(true).build_from([2, 1, 2]);
    /// assert_eq!(set.to_vec(), [1, 2, 2]);
    /// ```
    pub fn build_from<I>(self, iter: I) -> OrderedSet<T, C>
    where
        I: IntoIterator<Item = T>,
        C: Comparator<T>,
    {
        let mut set = self.build();
        set.extend(iter);
        set
    }
}
