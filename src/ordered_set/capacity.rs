use super::OrderedSet;

impl<T> OrderedSet<T> {
    /// Creates an empty strict set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbst_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedSet::builder().capacity(capacity).build()
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Returns how many elements the set can hold before its node storage grows.
    ///
    /// Slots released by removals are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
