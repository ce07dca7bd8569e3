/// A zero-based position in the sorted order of an [`OrderedSet`](crate::OrderedSet).
///
/// Indexing with a `Rank` panics when the position is out of range; use
/// [`element_at`](crate::OrderedSet::element_at) for a fallible lookup.
///
/// # Examples
///
/// ```
/// use rbst_set::{OrderedSet, Rank};
///
/// let set = OrderedSet::from([30, 10, 20]);
/// assert_eq!(set[Rank(0)], 10);
/// assert_eq!(set[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
