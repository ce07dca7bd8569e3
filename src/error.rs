use thiserror::Error;

/// An index outside `0..len` was used for positional access.
///
/// Returned by [`OrderedSet::element_at`](crate::OrderedSet::element_at) and
/// [`OrderedSet::remove_at`](crate::OrderedSet::remove_at). Looking up a value that is not
/// stored is never an error; only positional misuse is.
///
/// # Examples
///
/// ```
/// use rbst_set::{OrderedSet, OutOfRange};
///
/// let set = OrderedSet::from([10, 20]);
/// assert_eq!(set.element_at(2), Err(OutOfRange { index: 2, len: 2 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("index {index} is out of range for an ordered set of length {len}")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the set at the time of the request.
    pub len: usize,
}
