use core::cmp::Ordering;

/// A total order over `T`, supplied when an [`OrderedSet`](crate::OrderedSet) is built.
///
/// Every `Fn(&T, &T) -> Ordering` is a comparator, so closures can be passed directly:
///
/// ```
/// use rbst_set::OrderedSet;
///
/// let mut set = OrderedSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.to_vec(), [3, 2, 1]);
/// ```
///
/// It is a logic error for the order to change while elements are stored. The set will not
/// become memory-unsafe, but queries may return arbitrary results.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The order given by `T`'s [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
