//! Partitioning.
//!
//! Every partition is stable: both the selected and the rejected elements
//! keep their input order.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::{PartitionCopyDispatch, PartitionDispatch};

/// Move the elements satisfying `pred` to the front, returning how many there are
pub fn stable_partition<R, P>(range: R, pred: P) -> Result<usize>
where
    R: Range,
    R::Tag: PartitionDispatch<R>,
    P: Fn(R::Item) -> bool + Sync,
{
    <R::Tag as PartitionDispatch<R>>::stable_partition(range, pred)
}

/// Same as [`stable_partition`]
///
/// ```
/// let mut v = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(tandem::partition(&mut v, |x| x % 3 == 0)?, 2);
/// assert_eq!(v, [3, 6, 1, 2, 4, 5]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn partition<R, P>(range: R, pred: P) -> Result<usize>
where
    R: Range,
    R::Tag: PartitionDispatch<R>,
    P: Fn(R::Item) -> bool + Sync,
{
    stable_partition(range, pred)
}

/// Write the elements of `input` satisfying `pred`, then the rest, into `output`
///
/// Returns the number of elements satisfying `pred`.
pub fn stable_partition_copy<I, O, P>(input: I, output: O, pred: P) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): PartitionCopyDispatch<I, O>,
    P: Fn(I::Item) -> bool + Sync,
{
    <(I::Tag, O::Tag) as PartitionCopyDispatch<I, O>>::stable_partition_copy(input, output, pred)
}

/// Same as [`stable_partition_copy`]
pub fn partition_copy<I, O, P>(input: I, output: O, pred: P) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): PartitionCopyDispatch<I, O>,
    P: Fn(I::Item) -> bool + Sync,
{
    stable_partition_copy(input, output, pred)
}
