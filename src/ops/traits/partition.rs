//! Partition dispatch.

use crate::error::Result;
use crate::iter::Range;

/// Stable in-place partition
pub trait PartitionDispatch<R: Range> {
    /// Move every element satisfying `pred` before every element that does not
    ///
    /// Both groups keep their relative order. Returns the number of elements
    /// satisfying `pred`.
    fn stable_partition<P>(range: R, pred: P) -> Result<usize>
    where
        P: Fn(R::Item) -> bool + Sync;
}

/// Stable partition into a separate output
pub trait PartitionCopyDispatch<I: Range, O: Range<Item = I::Item>> {
    /// Write the selected elements of `input`, then the rest, into `output`
    fn stable_partition_copy<P>(input: I, output: O, pred: P) -> Result<usize>
    where
        P: Fn(I::Item) -> bool + Sync;
}
