//! Host implementation of partitions.

use crate::error::Result;
use crate::iter::{HostSlice, HostSliceMut, RandomAccessHostTag, output_prefix};
use crate::ops::traits::{PartitionCopyDispatch, PartitionDispatch};
use crate::runtime::host::kernels;

impl<R: HostSliceMut> PartitionDispatch<R> for RandomAccessHostTag {
    fn stable_partition<P>(mut range: R, pred: P) -> Result<usize>
    where
        P: Fn(R::Item) -> bool + Sync,
    {
        let data = range.host_slice_mut();
        let staged = data.to_vec();
        Ok(kernels::stable_partition_copy(&staged, data, pred))
    }
}

impl<I, O> PartitionCopyDispatch<I, O> for (RandomAccessHostTag, RandomAccessHostTag)
where
    I: HostSlice,
    O: HostSliceMut<Item = I::Item>,
{
    fn stable_partition_copy<P>(input: I, mut output: O, pred: P) -> Result<usize>
    where
        P: Fn(I::Item) -> bool + Sync,
    {
        let src = input.host_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "stable_partition_copy")?;
        Ok(kernels::stable_partition_copy(src, out, pred))
    }
}
