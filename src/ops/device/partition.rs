//! Device implementation of partitions.

use super::same_device;
use crate::error::Result;
use crate::iter::{DeviceSlice, DeviceSliceMut, RandomAccessDeviceTag, output_prefix};
use crate::ops::traits::{PartitionCopyDispatch, PartitionDispatch};
use crate::runtime::device::kernels::partition;

impl<R: DeviceSliceMut> PartitionDispatch<R> for RandomAccessDeviceTag {
    fn stable_partition<P>(mut range: R, pred: P) -> Result<usize>
    where
        P: Fn(R::Item) -> bool + Sync,
    {
        let (device, data) = range.split_device_mut();
        partition::stable_partition(device, data, &pred)
    }
}

impl<I, O> PartitionCopyDispatch<I, O> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    I: DeviceSlice,
    O: DeviceSliceMut<Item = I::Item>,
{
    fn stable_partition_copy<P>(input: I, mut output: O, pred: P) -> Result<usize>
    where
        P: Fn(I::Item) -> bool + Sync,
    {
        same_device(input.device(), &[output.device()])?;
        let src = input.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "stable_partition_copy")?;
        partition::stable_partition_copy(device, src, out, &pred)
    }
}
