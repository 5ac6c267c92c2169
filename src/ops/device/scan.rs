//! Device implementation of prefix scans.

use super::same_device;
use crate::error::Result;
use crate::iter::{DeviceSlice, DeviceSliceMut, RandomAccessDeviceTag, output_prefix};
use crate::ops::traits::ScanDispatch;
use crate::runtime::device::kernels::scan;

impl<I, O> ScanDispatch<I, O> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    I: DeviceSlice,
    O: DeviceSliceMut,
{
    fn transform_inclusive_scan<U, F>(input: I, mut output: O, unary_op: U, op: F) -> Result<usize>
    where
        U: Fn(I::Item) -> O::Item + Sync,
        F: Fn(O::Item, O::Item) -> O::Item + Sync,
    {
        same_device(input.device(), &[output.device()])?;
        let src = input.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "inclusive_scan")?;
        scan::transform_inclusive_scan(device, src, out, unary_op, op)?;
        Ok(src.len())
    }

    fn transform_exclusive_scan<U, F>(
        input: I,
        mut output: O,
        unary_op: U,
        init: O::Item,
        op: F,
    ) -> Result<usize>
    where
        U: Fn(I::Item) -> O::Item + Sync,
        F: Fn(O::Item, O::Item) -> O::Item + Sync,
    {
        same_device(input.device(), &[output.device()])?;
        let src = input.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "exclusive_scan")?;
        scan::transform_exclusive_scan(device, src, out, unary_op, init, op)?;
        Ok(src.len())
    }
}
