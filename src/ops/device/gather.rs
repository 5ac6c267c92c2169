//! Device implementation of gathers.

use super::same_device;
use crate::error::Result;
use crate::iter::{
    DeviceSlice, DeviceSliceMut, IndexValue, RandomAccessDeviceTag, input_prefix, output_prefix,
};
use crate::ops::traits::{GatherDispatch, GatherIfDispatch};
use crate::runtime::device::kernels::gather;

impl<M, I, O> GatherDispatch<M, I, O>
    for (RandomAccessDeviceTag, RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    M: DeviceSlice,
    I: DeviceSlice,
    O: DeviceSliceMut<Item = I::Item>,
{
    fn gather(map: M, input: I, mut output: O) -> Result<usize>
    where
        M::Item: IndexValue,
    {
        same_device(map.device(), &[input.device(), output.device()])?;
        let indices = map.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, indices.len(), "gather")?;
        gather::gather(device, indices, input.device_slice(), out)?;
        Ok(indices.len())
    }
}

impl<M, S, I, O> GatherIfDispatch<M, S, I, O>
    for (
        RandomAccessDeviceTag,
        RandomAccessDeviceTag,
        RandomAccessDeviceTag,
        RandomAccessDeviceTag,
    )
where
    M: DeviceSlice,
    S: DeviceSlice,
    I: DeviceSlice,
    O: DeviceSliceMut<Item = I::Item>,
{
    fn gather_if<P>(map: M, stencil: S, input: I, mut output: O, pred: P) -> Result<usize>
    where
        M::Item: IndexValue,
        P: Fn(S::Item) -> bool + Sync,
    {
        same_device(
            map.device(),
            &[stencil.device(), input.device(), output.device()],
        )?;
        let indices = map.device_slice();
        let n = indices.len();
        let stencil = input_prefix(stencil.device_slice(), n, "gather_if")?;
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, n, "gather_if")?;
        gather::gather_if(device, indices, stencil, input.device_slice(), out, &pred)?;
        Ok(n)
    }
}
