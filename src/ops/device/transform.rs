//! Device implementation of elementwise operations.

use super::same_device;
use crate::error::Result;
use crate::iter::{DeviceSlice, DeviceSliceMut, RandomAccessDeviceTag, input_prefix, output_prefix};
use crate::ops::traits::{ForEachDispatch, TransformDispatch, TransformIfDispatch};
use crate::runtime::device::kernels::vectorize::{for_each_index, vectorize, vectorize_in_place};

impl<I, O> TransformDispatch<I, O> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    I: DeviceSlice,
    O: DeviceSliceMut,
{
    fn transform<F>(input: I, mut output: O, f: F) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync,
    {
        same_device(input.device(), &[output.device()])?;
        let src = input.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "transform")?;
        vectorize(device, out, |i| f(src[i]))?;
        Ok(src.len())
    }
}

impl<I, S, O> TransformIfDispatch<I, S, O>
    for (RandomAccessDeviceTag, RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    I: DeviceSlice,
    S: DeviceSlice,
    O: DeviceSliceMut,
{
    fn transform_if<F, P>(input: I, stencil: S, mut output: O, f: F, pred: P) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync,
        P: Fn(S::Item) -> bool + Sync,
    {
        same_device(input.device(), &[stencil.device(), output.device()])?;
        let src = input.device_slice();
        let n = src.len();
        let stencil = input_prefix(stencil.device_slice(), n, "transform_if")?;
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, n, "transform_if")?;
        vectorize_in_place(device, out, |i, slot| {
            if pred(stencil[i]) {
                *slot = f(src[i]);
            }
        })?;
        Ok(n)
    }
}

impl<I: DeviceSlice> ForEachDispatch<I> for RandomAccessDeviceTag {
    fn for_each<F>(input: I, f: F) -> Result<()>
    where
        F: Fn(I::Item) + Sync,
    {
        let data = input.device_slice();
        for_each_index(input.device(), data.len(), |i| f(data[i]))
    }
}
