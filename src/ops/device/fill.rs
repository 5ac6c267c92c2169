//! Device implementation of in-place generation.

use crate::error::Result;
use crate::iter::{DeviceSliceMut, RandomAccessDeviceTag};
use crate::ops::traits::FillDispatch;
use crate::runtime::device::DeviceElement;
use crate::runtime::device::kernels::fill;
use crate::runtime::device::kernels::vectorize::{vectorize, vectorize_in_place};

impl<O> FillDispatch<O> for RandomAccessDeviceTag
where
    O: DeviceSliceMut,
    O::Item: DeviceElement,
{
    fn len(output: &O) -> usize {
        output.device_slice().len()
    }

    fn fill(mut output: O, value: O::Item) -> Result<()> {
        let (device, data) = output.split_device_mut();
        fill::fill(device, data, value)
    }

    fn tabulate<F>(mut output: O, f: F) -> Result<()>
    where
        F: Fn(usize) -> O::Item + Sync,
    {
        let (device, data) = output.split_device_mut();
        vectorize(device, data, f)
    }

    fn update<F>(mut output: O, f: F) -> Result<()>
    where
        F: Fn(usize, &mut O::Item) + Sync,
    {
        let (device, data) = output.split_device_mut();
        vectorize_in_place(device, data, f)
    }
}
