//! Copies that touch device memory, including host <-> device transfers.

use crate::error::Result;
use crate::iter::{
    BidirectionalHostTag, DeviceSlice, DeviceSliceMut, ForwardHostTag, HostInput, HostSlice,
    HostSliceMut, RandomAccessDeviceTag, RandomAccessHostTag, output_prefix,
};
use crate::ops::host::drain;
use crate::ops::traits::CopyDispatch;
use crate::runtime::device::kernels::vectorize::vectorize;

macro_rules! impl_sequential_upload {
    ($($tag:ty),*) => {
        $(
            impl<I, O> CopyDispatch<I, O> for ($tag, RandomAccessDeviceTag)
            where
                I: HostInput,
                O: DeviceSliceMut<Item = I::Item>,
            {
                fn copy(input: I, mut output: O) -> Result<usize> {
                    let items = drain(input);
                    let (_, out) = output.split_device_mut();
                    let out = output_prefix(out, items.len(), "copy")?;
                    log::trace!("host -> device: {} elements", items.len());
                    out.copy_from_slice(&items);
                    Ok(items.len())
                }
            }
        )*
    };
}

impl_sequential_upload!(ForwardHostTag, BidirectionalHostTag);

impl<I, O> CopyDispatch<I, O> for (RandomAccessHostTag, RandomAccessDeviceTag)
where
    I: HostSlice,
    O: DeviceSliceMut<Item = I::Item>,
{
    fn copy(input: I, mut output: O) -> Result<usize> {
        let src = input.host_slice();
        let (_, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "copy")?;
        log::trace!("host -> device: {} elements", src.len());
        out.copy_from_slice(src);
        Ok(src.len())
    }
}

impl<I, O> CopyDispatch<I, O> for (RandomAccessDeviceTag, RandomAccessHostTag)
where
    I: DeviceSlice,
    O: HostSliceMut<Item = I::Item>,
{
    fn copy(input: I, mut output: O) -> Result<usize> {
        let src = input.device_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "copy")?;
        log::trace!("device -> host: {} elements", src.len());
        out.copy_from_slice(src);
        Ok(src.len())
    }
}

/// Device-to-device copies run on the destination device, which may differ
/// from the source device
impl<I, O> CopyDispatch<I, O> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    I: DeviceSlice,
    O: DeviceSliceMut<Item = I::Item>,
{
    fn copy(input: I, mut output: O) -> Result<usize> {
        let src = input.device_slice();
        let (device, out) = output.split_device_mut();
        let out = output_prefix(out, src.len(), "copy")?;
        if !device.is_same(input.device()) {
            log::trace!("device -> device: {} elements", src.len());
        }
        vectorize(device, out, |i| src[i])?;
        Ok(src.len())
    }
}
