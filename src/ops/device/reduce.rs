//! Device implementation of reductions.

use crate::error::Result;
use crate::iter::{DeviceSlice, RandomAccessDeviceTag};
use crate::ops::traits::ReduceDispatch;
use crate::runtime::device::kernels::reduce;

impl<I: DeviceSlice> ReduceDispatch<I> for RandomAccessDeviceTag {
    fn transform_reduce_indexed<O, U, F>(input: I, unary_op: U, init: O, binary_op: F) -> Result<O>
    where
        O: Copy + Send + Sync,
        U: Fn(usize, I::Item) -> O + Sync,
        F: Fn(O, O) -> O + Sync,
    {
        reduce::transform_reduce_indexed(
            input.device(),
            input.device_slice(),
            unary_op,
            init,
            binary_op,
        )
    }
}
