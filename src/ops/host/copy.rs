//! Host-to-host copies.

use super::drain;
use crate::error::Result;
use crate::iter::{
    BidirectionalHostTag, ForwardHostTag, HostInput, HostSlice, HostSliceMut, RandomAccessHostTag,
    output_prefix,
};
use crate::ops::traits::CopyDispatch;
use crate::runtime::host::kernels;

macro_rules! impl_sequential_copy {
    ($($tag:ty),*) => {
        $(
            impl<I, O> CopyDispatch<I, O> for ($tag, RandomAccessHostTag)
            where
                I: HostInput,
                O: HostSliceMut<Item = I::Item>,
            {
                fn copy(input: I, mut output: O) -> Result<usize> {
                    let items = drain(input);
                    let out = output_prefix(output.host_slice_mut(), items.len(), "copy")?;
                    out.copy_from_slice(&items);
                    Ok(items.len())
                }
            }
        )*
    };
}

impl_sequential_copy!(ForwardHostTag, BidirectionalHostTag);

impl<I, O> CopyDispatch<I, O> for (RandomAccessHostTag, RandomAccessHostTag)
where
    I: HostSlice,
    O: HostSliceMut<Item = I::Item>,
{
    fn copy(input: I, mut output: O) -> Result<usize> {
        let src = input.host_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "copy")?;
        kernels::copy(src, out);
        Ok(src.len())
    }
}
