//! Host implementation of gathers.

use crate::error::Result;
use crate::iter::{HostSlice, HostSliceMut, IndexValue, RandomAccessHostTag, input_prefix, output_prefix};
use crate::ops::traits::{GatherDispatch, GatherIfDispatch};
use crate::runtime::host::kernels;

impl<M, I, O> GatherDispatch<M, I, O>
    for (RandomAccessHostTag, RandomAccessHostTag, RandomAccessHostTag)
where
    M: HostSlice,
    I: HostSlice,
    O: HostSliceMut<Item = I::Item>,
{
    fn gather(map: M, input: I, mut output: O) -> Result<usize>
    where
        M::Item: IndexValue,
    {
        let map = map.host_slice();
        let out = output_prefix(output.host_slice_mut(), map.len(), "gather")?;
        kernels::gather(map, input.host_slice(), out, |_| true)?;
        Ok(map.len())
    }
}

impl<M, S, I, O> GatherIfDispatch<M, S, I, O>
    for (
        RandomAccessHostTag,
        RandomAccessHostTag,
        RandomAccessHostTag,
        RandomAccessHostTag,
    )
where
    M: HostSlice,
    S: HostSlice,
    I: HostSlice,
    O: HostSliceMut<Item = I::Item>,
{
    fn gather_if<P>(map: M, stencil: S, input: I, mut output: O, pred: P) -> Result<usize>
    where
        M::Item: IndexValue,
        P: Fn(S::Item) -> bool + Sync,
    {
        let map = map.host_slice();
        let n = map.len();
        let stencil = input_prefix(stencil.host_slice(), n, "gather_if")?;
        let out = output_prefix(output.host_slice_mut(), n, "gather_if")?;
        kernels::gather(map, input.host_slice(), out, |i| pred(stencil[i]))?;
        Ok(n)
    }
}
