//! Host implementation of prefix scans.
//!
//! Scans are serial on the host for every range category.

use super::drain;
use crate::error::Result;
use crate::iter::{
    BidirectionalHostTag, ForwardHostTag, HostInput, HostSlice, HostSliceMut, RandomAccessHostTag,
    output_prefix,
};
use crate::ops::traits::ScanDispatch;
use crate::runtime::host::kernels;

macro_rules! impl_sequential_scan {
    ($($tag:ty),*) => {
        $(
            impl<I, O> ScanDispatch<I, O> for ($tag, RandomAccessHostTag)
            where
                I: HostInput,
                O: HostSliceMut,
            {
                fn transform_inclusive_scan<U, F>(
                    input: I,
                    mut output: O,
                    unary_op: U,
                    op: F,
                ) -> Result<usize>
                where
                    U: Fn(I::Item) -> O::Item + Sync,
                    F: Fn(O::Item, O::Item) -> O::Item + Sync,
                {
                    let items = drain(input);
                    let out = output_prefix(output.host_slice_mut(), items.len(), "inclusive_scan")?;
                    Ok(kernels::inclusive_scan(items.into_iter().map(unary_op), out, op))
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
                    let items = drain(input);
                    let out = output_prefix(output.host_slice_mut(), items.len(), "exclusive_scan")?;
                    Ok(kernels::exclusive_scan(items.into_iter().map(unary_op), out, init, op))
                }
            }
        )*
    };
}

impl_sequential_scan!(ForwardHostTag, BidirectionalHostTag);

impl<I, O> ScanDispatch<I, O> for (RandomAccessHostTag, RandomAccessHostTag)
where
    I: HostSlice,
    O: HostSliceMut,
{
    fn transform_inclusive_scan<U, F>(input: I, mut output: O, unary_op: U, op: F) -> Result<usize>
    where
        U: Fn(I::Item) -> O::Item + Sync,
        F: Fn(O::Item, O::Item) -> O::Item + Sync,
    {
        let src = input.host_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "inclusive_scan")?;
        Ok(kernels::inclusive_scan(src.iter().map(|&x| unary_op(x)), out, op))
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
        let src = input.host_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "exclusive_scan")?;
        Ok(kernels::exclusive_scan(src.iter().map(|&x| unary_op(x)), out, init, op))
    }
}
