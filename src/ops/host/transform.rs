//! Host implementation of elementwise operations.

use super::drain;
use crate::error::Result;
use crate::iter::{
    BidirectionalHostTag, ForwardHostTag, HostInput, HostSlice, HostSliceMut, RandomAccessHostTag,
    input_prefix, output_prefix,
};
use crate::ops::traits::{ForEachDispatch, TransformDispatch, TransformIfDispatch};
use crate::runtime::host::kernels;

macro_rules! impl_sequential_elementwise {
    ($($tag:ty),*) => {
        $(
            impl<I, O> TransformDispatch<I, O> for ($tag, RandomAccessHostTag)
            where
                I: HostInput,
                O: HostSliceMut,
            {
                fn transform<F>(input: I, mut output: O, f: F) -> Result<usize>
                where
                    F: Fn(I::Item) -> O::Item + Sync,
                {
                    let items = drain(input);
                    let out = output_prefix(output.host_slice_mut(), items.len(), "transform")?;
                    for (slot, &x) in out.iter_mut().zip(&items) {
                        *slot = f(x);
                    }
                    Ok(items.len())
                }
            }

            impl<I: HostInput> ForEachDispatch<I> for $tag {
                fn for_each<F>(input: I, f: F) -> Result<()>
                where
                    F: Fn(I::Item) + Sync,
                {
                    input.into_host_iter().for_each(f);
                    Ok(())
                }
            }
        )*
    };
}

impl_sequential_elementwise!(ForwardHostTag, BidirectionalHostTag);

impl<I, O> TransformDispatch<I, O> for (RandomAccessHostTag, RandomAccessHostTag)
where
    I: HostSlice,
    O: HostSliceMut,
{
    fn transform<F>(input: I, mut output: O, f: F) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync,
    {
        let src = input.host_slice();
        let out = output_prefix(output.host_slice_mut(), src.len(), "transform")?;
        kernels::vectorize(out, |i| f(src[i]));
        Ok(src.len())
    }
}

impl<I, S, O> TransformIfDispatch<I, S, O>
    for (RandomAccessHostTag, RandomAccessHostTag, RandomAccessHostTag)
where
    I: HostSlice,
    S: HostSlice,
    O: HostSliceMut,
{
    fn transform_if<F, P>(input: I, stencil: S, mut output: O, f: F, pred: P) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync,
        P: Fn(S::Item) -> bool + Sync,
    {
        let src = input.host_slice();
        let n = src.len();
        let stencil = input_prefix(stencil.host_slice(), n, "transform_if")?;
        let out = output_prefix(output.host_slice_mut(), n, "transform_if")?;
        kernels::vectorize_in_place(out, |i, slot| {
            if pred(stencil[i]) {
                *slot = f(src[i]);
            }
        });
        Ok(n)
    }
}

impl<I: HostSlice> ForEachDispatch<I> for RandomAccessHostTag {
    fn for_each<F>(input: I, f: F) -> Result<()>
    where
        F: Fn(I::Item) + Sync,
    {
        kernels::for_each(input.host_slice(), f);
        Ok(())
    }
}
