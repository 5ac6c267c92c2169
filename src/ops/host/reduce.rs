//! Host implementation of reductions.

use crate::error::Result;
use crate::iter::{
    BidirectionalHostTag, ForwardHostTag, HostInput, HostSlice, RandomAccessHostTag,
};
use crate::ops::traits::ReduceDispatch;
use crate::runtime::host::kernels;

macro_rules! impl_sequential_reduce {
    ($($tag:ty),*) => {
        $(
            impl<I: HostInput> ReduceDispatch<I> for $tag {
                fn transform_reduce_indexed<O, U, F>(
                    input: I,
                    unary_op: U,
                    init: O,
                    binary_op: F,
                ) -> Result<O>
                where
                    O: Copy + Send + Sync,
                    U: Fn(usize, I::Item) -> O + Sync,
                    F: Fn(O, O) -> O + Sync,
                {
                    Ok(kernels::serial_transform_reduce(
                        input.into_host_iter(),
                        unary_op,
                        init,
                        binary_op,
                    ))
                }
            }
        )*
    };
}

impl_sequential_reduce!(ForwardHostTag, BidirectionalHostTag);

impl<I: HostSlice> ReduceDispatch<I> for RandomAccessHostTag {
    fn transform_reduce_indexed<O, U, F>(input: I, unary_op: U, init: O, binary_op: F) -> Result<O>
    where
        O: Copy + Send + Sync,
        U: Fn(usize, I::Item) -> O + Sync,
        F: Fn(O, O) -> O + Sync,
    {
        Ok(kernels::transform_reduce_indexed(
            input.host_slice(),
            unary_op,
            init,
            binary_op,
        ))
    }
}
