//! Indexed gathers.

use crate::error::Result;
use crate::iter::{IndexValue, Range};
use crate::ops::traits::{GatherDispatch, GatherIfDispatch};

/// `output[i] = input[map[i]]`, returning the length of `map`
///
/// Fails with [`Error::IndexOutOfBounds`](crate::error::Error::IndexOutOfBounds)
/// before writing anything if an index cannot address `input`.
pub fn gather<M, I, O>(map: M, input: I, output: O) -> Result<usize>
where
    M: Range,
    M::Item: IndexValue,
    I: Range,
    O: Range<Item = I::Item>,
    (M::Tag, I::Tag, O::Tag): GatherDispatch<M, I, O>,
{
    <(M::Tag, I::Tag, O::Tag) as GatherDispatch<M, I, O>>::gather(map, input, output)
}

/// `output[i] = input[map[i]]` wherever `pred(stencil[i])`
///
/// Indices of unselected slots are neither checked nor read.
pub fn gather_if<M, S, I, O, P>(map: M, stencil: S, input: I, output: O, pred: P) -> Result<usize>
where
    M: Range,
    M::Item: IndexValue,
    S: Range,
    I: Range,
    O: Range<Item = I::Item>,
    (M::Tag, S::Tag, I::Tag, O::Tag): GatherIfDispatch<M, S, I, O>,
    P: Fn(S::Item) -> bool + Sync,
{
    <(M::Tag, S::Tag, I::Tag, O::Tag) as GatherIfDispatch<M, S, I, O>>::gather_if(
        map, stencil, input, output, pred,
    )
}
