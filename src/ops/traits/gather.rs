//! Gather dispatch.

use crate::error::Result;
use crate::iter::{IndexValue, Range};

/// `output[i] = input[map[i]]`
pub trait GatherDispatch<M: Range, I: Range, O: Range<Item = I::Item>> {
    /// Gather through `map`, returning `map`'s length
    ///
    /// Every index is checked before anything is written.
    fn gather(map: M, input: I, output: O) -> Result<usize>
    where
        M::Item: IndexValue;
}

/// `output[i] = input[map[i]]` wherever `pred(stencil[i])`
pub trait GatherIfDispatch<M: Range, S: Range, I: Range, O: Range<Item = I::Item>> {
    /// Masked gather; indices of unselected slots are never read
    fn gather_if<P>(map: M, stencil: S, input: I, output: O, pred: P) -> Result<usize>
    where
        M::Item: IndexValue,
        P: Fn(S::Item) -> bool + Sync;
}
