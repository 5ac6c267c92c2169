//! Reduction dispatch.

use crate::error::Result;
use crate::iter::Range;

/// Reduction of one range
///
/// Every reduction entry point (`reduce`, `transform_reduce`, `min_element`,
/// `max_element`) is an indexed transform-reduce: `unary_op` sees each
/// element together with its position, and the transformed values are
/// combined with `binary_op` starting from `init`.
///
/// `binary_op` must be associative. The combination order is unspecified on
/// parallel backends, so results of non-commutative or floating-point
/// operators may differ from a sequential fold (floating-point only by
/// reassociation).
pub trait ReduceDispatch<I: Range> {
    /// Combine `init` with `unary_op(i, input[i])` for every element
    fn transform_reduce_indexed<O, U, F>(input: I, unary_op: U, init: O, binary_op: F) -> Result<O>
    where
        O: Copy + Send + Sync,
        U: Fn(usize, I::Item) -> O + Sync,
        F: Fn(O, O) -> O + Sync;
}
