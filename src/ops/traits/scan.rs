//! Prefix-scan dispatch.

use crate::error::Result;
use crate::iter::Range;

/// Inclusive and exclusive prefix scans
///
/// `op` must be associative; it need not be commutative, operands are always
/// combined in input order.
pub trait ScanDispatch<I: Range, O: Range> {
    /// `output[i] = op(unary_op(input[0]), .., unary_op(input[i]))`
    fn transform_inclusive_scan<U, F>(input: I, output: O, unary_op: U, op: F) -> Result<usize>
    where
        U: Fn(I::Item) -> O::Item + Sync,
        F: Fn(O::Item, O::Item) -> O::Item + Sync;

    /// `output[0] = init`, `output[i] = op(init, op(unary_op(input[0]), .., unary_op(input[i - 1])))`
    fn transform_exclusive_scan<U, F>(
        input: I,
        output: O,
        unary_op: U,
        init: O::Item,
        op: F,
    ) -> Result<usize>
    where
        U: Fn(I::Item) -> O::Item + Sync,
        F: Fn(O::Item, O::Item) -> O::Item + Sync;
}
