//! Prefix scans.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::ScanDispatch;

/// `output[i] = op(input[0], .., input[i])`, returning the number of elements written
///
/// `op` must be associative; operands are always combined in input order.
///
/// ```
/// let mut out = vec![0; 4];
/// tandem::inclusive_scan(&vec![1, 2, 3, 4], &mut out, |a, b| a + b)?;
/// assert_eq!(out, [1, 3, 6, 10]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn inclusive_scan<I, O, F>(input: I, output: O, op: F) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): ScanDispatch<I, O>,
    F: Fn(I::Item, I::Item) -> I::Item + Sync,
{
    <(I::Tag, O::Tag) as ScanDispatch<I, O>>::transform_inclusive_scan(input, output, |x| x, op)
}

/// `output[0] = init`, `output[i] = op(init, op(input[0], .., input[i - 1]))`
pub fn exclusive_scan<I, O, F>(input: I, output: O, init: I::Item, op: F) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): ScanDispatch<I, O>,
    F: Fn(I::Item, I::Item) -> I::Item + Sync,
{
    <(I::Tag, O::Tag) as ScanDispatch<I, O>>::transform_exclusive_scan(
        input,
        output,
        |x| x,
        init,
        op,
    )
}

/// Inclusive scan of `unary_op(input[i])`
pub fn transform_inclusive_scan<I, O, U, F>(input: I, output: O, unary_op: U, op: F) -> Result<usize>
where
    I: Range,
    O: Range,
    (I::Tag, O::Tag): ScanDispatch<I, O>,
    U: Fn(I::Item) -> O::Item + Sync,
    F: Fn(O::Item, O::Item) -> O::Item + Sync,
{
    <(I::Tag, O::Tag) as ScanDispatch<I, O>>::transform_inclusive_scan(input, output, unary_op, op)
}

/// Exclusive scan of `unary_op(input[i])` seeded with `init`
pub fn transform_exclusive_scan<I, O, U, F>(
    input: I,
    output: O,
    unary_op: U,
    init: O::Item,
    op: F,
) -> Result<usize>
where
    I: Range,
    O: Range,
    (I::Tag, O::Tag): ScanDispatch<I, O>,
    U: Fn(I::Item) -> O::Item + Sync,
    F: Fn(O::Item, O::Item) -> O::Item + Sync,
{
    <(I::Tag, O::Tag) as ScanDispatch<I, O>>::transform_exclusive_scan(
        input, output, unary_op, init, op,
    )
}
