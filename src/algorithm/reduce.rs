//! Reductions and extremum searches.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::ReduceDispatch;
use std::cmp::Ordering;

/// Fold every element into `init` with `op`
///
/// `op` must be associative and commutative; the combination order is
/// unspecified. Floating-point results may differ from a sequential fold by
/// reassociation.
///
/// ```
/// assert_eq!(tandem::reduce(&vec![1, 2, 3, 4, 5], 0, |a, b| a + b)?, 15);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn reduce<I, F>(input: I, init: I::Item, op: F) -> Result<I::Item>
where
    I: Range,
    I::Tag: ReduceDispatch<I>,
    F: Fn(I::Item, I::Item) -> I::Item + Sync,
{
    <I::Tag as ReduceDispatch<I>>::transform_reduce_indexed(input, |_, x| x, init, op)
}

/// Fold `unary_op(x)` for every element into `init` with `binary_op`
pub fn transform_reduce<I, O, U, F>(input: I, unary_op: U, init: O, binary_op: F) -> Result<O>
where
    I: Range,
    I::Tag: ReduceDispatch<I>,
    O: Copy + Send + Sync,
    U: Fn(I::Item) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    <I::Tag as ReduceDispatch<I>>::transform_reduce_indexed(
        input,
        |_, x| unary_op(x),
        init,
        binary_op,
    )
}

/// The candidate `comp` prefers, the lower index on ties
///
/// Ranking by index keeps the result independent of combination order.
#[inline]
fn pick<T, C>(a: Option<(usize, T)>, b: Option<(usize, T)>, comp: &C) -> Option<(usize, T)>
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => match comp(&y.1, &x.1) {
            Ordering::Less => Some(y),
            Ordering::Equal if y.0 < x.0 => Some(y),
            _ => Some(x),
        },
        (x, None) => x,
        (None, y) => y,
    }
}

/// Index of the first smallest element under `comp`, `None` when empty
pub fn min_element_by<I, C>(input: I, comp: C) -> Result<Option<usize>>
where
    I: Range,
    I::Tag: ReduceDispatch<I>,
    C: Fn(&I::Item, &I::Item) -> Ordering + Sync,
{
    let best = <I::Tag as ReduceDispatch<I>>::transform_reduce_indexed(
        input,
        |i, x| Some((i, x)),
        None,
        |a, b| pick(a, b, &comp),
    )?;
    Ok(best.map(|(i, _)| i))
}

/// Index of the first largest element under `comp`, `None` when empty
pub fn max_element_by<I, C>(input: I, comp: C) -> Result<Option<usize>>
where
    I: Range,
    I::Tag: ReduceDispatch<I>,
    C: Fn(&I::Item, &I::Item) -> Ordering + Sync,
{
    min_element_by(input, move |a, b| comp(b, a))
}

/// Index of the first smallest element, `None` when empty
///
/// Incomparable pairs (NaN) count as equal.
///
/// ```
/// assert_eq!(tandem::min_element(&vec![3, 1, 4, 1, 5])?, Some(1));
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn min_element<I>(input: I) -> Result<Option<usize>>
where
    I: Range,
    I::Item: PartialOrd,
    I::Tag: ReduceDispatch<I>,
{
    min_element_by(input, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Index of the first largest element, `None` when empty
pub fn max_element<I>(input: I) -> Result<Option<usize>>
where
    I: Range,
    I::Item: PartialOrd,
    I::Tag: ReduceDispatch<I>,
{
    max_element_by(input, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}
