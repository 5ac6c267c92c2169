//! Elementwise dispatch: transform, masked transform and for_each.

use crate::error::Result;
use crate::iter::Range;

/// `output[i] = f(input[i])`
pub trait TransformDispatch<I: Range, O: Range> {
    /// Transform `input` into the prefix of `output`, returning the number of elements written
    fn transform<F>(input: I, output: O, f: F) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync;
}

/// `output[i] = f(input[i])` wherever `pred(stencil[i])`
///
/// Slots whose stencil fails the predicate are left untouched.
pub trait TransformIfDispatch<I: Range, S: Range, O: Range> {
    /// Masked transform; returns `input`'s length
    fn transform_if<F, P>(input: I, stencil: S, output: O, f: F, pred: P) -> Result<usize>
    where
        F: Fn(I::Item) -> O::Item + Sync,
        P: Fn(S::Item) -> bool + Sync;
}

/// `f(x)` for every element, in unspecified order
pub trait ForEachDispatch<I: Range> {
    /// Apply `f` to every element
    fn for_each<F>(input: I, f: F) -> Result<()>
    where
        F: Fn(I::Item) + Sync;
}
