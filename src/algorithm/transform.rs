//! Elementwise transforms and replacement.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::{FillDispatch, ForEachDispatch, TransformDispatch, TransformIfDispatch};

/// `output[i] = f(input[i])`, returning the number of elements written
pub fn transform<I, O, F>(input: I, output: O, f: F) -> Result<usize>
where
    I: Range,
    O: Range,
    (I::Tag, O::Tag): TransformDispatch<I, O>,
    F: Fn(I::Item) -> O::Item + Sync,
{
    <(I::Tag, O::Tag) as TransformDispatch<I, O>>::transform(input, output, f)
}

/// `output[i] = f(input[i])` wherever `pred(stencil[i])`
pub fn transform_if<I, S, O, F, P>(input: I, stencil: S, output: O, f: F, pred: P) -> Result<usize>
where
    I: Range,
    S: Range,
    O: Range,
    (I::Tag, S::Tag, O::Tag): TransformIfDispatch<I, S, O>,
    F: Fn(I::Item) -> O::Item + Sync,
    P: Fn(S::Item) -> bool + Sync,
{
    <(I::Tag, S::Tag, O::Tag) as TransformIfDispatch<I, S, O>>::transform_if(
        input, stencil, output, f, pred,
    )
}

/// Call `f` on every element, in unspecified order
pub fn for_each<I, F>(input: I, f: F) -> Result<()>
where
    I: Range,
    I::Tag: ForEachDispatch<I>,
    F: Fn(I::Item) + Sync,
{
    <I::Tag as ForEachDispatch<I>>::for_each(input, f)
}

/// Replace every element equal to `old_value` with `new_value`
pub fn replace<R>(range: R, old_value: R::Item, new_value: R::Item) -> Result<()>
where
    R: Range,
    R::Item: PartialEq,
    R::Tag: FillDispatch<R>,
{
    replace_if(range, move |x| x == old_value, new_value)
}

/// Replace every element satisfying `pred` with `new_value`
pub fn replace_if<R, P>(range: R, pred: P, new_value: R::Item) -> Result<()>
where
    R: Range,
    R::Tag: FillDispatch<R>,
    P: Fn(R::Item) -> bool + Sync,
{
    <R::Tag as FillDispatch<R>>::update(range, |_, slot| {
        if pred(*slot) {
            *slot = new_value;
        }
    })
}

/// Copy `input` into `output`, replacing elements equal to `old_value` with `new_value`
pub fn replace_copy<I, O>(input: I, output: O, old_value: I::Item, new_value: I::Item) -> Result<usize>
where
    I: Range,
    I::Item: PartialEq,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): TransformDispatch<I, O>,
{
    replace_copy_if(input, output, move |x| x == old_value, new_value)
}

/// Copy `input` into `output`, replacing elements satisfying `pred` with `new_value`
pub fn replace_copy_if<I, O, P>(input: I, output: O, pred: P, new_value: I::Item) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): TransformDispatch<I, O>,
    P: Fn(I::Item) -> bool + Sync,
{
    transform(input, output, move |x| if pred(x) { new_value } else { x })
}
