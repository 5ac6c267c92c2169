//! Filling and sequence generation.

use crate::error::{Error, Result};
use crate::iter::Range;
use crate::ops::traits::FillDispatch;
use num_traits::NumCast;
use std::ops::{Add, Mul};

/// Set every element of `output` to `value`
///
/// On the device, 1-, 2- and 4-byte elements are written as aligned 64-bit
/// words wherever possible.
pub fn fill<O>(output: O, value: O::Item) -> Result<()>
where
    O: Range,
    O::Tag: FillDispatch<O>,
{
    <O::Tag as FillDispatch<O>>::fill(output, value)
}

/// `output[i] = init + step * i`
///
/// Fails with [`Error::InvalidArgument`] when the largest index is not
/// representable in the element type.
///
/// ```
/// let mut v = vec![0.0f32; 4];
/// tandem::sequence(&mut v, 1.0, 0.5)?;
/// assert_eq!(v, [1.0, 1.5, 2.0, 2.5]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn sequence<O>(output: O, init: O::Item, step: O::Item) -> Result<()>
where
    O: Range,
    O::Item: NumCast + Add<Output = O::Item> + Mul<Output = O::Item>,
    O::Tag: FillDispatch<O>,
{
    let n = <O::Tag as FillDispatch<O>>::len(&output);
    if n > 0 && <O::Item as NumCast>::from(n - 1).is_none() {
        return Err(Error::invalid_argument(
            "output",
            format!("index {} is not representable in the element type", n - 1),
        ));
    }
    // every index below n converts, checked above
    <O::Tag as FillDispatch<O>>::tabulate(output, move |i| {
        <O::Item as NumCast>::from(i).map_or(init, |k| init + step * k)
    })
}

/// `output[i] = i`
pub fn range<O>(output: O) -> Result<()>
where
    O: Range,
    O::Item: NumCast + Add<Output = O::Item> + Mul<Output = O::Item>,
    O::Tag: FillDispatch<O>,
{
    let zero = <O::Item as NumCast>::from(0u8);
    let one = <O::Item as NumCast>::from(1u8);
    match zero.zip(one) {
        Some((zero, one)) => sequence(output, zero, one),
        None => Err(Error::invalid_argument("output", "element type cannot hold 0 and 1")),
    }
}
