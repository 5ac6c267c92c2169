//! Copying and masked copying.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::{CopyDispatch, TransformIfDispatch};

/// Copy `input` into the prefix of `output`
///
/// Host and device ranges may be mixed freely; such a pairing is a transfer.
/// Returns the number of elements copied.
///
/// ```
/// use tandem::runtime::device::{Device, DeviceVector};
///
/// let device = Device::builder().build()?;
/// let mut d = DeviceVector::zeroed(3, &device)?;
/// tandem::copy(&vec![1u8, 2, 3], &mut d)?;
/// let mut back = vec![0u8; 3];
/// assert_eq!(tandem::copy(&d, &mut back)?, 3);
/// assert_eq!(back, [1, 2, 3]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn copy<I, O>(input: I, output: O) -> Result<usize>
where
    I: Range,
    O: Range<Item = I::Item>,
    (I::Tag, O::Tag): CopyDispatch<I, O>,
{
    <(I::Tag, O::Tag) as CopyDispatch<I, O>>::copy(input, output)
}

/// `output[i] = input[i]` wherever `pred(stencil[i])`
///
/// Slots whose stencil fails the predicate are left untouched. Returns the
/// length of `input`.
pub fn copy_if<I, S, O, P>(input: I, stencil: S, output: O, pred: P) -> Result<usize>
where
    I: Range,
    S: Range,
    O: Range<Item = I::Item>,
    (I::Tag, S::Tag, O::Tag): TransformIfDispatch<I, S, O>,
    P: Fn(S::Item) -> bool + Sync,
{
    <(I::Tag, S::Tag, O::Tag) as TransformIfDispatch<I, S, O>>::transform_if(
        input,
        stencil,
        output,
        |x| x,
        pred,
    )
}
