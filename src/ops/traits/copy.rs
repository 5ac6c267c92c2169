//! Copy dispatch.

use crate::error::Result;
use crate::iter::Range;

/// Element-for-element copy between two ranges
///
/// The only operation family allowed to cross execution spaces: pairing a
/// host range with a device range is a transfer.
pub trait CopyDispatch<I: Range, O: Range<Item = I::Item>> {
    /// Copy `input` into the prefix of `output`, returning the number of elements copied
    ///
    /// Fails with [`Error::LengthMismatch`](crate::error::Error::LengthMismatch)
    /// before writing anything when `output` is shorter than `input`.
    fn copy(input: I, output: O) -> Result<usize>;
}
