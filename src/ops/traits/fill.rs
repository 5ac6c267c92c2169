//! In-place generation dispatch.

use crate::error::Result;
use crate::iter::Range;

/// Writing every element of a mutable range
pub trait FillDispatch<O: Range> {
    /// Number of elements in `output`
    fn len(output: &O) -> usize;

    /// Set every element to `value`
    fn fill(output: O, value: O::Item) -> Result<()>;

    /// Set `output[i] = f(i)`
    fn tabulate<F>(output: O, f: F) -> Result<()>
    where
        F: Fn(usize) -> O::Item + Sync;

    /// Call `f(i, &mut output[i])` for every element
    fn update<F>(output: O, f: F) -> Result<()>
    where
        F: Fn(usize, &mut O::Item) + Sync;
}
