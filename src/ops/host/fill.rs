//! Host implementation of in-place generation.

use crate::error::Result;
use crate::iter::{HostSliceMut, RandomAccessHostTag};
use crate::ops::traits::FillDispatch;
use crate::runtime::host::kernels;

impl<O: HostSliceMut> FillDispatch<O> for RandomAccessHostTag {
    fn len(output: &O) -> usize {
        output.host_slice().len()
    }

    fn fill(mut output: O, value: O::Item) -> Result<()> {
        kernels::vectorize(output.host_slice_mut(), |_| value);
        Ok(())
    }

    fn tabulate<F>(mut output: O, f: F) -> Result<()>
    where
        F: Fn(usize) -> O::Item + Sync,
    {
        kernels::vectorize(output.host_slice_mut(), f);
        Ok(())
    }

    fn update<F>(mut output: O, f: F) -> Result<()>
    where
        F: Fn(usize, &mut O::Item) + Sync,
    {
        kernels::vectorize_in_place(output.host_slice_mut(), f);
        Ok(())
    }
}
