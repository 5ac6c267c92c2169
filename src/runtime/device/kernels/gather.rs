//! Indexed gathers
//!
//! Every index that will be read is checked with one grid reduction before
//! any output element is written.

use super::reduce::transform_reduce_indexed;
use super::vectorize::vectorize_in_place;
use crate::error::{Error, Result};
use crate::iter::IndexValue;
use crate::runtime::device::Device;

#[inline]
fn index_of<M: IndexValue>(m: M) -> usize {
    m.to_index().unwrap_or(usize::MAX)
}

/// Fail with [`Error::IndexOutOfBounds`] if a selected entry of `map` cannot address `len` elements
pub fn validate_indices<M, S>(device: &Device, map: &[M], len: usize, selected: S) -> Result<()>
where
    M: IndexValue,
    S: Fn(usize) -> bool + Sync,
{
    let worst = transform_reduce_indexed(
        device,
        map,
        |i, m| selected(i).then(|| index_of(m)),
        None,
        |a, b| a.max(b),
    )?;
    match worst {
        Some(index) if index >= len => Err(Error::IndexOutOfBounds { index, len }),
        _ => Ok(()),
    }
}

/// `output[i] = input[map[i]]`
pub fn gather<M, T>(device: &Device, map: &[M], input: &[T], output: &mut [T]) -> Result<()>
where
    M: IndexValue,
    T: Copy + Send + Sync,
{
    validate_indices(device, map, input.len(), |_| true)?;
    vectorize_in_place(device, output, |i, slot| *slot = input[index_of(map[i])])
}

/// `output[i] = input[map[i]]` wherever `pred(stencil[i])`; other slots are left alone
pub fn gather_if<M, S, T, P>(
    device: &Device,
    map: &[M],
    stencil: &[S],
    input: &[T],
    output: &mut [T],
    pred: &P,
) -> Result<()>
where
    M: IndexValue,
    S: Copy + Sync,
    T: Copy + Send + Sync,
    P: Fn(S) -> bool + Sync,
{
    validate_indices(device, map, input.len(), |i| pred(stencil[i]))?;
    vectorize_in_place(device, output, |i, slot| {
        if pred(stencil[i]) {
            *slot = input[index_of(map[i])];
        }
    })
}
