//! Stable partition by flag scan
//!
//! Predicate flags are exclusive-scanned into the rank of each selected
//! element; a rejected element's rank follows from its index minus the number
//! of selected elements before it. Both sides keep their input order.

use super::scan::transform_exclusive_scan;
use super::vectorize::{for_each_index, vectorize};
use crate::error::Result;
use crate::runtime::device::Device;
use crate::runtime::device::buffer::{DeviceBuffer, ScatterPtr};

/// Copy `input` into `output` with every element satisfying `pred` first
///
/// Returns the number of selected elements. `output` must be as long as `input`.
pub fn stable_partition_copy<T, P>(
    device: &Device,
    input: &[T],
    output: &mut [T],
    pred: &P,
) -> Result<usize>
where
    T: Copy + Send + Sync,
    P: Fn(T) -> bool + Sync,
{
    debug_assert_eq!(input.len(), output.len());
    let n = input.len();
    if n == 0 {
        return Ok(0);
    }

    let mut flags = DeviceBuffer::filled(n, 0usize, device)?;
    vectorize(device, &mut flags, |i| usize::from(pred(input[i])))?;
    let mut ranks = DeviceBuffer::filled(n, 0usize, device)?;
    transform_exclusive_scan(device, &flags, &mut ranks, |f| f, 0, |a, b| a + b)?;
    let selected = ranks[n - 1] + flags[n - 1];
    log::trace!("partition: {selected} of {n} selected");

    let dst = ScatterPtr::new(output);
    let (flags, ranks) = (flags.as_slice(), ranks.as_slice());
    for_each_index(device, n, |i| {
        let dest = if flags[i] == 1 {
            ranks[i]
        } else {
            selected + i - ranks[i]
        };
        // SAFETY: selected ranks fill [0, selected), rejected ones fill
        // [selected, n), each exactly once
        unsafe { dst.write(dest, input[i]) };
    })?;
    Ok(selected)
}

/// Stable partition of `data` in place, returning the number of selected elements
pub fn stable_partition<T, P>(device: &Device, data: &mut [T], pred: &P) -> Result<usize>
where
    T: Copy + Send + Sync,
    P: Fn(T) -> bool + Sync,
{
    let staged = DeviceBuffer::from_slice(data, device)?;
    stable_partition_copy(device, &staged, data, pred)
}
