//! LSD radix sort of 32-bit words with an optional 32-bit payload
//!
//! Each pass handles one [`RADIX_BITS`]-bit digit:
//!
//! 1. every group builds the digit histogram of its [`RADIX_TILE`]-element tile
//! 2. histograms are laid out digit-major (`digit * groups + group`) and
//!    exclusive-scanned, giving each group its first output slot per digit
//! 3. every group scatters its tile in input order; lanes own contiguous runs
//!    of the tile, so equal digits keep their relative order
//!
//! Passes ping-pong between the caller's slices and scratch buffers. Only the
//! low `bits` bits of each word are looked at.

use super::scan::transform_exclusive_scan;
use super::vectorize::vectorize;
use crate::error::{Error, Result};
use crate::runtime::device::Device;
use crate::runtime::device::buffer::{DeviceBuffer, ScatterPtr};
use crate::runtime::device::launch::{LaunchConfig, launch, launch_into};

/// Bits per digit
pub const RADIX_BITS: u32 = 8;

/// Buckets per digit
pub const RADIX: usize = 1 << RADIX_BITS;

/// Lanes per radix group
pub const RADIX_BLOCK_SIZE: usize = 32;

/// Consecutive elements owned by one lane
pub const ITEMS_PER_LANE: usize = 32;

/// Elements per radix group
pub const RADIX_TILE: usize = RADIX_BLOCK_SIZE * ITEMS_PER_LANE;

mod sealed {
    pub trait Sealed {}
}

/// Payload carried alongside the sorted words
///
/// Either a 32-bit word, or nothing when only the keys are sorted.
pub trait Passenger: sealed::Sealed + Copy + Send + Sync {}

impl sealed::Sealed for u32 {}
impl sealed::Sealed for () {}
impl Passenger for u32 {}
impl Passenger for () {}

/// Number of low bits that distinguish words in `[min, max]`
///
/// All words between the two share every bit above the highest bit in which
/// `min` and `max` differ, so sorting the bits below it is enough.
pub fn significant_bits(min: u32, max: u32) -> u32 {
    u32::BITS - (min ^ max).leading_zeros()
}

#[inline]
fn digit(word: u32, shift: u32) -> usize {
    ((word >> shift) as usize) & (RADIX - 1)
}

#[inline]
fn tile_bounds(block_idx: usize, n: usize) -> (usize, usize) {
    let start = block_idx * RADIX_TILE;
    (start, (start + RADIX_TILE).min(n))
}

#[inline]
fn lane_run(start: usize, end: usize, lane: usize) -> std::ops::Range<usize> {
    let first = (start + lane * ITEMS_PER_LANE).min(end);
    first..(first + ITEMS_PER_LANE).min(end)
}

/// Stable ascending sort of `keys` by their low `bits` bits, permuting `payload` alongside
pub fn radix_sort_words<P: Passenger>(
    device: &Device,
    keys: &mut [u32],
    payload: &mut [P],
    bits: u32,
) -> Result<()> {
    let n = keys.len();
    if payload.len() != n {
        return Err(Error::length_mismatch("radix_sort_words", n, payload.len()));
    }
    let bits = bits.min(u32::BITS);
    if n <= 1 || bits == 0 {
        return Ok(());
    }

    let passes = bits.div_ceil(RADIX_BITS);
    log::debug!("radix sort: n={n}, {bits} bits in {passes} passes");

    let mut alt_keys = DeviceBuffer::from_slice(keys, device)?;
    let mut alt_payload = DeviceBuffer::from_slice(payload, device)?;
    let groups = n.div_ceil(RADIX_TILE);
    let mut counts = DeviceBuffer::filled(RADIX * groups, 0usize, device)?;
    let mut offsets = DeviceBuffer::filled(RADIX * groups, 0usize, device)?;

    let mut in_primary = true;
    for pass in 0..passes {
        let shift = pass * RADIX_BITS;
        if in_primary {
            radix_pass(
                device,
                keys,
                payload,
                &mut alt_keys,
                &mut alt_payload,
                shift,
                &mut counts,
                &mut offsets,
            )?;
        } else {
            radix_pass(
                device,
                &alt_keys,
                &alt_payload,
                keys,
                payload,
                shift,
                &mut counts,
                &mut offsets,
            )?;
        }
        in_primary = !in_primary;
    }

    if !in_primary {
        keys.copy_from_slice(&alt_keys);
        payload.copy_from_slice(&alt_payload);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn radix_pass<P: Passenger>(
    device: &Device,
    src_keys: &[u32],
    src_payload: &[P],
    dst_keys: &mut [u32],
    dst_payload: &mut [P],
    shift: u32,
    counts: &mut [usize],
    offsets: &mut [usize],
) -> Result<()> {
    let n = src_keys.len();
    let groups = n.div_ceil(RADIX_TILE);
    let config = LaunchConfig::new(groups, RADIX_BLOCK_SIZE);

    let mut histograms = DeviceBuffer::with_capacity(groups, device)?;
    launch_into(device, config, &mut histograms, |block| {
        let (start, end) = tile_bounds(block.block_idx(), n);
        let mut histogram = [0usize; RADIX];
        block.step(|lane| {
            for i in lane_run(start, end, lane) {
                histogram[digit(src_keys[i], shift)] += 1;
            }
        });
        histogram
    })?;

    let histograms = histograms.as_slice();
    vectorize(device, counts, |i| histograms[i % groups][i / groups])?;
    transform_exclusive_scan(device, counts, offsets, |c| c, 0, |a, b| a + b)?;

    let offsets: &[usize] = offsets;
    let dst_keys = ScatterPtr::new(dst_keys);
    let dst_payload = ScatterPtr::new(dst_payload);
    launch(device, config, |block| {
        let group = block.block_idx();
        let (start, end) = tile_bounds(group, n);
        let lanes = block.block_dim();

        let mut lane_slots = vec![[0usize; RADIX]; lanes];
        block.step(|lane| {
            for i in lane_run(start, end, lane) {
                lane_slots[lane][digit(src_keys[i], shift)] += 1;
            }
        });

        // lane `l` turns digit columns l, l + lanes, .. into running slots
        block.step(|lane| {
            for d in (lane..RADIX).step_by(lanes) {
                let mut slot = offsets[d * groups + group];
                for run in lane_slots.iter_mut() {
                    let count = run[d];
                    run[d] = slot;
                    slot += count;
                }
            }
        });

        block.step(|lane| {
            let slots = &mut lane_slots[lane];
            for i in lane_run(start, end, lane) {
                let d = digit(src_keys[i], shift);
                let dest = slots[d];
                slots[d] += 1;
                // SAFETY: the scanned offsets give every element of the grid
                // its own destination below n
                unsafe {
                    dst_keys.write(dest, src_keys[i]);
                    dst_payload.write(dest, src_payload[i]);
                }
            }
        });
    })?;
    Ok(())
}
