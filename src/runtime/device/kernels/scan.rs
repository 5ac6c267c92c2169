//! Multi-group prefix scan
//!
//! 1. Every group scans one [`SCAN_BLOCK_SIZE`] tile in place with the block
//!    scan and reports the tile total.
//! 2. The tile totals are scanned with this same algorithm.
//! 3. Every tile after the first folds the running total of all earlier tiles
//!    into its elements.
//!
//! All combinations keep operands in input order, so `op` only has to be
//! associative.

use super::vectorize::vectorize;
use crate::error::Result;
use crate::runtime::device::Device;
use crate::runtime::device::block;
use crate::runtime::device::buffer::DeviceBuffer;
use crate::runtime::device::launch::{lane_stride, launch_tiles, launch_tiles_into};

/// Elements (and lanes) per scan tile
pub const SCAN_BLOCK_SIZE: usize = 256;

/// Inclusive scan of `data` in place
pub fn inclusive_scan_in_place<T, F>(device: &Device, data: &mut [T], op: &F) -> Result<()>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    let n = data.len();
    if n == 0 {
        return Ok(());
    }

    let tiles = n.div_ceil(SCAN_BLOCK_SIZE);
    let mut totals = DeviceBuffer::with_capacity(tiles, device)?;
    launch_tiles_into(
        device,
        data,
        SCAN_BLOCK_SIZE,
        SCAN_BLOCK_SIZE,
        &mut totals,
        |ctx, _, tile| {
            block::inclusive_scan(ctx, tile, op);
            tile[tile.len() - 1]
        },
    )?;
    if tiles == 1 {
        return Ok(());
    }

    log::trace!("scan: {tiles} tiles, scanning tile totals");
    inclusive_scan_in_place(device, &mut totals, op)?;

    let totals = totals.as_slice();
    launch_tiles(device, data, SCAN_BLOCK_SIZE, SCAN_BLOCK_SIZE, |ctx, base, tile| {
        let tile_idx = base / SCAN_BLOCK_SIZE;
        if tile_idx == 0 {
            return;
        }
        let carry = totals[tile_idx - 1];
        let block_dim = ctx.block_dim();
        let len = tile.len();
        ctx.step(|lane| {
            for i in lane_stride(lane, block_dim, len) {
                tile[i] = op(carry, tile[i]);
            }
        });
    })
}

/// `output[i] = op(unary(input[0]), .., unary(input[i]))`
///
/// `output` must have the same length as `input`.
pub fn transform_inclusive_scan<T, O, U, F>(
    device: &Device,
    input: &[T],
    output: &mut [O],
    unary_op: U,
    op: F,
) -> Result<()>
where
    T: Copy + Sync,
    O: Copy + Send + Sync,
    U: Fn(T) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    debug_assert_eq!(input.len(), output.len());
    vectorize(device, output, |i| unary_op(input[i]))?;
    inclusive_scan_in_place(device, output, &op)
}

/// `output[0] = init`, `output[i] = op(init, op(unary(input[0]), .., unary(input[i - 1])))`
///
/// `output` must have the same length as `input`.
pub fn transform_exclusive_scan<T, O, U, F>(
    device: &Device,
    input: &[T],
    output: &mut [O],
    unary_op: U,
    init: O,
    op: F,
) -> Result<()>
where
    T: Copy + Sync,
    O: Copy + Send + Sync,
    U: Fn(T) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    debug_assert_eq!(input.len(), output.len());
    let n = input.len();
    if n == 0 {
        return Ok(());
    }

    let mut inclusive = DeviceBuffer::filled(n, init, device)?;
    vectorize(device, &mut inclusive, |i| unary_op(input[i]))?;
    inclusive_scan_in_place(device, &mut inclusive, &op)?;

    let inclusive = inclusive.as_slice();
    vectorize(device, output, |i| {
        if i == 0 {
            init
        } else {
            op(init, inclusive[i - 1])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> Device {
        Device::builder().worker_threads(3).build().unwrap()
    }

    #[test]
    fn test_inclusive_scan_sizes() {
        let device = device();
        for n in [1usize, 2, 255, 256, 257, 511, 512, 513, 70_000] {
            let mut data = vec![1u64; n];
            inclusive_scan_in_place(&device, &mut data, &|a: u64, b: u64| a + b).unwrap();
            assert!(
                data.iter().enumerate().all(|(i, &x)| x == i as u64 + 1),
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_exclusive_scan_with_init() {
        let device = device();
        let input: Vec<u32> = (1..=600).collect();
        let mut output = vec![0u32; input.len()];
        transform_exclusive_scan(&device, &input, &mut output, |x| x, 10, |a, b| a + b).unwrap();
        let mut running = 10u32;
        for (i, &x) in output.iter().enumerate() {
            assert_eq!(x, running, "i = {i}");
            running += input[i];
        }
    }

    #[test]
    fn test_scan_keeps_operand_order() {
        // affine maps x -> a*x + b composed left to right
        let device = device();
        let input: Vec<(u32, u32)> = (0..1000u32).map(|i| (i % 7 + 1, i % 13)).collect();
        let compose =
            |f: (u32, u32), g: (u32, u32)| (f.0.wrapping_mul(g.0), f.1.wrapping_mul(g.0).wrapping_add(g.1));
        let mut output = vec![(0, 0); input.len()];
        transform_inclusive_scan(&device, &input, &mut output, |x| x, compose).unwrap();

        let mut expected = Vec::with_capacity(input.len());
        let mut acc = input[0];
        expected.push(acc);
        for &x in &input[1..] {
            acc = compose(acc, x);
            expected.push(acc);
        }
        assert_eq!(output, expected);
    }
}
