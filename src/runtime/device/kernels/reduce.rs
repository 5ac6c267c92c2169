//! Grid reduction engine
//!
//! A pass launches up to `max_blocks` groups of [`REDUCE_BLOCK_SIZE`] lanes.
//! Each lane accumulates a grid-strided slice of the input, the group then
//! tree-reduces its lanes and lane 0's value lands in the partial buffer.
//! Partial buffers with at least one group's worth of entries go through
//! another pass; smaller ones are copied back and folded on the host together
//! with `init`.

use crate::error::Result;
use crate::runtime::device::block;
use crate::runtime::device::buffer::DeviceBuffer;
use crate::runtime::device::launch::{BlockContext, LaunchConfig, launch_into};
use crate::runtime::device::Device;

/// Lanes per group in a reduction pass
pub const REDUCE_BLOCK_SIZE: usize = 256;

/// Upper bound on groups per pass: three groups' worth of lanes per resident thread slot
pub fn max_blocks(device: &Device) -> usize {
    (3 * device.properties().max_active_threads() / REDUCE_BLOCK_SIZE).max(1)
}

/// Launch shape for reducing `n > 0` elements
///
/// Below one group's worth of input a single lane folds everything serially.
pub fn reduce_config(n: usize, device: &Device) -> LaunchConfig {
    if n < REDUCE_BLOCK_SIZE {
        LaunchConfig::new(1, 1)
    } else {
        let grid = n.div_ceil(REDUCE_BLOCK_SIZE).min(max_blocks(device));
        LaunchConfig::new(grid, REDUCE_BLOCK_SIZE)
    }
}

/// Reduce `unary_op(i, input[i])` over all `i`, folded onto `init`
///
/// `binary_op` must be associative and commutative. An empty input returns
/// `init` without launching anything.
pub fn transform_reduce_indexed<T, O, U, F>(
    device: &Device,
    input: &[T],
    unary_op: U,
    init: O,
    binary_op: F,
) -> Result<O>
where
    T: Copy + Sync,
    O: Copy + Send + Sync,
    U: Fn(usize, T) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    let n = input.len();
    if n == 0 {
        return Ok(init);
    }

    let mut partials = reduce_pass(device, n, |i| unary_op(i, input[i]), &binary_op)?;
    while partials.len() >= REDUCE_BLOCK_SIZE {
        let previous = partials;
        partials = reduce_pass(device, previous.len(), |i| previous[i], &binary_op)?;
    }

    let host = partials.to_vec();
    drop(partials);
    Ok(host.into_iter().fold(init, |acc, x| binary_op(acc, x)))
}

fn reduce_pass<O, L, F>(device: &Device, n: usize, load: L, op: &F) -> Result<DeviceBuffer<O>>
where
    O: Copy + Send + Sync,
    L: Fn(usize) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    let config = reduce_config(n, device);
    let mut partials = DeviceBuffer::with_capacity(config.grid_dim, device)?;

    if config.block_dim == 1 {
        log::debug!("reduce pass: n={n}, serial kernel");
        launch_into(device, config, &mut partials, |_| serial_reduce(n, &load, op))?;
    } else {
        log::debug!("reduce pass: n={n}, grid={}", config.grid_dim);
        launch_into(device, config, &mut partials, |ctx| {
            group_reduce(ctx, n, &load, op)
        })?;
    }
    Ok(partials)
}

fn serial_reduce<O, L, F>(n: usize, load: &L, op: &F) -> O
where
    O: Copy,
    L: Fn(usize) -> O,
    F: Fn(O, O) -> O,
{
    (1..n).fold(load(0), |acc, i| op(acc, load(i)))
}

fn group_reduce<O, L, F>(ctx: &mut BlockContext, n: usize, load: &L, op: &F) -> O
where
    O: Copy,
    L: Fn(usize) -> O,
    F: Fn(O, O) -> O,
{
    let grid_stride = REDUCE_BLOCK_SIZE * ctx.grid_dim();
    let base = ctx.block_idx() * REDUCE_BLOCK_SIZE;

    // Lanes whose first index is past the end hold nothing; they are always a
    // suffix of the group.
    let mut shared: Vec<O> = Vec::with_capacity(REDUCE_BLOCK_SIZE);
    ctx.step(|lane| {
        let first = base + lane;
        if first < n {
            let mut acc = load(first);
            let mut i = first + grid_stride;
            while i < n {
                acc = op(acc, load(i));
                i += grid_stride;
            }
            shared.push(acc);
        }
    });

    let live = shared.len();
    if live == REDUCE_BLOCK_SIZE {
        block::reduce::<O, F, REDUCE_BLOCK_SIZE>(ctx, &mut shared, op)
    } else {
        block::reduce_n(ctx, &mut shared, live, op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(multiprocessors: usize) -> Device {
        Device::builder()
            .multiprocessor_count(multiprocessors)
            .worker_threads(4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reduce_config() {
        let device = device(4);
        assert_eq!(max_blocks(&device), 48);
        assert_eq!(reduce_config(255, &device), LaunchConfig::new(1, 1));
        assert_eq!(reduce_config(256, &device), LaunchConfig::new(1, 256));
        assert_eq!(reduce_config(257, &device), LaunchConfig::new(2, 256));
        assert_eq!(reduce_config(1 << 20, &device), LaunchConfig::new(48, 256));
    }

    #[test]
    fn test_reduce_small_and_large() {
        let device = device(4);
        for n in [1usize, 2, 255, 256, 257, 1000, 12_345, 100_000] {
            let data: Vec<u64> = (0..n as u64).collect();
            let sum = transform_reduce_indexed(&device, &data, |_, x| x, 0u64, |a, b| a + b).unwrap();
            assert_eq!(sum, (n as u64) * (n as u64 - 1) / 2, "n = {n}");
        }
    }

    #[test]
    fn test_reduce_recurses_on_device() {
        // 32 multiprocessors allow 384 groups, so the first pass leaves at
        // least 256 partials and a second device pass runs.
        let device = device(32);
        assert!(max_blocks(&device) >= REDUCE_BLOCK_SIZE);
        let data = vec![1u32; REDUCE_BLOCK_SIZE * REDUCE_BLOCK_SIZE * 3 + 17];
        let count = transform_reduce_indexed(&device, &data, |_, x| x, 0u32, |a, b| a + b).unwrap();
        assert_eq!(count as usize, data.len());
    }

    #[test]
    fn test_reduce_uses_index() {
        let device = device(2);
        let data = vec![0u8; 600];
        let sum = transform_reduce_indexed(&device, &data, |i, _| i, 5usize, |a, b| a + b).unwrap();
        assert_eq!(sum, 5 + 600 * 599 / 2);
    }

    #[test]
    fn test_empty_and_single() {
        let device = device(1);
        let empty: [i32; 0] = [];
        assert_eq!(
            transform_reduce_indexed(&device, &empty, |_, x| x, 7, |a, b| a + b).unwrap(),
            7
        );
        // single element folds exactly op(init, x)
        let one = [5i64];
        let got = transform_reduce_indexed(&device, &one, |_, x| x, 3, |a, b| 2 * a + b).unwrap();
        assert_eq!(got, 11);
    }

    #[test]
    fn test_partials_are_released() {
        let device = device(8);
        let data: Vec<u32> = (0..50_000).collect();
        let max = transform_reduce_indexed(&device, &data, |_, x| x, 0, |a: u32, b: u32| a.max(b)).unwrap();
        assert_eq!(max, 49_999);
        assert_eq!(device.allocator().allocated_bytes(), 0);
    }
}
