//! Elementwise execution over `[0, n)`
//!
//! The index space is cut into one contiguous tile per group; lanes walk their
//! tile with a lane stride. Every index is visited exactly once, in no
//! particular order.

use super::reduce::max_blocks;
use crate::error::Result;
use crate::runtime::device::Device;
use crate::runtime::device::launch::{LaunchConfig, launch, lane_stride, launch_tiles};

/// Lanes per group for elementwise kernels
pub const VECTORIZE_BLOCK_SIZE: usize = 256;

/// Tile length giving at most `max_blocks` groups, rounded to whole groups
fn tile_len(n: usize, device: &Device) -> usize {
    let grid = n.div_ceil(VECTORIZE_BLOCK_SIZE).min(max_blocks(device)).max(1);
    n.div_ceil(grid).next_multiple_of(VECTORIZE_BLOCK_SIZE)
}

/// `out[i] = f(i)` for every `i`
pub fn vectorize<T, F>(device: &Device, out: &mut [T], f: F) -> Result<()>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    vectorize_in_place(device, out, |i, slot| *slot = f(i))
}

/// `f(i, &mut data[i])` for every `i`
pub fn vectorize_in_place<T, F>(device: &Device, data: &mut [T], f: F) -> Result<()>
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    let n = data.len();
    if n == 0 {
        return Ok(());
    }
    let tile = tile_len(n, device);
    launch_tiles(device, data, tile, VECTORIZE_BLOCK_SIZE, |block, base, chunk| {
        let block_dim = block.block_dim();
        let len = chunk.len();
        block.step(|lane| {
            for i in lane_stride(lane, block_dim, len) {
                f(base + i, &mut chunk[i]);
            }
        });
    })
}

/// `f(i)` for every `i < n`, for kernels whose effects live elsewhere
pub fn for_each_index<F>(device: &Device, n: usize, f: F) -> Result<()>
where
    F: Fn(usize) + Sync,
{
    if n == 0 {
        return Ok(());
    }
    let tile = tile_len(n, device);
    let config = LaunchConfig::new(n.div_ceil(tile), VECTORIZE_BLOCK_SIZE);
    launch(device, config, |block| {
        let base = block.block_idx() * tile;
        let len = tile.min(n - base);
        let block_dim = block.block_dim();
        block.step(|lane| {
            for i in lane_stride(lane, block_dim, len) {
                f(base + i);
            }
        });
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn device() -> Device {
        Device::builder()
            .multiprocessor_count(1)
            .worker_threads(3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_tile_len_bounds_grid() {
        let device = device();
        // one multiprocessor allows 12 groups
        let tile = tile_len(1_000_000, &device);
        assert_eq!(tile % VECTORIZE_BLOCK_SIZE, 0);
        assert!(1_000_000usize.div_ceil(tile) <= 12);
        assert_eq!(tile_len(10, &device), VECTORIZE_BLOCK_SIZE);
    }

    #[test]
    fn test_vectorize_visits_each_index_once() {
        let device = device();
        for n in [0usize, 1, 255, 256, 257, 5000, 100_003] {
            let mut out = vec![usize::MAX; n];
            vectorize(&device, &mut out, |i| i * 2).unwrap();
            assert!(out.iter().enumerate().all(|(i, &x)| x == i * 2), "n = {n}");
        }
    }

    #[test]
    fn test_for_each_index_counts() {
        let device = device();
        let hits: Vec<AtomicUsize> = (0..7777).map(|_| AtomicUsize::new(0)).collect();
        for_each_index(&device, hits.len(), |i| {
            hits[i].fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
    }
}
