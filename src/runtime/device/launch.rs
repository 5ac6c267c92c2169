//! Kernel launch model
//!
//! A launch runs one kernel invocation per group of the grid. Groups are
//! independent: they run concurrently on the device's workers and nothing is
//! guaranteed about their relative order. Inside a group, lanes advance in
//! lockstep through [`BlockContext::step`]; consecutive steps are separated by
//! a barrier, so every write made in one step is visible to the next.
//!
//! ```text
//! grid
//! ├── group 0: step ─ barrier ─ step ─ barrier ─ ...
//! ├── group 1: step ─ barrier ─ step ─ barrier ─ ...
//! └── ...
//! ```

use super::buffer::DeviceBuffer;
use super::device::Device;
use crate::error::{Error, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Grid and group dimensions of a launch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Number of groups
    pub grid_dim: usize,
    /// Lanes per group
    pub block_dim: usize,
}

impl LaunchConfig {
    /// Create a launch configuration
    pub fn new(grid_dim: usize, block_dim: usize) -> Self {
        Self {
            grid_dim,
            block_dim,
        }
    }

    /// Total number of lanes in the grid
    pub fn threads(&self) -> usize {
        self.grid_dim * self.block_dim
    }

    /// Check the configuration against the device's limits
    pub fn validate(&self, device: &Device) -> Result<()> {
        if self.grid_dim == 0 {
            return Err(Error::invalid_argument("grid_dim", "a launch needs at least one group"));
        }
        let limit = device.properties().max_threads_per_block;
        if self.block_dim == 0 || self.block_dim > limit {
            return Err(Error::invalid_argument(
                "block_dim",
                format!("{} lanes is outside 1..={limit}", self.block_dim),
            ));
        }
        Ok(())
    }
}

/// Execution context of one group
#[derive(Debug)]
pub struct BlockContext {
    block_idx: usize,
    block_dim: usize,
    grid_dim: usize,
    barriers: usize,
}

impl BlockContext {
    pub(crate) fn new(block_idx: usize, block_dim: usize, grid_dim: usize) -> Self {
        Self {
            block_idx,
            block_dim,
            grid_dim,
            barriers: 0,
        }
    }

    /// Index of this group in the grid
    #[inline]
    pub fn block_idx(&self) -> usize {
        self.block_idx
    }

    /// Lanes in this group
    #[inline]
    pub fn block_dim(&self) -> usize {
        self.block_dim
    }

    /// Groups in the grid
    #[inline]
    pub fn grid_dim(&self) -> usize {
        self.grid_dim
    }

    /// Barriers executed so far
    pub fn barriers(&self) -> usize {
        self.barriers
    }

    /// Global index of `lane`
    #[inline]
    pub fn global_lane(&self, lane: usize) -> usize {
        self.block_idx * self.block_dim + lane
    }

    /// Run one step on every lane, then wait at the group barrier
    pub fn step<F: FnMut(usize)>(&mut self, mut f: F) {
        for lane in 0..self.block_dim {
            f(lane);
        }
        self.barriers += 1;
    }
}

#[cfg(feature = "rayon")]
fn run_groups<O, K>(device: &Device, config: LaunchConfig, kernel: K, out: &mut Vec<O>)
where
    O: Send,
    K: Fn(&mut BlockContext) -> O + Sync,
{
    device.install(|| {
        (0..config.grid_dim)
            .into_par_iter()
            .map(|block_idx| {
                let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
                kernel(&mut ctx)
            })
            .collect_into_vec(out)
    });
}

#[cfg(not(feature = "rayon"))]
fn run_groups<O, K>(_device: &Device, config: LaunchConfig, kernel: K, out: &mut Vec<O>)
where
    O: Send,
    K: Fn(&mut BlockContext) -> O + Sync,
{
    out.clear();
    out.extend((0..config.grid_dim).map(|block_idx| {
        let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
        kernel(&mut ctx)
    }));
}

/// Launch `kernel` once per group and collect each group's result
pub fn launch<O, K>(device: &Device, config: LaunchConfig, kernel: K) -> Result<Vec<O>>
where
    O: Send,
    K: Fn(&mut BlockContext) -> O + Sync,
{
    config.validate(device)?;
    log::trace!(
        "launch grid={} block={}",
        config.grid_dim,
        config.block_dim
    );
    let mut out = Vec::with_capacity(config.grid_dim);
    run_groups(device, config, kernel, &mut out);
    Ok(out)
}

/// Launch `kernel` once per group, writing group `b`'s result to `results[b]`
///
/// `results` must have been sized for at least `grid_dim` elements.
pub fn launch_into<O, K>(
    device: &Device,
    config: LaunchConfig,
    results: &mut DeviceBuffer<O>,
    kernel: K,
) -> Result<()>
where
    O: Send,
    K: Fn(&mut BlockContext) -> O + Sync,
{
    config.validate(device)?;
    if results.capacity() < config.grid_dim {
        return Err(Error::length_mismatch(
            "launch_into",
            config.grid_dim,
            results.capacity(),
        ));
    }
    log::trace!(
        "launch grid={} block={} (into buffer)",
        config.grid_dim,
        config.block_dim
    );
    run_groups(device, config, kernel, results.storage_mut());
    Ok(())
}

/// Launch one group per `tile`-sized chunk of `data`
///
/// The kernel receives the chunk's starting index and exclusive access to
/// the chunk. An empty `data` launches nothing.
pub fn launch_tiles<T, K>(
    device: &Device,
    data: &mut [T],
    tile: usize,
    block_dim: usize,
    kernel: K,
) -> Result<()>
where
    T: Send,
    K: Fn(&mut BlockContext, usize, &mut [T]) + Sync,
{
    if data.is_empty() {
        return Ok(());
    }
    let config = tile_config(data.len(), tile, block_dim)?;
    config.validate(device)?;
    log::trace!(
        "launch tiles grid={} block={} tile={tile}",
        config.grid_dim,
        config.block_dim
    );

    #[cfg(feature = "rayon")]
    device.install(|| {
        data.par_chunks_mut(tile)
            .enumerate()
            .for_each(|(block_idx, chunk)| {
                let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
                kernel(&mut ctx, block_idx * tile, chunk);
            })
    });

    #[cfg(not(feature = "rayon"))]
    for (block_idx, chunk) in data.chunks_mut(tile).enumerate() {
        let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
        kernel(&mut ctx, block_idx * tile, chunk);
    }

    Ok(())
}

/// [`launch_tiles`] that also records one result per group in `results`
pub fn launch_tiles_into<T, O, K>(
    device: &Device,
    data: &mut [T],
    tile: usize,
    block_dim: usize,
    results: &mut DeviceBuffer<O>,
    kernel: K,
) -> Result<()>
where
    T: Send,
    O: Send,
    K: Fn(&mut BlockContext, usize, &mut [T]) -> O + Sync,
{
    if data.is_empty() {
        results.storage_mut().clear();
        return Ok(());
    }
    let config = tile_config(data.len(), tile, block_dim)?;
    config.validate(device)?;
    if results.capacity() < config.grid_dim {
        return Err(Error::length_mismatch(
            "launch_tiles_into",
            config.grid_dim,
            results.capacity(),
        ));
    }
    log::trace!(
        "launch tiles grid={} block={} tile={tile} (into buffer)",
        config.grid_dim,
        config.block_dim
    );
    let out = results.storage_mut();

    #[cfg(feature = "rayon")]
    device.install(|| {
        data.par_chunks_mut(tile)
            .enumerate()
            .map(|(block_idx, chunk)| {
                let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
                kernel(&mut ctx, block_idx * tile, chunk)
            })
            .collect_into_vec(out)
    });

    #[cfg(not(feature = "rayon"))]
    {
        out.clear();
        out.extend(data.chunks_mut(tile).enumerate().map(|(block_idx, chunk)| {
            let mut ctx = BlockContext::new(block_idx, config.block_dim, config.grid_dim);
            kernel(&mut ctx, block_idx * tile, chunk)
        }));
    }

    Ok(())
}

fn tile_config(len: usize, tile: usize, block_dim: usize) -> Result<LaunchConfig> {
    if tile == 0 {
        return Err(Error::invalid_argument("tile", "tile size must be non-zero"));
    }
    Ok(LaunchConfig::new(len.div_ceil(tile), block_dim))
}

/// Elements each lane of a group visits in a lane-strided walk over `len` items
///
/// Lane `l` visits `l, l + block_dim, l + 2 * block_dim, ...`, which keeps
/// neighbouring lanes on neighbouring elements.
#[inline]
pub fn lane_stride(lane: usize, block_dim: usize, len: usize) -> impl Iterator<Item = usize> {
    (lane..len).step_by(block_dim)
}
