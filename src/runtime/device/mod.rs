//! SIMT device model
//!
//! A [`Device`] runs grids of thread groups. Groups execute concurrently on the
//! device's worker pool; lanes inside a group advance in lockstep through
//! [`BlockContext::step`], so every step boundary acts as a group barrier.
//! Device memory is accounted by the device's
//! [`Allocator`](crate::runtime::Allocator) and lives in [`DeviceBuffer`]s and
//! [`DeviceVector`]s.

pub mod block;
mod buffer;
#[allow(clippy::module_inception)]
mod device;
pub mod kernels;
mod launch;
mod vector;

pub(crate) use buffer::ScatterPtr;
pub use buffer::DeviceBuffer;
pub use device::{DEFAULT_MEMORY_LIMIT, Device, DeviceBuilder, DeviceProperties, MAX_THREADS_PER_BLOCK};
pub use launch::{
    BlockContext, LaunchConfig, lane_stride, launch, launch_into, launch_tiles, launch_tiles_into,
};
pub use vector::{DeviceElement, DeviceVector, DeviceView, DeviceViewMut};
