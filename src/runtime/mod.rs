//! Execution backends
//!
//! ```text
//! runtime
//! ├── host    (serial and rayon kernels over host slices)
//! ├── device  (SIMT device model: groups, lanes, device memory, kernels)
//! └── Allocator (accounting for device memory)
//! ```

mod allocator;
pub mod device;
pub mod host;

pub use allocator::{Allocation, AllocationHandle, Allocator, DefaultAllocator};
