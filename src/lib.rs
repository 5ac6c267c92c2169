//! # tandem
//!
//! **STL-style parallel algorithms over host memory and a SIMT device model.**
//!
//! tandem provides copy, transform, reduce, scan, gather, partition, fill and
//! sort over ranges that live either in host memory or on a [`Device`].
//! The backend is chosen at compile time from the ranges' capability tags, so
//! the same call site runs serially over an iterator, in parallel over a
//! slice, or as grid kernels over device memory.
//!
//! ## Why tandem?
//!
//! - **Zero-cost dispatch**: no runtime branching on where data lives
//! - **Mixed ranges**: host and device ranges can be paired in `copy` as transfers
//! - **Stable sorts**: radix sort for primitive keys, merge sort for any comparator
//! - **Deterministic**: block and grid reductions combine in a fixed tree
//!
//! ## Quick Start
//!
//! ```
//! use tandem::prelude::*;
//!
//! let device = Device::builder().build()?;
//! let mut keys = DeviceVector::from_slice(&[3u32, 1, 2], &device)?;
//!
//! tandem::sort(&mut keys)?;
//! assert_eq!(keys.to_vec(), [1, 2, 3]);
//!
//! let total = tandem::reduce(&keys, 0, |a, b| a + b)?;
//! assert_eq!(total, 6);
//! # Ok::<(), tandem::error::Error>(())
//! ```
//!
//! Pairings with no backend are rejected at compile time. Radix sort needs
//! random access:
//!
//! ```compile_fail
//! let mut v = vec![3u32, 1, 2];
//! tandem::stable_sort(tandem::iter::forward(v.iter().copied()))?;
//! # Ok::<(), tandem::error::Error>(())
//! ```
//!
//! and transform never moves data between host and device:
//!
//! ```compile_fail
//! use tandem::prelude::*;
//!
//! let device = Device::builder().build()?;
//! let mut out = DeviceVector::<u32>::zeroed(3, &device)?;
//! tandem::transform(&vec![1u32, 2, 3], &mut out, |x| x * 2)?;
//! # Ok::<(), tandem::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded host kernels and parallel device groups

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod error;
pub mod iter;
pub mod ops;
pub mod runtime;
pub mod sorting;

pub use algorithm::*;
pub use runtime::device::Device;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::iter::{Range, bidirectional, forward};
    pub use crate::runtime::device::{Device, DeviceVector, DeviceView, DeviceViewMut};
    pub use crate::sorting::RadixKey;
}
