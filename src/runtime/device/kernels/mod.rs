//! Device kernels
//!
//! Each kernel is a plain function over device slices that launches one or
//! more grids on a [`Device`](super::Device). Kernels never check which device
//! owns the slices they are given; the dispatch layer does that.

pub mod fill;
pub mod gather;
pub mod merge_sort;
pub mod partition;
pub mod radix_sort;
pub mod reduce;
pub mod scan;
pub mod vectorize;

pub use fill::{ALIGNMENT_BOUNDARY, WideWord};
pub use merge_sort::MERGE_TILE;
pub use radix_sort::{RADIX_BITS, RADIX_BLOCK_SIZE, RADIX_TILE};
pub use reduce::REDUCE_BLOCK_SIZE;
pub use scan::SCAN_BLOCK_SIZE;
pub use vectorize::VECTORIZE_BLOCK_SIZE;
