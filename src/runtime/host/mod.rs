//! Host execution
//!
//! Random-access host ranges run the kernels in [`kernels`]; forward and
//! bidirectional ranges are folded serially by the dispatch layer.

pub mod kernels;

pub use kernels::PARALLEL_THRESHOLD;
