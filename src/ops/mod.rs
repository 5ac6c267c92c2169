//! Compile-time dispatch
//!
//! Each operation family has a dispatch trait in [`traits`]. The host and
//! device backends implement those traits on capability tags, and the generic
//! entry points in [`algorithm`](crate::algorithm) call
//! `<I::Tag as XDispatch<I>>::method(..)`. Selection is resolved entirely by
//! trait resolution; no backend decision is made at run time.
//!
//! ```text
//! tandem::reduce(&v, 0, |a, b| a + b)
//!   └── <RandomAccessHostTag as ReduceDispatch<&Vec<i32>>>::transform_reduce_indexed
//!         └── runtime::host::kernels::transform_reduce_indexed
//!
//! tandem::reduce(&d, 0, |a, b| a + b)
//!   └── <RandomAccessDeviceTag as ReduceDispatch<&DeviceVector<i32>>>::transform_reduce_indexed
//!         └── runtime::device::kernels::reduce::transform_reduce_indexed
//! ```

mod device;
mod host;
pub mod traits;

pub use traits::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, CopyDispatch, FillDispatch,
    ForEachDispatch, GatherDispatch, GatherIfDispatch, PartitionCopyDispatch, PartitionDispatch,
    RadixSortByKeyDispatch, RadixSortDispatch, ReduceDispatch, ScanDispatch, TransformDispatch,
    TransformIfDispatch,
};
