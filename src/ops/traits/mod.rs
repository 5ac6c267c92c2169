//! Dispatch traits
//!
//! One trait per operation family. Each is implemented on a capability tag,
//! or on a tuple of tags when the operation takes several ranges, by the
//! backend that serves that combination:
//!
//! ```text
//! ForwardHostTag, BidirectionalHostTag  -> serial host fold  (ops::host)
//! RandomAccessHostTag                   -> host kernels      (ops::host)
//! RandomAccessDeviceTag                 -> device engines    (ops::device)
//! ```
//!
//! A combination without an implementation does not compile.

mod copy;
mod fill;
mod gather;
mod partition;
mod reduce;
mod scan;
mod sorting;
mod transform;

pub use copy::CopyDispatch;
pub use fill::FillDispatch;
pub use gather::{GatherDispatch, GatherIfDispatch};
pub use partition::{PartitionCopyDispatch, PartitionDispatch};
pub use reduce::ReduceDispatch;
pub use scan::ScanDispatch;
pub use sorting::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, RadixSortByKeyDispatch,
    RadixSortDispatch,
};
pub use transform::{ForEachDispatch, TransformDispatch, TransformIfDispatch};
