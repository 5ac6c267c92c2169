//! Generic algorithm entry points
//!
//! Every function here is generic over its ranges and forwards to the
//! dispatch trait implemented by the ranges' capability tags. All of them
//! are re-exported at the crate root.

mod copy;
mod fill;
mod gather;
mod partition;
mod reduce;
mod scan;
mod sort;
mod transform;

pub use copy::{copy, copy_if};
pub use fill::{fill, range, sequence};
pub use gather::{gather, gather_if};
pub use partition::{partition, partition_copy, stable_partition, stable_partition_copy};
pub use reduce::{
    max_element, max_element_by, min_element, min_element_by, reduce, transform_reduce,
};
pub use scan::{exclusive_scan, inclusive_scan, transform_exclusive_scan, transform_inclusive_scan};
pub use sort::{
    sort, sort_by, sort_by_key, sort_by_key_with, stable_sort, stable_sort_by,
    stable_sort_by_key, stable_sort_by_key_with,
};
pub use transform::{
    for_each, replace, replace_copy, replace_copy_if, replace_if, transform, transform_if,
};
