//! Device implementations of the dispatch traits.
//!
//! Every range of one call must live on the same [`Device`]; a mismatch is
//! [`Error::DeviceMismatch`](crate::error::Error::DeviceMismatch). Transfers
//! between host and device memory are only offered by `copy`.

mod copy;
mod fill;
mod gather;
mod partition;
mod reduce;
mod scan;
mod sorting;
mod transform;

use crate::error::Result;
use crate::runtime::device::Device;

/// Fail unless every device in `others` is `first`
pub(crate) fn same_device(first: &Device, others: &[&Device]) -> Result<()> {
    others.iter().try_for_each(|d| first.ensure_same(d))
}
