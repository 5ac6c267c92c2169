//! Host implementations of the dispatch traits.
//!
//! Forward and bidirectional ranges are consumed front to back on the calling
//! thread. Random-access ranges run the kernels in
//! [`runtime::host::kernels`](crate::runtime::host::kernels).

mod copy;
mod fill;
mod gather;
mod partition;
mod reduce;
mod scan;
mod sorting;
mod transform;

use crate::iter::HostInput;

/// Drain a sequential range so its length is known before anything is written
pub(crate) fn drain<I: HostInput>(input: I) -> Vec<I::Item> {
    input.into_host_iter().collect()
}
