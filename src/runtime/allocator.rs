//! Memory allocator trait and default implementation
//!
//! Algorithms never manage physical memory themselves. Every scratch or
//! partial-result buffer is a logical window obtained from an [`Allocator`]
//! and released when the owning [`Allocation`] is dropped.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque handle to a live allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AllocationHandle(u64);

impl AllocationHandle {
    /// Raw handle value
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Memory allocator trait for devices
///
/// `deallocate` must be idempotent: releasing a handle that is no longer live
/// is a no-op that reports `false`.
pub trait Allocator: Send + Sync + fmt::Debug {
    /// Allocate memory of given size
    ///
    /// Fails with [`Error::OutOfMemory`] when the request cannot be satisfied.
    fn allocate(&self, size_bytes: usize) -> Result<AllocationHandle>;

    /// Deallocate memory, returning whether the handle was live
    fn deallocate(&self, handle: AllocationHandle) -> bool;

    /// Get the total allocated bytes
    fn allocated_bytes(&self) -> usize {
        0 // Default: tracking not supported
    }

    /// Total capacity in bytes, if bounded
    fn capacity_bytes(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Default)]
struct Ledger {
    live: HashMap<u64, usize>,
    allocated: usize,
    peak: usize,
}

/// Default allocator: byte-budget accounting with a live-handle table
///
/// Zero-byte requests always succeed and do not consume budget.
#[derive(Debug)]
pub struct DefaultAllocator {
    capacity: usize,
    next_handle: AtomicU64,
    ledger: Mutex<Ledger>,
}

impl DefaultAllocator {
    /// Create a new allocator with the given byte budget
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_handle: AtomicU64::new(1),
            ledger: Mutex::new(Ledger::default()),
        }
    }

    /// Highest number of bytes live at any one time
    pub fn peak_bytes(&self) -> usize {
        self.ledger.lock().peak
    }

    /// Number of live allocations
    pub fn live_allocations(&self) -> usize {
        self.ledger.lock().live.len()
    }
}

impl Allocator for DefaultAllocator {
    fn allocate(&self, size_bytes: usize) -> Result<AllocationHandle> {
        let mut ledger = self.ledger.lock();
        let available = self.capacity - ledger.allocated;
        if size_bytes > available {
            return Err(Error::out_of_memory(size_bytes, available));
        }

        let handle = self.next_handle.fetch_add(1, Ordering::Relaxed);
        ledger.live.insert(handle, size_bytes);
        ledger.allocated += size_bytes;
        ledger.peak = ledger.peak.max(ledger.allocated);
        Ok(AllocationHandle(handle))
    }

    fn deallocate(&self, handle: AllocationHandle) -> bool {
        let mut ledger = self.ledger.lock();
        match ledger.live.remove(&handle.0) {
            Some(size) => {
                ledger.allocated -= size;
                true
            }
            None => false,
        }
    }

    fn allocated_bytes(&self) -> usize {
        self.ledger.lock().allocated
    }

    fn capacity_bytes(&self) -> Option<usize> {
        Some(self.capacity)
    }
}

/// Owned allocation, released on drop
pub struct Allocation {
    handle: AllocationHandle,
    size_bytes: usize,
    allocator: Arc<dyn Allocator>,
}

impl Allocation {
    /// Request `size_bytes` from `allocator`
    pub fn new(allocator: &Arc<dyn Allocator>, size_bytes: usize) -> Result<Self> {
        let handle = allocator.allocate(size_bytes)?;
        log::trace!("allocate {size_bytes} bytes -> handle {}", handle.raw());
        Ok(Self {
            handle,
            size_bytes,
            allocator: Arc::clone(allocator),
        })
    }

    /// The underlying handle
    pub fn handle(&self) -> AllocationHandle {
        self.handle
    }

    /// Size of the allocation in bytes
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

impl fmt::Debug for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocation")
            .field("handle", &self.handle)
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

impl Drop for Allocation {
    fn drop(&mut self) {
        log::trace!("free handle {}", self.handle.raw());
        self.allocator.deallocate(self.handle);
    }
}
