//! Device handle, properties and builder

use crate::error::{Error, Result};
use crate::runtime::allocator::{Allocation, Allocator, DefaultAllocator};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Largest cooperative group a device accepts
pub const MAX_THREADS_PER_BLOCK: usize = 512;

/// Default device memory budget (4 GiB)
pub const DEFAULT_MEMORY_LIMIT: usize = 4 << 30;

/// Static description of a device's concurrency budget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProperties {
    /// Number of multiprocessors
    pub multiprocessor_count: usize,
    /// Resident threads per multiprocessor
    pub max_threads_per_multiprocessor: usize,
    /// Largest group size accepted by a launch
    pub max_threads_per_block: usize,
}

impl DeviceProperties {
    /// Threads the device can keep resident at once
    pub fn max_active_threads(&self) -> usize {
        self.multiprocessor_count * self.max_threads_per_multiprocessor
    }
}

impl Default for DeviceProperties {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            multiprocessor_count: workers,
            max_threads_per_multiprocessor: 1024,
            max_threads_per_block: MAX_THREADS_PER_BLOCK,
        }
    }
}

struct DeviceInner {
    id: usize,
    properties: DeviceProperties,
    allocator: Arc<dyn Allocator>,
    #[cfg(feature = "rayon")]
    pool: rayon::ThreadPool,
}

/// A simulated SIMT accelerator
///
/// Groups of a launch execute concurrently on the device's worker pool; lanes
/// inside a group run in lockstep between barriers. Cloning a `Device` is
/// cheap and yields a handle to the same device.
#[derive(Clone)]
pub struct Device {
    inner: Arc<DeviceInner>,
}

static DEFAULT_DEVICE: OnceLock<Device> = OnceLock::new();

impl Device {
    /// Start configuring a new device
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Process-wide default device
    pub fn default_device() -> Result<Self> {
        if let Some(device) = DEFAULT_DEVICE.get() {
            return Ok(device.clone());
        }
        let device = Self::builder().build()?;
        Ok(DEFAULT_DEVICE.get_or_init(|| device).clone())
    }

    /// Device ordinal
    pub fn id(&self) -> usize {
        self.inner.id
    }

    /// Human-readable name
    pub fn name(&self) -> String {
        format!("simt:{}", self.inner.id)
    }

    /// Concurrency budget of this device
    pub fn properties(&self) -> &DeviceProperties {
        &self.inner.properties
    }

    /// The allocator backing device memory
    pub fn allocator(&self) -> &Arc<dyn Allocator> {
        &self.inner.allocator
    }

    /// Allocate `size_bytes` of device memory
    pub fn allocate(&self, size_bytes: usize) -> Result<Allocation> {
        Allocation::new(&self.inner.allocator, size_bytes)
    }

    /// Wait for outstanding work
    ///
    /// Launches complete before returning to the caller, so there is never
    /// anything to wait for.
    pub fn synchronize(&self) {}

    /// Whether two handles refer to the same device
    pub fn is_same(&self, other: &Device) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Fail with [`Error::DeviceMismatch`] unless both handles are the same device
    pub fn ensure_same(&self, other: &Device) -> Result<()> {
        if self.is_same(other) {
            Ok(())
        } else {
            Err(Error::DeviceMismatch)
        }
    }

    /// Run `f` on the device's worker pool
    #[cfg(feature = "rayon")]
    pub(crate) fn install<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.pool.install(f)
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("id", &self.inner.id)
            .field("properties", &self.inner.properties)
            .field("allocated_bytes", &self.inner.allocator.allocated_bytes())
            .finish()
    }
}

/// Builder for [`Device`]
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: usize,
    multiprocessor_count: Option<usize>,
    max_threads_per_multiprocessor: Option<usize>,
    memory_limit: Option<usize>,
    allocator: Option<Arc<dyn Allocator>>,
    worker_threads: Option<usize>,
}

impl DeviceBuilder {
    /// Device ordinal reported by [`Device::id`]
    pub fn id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Number of multiprocessors
    pub fn multiprocessor_count(mut self, count: usize) -> Self {
        self.multiprocessor_count = Some(count);
        self
    }

    /// Resident threads per multiprocessor
    pub fn max_threads_per_multiprocessor(mut self, threads: usize) -> Self {
        self.max_threads_per_multiprocessor = Some(threads);
        self
    }

    /// Memory budget for the default allocator
    pub fn memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = Some(bytes);
        self
    }

    /// Use a custom allocator instead of the default budgeted one
    pub fn allocator(mut self, allocator: Arc<dyn Allocator>) -> Self {
        self.allocator = Some(allocator);
        self
    }

    /// Number of worker threads executing groups
    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Create the device
    pub fn build(self) -> Result<Device> {
        let defaults = DeviceProperties::default();
        let properties = DeviceProperties {
            multiprocessor_count: self
                .multiprocessor_count
                .unwrap_or(defaults.multiprocessor_count),
            max_threads_per_multiprocessor: self
                .max_threads_per_multiprocessor
                .unwrap_or(defaults.max_threads_per_multiprocessor),
            max_threads_per_block: MAX_THREADS_PER_BLOCK,
        };
        if properties.multiprocessor_count == 0 {
            return Err(Error::invalid_argument(
                "multiprocessor_count",
                "a device needs at least one multiprocessor",
            ));
        }
        if properties.max_threads_per_multiprocessor < MAX_THREADS_PER_BLOCK {
            return Err(Error::invalid_argument(
                "max_threads_per_multiprocessor",
                format!("must hold at least one full group of {MAX_THREADS_PER_BLOCK} threads"),
            ));
        }

        let allocator: Arc<dyn Allocator> = match self.allocator {
            Some(allocator) => allocator,
            None => Arc::new(DefaultAllocator::new(
                self.memory_limit.unwrap_or(DEFAULT_MEMORY_LIMIT),
            )),
        };

        #[cfg(feature = "rayon")]
        let pool = {
            let mut builder = rayon::ThreadPoolBuilder::new()
                .thread_name(move |i| format!("tandem-device-{i}"));
            if let Some(threads) = self.worker_threads {
                builder = builder.num_threads(threads);
            }
            builder
                .build()
                .map_err(|e| Error::Backend(format!("failed to start device workers: {e}")))?
        };
        #[cfg(not(feature = "rayon"))]
        let _ = self.worker_threads;

        log::debug!(
            "device {} ready: {} multiprocessors x {} threads",
            self.id,
            properties.multiprocessor_count,
            properties.max_threads_per_multiprocessor
        );

        Ok(Device {
            inner: Arc::new(DeviceInner {
                id: self.id,
                properties,
                allocator,
                #[cfg(feature = "rayon")]
                pool,
            }),
        })
    }
}
