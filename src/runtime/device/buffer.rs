//! Device memory buffers
//!
//! A [`DeviceBuffer`] is storage accounted against its device's allocator.
//! The accounting is taken before any element is written and released when
//! the buffer is dropped, so a failed request leaves no side effects.

use super::Device;
use crate::error::{Error, Result};
use crate::runtime::allocator::Allocation;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Device-resident storage for `T`
pub struct DeviceBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    device: Device,
    _allocation: Allocation,
}

fn byte_size<T>(len: usize) -> Result<usize> {
    len.checked_mul(std::mem::size_of::<T>())
        .ok_or_else(|| Error::out_of_memory(usize::MAX, 0))
}

impl<T> DeviceBuffer<T> {
    /// Reserve room for `len` elements without initializing them
    ///
    /// The buffer starts empty; kernels fill it through [`launch_into`].
    ///
    /// [`launch_into`]: super::launch::launch_into
    pub fn with_capacity(len: usize, device: &Device) -> Result<Self> {
        let allocation = device.allocate(byte_size::<T>(len)?)?;
        Ok(Self {
            data: Vec::with_capacity(len),
            capacity: len,
            device: device.clone(),
            _allocation: allocation,
        })
    }

    /// Take ownership of `data` as device memory
    pub fn from_vec(data: Vec<T>, device: &Device) -> Result<Self> {
        let allocation = device.allocate(byte_size::<T>(data.len())?)?;
        Ok(Self {
            capacity: data.len(),
            data,
            device: device.clone(),
            _allocation: allocation,
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the allocation was sized for
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Owning device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// The elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Owning device together with the writable elements
    pub fn split_device_mut(&mut self) -> (&Device, &mut [T]) {
        (&self.device, &mut self.data)
    }

    /// Backing storage for kernels that produce the buffer's contents
    pub(crate) fn storage_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }
}

impl<T: Copy> DeviceBuffer<T> {
    /// Copy `src` into a new buffer
    pub fn from_slice(src: &[T], device: &Device) -> Result<Self> {
        let mut buffer = Self::with_capacity(src.len(), device)?;
        buffer.data.extend_from_slice(src);
        log::trace!("host -> device: {} elements", src.len());
        Ok(buffer)
    }

    /// A buffer of `len` copies of `value`
    pub fn filled(len: usize, value: T, device: &Device) -> Result<Self> {
        let mut buffer = Self::with_capacity(len, device)?;
        buffer.data.resize(len, value);
        Ok(buffer)
    }

    /// Copy the elements back to host memory
    pub fn to_vec(&self) -> Vec<T> {
        log::trace!("device -> host: {} elements", self.data.len());
        self.data.clone()
    }
}

impl<T> Deref for DeviceBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for DeviceBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> fmt::Debug for DeviceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("device", &self.device.id())
            .finish()
    }
}

/// Write-only view used by scatter kernels
///
/// Groups write to disjoint destinations of one output slice. The raw address
/// is carried as `usize` so the view can cross into parallel groups.
#[derive(Debug)]
pub(crate) struct ScatterPtr<T> {
    addr: usize,
    len: usize,
    _marker: PhantomData<*mut T>,
}

impl<T> Clone for ScatterPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScatterPtr<T> {}

// SAFETY: the pointer is only dereferenced through `write`, whose callers
// guarantee every destination is written by exactly one lane.
unsafe impl<T: Send> Send for ScatterPtr<T> {}
unsafe impl<T: Send> Sync for ScatterPtr<T> {}

impl<T> ScatterPtr<T> {
    pub(crate) fn new(slice: &mut [T]) -> Self {
        Self {
            addr: slice.as_mut_ptr() as usize,
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Store `value` at `index`
    ///
    /// # Safety
    ///
    /// `index` must be in bounds, no other lane may write the same index
    /// during the launch, and the slice this view was created from must
    /// outlive the launch without being accessed through any other path.
    #[inline]
    pub(crate) unsafe fn write(&self, index: usize, value: T) {
        debug_assert!(index < self.len, "scatter index {index} out of {}", self.len);
        unsafe { (self.addr as *mut T).add(index).write(value) }
    }
}
