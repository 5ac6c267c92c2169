//! User-facing device containers
//!
//! [`DeviceVector`] owns device memory; [`DeviceView`] and [`DeviceViewMut`]
//! borrow a contiguous part of one. All three are random-access device ranges.

use super::buffer::DeviceBuffer;
use super::device::Device;
use super::kernels::fill::fill;
use crate::error::{Error, Result};
use crate::iter::{DeviceSlice, DeviceSliceMut, RandomAccessDeviceTag, Range};
use bytemuck::Pod;
use std::fmt;
use std::ops::{Bound, RangeBounds};

/// Element types that can live in device memory
pub trait DeviceElement: Pod + Send + Sync {}

impl<T: Pod + Send + Sync> DeviceElement for T {}

/// A vector of `T` in device memory
///
/// ```
/// use tandem::runtime::device::{Device, DeviceVector};
///
/// let device = Device::builder().build()?;
/// let v = DeviceVector::from_slice(&[1u32, 2, 3], &device)?;
/// assert_eq!(v.to_vec(), vec![1, 2, 3]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub struct DeviceVector<T> {
    buffer: DeviceBuffer<T>,
}

impl<T: DeviceElement> DeviceVector<T> {
    /// Upload `data` to `device`
    pub fn from_slice(data: &[T], device: &Device) -> Result<Self> {
        Ok(Self {
            buffer: DeviceBuffer::from_slice(data, device)?,
        })
    }

    /// `len` zero-initialized elements
    pub fn zeroed(len: usize, device: &Device) -> Result<Self> {
        Ok(Self {
            buffer: DeviceBuffer::filled(len, T::zeroed(), device)?,
        })
    }

    /// `len` copies of `value`, written by the device fill kernel
    pub fn filled(len: usize, value: T, device: &Device) -> Result<Self> {
        let mut v = Self::zeroed(len, device)?;
        let (device, data) = v.buffer.split_device_mut();
        fill(device, data, value)?;
        Ok(v)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the vector holds no elements
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Owning device
    pub fn device(&self) -> &Device {
        self.buffer.device()
    }

    /// Download the elements to host memory
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.to_vec()
    }

    /// Borrow the whole vector as a view
    pub fn as_view(&self) -> DeviceView<'_, T> {
        DeviceView {
            data: self.buffer.as_slice(),
            device: self.buffer.device(),
        }
    }

    /// Borrow the whole vector as a writable view
    pub fn as_view_mut(&mut self) -> DeviceViewMut<'_, T> {
        let (device, data) = self.buffer.split_device_mut();
        DeviceViewMut { data, device }
    }

    /// Borrow `range` of the vector
    pub fn view<R: RangeBounds<usize>>(&self, range: R) -> Result<DeviceView<'_, T>> {
        let range = resolve(&range, self.len())?;
        Ok(DeviceView {
            data: &self.buffer.as_slice()[range],
            device: self.buffer.device(),
        })
    }

    /// Borrow `range` of the vector for writing
    pub fn view_mut<R: RangeBounds<usize>>(&mut self, range: R) -> Result<DeviceViewMut<'_, T>> {
        let range = resolve(&range, self.len())?;
        let (device, data) = self.buffer.split_device_mut();
        Ok(DeviceViewMut {
            data: &mut data[range],
            device,
        })
    }
}

fn resolve<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<std::ops::Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end || end > len {
        return Err(Error::IndexOutOfBounds {
            index: start.max(end),
            len,
        });
    }
    Ok(start..end)
}

impl<T> fmt::Debug for DeviceVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceVector")
            .field("len", &self.buffer.len())
            .field("device", self.buffer.device())
            .finish()
    }
}

/// A read-only view of device memory
#[derive(Clone, Copy)]
pub struct DeviceView<'a, T> {
    data: &'a [T],
    device: &'a Device,
}

impl<T> DeviceView<'_, T> {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> fmt::Debug for DeviceView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceView")
            .field("len", &self.data.len())
            .field("device", self.device)
            .finish()
    }
}

/// A writable view of device memory
pub struct DeviceViewMut<'a, T> {
    data: &'a mut [T],
    device: &'a Device,
}

impl<T> DeviceViewMut<'_, T> {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> fmt::Debug for DeviceViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceViewMut")
            .field("len", &self.data.len())
            .field("device", self.device)
            .finish()
    }
}

// ============================================================================
// Range impls
// ============================================================================

impl<'a, T: DeviceElement> Range for &'a DeviceVector<T> {
    type Item = T;
    type Tag = RandomAccessDeviceTag;
}

impl<'a, T: DeviceElement> DeviceSlice for &'a DeviceVector<T> {
    fn device(&self) -> &Device {
        self.buffer.device()
    }

    fn device_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<'a, T: DeviceElement> Range for &'a mut DeviceVector<T> {
    type Item = T;
    type Tag = RandomAccessDeviceTag;
}

impl<'a, T: DeviceElement> DeviceSlice for &'a mut DeviceVector<T> {
    fn device(&self) -> &Device {
        self.buffer.device()
    }

    fn device_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<'a, T: DeviceElement> DeviceSliceMut for &'a mut DeviceVector<T> {
    fn split_device_mut(&mut self) -> (&Device, &mut [T]) {
        self.buffer.split_device_mut()
    }
}

impl<'a, T: DeviceElement> Range for DeviceView<'a, T> {
    type Item = T;
    type Tag = RandomAccessDeviceTag;
}

impl<'a, T: DeviceElement> DeviceSlice for DeviceView<'a, T> {
    fn device(&self) -> &Device {
        self.device
    }

    fn device_slice(&self) -> &[T] {
        self.data
    }
}

impl<'a, T: DeviceElement> Range for DeviceViewMut<'a, T> {
    type Item = T;
    type Tag = RandomAccessDeviceTag;
}

impl<'a, T: DeviceElement> DeviceSlice for DeviceViewMut<'a, T> {
    fn device(&self) -> &Device {
        self.device
    }

    fn device_slice(&self) -> &[T] {
        self.data
    }
}

impl<'a, T: DeviceElement> DeviceSliceMut for DeviceViewMut<'a, T> {
    fn split_device_mut(&mut self) -> (&Device, &mut [T]) {
        (self.device, &mut *self.data)
    }
}
