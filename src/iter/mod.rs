//! Ranges and their capabilities
//!
//! Every range type implements [`Range`] exactly once, which maps it to an
//! element type and a capability [`tag`](tag::IteratorTag). The capability
//! traits below say what a backend may do with the range's memory.
//!
//! | Range type | Tag |
//! |------------|-----|
//! | `&[T]`, `&mut [T]`, `&Vec<T>`, `&mut Vec<T>` | [`RandomAccessHostTag`] |
//! | [`Forward<I>`] (from [`forward`]) | [`ForwardHostTag`] |
//! | [`Bidirectional<I>`] (from [`bidirectional`]) | [`BidirectionalHostTag`] |
//! | `&DeviceVector<T>`, `&mut DeviceVector<T>`, `DeviceView`, `DeviceViewMut` | [`RandomAccessDeviceTag`] |

pub mod tag;

pub use tag::{
    BidirectionalDeviceTag, BidirectionalHostTag, BidirectionalTraversal, DeviceSpace,
    ExecutionSpace, ForwardDeviceTag, ForwardHostTag, ForwardTraversal, HostSpace, IteratorTag,
    RandomAccessDeviceTag, RandomAccessHostTag, RandomAccessTraversal, Tag, TraversalCategory,
};

use crate::error::{Error, Result};
use crate::runtime::device::Device;

/// A range of elements with a statically known capability tag
pub trait Range {
    /// Element type
    type Item: Copy + Send + Sync;
    /// Capability tag used for dispatch
    type Tag: Tag;
}

/// Host range readable front to back
pub trait HostInput: Range {
    /// Iterator over the range's elements
    type IntoIter: Iterator<Item = Self::Item>;

    /// Consume the range into an iterator
    fn into_host_iter(self) -> Self::IntoIter;
}

/// Random-access host memory
pub trait HostSlice: Range {
    /// The elements as a slice
    fn host_slice(&self) -> &[Self::Item];
}

/// Writable random-access host memory
pub trait HostSliceMut: HostSlice {
    /// The elements as a mutable slice
    fn host_slice_mut(&mut self) -> &mut [Self::Item];
}

/// Random-access device memory
pub trait DeviceSlice: Range {
    /// Device owning the memory
    fn device(&self) -> &Device;

    /// The elements as a slice of device memory
    fn device_slice(&self) -> &[Self::Item];
}

/// Writable random-access device memory
pub trait DeviceSliceMut: DeviceSlice {
    /// The owning device together with the writable elements
    fn split_device_mut(&mut self) -> (&Device, &mut [Self::Item]);
}

/// Values usable as gather indices
pub trait IndexValue: Copy + Send + Sync {
    /// The index, or `None` when the value cannot address an element
    fn to_index(self) -> Option<usize>;
}

macro_rules! impl_index_value {
    ($($t:ty),*) => {
        $(
            impl IndexValue for $t {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_index_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Check that an output range can hold `required` elements
///
/// Returns the writable prefix of length `required`.
pub(crate) fn output_prefix<'a, T>(
    output: &'a mut [T],
    required: usize,
    op: &'static str,
) -> Result<&'a mut [T]> {
    let got = output.len();
    output
        .get_mut(..required)
        .ok_or_else(|| Error::length_mismatch(op, required, got))
}

/// Check that an input range holds at least `required` elements
pub(crate) fn input_prefix<'a, T>(
    input: &'a [T],
    required: usize,
    op: &'static str,
) -> Result<&'a [T]> {
    input
        .get(..required)
        .ok_or_else(|| Error::length_mismatch(op, required, input.len()))
}

// ============================================================================
// Host slices
// ============================================================================

macro_rules! impl_host_slice_ranges {
    ($($ty:ty),*) => {
        $(
            impl<'a, T: Copy + Send + Sync> Range for $ty {
                type Item = T;
                type Tag = RandomAccessHostTag;
            }

            impl<'a, T: Copy + Send + Sync> HostSlice for $ty {
                #[inline]
                fn host_slice(&self) -> &[T] {
                    self
                }
            }
        )*
    };
}

impl_host_slice_ranges!(&'a [T], &'a mut [T], &'a Vec<T>, &'a mut Vec<T>);

impl<'a, T: Copy + Send + Sync> HostSliceMut for &'a mut [T] {
    #[inline]
    fn host_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<'a, T: Copy + Send + Sync> HostSliceMut for &'a mut Vec<T> {
    #[inline]
    fn host_slice_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T: Copy + Send + Sync> HostInput for &'a [T] {
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_host_iter(self) -> Self::IntoIter {
        self.iter().copied()
    }
}

impl<'a, T: Copy + Send + Sync> HostInput for &'a Vec<T> {
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_host_iter(self) -> Self::IntoIter {
        self.iter().copied()
    }
}

// ============================================================================
// Iterator adapters
// ============================================================================

/// A forward-only host range over any iterator
#[derive(Clone, Debug)]
pub struct Forward<I>(I);

/// A bidirectional host range over a double-ended iterator
#[derive(Clone, Debug)]
pub struct Bidirectional<I>(I);

/// Wrap an iterator as a forward host range
///
/// Forward ranges can be read once, front to back, so they only reach the
/// serial host implementations.
pub fn forward<I>(iter: I) -> Forward<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Copy + Send + Sync,
{
    Forward(iter.into_iter())
}

/// Wrap a double-ended iterator as a bidirectional host range
pub fn bidirectional<I>(iter: I) -> Bidirectional<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: Copy + Send + Sync,
{
    Bidirectional(iter.into_iter())
}

impl<I> Range for Forward<I>
where
    I: Iterator,
    I::Item: Copy + Send + Sync,
{
    type Item = I::Item;
    type Tag = ForwardHostTag;
}

impl<I> HostInput for Forward<I>
where
    I: Iterator,
    I::Item: Copy + Send + Sync,
{
    type IntoIter = I;

    fn into_host_iter(self) -> I {
        self.0
    }
}

impl<I> Range for Bidirectional<I>
where
    I: DoubleEndedIterator,
    I::Item: Copy + Send + Sync,
{
    type Item = I::Item;
    type Tag = BidirectionalHostTag;
}

impl<I> HostInput for Bidirectional<I>
where
    I: DoubleEndedIterator,
    I::Item: Copy + Send + Sync,
{
    type IntoIter = I;

    fn into_host_iter(self) -> I {
        self.0
    }
}
