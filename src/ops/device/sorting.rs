//! Device implementation of sorts.

use super::same_device;
use crate::error::Result;
use crate::iter::{DeviceSliceMut, RandomAccessDeviceTag, output_prefix};
use crate::ops::traits::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, RadixSortByKeyDispatch, RadixSortDispatch,
};
use crate::runtime::device::kernels::merge_sort::stable_merge_sort_by;
use crate::runtime::device::kernels::vectorize::vectorize;
use crate::runtime::device::{DeviceBuffer, DeviceElement};
use crate::sorting::RadixKey;
use crate::sorting::radix;
use std::cmp::Ordering;

impl<R: DeviceSliceMut> RadixSortDispatch<R> for RandomAccessDeviceTag {
    fn stable_radix_sort(mut keys: R) -> Result<()>
    where
        R::Item: RadixKey,
    {
        let (device, keys) = keys.split_device_mut();
        radix::device_sort_keys(device, keys)
    }
}

impl<K, V> RadixSortByKeyDispatch<K, V> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    K: DeviceSliceMut,
    V: DeviceSliceMut,
    V::Item: DeviceElement,
{
    fn stable_radix_sort_by_key(mut keys: K, mut values: V) -> Result<()>
    where
        K::Item: RadixKey,
    {
        same_device(keys.device(), &[values.device()])?;
        let (device, keys) = keys.split_device_mut();
        let (_, values) = values.split_device_mut();
        let values = output_prefix(values, keys.len(), "sort_by_key")?;
        radix::device_sort_pairs(device, keys, values)
    }
}

impl<R: DeviceSliceMut> ComparisonSortDispatch<R> for RandomAccessDeviceTag {
    fn stable_sort_by<C>(mut data: R, comp: C) -> Result<()>
    where
        C: Fn(&R::Item, &R::Item) -> Ordering + Sync,
    {
        let (device, data) = data.split_device_mut();
        stable_merge_sort_by(device, data, &comp)
    }
}

impl<K, V> ComparisonSortByKeyDispatch<K, V> for (RandomAccessDeviceTag, RandomAccessDeviceTag)
where
    K: DeviceSliceMut,
    V: DeviceSliceMut,
{
    fn stable_sort_by_key_with<C>(mut keys: K, mut values: V, comp: C) -> Result<()>
    where
        C: Fn(&K::Item, &K::Item) -> Ordering + Sync,
    {
        same_device(keys.device(), &[values.device()])?;
        let (device, keys) = keys.split_device_mut();
        let (_, values) = values.split_device_mut();
        let values = output_prefix(values, keys.len(), "sort_by_key_with")?;

        let mut pairs = DeviceBuffer::with_capacity(keys.len(), device)?;
        pairs
            .storage_mut()
            .extend(keys.iter().copied().zip(values.iter().copied()));
        stable_merge_sort_by(device, &mut pairs, &|a: &(K::Item, V::Item), b: &(K::Item, V::Item)| {
            comp(&a.0, &b.0)
        })?;

        let pairs = pairs.as_slice();
        vectorize(device, keys, |i| pairs[i].0)?;
        vectorize(device, values, |i| pairs[i].1)
    }
}
