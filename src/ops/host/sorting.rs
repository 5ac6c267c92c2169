//! Host implementation of sorts.

use crate::error::Result;
use crate::iter::{HostSliceMut, RandomAccessHostTag, output_prefix};
use crate::ops::traits::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, RadixSortByKeyDispatch, RadixSortDispatch,
};
use crate::runtime::host::kernels;
use crate::sorting::RadixKey;
use crate::sorting::radix;
use std::cmp::Ordering;

impl<R: HostSliceMut> RadixSortDispatch<R> for RandomAccessHostTag {
    fn stable_radix_sort(mut keys: R) -> Result<()>
    where
        R::Item: RadixKey,
    {
        radix::host_sort_keys(keys.host_slice_mut());
        Ok(())
    }
}

impl<K, V> RadixSortByKeyDispatch<K, V> for (RandomAccessHostTag, RandomAccessHostTag)
where
    K: HostSliceMut,
    V: HostSliceMut,
{
    fn stable_radix_sort_by_key(mut keys: K, mut values: V) -> Result<()>
    where
        K::Item: RadixKey,
    {
        let keys = keys.host_slice_mut();
        let values = output_prefix(values.host_slice_mut(), keys.len(), "sort_by_key")?;
        radix::host_sort_pairs(keys, values);
        Ok(())
    }
}

impl<R: HostSliceMut> ComparisonSortDispatch<R> for RandomAccessHostTag {
    fn stable_sort_by<C>(mut data: R, comp: C) -> Result<()>
    where
        C: Fn(&R::Item, &R::Item) -> Ordering + Sync,
    {
        kernels::stable_sort_by(data.host_slice_mut(), comp);
        Ok(())
    }
}

impl<K, V> ComparisonSortByKeyDispatch<K, V> for (RandomAccessHostTag, RandomAccessHostTag)
where
    K: HostSliceMut,
    V: HostSliceMut,
{
    fn stable_sort_by_key_with<C>(mut keys: K, mut values: V, comp: C) -> Result<()>
    where
        C: Fn(&K::Item, &K::Item) -> Ordering + Sync,
    {
        let keys = keys.host_slice_mut();
        let values = output_prefix(values.host_slice_mut(), keys.len(), "sort_by_key_with")?;
        kernels::stable_sort_pairs_by(keys, values, comp);
        Ok(())
    }
}
