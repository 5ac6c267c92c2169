//! Sort dispatch.

use crate::error::Result;
use crate::iter::Range;
use crate::sorting::RadixKey;
use std::cmp::Ordering;

/// Ascending stable sort of radix keys
pub trait RadixSortDispatch<R: Range> {
    /// Sort `keys` ascending
    fn stable_radix_sort(keys: R) -> Result<()>
    where
        R::Item: RadixKey;
}

/// Ascending stable sort of radix keys carrying values
pub trait RadixSortByKeyDispatch<K: Range, V: Range> {
    /// Sort `keys` ascending, permuting the prefix of `values` identically
    fn stable_radix_sort_by_key(keys: K, values: V) -> Result<()>
    where
        K::Item: RadixKey;
}

/// Stable sort under a comparator
pub trait ComparisonSortDispatch<R: Range> {
    /// Sort `data` so that `comp` never reports a later element as less than an earlier one
    fn stable_sort_by<C>(data: R, comp: C) -> Result<()>
    where
        C: Fn(&R::Item, &R::Item) -> Ordering + Sync;
}

/// Stable sort of keys under a comparator, carrying values
pub trait ComparisonSortByKeyDispatch<K: Range, V: Range> {
    /// Sort `keys` under `comp`, permuting the prefix of `values` identically
    fn stable_sort_by_key_with<C>(keys: K, values: V, comp: C) -> Result<()>
    where
        C: Fn(&K::Item, &K::Item) -> Ordering + Sync;
}
