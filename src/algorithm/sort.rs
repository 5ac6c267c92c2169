//! Sorting entry points.
//!
//! `sort` and `sort_by_key` take radix keys and always run the radix engine;
//! the `_by` and `_with` variants take a comparator and run the merge engine.
//! Every sort is stable, so each unstable name is the same as its stable one.

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, RadixSortByKeyDispatch, RadixSortDispatch,
};
use crate::sorting::{self, RadixKey};
use std::cmp::Ordering;

/// Sort `keys` ascending
///
/// ```
/// let mut keys = vec![2.5f32, -1.0, 0.0, -7.25];
/// tandem::sort(&mut keys)?;
/// assert_eq!(keys, [-7.25, -1.0, 0.0, 2.5]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn sort<R>(keys: R) -> Result<()>
where
    R: Range,
    R::Item: RadixKey,
    R::Tag: RadixSortDispatch<R>,
{
    sorting::stable_radix_sort(keys)
}

/// Sort `keys` ascending, keeping equal keys in input order
pub fn stable_sort<R>(keys: R) -> Result<()>
where
    R: Range,
    R::Item: RadixKey,
    R::Tag: RadixSortDispatch<R>,
{
    sorting::stable_radix_sort(keys)
}

/// Sort `data` under `comp`
pub fn sort_by<R, C>(data: R, comp: C) -> Result<()>
where
    R: Range,
    R::Tag: ComparisonSortDispatch<R>,
    C: Fn(&R::Item, &R::Item) -> Ordering + Sync,
{
    sorting::stable_merge_sort(data, comp)
}

/// Sort `data` under `comp`, keeping equivalent elements in input order
pub fn stable_sort_by<R, C>(data: R, comp: C) -> Result<()>
where
    R: Range,
    R::Tag: ComparisonSortDispatch<R>,
    C: Fn(&R::Item, &R::Item) -> Ordering + Sync,
{
    sorting::stable_merge_sort(data, comp)
}

/// Sort `keys` ascending and permute the prefix of `values` identically
///
/// ```
/// let mut keys = vec![3u8, 1, 3, 0];
/// let mut values = vec!['a', 'b', 'c', 'd'];
/// tandem::sort_by_key(&mut keys, &mut values)?;
/// assert_eq!(keys, [0, 1, 3, 3]);
/// assert_eq!(values, ['d', 'b', 'a', 'c']);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn sort_by_key<K, V>(keys: K, values: V) -> Result<()>
where
    K: Range,
    V: Range,
    K::Item: RadixKey,
    (K::Tag, V::Tag): RadixSortByKeyDispatch<K, V>,
{
    sorting::stable_radix_sort_by_key(keys, values)
}

/// Stable form of [`sort_by_key`]
pub fn stable_sort_by_key<K, V>(keys: K, values: V) -> Result<()>
where
    K: Range,
    V: Range,
    K::Item: RadixKey,
    (K::Tag, V::Tag): RadixSortByKeyDispatch<K, V>,
{
    sorting::stable_radix_sort_by_key(keys, values)
}

/// Sort `keys` under `comp` and permute the prefix of `values` identically
pub fn sort_by_key_with<K, V, C>(keys: K, values: V, comp: C) -> Result<()>
where
    K: Range,
    V: Range,
    (K::Tag, V::Tag): ComparisonSortByKeyDispatch<K, V>,
    C: Fn(&K::Item, &K::Item) -> Ordering + Sync,
{
    sorting::stable_merge_sort_by_key(keys, values, comp)
}

/// Stable form of [`sort_by_key_with`]
pub fn stable_sort_by_key_with<K, V, C>(keys: K, values: V, comp: C) -> Result<()>
where
    K: Range,
    V: Range,
    (K::Tag, V::Tag): ComparisonSortByKeyDispatch<K, V>,
    C: Fn(&K::Item, &K::Item) -> Ordering + Sync,
{
    sorting::stable_merge_sort_by_key(keys, values, comp)
}
