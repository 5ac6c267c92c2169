//! Sorting engines
//!
//! Two engines back every sort entry point:
//!
//! - **radix** sort for [`RadixKey`] types (`sort`, `stable_sort`,
//!   `sort_by_key`, `stable_sort_by_key`), always ascending and stable
//! - **merge** sort for any `Copy` element under a comparator (`sort_by`,
//!   `stable_sort_by`, `sort_by_key_with`, `stable_sort_by_key_with`)
//!
//! On the device, radix keys take one of three paths chosen by
//! [`RadixKey::WIDTH`]; see [`KeyWidth`].

pub(crate) mod radix;
mod radix_key;

pub use radix_key::{KeyWidth, RadixKey, RadixWord};

use crate::error::Result;
use crate::iter::Range;
use crate::ops::traits::{
    ComparisonSortByKeyDispatch, ComparisonSortDispatch, RadixSortByKeyDispatch, RadixSortDispatch,
};
use std::cmp::Ordering;

/// Stable ascending radix sort of `keys`
///
/// ```
/// let mut keys = vec![5i32, -3, 2, 2, 0];
/// tandem::sorting::stable_radix_sort(&mut keys)?;
/// assert_eq!(keys, [-3, 0, 2, 2, 5]);
/// # Ok::<(), tandem::error::Error>(())
/// ```
pub fn stable_radix_sort<R>(keys: R) -> Result<()>
where
    R: Range,
    R::Item: RadixKey,
    R::Tag: RadixSortDispatch<R>,
{
    <R::Tag as RadixSortDispatch<R>>::stable_radix_sort(keys)
}

/// Stable ascending radix sort of `keys`, permuting `values` identically
///
/// `values` must hold at least as many elements as `keys`; only that prefix
/// moves.
pub fn stable_radix_sort_by_key<K, V>(keys: K, values: V) -> Result<()>
where
    K: Range,
    V: Range,
    K::Item: RadixKey,
    (K::Tag, V::Tag): RadixSortByKeyDispatch<K, V>,
{
    <(K::Tag, V::Tag) as RadixSortByKeyDispatch<K, V>>::stable_radix_sort_by_key(keys, values)
}

/// Stable merge sort of `data` under `comp`
pub fn stable_merge_sort<R, C>(data: R, comp: C) -> Result<()>
where
    R: Range,
    R::Tag: ComparisonSortDispatch<R>,
    C: Fn(&R::Item, &R::Item) -> Ordering + Sync,
{
    <R::Tag as ComparisonSortDispatch<R>>::stable_sort_by(data, comp)
}

/// Stable merge sort of `keys` under `comp`, permuting `values` identically
pub fn stable_merge_sort_by_key<K, V, C>(keys: K, values: V, comp: C) -> Result<()>
where
    K: Range,
    V: Range,
    (K::Tag, V::Tag): ComparisonSortByKeyDispatch<K, V>,
    C: Fn(&K::Item, &K::Item) -> Ordering + Sync,
{
    <(K::Tag, V::Tag) as ComparisonSortByKeyDispatch<K, V>>::stable_sort_by_key_with(
        keys, values, comp,
    )
}
