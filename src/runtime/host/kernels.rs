//! Host kernels over random-access slices
//!
//! Inputs of at least [`PARALLEL_THRESHOLD`] elements run on the rayon pool
//! when the `rayon` feature is enabled; everything else runs serially with
//! identical results.

use crate::error::{Error, Result};
use crate::iter::IndexValue;
use std::cmp::Ordering;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: smaller inputs stay on the calling thread
pub const PARALLEL_THRESHOLD: usize = 16 * 1024;

const CHUNK_SIZE: usize = 4096;

/// Left fold of `unary_op(i, input[i])` into `init`
pub fn transform_reduce_indexed<T, O, U, F>(input: &[T], unary_op: U, init: O, binary_op: F) -> O
where
    T: Copy + Sync,
    O: Copy + Send + Sync,
    U: Fn(usize, T) -> O + Sync,
    F: Fn(O, O) -> O + Sync,
{
    #[cfg(feature = "rayon")]
    if input.len() >= PARALLEL_THRESHOLD {
        log::debug!("host reduce: parallel over {} elements", input.len());
        // rayon combines adjacent partials only, so operand order survives
        return match input
            .par_iter()
            .enumerate()
            .map(|(i, &x)| unary_op(i, x))
            .reduce_with(&binary_op)
        {
            Some(total) => binary_op(init, total),
            None => init,
        };
    }

    serial_transform_reduce(input.iter().copied(), unary_op, init, binary_op)
}

/// Sequential left fold of `unary_op(i, x)` over any iterator
pub fn serial_transform_reduce<I, O, U, F>(iter: I, unary_op: U, init: O, binary_op: F) -> O
where
    I: Iterator,
    U: Fn(usize, I::Item) -> O,
    F: Fn(O, O) -> O,
{
    iter.enumerate()
        .fold(init, |acc, (i, x)| binary_op(acc, unary_op(i, x)))
}

/// `out[i] = f(i)`
pub fn vectorize<T, F>(out: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    vectorize_in_place(out, |i, slot| *slot = f(i));
}

/// `f(i, &mut data[i])`
pub fn vectorize_in_place<T, F>(data: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    #[cfg(feature = "rayon")]
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(CHUNK_SIZE)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let base = chunk_idx * CHUNK_SIZE;
                for (i, slot) in chunk.iter_mut().enumerate() {
                    f(base + i, slot);
                }
            });
        return;
    }

    for (i, slot) in data.iter_mut().enumerate() {
        f(i, slot);
    }
}

/// `f(x)` for every element, in no particular order above the threshold
pub fn for_each<T, F>(input: &[T], f: F)
where
    T: Copy + Sync,
    F: Fn(T) + Sync,
{
    #[cfg(feature = "rayon")]
    if input.len() >= PARALLEL_THRESHOLD {
        input.par_iter().for_each(|&x| f(x));
        return;
    }

    input.iter().for_each(|&x| f(x));
}

/// `out.copy_from_slice(input)`, chunked across the pool for large inputs
pub fn copy<T: Copy + Send + Sync>(input: &[T], out: &mut [T]) {
    debug_assert_eq!(input.len(), out.len());

    #[cfg(feature = "rayon")]
    if input.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(CHUNK_SIZE)
            .zip(input.par_chunks(CHUNK_SIZE))
            .for_each(|(o, i)| o.copy_from_slice(i));
        return;
    }

    out.copy_from_slice(input);
}

/// Sequential inclusive scan of `iter` into `out`, returning the count written
pub fn inclusive_scan<I, O, F>(iter: I, out: &mut [O], op: F) -> usize
where
    I: Iterator<Item = O>,
    O: Copy,
    F: Fn(O, O) -> O,
{
    let mut acc: Option<O> = None;
    let mut written = 0;
    for (slot, x) in out.iter_mut().zip(iter) {
        let next = match acc {
            Some(prev) => op(prev, x),
            None => x,
        };
        *slot = next;
        acc = Some(next);
        written += 1;
    }
    written
}

/// Sequential exclusive scan seeded with `init`, returning the count written
pub fn exclusive_scan<I, O, F>(iter: I, out: &mut [O], init: O, op: F) -> usize
where
    I: Iterator<Item = O>,
    O: Copy,
    F: Fn(O, O) -> O,
{
    let mut acc = init;
    let mut written = 0;
    for (slot, x) in out.iter_mut().zip(iter) {
        *slot = acc;
        acc = op(acc, x);
        written += 1;
    }
    written
}

/// Stable sort under `comp`
pub fn stable_sort_by<T, C>(data: &mut [T], comp: C)
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    #[cfg(feature = "rayon")]
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_sort_by(comp);
        return;
    }

    data.sort_by(comp);
}

/// Stable sort of `keys` under `comp`, permuting `values` alongside
///
/// `values` must be at least as long as `keys`; only its prefix moves.
pub fn stable_sort_pairs_by<K, V, C>(keys: &mut [K], values: &mut [V], comp: C)
where
    K: Copy + Send + Sync,
    V: Copy + Send + Sync,
    C: Fn(&K, &K) -> Ordering + Sync,
{
    let n = keys.len();
    let mut perm: Vec<usize> = (0..n).collect();
    {
        let keys: &[K] = keys;
        stable_sort_by(&mut perm, |&a, &b| comp(&keys[a], &keys[b]));
    }
    let sorted_keys: Vec<K> = perm.iter().map(|&i| keys[i]).collect();
    let sorted_values: Vec<V> = perm.iter().map(|&i| values[i]).collect();
    keys.copy_from_slice(&sorted_keys);
    values[..n].copy_from_slice(&sorted_values);
}

/// Stable partition of `input` into `out`, returning the number selected
pub fn stable_partition_copy<T, P>(input: &[T], out: &mut [T], pred: P) -> usize
where
    T: Copy,
    P: Fn(T) -> bool,
{
    debug_assert_eq!(input.len(), out.len());
    let selected = input.iter().filter(|&&x| pred(x)).count();
    let (mut front, mut back) = (0, selected);
    for &x in input {
        if pred(x) {
            out[front] = x;
            front += 1;
        } else {
            out[back] = x;
            back += 1;
        }
    }
    selected
}

fn index_of<M: IndexValue>(m: M) -> usize {
    m.to_index().unwrap_or(usize::MAX)
}

/// Fail unless every selected entry of `map` addresses one of `len` elements
pub fn validate_indices<M, S>(map: &[M], len: usize, selected: S) -> Result<()>
where
    M: IndexValue,
    S: Fn(usize) -> bool,
{
    match map
        .iter()
        .enumerate()
        .find(|&(i, &m)| selected(i) && index_of(m) >= len)
    {
        Some((_, &m)) => Err(Error::IndexOutOfBounds {
            index: index_of(m),
            len,
        }),
        None => Ok(()),
    }
}

/// `out[i] = input[map[i]]`, wherever `selected(i)`
pub fn gather<M, T, S>(map: &[M], input: &[T], out: &mut [T], selected: S) -> Result<()>
where
    M: IndexValue,
    T: Copy + Send + Sync,
    S: Fn(usize) -> bool + Sync,
{
    validate_indices(map, input.len(), &selected)?;
    vectorize_in_place(out, |i, slot| {
        if selected(i) {
            *slot = input[index_of(map[i])];
        }
    });
    Ok(())
}
