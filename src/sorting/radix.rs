//! Radix sort paths by key width
//!
//! The device word sort handles one `u32` word and one optional `u32` payload.
//! Everything else is built on top of it:
//!
//! - **small**: 8/16/32-bit keys whose values are 32 bits wide; the values
//!   ride along as the payload
//! - **permute**: 8/16/32-bit keys with any other value type; an index
//!   permutation rides along and the values are gathered through it
//! - **wide**: 64-bit keys; the permutation is sorted by the low word, then
//!   stably by the high word, and keys and values are gathered through it
//!
//! Before each word sort, a grid reduction finds the smallest and largest
//! encoded word. Only the low bits in which they differ are sorted, so a
//! constant chunk costs no passes at all.

use super::radix_key::{KeyWidth, RadixKey, RadixWord};
use crate::error::{Error, Result};
use crate::runtime::device::kernels::radix_sort::{Passenger, radix_sort_words, significant_bits};
use crate::runtime::device::kernels::reduce::transform_reduce_indexed;
use crate::runtime::device::kernels::vectorize::vectorize;
use crate::runtime::device::{Device, DeviceBuffer, DeviceElement};
use crate::runtime::host::kernels as host;
use std::mem::size_of;

fn check_len(n: usize) -> Result<()> {
    if u32::try_from(n).is_err() {
        return Err(Error::invalid_argument(
            "keys",
            format!("radix sort indexes elements with u32, got {n} elements"),
        ));
    }
    Ok(())
}

/// Low bits that distinguish the words in `words`
fn word_bits(device: &Device, words: &[u32]) -> Result<u32> {
    let (min, max) = transform_reduce_indexed(
        device,
        words,
        |_, w| (w, w),
        (u32::MAX, 0),
        |a, b| (a.0.min(b.0), a.1.max(b.1)),
    )?;
    Ok(significant_bits(min, max))
}

fn sort_words<P: Passenger>(device: &Device, words: &mut [u32], payload: &mut [P]) -> Result<()> {
    let bits = word_bits(device, words)?;
    radix_sort_words(device, words, payload, bits)
}

fn encode_low<K: RadixKey>(device: &Device, keys: &[K]) -> Result<DeviceBuffer<u32>> {
    let mut words = DeviceBuffer::filled(keys.len(), 0u32, device)?;
    vectorize(device, &mut words, |i| keys[i].encode().low_word())?;
    Ok(words)
}

fn identity_permutation(device: &Device, n: usize) -> Result<DeviceBuffer<u32>> {
    let mut perm = DeviceBuffer::filled(n, 0u32, device)?;
    // n fits in u32, checked by the caller
    vectorize(device, &mut perm, |i| i as u32)?;
    Ok(perm)
}

/// `out[i] = staged[perm[i]]`
///
/// Allocates nothing, so it cannot fail halfway once scratch is in place.
fn apply_permutation<T: DeviceElement>(
    device: &Device,
    perm: &[u32],
    staged: &[T],
    out: &mut [T],
) -> Result<()> {
    vectorize(device, out, |i| staged[perm[i] as usize])
}

/// Decode sorted narrow or word encodings back into `keys`
fn decode_words<K: RadixKey>(device: &Device, words: &[u32], keys: &mut [K]) -> Result<()> {
    vectorize(device, keys, |i| K::decode(K::Encoded::from_low_word(words[i])))
}

/// Stable ascending device sort of `keys`
pub(crate) fn device_sort_keys<K: RadixKey>(device: &Device, keys: &mut [K]) -> Result<()> {
    let n = keys.len();
    check_len(n)?;
    if n <= 1 {
        return Ok(());
    }
    match K::WIDTH {
        KeyWidth::Narrow | KeyWidth::Word => {
            log::debug!("radix sort: {n} keys, single word");
            let mut words = encode_low(device, keys)?;
            let mut units = vec![(); n];
            sort_words(device, &mut words, &mut units)?;
            decode_words(device, &words, keys)
        }
        KeyWidth::Wide => {
            log::debug!("radix sort: {n} keys, two words");
            let perm = wide_permutation(device, keys)?;
            let staged = DeviceBuffer::from_slice(keys, device)?;
            apply_permutation(device, &perm, &staged, keys)
        }
    }
}

/// Stable ascending device sort of `keys`, permuting `values` identically
///
/// `values` must be exactly as long as `keys`.
pub(crate) fn device_sort_pairs<K, V>(device: &Device, keys: &mut [K], values: &mut [V]) -> Result<()>
where
    K: RadixKey,
    V: DeviceElement,
{
    let n = keys.len();
    if values.len() != n {
        return Err(Error::length_mismatch("stable_radix_sort_by_key", n, values.len()));
    }
    check_len(n)?;
    if n <= 1 {
        return Ok(());
    }

    // every allocation happens before the first write to `keys` or
    // `values`, so running out of memory leaves both untouched
    if K::WIDTH == KeyWidth::Wide {
        log::debug!("radix sort: {n} pairs, wide path");
        let perm = wide_permutation(device, keys)?;
        let staged_keys = DeviceBuffer::from_slice(keys, device)?;
        let staged_values = DeviceBuffer::from_slice(values, device)?;
        apply_permutation(device, &perm, &staged_keys, keys)?;
        return apply_permutation(device, &perm, &staged_values, values);
    }

    let mut words = encode_low(device, keys)?;
    if size_of::<V>() == size_of::<u32>() {
        if let Ok(words_of_values) = bytemuck::try_cast_slice_mut::<V, u32>(values) {
            log::debug!("radix sort: {n} pairs, small path");
            let mut payload = DeviceBuffer::from_slice(words_of_values, device)?;
            sort_words(device, &mut words, &mut payload)?;
            decode_words(device, &words, keys)?;
            words_of_values.copy_from_slice(&payload);
            return Ok(());
        }
    }

    log::debug!("radix sort: {n} pairs, permute path");
    let mut perm = identity_permutation(device, n)?;
    sort_words(device, &mut words, &mut perm)?;
    let staged_values = DeviceBuffer::from_slice(values, device)?;
    decode_words(device, &words, keys)?;
    apply_permutation(device, &perm, &staged_values, values)
}

/// Permutation ordering 64-bit `keys` by their low chunk, then stably by their high chunk
fn wide_permutation<K: RadixKey>(device: &Device, keys: &[K]) -> Result<DeviceBuffer<u32>> {
    let n = keys.len();
    let mut perm = identity_permutation(device, n)?;

    let mut low = encode_low(device, keys)?;
    sort_words(device, &mut low, &mut perm)?;
    drop(low);

    let mut high = DeviceBuffer::filled(n, 0u32, device)?;
    {
        let perm = perm.as_slice();
        vectorize(device, &mut high, |i| keys[perm[i] as usize].encode().high_word())?;
    }
    sort_words(device, &mut high, &mut perm)?;
    Ok(perm)
}

/// Stable ascending host sort of `keys` by their encodings
pub(crate) fn host_sort_keys<K: RadixKey>(keys: &mut [K]) {
    host::stable_sort_by(keys, |a, b| a.encode().cmp(&b.encode()));
}

/// Stable ascending host sort of `keys`, permuting the prefix of `values`
pub(crate) fn host_sort_pairs<K, V>(keys: &mut [K], values: &mut [V])
where
    K: RadixKey,
    V: Copy + Send + Sync,
{
    host::stable_sort_pairs_by(keys, values, |a, b| a.encode().cmp(&b.encode()));
}
