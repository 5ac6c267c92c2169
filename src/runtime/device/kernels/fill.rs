//! Fill with wide-word stores
//!
//! Elements of 1, 2 or 4 bytes are packed into a `u64` exemplar. The region
//! from the first [`ALIGNMENT_BOUNDARY`] at or after the start down to the last
//! whole word is stored word by word; the head and tail use per-element
//! stores. Any other element size, or a body the word cast refuses, takes the
//! per-element path throughout.

use super::vectorize::vectorize;
use crate::error::Result;
use crate::runtime::device::Device;
use bytemuck::Pod;
use std::mem::size_of;

/// Word used by the packed path
pub type WideWord = u64;

/// Byte boundary the packed region starts on
pub const ALIGNMENT_BOUNDARY: usize = 128;

/// How a fill of `len` elements is split into narrow head, packed body and narrow tail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillPlan {
    /// Elements stored one by one before the packed region
    pub head: usize,
    /// Wide words in the packed region
    pub words: usize,
    /// Elements stored one by one after the packed region
    pub tail: usize,
}

impl FillPlan {
    /// Plan a fill of `len` elements of `elem_size` bytes starting at address `addr`
    ///
    /// Returns `None` when the element size cannot be packed.
    pub fn new(addr: usize, len: usize, elem_size: usize) -> Option<Self> {
        if !use_wide_fill(elem_size) || addr % elem_size != 0 {
            return None;
        }
        let lanes = size_of::<WideWord>() / elem_size;
        let aligned = addr.next_multiple_of(ALIGNMENT_BOUNDARY);
        let head = ((aligned - addr) / elem_size).min(len);
        let words = (len - head) / lanes;
        Some(Self {
            head,
            words,
            tail: len - head - words * lanes,
        })
    }
}

/// Whether elements of `elem_size` bytes can share a wide word
pub fn use_wide_fill(elem_size: usize) -> bool {
    matches!(elem_size, 1 | 2 | 4)
}

/// Set every element of `data` to `value`
pub fn fill<T>(device: &Device, data: &mut [T], value: T) -> Result<()>
where
    T: Pod + Send + Sync,
{
    match FillPlan::new(data.as_ptr() as usize, data.len(), size_of::<T>()) {
        Some(plan) => wide_fill(device, data, value, plan),
        None => {
            log::debug!("fill: narrow path for {}-byte elements", size_of::<T>());
            narrow_fill(device, data, value)
        }
    }
}

fn narrow_fill<T>(device: &Device, data: &mut [T], value: T) -> Result<()>
where
    T: Pod + Send + Sync,
{
    vectorize(device, data, |_| value)
}

fn wide_fill<T>(device: &Device, data: &mut [T], value: T, plan: FillPlan) -> Result<()>
where
    T: Pod + Send + Sync,
{
    let mut exemplar: WideWord = 0;
    bytemuck::cast_slice_mut::<WideWord, T>(std::slice::from_mut(&mut exemplar)).fill(value);

    let lanes = size_of::<WideWord>() / size_of::<T>();
    let (head, rest) = data.split_at_mut(plan.head);
    let (body, tail) = rest.split_at_mut(plan.words * lanes);

    narrow_fill(device, head, value)?;
    match bytemuck::try_cast_slice_mut::<T, WideWord>(body) {
        Ok(words) => {
            log::debug!(
                "fill: wide path, head={} words={} tail={}",
                plan.head,
                plan.words,
                plan.tail
            );
            vectorize(device, words, |_| exemplar)?;
        }
        Err(_) => narrow_fill(device, body, value)?,
    }
    narrow_fill(device, tail, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_unpackable_sizes() {
        assert_eq!(FillPlan::new(0, 100, 8), None);
        assert_eq!(FillPlan::new(0, 100, 3), None);
        assert_eq!(FillPlan::new(0, 100, 16), None);
    }

    #[test]
    fn test_plan_aligned_start() {
        let plan = FillPlan::new(1024, 100, 1).unwrap();
        assert_eq!(plan, FillPlan { head: 0, words: 12, tail: 4 });
    }

    #[test]
    fn test_plan_unaligned_start() {
        // 4-byte elements 8 bytes short of a boundary: two narrow, then words
        let plan = FillPlan::new(120, 11, 4).unwrap();
        assert_eq!(plan, FillPlan { head: 2, words: 4, tail: 1 });
    }

    #[test]
    fn test_plan_shorter_than_head() {
        let plan = FillPlan::new(130, 5, 2).unwrap();
        assert_eq!(plan, FillPlan { head: 5, words: 0, tail: 0 });
        let plan = FillPlan::new(130, 0, 2).unwrap();
        assert_eq!(plan, FillPlan { head: 0, words: 0, tail: 0 });
    }

    #[test]
    fn test_plan_covers_every_element() {
        for addr in (0..256).step_by(2) {
            for len in 0..300 {
                let plan = FillPlan::new(addr, len, 2).unwrap();
                assert_eq!(plan.head + plan.words * 4 + plan.tail, len);
                if plan.words > 0 {
                    assert_eq!((addr + plan.head * 2) % ALIGNMENT_BOUNDARY, 0);
                    assert!(plan.tail < 4);
                }
            }
        }
    }

    #[test]
    fn test_fill_matches_elementwise() {
        let device = Device::builder().worker_threads(2).build().unwrap();
        let mut storage = vec![0u16; 1024];
        for offset in 0..9 {
            for len in [0usize, 1, 3, 4, 63, 64, 65, 200, 700] {
                storage.iter_mut().for_each(|x| *x = 0);
                fill(&device, &mut storage[offset..offset + len], 0xBEEF).unwrap();
                for (i, &x) in storage.iter().enumerate() {
                    let inside = i >= offset && i < offset + len;
                    assert_eq!(x, if inside { 0xBEEF } else { 0 }, "offset {offset} len {len} i {i}");
                }
            }
        }
    }
}
