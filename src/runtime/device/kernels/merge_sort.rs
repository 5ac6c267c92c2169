//! Stable merge sort with a user comparator
//!
//! Groups first sort [`MERGE_TILE`]-element tiles, then sorted runs are merged
//! pairwise, doubling the run length each level, ping-ponging between the
//! caller's slice and one scratch buffer. Ties always take the left run first.

use crate::error::Result;
use crate::runtime::device::Device;
use crate::runtime::device::buffer::DeviceBuffer;
use crate::runtime::device::launch::launch_tiles;
use std::cmp::Ordering;

/// Elements sorted by one group before merging starts
pub const MERGE_TILE: usize = 1024;

/// Stable sort of `data` under `comp`
pub fn stable_merge_sort_by<T, C>(device: &Device, data: &mut [T], comp: &C) -> Result<()>
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    launch_tiles(device, data, MERGE_TILE, 1, |_, _, tile| tile.sort_by(comp))?;
    if n <= MERGE_TILE {
        return Ok(());
    }

    let mut scratch = DeviceBuffer::from_slice(data, device)?;
    let mut in_primary = true;
    let mut width = MERGE_TILE;
    while width < n {
        log::trace!("merge sort: merging runs of {width}");
        if in_primary {
            merge_level(device, data, &mut scratch, width, comp)?;
        } else {
            merge_level(device, &scratch, data, width, comp)?;
        }
        in_primary = !in_primary;
        width *= 2;
    }

    if !in_primary {
        data.copy_from_slice(&scratch);
    }
    Ok(())
}

fn merge_level<T, C>(device: &Device, src: &[T], dst: &mut [T], width: usize, comp: &C) -> Result<()>
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    launch_tiles(device, dst, 2 * width, 1, |_, base, out| {
        let end = base + out.len();
        let mid = (base + width).min(end);
        merge_runs(&src[base..mid], &src[mid..end], out, comp);
    })
}

fn merge_runs<T, C>(left: &[T], right: &[T], out: &mut [T], comp: &C)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j == right.len()
            || (i < left.len() && comp(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> Device {
        Device::builder().worker_threads(4).build().unwrap()
    }

    #[test]
    fn test_merge_runs_prefers_left_on_ties() {
        let left = [(1, 'a'), (2, 'b')];
        let right = [(1, 'c'), (2, 'd'), (3, 'e')];
        let mut out = [(0, ' '); 5];
        merge_runs(&left, &right, &mut out, &|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(out, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd'), (3, 'e')]);
    }

    #[test]
    fn test_sort_is_stable_across_levels() {
        let device = device();
        for n in [0usize, 1, 1000, 1024, 1025, 4096, 9999] {
            let mut data: Vec<(u32, u32)> = (0..n as u32).map(|i| ((i * 7919) % 97, i)).collect();
            let mut expected = data.clone();
            expected.sort_by(|a, b| a.0.cmp(&b.0));
            stable_merge_sort_by(&device, &mut data, &|a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0))
                .unwrap();
            assert_eq!(data, expected, "n = {n}");
        }
    }

    #[test]
    fn test_descending_comparator() {
        let device = device();
        let mut data: Vec<i64> = (0..3000).map(|i| (i * 31 % 1000) - 500).collect();
        stable_merge_sort_by(&device, &mut data, &|a: &i64, b: &i64| b.cmp(a)).unwrap();
        assert!(data.windows(2).all(|w| w[0] >= w[1]));
    }
}
