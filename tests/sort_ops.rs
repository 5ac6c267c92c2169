//! Integration tests for sorting
//!
//! Tests verify correctness across:
//! - Every radix key width (8/16/32/64-bit, signed, float)
//! - The small, permute and wide key-value paths
//! - Comparator sorts on host and device
//! - Stability and edge cases (empty, single element, duplicates)

mod common;

use common::{create_device, create_limited_device, seeded_rng};
use rand::Rng;
use tandem::runtime::device::DeviceVector;

// ============================================================================
// Radix Sort Tests
// ============================================================================

#[test]
fn test_sort_small_u32() {
    let device = create_device();
    let mut d = DeviceVector::from_slice(&[5u32, 3, 9, 1, 3], &device).unwrap();
    tandem::sort(&mut d).unwrap();
    assert_eq!(d.to_vec(), [1, 3, 3, 5, 9]);
}

#[test]
fn test_sort_signed_and_float_keys() {
    let device = create_device();

    let mut ints = DeviceVector::from_slice(&[7i32, -2, 0, i32::MIN, i32::MAX, -2], &device).unwrap();
    tandem::stable_sort(&mut ints).unwrap();
    assert_eq!(ints.to_vec(), [i32::MIN, -2, -2, 0, 7, i32::MAX]);

    let mut floats = DeviceVector::from_slice(
        &[1.5f64, -0.0, f64::INFINITY, -7.25, 0.0, f64::NEG_INFINITY],
        &device,
    )
    .unwrap();
    tandem::sort(&mut floats).unwrap();
    let sorted = floats.to_vec();
    assert_eq!(sorted, [f64::NEG_INFINITY, -7.25, -0.0, 0.0, 1.5, f64::INFINITY]);
    assert!(sorted[2].is_sign_negative());
    assert!(sorted[3].is_sign_positive());
}

#[test]
fn test_sort_every_width_matches_std() {
    let device = create_device();
    let mut rng = seeded_rng(11);

    macro_rules! check {
        ($t:ty) => {{
            let host: Vec<$t> = (0..20_000).map(|_| rng.random::<$t>()).collect();
            let mut expected = host.clone();
            expected.sort();
            let mut d = DeviceVector::from_slice(&host, &device).unwrap();
            tandem::sort(&mut d).unwrap();
            assert_eq!(d.to_vec(), expected, stringify!($t));

            let mut h = host.clone();
            tandem::sort(&mut h).unwrap();
            assert_eq!(h, expected, stringify!($t));
        }};
    }

    check!(u8);
    check!(i8);
    check!(u16);
    check!(i16);
    check!(u32);
    check!(i32);
    check!(u64);
    check!(i64);
}

#[test]
fn test_sort_f32_matches_total_order() {
    let device = create_device();
    let mut rng = seeded_rng(12);
    let host: Vec<f32> = (0..50_000).map(|_| rng.random_range(-1e6..1e6)).collect();
    let mut expected = host.clone();
    expected.sort_by(f32::total_cmp);

    let mut d = DeviceVector::from_slice(&host, &device).unwrap();
    tandem::sort(&mut d).unwrap();
    assert_eq!(d.to_vec(), expected);
}

#[test]
fn test_sort_constant_and_presorted() {
    let device = create_device();
    let mut constant = DeviceVector::filled(10_000, 0xdead_beef_u32, &device).unwrap();
    tandem::sort(&mut constant).unwrap();
    assert!(constant.to_vec().iter().all(|&x| x == 0xdead_beef));

    let ascending: Vec<i64> = (-5000..5000).collect();
    let mut d = DeviceVector::from_slice(&ascending, &device).unwrap();
    tandem::sort(&mut d).unwrap();
    assert_eq!(d.to_vec(), ascending);

    let descending: Vec<i64> = ascending.iter().rev().copied().collect();
    let mut d = DeviceVector::from_slice(&descending, &device).unwrap();
    tandem::sort(&mut d).unwrap();
    assert_eq!(d.to_vec(), ascending);
}

#[test]
fn test_sort_empty_and_single() {
    let device = create_device();
    let mut empty = DeviceVector::<u16>::zeroed(0, &device).unwrap();
    tandem::sort(&mut empty).unwrap();
    assert!(empty.is_empty());

    let mut one = DeviceVector::from_slice(&[42u64], &device).unwrap();
    tandem::sort(&mut one).unwrap();
    assert_eq!(one.to_vec(), [42]);
}

#[test]
fn test_sort_subrange_view() {
    let device = create_device();
    let mut d = DeviceVector::from_slice(&[9u8, 8, 7, 6, 5, 4], &device).unwrap();
    tandem::sort(d.view_mut(1..5).unwrap()).unwrap();
    assert_eq!(d.to_vec(), [9, 5, 6, 7, 8, 4]);
}

// ============================================================================
// Radix Sort By Key Tests
// ============================================================================

/// Stable reference ordering of (key, original index)
fn reference_order<K: Ord + Copy>(keys: &[K]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order
}

#[test]
fn test_sort_by_key_small_path() {
    let device = create_device();
    let mut rng = seeded_rng(21);
    let keys: Vec<u16> = (0..30_000).map(|_| rng.random_range(0..100)).collect();
    let values: Vec<u32> = (0..30_000).collect();
    let order = reference_order(&keys);

    let mut dk = DeviceVector::from_slice(&keys, &device).unwrap();
    let mut dv = DeviceVector::from_slice(&values, &device).unwrap();
    tandem::sort_by_key(&mut dk, &mut dv).unwrap();

    let expected_values: Vec<u32> = order.iter().map(|&i| i as u32).collect();
    let expected_keys: Vec<u16> = order.iter().map(|&i| keys[i]).collect();
    assert_eq!(dk.to_vec(), expected_keys);
    assert_eq!(dv.to_vec(), expected_values);
}

#[test]
fn test_sort_by_key_permute_path() {
    let device = create_device();
    let keys = vec![3i8, -1, 3, 0, -1, 2];
    let values = vec![0u64, 10, 20, 30, 40, 50];

    let mut dk = DeviceVector::from_slice(&keys, &device).unwrap();
    let mut dv = DeviceVector::from_slice(&values, &device).unwrap();
    tandem::stable_sort_by_key(&mut dk, &mut dv).unwrap();
    assert_eq!(dk.to_vec(), [-1, -1, 0, 2, 3, 3]);
    assert_eq!(dv.to_vec(), [10, 40, 30, 50, 0, 20]);
}

#[test]
fn test_sort_by_key_wide_path() {
    let device = create_device();
    let mut rng = seeded_rng(22);
    // few distinct high words so the low-word pass decides many ties
    let keys: Vec<i64> = (0..20_000)
        .map(|_| (rng.random_range(-3i64..3) << 32) | rng.random_range(0i64..1 << 32))
        .collect();
    let values: Vec<u16> = (0..20_000).map(|i| i as u16).collect();
    let order = reference_order(&keys);

    let mut dk = DeviceVector::from_slice(&keys, &device).unwrap();
    let mut dv = DeviceVector::from_slice(&values, &device).unwrap();
    tandem::sort_by_key(&mut dk, &mut dv).unwrap();

    let expected_keys: Vec<i64> = order.iter().map(|&i| keys[i]).collect();
    let expected_values: Vec<u16> = order.iter().map(|&i| values[i]).collect();
    assert_eq!(dk.to_vec(), expected_keys);
    assert_eq!(dv.to_vec(), expected_values);
}

#[test]
fn test_sort_by_key_host_moves_value_prefix_only() {
    let mut keys = vec![2.0f32, -1.0, 0.5];
    let mut values = vec!['x', 'y', 'z', 'w'];
    tandem::sort_by_key(&mut keys, &mut values).unwrap();
    assert_eq!(keys, [-1.0, 0.5, 2.0]);
    assert_eq!(values, ['y', 'z', 'x', 'w']);
}

#[test]
fn test_sort_by_key_short_values_rejected() {
    let device = create_device();
    let mut dk = DeviceVector::from_slice(&[3u32, 2, 1], &device).unwrap();
    let mut dv = DeviceVector::from_slice(&[0u32, 1], &device).unwrap();
    assert!(tandem::sort_by_key(&mut dk, &mut dv).is_err());
    assert_eq!(dk.to_vec(), [3, 2, 1]);

    let mut keys = vec![1u8, 0];
    let mut values = vec![0u8];
    assert!(tandem::sort_by_key(&mut keys, &mut values).is_err());
}

#[test]
fn test_sort_out_of_memory_leaves_keys() {
    let device = create_limited_device(4096);
    let host: Vec<u32> = (0..1024).rev().collect();
    let mut d = DeviceVector::from_slice(&host, &device).unwrap();
    assert!(tandem::sort(&mut d).unwrap_err().is_out_of_memory());
    assert_eq!(d.to_vec(), host);
    assert_eq!(device.allocator().allocated_bytes(), 4096);
}

#[test]
fn test_sort_by_key_out_of_memory_keeps_pairs() {
    fn check<K>(keys: &[K], key_of: impl Fn(&[u64; 8]) -> K)
    where
        K: tandem::sorting::RadixKey + std::fmt::Debug + PartialOrd,
    {
        let values: Vec<[u64; 8]> = (0..keys.len() as u64).map(|i| [i; 8]).collect();
        for limit in (4000..200_000).step_by(1000) {
            let device = create_limited_device(limit);
            let (Ok(mut dk), Ok(mut dv)) = (
                DeviceVector::from_slice(keys, &device),
                DeviceVector::from_slice(&values, &device),
            ) else {
                continue;
            };
            match tandem::sort_by_key(&mut dk, &mut dv) {
                Err(e) => {
                    assert!(e.is_out_of_memory(), "limit = {limit}: {e}");
                    assert_eq!(dk.to_vec(), keys, "limit = {limit}");
                    assert_eq!(dv.to_vec(), values, "limit = {limit}");
                }
                Ok(()) => {
                    let (k, v) = (dk.to_vec(), dv.to_vec());
                    assert!(k.windows(2).all(|w| w[0] <= w[1]), "limit = {limit}");
                    assert!(k.iter().zip(&v).all(|(k, v)| *k == key_of(v)), "limit = {limit}");
                }
            }
        }
    }

    // value[0] records the original index, from which the key is recovered
    let narrow: Vec<u32> = (0..1000).rev().collect();
    check(&narrow, |v| 999 - v[0] as u32);
    let wide: Vec<i64> = (0..1000).rev().map(|k| k - 500).collect();
    check(&wide, |v| 499 - v[0] as i64);
}

#[test]
fn test_stable_sort_by_key_ties_keep_order() {
    let device = create_device();
    let keys = [5i32, -3, 2, 2, 0];

    let mut dk = DeviceVector::from_slice(&keys, &device).unwrap();
    let mut dv = DeviceVector::from_slice(b"abcde", &device).unwrap();
    tandem::stable_sort_by_key(&mut dk, &mut dv).unwrap();
    assert_eq!(dk.to_vec(), [-3, 0, 2, 2, 5]);
    assert_eq!(dv.to_vec(), b"becda");

    let mut hk = keys.to_vec();
    let mut hv = vec!['a', 'b', 'c', 'd', 'e'];
    tandem::stable_sort_by_key(&mut hk, &mut hv).unwrap();
    assert_eq!(hk, [-3, 0, 2, 2, 5]);
    assert_eq!(hv, ['b', 'e', 'c', 'd', 'a']);
}

// ============================================================================
// Comparison Sort Tests
// ============================================================================

#[test]
fn test_sort_by_descending() {
    let device = create_device();
    let mut rng = seeded_rng(31);
    let host: Vec<u32> = (0..40_000).map(|_| rng.random()).collect();
    let mut expected = host.clone();
    expected.sort_by(|a, b| b.cmp(a));

    let mut d = DeviceVector::from_slice(&host, &device).unwrap();
    tandem::sort_by(&mut d, |a, b| b.cmp(a)).unwrap();
    assert_eq!(d.to_vec(), expected);

    let mut h = host.clone();
    tandem::stable_sort_by(&mut h, |a, b| b.cmp(a)).unwrap();
    assert_eq!(h, expected);
}

#[test]
fn test_sort_by_is_stable() {
    let device = create_device();
    // sort pairs by their first field only
    let host: Vec<[u32; 2]> = (0..5000u32).map(|i| [i % 7, i]).collect();
    let mut expected = host.clone();
    expected.sort_by_key(|p| p[0]);

    let mut d = DeviceVector::from_slice(&host, &device).unwrap();
    tandem::stable_sort_by(&mut d, |a, b| a[0].cmp(&b[0])).unwrap();
    assert_eq!(d.to_vec(), expected);
}

#[test]
fn test_sort_by_key_with_comparator() {
    let device = create_device();
    let keys: Vec<f32> = vec![0.5, -2.0, 0.5, 9.0, -2.0];
    let values: Vec<u8> = vec![0, 1, 2, 3, 4];

    let mut dk = DeviceVector::from_slice(&keys, &device).unwrap();
    let mut dv = DeviceVector::from_slice(&values, &device).unwrap();
    tandem::sort_by_key_with(&mut dk, &mut dv, |a, b| b.total_cmp(a)).unwrap();
    assert_eq!(dk.to_vec(), [9.0, 0.5, 0.5, -2.0, -2.0]);
    assert_eq!(dv.to_vec(), [3, 0, 2, 1, 4]);

    let mut hk = keys.clone();
    let mut hv = values.clone();
    tandem::stable_sort_by_key_with(&mut hk, &mut hv, |a, b| b.total_cmp(a)).unwrap();
    assert_eq!(hk, [9.0, 0.5, 0.5, -2.0, -2.0]);
    assert_eq!(hv, [3, 0, 2, 1, 4]);
}
