//! Integration tests for copy, transform, gather and partition
//!
//! Tests verify correctness across:
//! - Host/device transfers in both directions and across devices
//! - Masked variants (copy_if, transform_if, gather_if)
//! - Index validation and length checking
//! - Partition stability

mod common;

use common::{create_device, seeded_rng};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use tandem::error::Error;
use tandem::iter::{bidirectional, forward};
use tandem::runtime::device::{Device, DeviceVector};

// ============================================================================
// Copy Tests
// ============================================================================

#[test]
fn test_copy_round_trip() {
    let device = create_device();
    let host: Vec<u16> = (0..50_000).map(|i| (i * 31) as u16).collect();
    let mut d = DeviceVector::<u16>::zeroed(host.len(), &device).unwrap();
    assert_eq!(tandem::copy(&host, &mut d).unwrap(), host.len());

    let mut back = vec![0u16; host.len()];
    assert_eq!(tandem::copy(&d, &mut back).unwrap(), host.len());
    assert_eq!(back, host);
}

#[test]
fn test_copy_into_longer_output() {
    let device = create_device();
    let mut d = DeviceVector::filled(5, 9i8, &device).unwrap();
    tandem::copy(forward([1i8, 2, 3]), &mut d).unwrap();
    assert_eq!(d.to_vec(), [1, 2, 3, 9, 9]);

    let mut h = vec![0u8; 4];
    assert_eq!(tandem::copy(bidirectional(vec![5u8, 6]), &mut h).unwrap(), 2);
    assert_eq!(h, [5, 6, 0, 0]);
}

#[test]
fn test_copy_between_devices() {
    let a = create_device();
    let b = Device::builder().id(1).worker_threads(2).build().unwrap();
    let src = DeviceVector::from_slice(&[1.0f64, 2.0, 3.0], &a).unwrap();
    let mut dst = DeviceVector::<f64>::zeroed(3, &b).unwrap();
    tandem::copy(&src, &mut dst).unwrap();
    assert_eq!(dst.to_vec(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_copy_output_too_short() {
    let device = create_device();
    let mut d = DeviceVector::<u32>::zeroed(2, &device).unwrap();
    let err = tandem::copy(&vec![1u32, 2, 3], &mut d).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { expected: 3, got: 2, .. }));
}

#[test]
fn test_copy_if_is_masked() {
    let device = create_device();
    let input = DeviceVector::from_slice(&[10u32, 20, 30, 40], &device).unwrap();
    let stencil = DeviceVector::from_slice(&[1u8, 0, 0, 1], &device).unwrap();
    let mut out = DeviceVector::filled(4, 7u32, &device).unwrap();
    tandem::copy_if(&input, &stencil, &mut out, |s| s != 0).unwrap();
    assert_eq!(out.to_vec(), [10, 7, 7, 40]);
}

// ============================================================================
// Transform Tests
// ============================================================================

#[test]
fn test_transform_host_and_device() {
    let device = create_device();
    let host: Vec<i32> = (-500..500).collect();
    let d = DeviceVector::from_slice(&host, &device).unwrap();
    let mut out = DeviceVector::<i64>::zeroed(host.len(), &device).unwrap();
    tandem::transform(&d, &mut out, |x| i64::from(x) * i64::from(x)).unwrap();
    let expected: Vec<i64> = host.iter().map(|&x| i64::from(x) * i64::from(x)).collect();
    assert_eq!(out.to_vec(), expected);

    let mut host_out = vec![0i64; host.len()];
    tandem::transform(&host, &mut host_out, |x| i64::from(x) * i64::from(x)).unwrap();
    assert_eq!(host_out, expected);
}

#[test]
fn test_transform_if() {
    let input = vec![1.0f32, 4.0, 9.0, 16.0];
    let stencil = vec![true, false, true, false];
    let mut out = vec![-1.0f32; 4];
    tandem::transform_if(&input, &stencil, &mut out, f32::sqrt, |s| s).unwrap();
    assert_eq!(out, [1.0, -1.0, 3.0, -1.0]);
}

#[test]
fn test_transform_if_short_stencil() {
    let device = create_device();
    let input = DeviceVector::filled(4, 1u32, &device).unwrap();
    let stencil = DeviceVector::filled(3, 1u8, &device).unwrap();
    let mut out = DeviceVector::<u32>::zeroed(4, &device).unwrap();
    let err = tandem::transform_if(&input, &stencil, &mut out, |x| x, |s| s == 1).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[test]
fn test_transform_rejects_mixed_devices() {
    let a = create_device();
    let b = Device::builder().id(7).build().unwrap();
    let src = DeviceVector::filled(3, 1u32, &a).unwrap();
    let mut dst = DeviceVector::<u32>::zeroed(3, &b).unwrap();
    let err = tandem::transform(&src, &mut dst, |x| x + 1).unwrap_err();
    assert!(matches!(err, Error::DeviceMismatch));
}

#[test]
fn test_for_each_visits_every_element() {
    let device = create_device();
    let d = DeviceVector::from_slice(&(1..=100_000u64).collect::<Vec<_>>(), &device).unwrap();
    let sum = AtomicU64::new(0);
    tandem::for_each(&d, |x| {
        sum.fetch_add(x, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(sum.load(Ordering::Relaxed), 100_000 * 100_001 / 2);

    let count = AtomicU64::new(0);
    tandem::for_each(forward(0..10u8), |_| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(count.load(Ordering::Relaxed), 10);
}

// ============================================================================
// Gather Tests
// ============================================================================

#[test]
fn test_gather() {
    let device = create_device();
    let mut rng = seeded_rng(41);
    let input: Vec<f32> = (0..10_000).map(|_| rng.random()).collect();
    let map: Vec<u32> = (0..20_000).map(|_| rng.random_range(0..10_000)).collect();
    let expected: Vec<f32> = map.iter().map(|&m| input[m as usize]).collect();

    let d_in = DeviceVector::from_slice(&input, &device).unwrap();
    let d_map = DeviceVector::from_slice(&map, &device).unwrap();
    let mut d_out = DeviceVector::<f32>::zeroed(map.len(), &device).unwrap();
    assert_eq!(tandem::gather(&d_map, &d_in, &mut d_out).unwrap(), map.len());
    assert_eq!(d_out.to_vec(), expected);

    let mut h_out = vec![0.0f32; map.len()];
    tandem::gather(&map, &input, &mut h_out).unwrap();
    assert_eq!(h_out, expected);
}

#[test]
fn test_gather_rejects_bad_index_before_writing() {
    let device = create_device();
    let input = DeviceVector::from_slice(&[1u8, 2, 3], &device).unwrap();
    let map = DeviceVector::from_slice(&[0i32, 2, 3, 1], &device).unwrap();
    let mut out = DeviceVector::<u8>::zeroed(4, &device).unwrap();
    let err = tandem::gather(&map, &input, &mut out).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(out.to_vec(), [0, 0, 0, 0]);

    let negative = vec![-1i64];
    let mut one = vec![0u8; 1];
    assert!(tandem::gather(&negative, &vec![5u8], &mut one).is_err());
}

#[test]
fn test_gather_if_skips_unselected_indices() {
    let device = create_device();
    let input = DeviceVector::from_slice(&[10u16, 20, 30], &device).unwrap();
    // the unselected slot holds an index nothing can address
    let map = DeviceVector::from_slice(&[2u64, u64::MAX, 0], &device).unwrap();
    let stencil = DeviceVector::from_slice(&[1u8, 0, 1], &device).unwrap();
    let mut out = DeviceVector::filled(3, 99u16, &device).unwrap();
    tandem::gather_if(&map, &stencil, &input, &mut out, |s| s == 1).unwrap();
    assert_eq!(out.to_vec(), [30, 99, 10]);
}

// ============================================================================
// Partition Tests
// ============================================================================

#[test]
fn test_partition_is_stable_on_both_sides() {
    let device = create_device();
    let host: Vec<u32> = (0..30_000).map(|i| (i * 7_919) % 30_011).collect();
    let (mut evens, odds): (Vec<u32>, Vec<u32>) = host.iter().partition(|&&x| x % 2 == 0);
    let selected = evens.len();
    evens.extend(odds);

    let mut d = DeviceVector::from_slice(&host, &device).unwrap();
    assert_eq!(tandem::partition(&mut d, |x| x % 2 == 0).unwrap(), selected);
    assert_eq!(d.to_vec(), evens);

    let mut h = host.clone();
    assert_eq!(tandem::stable_partition(&mut h, |x| x % 2 == 0).unwrap(), selected);
    assert_eq!(h, evens);
}

#[test]
fn test_partition_copy() {
    let device = create_device();
    let input = DeviceVector::from_slice(&[-1i32, 4, -2, 0, 7], &device).unwrap();
    let mut out = DeviceVector::<i32>::zeroed(5, &device).unwrap();
    assert_eq!(tandem::stable_partition_copy(&input, &mut out, |x| x >= 0).unwrap(), 3);
    assert_eq!(out.to_vec(), [4, 0, 7, -1, -2]);
    assert_eq!(input.to_vec(), [-1, 4, -2, 0, 7]);

    let mut host_out = vec![0i32; 5];
    assert_eq!(tandem::partition_copy(&vec![-1i32, 4, -2, 0, 7], &mut host_out, |x| x < 0).unwrap(), 2);
    assert_eq!(host_out, [-1, -2, 4, 0, 7]);
}

#[test]
fn test_partition_all_and_none() {
    let device = create_device();
    let mut d = DeviceVector::from_slice(&[3u8, 1, 2], &device).unwrap();
    assert_eq!(tandem::partition(&mut d, |_| true).unwrap(), 3);
    assert_eq!(d.to_vec(), [3, 1, 2]);
    assert_eq!(tandem::partition(&mut d, |_| false).unwrap(), 0);
    assert_eq!(d.to_vec(), [3, 1, 2]);
}
