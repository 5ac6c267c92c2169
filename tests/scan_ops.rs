//! Integration tests for prefix scans
//!
//! Tests verify correctness across:
//! - Inclusive and exclusive scans, with and without a transform
//! - Sizes that span several scan tiles
//! - Non-commutative operators (operand order must survive)
//! - Output length checking

mod common;

use common::{create_device, seeded_rng};
use rand::Rng;
use tandem::error::Error;
use tandem::iter::forward;
use tandem::runtime::device::DeviceVector;

fn sequential_inclusive(input: &[u64]) -> Vec<u64> {
    input
        .iter()
        .scan(0u64, |acc, &x| {
            *acc = acc.wrapping_add(x);
            Some(*acc)
        })
        .collect()
}

#[test]
fn test_inclusive_scan_small() {
    let device = create_device();
    let d = DeviceVector::from_slice(&[1i32, 2, 3, 4], &device).unwrap();
    let mut out = DeviceVector::<i32>::zeroed(4, &device).unwrap();
    assert_eq!(tandem::inclusive_scan(&d, &mut out, |a, b| a + b).unwrap(), 4);
    assert_eq!(out.to_vec(), [1, 3, 6, 10]);
}

#[test]
fn test_exclusive_scan_small() {
    let device = create_device();
    let d = DeviceVector::from_slice(&[1i32, 2, 3, 4], &device).unwrap();
    let mut out = DeviceVector::<i32>::zeroed(4, &device).unwrap();
    tandem::exclusive_scan(&d, &mut out, 10, |a, b| a + b).unwrap();
    assert_eq!(out.to_vec(), [10, 11, 13, 16]);

    let mut host_out = vec![0; 4];
    tandem::exclusive_scan(&vec![1, 2, 3, 4], &mut host_out, 10, |a, b| a + b).unwrap();
    assert_eq!(host_out, [10, 11, 13, 16]);
}

#[test]
fn test_scan_large_matches_sequential() {
    let device = create_device();
    let mut rng = seeded_rng(3);
    for n in [1usize, 255, 256, 257, 4096, 100_003] {
        let host: Vec<u64> = (0..n).map(|_| rng.random_range(0..1000)).collect();
        let expected = sequential_inclusive(&host);

        let d = DeviceVector::from_slice(&host, &device).unwrap();
        let mut out = DeviceVector::<u64>::zeroed(n, &device).unwrap();
        tandem::inclusive_scan(&d, &mut out, |a, b| a + b).unwrap();
        assert_eq!(out.to_vec(), expected, "device n = {n}");

        let mut host_out = vec![0u64; n];
        tandem::inclusive_scan(&host, &mut host_out, |a, b| a + b).unwrap();
        assert_eq!(host_out, expected, "host n = {n}");
    }
}

#[test]
fn test_scan_keeps_operand_order() {
    // composition of affine maps x -> a * x + b is associative, not commutative
    let device = create_device();
    let maps: Vec<[i64; 2]> = (0..3000).map(|i| [1 + i % 3, i % 11 - 5]).collect();
    let compose = |f: [i64; 2], g: [i64; 2]| {
        // g after f, reduced mod a prime to stay bounded
        const P: i64 = 1_000_003;
        [(g[0] * f[0]) % P, (g[0] * f[1] + g[1]) % P]
    };

    let mut expected = Vec::with_capacity(maps.len());
    let mut acc: Option<[i64; 2]> = None;
    for &m in &maps {
        let next = acc.map_or(m, |a| compose(a, m));
        expected.push(next);
        acc = Some(next);
    }

    let d = DeviceVector::from_slice(&maps, &device).unwrap();
    let mut out = DeviceVector::<[i64; 2]>::zeroed(maps.len(), &device).unwrap();
    tandem::inclusive_scan(&d, &mut out, compose).unwrap();
    assert_eq!(out.to_vec(), expected);
}

#[test]
fn test_transform_scans() {
    let device = create_device();
    let flags = DeviceVector::from_slice(&[true as u8, 0, 1, 1, 0, 1], &device).unwrap();
    let mut ranks = DeviceVector::<u32>::zeroed(6, &device).unwrap();
    tandem::transform_exclusive_scan(&flags, &mut ranks, u32::from, 0, |a, b| a + b).unwrap();
    assert_eq!(ranks.to_vec(), [0, 1, 1, 2, 3, 3]);

    let mut totals = vec![0.0f64; 3];
    tandem::transform_inclusive_scan(&vec![1.0f32, 2.0, 3.0], &mut totals, f64::from, |a, b| a + b)
        .unwrap();
    assert_eq!(totals, [1.0, 3.0, 6.0]);
}

#[test]
fn test_scan_from_forward_iterator() {
    let mut out = vec![0u32; 5];
    let written = tandem::inclusive_scan(forward(1..=3u32), &mut out, |a, b| a * b).unwrap();
    assert_eq!(written, 3);
    assert_eq!(out, [1, 2, 6, 0, 0]);
}

#[test]
fn test_scan_output_too_short() {
    let device = create_device();
    let d = DeviceVector::filled(10, 1u32, &device).unwrap();
    let mut out = DeviceVector::<u32>::zeroed(9, &device).unwrap();
    let err = tandem::inclusive_scan(&d, &mut out, |a, b| a + b).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { expected: 10, got: 9, .. }));
    assert!(out.to_vec().iter().all(|&x| x == 0));
}

#[test]
fn test_scan_empty() {
    let device = create_device();
    let d = DeviceVector::<u32>::zeroed(0, &device).unwrap();
    let mut out = DeviceVector::<u32>::zeroed(0, &device).unwrap();
    assert_eq!(tandem::exclusive_scan(&d, &mut out, 5, |a, b| a + b).unwrap(), 0);
}
