//! Common test utilities
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tandem::runtime::device::Device;

/// Create a device with a small worker pool for testing
pub fn create_device() -> Device {
    Device::builder()
        .worker_threads(4)
        .build()
        .expect("device construction")
}

/// Create a device whose allocator refuses anything past `bytes`
pub fn create_limited_device(bytes: usize) -> Device {
    Device::builder()
        .worker_threads(2)
        .memory_limit(bytes)
        .build()
        .expect("device construction")
}

/// Deterministic RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
