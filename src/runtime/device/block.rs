//! Group-level primitives
//!
//! These run inside a kernel on the group's shared scratch buffer, one slot
//! per lane. Every combining step ends at the group barrier; a step never
//! reads a slot that another lane writes in the same step.

use super::launch::BlockContext;

/// Tree-reduce a full group whose size is known at compile time
///
/// `shared` holds one partial value per lane. After log2(`BLOCK_SIZE`)
/// barrier-separated steps, slot 0 holds the group's combined value, which is
/// returned. `op` must be associative and commutative: pairing follows the
/// tree, not the input order.
///
/// `BLOCK_SIZE` must be a power of two no larger than 512.
#[inline]
pub fn reduce<T, F, const BLOCK_SIZE: usize>(
    block: &mut BlockContext,
    shared: &mut [T],
    op: &F,
) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    const {
        assert!(
            BLOCK_SIZE.is_power_of_two() && BLOCK_SIZE <= 512,
            "group size must be a power of two no larger than 512"
        )
    };
    debug_assert_eq!(shared.len(), BLOCK_SIZE);

    let mut half = BLOCK_SIZE / 2;
    while half > 0 {
        block.step(|lane| {
            if lane < half {
                shared[lane] = op(shared[lane], shared[lane + half]);
            }
        });
        half /= 2;
    }
    shared[0]
}

/// Tree-reduce the first `n` slots of `shared`, for any `1 <= n <= block_dim`
///
/// The first step folds the ragged tail onto the largest power of two below
/// `n`; from there the schedule is the same halving as [`reduce`]. A lane
/// only combines when both its slot and its partner are among the live ones.
pub fn reduce_n<T, F>(block: &mut BlockContext, shared: &mut [T], n: usize, op: &F) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    assert!(
        n >= 1 && n <= shared.len() && n <= block.block_dim(),
        "reduce_n needs 1 <= n <= group size"
    );

    let mut stride = if n > 1 { prev_power_of_two(n - 1) } else { 0 };
    while stride > 0 {
        block.step(|lane| {
            if lane < stride && lane + stride < n {
                shared[lane] = op(shared[lane], shared[lane + stride]);
            }
        });
        stride /= 2;
    }
    shared[0]
}

/// Inclusive scan of the first `shared.len()` lanes of a group
///
/// Order preserving: slot `i` ends up holding `op(x0, op(x1, .. xi))`, so `op`
/// only needs to be associative. The scan runs in place on `shared`: an
/// up-sweep builds partial sums over power-of-two runs, then a down-sweep
/// pushes finished prefixes into the remaining slots. Within a step every
/// lane writes a slot no other lane reads.
pub fn inclusive_scan<T, F>(block: &mut BlockContext, shared: &mut [T], op: &F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let n = shared.len();
    debug_assert!(n <= block.block_dim());
    if n < 2 {
        return;
    }

    let mut d = 1;
    while 2 * d <= n {
        block.step(|lane| {
            if lane < n && (lane + 1) % (2 * d) == 0 {
                shared[lane] = op(shared[lane - d], shared[lane]);
            }
        });
        d *= 2;
    }

    let mut d = prev_power_of_two(n) / 2;
    while d > 0 {
        block.step(|lane| {
            if (lane + 1) % (2 * d) == 0 && lane + d < n {
                shared[lane + d] = op(shared[lane], shared[lane + d]);
            }
        });
        d /= 2;
    }
}

/// Largest power of two not above `x` (`x >= 1`)
#[inline]
fn prev_power_of_two(x: usize) -> usize {
    1 << (usize::BITS - 1 - x.leading_zeros())
}
