//! The five step mappings of a Keccak-f[1600] round.

use crate::{State, PI_LANES, RHO_OFFSETS, ROUND_CONSTANTS};

/// θ: XOR each column with the parities of its two neighbouring columns.
#[inline(always)]
pub(crate) fn theta(a: &mut State) {
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

/// ρ: rotate every lane but lane 0 by its fixed offset.
#[inline(always)]
pub(crate) fn rho(a: &mut State) {
    for (lane, &offset) in a[1..].iter_mut().zip(RHO_OFFSETS.iter()) {
        *lane = lane.rotate_left(offset);
    }
}

/// π: move lane `(x, y)` to `(y, 2x + 3y)`.
///
/// Walks the single 24-position cycle, carrying the displaced lane forward.
#[inline(always)]
pub(crate) fn pi(a: &mut State) {
    let mut carried = a[1];
    for &to in &PI_LANES {
        let displaced = a[to];
        a[to] = carried;
        carried = displaced;
    }
}

/// χ: `a[x] ^= !a[x + 1] & a[x + 2]` within each row, from the row's old values.
#[inline(always)]
pub(crate) fn chi(a: &mut State) {
    for row in a.chunks_exact_mut(5) {
        let old = [row[0], row[1], row[2], row[3], row[4]];
        for x in 0..5 {
            row[x] = old[x] ^ (!old[(x + 1) % 5] & old[(x + 2) % 5]);
        }
    }
}

/// ι: XOR the round constant into lane 0.
#[inline(always)]
pub(crate) fn iota(a: &mut State, round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}
