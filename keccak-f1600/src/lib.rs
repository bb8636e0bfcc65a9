#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_docs, rust_2018_idioms)]

mod constants;
pub use constants::*;

mod steps;
use steps::{chi, iota, pi, rho, theta};

/// Keccak-f[1600] state: 25 lanes, lane `(x, y)` stored at index `x + 5 * y`.
pub type State = [u64; LANES];

/// Applies the full 24-round Keccak-f[1600] permutation in place.
#[inline]
pub fn keccak_f1600(a: &mut State) {
    for round in 0..ROUNDS {
        round_in_place(a, round);
    }
}

/// Applies round number `round` (θ, ρ, π, χ, ι) of Keccak-f[1600] in place.
///
/// # Panics
///
/// Panics if `round >= ROUNDS`.
#[inline]
pub fn keccak_round(a: &mut State, round: usize) {
    assert!(round < ROUNDS, "Keccak-f[1600] has {ROUNDS} rounds, got round {round}");
    round_in_place(a, round);
}

#[inline(always)]
fn round_in_place(a: &mut State, round: usize) {
    theta(a);
    rho(a);
    pi(a);
    chi(a);
    iota(a, round);
}

/// XORs one rate-sized block into the state and permutes.
#[inline]
pub fn absorb_block(a: &mut State, block: &[u8; RATE]) {
    xor_block(a, block);
    keccak_f1600(a);
}

/// Absorbs every complete [`RATE`]-sized block of `inp`.
///
/// Returns the number of trailing bytes that did not fill a block. The caller
/// owns those bytes and is responsible for padding them.
#[inline]
pub fn absorb(a: &mut State, inp: &[u8]) -> usize {
    let mut blocks = inp.chunks_exact(RATE);
    for block in &mut blocks {
        xor_block(a, block);
        keccak_f1600(a);
    }
    blocks.remainder().len()
}

/// Writes the first `out.len()` bytes of the state, lanes in little-endian order.
///
/// # Panics
///
/// Panics if `out` is longer than [`RATE`].
#[inline]
pub fn squeeze(a: &State, out: &mut [u8]) {
    assert!(out.len() <= RATE, "cannot squeeze {} bytes from a {RATE}-byte rate", out.len());
    for (bytes, lane) in out.chunks_mut(8).zip(a.iter()) {
        bytes.copy_from_slice(&lane.to_le_bytes()[..bytes.len()]);
    }
}

/// `block` is exactly `RATE` bytes; lanes past the rate are left alone.
#[inline(always)]
fn xor_block(a: &mut State, block: &[u8]) {
    debug_assert_eq!(block.len(), RATE);
    for (lane, bytes) in a.iter_mut().zip(block.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(bytes);
        *lane ^= u64::from_le_bytes(le);
    }
}
