//! Fixed parameters and lookup tables of Keccak-f[1600] and the Keccak-256 sponge.

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Sponge rate in bytes (1088 bits).
pub const RATE: usize = 136;

/// Number of state lanes covered by the rate.
pub const RATE_LANES: usize = RATE / 8;

/// Sponge capacity in bits.
pub const CAPACITY_BITS: usize = 512;

/// Keccak-256 digest length in bytes.
pub const DIGEST_LEN: usize = 32;

const _: () = assert!(RATE * 8 + CAPACITY_BITS == LANES * 64);
const _: () = assert!(DIGEST_LEN <= RATE);

/// Round constants, XORed into lane 0 by ι.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ρ rotation amounts for state positions `1..25`.
///
/// `RHO_OFFSETS[i - 1]` is the left rotation applied to lane `i`; lane 0 is
/// never rotated.
pub const RHO_OFFSETS: [u32; LANES - 1] = [
    1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// π position cycle, starting after position 1.
///
/// The lane at `PI_LANES[i - 1]` (or position 1 for `i = 0`) moves to
/// `PI_LANES[i]`. Lane 0 is a fixed point of π and does not appear.
pub const PI_LANES: [usize; LANES - 1] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, //
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
