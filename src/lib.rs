#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_docs, rust_2018_idioms)]

mod state;
use state::Sponge;

#[doc(no_inline)]
pub use keccak_f1600::{
    absorb, keccak_f1600, keccak_round, squeeze, State, CAPACITY_BITS, DIGEST_LEN, RATE,
    ROUNDS,
};

// Paddings
/// Original Keccak submission padding. FIPS 202 SHA-3 uses `0x06` instead.
const KECCAK: u8 = 0x01;

/// Keccak-256: the pre-standardization variant of SHA3-256 used by Ethereum.
///
/// This is a marker type; every digest is computed in a single call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keccak256;

impl Keccak256 {
    /// Output length.
    pub const OUT: usize = DIGEST_LEN;
    /// Block size.
    pub const BSZ: usize = RATE;
    /// Padding byte.
    pub const PAD: u8 = KECCAK;

    /// Computes the digest of `inp`.
    #[inline]
    pub fn digest(inp: &[u8]) -> [u8; Self::OUT] {
        let mut out = [0; Self::OUT];
        Self::digest_into(inp, &mut out);
        out
    }

    /// Computes the digest of `inp` into caller-owned `out`.
    #[inline]
    pub fn digest_into(inp: &[u8], out: &mut [u8; Self::OUT]) {
        Sponge::new().digest_into(inp, out);
    }
}

/// Computes the Keccak-256 digest of `inp`.
///
/// ```
/// let digest = keccak256::keccak256(b"");
/// assert_eq!(
///     digest[..4],
///     [0xc5, 0xd2, 0x46, 0x01],
/// );
/// ```
#[inline]
pub fn keccak256(inp: &[u8]) -> [u8; DIGEST_LEN] {
    Keccak256::digest(inp)
}

/// Computes the Keccak-256 digest of `inp` into `out`.
#[inline]
pub fn keccak256_into(inp: &[u8], out: &mut [u8; DIGEST_LEN]) {
    Keccak256::digest_into(inp, out)
}
