use crate::KECCAK;
use keccak_f1600::{absorb, absorb_block, squeeze, State, DIGEST_LEN, LANES, RATE};

/// One-shot Keccak-256 sponge.
pub(crate) struct Sponge {
    a: State,
    /// Padded final block.
    buf: [u8; RATE],
}

impl Sponge {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self { a: [0; LANES], buf: [0; RATE] }
    }

    /// Absorbs all of `inp`, pads its tail, and writes the digest to `out`.
    #[inline]
    pub(crate) fn digest_into(mut self, inp: &[u8], out: &mut [u8; DIGEST_LEN]) {
        let rem = absorb(&mut self.a, inp);
        self.pad(&inp[inp.len() - rem..]);
        absorb_block(&mut self.a, &self.buf);
        squeeze(&self.a, out);
    }

    /// Fills the final block with the unabsorbed `tail` and Keccak 10*1 padding.
    ///
    /// `tail.len()` can be `RATE - 1`, in which case both markers land in the
    /// last byte.
    #[inline(always)]
    fn pad(&mut self, tail: &[u8]) {
        let num = tail.len();
        debug_assert!(num < RATE);

        self.buf[..num].copy_from_slice(tail);
        self.buf[num..].fill(0);
        self.buf[num] = KECCAK;
        self.buf[RATE - 1] |= 0x80;
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Sponge {
    #[inline]
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.a.zeroize();
        self.buf.zeroize();
    }
}
