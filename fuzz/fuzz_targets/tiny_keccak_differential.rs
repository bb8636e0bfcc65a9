#![no_main]

use keccak256::keccak256;
use libfuzzer_sys::fuzz_target;
use tiny_keccak::{Hasher, Keccak};

fuzz_target!(|data: &[u8]| {
    let mut keccak = Keccak::v256();
    keccak.update(data);
    let mut tiny_output = [0u8; 32];
    keccak.finalize(&mut tiny_output);

    let output = keccak256(data);

    assert_eq!(output, tiny_output, "Keccak mismatch! Input: {data:x?}\ntiny_keccak output: {tiny_output:x?}, keccak256 output: {output:x?}");
});
