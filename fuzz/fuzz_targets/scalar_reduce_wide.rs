#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use ed25519_scalar::constants::BASEPOINT_ORDER;
use ed25519_scalar::scalar::reduce_wide;
use ed25519_scalar::Scalar;

use num_bigint::BigUint;

/// Check that `reduce_wide` agrees with arbitrary precision arithmetic.
///
/// We take a 512-bit value `x` from the fuzzer input data, reduce it in
/// place and compare against `x mod l` computed with `BigUint`.
fuzz_target!(|data: &[u8]| {
    if data.len() != 64 {
        return;
    }
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(data);

    let expected = BigUint::from_bytes_le(data) % BigUint::from_bytes_le(&BASEPOINT_ORDER);

    let s = Scalar::from_bytes_mod_order_wide(&bytes);
    reduce_wide(&mut bytes);

    assert_eq!(BigUint::from_bytes_le(&bytes[..32]), expected);
    assert_eq!(&bytes[..32], s.as_bytes());
    assert!(bytes[32..].iter().all(|&b| b == 0));
});
