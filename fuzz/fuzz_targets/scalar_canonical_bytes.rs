#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use ed25519_scalar::constants::BASEPOINT_ORDER;
use ed25519_scalar::Scalar;

use num_bigint::BigUint;

/// Check that `Scalar::from_canonical_bytes` accepts exactly the 256-bit
/// values below `l`, and that the narrow reduction fixes those values.
fuzz_target!(|data: &[u8]| {
    if data.len() != 32 {
        return;
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(data);

    let is_canonical = BigUint::from_bytes_le(data) < BigUint::from_bytes_le(&BASEPOINT_ORDER);
    let decoded: Option<Scalar> = Scalar::from_canonical_bytes(bytes).into();
    assert_eq!(decoded.is_some(), is_canonical);

    if let Some(s) = decoded {
        assert_eq!(Scalar::from_bytes_mod_order(bytes), s);
    }
});
