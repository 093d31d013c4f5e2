// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Constants of the scalar group.
//!
//! ```
//! use ed25519_scalar::constants::BASEPOINT_ORDER;
//! use ed25519_scalar::Scalar;
//!
//! // l itself is not a canonical encoding, and reduces to zero.
//! assert!(bool::from(Scalar::from_canonical_bytes(BASEPOINT_ORDER).is_none()));
//! assert_eq!(Scalar::from_bytes_mod_order(BASEPOINT_ORDER), Scalar::ZERO);
//! ```

/// The little-endian bytes of the group order
/// \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
pub const BASEPOINT_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];
