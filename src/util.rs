// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Little-endian byte loaders used to split wide integers into limbs.

/// Read three little-endian bytes starting at `input[0]` into an `i64`.
///
/// Panics if `input` is shorter than three bytes; every caller passes a
/// fixed in-bounds offset into a fixed-size array.
#[inline(always)]
#[rustfmt::skip]
pub(crate) fn load3(input: &[u8]) -> i64 {
       (input[0] as i64)
    | ((input[1] as i64) << 8)
    | ((input[2] as i64) << 16)
}

/// Read four little-endian bytes starting at `input[0]` into an `i64`.
#[inline(always)]
#[rustfmt::skip]
pub(crate) fn load4(input: &[u8]) -> i64 {
       (input[0] as i64)
    | ((input[1] as i64) << 8)
    | ((input[2] as i64) << 16)
    | ((input[3] as i64) << 24)
}
