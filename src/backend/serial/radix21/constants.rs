// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Constants for the radix-\\(2\^{21}\\) scalar reduction.

/// Width in bits of one limb.
pub(crate) const LIMB_BITS: u32 = 21;

/// Mask selecting the low `LIMB_BITS` bits of a limb.
pub(crate) const LIMB_MASK: i64 = (1 << LIMB_BITS) - 1;

/// Number of limbs in a reduced scalar; \\(12 \cdot 21 = 252\\).
pub(crate) const REDUCED_LIMBS: usize = 12;

/// Number of limbs needed to hold a 512-bit input.
pub(crate) const WIDE_LIMBS: usize = 24;

/// Signed radix-\\(2\^{21}\\) digits of \\(2\^{252} \bmod \ell\\), i.e. of
/// \\(-(\ell - 2\^{252}) = -27742317777372353535851937790883648493\\):
///
/// ```text
/// 2^252 = 666643
///       + 470296 * 2^21
///       + 654183 * 2^42
///       - 997805 * 2^63
///       + 136657 * 2^84
///       - 683901 * 2^105   (mod l)
/// ```
///
/// Multiplying a limb at position \\(12 + k\\) by these digits and adding
/// them at positions \\(k, \ldots, k + 5\\) removes it without changing the
/// value mod \\(\ell\\).
pub(crate) const FOLD_CONSTANTS: [i64; 6] = [666643, 470296, 654183, -997805, 136657, -683901];
