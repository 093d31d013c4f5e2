// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Reduction of a \\(512\\)-bit integer modulo
//! \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\)
//! using \\(24\\) signed \\(21\\)-bit limbs.
//!
//! The input is split into limbs \\(s\_0, \ldots, s\_{23}\\) with
//! \\(s = \sum s\_i 2\^{21 i}\\). Since \\(12 \cdot 21 = 252\\), the limb
//! \\(s\_{12+k}\\) is the coefficient of \\(2\^{252} \cdot 2\^{21 k}\\), and
//! \\(2\^{252} \equiv -(\ell - 2\^{252}) \pmod \ell\\) has a short signed
//! radix-\\(2\^{21}\\) expansion (see [`FOLD_CONSTANTS`]). Multiplying the
//! high limb by that expansion and adding it six positions lower ("folding")
//! removes the limb without changing the value mod \\(\ell\\).
//!
//! Folds make the low limbs grow, so they are interleaved with carry passes
//! that bring every limb back to roughly \\(21\\) bits before the next
//! multiplication. The whole sequence is fixed ([`REDUCTION_SCHEDULE`]): no
//! branch, index or shift amount depends on the value being reduced.
//!
//! Starting from limbs below \\(2\^{29}\\), no intermediate value exceeds
//! \\(2\^{50}\\) in magnitude, so `i64` arithmetic never overflows.

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::constants::{FOLD_CONSTANTS, LIMB_BITS, LIMB_MASK, REDUCED_LIMBS, WIDE_LIMBS};
use crate::util::{load3, load4};

/// How a carry pass rounds the carry out of a limb.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CarryMode {
    /// Round to nearest, leaving the low limb in \\([-2\^{20}, 2\^{20})\\).
    Centered,
    /// Round down, leaving the low limb in \\([0, 2\^{21})\\).
    Uncentered,
}

/// One step of the reduction.
#[derive(Copy, Clone, Debug)]
enum Step {
    /// Fold limbs `hi`, `hi - 1`, ..., `lo` in that order.
    Fold { hi: usize, lo: usize },
    /// Carry out of limbs `first`, `first + stride`, ..., up to and including
    /// `last`, each into the limb directly above it.
    Carry {
        mode: CarryMode,
        first: usize,
        last: usize,
        stride: usize,
    },
}

/// The fold/carry sequence taking 24 freshly loaded limbs to 12 canonical
/// ones.
///
/// The two trailing folds of limb 12 absorb the carry out of limb 11. The
/// sequential pass between them must round down: rounding to nearest there
/// can leave a representative of \\(-1\\) instead of \\(\ell - 1\\).
#[rustfmt::skip]
const REDUCTION_SCHEDULE: [Step; 10] = [
    Step::Fold { hi: 23, lo: 18 },
    Step::Carry { mode: CarryMode::Centered,   first: 6, last: 16, stride: 2 },
    Step::Carry { mode: CarryMode::Centered,   first: 7, last: 15, stride: 2 },
    Step::Fold { hi: 17, lo: 12 },
    Step::Carry { mode: CarryMode::Centered,   first: 0, last: 10, stride: 2 },
    Step::Carry { mode: CarryMode::Centered,   first: 1, last: 11, stride: 2 },
    Step::Fold { hi: 12, lo: 12 },
    Step::Carry { mode: CarryMode::Uncentered, first: 0, last: 11, stride: 1 },
    Step::Fold { hi: 12, lo: 12 },
    Step::Carry { mode: CarryMode::Uncentered, first: 0, last: 10, stride: 1 },
];

/// A \\(512\\)-bit integer as \\(24\\) signed limbs in radix \\(2\^{21}\\).
///
/// Freshly loaded limbs are non-negative and below \\(2\^{21}\\), except the
/// top limb which holds the remaining \\(29\\) bits. During reduction limbs
/// may be negative or wider than \\(21\\) bits.
#[derive(Copy, Clone)]
pub(crate) struct WideScalar21(pub(crate) [i64; WIDE_LIMBS]);

impl Debug for WideScalar21 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "WideScalar21: {:?}", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for WideScalar21 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Index<usize> for WideScalar21 {
    type Output = i64;
    fn index(&self, _index: usize) -> &i64 {
        &(self.0[_index])
    }
}

impl IndexMut<usize> for WideScalar21 {
    fn index_mut(&mut self, _index: usize) -> &mut i64 {
        &mut (self.0[_index])
    }
}

impl WideScalar21 {
    /// Split a 64-byte little-endian integer into 24 limbs.
    ///
    /// Limb \\(i\\) starts at bit \\(21 i\\). It is read from the three or
    /// four bytes covering that bit range, shifted and masked; the last limb
    /// keeps every remaining bit. The split is exact.
    pub(crate) fn from_bytes_wide(bytes: &[u8; 64]) -> WideScalar21 {
        let mut s = [0i64; WIDE_LIMBS];

        for (i, limb) in s.iter_mut().enumerate().take(WIDE_LIMBS - 1) {
            let bit = (LIMB_BITS as usize) * i;
            let (offset, shift) = (bit / 8, bit % 8);
            let word = if shift + (LIMB_BITS as usize) <= 24 {
                load3(&bytes[offset..])
            } else {
                load4(&bytes[offset..])
            };
            *limb = LIMB_MASK & (word >> shift);
        }
        // 23 * 21 = 483 = 60 * 8 + 3
        s[WIDE_LIMBS - 1] = load4(&bytes[60..]) >> 3;

        WideScalar21(s)
    }

    /// Eliminate limb `k` (for \\(12 \leq k < 24\\)) by adding
    /// `self[k] * FOLD_CONSTANTS[j]` into limb `k - 12 + j`.
    #[inline(always)]
    pub(crate) fn fold(&mut self, k: usize) {
        debug_assert!((REDUCED_LIMBS..WIDE_LIMBS).contains(&k));

        let high = self.0[k];
        for (j, c) in FOLD_CONSTANTS.iter().enumerate() {
            self.0[k - REDUCED_LIMBS + j] += high * c;
        }
        self.0[k] = 0;
    }

    /// Carry excess from the `i`-th limb into the `(i+1)`-th limb.
    /// Postcondition: `-2^20 <= self[i] < 2^20`.
    #[inline(always)]
    pub(crate) fn carry_centered(&mut self, i: usize) {
        let carry = (self.0[i] + (1 << (LIMB_BITS - 1))) >> LIMB_BITS;
        self.0[i + 1] += carry;
        self.0[i] -= carry << LIMB_BITS;
    }

    /// Carry excess from the `i`-th limb into the `(i+1)`-th limb.
    /// Postcondition: `0 <= self[i] < 2^21`.
    #[inline(always)]
    pub(crate) fn carry_uncentered(&mut self, i: usize) {
        let carry = self.0[i] >> LIMB_BITS;
        self.0[i + 1] += carry;
        self.0[i] -= carry << LIMB_BITS;
    }

    fn apply(&mut self, step: &Step) {
        match *step {
            Step::Fold { hi, lo } => {
                for k in (lo..=hi).rev() {
                    self.fold(k);
                }
            }
            Step::Carry {
                mode,
                first,
                last,
                stride,
            } => {
                for i in (first..=last).step_by(stride) {
                    match mode {
                        CarryMode::Centered => self.carry_centered(i),
                        CarryMode::Uncentered => self.carry_uncentered(i),
                    }
                }
            }
        }
    }

    /// Reduce in place modulo \\(\ell\\).
    ///
    /// Afterwards limbs \\(12, \ldots, 23\\) are zero, limbs
    /// \\(0, \ldots, 10\\) lie in \\([0, 2\^{21})\\), limb \\(11\\) is
    /// non-negative, and the value is the canonical representative in
    /// \\([0, \ell)\\).
    pub(crate) fn reduce(&mut self) {
        for step in REDUCTION_SCHEDULE.iter() {
            self.apply(step);
        }

        debug_assert!(self.0[REDUCED_LIMBS..].iter().all(|&limb| limb == 0));
        debug_assert!(self.0[..REDUCED_LIMBS].iter().all(|&limb| limb >= 0));
    }

    /// Pack the low 12 limbs into 32 little-endian bytes.
    ///
    /// Limb \\(i\\) lands at bit offset \\(21 i\\), i.e. byte
    /// \\(\lfloor 21 i / 8 \rfloor\\) shifted left by \\(21 i \bmod 8\\).
    /// Limbs rarely start on a byte boundary, so most bytes are the OR of
    /// the top bits of one limb and the bottom bits of the next. Requires a
    /// reduced input.
    pub(crate) fn pack(&self) -> [u8; 32] {
        let mut s = [0u8; 32];

        for i in 0..REDUCED_LIMBS {
            let bit = (LIMB_BITS as usize) * i;
            let (offset, shift) = (bit / 8, bit % 8);
            // At most 22 + 7 bits, so four bytes; the last limb ends at byte 31.
            let limb = self.0[i] << shift;
            for j in 0..4 {
                s[offset + j] |= (limb >> (8 * j)) as u8;
            }
        }

        s
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use num_bigint::{BigInt, BigUint};
    use rand::{thread_rng, Rng, RngCore};

    fn group_order() -> BigInt {
        (BigInt::from(1u8) << 252) + "27742317777372353535851937790883648493".parse::<BigInt>().unwrap()
    }

    fn limbs_value(limbs: &[i64]) -> BigInt {
        limbs
            .iter()
            .enumerate()
            .fold(BigInt::from(0u8), |acc, (i, &l)| acc + (BigInt::from(l) << (21 * i)))
    }

    fn random_wide(rng: &mut impl RngCore) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        bytes
    }

    /// The packing formula spelled out byte by byte, used as an oracle for
    /// the loop in `pack`.
    #[rustfmt::skip]
    fn pack_by_formula(s: &[i64; 24]) -> [u8; 32] {
        [
             (s[ 0] >>  0)                  as u8,
             (s[ 0] >>  8)                  as u8,
            ((s[ 0] >> 16) | (s[ 1] << 5))  as u8,
             (s[ 1] >>  3)                  as u8,
             (s[ 1] >> 11)                  as u8,
            ((s[ 1] >> 19) | (s[ 2] << 2))  as u8,
             (s[ 2] >>  6)                  as u8,
            ((s[ 2] >> 14) | (s[ 3] << 7))  as u8,
             (s[ 3] >>  1)                  as u8,
             (s[ 3] >>  9)                  as u8,
            ((s[ 3] >> 17) | (s[ 4] << 4))  as u8,
             (s[ 4] >>  4)                  as u8,
             (s[ 4] >> 12)                  as u8,
            ((s[ 4] >> 20) | (s[ 5] << 1))  as u8,
             (s[ 5] >>  7)                  as u8,
            ((s[ 5] >> 15) | (s[ 6] << 6))  as u8,
             (s[ 6] >>  2)                  as u8,
             (s[ 6] >> 10)                  as u8,
            ((s[ 6] >> 18) | (s[ 7] << 3))  as u8,
             (s[ 7] >>  5)                  as u8,
             (s[ 7] >> 13)                  as u8,
             (s[ 8] >>  0)                  as u8,
             (s[ 8] >>  8)                  as u8,
            ((s[ 8] >> 16) | (s[ 9] << 5))  as u8,
             (s[ 9] >>  3)                  as u8,
             (s[ 9] >> 11)                  as u8,
            ((s[ 9] >> 19) | (s[10] << 2))  as u8,
             (s[10] >>  6)                  as u8,
            ((s[10] >> 14) | (s[11] << 7))  as u8,
             (s[11] >>  1)                  as u8,
             (s[11] >>  9)                  as u8,
             (s[11] >> 17)                  as u8,
        ]
    }

    #[test]
    fn fold_constants_encode_2_252_mod_l() {
        let two_252 = BigInt::from(1u8) << 252;
        assert_eq!(limbs_value(&FOLD_CONSTANTS), &two_252 - group_order());
    }

    #[test]
    fn from_bytes_wide_is_exact() {
        let mut rng = thread_rng();
        for _ in 0..1_000 {
            let bytes = random_wide(&mut rng);
            let s = WideScalar21::from_bytes_wide(&bytes);
            assert_eq!(limbs_value(&s.0), BigInt::from(BigUint::from_bytes_le(&bytes)));
        }
    }

    #[test]
    fn from_bytes_wide_all_ones() {
        let s = WideScalar21::from_bytes_wide(&[0xff; 64]);
        for i in 0..23 {
            assert_eq!(s[i], LIMB_MASK);
        }
        // 512 - 23 * 21 = 29 bits remain for the top limb
        assert_eq!(s[23], (1 << 29) - 1);
    }

    #[test]
    fn fold_preserves_value_mod_l() {
        let l = group_order();
        let mut rng = thread_rng();
        for _ in 0..1_000 {
            let mut s = WideScalar21::from_bytes_wide(&random_wide(&mut rng));
            let before = limbs_value(&s.0) % &l;
            let k = rng.gen_range(REDUCED_LIMBS..WIDE_LIMBS);
            s.fold(k);
            assert_eq!(s[k], 0);
            let after = ((limbs_value(&s.0) % &l) + &l) % &l;
            assert_eq!(before, after);
        }
    }

    #[test]
    fn carries_preserve_value_and_bound_limbs() {
        let mut rng = thread_rng();
        for _ in 0..1_000 {
            let mut s = WideScalar21([0i64; WIDE_LIMBS]);
            let i = rng.gen_range(0..WIDE_LIMBS - 1);
            s[i] = rng.gen_range(-(1i64 << 50)..(1i64 << 50));
            s[i + 1] = rng.gen_range(-(1i64 << 21)..(1i64 << 21));
            let before = limbs_value(&s.0);

            let mut centered = s;
            centered.carry_centered(i);
            assert_eq!(limbs_value(&centered.0), before);
            assert!(-(1 << 20) <= centered[i] && centered[i] < (1 << 20));

            let mut uncentered = s;
            uncentered.carry_uncentered(i);
            assert_eq!(limbs_value(&uncentered.0), before);
            assert!(0 <= uncentered[i] && uncentered[i] < (1 << 21));
        }
    }

    #[test]
    fn pack_matches_byte_formula() {
        let mut rng = thread_rng();
        for _ in 0..1_000 {
            let mut s = WideScalar21([0i64; WIDE_LIMBS]);
            for i in 0..11 {
                s[i] = rng.gen_range(0..(1i64 << 21));
            }
            // limb 11 may carry one extra bit when the value is just above 2^252
            s[11] = rng.gen_range(0..(1i64 << 22));
            assert_eq!(s.pack(), pack_by_formula(&s.0));
        }
    }

    #[test]
    fn reduce_leaves_canonical_limbs() {
        let l = group_order();
        let mut rng = thread_rng();
        for _ in 0..1_000 {
            let bytes = random_wide(&mut rng);
            let expected = BigInt::from(BigUint::from_bytes_le(&bytes)) % &l;

            let mut s = WideScalar21::from_bytes_wide(&bytes);
            s.reduce();

            assert!(s.0[REDUCED_LIMBS..].iter().all(|&limb| limb == 0));
            assert!(s.0[..11].iter().all(|&limb| (0..(1 << 21)).contains(&limb)));
            assert!(s[11] >= 0);
            assert_eq!(limbs_value(&s.0), expected);
        }
    }

    #[test]
    fn reduce_minus_one_representative() {
        // l - 1: the first fold of limb 12 turns the value into -1, which the
        // last two folds must lift back to l - 1.
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&[
            0xec, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ]);
        let mut s = WideScalar21::from_bytes_wide(&bytes);
        s.reduce();
        assert_eq!(&s.pack()[..], &bytes[..32]);
    }

    #[test]
    fn reduce_x_plus_2_256_x() {
        // x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
        let x: [u8; 32] = [
            0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2,
            0x7d, 0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8,
            0x79, 0xd9, 0xf2, 0x04,
        ];
        // 3958878930004874126169954872055634648693766179881526445624823978500314864344
        // = x + 2^256x (mod l)
        let reduced: [u8; 32] = [
            216, 154, 179, 139, 210, 121, 2, 71, 69, 99, 158, 216, 23, 173, 63, 100, 204, 0, 91,
            50, 219, 153, 57, 249, 28, 82, 31, 197, 100, 165, 192, 8,
        ];

        let mut bignum = [0u8; 64];
        bignum[..32].copy_from_slice(&x);
        bignum[32..].copy_from_slice(&x);

        let mut s = WideScalar21::from_bytes_wide(&bignum);
        s.reduce();
        assert_eq!(s.pack(), reduced);
    }
}
