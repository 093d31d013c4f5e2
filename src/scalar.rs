// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Scalars: integers modulo the group order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! A [`Scalar`] always holds the canonical representative in
//! \\( [0, \ell) \\), as 32 little-endian bytes.
//!
//! # Constructing a scalar
//!
//! Signature schemes derive their secret scalars, nonces and challenges from
//! \\(512\\)-bit hash outputs. Those go through
//! [`Scalar::from_bytes_mod_order_wide`], or, for callers that manage their
//! own buffers, through [`reduce_wide`], which reduces a 64-byte buffer in
//! place:
//!
//! ```
//! use ed25519_scalar::scalar::reduce_wide;
//! use ed25519_scalar::Scalar;
//!
//! let mut buf = [0xffu8; 64];
//! let s = Scalar::from_bytes_mod_order_wide(&buf);
//!
//! reduce_wide(&mut buf);
//! assert_eq!(&buf[..32], s.as_bytes());
//! ```
//!
//! Bytes that claim to already be an encoded scalar are checked with
//! [`Scalar::from_canonical_bytes`], which returns `None` (in constant time)
//! for anything at or above \\( \ell \\):
//!
//! ```
//! use ed25519_scalar::Scalar;
//!
//! let l_plus_two_bytes: [u8; 32] = [
//!    0xef, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
//!    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
//!    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
//! ];
//! let a: Option<Scalar> = Scalar::from_canonical_bytes(l_plus_two_bytes).into();
//! assert!(a.is_none());
//!
//! // Reducing the same bytes instead gives 2.
//! assert_eq!(Scalar::from_bytes_mod_order(l_plus_two_bytes), Scalar::from(2u8));
//! ```

use core::fmt::Debug;
use core::ops::Index;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(any(test, feature = "rand_core"))]
use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend;
use crate::errors::ScalarError;

type UnpackedScalar = backend::serial::radix21::scalar::WideScalar21;

/// Reduce the 512-bit little-endian integer in `bytes` modulo \\( \ell \\),
/// in place.
///
/// The first 32 bytes of `bytes` are overwritten with the canonical encoding
/// of the result. Callers must not rely on the last 32 bytes; this
/// implementation clears them.
///
/// The reduction runs a fixed sequence of limb operations: its control flow
/// and memory accesses do not depend on the value of `bytes`.
pub fn reduce_wide(bytes: &mut [u8; 64]) {
    let mut s = Scalar::from_bytes_mod_order_wide(bytes);
    bytes[..32].copy_from_slice(&s.bytes);
    bytes[32..].fill(0);

    #[cfg(feature = "zeroize")]
    s.zeroize();
}

/// The `Scalar` struct holds an element of \\(\mathbb Z / \ell\mathbb Z \\).
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of an integer representing a
    /// scalar modulo the group order.
    ///
    /// # Invariant
    ///
    /// The integer is less than \\( \ell \\). Every constructor either
    /// reduces or checks, so the invariant holds for all values reachable
    /// through the public API. In particular the top bit of `bytes[31]` is
    /// always clear.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    #[rustfmt::skip]
    pub const ONE: Self = Self {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
    };

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&bytes);
        let s = Scalar::from_bytes_mod_order_wide(&wide);

        #[cfg(feature = "zeroize")]
        wide.zeroize();

        s
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        let mut limbs = UnpackedScalar::from_bytes_wide(input);
        limbs.reduce();
        let s = Scalar {
            bytes: limbs.pack(),
        };

        #[cfg(feature = "zeroize")]
        limbs.zeroize();

        debug_assert_eq!(0u8, s[31] >> 7);
        s
    }

    /// Attempt to construct a `Scalar` from a canonical byte representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation modulo the group order \\( \ell \\);
    /// - `None` if `bytes` is not a canonical byte representation.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let high_bit_unset = (bytes[31] >> 7).ct_eq(&0);
        let candidate = Scalar { bytes };
        CtOption::new(candidate, high_bit_unset & candidate.is_canonical())
    }

    /// Return a `Scalar` chosen uniformly at random using a user-provided RNG.
    ///
    /// Sixty-four bytes are drawn and reduced, so the statistical distance
    /// from uniform is below \\(2\^{-259}\\).
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "rand_core")]
    /// # fn main() {
    /// use ed25519_scalar::Scalar;
    ///
    /// use rand_core::OsRng;
    ///
    /// let mut csprng = OsRng;
    /// let a: Scalar = Scalar::random(&mut csprng);
    /// # }
    /// # #[cfg(not(feature = "rand_core"))]
    /// # fn main() {}
    /// ```
    #[cfg(any(test, feature = "rand_core"))]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        let s = Scalar::from_bytes_mod_order_wide(&scalar_bytes);

        #[cfg(feature = "zeroize")]
        scalar_bytes.zeroize();

        s
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Reduce this `Scalar` modulo \\(\ell\\).
    fn reduce(&self) -> Scalar {
        Scalar::from_bytes_mod_order(self.bytes)
    }

    /// Check whether this `Scalar` is the canonical representative mod \\(\ell\\).
    fn is_canonical(&self) -> Choice {
        self.ct_eq(&self.reduce())
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        #[allow(clippy::needless_range_loop)]
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the representative for this `Scalar`.  Mutation is not permitted.
    fn index(&self, _index: usize) -> &u8 {
        &(self.bytes[_index])
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

/// Every unsigned integer type up to 128 bits is already below \\( \ell \\),
/// so the little-endian embedding is canonical.
macro_rules! impl_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            fn from(x: $t) -> Scalar {
                let x_bytes = x.to_le_bytes();
                let mut s_bytes = [0u8; 32];
                s_bytes[..x_bytes.len()].copy_from_slice(&x_bytes);
                Scalar { bytes: s_bytes }
            }
        }
    )*};
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl TryFrom<&[u8]> for Scalar {
    type Error = ScalarError;

    /// Decode a canonical 32-byte encoding from a slice.
    fn try_from(bytes: &[u8]) -> Result<Scalar, ScalarError> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| ScalarError::BytesLength {
            name: "Scalar",
            length: 32,
        })?;
        Option::from(Scalar::from_canonical_bytes(bytes)).ok_or(ScalarError::NonCanonical)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str(
                    "a sequence of 32 bytes whose little-endian interpretation is less than the \
                    basepoint order ℓ",
                )
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom(ScalarError::NonCanonical))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}
