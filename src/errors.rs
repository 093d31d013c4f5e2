// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Errors which may occur when parsing scalars from untyped byte slices.
//!
//! Every fixed-size constructor is infallible or returns a
//! [`subtle::CtOption`]; these errors only arise at slice boundaries.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while decoding a [`Scalar`](crate::Scalar) from a
/// byte slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScalarError {
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` is the type which is returning the error, and `length` the
    /// number of bytes its constructor expects.
    BytesLength {
        /// The type being decoded.
        name: &'static str,
        /// The expected length in bytes.
        length: usize,
    },
    /// The bytes do not encode an integer less than the group order.
    NonCanonical,
}

impl Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScalarError::BytesLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
            ScalarError::NonCanonical => {
                write!(f, "Scalar bytes are not reduced modulo the group order")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScalarError {}
