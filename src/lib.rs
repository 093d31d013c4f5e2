// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(future_incompatible, missing_docs, rust_2018_idioms)]

//! Constant-time reduction of wide integers modulo the Ed25519 group order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! The entry points are [`reduce_wide`], which reduces a 64-byte buffer in
//! place, and the [`Scalar`] type, which holds a canonical residue.
//!
//! # Feature flags
//!
//! * `zeroize` (default): implement `Zeroize` for [`Scalar`] and clear
//!   intermediate limbs after each reduction.
//! * `rand_core`: enable [`Scalar::random`].
//! * `serde`: implement `Serialize` and `Deserialize` for [`Scalar`] as a
//!   32-byte tuple. Deserialization rejects non-canonical encodings.
//! * `std`: implement `std::error::Error` for [`ScalarError`].

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(any(test, feature = "std"))]
extern crate std;

//------------------------------------------------------------------------
// ed25519-scalar public modules
//------------------------------------------------------------------------

// Scalars mod l = 2^252 + ..., and the in-place wide reduction
pub mod scalar;

// The group order
pub mod constants;

// Errors which may occur when decoding scalars
pub mod errors;

//------------------------------------------------------------------------
// ed25519-scalar internal modules
//------------------------------------------------------------------------

// Limb arithmetic for the reduction lives here
pub(crate) mod backend;

// Byte loaders
pub(crate) mod util;

//------------------------------------------------------------------------
// Re-exports
//------------------------------------------------------------------------

pub use crate::errors::ScalarError;
pub use crate::scalar::{reduce_wide, Scalar};
