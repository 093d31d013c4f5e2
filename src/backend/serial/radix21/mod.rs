// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! The radix-\\(2\^{21}\\) backend: \\(24\\) signed limbs for wide inputs,
//! \\(12\\) for reduced scalars.

pub(crate) mod constants;

pub(crate) mod scalar;
