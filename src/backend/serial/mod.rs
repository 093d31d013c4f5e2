// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! Serial implementations of scalar reduction.

pub(crate) mod radix21;
