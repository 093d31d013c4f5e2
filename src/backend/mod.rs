// -*- mode: rust; -*-
//
// This file is part of ed25519-scalar.
// See LICENSE for licensing information.

//! **INTERNALS:** Limb-level implementations of scalar reduction.
//!
//! Only a serial backend exists. It works on signed \\(64\\)-bit limbs in
//! radix \\(2\^{21}\\), which keeps every product of a limb with a reduction
//! constant well inside `i64` on both 32- and 64-bit targets.

pub(crate) mod serial;
