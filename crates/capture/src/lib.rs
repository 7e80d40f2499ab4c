// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output capture for the k0test harness.
//!
//! Everything the conformance runner reports goes through an [`OutputSink`].
//! The sink normally writes to stdout; a [`RedirectGuard`] points it at a
//! [`Transcript`] file for as long as the guard is alive.

mod buffer;
mod sink;
mod transcript;

pub use buffer::CaptureBuffer;
pub use sink::{OutputSink, RedirectGuard};
pub use transcript::Transcript;
