// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, journaling, and JSON export for strata composition
//! diagnostics.
//!
//! This crate provides [`TraceSink`](strata_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`journal::JournalSink`] — in-memory recording of owned events, with
//!   [`journal::export_json`] for tooling consumption.

pub mod journal;
pub mod pretty;

use strata_core::layer::LayerKinds;

/// Short label for a single-capability [`LayerKinds`] value as carried by
/// trace events.
pub(crate) fn kind_label(kind: LayerKinds) -> &'static str {
    if kind == LayerKinds::INPUT {
        "input"
    } else if kind == LayerKinds::DRAW {
        "draw"
    } else if kind == LayerKinds::UPDATE {
        "update"
    } else {
        "mixed"
    }
}
