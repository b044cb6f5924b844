// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition-changed flag.
//!
//! Every successful push or pop raises [`ChangeFlag`]; an external observer
//! (a monitoring or tooling thread) polls it with
//! [`new_data_to_report`](ChangeFlag::new_data_to_report) and clears it with
//! [`acknowledge`](ChangeFlag::acknowledge). This is the only state in the
//! crate meant to be touched from more than one thread: stack and registry
//! contents carry no locking and belong to the frame-driving thread alone.
//!
//! The flag is a standalone repaint hint with no data dependency, so relaxed
//! atomic ordering suffices on both sides.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// A cloneable handle to the atomic composition-changed flag.
///
/// Clones share one flag. The [`Framework`](crate::framework::Framework)
/// holds one and marks it on every successful push or pop; hand a clone to
/// the observer thread via
/// [`Framework::change_flag`](crate::framework::Framework::change_flag).
#[derive(Clone, Debug, Default)]
pub struct ChangeFlag {
    raised: Arc<AtomicBool>,
}

impl ChangeFlag {
    /// Creates a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub(crate) fn mark(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    /// Returns whether composition changed since the last acknowledgment.
    ///
    /// Reading never clears the flag.
    #[must_use]
    pub fn new_data_to_report(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// Lowers the flag.
    pub fn acknowledge(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }
}
