// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for composition changes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Framework`](crate::framework::Framework) calls as layers are pushed,
//! popped, refused, or fail to resolve. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `Box<dyn TraceSink>`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! Per-frame dispatch is deliberately not traced: three events per frame per
//! stack would drown the composition events this channel exists for.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::layer::LayerKinds;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a layer is pushed onto a stack.
#[derive(Clone, Copy, Debug)]
pub struct PushEvent<'a> {
    /// Which capability's stack was pushed.
    pub kind: LayerKinds,
    /// The pushed layer's name.
    pub name: &'a str,
    /// Stack size after the push.
    pub depth: usize,
}

/// Emitted after a layer is popped off a stack.
#[derive(Clone, Copy, Debug)]
pub struct PopEvent<'a> {
    /// Which capability's stack was popped.
    pub kind: LayerKinds,
    /// The popped layer's name.
    pub name: &'a str,
    /// Stack size after the pop.
    pub depth: usize,
}

/// Emitted when a push is refused because the stack is at capacity.
#[derive(Clone, Copy, Debug)]
pub struct PushRefusedEvent<'a> {
    /// Which capability's stack refused.
    pub kind: LayerKinds,
    /// The name of the layer that was not pushed.
    pub name: &'a str,
}

/// Emitted when a pop is refused because the stack is empty.
#[derive(Clone, Copy, Debug)]
pub struct PopRefusedEvent {
    /// Which capability's stack refused.
    pub kind: LayerKinds,
}

/// Emitted when a registry lookup fails during
/// [`push_layers`](crate::framework::Framework::push_layers).
#[derive(Clone, Copy, Debug)]
pub struct LookupFailedEvent<'a> {
    /// Which capability's registry was consulted.
    pub kind: LayerKinds,
    /// The name that failed to resolve.
    pub name: &'a str,
    /// `true` for an ambiguous name, `false` for no match.
    pub duplicate: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives composition events from the framework.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a layer is pushed.
    fn on_layer_pushed(&mut self, e: &PushEvent<'_>) {
        _ = e;
    }

    /// Called after a layer is popped.
    fn on_layer_popped(&mut self, e: &PopEvent<'_>) {
        _ = e;
    }

    /// Called when a push is refused at capacity.
    fn on_push_refused(&mut self, e: &PushRefusedEvent<'_>) {
        _ = e;
    }

    /// Called when a pop is refused on an empty stack.
    fn on_pop_refused(&mut self, e: &PopRefusedEvent) {
        _ = e;
    }

    /// Called when a name fails to resolve in a registry.
    fn on_lookup_failed(&mut self, e: &LookupFailedEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional owned [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// installed sinks are dropped. When **on**, each method checks the inner
/// `Option` (one branch) before dispatching.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<alloc::boxed::Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: alloc::boxed::Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Emits a [`PushEvent`].
    #[inline]
    pub fn layer_pushed(&mut self, e: &PushEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_pushed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PopEvent`].
    #[inline]
    pub fn layer_popped(&mut self, e: &PopEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_popped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PushRefusedEvent`].
    #[inline]
    pub fn push_refused(&mut self, e: &PushRefusedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_push_refused(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PopRefusedEvent`].
    #[inline]
    pub fn pop_refused(&mut self, e: &PopRefusedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pop_refused(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LookupFailedEvent`].
    #[inline]
    pub fn lookup_failed(&mut self, e: &LookupFailedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_lookup_failed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
