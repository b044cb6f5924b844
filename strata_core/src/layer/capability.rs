// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-capability layer trait.

/// One capability of a layer, parameterized over its action payload `A`.
///
/// A concrete layer type implements `Layer<A>` once per capability it
/// supports — e.g. a pause menu that receives input, draws, and updates
/// implements the trait three times, for the input-event type, the render
/// context type, and `f64` (delta seconds). Each implementation carries its
/// own name, masking predicate, and lifecycle hooks, so a layer may present
/// different behavior per capability.
///
/// Dispatch methods take `&self`: layers are shared (`Rc<dyn Layer<A>>`) and
/// may appear on a stack more than once. Implementations that mutate state in
/// [`handle`](Self::handle) use interior mutability (`Cell`, `RefCell`).
pub trait Layer<A> {
    /// The symbolic name used for registry lookup.
    ///
    /// Names must be unique within a capability's registry for
    /// [`find_by_name`](super::LayerRegistry::find_by_name) to succeed.
    fn name(&self) -> &str;

    /// Handles one dispatched action (an input event, a draw pass, or an
    /// update step).
    fn handle(&self, action: &A);

    /// Whether this layer masks the layers beneath it for the action just
    /// handled.
    ///
    /// Queried by [`LayerStack::dispatch`](super::LayerStack::dispatch)
    /// immediately after [`handle`](Self::handle); returning `true` stops
    /// downward propagation for that call.
    fn masks_below(&self) -> bool;

    /// Called when the layer is pushed onto a stack for this capability.
    fn on_push(&self) {}

    /// Called when the layer is popped off a stack for this capability.
    fn on_pop(&self) {}
}
