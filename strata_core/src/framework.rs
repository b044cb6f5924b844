// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The framework coordinator: three stacks, three registries, one flag.
//!
//! [`Framework`] is the single entry point the surrounding game loop uses.
//! Once per frame it forwards [`update`](Framework::update),
//! [`draw`](Framework::draw), and [`receive_input`](Framework::receive_input)
//! to the matching stack's dispatch. Composition changes arrive either as
//! direct single-capability push/pop calls or as composite
//! [`push_layers`](Framework::push_layers) /
//! [`pop_layers`](Framework::pop_layers) requests resolved by name against
//! the per-capability registries.
//!
//! The coordinator is an owned aggregate: multiple independent instances can
//! coexist, and tests get isolated state. It is deliberately not `Sync`;
//! the only cross-thread surface is the [`ChangeFlag`] handle returned by
//! [`change_flag`](Framework::change_flag).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::dirty::ChangeFlag;
use crate::layer::{Layer, LayerKinds, LayerRegistry, LayerStack, LookupError, StackError};
use crate::trace::{
    LookupFailedEvent, PopEvent, PopRefusedEvent, PushEvent, PushRefusedEvent, TraceSink, Tracer,
};

/// Error from [`Framework::push_layers`]: a registry lookup failed for one of
/// the requested capabilities.
///
/// Capabilities processed before the failing one remain pushed; see
/// [`push_layers`](Framework::push_layers).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushLayersError {
    /// The single capability whose lookup failed.
    pub kind: LayerKinds,
    /// The underlying lookup failure.
    pub source: LookupError,
}

impl fmt::Display for PushLayersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push_layers failed for {:?}: {}", self.kind, self.source)
    }
}

impl core::error::Error for PushLayersError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The layer-composition coordinator of a game framework.
///
/// `I` is the opaque input-event payload and `R` the opaque render context
/// (camera/view state); the update action is `f64` delta seconds. The
/// framework owns one bounded [`LayerStack`] and one [`LayerRegistry`] per
/// capability, plus the composition [`ChangeFlag`].
///
/// All methods complete synchronously and none are fatal on failure: the
/// framework remains fully usable after any refusal.
pub struct Framework<I, R> {
    input_stack: LayerStack<I>,
    drawable_stack: LayerStack<R>,
    updateable_stack: LayerStack<f64>,
    input_registry: LayerRegistry<I>,
    drawable_registry: LayerRegistry<R>,
    updateable_registry: LayerRegistry<f64>,
    changed: ChangeFlag,
    tracer: Tracer,
}

impl<I, R> fmt::Debug for Framework<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framework")
            .field("input_layers", &self.input_stack.len())
            .field("drawable_layers", &self.drawable_stack.len())
            .field("updateable_layers", &self.updateable_stack.len())
            .field("new_data", &self.changed.new_data_to_report())
            .finish_non_exhaustive()
    }
}

impl<I, R> Default for Framework<I, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, R> Framework<I, R> {
    /// Creates a framework with empty stacks and registries and a lowered
    /// change flag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input_stack: LayerStack::new(),
            drawable_stack: LayerStack::new(),
            updateable_stack: LayerStack::new(),
            input_registry: LayerRegistry::new(),
            drawable_registry: LayerRegistry::new(),
            updateable_registry: LayerRegistry::new(),
            changed: ChangeFlag::new(),
            tracer: Tracer::none(),
        }
    }

    /// Installs a [`TraceSink`] receiving composition events.
    ///
    /// Without the `trace` feature the sink is dropped and no events are
    /// produced.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Tracer::new(sink);
    }

    // -- Per-frame dispatch ------------------------------------------------

    /// Dispatches an update step of `delta_seconds` to the updateable stack.
    pub fn update(&self, delta_seconds: f64) {
        self.updateable_stack.dispatch(&delta_seconds);
    }

    /// Dispatches a draw pass with the given render context to the drawable
    /// stack.
    pub fn draw(&self, context: &R) {
        self.drawable_stack.dispatch(context);
    }

    /// Dispatches an input event to the input stack.
    pub fn receive_input(&self, event: &I) {
        self.input_stack.dispatch(event);
    }

    // -- Composite composition changes -------------------------------------

    /// Resolves `name` in each requested capability's registry and pushes the
    /// result onto that capability's stack, in the fixed order Input, Draw,
    /// Update.
    ///
    /// A lookup failure aborts the remaining capabilities and fails the call,
    /// but capabilities already pushed earlier in the same call **remain
    /// pushed** — there is no rollback. A capacity refusal does not fail the
    /// call; it leaves that capability's stack unchanged and is surfaced
    /// through the trace channel only.
    ///
    /// # Errors
    ///
    /// Returns [`PushLayersError`] naming the capability whose lookup failed
    /// and whether the name was missing or ambiguous.
    pub fn push_layers(&mut self, name: &str, kinds: LayerKinds) -> Result<(), PushLayersError> {
        if kinds.contains(LayerKinds::INPUT) {
            activate(
                LayerKinds::INPUT,
                &self.input_registry,
                &mut self.input_stack,
                &self.changed,
                &mut self.tracer,
                name,
            )?;
        }
        if kinds.contains(LayerKinds::DRAW) {
            activate(
                LayerKinds::DRAW,
                &self.drawable_registry,
                &mut self.drawable_stack,
                &self.changed,
                &mut self.tracer,
                name,
            )?;
        }
        if kinds.contains(LayerKinds::UPDATE) {
            activate(
                LayerKinds::UPDATE,
                &self.updateable_registry,
                &mut self.updateable_stack,
                &self.changed,
                &mut self.tracer,
                name,
            )?;
        }
        Ok(())
    }

    /// Pops the top layer of each requested capability's stack.
    ///
    /// The composite call always succeeds; an individual empty-stack refusal
    /// is surfaced through the trace channel only.
    pub fn pop_layers(&mut self, kinds: LayerKinds) {
        if kinds.contains(LayerKinds::INPUT) {
            let _ = self.pop_input_layer();
        }
        if kinds.contains(LayerKinds::DRAW) {
            let _ = self.pop_drawable_layer();
        }
        if kinds.contains(LayerKinds::UPDATE) {
            let _ = self.pop_updateable_layer();
        }
    }

    // -- Direct single-capability composition changes -----------------------

    /// Pushes a layer onto the input stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::CapacityExceeded`] if the input stack is full.
    pub fn push_input_layer(&mut self, layer: Rc<dyn Layer<I>>) -> Result<(), StackError> {
        push_onto(
            LayerKinds::INPUT,
            &mut self.input_stack,
            &self.changed,
            &mut self.tracer,
            layer,
        )
    }

    /// Pops the top layer off the input stack and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the input stack holds no layers.
    pub fn pop_input_layer(&mut self) -> Result<Rc<dyn Layer<I>>, StackError> {
        pop_from(
            LayerKinds::INPUT,
            &mut self.input_stack,
            &self.changed,
            &mut self.tracer,
        )
    }

    /// Pushes a layer onto the drawable stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::CapacityExceeded`] if the drawable stack is full.
    pub fn push_drawable_layer(&mut self, layer: Rc<dyn Layer<R>>) -> Result<(), StackError> {
        push_onto(
            LayerKinds::DRAW,
            &mut self.drawable_stack,
            &self.changed,
            &mut self.tracer,
            layer,
        )
    }

    /// Pops the top layer off the drawable stack and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the drawable stack holds no layers.
    pub fn pop_drawable_layer(&mut self) -> Result<Rc<dyn Layer<R>>, StackError> {
        pop_from(
            LayerKinds::DRAW,
            &mut self.drawable_stack,
            &self.changed,
            &mut self.tracer,
        )
    }

    /// Pushes a layer onto the updateable stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::CapacityExceeded`] if the updateable stack is
    /// full.
    pub fn push_updateable_layer(&mut self, layer: Rc<dyn Layer<f64>>) -> Result<(), StackError> {
        push_onto(
            LayerKinds::UPDATE,
            &mut self.updateable_stack,
            &self.changed,
            &mut self.tracer,
            layer,
        )
    }

    /// Pops the top layer off the updateable stack and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the updateable stack holds no layers.
    pub fn pop_updateable_layer(&mut self) -> Result<Rc<dyn Layer<f64>>, StackError> {
        pop_from(
            LayerKinds::UPDATE,
            &mut self.updateable_stack,
            &self.changed,
            &mut self.tracer,
        )
    }

    // -- Introspection ------------------------------------------------------

    /// Returns the input stack contents, bottom first.
    #[must_use]
    pub fn input_layers(&self) -> &[Rc<dyn Layer<I>>] {
        self.input_stack.layers()
    }

    /// Returns the drawable stack contents, bottom first.
    #[must_use]
    pub fn drawable_layers(&self) -> &[Rc<dyn Layer<R>>] {
        self.drawable_stack.layers()
    }

    /// Returns the updateable stack contents, bottom first.
    #[must_use]
    pub fn updateable_layers(&self) -> &[Rc<dyn Layer<f64>>] {
        self.updateable_stack.layers()
    }

    /// Returns the current input stack size.
    #[must_use]
    pub fn input_layer_count(&self) -> usize {
        self.input_stack.len()
    }

    /// Returns the current drawable stack size.
    #[must_use]
    pub fn drawable_layer_count(&self) -> usize {
        self.drawable_stack.len()
    }

    /// Returns the current updateable stack size.
    #[must_use]
    pub fn updateable_layer_count(&self) -> usize {
        self.updateable_stack.len()
    }

    // -- Registries ---------------------------------------------------------

    /// Returns the input-capability registry.
    #[must_use]
    pub fn input_registry(&self) -> &LayerRegistry<I> {
        &self.input_registry
    }

    /// Returns the input-capability registry for registration changes.
    pub fn input_registry_mut(&mut self) -> &mut LayerRegistry<I> {
        &mut self.input_registry
    }

    /// Returns the drawable-capability registry.
    #[must_use]
    pub fn drawable_registry(&self) -> &LayerRegistry<R> {
        &self.drawable_registry
    }

    /// Returns the drawable-capability registry for registration changes.
    pub fn drawable_registry_mut(&mut self) -> &mut LayerRegistry<R> {
        &mut self.drawable_registry
    }

    /// Returns the updateable-capability registry.
    #[must_use]
    pub fn updateable_registry(&self) -> &LayerRegistry<f64> {
        &self.updateable_registry
    }

    /// Returns the updateable-capability registry for registration changes.
    pub fn updateable_registry_mut(&mut self) -> &mut LayerRegistry<f64> {
        &mut self.updateable_registry
    }

    // -- Change flag --------------------------------------------------------

    /// Returns whether composition changed since the last acknowledgment.
    ///
    /// Reading never clears the flag.
    #[must_use]
    pub fn new_data_to_report(&self) -> bool {
        self.changed.new_data_to_report()
    }

    /// Clears the composition-changed flag.
    pub fn acknowledge_new_data(&self) {
        self.changed.acknowledge();
    }

    /// Returns a handle to the composition-changed flag for an observer
    /// thread.
    ///
    /// This handle (and the two flag operations on the framework itself) are
    /// the only parts of the system safe to touch from a thread other than
    /// the frame-driving one.
    #[must_use]
    pub fn change_flag(&self) -> ChangeFlag {
        self.changed.clone()
    }
}

/// Pushes onto one capability's stack, marking the flag and tracing.
fn push_onto<A>(
    kind: LayerKinds,
    stack: &mut LayerStack<A>,
    changed: &ChangeFlag,
    tracer: &mut Tracer,
    layer: Rc<dyn Layer<A>>,
) -> Result<(), StackError> {
    match stack.push(layer.clone()) {
        Ok(()) => {
            changed.mark();
            tracer.layer_pushed(&PushEvent {
                kind,
                name: layer.name(),
                depth: stack.len(),
            });
            Ok(())
        }
        Err(err) => {
            tracer.push_refused(&PushRefusedEvent {
                kind,
                name: layer.name(),
            });
            Err(err)
        }
    }
}

/// Pops one capability's stack, marking the flag and tracing.
fn pop_from<A>(
    kind: LayerKinds,
    stack: &mut LayerStack<A>,
    changed: &ChangeFlag,
    tracer: &mut Tracer,
) -> Result<Rc<dyn Layer<A>>, StackError> {
    match stack.pop() {
        Ok(layer) => {
            changed.mark();
            tracer.layer_popped(&PopEvent {
                kind,
                name: layer.name(),
                depth: stack.len(),
            });
            Ok(layer)
        }
        Err(err) => {
            tracer.pop_refused(&PopRefusedEvent { kind });
            Err(err)
        }
    }
}

/// One capability's share of [`Framework::push_layers`]: resolve, then push.
fn activate<A>(
    kind: LayerKinds,
    registry: &LayerRegistry<A>,
    stack: &mut LayerStack<A>,
    changed: &ChangeFlag,
    tracer: &mut Tracer,
    name: &str,
) -> Result<(), PushLayersError> {
    match registry.find_by_name(name) {
        Ok(layer) => {
            // Capacity refusals surface through the per-capability channel
            // (trace + unchanged stack) without failing the composite call.
            let _ = push_onto(kind, stack, changed, tracer, layer);
            Ok(())
        }
        Err(source) => {
            tracer.lookup_failed(&LookupFailedEvent {
                kind,
                name,
                duplicate: matches!(source, LookupError::Duplicate { .. }),
            });
            Err(PushLayersError { kind, source })
        }
    }
}
