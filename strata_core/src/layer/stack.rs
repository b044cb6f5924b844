// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded layer stack and masked top-down dispatch.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use super::capability::Layer;

/// Fixed capacity shared by all layer stacks.
///
/// The bound is fixed for the process lifetime; a push against a full stack
/// is refused, never absorbed by a reallocation.
pub const STACK_CAPACITY: usize = 16;

/// Errors from [`LayerStack`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// Push against a stack already holding [`STACK_CAPACITY`] layers.
    CapacityExceeded,
    /// Pop from a stack holding no layers.
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => {
                write!(f, "stack capacity ({STACK_CAPACITY}) exceeded, can't push")
            }
            Self::Empty => write!(f, "stack is empty, can't pop"),
        }
    }
}

impl core::error::Error for StackError {}

/// An ordered, fixed-capacity stack of layers for one capability.
///
/// Index 0 is the bottom; the highest index is the top — the most recently
/// pushed layer and the first to receive dispatch. A layer may legally appear
/// on one stack more than once.
pub struct LayerStack<A> {
    entries: Vec<Rc<dyn Layer<A>>>,
}

impl<A> fmt::Debug for LayerStack<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStack")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<A> Default for LayerStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> LayerStack<A> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(STACK_CAPACITY),
        }
    }

    /// Pushes a layer on top of the stack, then invokes its
    /// [`on_push`](Layer::on_push) hook.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::CapacityExceeded`] if the stack already holds
    /// [`STACK_CAPACITY`] layers; the stack is unchanged and no hook runs.
    pub fn push(&mut self, layer: Rc<dyn Layer<A>>) -> Result<(), StackError> {
        if self.entries.len() >= STACK_CAPACITY {
            return Err(StackError::CapacityExceeded);
        }
        self.entries.push(layer);
        self.entries[self.entries.len() - 1].on_push();
        Ok(())
    }

    /// Removes the top layer, invokes its [`on_pop`](Layer::on_pop) hook, and
    /// returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack holds no layers.
    pub fn pop(&mut self) -> Result<Rc<dyn Layer<A>>, StackError> {
        let top = self.entries.pop().ok_or(StackError::Empty)?;
        top.on_pop();
        Ok(top)
    }

    /// Dispatches `action` to the layers from top to bottom, honoring
    /// masking.
    ///
    /// Each layer's [`handle`](Layer::handle) runs first, then its
    /// [`masks_below`](Layer::masks_below) predicate is queried: `true` stops
    /// the walk, so no layer beneath is invoked for this call. The bottom
    /// layer ends the walk regardless of its predicate. An empty stack is a
    /// silent no-op.
    pub fn dispatch(&self, action: &A) {
        let Some(top) = self.entries.len().checked_sub(1) else {
            return;
        };
        let mut index = top;
        loop {
            let layer = &self.entries[index];
            layer.handle(action);
            if layer.masks_below() || index == 0 {
                break;
            }
            index -= 1;
        }
    }

    /// Returns the current stack contents, bottom first.
    ///
    /// The view is immutable; push order and capacity cannot be corrupted
    /// through it.
    #[must_use]
    pub fn layers(&self) -> &[Rc<dyn Layer<A>>] {
        &self.entries
    }

    /// Returns the number of layers currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the stack holds no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    use super::*;

    /// A layer that records every call it receives.
    struct Probe {
        name: &'static str,
        masks: Cell<bool>,
        handled: Cell<u32>,
        pushes: Cell<u32>,
        pops: Cell<u32>,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Probe {
        fn new(name: &'static str, masks: bool, log: &Rc<RefCell<Vec<&'static str>>>) -> Rc<Self> {
            Rc::new(Self {
                name,
                masks: Cell::new(masks),
                handled: Cell::new(0),
                pushes: Cell::new(0),
                pops: Cell::new(0),
                log: log.clone(),
            })
        }
    }

    impl Layer<u32> for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn handle(&self, _action: &u32) {
            self.handled.set(self.handled.get() + 1);
            self.log.borrow_mut().push(self.name);
        }

        fn masks_below(&self) -> bool {
            self.masks.get()
        }

        fn on_push(&self) {
            self.pushes.set(self.pushes.get() + 1);
        }

        fn on_pop(&self) {
            self.pops.set(self.pops.get() + 1);
        }
    }

    fn log() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn push_appends_and_runs_hook() {
        let log = log();
        let mut stack = LayerStack::new();
        let a = Probe::new("a", false, &log);
        stack.push(a.clone()).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(a.pushes.get(), 1);
    }

    #[test]
    fn pop_returns_top_and_runs_hook() {
        let log = log();
        let mut stack = LayerStack::new();
        let a = Probe::new("a", false, &log);
        let b = Probe::new("b", false, &log);
        stack.push(a).unwrap();
        stack.push(b.clone()).unwrap();

        let popped = stack.pop().unwrap();
        assert_eq!(popped.name(), "b");
        assert_eq!(b.pops.get(), 1);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_empty_refuses_and_size_stays_zero() {
        let mut stack: LayerStack<u32> = LayerStack::new();
        assert_eq!(stack.pop().err(), Some(StackError::Empty));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn push_beyond_capacity_refuses_and_size_stays_at_capacity() {
        let log = log();
        let mut stack = LayerStack::new();
        for _ in 0..STACK_CAPACITY {
            stack.push(Probe::new("filler", false, &log)).unwrap();
        }

        let extra = Probe::new("extra", false, &log);
        assert_eq!(
            stack.push(extra.clone()).err(),
            Some(StackError::CapacityExceeded)
        );
        assert_eq!(stack.len(), STACK_CAPACITY);
        // The refused layer's hook must not have run.
        assert_eq!(extra.pushes.get(), 0);
    }

    #[test]
    fn dispatch_on_empty_stack_is_a_no_op() {
        let stack: LayerStack<u32> = LayerStack::new();
        stack.dispatch(&7);
    }

    #[test]
    fn dispatch_visits_top_down_until_first_mask() {
        let log = log();
        let mut stack = LayerStack::new();
        let a = Probe::new("a", false, &log);
        let b = Probe::new("b", true, &log);
        let c = Probe::new("c", false, &log);
        stack.push(a.clone()).unwrap();
        stack.push(b).unwrap();
        stack.push(c).unwrap();

        stack.dispatch(&1);
        // C on top, then B which masks; A is never invoked.
        assert_eq!(*log.borrow(), vec!["c", "b"]);
        assert_eq!(a.handled.get(), 0);
    }

    #[test]
    fn dispatch_reaches_bottom_when_nothing_masks() {
        let log = log();
        let mut stack = LayerStack::new();
        for name in ["a", "b", "c"] {
            stack.push(Probe::new(name, false, &log)).unwrap();
        }

        stack.dispatch(&1);
        assert_eq!(*log.borrow(), vec!["c", "b", "a"]);
    }

    #[test]
    fn dispatch_stops_at_bottom_even_when_bottom_masks() {
        let log = log();
        let mut stack = LayerStack::new();
        let a = Probe::new("a", true, &log);
        stack.push(a.clone()).unwrap();

        stack.dispatch(&1);
        stack.dispatch(&1);
        assert_eq!(a.handled.get(), 2);
    }

    #[test]
    fn masking_is_re_evaluated_per_dispatch() {
        let log = log();
        let mut stack = LayerStack::new();
        let below = Probe::new("below", false, &log);
        let top = Probe::new("top", true, &log);
        stack.push(below.clone()).unwrap();
        stack.push(top.clone()).unwrap();

        stack.dispatch(&1);
        assert_eq!(below.handled.get(), 0);

        // The top layer turns transparent; the next dispatch falls through.
        top.masks.set(false);
        stack.dispatch(&1);
        assert_eq!(below.handled.get(), 1);
    }

    #[test]
    fn same_layer_may_appear_twice() {
        let log = log();
        let mut stack = LayerStack::new();
        let a = Probe::new("a", false, &log);
        stack.push(a.clone()).unwrap();
        stack.push(a.clone()).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(a.pushes.get(), 2);

        stack.dispatch(&1);
        assert_eq!(a.handled.get(), 2);
    }

    #[test]
    fn layers_view_is_bottom_first() {
        let log = log();
        let mut stack = LayerStack::new();
        stack.push(Probe::new("bottom", false, &log)).unwrap();
        stack.push(Probe::new("top", false, &log)).unwrap();

        let names: Vec<String> = stack.layers().iter().map(|l| l.name().into()).collect();
        assert_eq!(names, vec!["bottom", "top"]);
    }
}
