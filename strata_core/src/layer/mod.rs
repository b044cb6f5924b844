// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer capability model, bounded stacks, and registries.
//!
//! A *layer* is a unit implementing one or more of the three capabilities —
//! input handling, drawing, per-frame update. Each capability a concrete type
//! supports is expressed as one [`Layer<A>`] implementation, where `A` is the
//! per-dispatch action payload for that capability:
//!
//! - input handling: `A` is the game's input-event type;
//! - drawing: `A` is the render context (camera/view state);
//! - update: `A` is `f64` delta seconds.
//!
//! Layers are shared as `Rc<dyn Layer<A>>`. The same handle may sit in a
//! [`LayerRegistry`] (for name-based activation) and on a [`LayerStack`]
//! (live push order) simultaneously; the stacks and registries never own a
//! layer exclusively. Implementations that mutate per-frame state inside
//! [`handle`](Layer::handle) use interior mutability.
//!
//! [`LayerKinds`] selects capabilities in composite operations, combinable
//! with `|`.

mod capability;
mod kinds;
mod registry;
mod stack;

pub use capability::Layer;
pub use kinds::LayerKinds;
pub use registry::{LayerRegistry, LookupError};
pub use stack::{LayerStack, STACK_CAPACITY, StackError};
