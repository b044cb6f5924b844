// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded layer stacks with masked top-down dispatch for game frameworks.
//!
//! `strata_core` provides the layer-composition layer of a small game
//! framework: three independent, fixed-capacity stacks of capability-typed
//! layers (input-receiving, drawable, updateable) with per-frame dispatch and
//! name-based activation. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! A frame loop drives the [`Framework`](framework::Framework) once per frame;
//! composition changes flow through symbolic names and registries:
//!
//! ```text
//!   Game loop (per frame)
//!       │ update / draw / receive_input
//!       ▼
//!   Framework ──► LayerStack::dispatch() ──► Layer::handle()
//!       │                                         │
//!       │ push_layers("name", kinds)              ▼
//!       ├──► LayerRegistry::find_by_name()   masks_below()? ──► stop / continue
//!       │            │
//!       └── ChangeFlag (polled by an observer thread)
//! ```
//!
//! **[`layer`]** — The [`Layer`](layer::Layer) capability trait, the
//! [`LayerKinds`](layer::LayerKinds) bit flags, the bounded
//! [`LayerStack`](layer::LayerStack), and the per-capability
//! [`LayerRegistry`](layer::LayerRegistry).
//!
//! **[`framework`]** — The [`Framework`](framework::Framework) coordinator:
//! owns the three stacks and registries, forwards per-frame calls, and
//! resolves composite push/pop requests by name.
//!
//! **[`dirty`]** — [`ChangeFlag`](dirty::ChangeFlag), the atomic
//! composition-changed flag an external observer may poll from another
//! thread.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! composition diagnostics, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Masking
//!
//! Dispatch walks a stack from the most recently pushed layer downward. After
//! each layer handles the action, its masking predicate decides whether
//! anything beneath it is reached: an opaque layer (a full-screen pause menu)
//! consumes the action and shields everything below; a transparent layer (a
//! HUD overlay) lets it fall through.
//!
//! # Threading
//!
//! A single logical owner performs all dispatch and composition changes.
//! Nothing here locks; the one cross-thread-safe piece of state is the
//! [`ChangeFlag`](dirty::ChangeFlag) handle.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables the `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod dirty;
pub mod framework;
pub mod layer;
pub mod trace;
