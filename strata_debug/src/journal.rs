// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event journaling and JSON export.
//!
//! [`JournalSink`] implements [`TraceSink`] and stores owned copies of every
//! composition event, in order. [`export_json`] serializes a journal as a
//! JSON array for tooling consumption.

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::layer::LayerKinds;
use strata_core::trace::{
    LookupFailedEvent, PopEvent, PopRefusedEvent, PushEvent, PushRefusedEvent, TraceSink,
};

use crate::kind_label;

/// An owned copy of one composition event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A layer was pushed.
    Pushed {
        /// Which capability's stack was pushed.
        kind: LayerKinds,
        /// The pushed layer's name.
        name: String,
        /// Stack size after the push.
        depth: usize,
    },
    /// A layer was popped.
    Popped {
        /// Which capability's stack was popped.
        kind: LayerKinds,
        /// The popped layer's name.
        name: String,
        /// Stack size after the pop.
        depth: usize,
    },
    /// A push was refused at capacity.
    PushRefused {
        /// Which capability's stack refused.
        kind: LayerKinds,
        /// The name of the layer that was not pushed.
        name: String,
    },
    /// A pop was refused on an empty stack.
    PopRefused {
        /// Which capability's stack refused.
        kind: LayerKinds,
    },
    /// A registry lookup failed.
    LookupFailed {
        /// Which capability's registry was consulted.
        kind: LayerKinds,
        /// The name that failed to resolve.
        name: String,
        /// `true` for an ambiguous name.
        duplicate: bool,
    },
}

/// A [`TraceSink`] that records owned events in memory.
#[derive(Clone, Debug, Default)]
pub struct JournalSink {
    events: Vec<RecordedEvent>,
}

impl JournalSink {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the journal and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for JournalSink {
    fn on_layer_pushed(&mut self, e: &PushEvent<'_>) {
        self.events.push(RecordedEvent::Pushed {
            kind: e.kind,
            name: e.name.to_owned(),
            depth: e.depth,
        });
    }

    fn on_layer_popped(&mut self, e: &PopEvent<'_>) {
        self.events.push(RecordedEvent::Popped {
            kind: e.kind,
            name: e.name.to_owned(),
            depth: e.depth,
        });
    }

    fn on_push_refused(&mut self, e: &PushRefusedEvent<'_>) {
        self.events.push(RecordedEvent::PushRefused {
            kind: e.kind,
            name: e.name.to_owned(),
        });
    }

    fn on_pop_refused(&mut self, e: &PopRefusedEvent) {
        self.events.push(RecordedEvent::PopRefused { kind: e.kind });
    }

    fn on_lookup_failed(&mut self, e: &LookupFailedEvent<'_>) {
        self.events.push(RecordedEvent::LookupFailed {
            kind: e.kind,
            name: e.name.to_owned(),
            duplicate: e.duplicate,
        });
    }
}

/// Exports recorded events as a JSON array, one object per event.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn export_json(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(event_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)
}

fn event_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Pushed { kind, name, depth } => json!({
            "event": "push",
            "kind": kind_label(*kind),
            "name": name,
            "depth": depth,
        }),
        RecordedEvent::Popped { kind, name, depth } => json!({
            "event": "pop",
            "kind": kind_label(*kind),
            "name": name,
            "depth": depth,
        }),
        RecordedEvent::PushRefused { kind, name } => json!({
            "event": "push_refused",
            "kind": kind_label(*kind),
            "name": name,
        }),
        RecordedEvent::PopRefused { kind } => json!({
            "event": "pop_refused",
            "kind": kind_label(*kind),
        }),
        RecordedEvent::LookupFailed {
            kind,
            name,
            duplicate,
        } => json!({
            "event": "lookup_failed",
            "kind": kind_label(*kind),
            "name": name,
            "duplicate": duplicate,
        }),
    }
}
