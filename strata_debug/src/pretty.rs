// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::trace::{
    LookupFailedEvent, PopEvent, PopRefusedEvent, PushEvent, PushRefusedEvent, TraceSink,
};

use crate::kind_label;

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layer_pushed(&mut self, e: &PushEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[push] {} {:?} depth={}",
            kind_label(e.kind),
            e.name,
            e.depth,
        );
    }

    fn on_layer_popped(&mut self, e: &PopEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[pop] {} {:?} depth={}",
            kind_label(e.kind),
            e.name,
            e.depth,
        );
    }

    fn on_push_refused(&mut self, e: &PushRefusedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[push:refused] {} {:?} stack at capacity",
            kind_label(e.kind),
            e.name,
        );
    }

    fn on_pop_refused(&mut self, e: &PopRefusedEvent) {
        let _ = writeln!(
            self.writer,
            "[pop:refused] {} stack is empty",
            kind_label(e.kind),
        );
    }

    fn on_lookup_failed(&mut self, e: &LookupFailedEvent<'_>) {
        let reason = if e.duplicate {
            "found more than once"
        } else {
            "not found"
        };
        let _ = writeln!(
            self.writer,
            "[lookup:failed] {} {:?} {reason}",
            kind_label(e.kind),
            e.name,
        );
    }
}

#[cfg(test)]
mod tests {
    use strata_core::layer::LayerKinds;

    use super::*;

    fn lines_for(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> Vec<String> {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.writer)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn push_and_pop_lines() {
        let lines = lines_for(|sink| {
            sink.on_layer_pushed(&PushEvent {
                kind: LayerKinds::DRAW,
                name: "hud",
                depth: 2,
            });
            sink.on_layer_popped(&PopEvent {
                kind: LayerKinds::DRAW,
                name: "hud",
                depth: 1,
            });
        });
        assert_eq!(
            lines,
            ["[push] draw \"hud\" depth=2", "[pop] draw \"hud\" depth=1"]
        );
    }

    #[test]
    fn refusal_and_lookup_lines() {
        let lines = lines_for(|sink| {
            sink.on_push_refused(&PushRefusedEvent {
                kind: LayerKinds::INPUT,
                name: "menu",
            });
            sink.on_pop_refused(&PopRefusedEvent {
                kind: LayerKinds::UPDATE,
            });
            sink.on_lookup_failed(&LookupFailedEvent {
                kind: LayerKinds::DRAW,
                name: "twin",
                duplicate: true,
            });
        });
        assert_eq!(
            lines,
            [
                "[push:refused] input \"menu\" stack at capacity",
                "[pop:refused] update stack is empty",
                "[lookup:failed] draw \"twin\" found more than once",
            ]
        );
    }
}
