// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use tessera_core::item::TransitionKind;
use tessera_core::trace::{
    DetachedEvent, FallbackEvent, IgnoreReason, IgnoredCompletionEvent, SupersededEvent,
    TraceSink, TransitionEndEvent, TransitionStartEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
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

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn kind_name(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::Move => "move",
        TransitionKind::Reveal => "reveal",
        TransitionKind::Remove => "remove",
        TransitionKind::Custom => "custom",
    }
}

pub(crate) fn reason_name(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::UnknownEvent => "unknown-event",
        IgnoreReason::ForeignTarget => "foreign-target",
        IgnoreReason::NotTransitioning => "not-transitioning",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        let _ = writeln!(
            self.writer,
            "[start] {} at=({}, {}) keys={} duration={}ms",
            kind_name(e.kind),
            e.position.x,
            e.position.y,
            e.animated_keys,
            e.duration.as_millis(),
        );
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        let _ = writeln!(
            self.writer,
            "[end] {} at=({}, {}) event={}",
            kind_name(e.kind),
            e.position.x,
            e.position.y,
            e.event.name(),
        );
    }

    fn on_superseded(&mut self, e: &SupersededEvent) {
        let _ = writeln!(
            self.writer,
            "[superseded] {} -> {}",
            kind_name(e.previous),
            kind_name(e.next),
        );
    }

    fn on_ignored_completion(&mut self, e: &IgnoredCompletionEvent) {
        let event = e.event.map_or("?", |ev| ev.name());
        let _ = writeln!(
            self.writer,
            "[ignored] reason={} event={event}",
            reason_name(e.reason),
        );
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        let _ = writeln!(
            self.writer,
            "[immediate] {} at=({}, {})",
            kind_name(e.kind),
            e.position.x,
            e.position.y,
        );
    }

    fn on_detached(&mut self, e: &DetachedEvent) {
        let outcome = if e.detached { "ok" } else { "no-parent" };
        let _ = writeln!(
            self.writer,
            "[detached] at=({}, {}) {outcome}",
            e.position.x, e.position.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use tessera_core::capability::CompletionEvent;
    use tessera_core::config::TransitionDuration;

    #[test]
    fn pretty_print_start() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_transition_start(&TransitionStartEvent {
            kind: TransitionKind::Move,
            position: Point::new(100.0, 0.0),
            animated_keys: 1,
            duration: TransitionDuration::ONE_SECOND,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[start] move"), "got: {output}");
        assert!(output.contains("at=(100, 0)"), "got: {output}");
        assert!(output.contains("duration=1000ms"), "got: {output}");
    }

    #[test]
    fn pretty_print_ignored() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_ignored_completion(&IgnoredCompletionEvent {
            reason: IgnoreReason::ForeignTarget,
            event: Some(CompletionEvent::Webkit),
        });
        sink.on_ignored_completion(&IgnoredCompletionEvent {
            reason: IgnoreReason::UnknownEvent,
            event: None,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "[ignored] reason=foreign-target event=webkitTransitionEnd",
                "[ignored] reason=unknown-event event=?",
            ]
        );
    }

    #[test]
    fn pretty_print_detached() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_detached(&DetachedEvent {
            detached: false,
            position: Point::new(1.5, 2.0),
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(output, "[detached] at=(1.5, 2) no-parent\n");
    }
}
