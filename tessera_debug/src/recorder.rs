// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event in arrival
//! order as a [`RecordedEvent`], for assertions in integration tests and for
//! [`export`](crate::json::export).

use tessera_core::trace::{
    DetachedEvent, FallbackEvent, IgnoredCompletionEvent, SupersededEvent, TraceSink,
    TransitionEndEvent, TransitionStartEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_transition_start`].
    TransitionStart(TransitionStartEvent),
    /// See [`TraceSink::on_transition_end`].
    TransitionEnd(TransitionEndEvent),
    /// See [`TraceSink::on_superseded`].
    Superseded(SupersededEvent),
    /// See [`TraceSink::on_ignored_completion`].
    IgnoredCompletion(IgnoredCompletionEvent),
    /// See [`TraceSink::on_fallback`].
    Fallback(FallbackEvent),
    /// See [`TraceSink::on_detached`].
    Detached(DetachedEvent),
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        self.events.push(RecordedEvent::TransitionStart(*e));
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        self.events.push(RecordedEvent::TransitionEnd(*e));
    }

    fn on_superseded(&mut self, e: &SupersededEvent) {
        self.events.push(RecordedEvent::Superseded(*e));
    }

    fn on_ignored_completion(&mut self, e: &IgnoredCompletionEvent) {
        self.events.push(RecordedEvent::IgnoredCompletion(*e));
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        self.events.push(RecordedEvent::Fallback(*e));
    }

    fn on_detached(&mut self, e: &DetachedEvent) {
        self.events.push(RecordedEvent::Detached(*e));
    }
}
