// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for item transitions.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`PositionedItem`](crate::item::PositionedItem) calls as transitions start,
//! finish, get superseded or fall back to immediate application. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional shared sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;

use crate::capability::CompletionEvent;
use crate::config::TransitionDuration;
use crate::item::TransitionKind;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a completion notification did not finish a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The event type is not a known completion event.
    UnknownEvent,
    /// The event bubbled up from a descendant element.
    ForeignTarget,
    /// No transition is in flight (duplicate or late notification).
    NotTransitioning,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an animated transition starts.
#[derive(Clone, Copy, Debug)]
pub struct TransitionStartEvent {
    /// What started the transition.
    pub kind: TransitionKind,
    /// Settled position of the item at start.
    pub position: Point,
    /// Number of style properties under animation.
    pub animated_keys: usize,
    /// Configured duration.
    pub duration: TransitionDuration,
}

/// Emitted when a transition finishes and its cleanup has run.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEndEvent {
    /// What started the transition.
    pub kind: TransitionKind,
    /// Settled position of the item at completion.
    pub position: Point,
    /// Which completion event finished it.
    pub event: CompletionEvent,
}

/// Emitted when a new transition replaces one still in flight.
#[derive(Clone, Copy, Debug)]
pub struct SupersededEvent {
    /// The transition whose callback will never run.
    pub previous: TransitionKind,
    /// The transition replacing it.
    pub next: TransitionKind,
}

/// Emitted when a completion notification is dropped.
#[derive(Clone, Copy, Debug)]
pub struct IgnoredCompletionEvent {
    /// Why it was dropped.
    pub reason: IgnoreReason,
    /// The recognized completion event, if the type was known.
    pub event: Option<CompletionEvent>,
}

/// Emitted when a change is applied immediately because the runtime has no
/// animated transitions.
#[derive(Clone, Copy, Debug)]
pub struct FallbackEvent {
    /// What requested the change.
    pub kind: TransitionKind,
    /// Settled position of the item.
    pub position: Point,
}

/// Emitted after a removal finished and the element was detached.
#[derive(Clone, Copy, Debug)]
pub struct DetachedEvent {
    /// `false` if the element already had no parent.
    pub detached: bool,
    /// Last settled position of the item.
    pub position: Point,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from positioned items.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an animated transition starts.
    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        _ = e;
    }

    /// Called when a transition finishes.
    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        _ = e;
    }

    /// Called when an in-flight transition is replaced.
    fn on_superseded(&mut self, e: &SupersededEvent) {
        _ = e;
    }

    /// Called when a completion notification is ignored.
    fn on_ignored_completion(&mut self, e: &IgnoredCompletionEvent) {
        _ = e;
    }

    /// Called when a change is applied without animation.
    fn on_fallback(&mut self, e: &FallbackEvent) {
        _ = e;
    }

    /// Called after a removed element is detached.
    fn on_detached(&mut self, e: &DetachedEvent) {
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

/// A sink shared between the items that report to it.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Thin wrapper around an optional shared [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// the sink passed to [`Tracer::new`] is dropped. When **on**, each method
/// checks the inner `Option` (one branch) before dispatching to the sink.
#[derive(Clone, Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<SharedSink>,
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
    pub fn new(sink: SharedSink) -> Self {
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

    /// Emits a [`TransitionStartEvent`].
    #[inline]
    pub fn transition_start(&self, e: &TransitionStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_transition_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEndEvent`].
    #[inline]
    pub fn transition_end(&self, e: &TransitionEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_transition_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SupersededEvent`].
    #[inline]
    pub fn superseded(&self, e: &SupersededEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_superseded(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredCompletionEvent`].
    #[inline]
    pub fn ignored_completion(&self, e: &IgnoredCompletionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_ignored_completion(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FallbackEvent`].
    #[inline]
    pub fn fallback(&self, e: &FallbackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_fallback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DetachedEvent`].
    #[inline]
    pub fn detached(&self, e: &DetachedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.borrow_mut().on_detached(e);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_start() -> TransitionStartEvent {
        TransitionStartEvent {
            kind: TransitionKind::Move,
            position: Point::new(10.0, 20.0),
            animated_keys: 1,
            duration: TransitionDuration::ONE_SECOND,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_transition_start(&sample_start());
        sink.on_detached(&DetachedEvent {
            detached: true,
            position: Point::ZERO,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let tracer = Tracer::none();
        tracer.transition_start(&sample_start());
        tracer.ignored_completion(&IgnoredCompletionEvent {
            reason: IgnoreReason::ForeignTarget,
            event: Some(CompletionEvent::Standard),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            kinds: Vec<TransitionKind>,
        }
        impl TraceSink for RecordingSink {
            fn on_transition_start(&mut self, e: &TransitionStartEvent) {
                self.kinds.push(e.kind);
            }
        }

        let sink = Rc::new(RefCell::new(RecordingSink { kinds: Vec::new() }));
        let tracer = Tracer::new(sink.clone());
        tracer.transition_start(&sample_start());
        assert_eq!(sink.borrow().kinds, [TransitionKind::Move]);
    }
}
