// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned items and their transition state machine.
//!
//! A [`PositionedItem`] wraps one element managed by the layout engine. It
//! keeps two kinds of state apart:
//!
//! - **Logical state** — the settled [`position`](PositionedItem::position)
//!   and bounding [`rect`](PositionedItem::rect). The position is committed
//!   the moment a move is requested, so callers always read the destination.
//! - **Visual state** — the transient styles of an animated change. An
//!   animated move is a translation relative to the element's current literal
//!   offset; once the runtime reports completion the translation is discarded
//!   and the literal `left`/`top` offsets are written, so the next move
//!   computes its delta from a stable baseline.
//!
//! # Transition lifecycle
//!
//! ```text
//!            begin_transition()                handle_event() (own element)
//!   Idle ───────────────────────► Transitioning ───────────────────────► Idle
//!                                   │      ▲
//!                                   └──────┘
//!                          begin_transition() again:
//!                          previous callback dropped,
//!                          listener registration reused
//! ```
//!
//! Without animated transitions (see
//! [`Capabilities::is_supported`](crate::capability::Capabilities::is_supported))
//! every change is applied, cleaned up and finalized synchronously and the
//! item never leaves `Idle`.
//!
//! An item whose runtime never reports completion (for example because the
//! element was taken out of the tree mid-animation) stays `Transitioning`
//! until another transition replaces it.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Vec2};

use crate::capability::{Capabilities, CompletionEvent};
use crate::config::TransitionConfig;
use crate::element::Element;
use crate::layout::LayoutContext;
use crate::style::{StyleChanges, StyleKey, parse_px};
use crate::trace::{
    DetachedEvent, FallbackEvent, IgnoreReason, IgnoredCompletionEvent, SharedSink,
    SupersededEvent, TransitionEndEvent, TransitionStartEvent, Tracer,
};

/// What started a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// [`PositionedItem::move_to`].
    Move,
    /// [`PositionedItem::reveal`].
    Reveal,
    /// [`PositionedItem::remove`].
    Remove,
    /// [`PositionedItem::transition`] with caller-supplied styles.
    Custom,
}

/// Work to run once the current transition completes.
pub enum OnComplete {
    /// Only the standard cleanup.
    Nothing,
    /// Write the literal offsets for the settled position.
    ApplyLayoutPosition,
    /// Detach the element from its parent.
    Detach,
    /// Run a caller-supplied callback.
    ///
    /// The callback is handed back through [`Completion`] rather than being
    /// invoked while the item is borrowed.
    Call(Box<dyn FnOnce()>),
}

impl OnComplete {
    /// Wraps a closure as [`OnComplete::Call`].
    #[must_use]
    pub fn call(f: impl FnOnce() + 'static) -> Self {
        Self::Call(Box::new(f))
    }
}

impl core::fmt::Debug for OnComplete {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Nothing => f.write_str("Nothing"),
            Self::ApplyLayoutPosition => f.write_str("ApplyLayoutPosition"),
            Self::Detach => f.write_str("Detach"),
            Self::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// Whether an item has an animated change in flight.
#[derive(Debug)]
enum TransitionState {
    Idle,
    Transitioning {
        kind: TransitionKind,
        /// Style keys to reset once the transition finishes.
        pending_keys: Vec<StyleKey>,
        on_complete: OnComplete,
    },
}

/// The outcome of finishing (or not finishing) a transition.
///
/// Built-in finalizers have already run by the time a `Completion` is
/// returned. A caller-supplied [`OnComplete::Call`] callback is carried here
/// so the event loop can release its borrow of the item before calling
/// [`run`](Self::run).
#[must_use = "a completion may carry a caller callback; call `run`"]
pub struct Completion {
    finished: Option<TransitionKind>,
    callback: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    const fn none() -> Self {
        Self {
            finished: None,
            callback: None,
        }
    }

    /// Returns `true` if this call finished a transition.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Returns which transition finished, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<TransitionKind> {
        self.finished
    }

    /// Runs the caller-supplied callback, if there is one.
    pub fn run(self) {
        if let Some(callback) = self.callback {
            callback();
        }
    }
}

impl core::fmt::Debug for Completion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Completion")
            .field("finished", &self.finished)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// One element managed by the layout engine.
///
/// `E` is the backend's element handle, `L` the layout engine's view of the
/// container metrics.
pub struct PositionedItem<E: Element, L: LayoutContext> {
    element: E,
    layout: L,
    capabilities: Capabilities,
    config: TransitionConfig,
    position: Point,
    rect: Rect,
    state: TransitionState,
    tracer: Tracer,
}

impl<E: Element, L: LayoutContext> core::fmt::Debug for PositionedItem<E, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionedItem")
            .field("capabilities", &self.capabilities)
            .field("config", &self.config)
            .field("position", &self.position)
            .field("rect", &self.rect)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E: Element, L: LayoutContext> PositionedItem<E, L> {
    /// Takes `element` under layout control.
    ///
    /// The element is switched to absolute positioning so the layout engine's
    /// coordinates apply. The item starts idle at `(0, 0)`.
    pub fn new(mut element: E, layout: L, capabilities: Capabilities) -> Self {
        element.set_style("position", "absolute");
        Self {
            element,
            layout,
            capabilities,
            config: TransitionConfig::default(),
            position: Point::ZERO,
            rect: Rect::ZERO,
            state: TransitionState::Idle,
            tracer: Tracer::none(),
        }
    }

    /// Replaces the transition settings.
    #[must_use]
    pub fn with_config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    /// Reports transitions to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Reports transitions to `sink`.
    #[must_use]
    pub fn with_trace_sink(self, sink: SharedSink) -> Self {
        self.with_tracer(Tracer::new(sink))
    }

    /// The settled logical position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The bounding box maintained by the layout engine.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Stores the bounding box computed by the layout engine.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// The managed element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The managed element, mutably.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// The layout context this item reads metrics from.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The capabilities this item was created with.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The transition settings.
    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Returns `true` while an animated change is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// What started the in-flight transition, if any.
    #[must_use]
    pub fn transition_kind(&self) -> Option<TransitionKind> {
        match &self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { kind, .. } => Some(*kind),
        }
    }

    /// Style keys that will be reset when the in-flight transition finishes.
    #[must_use]
    pub fn pending_style_keys(&self) -> Option<&[StyleKey]> {
        match &self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { pending_keys, .. } => Some(pending_keys),
        }
    }

    /// The completion event a listener must be registered for, if a
    /// transition is in flight.
    #[must_use]
    pub fn awaited_event(&self) -> Option<CompletionEvent> {
        match self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { .. } => self.capabilities.completion_event(),
        }
    }

    /// Applies `style` to the element without animation.
    pub fn apply_style(&mut self, style: &StyleChanges) {
        for (key, value) in style.iter() {
            self.element.set_style(key, value);
        }
    }

    /// Animates the element to `(x, y)`.
    ///
    /// The logical position is committed before anything visual happens.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);

        let current = Point::new(
            parse_px(self.element.style("left").as_deref()),
            parse_px(self.element.style("top").as_deref()),
        );
        let size = self.layout.element_size();
        let delta = self.position - current + Vec2::new(size.padding_left, size.padding_top);

        let style = StyleChanges::new().with(
            self.capabilities.transform_key(),
            format!("translate({}px, {}px)", delta.x, delta.y),
        );
        self.start_transition(TransitionKind::Move, style, OnComplete::ApplyLayoutPosition)
            .run();
    }

    /// Writes the literal offsets for the settled position, without animation.
    pub fn apply_layout_position(&mut self) {
        let size = self.layout.element_size();
        let left = format!("{}px", self.position.x + size.padding_left);
        let top = format!("{}px", self.position.y + size.padding_top);
        self.element.set_style("left", &left);
        self.element.set_style("top", &top);
    }

    /// Animates the element from the hidden pose to fully shown.
    pub fn reveal(&mut self) {
        let hidden = self.hidden_pose();
        self.apply_style(&hidden);
        // The hidden pose must be rendered before the shown pose is queued,
        // otherwise the runtime coalesces both and nothing animates.
        let _ = self.element.force_layout();

        let shown = StyleChanges::new()
            .with(self.capabilities.transform_key(), "scale(1)")
            .with("opacity", "1");
        self.start_transition(TransitionKind::Reveal, shown, OnComplete::Nothing)
            .run();
    }

    /// Animates the element to the hidden pose, then detaches it.
    ///
    /// The item should not be reused afterwards.
    pub fn remove(&mut self) {
        let hidden = self.hidden_pose();
        self.start_transition(TransitionKind::Remove, hidden, OnComplete::Detach)
            .run();
    }

    /// Clears the positioning styles, releasing the element from layout
    /// control without removing it.
    pub fn destroy(&mut self) {
        self.element.remove_style("position");
        self.element.remove_style("left");
        self.element.remove_style("top");
    }

    /// Animates `changes`, then runs `on_complete` and resets them.
    ///
    /// Without animated transitions the whole sequence happens before this
    /// returns, including `on_complete`.
    pub fn transition(&mut self, changes: StyleChanges, on_complete: OnComplete) {
        self.begin_transition(changes, on_complete).run();
    }

    /// Like [`transition`](Self::transition), but hands back the completion
    /// of an immediately applied change instead of running its callback.
    ///
    /// Event loops that hold the item behind a `RefCell` use this so the
    /// callback runs after the borrow is released.
    pub fn begin_transition(&mut self, changes: StyleChanges, on_complete: OnComplete) -> Completion {
        self.start_transition(TransitionKind::Custom, changes, on_complete)
    }

    /// Routes a runtime notification to the completion handler.
    ///
    /// `event_type` is the delivered event name; anything that is not a
    /// known completion event is ignored. `target` is the notification's
    /// origin; events bubbling up from descendants are ignored.
    pub fn handle_event(&mut self, event_type: &str, target: &E::Target) -> Completion {
        let Some(event) = CompletionEvent::from_type(event_type) else {
            self.tracer.ignored_completion(&IgnoredCompletionEvent {
                reason: IgnoreReason::UnknownEvent,
                event: None,
            });
            return Completion::none();
        };
        self.on_transition_end(event, target)
    }

    /// Finishes the in-flight transition if `target` is this item's element.
    ///
    /// Duplicate and late notifications are no-ops.
    pub fn on_transition_end(&mut self, event: CompletionEvent, target: &E::Target) -> Completion {
        if !self.element.is_target(target) {
            self.tracer.ignored_completion(&IgnoredCompletionEvent {
                reason: IgnoreReason::ForeignTarget,
                event: Some(event),
            });
            return Completion::none();
        }

        let TransitionState::Transitioning {
            kind,
            pending_keys,
            on_complete,
        } = mem::replace(&mut self.state, TransitionState::Idle)
        else {
            self.tracer.ignored_completion(&IgnoredCompletionEvent {
                reason: IgnoreReason::NotTransitioning,
                event: Some(event),
            });
            return Completion::none();
        };

        self.reset_transition_styles(&pending_keys);
        if let Some(listened) = self.capabilities.completion_event() {
            self.element.unlisten(listened);
        }
        self.tracer.transition_end(&TransitionEndEvent {
            kind,
            position: self.position,
            event,
        });
        self.finalize(kind, on_complete)
    }

    fn start_transition(
        &mut self,
        kind: TransitionKind,
        changes: StyleChanges,
        on_complete: OnComplete,
    ) -> Completion {
        let caps = self.capabilities;
        let (Some(event), Some(property_key), Some(duration_key)) = (
            caps.completion_event(),
            caps.transition_property_key(),
            caps.transition_duration_key(),
        ) else {
            return self.apply_immediately(kind, &changes, on_complete);
        };

        // Nothing animates, so the runtime would never report completion.
        if changes.is_empty() {
            if let TransitionState::Transitioning {
                kind: previous,
                pending_keys: previous_keys,
                on_complete: superseded,
            } = mem::replace(&mut self.state, TransitionState::Idle)
            {
                drop(superseded);
                self.tracer.superseded(&SupersededEvent {
                    previous,
                    next: kind,
                });
                self.reset_transition_styles(&previous_keys);
                self.element.unlisten(event);
            }
            return self.apply_immediately(kind, &changes, on_complete);
        }

        let mut pending_keys = changes.keys();
        match mem::replace(&mut self.state, TransitionState::Idle) {
            TransitionState::Transitioning {
                kind: previous,
                pending_keys: previous_keys,
                on_complete: superseded,
            } => {
                // The superseded callback is dropped here, before any new
                // style can produce a notification. The listener stays.
                drop(superseded);
                self.tracer.superseded(&SupersededEvent {
                    previous,
                    next: kind,
                });
                for key in previous_keys {
                    if !pending_keys.contains(&key) {
                        pending_keys.push(key);
                    }
                }
            }
            TransitionState::Idle => self.element.listen(event),
        }

        self.element.set_style(property_key, &changes.joined_keys());
        self.element
            .set_style(duration_key, &self.config.duration.to_css());
        self.apply_style(&changes);

        self.tracer.transition_start(&TransitionStartEvent {
            kind,
            position: self.position,
            animated_keys: changes.len(),
            duration: self.config.duration,
        });
        self.state = TransitionState::Transitioning {
            kind,
            pending_keys,
            on_complete,
        };
        Completion::none()
    }

    /// Applies, resets and finalizes `changes` in one step, ending in the
    /// same styles an animated transition would leave behind.
    fn apply_immediately(
        &mut self,
        kind: TransitionKind,
        changes: &StyleChanges,
        on_complete: OnComplete,
    ) -> Completion {
        self.tracer.fallback(&FallbackEvent {
            kind,
            position: self.position,
        });
        self.apply_style(changes);
        self.reset_transition_styles(&changes.keys());
        self.finalize(kind, on_complete)
    }

    fn reset_transition_styles(&mut self, keys: &[StyleKey]) {
        for key in keys {
            self.element.remove_style(key);
        }
        if let Some(key) = self.capabilities.transition_property_key() {
            self.element.remove_style(key);
        }
        if let Some(key) = self.capabilities.transition_duration_key() {
            self.element.remove_style(key);
        }
    }

    fn finalize(&mut self, kind: TransitionKind, on_complete: OnComplete) -> Completion {
        let callback = match on_complete {
            OnComplete::Nothing => None,
            OnComplete::ApplyLayoutPosition => {
                self.apply_layout_position();
                None
            }
            OnComplete::Detach => {
                let detached = self.element.detach();
                self.tracer.detached(&DetachedEvent {
                    detached,
                    position: self.position,
                });
                None
            }
            OnComplete::Call(callback) => Some(callback),
        };
        Completion {
            finished: Some(kind),
            callback,
        }
    }

    fn hidden_pose(&self) -> StyleChanges {
        StyleChanges::new()
            .with(
                self.capabilities.transform_key(),
                format!("scale({})", self.config.hidden_scale),
            )
            .with("opacity", "0")
    }
}
