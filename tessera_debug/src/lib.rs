// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for tessera diagnostics.
//!
//! This crate provides [`TraceSink`](tessera_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory recording of every event.
//! - [`json::export`] — writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use tessera_core::capability::{Capabilities, CompletionEvent};
    use tessera_core::element::Element;
    use tessera_core::item::{PositionedItem, TransitionKind};
    use tessera_core::layout::ElementSize;
    use tessera_core::trace::IgnoreReason;

    use crate::recorder::{RecordedEvent, RecorderSink};

    #[derive(Default)]
    struct MapElement {
        styles: BTreeMap<String, String>,
        attached: bool,
    }

    impl Element for MapElement {
        type Target = ();

        fn set_style(&mut self, key: &str, value: &str) {
            self.styles.insert(key.to_owned(), value.to_owned());
        }

        fn style(&self, key: &str) -> Option<String> {
            self.styles.get(key).cloned()
        }

        fn remove_style(&mut self, key: &str) {
            self.styles.remove(key);
        }

        fn force_layout(&mut self) -> f64 {
            0.0
        }

        fn listen(&mut self, _: CompletionEvent) {}

        fn unlisten(&mut self, _: CompletionEvent) {}

        fn detach(&mut self) -> bool {
            std::mem::replace(&mut self.attached, false)
        }

        fn is_target(&self, _: &()) -> bool {
            true
        }
    }

    fn recorded_item(
        caps: Capabilities,
    ) -> (
        Rc<RefCell<RecorderSink>>,
        PositionedItem<MapElement, ElementSize>,
    ) {
        let sink = Rc::new(RefCell::new(RecorderSink::new()));
        let element = MapElement {
            attached: true,
            ..MapElement::default()
        };
        let item = PositionedItem::new(element, ElementSize::with_padding(5.0, 5.0), caps)
            .with_trace_sink(sink.clone());
        (sink, item)
    }

    #[test]
    fn remove_is_traced_end_to_end() {
        let (sink, mut item) = recorded_item(Capabilities::standard());
        item.move_to(10.0, 0.0);
        item.remove();
        item.handle_event("transitionend", &()).run();
        item.handle_event("transitionend", &()).run();

        let sink = sink.borrow();
        let events = sink.events();
        assert_eq!(events.len(), 6, "got: {events:?}");
        assert!(matches!(
            events[0],
            RecordedEvent::TransitionStart(e) if e.kind == TransitionKind::Move
        ));
        assert!(matches!(
            events[1],
            RecordedEvent::Superseded(e)
                if e.previous == TransitionKind::Move && e.next == TransitionKind::Remove
        ));
        assert!(matches!(
            events[2],
            RecordedEvent::TransitionStart(e) if e.kind == TransitionKind::Remove
        ));
        assert!(matches!(
            events[3],
            RecordedEvent::TransitionEnd(e) if e.kind == TransitionKind::Remove
        ));
        assert!(matches!(events[4], RecordedEvent::Detached(e) if e.detached));
        assert!(matches!(
            events[5],
            RecordedEvent::IgnoredCompletion(e) if e.reason == IgnoreReason::NotTransitioning
        ));
    }

    #[test]
    fn fallback_is_traced() {
        let (sink, mut item) = recorded_item(Capabilities::unsupported());
        item.reveal();
        assert!(!item.is_transitioning());
        assert_eq!(item.element().style("opacity"), None);

        let sink = sink.borrow();
        assert!(matches!(
            sink.events(),
            [RecordedEvent::Fallback(e)] if e.kind == TransitionKind::Reveal
        ));
    }
}
