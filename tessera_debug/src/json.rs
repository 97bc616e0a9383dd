// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](crate::recorder::RecorderSink)
//! as a JSON array, one object per event, with a `seq` field giving the
//! arrival order.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{kind_name, reason_name};
use crate::recorder::RecordedEvent;

/// Converts recorded events into JSON values.
#[must_use]
pub fn to_values(events: &[RecordedEvent]) -> Vec<Value> {
    events
        .iter()
        .enumerate()
        .map(|(seq, recorded)| match recorded {
            RecordedEvent::TransitionStart(e) => json!({
                "seq": seq,
                "name": "TransitionStart",
                "kind": kind_name(e.kind),
                "x": e.position.x,
                "y": e.position.y,
                "animated_keys": e.animated_keys,
                "duration_ms": e.duration.as_millis(),
            }),
            RecordedEvent::TransitionEnd(e) => json!({
                "seq": seq,
                "name": "TransitionEnd",
                "kind": kind_name(e.kind),
                "x": e.position.x,
                "y": e.position.y,
                "event": e.event.name(),
            }),
            RecordedEvent::Superseded(e) => json!({
                "seq": seq,
                "name": "Superseded",
                "previous": kind_name(e.previous),
                "next": kind_name(e.next),
            }),
            RecordedEvent::IgnoredCompletion(e) => json!({
                "seq": seq,
                "name": "IgnoredCompletion",
                "reason": reason_name(e.reason),
                "event": e.event.map(|ev| ev.name()),
            }),
            RecordedEvent::Fallback(e) => json!({
                "seq": seq,
                "name": "Fallback",
                "kind": kind_name(e.kind),
                "x": e.position.x,
                "y": e.position.y,
            }),
            RecordedEvent::Detached(e) => json!({
                "seq": seq,
                "name": "Detached",
                "detached": e.detached,
                "x": e.position.x,
                "y": e.position.y,
            }),
        })
        .collect()
}

/// Writes recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let array = Value::Array(to_values(events));
    serde_json::to_writer_pretty(&mut *writer, &array)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use kurbo::Point;
    use tessera_core::capability::CompletionEvent;
    use tessera_core::item::TransitionKind;
    use tessera_core::trace::{
        IgnoreReason, IgnoredCompletionEvent, SupersededEvent, TraceSink, TransitionEndEvent,
    };

    #[test]
    fn export_produces_array_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_superseded(&SupersededEvent {
            previous: TransitionKind::Move,
            next: TransitionKind::Remove,
        });
        rec.on_transition_end(&TransitionEndEvent {
            kind: TransitionKind::Remove,
            position: Point::new(3.0, 4.0),
            event: CompletionEvent::Standard,
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["name"], "Superseded");
        assert_eq!(arr[0]["next"], "remove");
        assert_eq!(arr[1]["seq"], 1);
        assert_eq!(arr[1]["event"], "transitionend");
        assert_eq!(arr[1]["x"], 3.0);
    }

    #[test]
    fn unknown_event_exports_null() {
        let mut rec = RecorderSink::new();
        rec.on_ignored_completion(&IgnoredCompletionEvent {
            reason: IgnoreReason::UnknownEvent,
            event: None,
        });
        let values = to_values(rec.events());
        assert_eq!(values[0]["reason"], "unknown-event");
        assert!(values[0]["event"].is_null());
    }
}
