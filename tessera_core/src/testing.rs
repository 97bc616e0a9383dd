// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element double for unit tests.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::capability::CompletionEvent;
use crate::element::Element;

#[derive(Debug, Default)]
struct FakeState {
    styles: BTreeMap<String, String>,
    listeners: Vec<CompletionEvent>,
    listen_calls: usize,
    flushed: Vec<BTreeMap<String, String>>,
    attached: bool,
}

/// A cloneable handle to a fake element. Clones share state, so a test can
/// keep one handle while the item owns another.
#[derive(Clone, Debug)]
pub(crate) struct FakeElement {
    id: u32,
    state: Rc<RefCell<FakeState>>,
}

impl FakeElement {
    /// A fake element with a parent.
    pub(crate) fn attached(id: u32) -> Self {
        Self {
            id,
            state: Rc::new(RefCell::new(FakeState {
                attached: true,
                ..FakeState::default()
            })),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn style_value(&self, key: &str) -> Option<String> {
        self.state.borrow().styles.get(key).cloned()
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub(crate) fn listened(&self) -> Vec<CompletionEvent> {
        self.state.borrow().listeners.clone()
    }

    pub(crate) fn listen_calls(&self) -> usize {
        self.state.borrow().listen_calls
    }

    /// Style snapshots taken at every forced layout.
    pub(crate) fn flushed_styles(&self) -> Vec<BTreeMap<String, String>> {
        self.state.borrow().flushed.clone()
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
}

impl Element for FakeElement {
    type Target = u32;

    fn set_style(&mut self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(key.to_string(), value.to_string());
    }

    fn style(&self, key: &str) -> Option<String> {
        self.style_value(key)
    }

    fn remove_style(&mut self, key: &str) {
        self.state.borrow_mut().styles.remove(key);
    }

    fn force_layout(&mut self) -> f64 {
        let mut state = self.state.borrow_mut();
        let snapshot = state.styles.clone();
        state.flushed.push(snapshot);
        0.0
    }

    fn listen(&mut self, event: CompletionEvent) {
        let mut state = self.state.borrow_mut();
        state.listen_calls += 1;
        if !state.listeners.contains(&event) {
            state.listeners.push(event);
        }
    }

    fn unlisten(&mut self, event: CompletionEvent) {
        self.state.borrow_mut().listeners.retain(|e| *e != event);
    }

    fn detach(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        core::mem::replace(&mut state.attached, false)
    }

    fn is_target(&self, target: &u32) -> bool {
        *target == self.id
    }
}
