// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element host.
//!
//! [`DomElement`] implements [`Element`] over an `HTMLElement`'s inline
//! style. DOM calls that can throw are fire-and-forget: a failed style write
//! leaves the previous value in place, which is the same outcome the browser
//! produces for an invalid declaration.

use alloc::string::String;

use js_sys::Function;
use tessera_core::capability::CompletionEvent;
use tessera_core::element::Element;
use web_sys::{EventTarget, HtmlElement};

/// An `HTMLElement` driven by a positioned item.
pub struct DomElement {
    element: HtmlElement,
    listener: Option<Function>,
}

impl core::fmt::Debug for DomElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomElement")
            .field("element", &"HtmlElement")
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl DomElement {
    /// Wraps `element`. No listener is installed yet.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            listener: None,
        }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn html_element(&self) -> &HtmlElement {
        &self.element
    }

    /// Installs the JS function registered for completion events.
    pub(crate) fn set_listener(&mut self, listener: Function) {
        self.listener = Some(listener);
    }
}

impl Element for DomElement {
    type Target = EventTarget;

    fn set_style(&mut self, key: &str, value: &str) {
        let _ = self.element.style().set_property(key, value);
    }

    fn style(&self, key: &str) -> Option<String> {
        non_empty(self.element.style().get_property_value(key).ok()?)
    }

    fn remove_style(&mut self, key: &str) {
        let _ = self.element.style().remove_property(key);
    }

    fn force_layout(&mut self) -> f64 {
        f64::from(self.element.offset_height())
    }

    fn listen(&mut self, event: CompletionEvent) {
        if let Some(listener) = &self.listener {
            let _ = self
                .element
                .add_event_listener_with_callback(event.name(), listener);
        }
    }

    fn unlisten(&mut self, event: CompletionEvent) {
        if let Some(listener) = &self.listener {
            let _ = self
                .element
                .remove_event_listener_with_callback(event.name(), listener);
        }
    }

    fn detach(&mut self) -> bool {
        match self.element.parent_node() {
            Some(parent) => parent.remove_child(&self.element).is_ok(),
            None => false,
        }
    }

    fn is_target(&self, target: &EventTarget) -> bool {
        let own: &EventTarget = self.element.as_ref();
        own == target
    }
}

/// `getPropertyValue` reports unset properties as the empty string.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
