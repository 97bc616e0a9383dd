// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style property probing against the document root.

use js_sys::Reflect;
use tessera_core::capability::StyleProbe;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CssStyleDeclaration, HtmlElement};

/// Tests style property names against `document.documentElement.style`.
///
/// A property is supported when reading it from the style declaration yields
/// a string. Without a window, a document or an HTML root element every
/// probe fails, which resolves to unsupported transitions.
pub struct DocumentProbe {
    style: Option<CssStyleDeclaration>,
}

impl core::fmt::Debug for DocumentProbe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DocumentProbe")
            .field("has_style", &self.style.is_some())
            .finish()
    }
}

impl DocumentProbe {
    /// Probes the current document's root element.
    #[must_use]
    pub fn new() -> Self {
        let style = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .map(|root| root.style());
        Self { style }
    }

    /// Probes an explicit style declaration.
    #[must_use]
    pub fn with_style(style: CssStyleDeclaration) -> Self {
        Self { style: Some(style) }
    }
}

impl Default for DocumentProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleProbe for DocumentProbe {
    fn supports(&self, property: &str) -> bool {
        let Some(style) = &self.style else {
            return false;
        };
        Reflect::get(style, &JsValue::from_str(property)).is_ok_and(|value| value.is_string())
    }
}
