// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for tessera.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DocumentProbe`]: transition feature detection on the document root
//! - [`DomElement`]: inline-style and event-listener access to an
//!   `HTMLElement`
//! - [`DomItem`]: a positioned item wired to the browser event loop
//!
//! # Usage
//!
//! ```rust,ignore
//! let caps = tessera_backend_web::detect_capabilities();
//! let size = Rc::new(Cell::new(ElementSize::with_padding(10.0, 10.0)));
//! let item = DomItem::new(element, Rc::clone(&size), caps);
//! item.reveal();
//! item.move_to(120.0, 0.0);
//! ```

#![no_std]

extern crate alloc;

mod element;
mod item;
mod probe;

pub use element::DomElement;
pub use item::DomItem;
pub use probe::DocumentProbe;
pub use tessera_core::element::Element;

use tessera_core::capability::{Capabilities, detect};

/// Detects transition support for the current document.
///
/// Call once at startup and pass the result to every [`DomItem`].
#[must_use]
pub fn detect_capabilities() -> Capabilities {
    detect(&DocumentProbe::new())
}

#[cfg(test)]
mod tests {
    use super::element::non_empty;
    use alloc::string::String;

    #[test]
    fn empty_property_value_is_unset() {
        assert_eq!(non_empty(String::new()), None);
    }

    #[test]
    fn property_value_is_kept() {
        assert_eq!(
            non_empty(String::from("105px")).as_deref(),
            Some("105px")
        );
    }
}
