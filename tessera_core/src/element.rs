// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for a managed visual element.
//!
//! Tessera never owns the visible tree. Each backend wraps its native element
//! handle (a DOM `HTMLElement`, a test double, ...) in a type implementing
//! [`Element`], which exposes exactly the operations a
//! [`PositionedItem`](crate::item::PositionedItem) needs:
//!
//! - set, read and remove named style properties,
//! - read one layout-dependent property to force a synchronous style flush,
//! - register and unregister the single completion listener,
//! - detach the element from its parent,
//! - decide whether an event target is this element.

use alloc::string::String;

use crate::capability::CompletionEvent;

/// A visual element whose styling is driven by a positioned item.
pub trait Element {
    /// What a completion notification reports as its origin.
    type Target: ?Sized;

    /// Sets a style property.
    fn set_style(&mut self, key: &str, value: &str);

    /// Returns the current inline value of a style property, if set.
    fn style(&self, key: &str) -> Option<String>;

    /// Removes a style property, letting the default value show through.
    fn remove_style(&mut self, key: &str);

    /// Reads a layout-dependent property, forcing the host to apply pending
    /// style changes before returning.
    fn force_layout(&mut self) -> f64;

    /// Registers the item's completion listener for `event`.
    fn listen(&mut self, event: CompletionEvent);

    /// Unregisters the completion listener for `event`.
    fn unlisten(&mut self, event: CompletionEvent);

    /// Detaches the element from its parent. Returns `false` if it had no
    /// parent.
    fn detach(&mut self) -> bool;

    /// Returns `true` if `target` is this element and not a descendant.
    fn is_target(&self, target: &Self::Target) -> bool;
}
