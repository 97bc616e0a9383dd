// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metrics consumed from the layout engine.
//!
//! The layout engine owns the container measurements. Items only read the
//! padding to turn a logical position into literal `left`/`top` offsets, and
//! they read it at the moment they need it so a resized container is picked
//! up without re-creating items.

use alloc::rc::Rc;
use core::cell::Cell;

/// Size and padding of the layout container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSize {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Left padding.
    pub padding_left: f64,
    /// Top padding.
    pub padding_top: f64,
    /// Right padding.
    pub padding_right: f64,
    /// Bottom padding.
    pub padding_bottom: f64,
}

impl ElementSize {
    /// A zero-sized container with the given left/top padding.
    #[must_use]
    pub const fn with_padding(padding_left: f64, padding_top: f64) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            padding_left,
            padding_top,
            padding_right: 0.0,
            padding_bottom: 0.0,
        }
    }
}

/// Read-only view of the layout engine an item belongs to.
pub trait LayoutContext {
    /// Returns the current container metrics.
    fn element_size(&self) -> ElementSize;
}

impl LayoutContext for ElementSize {
    fn element_size(&self) -> ElementSize {
        *self
    }
}

impl LayoutContext for Cell<ElementSize> {
    fn element_size(&self) -> ElementSize {
        self.get()
    }
}

impl<T: LayoutContext + ?Sized> LayoutContext for &T {
    fn element_size(&self) -> ElementSize {
        (**self).element_size()
    }
}

impl<T: LayoutContext + ?Sized> LayoutContext for Rc<T> {
    fn element_size(&self) -> ElementSize {
        (**self).element_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_cell_sees_updates() {
        let shared = Rc::new(Cell::new(ElementSize::with_padding(5.0, 5.0)));
        let ctx = Rc::clone(&shared);
        assert_eq!(ctx.element_size().padding_left, 5.0);
        shared.set(ElementSize::with_padding(8.0, 1.0));
        assert_eq!(ctx.element_size().padding_left, 8.0);
        assert_eq!(ctx.element_size().padding_top, 1.0);
    }
}
