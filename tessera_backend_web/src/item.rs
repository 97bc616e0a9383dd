// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-loop wiring for DOM items.
//!
//! [`DomItem`] shares its [`PositionedItem`] with the JS closure registered
//! as the completion listener. The closure only holds a weak reference, so
//! dropping the `DomItem` frees the item even while a listener is attached.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};

use js_sys::Function;
use kurbo::{Point, Rect};
use tessera_core::capability::Capabilities;
use tessera_core::item::{OnComplete, PositionedItem};
use tessera_core::element::Element as _;
use tessera_core::layout::LayoutContext;
use tessera_core::style::StyleChanges;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement};

use crate::element::DomElement;

type EventClosure = Closure<dyn FnMut(Event)>;

/// A positioned item bound to a live `HTMLElement`.
///
/// Completion events are delivered by the browser's event loop. The listener
/// finishes the transition while borrowing the item, then runs any
/// caller-supplied [`OnComplete::Call`] callback after the borrow is released,
/// so callbacks may call back into this item.
pub struct DomItem<L: LayoutContext + 'static> {
    inner: Rc<RefCell<PositionedItem<DomElement, L>>>,
    /// Kept alive for as long as the listener may be registered.
    _listener: EventClosure,
}

impl<L: LayoutContext + 'static> core::fmt::Debug for DomItem<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomItem")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<L: LayoutContext + 'static> DomItem<L> {
    /// Takes `element` under layout control.
    pub fn new(element: HtmlElement, layout: L, capabilities: Capabilities) -> Self {
        Self::from_item(PositionedItem::new(
            DomElement::new(element),
            layout,
            capabilities,
        ))
    }

    /// Binds an already configured item to the browser event loop.
    ///
    /// If `item` is already mid-transition, its completion listener is
    /// registered here.
    pub fn from_item(item: PositionedItem<DomElement, L>) -> Self {
        let inner = Rc::new(RefCell::new(item));
        let weak = Rc::downgrade(&inner);

        let listener = Closure::wrap(Box::new(move |event: Event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(target) = event.target() else {
                return;
            };
            // The borrow ends with this statement; the callback runs unborrowed.
            let done = inner.borrow_mut().handle_event(&event.type_(), &target);
            done.run();
        }) as Box<dyn FnMut(Event)>);

        let function: Function = listener.as_ref().unchecked_ref::<Function>().clone();
        {
            let mut item = inner.borrow_mut();
            // A transition started before binding had no listener to register.
            let awaited = item.awaited_event();
            let element = item.element_mut();
            element.set_listener(function);
            if let Some(event) = awaited {
                element.listen(event);
            }
        }

        Self {
            inner,
            _listener: listener,
        }
    }

    /// Borrows the underlying item.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a completion callback of this item while
    /// it is mutably borrowed.
    #[must_use]
    pub fn item(&self) -> Ref<'_, PositionedItem<DomElement, L>> {
        self.inner.borrow()
    }

    /// Mutably borrows the underlying item.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a completion callback of this item while
    /// it is borrowed.
    #[must_use]
    pub fn item_mut(&self) -> RefMut<'_, PositionedItem<DomElement, L>> {
        self.inner.borrow_mut()
    }

    /// The settled logical position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.inner.borrow().position()
    }

    /// The bounding box maintained by the layout engine.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.inner.borrow().rect()
    }

    /// Stores the bounding box computed by the layout engine.
    pub fn set_rect(&self, rect: Rect) {
        self.inner.borrow_mut().set_rect(rect);
    }

    /// Returns `true` while an animated change is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.inner.borrow().is_transitioning()
    }

    /// See [`PositionedItem::move_to`].
    pub fn move_to(&self, x: f64, y: f64) {
        self.inner.borrow_mut().move_to(x, y);
    }

    /// See [`PositionedItem::apply_layout_position`].
    pub fn apply_layout_position(&self) {
        self.inner.borrow_mut().apply_layout_position();
    }

    /// See [`PositionedItem::reveal`].
    pub fn reveal(&self) {
        self.inner.borrow_mut().reveal();
    }

    /// See [`PositionedItem::remove`].
    pub fn remove(&self) {
        self.inner.borrow_mut().remove();
    }

    /// See [`PositionedItem::destroy`].
    pub fn destroy(&self) {
        self.inner.borrow_mut().destroy();
    }

    /// See [`PositionedItem::apply_style`].
    pub fn apply_style(&self, style: &StyleChanges) {
        self.inner.borrow_mut().apply_style(style);
    }

    /// See [`PositionedItem::transition`].
    ///
    /// When the browser has no transitions, `on_complete` runs before this
    /// returns, after the item borrow is released.
    pub fn transition(&self, changes: StyleChanges, on_complete: OnComplete) {
        let done = self
            .inner
            .borrow_mut()
            .begin_transition(changes, on_complete);
        done.run();
    }
}

impl<L: LayoutContext + 'static> Drop for DomItem<L> {
    fn drop(&mut self) {
        // Unregister before the closure is freed so the browser never calls
        // into a dropped closure.
        if let Ok(mut item) = self.inner.try_borrow_mut()
            && let Some(event) = item.capabilities().completion_event()
        {
            item.element_mut().unlisten(event);
        }
    }
}
