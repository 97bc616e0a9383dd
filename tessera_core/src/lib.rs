// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned grid items with vendor-normalized animated transitions.
//!
//! `tessera_core` manages single visual elements inside a grid-layout
//! engine: their logical position, their animated move to a new position or
//! visibility state, and the cleanup after each animated change completes.
//! It is `no_std` compatible (with `alloc`) and talks to the host only
//! through the [`Element`](element::Element) and
//! [`LayoutContext`](layout::LayoutContext) traits.
//!
//! # Architecture
//!
//! ```text
//!   StyleProbe ──► capability::detect() ──► Capabilities (once, Copy)
//!                                                │
//!                 ┌──────────────────────────────┘
//!                 ▼
//!   layout engine ──► PositionedItem::move_to / reveal / remove
//!                                │
//!                                ▼
//!                     Element::set_style + listen
//!                                │
//!   runtime completion ──► PositionedItem::handle_event ──► Completion::run()
//! ```
//!
//! **[`capability`]** — One-time detection of the runtime's transition
//! spelling from a static, ordered vendor table.
//!
//! **[`item`]** — The [`PositionedItem`](item::PositionedItem) state
//! machine: settled position, in-flight transition, completion filtering.
//!
//! **[`element`]** — The [`Element`](element::Element) trait that backends
//! implement for their native element handles.
//!
//! **[`layout`]** — Container metrics consumed from the layout engine.
//!
//! **[`style`]** — Ordered style change sets.
//!
//! **[`config`]** — Transition duration and hidden-pose tuning.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! transition instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! # Minimum supported Rust version
//!
//! Rust 1.92.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod capability;
pub mod config;
pub mod element;
pub mod item;
pub mod layout;
pub mod style;
pub mod trace;

#[cfg(test)]
mod testing;
