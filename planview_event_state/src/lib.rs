// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_event_state --heading-base-level=0

//! Planview Event State: turning raw input into navigation values.
//!
//! This crate interprets the input gestures of a plan viewer without
//! touching the viewport itself. Each module handles one input family:
//!
//! - [`wheel`]: scroll steps to anchored-zoom factors
//! - [`keys`]: key bindings to centered-zoom, pan, and reset commands
//! - [`drag`]: press-drag-release tracking to pan fractions
//!
//! ## Design philosophy
//!
//! The modules are:
//!
//! - **Minimal and focused**: one interaction pattern each
//! - **Host-agnostic**: no window system, no event loop, no assumptions
//!   about how key codes or pointer events arrive
//! - **Viewport-ready**: outputs are exactly the factors and fractions
//!   `planview_viewport` operations take
//!
//! The host owns the wiring: it converts cursor pixels to world anchors
//! through `ViewBounds::surface_to_world`, applies `NavCommand`s to its
//! `Viewport`, and decides when to redraw.
//!
//! ## Wiring example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use planview_event_state::keys::{NavCommand, NavKey};
//! use planview_event_state::wheel::{ScrollDirection, WheelZoom};
//! use planview_viewport::Viewport;
//!
//! let surface = Size::new(1400.0, 1000.0);
//! let mut view = Viewport::fit(Rect::new(0.0, 0.0, 40_000.0, 30_000.0), 1.4);
//! let wheel = WheelZoom::default();
//!
//! // A wheel-up event at a cursor position.
//! let cursor = Point::new(350.0, 250.0);
//! let anchor = view.bounds().surface_to_world(surface) * cursor;
//! view.zoom_about(anchor, wheel.factor(ScrollDirection::In))?;
//!
//! // A key press.
//! if let Some(key) = NavKey::from_char('r') {
//!     match key.command() {
//!         NavCommand::Zoom(factor) => {
//!             view.zoom_centered(factor)?;
//!         }
//!         NavCommand::Pan(delta) => {
//!             view.pan_by_fraction(delta);
//!         }
//!         NavCommand::Reset => {
//!             view.reset();
//!         }
//!     }
//! }
//! assert_eq!(view.bounds(), view.home());
//! # Ok::<(), planview_viewport::InvalidZoomError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod keys;
pub mod wheel;
