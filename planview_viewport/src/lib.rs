// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_viewport --heading-base-level=0

//! Planview Viewport: pan/zoom navigation over a floor plan.
//!
//! This crate provides a small, headless model of a world-space view
//! window: the rectangle of the plan currently mapped onto the drawing
//! surface. It focuses on:
//! - View state: the current window plus the home window reset returns to.
//! - Navigation: cursor-anchored zoom, centered zoom, fractional pan, and
//!   lossless reset.
//! - Coordinate conversion between world space and device (pixel) space.
//! - Fitting a geometry bounding box to a surface with margin and a locked
//!   aspect ratio.
//!
//! It does **not** own any geometry or rendering backend. Callers are
//! expected to:
//! - Feed it a bounding box from their geometry store at startup.
//! - Wire input events (wheel, keys, drag) into zoom/pan operations at a
//!   higher layer; `planview_event_state` turns raw input into the factors
//!   and fractions these operations take.
//! - Read [`Viewport::bounds`] whenever they redraw. Operations return the
//!   new bounds but trigger nothing themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use planview_viewport::Viewport;
//!
//! // Fit a 40 m x 30 m storey for a 1.4 aspect surface.
//! let bbox = Rect::new(0.0, 0.0, 40_000.0, 30_000.0);
//! let mut view = Viewport::fit(bbox, 1.4);
//!
//! // Wheel zoom toward a point of interest; factors below 1 magnify.
//! view.zoom_about(Point::new(10_000.0, 5_000.0), 1.0 / 1.1)?;
//!
//! // Nudge right by a tenth of the window, then go home.
//! view.pan_by_fraction(Vec2::new(0.1, 0.0));
//! view.reset();
//! assert_eq!(view.bounds(), view.home());
//! # Ok::<(), planview_viewport::InvalidZoomError>(())
//! ```
//!
//! ## Design notes
//!
//! - Windows are axis-aligned and zooming is **uniform**: both extents
//!   scale by the same factor, so the window's aspect ratio never drifts
//!   from the home view's. Rotation and per-axis zoom are intentionally
//!   out of scope.
//! - Zoom factors scale the window, not the content: `0.5` shows half as
//!   much world per axis (magnification), `2.0` shows twice as much.
//! - Zoom is unlimited in both directions. The only rejected factors are
//!   non-finite and non-positive ones, reported as [`InvalidZoomError`]
//!   with the view left untouched.
//! - [`ViewBounds`] carries strictly positive extents by construction, so
//!   every window a backend ever sees yields an invertible surface
//!   transform.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod viewport;

pub use bounds::ViewBounds;
pub use viewport::{InvalidZoomError, Viewport, ViewportDebugInfo};
