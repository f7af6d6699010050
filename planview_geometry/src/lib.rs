// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_geometry --heading-base-level=0

//! Planview Geometry: world-space floor-plan geometry storage.
//!
//! This crate holds the static geometry of a building storey as a set of
//! named layers: floor slabs, wall segments, and stair footprints as
//! axis-aligned rectangles, plus sensor positions as points. Coordinates
//! are world millimetres with y pointing up.
//!
//! The store is deliberately immutable: it is loaded once, then read by the
//! viewport (for the fit-all bounding box), by the scene builder (for draw
//! lists), and by exporters. Optional layers that are absent behave exactly
//! like layers that are present but empty, so downstream code never has to
//! distinguish the two.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use planview_geometry::{GeometryStore, RectLayer};
//!
//! let (store, warnings) = GeometryStore::load(
//!     vec![Rect::new(0.0, 0.0, 24_000.0, 12_000.0)], // slabs
//!     vec![Rect::new(0.0, 0.0, 240.0, 12_000.0)],    // walls
//!     None,                                          // no stairs
//!     Some(vec![Point::new(12_000.0, 6_000.0)]),     // sensors
//! );
//! assert!(warnings.is_empty());
//!
//! let bbox = store.bounding_box().unwrap();
//! assert_eq!(bbox.width(), 24_000.0);
//! assert_eq!(store.rects(RectLayer::Walls).len(), 1);
//! ```
//!
//! Empty *required* layers (slabs, walls) are reported as
//! [`EmptyDatasetError`] warnings rather than failures; a plan with no
//! geometry at all only becomes an error when something asks for its
//! [bounding box](GeometryStore::bounding_box).
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod store;

pub use store::{EmptyDatasetError, GeometryStore, LoadWarnings, NoGeometryError, RectLayer};
