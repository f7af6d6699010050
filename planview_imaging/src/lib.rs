// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_imaging --heading-base-level=0

//! Planview Imaging: styled plan scenes and the backend trait.
//!
//! This crate turns the static geometry of a storey into an ordered,
//! styled draw list a renderer can consume. It sits between the geometry
//! store and concrete backends (SVG export, or whatever a host embeds).
//!
//! # Position in the stack
//!
//! - **Geometry**: `planview_geometry` holds world-space rectangles and
//!   sensor points, unstyled.
//! - **Scene (this crate)**: [`build_scene`] pairs that geometry with a
//!   [`PlanTheme`] and emits [`SceneOp`]s in draw order.
//! - **Backends**: implementations of [`PlanBackend`] place the ops on a
//!   surface using the view window's transform and draw them.
//!
//! # Units
//!
//! Scene geometry stays in world coordinates; the backend applies the
//! view transform at render time, so one scene serves every zoom level.
//! Stroke widths and marker radii are device pixels: outlines and sensor
//! markers keep their screen size as the view zooms, the way plan drawings
//! are read.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use planview_geometry::GeometryStore;
//! use planview_imaging::{PlanTheme, SceneOp, build_scene};
//!
//! let (store, _) = GeometryStore::load(
//!     vec![Rect::new(0.0, 0.0, 24_000.0, 12_000.0)],
//!     vec![Rect::new(0.0, 0.0, 240.0, 12_000.0)],
//!     None,
//!     Some(vec![Point::new(12_000.0, 6_000.0)]),
//! );
//!
//! let ops = build_scene(&store, &PlanTheme::default());
//! // Two rectangles (fill + outline each) and one marker.
//! assert_eq!(ops.len(), 5);
//! assert!(matches!(ops.last(), Some(SceneOp::Marker { .. })));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use planview_geometry::{GeometryStore, RectLayer};
use planview_viewport::ViewBounds;

/// Fill-and-outline styling for one rectangle layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerStyle {
    /// Fill color, alpha included.
    pub fill: Color,
    /// Outline color, alpha included.
    pub outline: Color,
    /// Outline width in device pixels.
    pub outline_width: f64,
}

/// Styling for sensor markers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Marker fill color, alpha included.
    pub fill: Color,
    /// Marker radius in device pixels.
    pub radius: f64,
}

/// Styling for the background grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Grid line color, alpha included.
    pub line: Color,
    /// Minimum spacing between adjacent grid lines in device pixels.
    pub min_spacing_px: f64,
}

/// The visual theme of a plan scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanTheme {
    /// Surface background color.
    pub background: Color,
    /// Slab styling; bottom of the draw order.
    pub slab: LayerStyle,
    /// Wall styling.
    pub wall: LayerStyle,
    /// Stair styling.
    pub stair: LayerStyle,
    /// Sensor marker styling; top of the draw order.
    pub sensor: MarkerStyle,
    /// Grid styling; `None` disables the grid.
    pub grid: Option<GridStyle>,
}

impl PlanTheme {
    /// The style of a rectangle layer.
    #[must_use]
    pub fn rect_style(&self, layer: RectLayer) -> LayerStyle {
        match layer {
            RectLayer::Slabs => self.slab,
            RectLayer::Walls => self.wall,
            RectLayer::Stairs => self.stair,
        }
    }
}

impl Default for PlanTheme {
    /// The classic architectural palette: light blue slabs, gray walls,
    /// orange stairs, red sensors, on white with a faint grid.
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(255, 255, 255, 255),
            slab: LayerStyle {
                fill: Color::from_rgba8(173, 216, 230, 128),
                outline: Color::from_rgba8(0, 0, 255, 128),
                outline_width: 1.0,
            },
            wall: LayerStyle {
                fill: Color::from_rgba8(128, 128, 128, 204),
                outline: Color::from_rgba8(0, 0, 0, 204),
                outline_width: 2.0,
            },
            stair: LayerStyle {
                fill: Color::from_rgba8(255, 165, 0, 153),
                outline: Color::from_rgba8(255, 0, 0, 153),
                outline_width: 1.5,
            },
            sensor: MarkerStyle {
                fill: Color::from_rgba8(255, 0, 0, 204),
                radius: 4.0,
            },
            grid: Some(GridStyle {
                line: Color::from_rgba8(176, 176, 176, 77),
                min_spacing_px: 40.0,
            }),
        }
    }
}

/// One styled drawing operation in world coordinates.
///
/// Geometry is world-space; stroke widths and marker radii are device
/// pixels (see the crate docs on units).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// The rectangle in world coordinates.
        rect: Rect,
        /// Fill color, alpha included.
        color: Color,
    },
    /// Stroke the outline of an axis-aligned rectangle.
    StrokeRect {
        /// The rectangle in world coordinates.
        rect: Rect,
        /// Stroke color, alpha included.
        color: Color,
        /// Stroke width in device pixels.
        width: f64,
    },
    /// A round marker of fixed device size.
    Marker {
        /// Marker center in world coordinates.
        center: Point,
        /// Radius in device pixels.
        radius: f64,
        /// Fill color, alpha included.
        color: Color,
    },
}

/// Builds the draw list for a store.
///
/// Draw order is bottom to top: slabs, walls, stairs, then sensor markers.
/// Each rectangle contributes its fill followed by its outline. Empty
/// layers contribute nothing; zero-extent rectangles are emitted and left
/// to the backend (which typically draws nothing for them).
#[must_use]
pub fn build_scene(store: &GeometryStore, theme: &PlanTheme) -> Vec<SceneOp> {
    let mut ops = Vec::new();
    for layer in RectLayer::ALL {
        let style = theme.rect_style(layer);
        for &rect in store.rects(layer) {
            ops.push(SceneOp::FillRect {
                rect,
                color: style.fill,
            });
            ops.push(SceneOp::StrokeRect {
                rect,
                color: style.outline,
                width: style.outline_width,
            });
        }
    }
    for &center in store.sensors() {
        ops.push(SceneOp::Marker {
            center,
            radius: theme.sensor.radius,
            color: theme.sensor.fill,
        });
    }
    ops
}

/// A renderer that can draw a plan scene through a view window.
///
/// Backends own their drawing surface and its size; `view` tells them
/// which world rectangle that surface currently shows. Implementations
/// place ops with the transform from `ViewBounds::world_to_surface` and
/// read `theme` for the background and grid.
pub trait PlanBackend {
    /// Renders `ops` as seen through `view`.
    fn render(&mut self, view: ViewBounds, theme: &PlanTheme, ops: &[SceneOp]);
}

/// Test backend that records render calls instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    /// One entry per [`render`](PlanBackend::render) call: the view and
    /// the ops received.
    pub frames: Vec<(ViewBounds, Vec<SceneOp>)>,
}

impl PlanBackend for RecordingBackend {
    fn render(&mut self, view: ViewBounds, _theme: &PlanTheme, ops: &[SceneOp]) {
        self.frames.push((view, ops.to_vec()));
    }
}
