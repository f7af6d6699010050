// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry store and its load-time diagnostics.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Rectangle layers of a floor plan, bottom to top of the draw order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RectLayer {
    /// Floor slabs, drawn first.
    Slabs,
    /// Wall segments.
    Walls,
    /// Stair footprints.
    Stairs,
}

impl RectLayer {
    /// All rectangle layers, in draw order.
    pub const ALL: [Self; 3] = [Self::Slabs, Self::Walls, Self::Stairs];

    /// Lowercase display name, as used in import files and messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Slabs => "slabs",
            Self::Walls => "walls",
            Self::Stairs => "stairs",
        }
    }

    /// Whether a plan is expected to carry rows for this layer.
    ///
    /// Loading an empty required layer still succeeds; it just yields an
    /// [`EmptyDatasetError`] warning.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Slabs | Self::Walls)
    }
}

/// Warning produced when a required layer is loaded with no rows.
///
/// Advisory rather than fatal: the store loads anyway and the layer behaves
/// as empty. Hosts typically log the warning and continue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyDatasetError {
    /// The required layer that had no rows.
    pub layer: RectLayer,
}

impl fmt::Display for EmptyDatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required layer \"{}\" has no rows", self.layer.name())
    }
}

impl core::error::Error for EmptyDatasetError {}

/// Error returned by [`GeometryStore::bounding_box`] when every layer is
/// empty, so no bounding box exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoGeometryError;

impl fmt::Display for NoGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no geometry is loaded, so there is no bounding box")
    }
}

impl core::error::Error for NoGeometryError {}

/// Warnings produced while loading a [`GeometryStore`].
pub type LoadWarnings = SmallVec<[EmptyDatasetError; 2]>;

/// Immutable world-space geometry for one building storey.
///
/// Coordinates are millimetres with y pointing up. Rectangles are
/// axis-aligned with `x0 <= x1` and `y0 <= y1`; zero-extent rectangles are
/// permitted. The contents never change after [`load`](Self::load):
/// navigation, styling, and export all read the same data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryStore {
    slabs: Vec<Rect>,
    walls: Vec<Rect>,
    stairs: Vec<Rect>,
    sensors: Vec<Point>,
}

impl GeometryStore {
    /// Builds a store from per-layer geometry.
    ///
    /// `stairs` and `sensors` are optional layers; `None` is equivalent to
    /// an empty vector and the two are indistinguishable afterwards. Each
    /// required layer (`slabs`, `walls`) that arrives empty contributes one
    /// [`EmptyDatasetError`] to the returned warning list.
    #[must_use]
    pub fn load(
        slabs: Vec<Rect>,
        walls: Vec<Rect>,
        stairs: Option<Vec<Rect>>,
        sensors: Option<Vec<Point>>,
    ) -> (Self, LoadWarnings) {
        let store = Self {
            slabs,
            walls,
            stairs: stairs.unwrap_or_default(),
            sensors: sensors.unwrap_or_default(),
        };
        let mut warnings = LoadWarnings::new();
        for layer in RectLayer::ALL {
            if layer.is_required() && store.rects(layer).is_empty() {
                warnings.push(EmptyDatasetError { layer });
            }
        }
        (store, warnings)
    }

    /// The rectangles of `layer`, in input order. Empty for absent layers.
    #[must_use]
    pub fn rects(&self, layer: RectLayer) -> &[Rect] {
        match layer {
            RectLayer::Slabs => &self.slabs,
            RectLayer::Walls => &self.walls,
            RectLayer::Stairs => &self.stairs,
        }
    }

    /// The sensor points, in input order.
    #[must_use]
    pub fn sensors(&self) -> &[Point] {
        &self.sensors
    }

    /// True when every layer, sensors included, is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
            && self.walls.is_empty()
            && self.stairs.is_empty()
            && self.sensors.is_empty()
    }

    /// The smallest axis-aligned rectangle containing every rectangle and
    /// every sensor point across all layers.
    ///
    /// A store holding a single point yields a zero-extent rectangle; view
    /// fitting is responsible for padding degenerate extents.
    pub fn bounding_box(&self) -> Result<Rect, NoGeometryError> {
        let mut bbox: Option<Rect> = None;
        for layer in RectLayer::ALL {
            for rect in self.rects(layer) {
                bbox = Some(match bbox {
                    Some(acc) => acc.union(*rect),
                    None => *rect,
                });
            }
        }
        for point in &self.sensors {
            bbox = Some(match bbox {
                Some(acc) => acc.union_pt(*point),
                None => Rect::from_points(*point, *point),
            });
        }
        bbox.ok_or(NoGeometryError)
    }
}
