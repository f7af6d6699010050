// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation controller: a current view, the home view reset returns
//! to, and the operations that move between them.

use core::fmt;

use kurbo::{Point, Rect, Vec2};

use crate::ViewBounds;

/// Fraction of each bounding-box extent added as padding per side when
/// fitting.
const FIT_MARGIN: f64 = 0.05;

/// Substitute span for a degenerate (zero-extent) bounding-box axis.
const DEGENERATE_SPAN: f64 = 1.0;

/// Error returned when a zoom operation is rejected.
///
/// Zoom factors and start-view zoom levels must be finite and strictly
/// positive. On rejection the viewport is left exactly as it was: nothing
/// is clamped or substituted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidZoomError {
    /// The rejected factor.
    pub factor: f64,
}

impl fmt::Display for InvalidZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid zoom factor {}: factors must be finite and greater than zero",
            self.factor
        )
    }
}

impl core::error::Error for InvalidZoomError {}

/// A navigable window onto a floor plan.
///
/// The controller owns two windows: the current view and the home view
/// that [`reset`](Self::reset) returns to. It is headless and
/// render-agnostic; every operation is a total state transition returning
/// the new [`ViewBounds`], and deciding when to redraw is the host's
/// business.
///
/// Zoom factors scale the window extents, so factors below `1.0` magnify
/// content and factors above `1.0` show more world. Zoom is unlimited in
/// both directions; only non-finite and non-positive factors are refused.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    current: ViewBounds,
    home: ViewBounds,
}

impl Viewport {
    /// Fits `world` (typically a geometry bounding box) for display on a
    /// surface with width/height ratio `surface_aspect`.
    ///
    /// Each axis is padded by 5% per side, then exactly one axis is
    /// expanded about the center until the window matches the surface
    /// aspect. Expansion never clips geometry and never distorts units:
    /// one world millimetre spans the same number of pixels horizontally
    /// and vertically. A degenerate world extent (single point, purely
    /// horizontal plan) falls back to a unit span before padding.
    ///
    /// The result becomes both the current and the home view.
    /// `surface_aspect` must be finite and positive; other values fall
    /// back to `1.0`. Worlds with non-finite coordinates fall back to
    /// [`ViewBounds::UNIT`].
    #[must_use]
    pub fn fit(world: Rect, surface_aspect: f64) -> Self {
        let aspect = if surface_aspect.is_finite() && surface_aspect > 0.0 {
            surface_aspect
        } else {
            1.0
        };

        let mut width = world.width().abs();
        let mut height = world.height().abs();
        if width <= 0.0 {
            width = DEGENERATE_SPAN;
        }
        if height <= 0.0 {
            height = DEGENERATE_SPAN;
        }
        width *= 1.0 + 2.0 * FIT_MARGIN;
        height *= 1.0 + 2.0 * FIT_MARGIN;

        if width / height < aspect {
            width = height * aspect;
        } else {
            height = width / aspect;
        }

        let home = ViewBounds::from_center(world.center(), width, height)
            .unwrap_or(ViewBounds::UNIT);
        Self {
            current: home,
            home,
        }
    }

    /// Wraps an explicit window as both the current and the home view.
    ///
    /// For hosts that computed their own window; [`fit`](Self::fit) is the
    /// usual entry point.
    #[must_use]
    pub fn from_home(home: ViewBounds) -> Self {
        Self {
            current: home,
            home,
        }
    }

    /// Replaces the view with one centered on `center` and sized to `zoom`
    /// times the home extents, and makes that the new home.
    ///
    /// This is the startup override for plans whose interesting region
    /// sits away from the geometric center. Because the home view is
    /// replaced too, a later [`reset`](Self::reset) returns to this view,
    /// not to the fit-all view; hosts that want the fit-all view back can
    /// call [`fit`](Self::fit) again.
    ///
    /// Returns [`InvalidZoomError`] when `zoom` is not finite and positive
    /// or when the requested window would not have finite positive
    /// extents; the viewport is untouched in both cases.
    pub fn set_start_view(
        &mut self,
        center: Point,
        zoom: f64,
    ) -> Result<ViewBounds, InvalidZoomError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(InvalidZoomError { factor: zoom });
        }
        debug_assert!(center.is_finite(), "start-view center must be finite");
        let width = self.home.width() * zoom;
        let height = self.home.height() * zoom;
        let Some(bounds) = ViewBounds::from_center(center, width, height) else {
            return Err(InvalidZoomError { factor: zoom });
        };
        self.current = bounds;
        self.home = bounds;
        Ok(bounds)
    }

    /// The window currently mapped onto the surface.
    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.current
    }

    /// The window [`reset`](Self::reset) returns to.
    #[must_use]
    pub fn home(&self) -> ViewBounds {
        self.home
    }

    /// Zooms about a world-space anchor, keeping the anchor's relative
    /// position inside the window fixed.
    ///
    /// With the anchor taken from under the cursor, the world point under
    /// the cursor stays under the cursor. Anchors outside the current
    /// window are fine: the relative offsets leave `0..1` and the window
    /// extrapolates accordingly.
    ///
    /// Non-finite, zero, and negative factors are rejected with
    /// [`InvalidZoomError`]; the view is left untouched.
    pub fn zoom_about(
        &mut self,
        anchor: Point,
        factor: f64,
    ) -> Result<ViewBounds, InvalidZoomError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(InvalidZoomError { factor });
        }
        debug_assert!(anchor.is_finite(), "zoom anchor must be finite");
        if !anchor.is_finite() {
            return Ok(self.current);
        }

        let width = self.current.width() * factor;
        let height = self.current.height() * factor;

        // Relative offsets of the anchor, measured from the max edges.
        let rel_x = (self.current.x_max() - anchor.x) / self.current.width();
        let rel_y = (self.current.y_max() - anchor.y) / self.current.height();

        let Some(bounds) = ViewBounds::new(
            anchor.x - width * (1.0 - rel_x),
            anchor.x + width * rel_x,
            anchor.y - height * (1.0 - rel_y),
            anchor.y + height * rel_y,
        ) else {
            // The extents overflowed or collapsed in floating point.
            return Err(InvalidZoomError { factor });
        };
        self.current = bounds;
        Ok(bounds)
    }

    /// Zooms about the center of the current window, keeping the center
    /// fixed. Same factor semantics and rejections as
    /// [`zoom_about`](Self::zoom_about).
    pub fn zoom_centered(&mut self, factor: f64) -> Result<ViewBounds, InvalidZoomError> {
        self.zoom_about(self.current.center(), factor)
    }

    /// Pans by fractions of the current extents: `delta.x = 0.1` shifts
    /// the window right by a tenth of its width, `delta.y = 0.1` shifts it
    /// up by a tenth of its height.
    ///
    /// Panning never changes the extents, so it cannot be rejected.
    /// Non-finite deltas are ignored.
    pub fn pan_by_fraction(&mut self, delta: Vec2) -> ViewBounds {
        debug_assert!(delta.is_finite(), "pan fractions must be finite");
        if !delta.is_finite() {
            return self.current;
        }
        let dx = delta.x * self.current.width();
        let dy = delta.y * self.current.height();
        let Some(bounds) = ViewBounds::new(
            self.current.x_min() + dx,
            self.current.x_max() + dx,
            self.current.y_min() + dy,
            self.current.y_max() + dy,
        ) else {
            return self.current;
        };
        self.current = bounds;
        bounds
    }

    /// Returns to the home view, bit for bit. Idempotent.
    pub fn reset(&mut self) -> ViewBounds {
        self.current = self.home;
        self.current
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            current: self.current,
            home: self.home,
            width: self.current.width(),
            height: self.current.height(),
            center: self.current.center(),
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// The current window.
    pub current: ViewBounds,
    /// The home window reset returns to.
    pub home: ViewBounds,
    /// Current horizontal extent in world units.
    pub width: f64,
    /// Current vertical extent in world units.
    pub height: f64,
    /// Current window center.
    pub center: Point,
}
