// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan tracking: turn press/move/release positions into pan
//! fractions for the viewport.
//!
//! ## Usage
//!
//! 1) On button press, call [`DragPan::begin`] with the cursor position.
//! 2) On each move, call [`DragPan::move_to`]; while a drag is active it
//!    returns the device-pixel delta since the previous event.
//! 3) Convert each delta with [`drag_delta_to_pan_fraction`] and feed it
//!    to `Viewport::pan_by_fraction`.
//! 4) On release, call [`DragPan::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use planview_event_state::drag::{DragPan, drag_delta_to_pan_fraction};
//!
//! let surface = Size::new(1400.0, 1000.0);
//! let mut drag = DragPan::default();
//!
//! drag.begin(Point::new(700.0, 500.0));
//! assert!(drag.is_active());
//!
//! // Drag 140 px to the right: the window pans left by a tenth.
//! let delta = drag.move_to(Point::new(840.0, 500.0)).unwrap();
//! let fraction = drag_delta_to_pan_fraction(delta, surface);
//! assert_eq!(fraction, Vec2::new(-0.1, 0.0));
//!
//! drag.end();
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Size, Vec2};

/// Tracks an active drag gesture in device pixels.
///
/// The tracker only remembers the most recent position: panning consumes
/// incremental deltas, so the window follows the cursor no matter how the
/// host batches move events.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragPan {
    last: Option<Point>,
}

impl DragPan {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Starts a drag at the given device-pixel position.
    ///
    /// Beginning again while active restarts the gesture from the new
    /// position.
    pub fn begin(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Feeds a pointer move, returning the device-pixel delta since the
    /// previous event. Returns `None` while no drag is active.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// True between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

/// Converts a device-pixel drag delta into pan fractions for a y-up world.
///
/// Dragging grabs the content: a rightward drag moves the window left.
/// Device y points down while world y points up, so a downward drag moves
/// the window up. `surface` is the drawing surface size in device pixels
/// and must have positive extents.
#[must_use]
pub fn drag_delta_to_pan_fraction(delta: Vec2, surface: Size) -> Vec2 {
    Vec2::new(-delta.x / surface.width, delta.y / surface.height)
}
