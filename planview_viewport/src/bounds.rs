// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated world-space view windows and their surface transforms.

use kurbo::{Affine, Point, Rect, Size};

/// An axis-aligned window onto world space with strictly positive extents.
///
/// `ViewBounds` is what the viewport hands to render backends: the world
/// rectangle currently mapped onto the drawing surface. Width and height
/// are finite and positive by construction, so the surface transforms
/// derived from it are always invertible. World y points up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ViewBounds {
    /// The unit window: `0..1` on both axes.
    pub const UNIT: Self = Self {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };

    /// Creates a window from its edge coordinates.
    ///
    /// Returns `None` unless all values are finite with `x_max > x_min`
    /// and `y_max > y_min`.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Option<Self> {
        let finite =
            x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite();
        if finite && x_max > x_min && y_max > y_min {
            Some(Self {
                x_min,
                x_max,
                y_min,
                y_max,
            })
        } else {
            None
        }
    }

    /// Creates a window from a rectangle with positive extents.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Option<Self> {
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }

    /// Creates a window of the given extents centered on `center`.
    #[must_use]
    pub fn from_center(center: Point, width: f64, height: f64) -> Option<Self> {
        Self::new(
            center.x - width / 2.0,
            center.x + width / 2.0,
            center.y - height / 2.0,
            center.y + height / 2.0,
        )
    }

    /// Left edge in world coordinates.
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right edge in world coordinates.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Bottom edge in world coordinates.
    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Top edge in world coordinates.
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Horizontal extent; always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent; always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The window's center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// The window as a plain rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Affine mapping world coordinates onto a `surface`-sized device target.
    ///
    /// World y points up while device y points down, so the vertical axis is
    /// flipped: the top edge (`y_max`) maps to device `y = 0`. World units
    /// render isotropically when `surface` has the same width/height ratio
    /// as this window, which hosts get by sizing the surface from the home
    /// view.
    #[must_use]
    pub fn world_to_surface(&self, surface: Size) -> Affine {
        let sx = surface.width / self.width();
        let sy = surface.height / self.height();
        // Column-major coeffs [a, b, c, d, e, f]:
        //   x' = a*x + c*y + e
        //   y' = b*x + d*y + f
        Affine::new([sx, 0.0, 0.0, -sy, -self.x_min * sx, self.y_max * sy])
    }

    /// Inverse of [`world_to_surface`](Self::world_to_surface): device
    /// pixels back to world coordinates. This is how cursor positions
    /// become zoom anchors.
    #[must_use]
    pub fn surface_to_world(&self, surface: Size) -> Affine {
        self.world_to_surface(surface).inverse()
    }

    /// World units spanned by one horizontal device pixel on a surface
    /// `surface_width` pixels wide. `surface_width` must be positive.
    #[must_use]
    pub fn world_units_per_pixel(&self, surface_width: f64) -> f64 {
        self.width() / surface_width
    }

    /// Suggests a “nice” grid spacing in world units for this window.
    ///
    /// The spacing is chosen from a 1-2-5 ladder so that adjacent grid
    /// lines sit at least `min_pixels` apart on a surface `surface_width`
    /// pixels wide, and is never finer than one world unit.
    #[must_use]
    pub fn grid_spacing(&self, surface_width: f64, min_pixels: f64) -> f64 {
        let desired = (self.world_units_per_pixel(surface_width) * min_pixels)
            .abs()
            .max(f64::MIN_POSITIVE);
        if !desired.is_finite() {
            return desired;
        }

        let mut unit = 1.0_f64;
        while unit * 10.0 <= desired {
            unit *= 10.0;
        }

        loop {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * unit;
                if step >= desired {
                    return step;
                }
            }
            unit *= 10.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::ViewBounds;

    #[test]
    fn construction_requires_positive_extents() {
        assert!(ViewBounds::new(0.0, 100.0, 0.0, 50.0).is_some());
        assert!(ViewBounds::new(100.0, 0.0, 0.0, 50.0).is_none());
        assert!(ViewBounds::new(0.0, 0.0, 0.0, 50.0).is_none());
        assert!(ViewBounds::new(0.0, 100.0, 50.0, 50.0).is_none());
        assert!(ViewBounds::new(0.0, f64::NAN, 0.0, 50.0).is_none());
        assert!(ViewBounds::new(0.0, f64::INFINITY, 0.0, 50.0).is_none());
    }

    #[test]
    fn from_center_places_the_center() {
        let bounds = ViewBounds::from_center(Point::new(50.0, 25.0), 100.0, 50.0).unwrap();
        assert_eq!(bounds.x_min(), 0.0);
        assert_eq!(bounds.x_max(), 100.0);
        assert_eq!(bounds.y_min(), 0.0);
        assert_eq!(bounds.y_max(), 50.0);
        assert_eq!(bounds.center(), Point::new(50.0, 25.0));
    }

    #[test]
    fn world_to_surface_flips_y() {
        let bounds = ViewBounds::new(0.0, 100.0, 0.0, 50.0).unwrap();
        let to_surface = bounds.world_to_surface(Size::new(200.0, 100.0));

        // Top-left of the world window lands at the device origin.
        let top_left = to_surface * Point::new(0.0, 50.0);
        assert!((top_left.x - 0.0).abs() < 1e-9);
        assert!((top_left.y - 0.0).abs() < 1e-9);

        // Bottom-right lands at the far device corner.
        let bottom_right = to_surface * Point::new(100.0, 0.0);
        assert!((bottom_right.x - 200.0).abs() < 1e-9);
        assert!((bottom_right.y - 100.0).abs() < 1e-9);

        let center = to_surface * Point::new(50.0, 25.0);
        assert!((center.x - 100.0).abs() < 1e-9);
        assert!((center.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn surface_to_world_inverts_the_mapping() {
        let bounds = ViewBounds::new(-20.0, 80.0, 10.0, 60.0).unwrap();
        let surface = Size::new(800.0, 400.0);
        let to_surface = bounds.world_to_surface(surface);
        let to_world = bounds.surface_to_world(surface);

        let world = Point::new(13.5, 42.25);
        let back = to_world * (to_surface * world);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);

        // A cursor position maps into the window.
        let anchor = to_world * Point::new(400.0, 200.0);
        assert!((anchor.x - 30.0).abs() < 1e-9);
        assert!((anchor.y - 35.0).abs() < 1e-9);
    }

    #[test]
    fn grid_spacing_follows_the_ladder() {
        let bounds = ViewBounds::new(0.0, 1000.0, 0.0, 1000.0).unwrap();
        assert_eq!(bounds.grid_spacing(1000.0, 40.0), 50.0);

        let wide = ViewBounds::new(0.0, 100_000.0, 0.0, 100_000.0).unwrap();
        assert_eq!(wide.grid_spacing(1000.0, 40.0), 5000.0);

        // Magnified views never suggest sub-unit spacing.
        let tight = ViewBounds::new(0.0, 1.0, 0.0, 1.0).unwrap();
        assert_eq!(tight.grid_spacing(1000.0, 40.0), 1.0);
    }
}
