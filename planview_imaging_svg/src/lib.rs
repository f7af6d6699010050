// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_imaging_svg --heading-base-level=0

//! SVG export backend for Planview scenes.
//!
//! This crate provides an implementation of [`PlanBackend`] that draws a
//! scene through a view window into an SVG document. The document keeps
//! the view transform, styling, and geometry exact, so it doubles as a
//! lossless export format and as a diffable render target for tests.
//!
//! A backend owns a fixed surface size; each [`render`](PlanBackend::render)
//! call replaces the previous document body with the new scene as seen
//! through the given [`ViewBounds`]:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use planview_geometry::GeometryStore;
//! use planview_imaging::{PlanBackend, PlanTheme, build_scene};
//! use planview_imaging_svg::SvgBackend;
//! use planview_viewport::Viewport;
//!
//! let (store, _) = GeometryStore::load(
//!     vec![Rect::new(0.0, 0.0, 24_000.0, 12_000.0)],
//!     vec![Rect::new(0.0, 0.0, 240.0, 12_000.0)],
//!     None,
//!     Some(vec![Point::new(12_000.0, 6_000.0)]),
//! );
//! let view = Viewport::fit(store.bounding_box().unwrap(), 1.4);
//! let theme = PlanTheme::default();
//!
//! let mut backend = SvgBackend::new(1400, 1000);
//! backend.render(view.bounds(), &theme, &build_scene(&store, &theme));
//! let svg = backend.to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Affine, Point, Size};
use peniko::Color;
use planview_imaging::{GridStyle, PlanBackend, PlanTheme, SceneOp};
use planview_viewport::ViewBounds;

/// Dash pattern for grid lines, in device pixels.
const GRID_DASH: &str = "4 4";

/// A [`PlanBackend`] that renders scenes into an SVG document.
///
/// The surface size is fixed at construction; `width`/`height` become the
/// SVG `width`/`height` attributes and the `viewBox`. One scene per
/// document: rendering replaces whatever the backend held before.
#[derive(Clone, Debug)]
pub struct SvgBackend {
    width: u32,
    height: u32,
    body: String,
}

impl SvgBackend {
    /// Creates a backend with the given surface size in device pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// The surface size in device pixels.
    #[must_use]
    pub fn surface(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The current document: background, grid, and the last rendered scene.
    ///
    /// Before the first [`render`](PlanBackend::render) call the document
    /// is a valid, empty SVG.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }

    fn write_background(&mut self, color: Color) {
        let (fill, alpha) = color_to_svg(color);
        let (w, h) = (self.width, self.height);
        let _ = write!(self.body, "<rect width=\"{w}\" height=\"{h}\" fill=\"{fill}\"");
        write_opacity(&mut self.body, "fill-opacity", alpha);
        self.body.push_str("/>\n");
    }

    /// Writes dashed grid lines at world multiples of the suggested
    /// spacing, transformed into device space.
    fn write_grid(&mut self, view: ViewBounds, style: &GridStyle, to_surface: Affine) {
        let spacing = view.grid_spacing(f64::from(self.width), style.min_spacing_px);
        if !(spacing.is_finite() && spacing > 0.0) {
            return;
        }
        let (stroke, alpha) = color_to_svg(style.line);

        let mut line = |a: Point, b: Point| {
            let a = to_surface * a;
            let b = to_surface * b;
            let _ = write!(
                self.body,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"1\" stroke-dasharray=\"{GRID_DASH}\"",
                fmt_f64(a.x),
                fmt_f64(a.y),
                fmt_f64(b.x),
                fmt_f64(b.y),
            );
            write_opacity(&mut self.body, "stroke-opacity", alpha);
            self.body.push_str("/>\n");
        };

        // Snap to world multiples so lines stay put as the view pans.
        let mut x = (view.x_min() / spacing).ceil() * spacing;
        while x <= view.x_max() {
            line(Point::new(x, view.y_min()), Point::new(x, view.y_max()));
            x += spacing;
        }
        let mut y = (view.y_min() / spacing).ceil() * spacing;
        while y <= view.y_max() {
            line(Point::new(view.x_min(), y), Point::new(view.x_max(), y));
            y += spacing;
        }
    }

    fn write_op(&mut self, op: &SceneOp, to_surface: Affine) {
        match *op {
            SceneOp::FillRect { rect, color } => {
                let dev = to_surface.transform_rect_bbox(rect);
                if dev.width() <= 0.0 || dev.height() <= 0.0 {
                    return;
                }
                let (fill, alpha) = color_to_svg(color);
                let _ = write!(
                    self.body,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"",
                    fmt_f64(dev.x0),
                    fmt_f64(dev.y0),
                    fmt_f64(dev.width()),
                    fmt_f64(dev.height()),
                );
                write_opacity(&mut self.body, "fill-opacity", alpha);
                self.body.push_str("/>\n");
            }
            SceneOp::StrokeRect { rect, color, width } => {
                let dev = to_surface.transform_rect_bbox(rect);
                if dev.width() <= 0.0 || dev.height() <= 0.0 {
                    return;
                }
                let (stroke, alpha) = color_to_svg(color);
                let _ = write!(
                    self.body,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\"",
                    fmt_f64(dev.x0),
                    fmt_f64(dev.y0),
                    fmt_f64(dev.width()),
                    fmt_f64(dev.height()),
                    fmt_f64(width),
                );
                write_opacity(&mut self.body, "stroke-opacity", alpha);
                self.body.push_str("/>\n");
            }
            SceneOp::Marker {
                center,
                radius,
                color,
            } => {
                let dev = to_surface * center;
                let (fill, alpha) = color_to_svg(color);
                let _ = write!(
                    self.body,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"",
                    fmt_f64(dev.x),
                    fmt_f64(dev.y),
                    fmt_f64(radius),
                );
                write_opacity(&mut self.body, "fill-opacity", alpha);
                self.body.push_str("/>\n");
            }
        }
    }
}

impl PlanBackend for SvgBackend {
    fn render(&mut self, view: ViewBounds, theme: &PlanTheme, ops: &[SceneOp]) {
        self.body.clear();
        let to_surface = view.world_to_surface(self.surface());

        self.write_background(theme.background);
        if let Some(grid) = theme.grid {
            self.write_grid(view, &grid, to_surface);
        }
        for op in ops {
            self.write_op(op, to_surface);
        }
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

/// Writes ` name="alpha"` when the color is not fully opaque.
fn write_opacity(out: &mut String, name: &str, alpha: f32) {
    if alpha < 1.0 {
        let _ = write!(out, " {name}=\"{}\"", fmt_f64(f64::from(alpha)));
    }
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for diffing.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Rect};
    use peniko::Color;
    use planview_geometry::GeometryStore;
    use planview_imaging::{PlanBackend, PlanTheme, SceneOp, build_scene};
    use planview_viewport::ViewBounds;

    use super::{SvgBackend, fmt_f64};

    fn plain_theme() -> PlanTheme {
        // No grid, to keep documents small in op-focused tests.
        PlanTheme {
            grid: None,
            ..PlanTheme::default()
        }
    }

    #[test]
    fn empty_backend_is_a_valid_document() {
        let backend = SvgBackend::new(1400, 1000);
        let svg = backend.to_svg();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1400\" height=\"1000\" viewBox=\"0 0 1400 1000\">"
        ));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn render_replaces_the_previous_scene() {
        let view = ViewBounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let theme = plain_theme();
        let mut backend = SvgBackend::new(100, 100);

        backend.render(
            view,
            &theme,
            &[SceneOp::Marker {
                center: Point::new(10.0, 10.0),
                radius: 4.0,
                color: Color::from_rgba8(255, 0, 0, 255),
            }],
        );
        assert!(backend.to_svg().contains("<circle"));

        backend.render(view, &theme, &[]);
        assert!(!backend.to_svg().contains("<circle"));
    }

    #[test]
    fn background_covers_the_surface() {
        let view = ViewBounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let mut backend = SvgBackend::new(640, 480);
        backend.render(view, &plain_theme(), &[]);
        assert!(
            backend
                .to_svg()
                .contains("<rect width=\"640\" height=\"480\" fill=\"#ffffff\"/>")
        );
    }

    #[test]
    fn rects_are_transformed_and_y_flipped() {
        // World (0..100)^2 on a 100x100 surface: unit scale, y flipped.
        let view = ViewBounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let mut backend = SvgBackend::new(100, 100);
        backend.render(
            view,
            &plain_theme(),
            &[SceneOp::FillRect {
                rect: Rect::new(10.0, 10.0, 30.0, 40.0),
                color: Color::from_rgba8(128, 128, 128, 255),
            }],
        );
        // World y in 10..40 maps to device y in 60..90.
        assert!(backend.to_svg().contains(
            "<rect x=\"10\" y=\"60\" width=\"20\" height=\"30\" fill=\"#808080\"/>"
        ));
    }

    #[test]
    fn translucent_colors_get_opacity_attributes() {
        let view = ViewBounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let mut backend = SvgBackend::new(100, 100);
        backend.render(
            view,
            &plain_theme(),
            &[SceneOp::StrokeRect {
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                color: Color::from_rgba8(0, 0, 255, 128),
                width: 2.0,
            }],
        );
        let svg = backend.to_svg();
        assert!(svg.contains("stroke=\"#0000ff\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("stroke-opacity=\"0.502\""));
    }

    #[test]
    fn degenerate_rects_are_skipped() {
        let view = ViewBounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let mut backend = SvgBackend::new(100, 100);
        backend.render(
            view,
            &plain_theme(),
            &[
                SceneOp::FillRect {
                    rect: Rect::new(10.0, 10.0, 10.0, 40.0),
                    color: Color::from_rgba8(0, 0, 0, 255),
                },
                SceneOp::StrokeRect {
                    rect: Rect::new(10.0, 10.0, 40.0, 10.0),
                    color: Color::from_rgba8(0, 0, 0, 255),
                    width: 1.0,
                },
            ],
        );
        // Only the background rect survives.
        assert_eq!(backend.to_svg().matches("<rect").count(), 1);
    }

    #[test]
    fn markers_keep_device_radius() {
        // Strong magnification must not grow the marker.
        let view = ViewBounds::new(49.0, 51.0, 49.0, 51.0).unwrap();
        let mut backend = SvgBackend::new(200, 200);
        backend.render(
            view,
            &plain_theme(),
            &[SceneOp::Marker {
                center: Point::new(50.0, 50.0),
                radius: 4.0,
                color: Color::from_rgba8(255, 0, 0, 255),
            }],
        );
        assert!(
            backend
                .to_svg()
                .contains("<circle cx=\"100\" cy=\"100\" r=\"4\" fill=\"#ff0000\"/>")
        );
    }

    #[test]
    fn grid_lines_sit_on_world_multiples() {
        // Spacing for a 1000-unit window on 1000 px at 40 px minimum is 50.
        let view = ViewBounds::new(-10.0, 990.0, 0.0, 1000.0).unwrap();
        let theme = PlanTheme::default();
        let mut backend = SvgBackend::new(1000, 1000);
        backend.render(view, &theme, &[]);

        let svg = backend.to_svg();
        // First vertical line at world x = 0, 10 px in from the left edge.
        assert!(svg.contains("<line x1=\"10\" y1="));
        assert!(svg.contains("stroke-dasharray=\"4 4\""));
        // 20 vertical (0..=950) + 21 horizontal (0..=1000).
        assert_eq!(svg.matches("<line").count(), 41);
    }

    #[test]
    fn scene_ops_draw_above_the_grid() {
        let (store, _) = GeometryStore::load(
            vec![Rect::new(0.0, 0.0, 100.0, 80.0)],
            vec![Rect::new(0.0, 0.0, 2.0, 80.0)],
            None,
            None,
        );
        let theme = PlanTheme::default();
        let view = ViewBounds::new(-10.0, 110.0, -10.0, 90.0).unwrap();
        let mut backend = SvgBackend::new(1200, 1000);
        backend.render(view, &theme, &build_scene(&store, &theme));

        let svg = backend.to_svg();
        let last_line = svg.rfind("<line").unwrap();
        let first_slab = svg.find("fill=\"#add8e6\"").unwrap();
        assert!(last_line < first_slab);
    }

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt_f64(10.0), "10");
        assert_eq!(fmt_f64(-3.0), "-3");
        assert_eq!(fmt_f64(0.5), "0.5");
        assert_eq!(fmt_f64(1.25), "1.25");
        assert_eq!(fmt_f64(1.0 / 3.0), "0.333");
    }
}
