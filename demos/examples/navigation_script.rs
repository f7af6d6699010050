// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless navigation replay: runs a scripted sequence of wheel, key,
//! and drag events against a viewport and prints the view after each
//! step. Shows the event-state and controller wiring without a window
//! system.
//!
//!   `cargo run -p planview_demos --example navigation_script`

use kurbo::{Point, Size, Vec2};
use planview_demos::{SAMPLE_PLAN, load_store};
use planview_event_state::drag::{DragPan, drag_delta_to_pan_fraction};
use planview_event_state::keys::{NavCommand, NavKey};
use planview_event_state::wheel::{ScrollDirection, WheelZoom};
use planview_viewport::{InvalidZoomError, Viewport};

const SURFACE: Size = Size::new(1400.0, 1000.0);

fn report(label: &str, view: &Viewport) {
    let info = view.debug_info();
    eprintln!(
        "{label:<28} center ({:.0}, {:.0})  extents {:.0} x {:.0}",
        info.center.x, info.center.y, info.width, info.height
    );
}

fn apply_key(view: &mut Viewport, key: NavKey) -> Result<(), InvalidZoomError> {
    match key.command() {
        NavCommand::Zoom(factor) => {
            view.zoom_centered(factor)?;
        }
        NavCommand::Pan(delta) => {
            view.pan_by_fraction(delta);
        }
        NavCommand::Reset => {
            view.reset();
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = load_store(SAMPLE_PLAN)?;
    let mut view = Viewport::fit(store.bounding_box()?, SURFACE.width / SURFACE.height);
    report("fitted", &view);

    view.set_start_view(Point::new(33_950.0, 20_000.0), 0.5)?;
    report("start view", &view);

    // Three wheel notches in with the cursor held over one spot.
    let wheel = WheelZoom::default();
    let cursor = Point::new(420.0, 310.0);
    for _ in 0..3 {
        let anchor = view.bounds().surface_to_world(SURFACE) * cursor;
        view.zoom_about(anchor, wheel.factor(ScrollDirection::In))?;
    }
    report("3x wheel in", &view);

    // A drag: press, two moves, release.
    let mut drag = DragPan::new();
    drag.begin(Point::new(700.0, 500.0));
    for pos in [Point::new(760.0, 470.0), Point::new(840.0, 450.0)] {
        if let Some(delta) = drag.move_to(pos) {
            view.pan_by_fraction(drag_delta_to_pan_fraction(delta, SURFACE));
        }
    }
    drag.end();
    report("drag left-up", &view);

    // Keyboard: zoom out once, nudge right twice.
    apply_key(&mut view, NavKey::Minus)?;
    apply_key(&mut view, NavKey::ArrowRight)?;
    apply_key(&mut view, NavKey::ArrowRight)?;
    report("minus, right, right", &view);

    // A rejected zoom leaves the view untouched.
    let before = view.bounds();
    assert!(view.zoom_centered(-1.0).is_err());
    assert_eq!(view.bounds(), before);
    report("rejected zoom(-1)", &view);

    // `r` goes home.
    if let Some(key) = NavKey::from_char('r') {
        apply_key(&mut view, key)?;
    }
    report("reset", &view);
    assert_eq!(view.bounds(), view.home());

    // A fractional drag delta converted from device pixels.
    let fraction = drag_delta_to_pan_fraction(Vec2::new(140.0, -100.0), SURFACE);
    view.pan_by_fraction(fraction);
    report("140px right drag", &view);

    Ok(())
}
