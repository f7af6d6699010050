// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end plan export: load a layer document, fit the view, apply the
//! start view, and write the result as an SVG.
//!
//! Pass a JSON layer file as the first argument, or run without arguments
//! to use the embedded sample plan:
//!
//!   `cargo run -p planview_demos --example plan_export -- my_plan.json`

use std::{env, fs};

use kurbo::{Point, Size};
use planview_demos::{SAMPLE_PLAN, load_store};
use planview_imaging::{PlanBackend, PlanTheme, build_scene};
use planview_imaging_svg::SvgBackend;
use planview_viewport::Viewport;

const SURFACE: Size = Size::new(1400.0, 1000.0);
const START_CENTER: Point = Point::new(33_950.0, 20_000.0);
const START_ZOOM: f64 = 0.5;
const OUTPUT: &str = "building_plan.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let json = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_PLAN.to_string(),
    };
    let store = load_store(&json)?;

    let mut view = Viewport::fit(store.bounding_box()?, SURFACE.width / SURFACE.height);
    view.set_start_view(START_CENTER, START_ZOOM)?;

    let theme = PlanTheme::default();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "surface constants are small positive integers"
    )]
    let mut backend = SvgBackend::new(SURFACE.width as u32, SURFACE.height as u32);
    backend.render(view.bounds(), &theme, &build_scene(&store, &theme));
    fs::write(OUTPUT, backend.to_svg())?;

    eprintln!("Wrote {OUTPUT}");
    eprintln!();
    eprintln!("Navigation in an interactive host:");
    eprintln!("  mouse wheel  zoom about the cursor");
    eprintln!("  mouse drag   pan");
    eprintln!("  + / -        zoom about the view center");
    eprintln!("  arrow keys   pan by a tenth of the view");
    eprintln!("  r            reset to the start view");
    Ok(())
}
