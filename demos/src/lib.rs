// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared wiring for the Planview demo examples.

use planview_geometry::GeometryStore;
use planview_import::{ImportError, parse_layers};

/// A small single-storey plan used when no input file is given.
///
/// One slab, a dozen wall strips, one stair, and a handful of sensors,
/// spanning roughly x 20 000..44 000 and y 6 000..30 000 millimetres.
pub const SAMPLE_PLAN: &str = include_str!("../assets/sample_plan.json");

/// Parses a layer document and loads it into a store, logging any
/// empty-layer warnings along the way.
pub fn load_store(json: &str) -> Result<GeometryStore, ImportError> {
    let layers = parse_layers(json)?;
    let (store, warnings) =
        GeometryStore::load(layers.slabs, layers.walls, layers.stairs, layers.sensors);
    for warning in &warnings {
        log::warn!("{warning}");
    }
    Ok(store)
}
