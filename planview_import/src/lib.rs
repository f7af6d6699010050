// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_import --heading-base-level=0

//! Planview Import: JSON layer tables to typed geometry.
//!
//! Plan data arrives as a JSON object mapping layer names to row tables,
//! the shape spreadsheet exports naturally take. Rectangle layers
//! (`"slabs"`, `"walls"`, `"stairs"`) carry four numeric cells per row,
//! `(x_start, x_end, y_start, y_end)`; the point layer (`"sensors"`)
//! carries two, `(x, y)`:
//!
//! ```json
//! {
//!   "walls":   [["x_start", "x_end", "y_start", "y_end"],
//!               [20000, 20240, 6000, 30000]],
//!   "slabs":   [[20000, 44000, 6000, 30000]],
//!   "sensors": [["x", "y"], [33950, 20000]]
//! }
//! ```
//!
//! Row handling keeps the conventions of tabular exports:
//!
//! - Rows containing any non-numeric cell are header/label rows and are
//!   skipped (logged at debug level).
//! - Numeric rows with the wrong cell count are an
//!   [`ImportError::RowArity`].
//! - Reversed rectangle extents (`x_start > x_end`) mirror into place.
//! - Unrecognized layer names are ignored with a warning.
//!
//! [`ParsedLayers`] hands its fields straight to
//! `planview_geometry::GeometryStore::load`: absent optional layers come
//! out as `None`, absent required layers as empty vectors (which `load`
//! then reports as empty-dataset warnings).

use std::collections::BTreeMap;
use std::fmt;

use kurbo::{Point, Rect};
use serde::Deserialize;
use serde_json::Value;

/// Cells per rectangle row: `(x_start, x_end, y_start, y_end)`.
const RECT_ARITY: usize = 4;

/// Cells per point row: `(x, y)`.
const POINT_ARITY: usize = 2;

/// The raw wire shape: layer name to rows, each row a list of cells.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawTables(BTreeMap<String, Vec<Vec<Value>>>);

/// Typed layer geometry parsed from a JSON document.
///
/// Field shapes match `GeometryStore::load` exactly: required layers are
/// plain vectors (possibly empty), optional layers distinguish "absent
/// from the file" as `None`, though the store treats both the same.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedLayers {
    /// Floor slab rectangles. Required layer.
    pub slabs: Vec<Rect>,
    /// Wall rectangles. Required layer.
    pub walls: Vec<Rect>,
    /// Stair rectangles, when the file has a `"stairs"` table.
    pub stairs: Option<Vec<Rect>>,
    /// Sensor points, when the file has a `"sensors"` table.
    pub sensors: Option<Vec<Point>>,
}

/// Error raised while parsing a layer document.
#[derive(Debug)]
pub enum ImportError {
    /// The document is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// A numeric row has the wrong number of cells for its layer.
    RowArity {
        /// The layer containing the bad row.
        layer: &'static str,
        /// Zero-based row index within the layer table.
        row: usize,
        /// Cells the layer requires per row.
        expected: usize,
        /// Cells the row actually has.
        found: usize,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid layer document: {err}"),
            Self::RowArity {
                layer,
                row,
                expected,
                found,
            } => write!(
                f,
                "layer \"{layer}\" row {row}: expected {expected} numeric cells, found {found}"
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::RowArity { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Parses a JSON layer document into typed geometry.
///
/// See the crate docs for the input format and row handling rules. JSON
/// cannot encode non-finite numbers, so every coordinate that comes out
/// of here is finite.
pub fn parse_layers(json: &str) -> Result<ParsedLayers, ImportError> {
    let RawTables(tables) = serde_json::from_str(json)?;

    let mut layers = ParsedLayers::default();
    for (name, rows) in &tables {
        match name.as_str() {
            "slabs" => layers.slabs = parse_rect_rows("slabs", rows)?,
            "walls" => layers.walls = parse_rect_rows("walls", rows)?,
            "stairs" => layers.stairs = Some(parse_rect_rows("stairs", rows)?),
            "sensors" => layers.sensors = Some(parse_point_rows("sensors", rows)?),
            other => log::warn!("ignoring unrecognized layer \"{other}\""),
        }
    }
    Ok(layers)
}

/// The numeric cells of a row, or `None` for a header/label row.
fn numeric_cells(row: &[Value]) -> Option<Vec<f64>> {
    row.iter().map(Value::as_f64).collect()
}

fn parse_rect_rows(
    layer: &'static str,
    rows: &[Vec<Value>],
) -> Result<Vec<Rect>, ImportError> {
    let mut rects = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(cells) = numeric_cells(row) else {
            log::debug!("layer \"{layer}\": skipping header row {index}");
            continue;
        };
        if cells.len() != RECT_ARITY {
            return Err(ImportError::RowArity {
                layer,
                row: index,
                expected: RECT_ARITY,
                found: cells.len(),
            });
        }
        let [x_start, x_end, y_start, y_end] = cells[..] else {
            unreachable!("arity checked above");
        };
        // `abs` mirrors reversed extents into x0 <= x1, y0 <= y1.
        rects.push(Rect::new(x_start, y_start, x_end, y_end).abs());
    }
    Ok(rects)
}

fn parse_point_rows(
    layer: &'static str,
    rows: &[Vec<Value>],
) -> Result<Vec<Point>, ImportError> {
    let mut points = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(cells) = numeric_cells(row) else {
            log::debug!("layer \"{layer}\": skipping header row {index}");
            continue;
        };
        if cells.len() != POINT_ARITY {
            return Err(ImportError::RowArity {
                layer,
                row: index,
                expected: POINT_ARITY,
                found: cells.len(),
            });
        }
        points.push(Point::new(cells[0], cells[1]));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{ImportError, parse_layers};

    #[test]
    fn parses_all_four_layers() {
        let layers = parse_layers(
            r#"{
                "slabs":   [[20000, 44000, 6000, 30000]],
                "walls":   [[20000, 20240, 6000, 30000], [20000, 44000, 6000, 6240]],
                "stairs":  [[30000, 32000, 10000, 13000]],
                "sensors": [[33950, 20000]]
            }"#,
        )
        .unwrap();

        assert_eq!(layers.slabs, vec![Rect::new(20000.0, 6000.0, 44000.0, 30000.0)]);
        assert_eq!(layers.walls.len(), 2);
        assert_eq!(
            layers.stairs,
            Some(vec![Rect::new(30000.0, 10000.0, 32000.0, 13000.0)])
        );
        assert_eq!(layers.sensors, Some(vec![Point::new(33950.0, 20000.0)]));
    }

    #[test]
    fn header_rows_are_skipped() {
        let layers = parse_layers(
            r#"{
                "slabs":   [["x_start", "x_end", "y_start", "y_end"],
                            [0, 100, 0, 80]],
                "walls":   [[0, 2, 0, 80]],
                "sensors": [["x", "y"], [50, 40]]
            }"#,
        )
        .unwrap();

        assert_eq!(layers.slabs, vec![Rect::new(0.0, 0.0, 100.0, 80.0)]);
        assert_eq!(layers.sensors, Some(vec![Point::new(50.0, 40.0)]));
    }

    #[test]
    fn absent_layers_stay_absent() {
        let layers = parse_layers(r#"{"slabs": [[0, 10, 0, 10]]}"#).unwrap();
        assert!(layers.walls.is_empty());
        assert_eq!(layers.stairs, None);
        assert_eq!(layers.sensors, None);

        let layers = parse_layers(r#"{"slabs": [[0, 10, 0, 10]], "stairs": []}"#).unwrap();
        assert_eq!(layers.stairs, Some(vec![]));
    }

    #[test]
    fn reversed_extents_mirror_into_place() {
        let layers = parse_layers(r#"{"walls": [[100, 0, 80, 0]]}"#).unwrap();
        assert_eq!(layers.walls, vec![Rect::new(0.0, 0.0, 100.0, 80.0)]);
    }

    #[test]
    fn wrong_rect_arity_is_an_error() {
        let err = parse_layers(r#"{"walls": [[0, 100, 0]]}"#).unwrap_err();
        let ImportError::RowArity {
            layer,
            row,
            expected,
            found,
        } = err
        else {
            panic!("expected a row arity error");
        };
        assert_eq!(layer, "walls");
        assert_eq!(row, 0);
        assert_eq!(expected, 4);
        assert_eq!(found, 3);
    }

    #[test]
    fn wrong_point_arity_is_an_error() {
        let err = parse_layers(r#"{"sensors": [[33950, 20000], [1, 2, 3]]}"#).unwrap_err();
        assert!(matches!(
            err,
            ImportError::RowArity {
                layer: "sensors",
                row: 1,
                expected: 2,
                found: 3,
            }
        ));
    }

    #[test]
    fn mixed_cells_make_a_row_a_header() {
        // One non-numeric cell is enough, whatever the arity.
        let layers =
            parse_layers(r#"{"walls": [[0, 100, 0, "y_end"], [0, 2, 0, 80]]}"#).unwrap();
        assert_eq!(layers.walls, vec![Rect::new(0.0, 0.0, 2.0, 80.0)]);
    }

    #[test]
    fn unknown_layers_are_ignored() {
        let layers = parse_layers(
            r#"{"slabs": [[0, 10, 0, 10]], "columns": [[1, 2, 3, 4]]}"#,
        )
        .unwrap();
        assert!(layers.stairs.is_none());
        assert_eq!(layers.slabs.len(), 1);
    }

    #[test]
    fn invalid_json_reports_the_source() {
        use std::error::Error as _;

        let err = parse_layers("{not json").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn arity_error_display_names_the_row() {
        let err = parse_layers(r#"{"stairs": [[1, 2]]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "layer \"stairs\" row 0: expected 4 numeric cells, found 2"
        );
    }
}
