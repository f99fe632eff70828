//! Bulk traversals that emit every hex covering a geometric shape. Each
//! generator walks its shape in a deterministic order, calls a hook once per
//! hex as it is built, and returns the hexes in traversal order. The
//! traversal direction options use the same clockwise direction indexing as
//! [CompassDirection::CLOCKWISE].
//!
//! Generators don't store anything; pair them with a
//! [Grid](crate::Grid) to keep the output, or use the `on_create` hook to
//! feed the hexes anywhere else.

use crate::{
    hex::{CompassDirection, Hex, HexFactory, HexVector},
    util::hexagon_len,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Column and row step vectors for a traversal direction. Each direction is
/// paired with a second unit vector to span the plane: its clockwise
/// neighbor for even direction indexes, its counterclockwise neighbor for
/// odd ones. The direction itself advances columns and the partner advances
/// rows.
fn basis_vectors(direction: CompassDirection) -> (HexVector, HexVector) {
    let (col, row) = match direction {
        CompassDirection::E => (CompassDirection::E, CompassDirection::SE),
        CompassDirection::SE => (CompassDirection::SE, CompassDirection::E),
        CompassDirection::SW => (CompassDirection::SW, CompassDirection::W),
        CompassDirection::W => (CompassDirection::W, CompassDirection::SW),
        CompassDirection::NW => (CompassDirection::NW, CompassDirection::NE),
        CompassDirection::NE => (CompassDirection::NE, CompassDirection::NW),
    };
    (col.to_vector(), row.to_vector())
}

/// The hex a traversal starts from: the given hex re-stamped with the
/// factory's config, or the factory's zero hex
fn start_hex(factory: &HexFactory, start: Option<Hex>) -> Hex {
    match start {
        Some(hex) => {
            Hex::unchecked(hex.x(), hex.y(), hex.z(), factory.config())
        }
        None => factory.origin_hex(),
    }
}

/// Options for [parallelogram]. The defaults give a zero-size shape, so set
/// `width` and `height` explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelogramOptions {
    /// Number of hexes along the first traversal axis
    pub width: u32,
    /// Number of hexes along the second traversal axis
    pub height: u32,
    /// Hex to start from; the zero hex when omitted
    pub start: Option<Hex>,
    /// Which way the shape leans from the start hex
    pub direction: CompassDirection,
}

impl Default for ParallelogramOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            start: None,
            direction: CompassDirection::SE,
        }
    }
}

/// Generate the hexes of a parallelogram: `width` columns of `height` hexes
/// each, the two axes set by the direction's basis pair. `on_create` is
/// called exactly once per hex, right after the hex is built and before it
/// is appended to the result.
pub fn parallelogram(
    factory: &HexFactory,
    options: &ParallelogramOptions,
    mut on_create: impl FnMut(&Hex),
) -> Vec<Hex> {
    let start = start_hex(factory, options.start);
    let (col_vector, row_vector) = basis_vectors(options.direction);
    let mut hexes = Vec::new();
    for col in 0..options.width {
        for row in 0..options.height {
            let hex = start
                .translate(col_vector * col as f64)
                .translate(row_vector * row as f64);
            on_create(&hex);
            hexes.push(hex);
        }
    }
    hexes
}

/// Which way a generated triangle points. The two variants correspond to the
/// two traversal directions the shape supports (clockwise indexes 1 and 5).
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TriangleDirection {
    /// Rows shrink as columns advance; the apex trails the start hex
    Down,
    /// Rows grow as columns advance; the apex leads the start hex
    Up,
}

/// Options for [triangle]. The defaults give a zero-size shape, so set
/// `size` explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleOptions {
    /// Number of hexes along each edge of the triangle
    pub size: u32,
    /// Hex to start from; the zero hex when omitted
    pub start: Option<Hex>,
    /// Which way the triangle points
    pub direction: TriangleDirection,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        Self {
            size: 0,
            start: None,
            direction: TriangleDirection::Down,
        }
    }
}

/// Generate the hexes of a triangle with `size` hexes along each edge.
/// `on_create` is called exactly once per hex, in traversal order, before
/// the hex is appended to the result.
pub fn triangle(
    factory: &HexFactory,
    options: &TriangleOptions,
    mut on_create: impl FnMut(&Hex),
) -> Vec<Hex> {
    let start = start_hex(factory, options.start);
    let col_vector = CompassDirection::E.to_vector();
    let row_vector = CompassDirection::SE.to_vector();
    let size = options.size;
    let mut hexes = Vec::new();
    for col in 0..size {
        // The triangle's slant comes from the row bounds: one direction
        // trims rows off the end as columns advance, the other trims them
        // off the front
        let rows = match options.direction {
            TriangleDirection::Down => 0..(size - col),
            TriangleDirection::Up => (size - col)..(size + 1),
        };
        for row in rows {
            let hex = start
                .translate(col_vector * col as f64)
                .translate(row_vector * row as f64);
            on_create(&hex);
            hexes.push(hex);
        }
    }
    hexes
}

/// Options for [hexagon]. The defaults give an empty shape, so set `radius`
/// explicitly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonOptions {
    /// Number of concentric rings, counting the center hex as the first.
    /// 0 generates nothing, 1 generates just the center.
    pub radius: u32,
    /// Hex at the middle of the shape; the zero hex when omitted
    pub center: Option<Hex>,
}

/// Generate the hexes of a regular hexagon: the center hex plus
/// `radius - 1` concentric rings around it. `on_create` is called exactly
/// once per hex, in traversal order, before the hex is appended to the
/// result.
pub fn hexagon(
    factory: &HexFactory,
    options: &HexagonOptions,
    mut on_create: impl FnMut(&Hex),
) -> Vec<Hex> {
    let center = start_hex(factory, options.center);
    let mut hexes = Vec::with_capacity(hexagon_len(options.radius));
    if options.radius == 0 {
        return hexes;
    }
    on_create(&center);
    hexes.push(center);
    for ring in 1..options.radius {
        // Walk the ring: start northwest of the center, then take `ring`
        // steps in each clockwise direction. The final northeastern run
        // lands back on the starting hex.
        let mut cursor = center
            .translate(CompassDirection::NW.to_vector() * ring as f64);
        for direction in CompassDirection::iter() {
            for _ in 0..ring {
                on_create(&cursor);
                hexes.push(cursor);
                cursor = cursor.neighbor(direction);
            }
        }
    }
    hexes
}

/// Options for [rectangle]. The defaults give a zero-size shape, so set
/// `width` and `height` explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleOptions {
    /// Number of hexes across the rectangle
    pub width: u32,
    /// Number of hexes down the rectangle
    pub height: u32,
    /// Hex to start from; the zero hex when omitted
    pub start: Option<Hex>,
    /// Which way the long axis runs from the start hex
    pub direction: CompassDirection,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            start: None,
            direction: CompassDirection::E,
        }
    }
}

/// Generate the hexes of a screen-space rectangle. The traversal is the
/// parallelogram one with every other row shifted back by one half step,
/// which squares the shape up visually. Pointy grids traverse columns along
/// the width and flat grids along the height, so the rectangle comes out
/// `width * height` either way. `on_create` is called exactly once per hex,
/// in traversal order, before the hex is appended to the result.
pub fn rectangle(
    factory: &HexFactory,
    options: &RectangleOptions,
    mut on_create: impl FnMut(&Hex),
) -> Vec<Hex> {
    let start = start_hex(factory, options.start);
    let (col_vector, row_vector) = basis_vectors(options.direction);
    let (first_stop, second_stop) =
        if factory.config().orientation.is_pointy() {
            (options.width, options.height)
        } else {
            (options.height, options.width)
        };
    let mut hexes = Vec::new();
    for second in 0..second_stop {
        let offset = (second / 2) as i64;
        for first in -offset..(first_stop as i64 - offset) {
            let hex = start
                .translate(col_vector * first as f64)
                .translate(row_vector * second as f64);
            on_create(&hex);
            hexes.push(hex);
        }
    }
    hexes
}
