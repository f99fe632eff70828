//! Hexgrid is a hexagonal grid math library. It models hexes in cube
//! coordinates, converts between hexes and screen points for pointy-top and
//! flat-top layouts, and generates grids in common shapes. See the
//! [Red Blob Games guide](https://www.redblobgames.com/grids/hexagons/) for
//! the theory behind most of this.
//!
//! ```
//! use hexgrid::{Grid, HexConfig, RectangleOptions};
//!
//! let mut grid = Grid::new(HexConfig::default()).unwrap();
//! grid.rectangle(&RectangleOptions {
//!     width: 4,
//!     height: 4,
//!     ..RectangleOptions::default()
//! });
//! println!("{}", grid.len());
//! // From here you can render/traverse the grid however you like.
//! ```
//!
//! See [HexConfig] for details on how the grid geometry can be customized.

mod config;
mod grid;
mod hex;
mod orientation;
mod screen;
pub mod shape;
mod util;

pub use crate::{
    config::HexConfig,
    grid::{Grid, HexIndexMap},
    hex::{
        CompassDirection, Coords, Hex, HexFactory, HexVector,
        InvalidCoordinates,
    },
    orientation::Orientation,
    screen::Point,
    shape::{
        HexagonOptions, ParallelogramOptions, RectangleOptions,
        TriangleDirection, TriangleOptions,
    },
    util::hexagon_len,
};
