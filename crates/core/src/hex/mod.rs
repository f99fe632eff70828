//! This module holds the core types of the hex coordinate system: hexes,
//! vectors, directions, and the factory that builds hexes from loose input.
//!
//! ## Coordinate Systems
//!
//! Two coordinate systems are in play:
//!
//! ### Cube Coordinates
//!
//! Positions on the grid use the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`x`, `y`, and `z`), and **for every
//! realized hex `x + y + z = 0`.** The grid is two-dimensional; the redundant
//! third component buys symmetric math for distances and line drawing.
//! Components are stored as floats because several operations
//! (linear interpolation, projecting a screen point back onto the grid) pass
//! through fractional coordinates before [Hex::round] snaps them to a hex
//! center.
//!
//! Coordinates can be given partially: any missing components are derived so
//! the sum lands on zero (see [Coords]). Only a fully explicit triple can be
//! contradictory, and that is the one construction error in the system.
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are plain 2D pixel-style coordinates, used when a grid
//! is drawn or hit-tested. `o` below is wherever the configured origin puts
//! the hex `(0, 0, 0)`:
//!
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//!
//! Note that y grows downward, matching pixel coordinates on screen. The
//! conversion in each direction is a 2x2 linear map whose coefficients depend
//! on the grid's [Orientation](crate::Orientation); see [Hex::to_point] and
//! [HexFactory::point_to_hex].

mod factory;
mod unit;

pub use self::{factory::*, unit::*};
