use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point in 2D screen space. Hex coordinates have 3 components, screen
/// coordinates only have 2. Use [crate::Hex::to_point] to project a hex's
/// position into this space, and [crate::HexFactory::point_to_hex] to go the
/// other way.
///
/// ## Screen Coordinates
///
/// Right is positive x, left is negative x. Down is positive y, up is negative
/// y, which matches how pixel coordinates work on screen. The hex at
/// `(0, 0, 0)` is centered on the configured origin point.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
