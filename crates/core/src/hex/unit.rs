//! This sub-module contains the basic units of the hex coordinate system:
//! hexes, partial coordinate input, translation vectors, and compass
//! directions. See the parent module documentation for more info on the
//! coordinate system.

use crate::{config::HexConfig, orientation::Orientation, screen::Point};
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Sub, SubAssign,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Offset used to push a point off any exact boundary between hexes before
/// rounding, so that points which tie between two hexes resolve consistently.
/// The z component balances x and y to keep the sum at zero.
const NUDGE: HexVector = HexVector {
    x: 1e-6,
    y: 1e-6,
    z: -2e-6,
};

/// Map `-0.0` to `0.0` so it can't leak into coordinate values, where it
/// would produce a distinct display key for the same position
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Error for an explicit coordinate triple that does not lie on the hex
/// plane. Partial input can never produce this; a missing component is always
/// derived so the sum lands on zero.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("invalid hex coordinates ({x}, {y}, {z}); must be on the plane x+y+z=0")]
pub struct InvalidCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A possibly-partial set of cube coordinates. Each component can be given or
/// omitted independently; omitted components are filled in when the coords
/// are resolved into a [Hex]. This is the input type for hex construction,
/// with `From` impls for the common shapes that input takes.
///
/// Resolution rules, in order:
/// - All three given: accepted iff they sum to zero once each component is
///   rounded to its nearest integer
/// - Two given: the missing one balances the sum
/// - One given: the first missing slot (in x, y, z order) copies the given
///   value, then the last slot balances the sum
/// - None given: the zero hex
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Coords {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Coords {
    /// Construct coords with all three components explicit. This is the only
    /// form that can fail to resolve.
    pub const fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Construct coords from x and y. z is derived from the other two, since
    /// x+y+z=0 for all hexes.
    pub const fn new_xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    /// Construct coords from x and z. y is derived from the other two, since
    /// x+y+z=0 for all hexes.
    pub const fn new_xz(x: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
            z: Some(z),
        }
    }

    /// Construct coords from y and z. x is derived from the other two, since
    /// x+y+z=0 for all hexes.
    pub const fn new_yz(y: f64, z: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
            z: Some(z),
        }
    }

    /// Fill in whatever components are missing and return the full triple.
    /// Fails only when all three components were given and their rounded
    /// values don't sum to zero.
    pub fn resolve(self) -> Result<(f64, f64, f64), InvalidCoordinates> {
        let (x, y, z) = match (self.x, self.y, self.z) {
            (Some(x), Some(y), Some(z)) => {
                // Each component rounds to its nearest center before the
                // plane check, so float error on a single component can't
                // fail a triple that still rounds onto the plane
                if x.round() + y.round() + z.round() != 0.0 {
                    return Err(InvalidCoordinates { x, y, z });
                }
                (x, y, z)
            }
            (Some(x), Some(y), None) => (x, y, -x - y),
            (Some(x), None, Some(z)) => (x, -x - z, z),
            (None, Some(y), Some(z)) => (-y - z, y, z),
            // One component: the first missing slot copies the given value,
            // the remaining slot balances the sum
            (Some(x), None, None) => (x, x, -x - x),
            (None, Some(y), None) => (y, y, -y - y),
            (None, None, Some(z)) => (z, -z - z, z),
            (None, None, None) => (0.0, 0.0, 0.0),
        };
        Ok((normalize_zero(x), normalize_zero(y), normalize_zero(z)))
    }
}

impl From<(f64, f64, f64)> for Coords {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_xyz(x, y, z)
    }
}

impl From<[f64; 3]> for Coords {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new_xyz(x, y, z)
    }
}

impl From<(f64, f64)> for Coords {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new_xy(x, y)
    }
}

impl From<(Option<f64>, Option<f64>, Option<f64>)> for Coords {
    fn from((x, y, z): (Option<f64>, Option<f64>, Option<f64>)) -> Self {
        Self { x, y, z }
    }
}

/// A single value is taken as the x component
impl From<f64> for Coords {
    fn from(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
            z: None,
        }
    }
}

impl From<()> for Coords {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Hex> for Coords {
    fn from(hex: Hex) -> Self {
        Self::new_xyz(hex.x, hex.y, hex.z)
    }
}

impl From<&Hex> for Coords {
    fn from(hex: &Hex) -> Self {
        Self::new_xyz(hex.x, hex.y, hex.z)
    }
}

/// A single hex on the grid, identified by its cube coordinates. Every hex
/// carries the [HexConfig] it was built with, so screen-space questions
/// (center point, corners, extents) can be answered by the hex itself.
///
/// Coordinates are floats because intermediate values (interpolation, screen
/// point projection) are fractional; [Hex::round] snaps a fractional hex to
/// the nearest hex center. `-0.0` components are normalized away at
/// construction.
///
/// The `Display` form `(x, y, z)` is the hex's canonical key, used for
/// storage and identity. Equality compares coordinates only, not config.
#[derive(Copy, Clone, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Hex {
    x: f64,
    y: f64,
    z: f64,
    config: HexConfig,
}

// Position is identity. Two hexes at the same coordinates are the same hex,
// even if they came from grids with different geometry.
impl PartialEq for Hex {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Hex {
    /// Resolve the given coords and attach a config. Every hex is built
    /// through here; use [HexFactory](crate::HexFactory) from outside the
    /// crate.
    pub(crate) fn from_coords(
        coords: Coords,
        config: HexConfig,
    ) -> Result<Self, InvalidCoordinates> {
        let (x, y, z) = coords.resolve()?;
        Ok(Self { x, y, z, config })
    }

    /// Build a hex from components that are already known to sum to zero
    /// (outputs of rounding, interpolation, or vector translation)
    pub(crate) fn unchecked(
        x: f64,
        y: f64,
        z: f64,
        config: HexConfig,
    ) -> Self {
        debug_assert!(
            (x + y + z).round() == 0.0,
            "unchecked hex ({}, {}, {}) is off the plane x+y+z=0",
            x,
            y,
            z
        );
        Self {
            x: normalize_zero(x),
            y: normalize_zero(y),
            z: normalize_zero(z),
            config,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// The geometry settings this hex was built with
    pub fn config(&self) -> HexConfig {
        self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Distance from this hex's center to each of its corners, in screen
    /// units
    pub fn size(&self) -> f64 {
        self.config.size
    }

    /// Screen-space location of the hex `(0, 0, 0)` in this hex's grid
    pub fn origin(&self) -> Point {
        self.config.origin
    }

    pub fn is_pointy(&self) -> bool {
        self.config.orientation.is_pointy()
    }

    pub fn is_flat(&self) -> bool {
        self.config.orientation.is_flat()
    }

    /// Component-wise sum of two hexes' coordinates. The result keeps this
    /// hex's config.
    pub fn add(self, other: Hex) -> Hex {
        Hex::unchecked(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.config,
        )
    }

    /// Component-wise difference of two hexes' coordinates. The result keeps
    /// this hex's config.
    pub fn subtract(self, other: Hex) -> Hex {
        Hex::unchecked(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.config,
        )
    }

    /// Apply a translation vector. Every vector this crate hands out has
    /// components that sum to zero, so the result stays on the hex plane.
    pub fn translate(self, vector: HexVector) -> Hex {
        Hex::unchecked(
            self.x + vector.x,
            self.y + vector.y,
            self.z + vector.z,
            self.config,
        )
    }

    /// Snap fractional coordinates to the nearest hex center. Each component
    /// is rounded independently, then the component with the largest rounding
    /// error is recomputed from the other two so the sum stays zero.
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        let mut x = self.x.round();
        let mut y = self.y.round();
        let mut z = self.z.round();
        let dx = (x - self.x).abs();
        let dy = (y - self.y).abs();
        let dz = (z - self.z).abs();
        if dx > dy && dx > dz {
            x = -y - z;
        } else if dy > dz {
            y = -x - z;
        } else {
            z = -x - y;
        }
        Hex::unchecked(x, y, z, self.config)
    }

    /// Linear interpolation towards another hex. `t = 0` is this hex, `t = 1`
    /// is the other one. The result is generally fractional; pass it through
    /// [Hex::round] to land on a real hex.
    pub fn lerp(self, other: Hex, t: f64) -> Hex {
        Hex::unchecked(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.config,
        )
    }

    /// Shift this hex a tiny bit off any exact boundary, so that rounding a
    /// tied point picks a consistent winner
    pub fn nudge(self) -> Hex {
        self.translate(NUDGE)
    }

    /// Path distance to another hex, as a number of side-to-side hops. 0 for
    /// the hex itself, 1 for adjacent hexes, and so on. Fractional inputs
    /// give fractional distances.
    /// https://www.redblobgames.com/grids/hexagons/#distances
    pub fn distance(self, other: Hex) -> f64 {
        ((self.x - other.x).abs()
            + (self.y - other.y).abs()
            + (self.z - other.z).abs())
            // IMPORTANT: We divide by 2 here because two adjacent hex centers
            // are always separated by two cube edges
            / 2.0
    }

    /// The adjacent hex in the given direction
    pub fn neighbor(self, direction: CompassDirection) -> Hex {
        self.translate(direction.to_vector())
    }

    /// Iterator over all 6 adjacent hexes, in clockwise order starting with
    /// the eastern neighbor
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        CompassDirection::iter().map(move |dir| self.neighbor(dir))
    }

    /// Every hex on the straight line from this hex to the other one,
    /// endpoints included. The line is sampled at even intervals and each
    /// sample is rounded to its hex; both endpoints are nudged first so that
    /// samples falling exactly between two hexes break ties the same way
    /// along the whole line.
    pub fn hexes_between(self, other: Hex) -> impl Iterator<Item = Hex> {
        let distance = self.distance(other).round() as usize;
        let step = 1.0 / f64::max(distance as f64, 1.0);
        let nudged_self = self.nudge();
        let nudged_other = other.nudge();
        (0..=distance).map(move |i| {
            nudged_self.lerp(nudged_other, step * i as f64).round()
        })
    }

    /// Total width of this hex on screen
    pub fn width(&self) -> f64 {
        self.config.orientation.hex_width(self.config.size)
    }

    /// Total height of this hex on screen
    pub fn height(&self) -> f64 {
        self.config.orientation.hex_height(self.config.size)
    }

    /// Project this hex's center into screen space, scaling by size and
    /// shifting by the configured origin
    pub fn to_point(&self) -> Point {
        let projected = self.config.orientation.forward_matrix()
            * Vector2::new(self.x, self.y)
            * self.config.size;
        Point::new(
            projected.x + self.config.origin.x,
            projected.y + self.config.origin.y,
        )
    }

    /// The 6 corner points of this hex in screen space, clockwise, starting
    /// from the corner at [Orientation::corner_angle] index 0
    pub fn corners(&self) -> [Point; 6] {
        let center = self.to_point();
        let size = self.config.size;
        let mut corners = [Point::default(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = self.config.orientation.corner_angle(i);
            *corner = Point::new(
                center.x + size * angle.cos(),
                center.y + size * angle.sin(),
            );
        }
        corners
    }
}

/// A translation within the hex coordinate system. This is an `(x, y, z)`
/// kind of vector, not a list vector.
///
/// Unlike hexes, vectors are not validated. A vector with an arbitrary
/// component sum would carry a hex off the plane x+y+z=0, so every vector
/// produced by this crate (direction offsets and their scaled sums) keeps its
/// components summing to zero.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Display,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct HexVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HexVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The 6 directions in which a hex borders its neighbors, named for how they
/// read on screen with the default pointy orientation. For any given hex, a
/// direction can represent two useful things:
///
/// - Direction from its center to the midpoint of a single side
/// - Direction to a neighboring hex's center
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    /// East
    E,
    /// Southeast
    SE,
    /// Southwest
    SW,
    /// West
    W,
    /// Northwest
    NW,
    /// Northeast
    NE,
}

impl CompassDirection {
    /// All 6 directions in clockwise order, starting at east. Grid traversal
    /// tables are indexed by position in this list.
    pub const CLOCKWISE: &'static [Self] =
        &[Self::E, Self::SE, Self::SW, Self::W, Self::NW, Self::NE];

    /// Get the index of this direction within the clockwise ordering
    pub fn clockwise_index(self) -> usize {
        Self::CLOCKWISE.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        let index = self.clockwise_index();
        let clockwise = Self::CLOCKWISE;
        let len = clockwise.len();
        clockwise[(index + (len / 2)) % len]
    }

    /// Get a vector offset that would move a hex one step in this direction
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::E => HexVector::new(1.0, 0.0, -1.0),
            Self::SE => HexVector::new(0.0, 1.0, -1.0),
            Self::SW => HexVector::new(-1.0, 1.0, 0.0),
            Self::W => HexVector::new(-1.0, 0.0, 1.0),
            Self::NW => HexVector::new(0.0, -1.0, 1.0),
            Self::NE => HexVector::new(1.0, -1.0, 0.0),
        }
    }
}
