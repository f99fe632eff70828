use crate::{orientation::Orientation, screen::Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Geometry settings shared by every hex in a grid. The config is attached to
/// each hex when it is built, so a hex can always answer questions about its
/// own screen-space shape without a grid in hand. Two hexes built from the
/// same config at the same coordinates are indistinguishable.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexConfig {
    /// Whether hexes sit corner-up or side-up on screen
    pub orientation: Orientation,

    /// Distance from a hex's center to each of its corners, in screen units.
    /// Must be positive; a hex with zero or negative size has no usable
    /// screen projection.
    #[validate(custom = "validate_size")]
    pub size: f64,

    /// Screen-space point that the hex at `(0, 0, 0)` is centered on
    pub origin: Point,
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            size: 1.0,
            origin: Point::new(0.0, 0.0),
        }
    }
}

fn validate_size(size: f64) -> Result<(), ValidationError> {
    // A NaN size fails this comparison, so it gets rejected too
    if size > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("positive"))
    }
}
