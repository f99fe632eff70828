use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use strum::EnumString;

const SQRT_3: f64 = 1.7320508075688772; // sqrt(3)

/// The two ways a hexagon can sit on the screen: with a corner pointing up
/// (pointy) or with a flat side up (flat). All the math that projects hexes
/// into screen space keys off this, so it has to be fixed per grid rather
/// than per operation.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Corner up; rows of hexes interlock horizontally
    #[default]
    Pointy,
    /// Side up; columns of hexes interlock vertically
    Flat,
}

impl Orientation {
    pub fn is_pointy(self) -> bool {
        matches!(self, Self::Pointy)
    }

    pub fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }

    /// The 2D linear map that projects cube `(x, y)` onto screen space. The
    /// result still has to be scaled by hex size and offset by the grid
    /// origin. Coefficients per
    /// https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
    pub(crate) fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => {
                Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0)
            }
            Self::Flat => Matrix2::new(3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3),
        }
    }

    /// Inverse of [Self::forward_matrix]: maps a screen point (already
    /// origin-shifted and divided by hex size) back onto fractional cube
    /// `(x, y)`.
    pub(crate) fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }

    /// Angle from a hex's center to one of its corners, in radians. Corners
    /// are indexed 0-5 going clockwise in screen space (y points down).
    /// Corner 0 sits at -30 degrees for pointy hexes and 0 degrees for flat
    /// ones, so pointy corner 1 sits directly below corner 0.
    pub fn corner_angle(self, corner: usize) -> f64 {
        let offset = match self {
            Self::Pointy => -30.0,
            Self::Flat => 0.0,
        };
        (60.0 * corner as f64 + offset).to_radians()
    }

    /// Total width of a single hex, in screen units
    pub fn hex_width(self, size: f64) -> f64 {
        match self {
            Self::Pointy => SQRT_3 * size,
            Self::Flat => 2.0 * size,
        }
    }

    /// Total height of a single hex, in screen units
    pub fn hex_height(self, size: f64) -> f64 {
        match self {
            Self::Pointy => 2.0 * size,
            Self::Flat => SQRT_3 * size,
        }
    }

    /// Horizontal distance between the centers of two hexes in adjacent
    /// columns. Interlocking makes this less than a full hex width for flat
    /// tops.
    pub fn col_spacing(self, size: f64) -> f64 {
        match self {
            Self::Pointy => self.hex_width(size),
            Self::Flat => 0.75 * self.hex_width(size),
        }
    }

    /// Vertical distance between the centers of two hexes in adjacent rows.
    /// Interlocking makes this less than a full hex height for pointy tops.
    pub fn row_spacing(self, size: f64) -> f64 {
        match self {
            Self::Pointy => 0.75 * self.hex_height(size),
            Self::Flat => self.hex_height(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Vector2;
    use std::str::FromStr;

    #[test]
    fn test_inverse_matrix_fractions() {
        // The fractional cube coordinates for screen point (1, 1) at size 1
        let pointy =
            Orientation::Pointy.inverse_matrix() * Vector2::new(1.0, 1.0);
        assert_approx_eq!(pointy.x, 0.2440169);
        assert_approx_eq!(pointy.y, 0.6666667);

        let flat = Orientation::Flat.inverse_matrix() * Vector2::new(1.0, 1.0);
        assert_approx_eq!(flat.x, 0.6666667);
        assert_approx_eq!(flat.y, 0.2440169);
    }

    #[test]
    fn test_matrices_invert() {
        for orientation in [Orientation::Pointy, Orientation::Flat] {
            let product =
                orientation.forward_matrix() * orientation.inverse_matrix();
            assert_approx_eq!(product[(0, 0)], 1.0);
            assert_approx_eq!(product[(0, 1)], 0.0);
            assert_approx_eq!(product[(1, 0)], 0.0);
            assert_approx_eq!(product[(1, 1)], 1.0);
        }
    }

    #[test]
    fn test_corner_angles() {
        // Pointy corner 0 is up-right of center, corner 1 straight down from
        // that, so the first edge is the hex's right side
        assert_approx_eq!(
            Orientation::Pointy.corner_angle(0),
            (-30.0f64).to_radians()
        );
        assert_approx_eq!(
            Orientation::Pointy.corner_angle(3),
            150.0f64.to_radians()
        );
        assert_approx_eq!(Orientation::Flat.corner_angle(0), 0.0);
        assert_approx_eq!(
            Orientation::Flat.corner_angle(5),
            300.0f64.to_radians()
        );
    }

    #[test]
    fn test_extents() {
        assert_approx_eq!(Orientation::Pointy.hex_width(20.0), 34.6410161);
        assert_approx_eq!(Orientation::Pointy.hex_height(20.0), 40.0);
        assert_approx_eq!(Orientation::Flat.hex_width(20.0), 40.0);
        assert_approx_eq!(Orientation::Flat.hex_height(20.0), 34.6410161);
    }

    #[test]
    fn test_spacing() {
        assert_approx_eq!(Orientation::Pointy.col_spacing(20.0), 34.6410161);
        assert_approx_eq!(Orientation::Pointy.row_spacing(20.0), 30.0);
        assert_approx_eq!(Orientation::Flat.col_spacing(20.0), 30.0);
        assert_approx_eq!(Orientation::Flat.row_spacing(20.0), 34.6410161);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Orientation::from_str("pointy"), Ok(Orientation::Pointy));
        assert_eq!(Orientation::from_str("flat"), Ok(Orientation::Flat));
        assert!(Orientation::from_str("diagonal").is_err());
    }
}
