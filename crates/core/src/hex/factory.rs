use crate::{
    config::HexConfig,
    hex::{Coords, Hex},
    screen::Point,
};
use anyhow::Context;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hex factory stamps out [Hex] values that all share one [HexConfig]. A
/// factory is created from a particular config, and from there can build any
/// number of hexes (directly or by resolving screen points).
///
/// Config options cannot be changed after creating a factory, but factories
/// are very cheap to create so if you need different geometry, just create a
/// new factory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HexFactory {
    config: HexConfig,
}

impl HexFactory {
    /// Initialize a new factory with the given config. Returns an error if
    /// the config is invalid.
    pub fn new(config: HexConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid hex config")?;
        Ok(Self { config })
    }

    /// Get the config that this factory stamps onto its hexes
    pub fn config(&self) -> HexConfig {
        self.config
    }

    /// Build a hex from any coordinate input form: a full `(x, y, z)` triple
    /// (the only form that can fail), a partial component set, a lone x
    /// value, `()` for the zero hex, or an existing hex (re-stamped with this
    /// factory's config). See [Coords] for the resolution rules.
    pub fn hex(&self, coords: impl Into<Coords>) -> anyhow::Result<Hex> {
        let hex = Hex::from_coords(coords.into(), self.config)?;
        Ok(hex)
    }

    /// The hex at `(0, 0, 0)`
    pub fn origin_hex(&self) -> Hex {
        Hex::unchecked(0.0, 0.0, 0.0, self.config)
    }

    /// Find the hex that covers the given screen point. The point is shifted
    /// by the configured origin, unscaled, pushed through the inverse
    /// projection, and the fractional result is rounded to its hex center.
    /// This is the inverse of [Hex::to_point].
    pub fn point_to_hex(&self, point: Point) -> Hex {
        let config = self.config;
        let shifted = Vector2::new(
            (point.x - config.origin.x) / config.size,
            (point.y - config.origin.y) / config.size,
        );
        let fractional = config.orientation.inverse_matrix() * shifted;
        Hex::unchecked(
            fractional.x,
            fractional.y,
            -fractional.x - fractional.y,
            config,
        )
        .round()
    }

    /// Screen-space center of the given hex
    pub fn hex_to_point(&self, hex: Hex) -> Point {
        hex.to_point()
    }

    /// Horizontal distance between the centers of hexes in adjacent columns
    pub fn col_size(&self) -> f64 {
        self.config.orientation.col_spacing(self.config.size)
    }

    /// Vertical distance between the centers of hexes in adjacent rows
    pub fn row_size(&self) -> f64 {
        self.config.orientation.row_spacing(self.config.size)
    }
}
