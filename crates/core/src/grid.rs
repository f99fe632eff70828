use crate::{
    config::HexConfig,
    hex::{Coords, Hex, HexFactory},
    screen::Point,
    shape::{
        self, HexagonOptions, ParallelogramOptions, RectangleOptions,
        TriangleOptions,
    },
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// An ORDERED map of hex keys to hexes. Iteration follows insertion order,
/// and re-inserting an existing key keeps its original position. This has
/// some extra memory overhead over a plain map, but grids promise a stable
/// traversal order.
pub type HexIndexMap = IndexMap<String, Hex, FnvBuildHasher>;

/// A collection of hexes, keyed by their canonical coordinate strings,
/// together with the factory that builds hexes for it. All hexes in one grid
/// share the factory's geometry config, and iteration follows insertion
/// order.
///
/// ## Serialization
/// Grids serialize their hexes as a list rather than a map, since each hex's
/// key is derivable from its coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Factory whose config every hex in this grid shares
    factory: HexFactory,

    /// The hexes in this grid, keyed by their display form.
    // Serialize as a vec because the keys are derivable
    #[serde(with = "crate::util::hex_map_to_vec_serde")]
    hexes: HexIndexMap,
}

impl Grid {
    /// Initialize an empty grid with the given config. Returns an error if
    /// the config is invalid.
    pub fn new(config: HexConfig) -> anyhow::Result<Self> {
        let factory = HexFactory::new(config)?;
        Ok(Self {
            factory,
            hexes: HexIndexMap::default(),
        })
    }

    /// Get the factory that builds hexes for this grid
    pub fn factory(&self) -> &HexFactory {
        &self.factory
    }

    /// Build a hex under this grid's config, without storing it
    pub fn hex(&self, coords: impl Into<Coords>) -> anyhow::Result<Hex> {
        self.factory.hex(coords)
    }

    /// Number of hexes stored in this grid
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Get a reference to the map of hexes in this grid
    pub fn hexes(&self) -> &HexIndexMap {
        &self.hexes
    }

    /// Store a hex, keyed by its coordinates. Returns the hex previously
    /// stored at those coordinates, if any; replacing a hex keeps its
    /// original position in the iteration order.
    pub fn insert(&mut self, hex: Hex) -> Option<Hex> {
        self.hexes.insert(hex.to_string(), hex)
    }

    /// Look up the hex stored at the given coordinates. Input that doesn't
    /// resolve to valid coordinates isn't stored in any grid, so it comes
    /// back as `None` rather than an error.
    pub fn get(&self, coords: impl Into<Coords>) -> Option<Hex> {
        let hex = self.factory.hex(coords).ok()?;
        self.hexes.get(&hex.to_string()).copied()
    }

    /// Check whether a hex is stored at the given coordinates
    pub fn contains(&self, coords: impl Into<Coords>) -> bool {
        self.get(coords).is_some()
    }

    /// Get the first stored hex satisfying the predicate, in insertion order
    pub fn find(&self, mut predicate: impl FnMut(&Hex) -> bool) -> Option<Hex> {
        self.hexes.values().find(|hex| predicate(hex)).copied()
    }

    /// Build a new grid, under the same config, holding the hexes that
    /// satisfy the predicate. Relative order is preserved.
    pub fn filter(&self, mut predicate: impl FnMut(&Hex) -> bool) -> Grid {
        let hexes = self
            .hexes
            .iter()
            .filter(|(_, hex)| predicate(hex))
            .map(|(key, hex)| (key.clone(), *hex))
            .collect();
        Grid {
            factory: self.factory,
            hexes,
        }
    }

    /// Run a function on every stored hex, in insertion order
    pub fn for_each(&self, mut f: impl FnMut(&Hex)) {
        for hex in self.hexes.values() {
            f(hex);
        }
    }

    /// Transform every stored hex into a value, in insertion order
    pub fn map<R>(&self, mut f: impl FnMut(&Hex) -> R) -> Vec<R> {
        self.hexes.values().map(|hex| f(hex)).collect()
    }

    /// Fold the stored hexes into a single value, in insertion order
    pub fn fold<T>(&self, init: T, mut f: impl FnMut(T, &Hex) -> T) -> T {
        self.hexes.values().fold(init, |acc, hex| f(acc, hex))
    }

    /// Generate a parallelogram of hexes and store them all. See
    /// [shape::parallelogram] for the traversal.
    pub fn parallelogram(
        &mut self,
        options: &ParallelogramOptions,
    ) -> &mut Self {
        debug!("Populating grid with parallelogram {:?}", options);
        let factory = self.factory;
        let hexes = &mut self.hexes;
        shape::parallelogram(&factory, options, |hex| {
            hexes.insert(hex.to_string(), *hex);
        });
        self
    }

    /// Generate a triangle of hexes and store them all. See [shape::triangle]
    /// for the traversal.
    pub fn triangle(&mut self, options: &TriangleOptions) -> &mut Self {
        debug!("Populating grid with triangle {:?}", options);
        let factory = self.factory;
        let hexes = &mut self.hexes;
        shape::triangle(&factory, options, |hex| {
            hexes.insert(hex.to_string(), *hex);
        });
        self
    }

    /// Generate a hexagon of hexes and store them all. See [shape::hexagon]
    /// for the traversal.
    pub fn hexagon(&mut self, options: &HexagonOptions) -> &mut Self {
        debug!("Populating grid with hexagon {:?}", options);
        let factory = self.factory;
        let hexes = &mut self.hexes;
        shape::hexagon(&factory, options, |hex| {
            hexes.insert(hex.to_string(), *hex);
        });
        self
    }

    /// Generate a rectangle of hexes and store them all. See
    /// [shape::rectangle] for the traversal.
    pub fn rectangle(&mut self, options: &RectangleOptions) -> &mut Self {
        debug!("Populating grid with rectangle {:?}", options);
        let factory = self.factory;
        let hexes = &mut self.hexes;
        shape::rectangle(&factory, options, |hex| {
            hexes.insert(hex.to_string(), *hex);
        });
        self
    }

    /// Find the hex covering the given screen point. The result does not
    /// have to be stored in this grid.
    pub fn point_to_hex(&self, point: Point) -> Hex {
        self.factory.point_to_hex(point)
    }

    /// Screen-space center of the given hex
    pub fn hex_to_point(&self, hex: Hex) -> Point {
        self.factory.hex_to_point(hex)
    }

    /// Horizontal distance between the centers of hexes in adjacent columns
    pub fn col_size(&self) -> f64 {
        self.factory.col_size()
    }

    /// Vertical distance between the centers of hexes in adjacent rows
    pub fn row_size(&self) -> f64 {
        self.factory.row_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_insert_get_contains() {
        let mut grid = Grid::default();
        let hex = grid.hex((1.0, 2.0)).unwrap();
        assert_eq!(grid.insert(hex), None);
        assert_eq!(grid.len(), 1);

        assert_eq!(grid.get((1.0, 2.0)), Some(hex));
        assert_eq!(grid.get((1.0, 2.0, -3.0)), Some(hex));
        assert_eq!(grid.get(hex), Some(hex));
        assert_eq!(grid.get(()), None);
        assert!(grid.contains((1.0, 2.0)));
        assert!(!grid.contains((0.0, 0.0)));
    }

    #[test]
    fn test_negative_zero_keys_unify() {
        let mut grid = Grid::default();
        let zero = grid.hex(()).unwrap();
        grid.insert(zero);
        // Coordinate input carrying -0.0 has to land on the same key
        assert!(grid.contains((-0.0, 0.0, 0.0)));
        assert!(grid.contains((0.0, -0.0)));
    }

    #[test]
    fn test_get_unresolvable_coords() {
        let mut grid = Grid::default();
        let hex = grid.hex(()).unwrap();
        grid.insert(hex);
        // A contradictory triple can't name any stored hex
        assert_eq!(grid.get((1.0, 1.0, 1.0)), None);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut grid = Grid::default();
        let first = grid.hex((0.0, 0.0)).unwrap();
        let second = grid.hex((1.0, 0.0)).unwrap();
        grid.insert(first);
        grid.insert(second);

        // Re-inserting the first hex must not move it to the back
        assert_eq!(grid.insert(first), Some(first));
        assert_eq!(grid.len(), 2);
        let keys: Vec<&String> = grid.hexes().keys().collect();
        assert_eq!(keys, vec!["(0, 0, 0)", "(1, 0, -1)"]);
    }

    #[test]
    fn test_collection_ops() {
        let mut grid = Grid::default();
        grid.parallelogram(&ParallelogramOptions {
            width: 2,
            height: 2,
            ..ParallelogramOptions::default()
        });

        let found = grid.find(|hex| hex.x() == 1.0).unwrap();
        assert_eq!(found, grid.hex((1.0, 0.0)).unwrap());
        assert_eq!(grid.find(|hex| hex.x() > 10.0), None);

        let filtered = grid.filter(|hex| hex.y() == 0.0);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.factory().config(), grid.factory().config());

        let mut visited = 0;
        grid.for_each(|_| visited += 1);
        assert_eq!(visited, 4);

        let xs = grid.map(|hex| hex.x());
        assert_eq!(xs, vec![0.0, 1.0, 0.0, 1.0]);

        let total_y = grid.fold(0.0, |acc, hex| acc + hex.y());
        assert_eq!(total_y, 2.0);
    }

    #[test]
    fn test_shape_methods_store_hexes() {
        let mut grid = Grid::default();
        grid.hexagon(&HexagonOptions {
            radius: 2,
            ..HexagonOptions::default()
        });
        assert_eq!(grid.len(), 7);
        assert!(grid.contains(()));
        assert!(grid.contains((1.0, 0.0)));

        // Overlapping shapes share hexes instead of duplicating them
        grid.triangle(&TriangleOptions {
            size: 2,
            ..TriangleOptions::default()
        });
        assert_eq!(grid.len(), 7);
    }

    #[test]
    fn test_shape_methods_chain() {
        let mut grid = Grid::default();
        grid.parallelogram(&ParallelogramOptions {
            width: 1,
            height: 1,
            ..ParallelogramOptions::default()
        })
        .rectangle(&RectangleOptions {
            width: 2,
            height: 1,
            ..RectangleOptions::default()
        });
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_serialize_hexes_as_list() {
        let mut grid = Grid::default();
        let hex = grid.hex((1.0, 0.0)).unwrap();
        grid.insert(hex);

        let config_tokens = [
            Token::Struct {
                name: "HexConfig",
                len: 3,
            },
            Token::Str("orientation"),
            Token::UnitVariant {
                name: "Orientation",
                variant: "pointy",
            },
            Token::Str("size"),
            Token::F64(1.0),
            Token::Str("origin"),
            Token::Struct {
                name: "Point",
                len: 2,
            },
            Token::Str("x"),
            Token::F64(0.0),
            Token::Str("y"),
            Token::F64(0.0),
            Token::StructEnd,
            Token::StructEnd,
        ];

        let mut tokens = vec![
            Token::Struct {
                name: "Grid",
                len: 2,
            },
            Token::Str("factory"),
            Token::Struct {
                name: "HexFactory",
                len: 1,
            },
            Token::Str("config"),
        ];
        tokens.extend(config_tokens);
        tokens.extend([
            Token::StructEnd,
            Token::Str("hexes"),
            Token::Seq { len: Some(1) },
            Token::Struct {
                name: "Hex",
                len: 4,
            },
            Token::Str("x"),
            Token::F64(1.0),
            Token::Str("y"),
            Token::F64(0.0),
            Token::Str("z"),
            Token::F64(-1.0),
            Token::Str("config"),
        ]);
        tokens.extend(config_tokens);
        tokens.extend([Token::StructEnd, Token::SeqEnd, Token::StructEnd]);

        assert_tokens(&grid, &tokens);
    }
}
