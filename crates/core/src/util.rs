/// Calculate the number of hexes in a regular hexagon based on its radius.
/// The radius counts concentric rings, with the center hex as the first ring:
/// radius 1 means 1 hex, 2 is 7 hexes, 3 is 19, etc. Radius 0 is an empty
/// shape.
pub fn hexagon_len(radius: u32) -> usize {
    if radius == 0 {
        return 0;
    }
    // A hexagon with r rings around its center has 3r^2+3r+1 hexes (a
    // reduction of a geometric sum). f(0) = 1, and we add 6r hexes for every
    // ring after that, so: 1, (+6) 7, (+12) 19, (+18) 37, ...
    let rings = (radius - 1) as usize;
    3 * rings * rings + 3 * rings + 1
}

/// Serialize a hex map as a list instead of a map. Each hex's map key is
/// derived from its coordinates, so writing keys out would duplicate data and
/// tie the wire format to the key syntax.
pub mod hex_map_to_vec_serde {
    use crate::{grid::HexIndexMap, hex::Hex};
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    /// Serialize a hex map as a list of its hexes, in insertion order
    pub fn serialize<S>(
        map: &HexIndexMap,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for hex in map.values() {
            seq.serialize_element(hex)?;
        }
        seq.end()
    }

    /// Deserialize a list of hexes into a map, re-deriving each hex's key
    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<HexIndexMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vec: Vec<Hex> = Vec::deserialize(deserializer)?;
        Ok(vec.into_iter().map(|hex| (hex.to_string(), hex)).collect())
    }
}
