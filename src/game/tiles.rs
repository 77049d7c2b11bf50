//! Temple tiles and their path openings
//!
//! Every movable tile is one of eight named pieces (A to H). The name fixes
//! the tile's shape and level; the orientation (1 to 4) fixes which two edges
//! the path leaves through and on which level.
//!
//! | Tiles   | Shape     | Surface |
//! |---------|-----------|---------|
//! | A, B    | L-shaped  | Upper   |
//! | C       | Lane      | Upper   |
//! | D, E    | Stairs    | Lower   |
//! | F, G, H | L-shaped  | Lower   |
//!
//! Stairs connect the two levels: one opening is on the upper walkway, the
//! other on the floor.

use super::types::{Direction, Level};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path opening: the edge a path leaves through and its level
pub type Opening = (Direction, Level);

/// Named movable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl TileName {
    pub const ALL: [TileName; 8] = [
        TileName::A,
        TileName::B,
        TileName::C,
        TileName::D,
        TileName::E,
        TileName::F,
        TileName::G,
        TileName::H,
    ];

    pub fn kind(self) -> TileKind {
        match self {
            TileName::A | TileName::B => TileKind::UpperCorner,
            TileName::C => TileKind::Lane,
            TileName::D | TileName::E => TileKind::Stairs,
            TileName::F | TileName::G | TileName::H => TileKind::LowerCorner,
        }
    }
}

impl fmt::Display for TileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tile shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    UpperCorner,
    Lane,
    Stairs,
    LowerCorner,
}

impl TileKind {
    /// Level the pawn stands on while on this tile
    pub fn surface(self) -> Level {
        match self {
            TileKind::UpperCorner | TileKind::Lane => Level::Upper,
            TileKind::Stairs | TileKind::LowerCorner => Level::Lower,
        }
    }
}

/// Tile rotation, 1 to 4
///
/// Matches the mark position on the physical tile:
///
/// ```text
/// 1 2
/// 3 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    pub fn new(value: u8) -> Option<Self> {
        (1..=4).contains(&value).then_some(Orientation(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Orientation::new(value).ok_or_else(|| format!("orientation must be in 1..=4, got {value}"))
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> Self {
        o.0
    }
}

/// What a board cell is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Fixed exit cell, upper level, open towards the board
    Goal,
    /// The single empty slot tiles slide into
    Water,
    Tile {
        name: TileName,
        orientation: Orientation,
    },
}

impl Terrain {
    pub fn tile(name: TileName, orientation: u8) -> Option<Terrain> {
        Orientation::new(orientation).map(|orientation| Terrain::Tile { name, orientation })
    }

    pub fn level(self) -> Level {
        match self {
            Terrain::Goal => Level::Upper,
            Terrain::Water => Level::Water,
            Terrain::Tile { name, .. } => name.kind().surface(),
        }
    }

    pub fn is_water(self) -> bool {
        matches!(self, Terrain::Water)
    }

    /// Whether this cell may slide into adjacent water
    pub fn is_movable(self) -> bool {
        matches!(self, Terrain::Tile { .. })
    }

    /// The two path openings of this cell (none for water)
    pub fn openings(self) -> &'static [Opening] {
        match self {
            Terrain::Water => &[],
            Terrain::Goal => &[(Direction::Right, Level::Upper)],
            Terrain::Tile { name, orientation } => match name.kind() {
                TileKind::Stairs => stairs_openings(orientation),
                TileKind::Lane => lane_openings(orientation),
                TileKind::UpperCorner => corner_openings::<true>(orientation),
                TileKind::LowerCorner => corner_openings::<false>(orientation),
            },
        }
    }

    /// Whether the path exits through `dir` at `level`
    pub fn opens(self, dir: Direction, level: Level) -> bool {
        self.openings().iter().any(|&(d, l)| d == dir && l == level)
    }
}

fn stairs_openings(o: Orientation) -> &'static [Opening] {
    use Direction::*;
    use Level::*;
    match o.get() {
        1 => &[(Up, Upper), (Down, Lower)],
        2 => &[(Right, Upper), (Left, Lower)],
        3 => &[(Left, Upper), (Right, Lower)],
        _ => &[(Up, Lower), (Down, Upper)],
    }
}

fn lane_openings(o: Orientation) -> &'static [Opening] {
    use Direction::*;
    use Level::*;
    match o.get() {
        1 | 4 => &[(Up, Upper), (Down, Upper)],
        _ => &[(Right, Upper), (Left, Upper)],
    }
}

fn corner_openings<const UPPER: bool>(o: Orientation) -> &'static [Opening] {
    use Direction::*;
    use Level::*;
    if UPPER {
        match o.get() {
            1 => &[(Right, Upper), (Down, Upper)],
            2 => &[(Left, Upper), (Down, Upper)],
            3 => &[(Right, Upper), (Up, Upper)],
            _ => &[(Left, Upper), (Up, Upper)],
        }
    } else {
        match o.get() {
            1 => &[(Right, Lower), (Down, Lower)],
            2 => &[(Left, Lower), (Down, Lower)],
            3 => &[(Right, Lower), (Up, Lower)],
            _ => &[(Left, Lower), (Up, Lower)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_range() {
        assert!(Orientation::new(0).is_none());
        assert!(Orientation::new(5).is_none());
        for v in 1..=4 {
            assert_eq!(Orientation::new(v).map(Orientation::get), Some(v));
        }
    }

    #[test]
    fn test_stairs_join_both_levels() {
        for o in 1..=4 {
            let stairs = Terrain::tile(TileName::D, o).unwrap();
            let levels: Vec<Level> = stairs.openings().iter().map(|(_, l)| *l).collect();
            assert!(levels.contains(&Level::Upper), "orientation {o}");
            assert!(levels.contains(&Level::Lower), "orientation {o}");
            assert_eq!(stairs.level(), Level::Lower);
        }
    }

    #[test]
    fn test_lane_openings_face_each_other() {
        for o in 1..=4 {
            let lane = Terrain::tile(TileName::C, o).unwrap();
            let [(a, _), (b, _)] = lane.openings() else {
                panic!("lane must have two openings");
            };
            assert_eq!(a.opposite(), *b);
        }
    }

    #[test]
    fn test_water_has_no_openings() {
        assert!(Terrain::Water.openings().is_empty());
        assert!(!Terrain::Water.is_movable());
        assert!(!Terrain::Goal.is_movable());
    }

    #[test]
    fn test_goal_opens_right_on_upper_level() {
        assert!(Terrain::Goal.opens(Direction::Right, Level::Upper));
        assert!(!Terrain::Goal.opens(Direction::Right, Level::Lower));
    }

    #[test]
    fn test_orientation_deserialize_rejects_out_of_range() {
        let ok: Orientation = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<Orientation>("7").is_err());
    }
}
