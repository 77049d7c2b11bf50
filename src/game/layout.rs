//! Puzzle layouts: where each tile sits and where the pawn starts
//!
//! The physical board has nine slots plus the fixed goal, numbered like this:
//!
//! ```text
//! 0 1 2 3
//!   4 5 6
//!   7 8 9
//! ```
//!
//! Slot 0 is the goal. The eight tiles fill eight of the slots 1-9; the one
//! left free is the water. On the [`Board`] this becomes a sparse 3x4 grid
//! whose first column only holds the goal at (0, 0).
//!
//! Layouts are plain JSON:
//!
//! ```json
//! { "pawn": 2, "tiles": { "A": { "slot": 1, "orientation": 2 }, ... } }
//! ```

use super::board::{Board, Pawn};
use super::error::LayoutError;
use super::tiles::{Orientation, Terrain, TileName};
use super::types::{Coord, Level};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const BOARD_ROWS: u8 = 3;
pub const BOARD_COLS: u8 = 4;
pub const GOAL: Coord = Coord::new(0, 0);

/// Id of the single pawn in a Temple Trap puzzle
pub const EXPLORER: u32 = 1;

/// Board coordinate of a slot number (0 is the goal)
pub fn slot_coord(slot: u8) -> Option<Coord> {
    match slot {
        0 => Some(GOAL),
        1..=9 => Some(Coord::new((slot - 1) / 3, (slot - 1) % 3 + 1)),
        _ => None,
    }
}

/// Where one tile sits and how it is turned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub slot: u8,
    pub orientation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleLayout {
    /// Starting slot of the pawn
    pub pawn: u8,
    pub tiles: BTreeMap<TileName, TilePlacement>,
}

/// Built-in puzzles: (pawn slot, placements of A..H as (slot, orientation))
///
/// The second one starts the pawn on H; on B (slot 7) it would stand on the
/// upper level, which no starting position allows.
const PRESETS: [(u8, [(u8, u8); 8]); 2] = [
    (2, [(1, 2), (4, 3), (8, 2), (2, 4), (6, 3), (3, 3), (7, 3), (9, 2)]),
    (9, [(4, 1), (7, 3), (1, 3), (2, 3), (8, 3), (3, 2), (6, 4), (9, 2)]),
];

impl PuzzleLayout {
    pub fn preset_count() -> usize {
        PRESETS.len()
    }

    /// Built-in puzzle, numbered from 1
    pub fn preset(index: usize) -> Result<Self, LayoutError> {
        let (pawn, placements) =
            index
                .checked_sub(1)
                .and_then(|i| PRESETS.get(i))
                .ok_or(LayoutError::UnknownPreset {
                    index,
                    available: PRESETS.len(),
                })?;
        let tiles = TileName::ALL
            .into_iter()
            .zip(placements.iter())
            .map(|(name, &(slot, orientation))| (name, TilePlacement { slot, orientation }))
            .collect();
        Ok(Self { pawn: *pawn, tiles })
    }

    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LayoutError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }

    /// Validate the layout and build the starting board
    pub fn to_board(&self) -> Result<Board, LayoutError> {
        let mut slots: [Option<TileName>; 10] = [None; 10];
        let mut cells = vec![(GOAL, Terrain::Goal)];

        for tile in TileName::ALL {
            let placement = self
                .tiles
                .get(&tile)
                .ok_or(LayoutError::MissingTile { tile })?;
            if !(1..=9).contains(&placement.slot) {
                return Err(LayoutError::SlotOutOfRange {
                    tile,
                    slot: placement.slot,
                });
            }
            let orientation = Orientation::new(placement.orientation).ok_or(
                LayoutError::OrientationOutOfRange {
                    tile,
                    orientation: placement.orientation,
                },
            )?;
            let slot = usize::from(placement.slot);
            if let Some(other) = slots[slot] {
                return Err(LayoutError::SlotTaken {
                    tile,
                    other,
                    slot: placement.slot,
                });
            }
            slots[slot] = Some(tile);
            if let Some(coord) = slot_coord(placement.slot) {
                cells.push((coord, Terrain::Tile { name: tile, orientation }));
            }
        }

        // eight distinct tiles in nine slots leave exactly one free
        let water_slot = (1..=9u8)
            .find(|s| slots[usize::from(*s)].is_none())
            .unwrap_or(9);
        if let Some(coord) = slot_coord(water_slot) {
            cells.push((coord, Terrain::Water));
        }

        if !(1..=9).contains(&self.pawn) {
            return Err(LayoutError::PawnOutOfRange { slot: self.pawn });
        }
        if self.pawn == water_slot {
            return Err(LayoutError::InvalidPawnSlot {
                slot: self.pawn,
                reason: "slot is water",
            });
        }
        if slots[usize::from(self.pawn)].is_some_and(|t| t.kind().surface() == Level::Upper) {
            return Err(LayoutError::InvalidPawnSlot {
                slot: self.pawn,
                reason: "tile is on the upper level",
            });
        }

        let pawn_coord = slot_coord(self.pawn).ok_or(LayoutError::PawnOutOfRange { slot: self.pawn })?;
        Ok(Board::new(
            BOARD_ROWS,
            BOARD_COLS,
            cells,
            [Pawn::new(EXPLORER, pawn_coord)],
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::error::LayoutError;

    #[test]
    fn test_slot_coords_cover_grid() {
        assert_eq!(slot_coord(0), Some(Coord::new(0, 0)));
        assert_eq!(slot_coord(1), Some(Coord::new(0, 1)));
        assert_eq!(slot_coord(3), Some(Coord::new(0, 3)));
        assert_eq!(slot_coord(4), Some(Coord::new(1, 1)));
        assert_eq!(slot_coord(9), Some(Coord::new(2, 3)));
        assert_eq!(slot_coord(10), None);
    }

    #[test]
    fn test_presets_build() {
        for i in 1..=PuzzleLayout::preset_count() {
            let board = PuzzleLayout::preset(i).unwrap().to_board().unwrap();
            assert_eq!(board.cells().len(), 10, "preset {i}");
            assert_eq!(board.pawns().count(), 1);
            assert_eq!(board.cells().iter().filter(|c| c.terrain.is_water()).count(), 1);
        }
        assert!(matches!(
            PuzzleLayout::preset(0),
            Err(LayoutError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn test_first_preset_puts_water_in_centre() {
        let board = PuzzleLayout::preset(1).unwrap().to_board().unwrap();
        assert_eq!(board.terrain(Coord::new(1, 2)), Some(Terrain::Water));
        assert_eq!(board.pawn_at(Coord::new(0, 2)).map(|p| p.id.0), Some(EXPLORER));
    }

    #[test]
    fn test_second_preset_starts_pawn_on_lower_corner() {
        let board = PuzzleLayout::preset(2).unwrap().to_board().unwrap();
        assert_eq!(board.terrain(Coord::new(1, 2)), Some(Terrain::Water));
        assert_eq!(board.pawn_at(Coord::new(2, 3)).map(|p| p.id.0), Some(EXPLORER));
        assert_eq!(board.terrain(Coord::new(2, 3)), Terrain::tile(TileName::H, 2));

        // same tiles with the pawn on B is not a legal start
        let mut layout = PuzzleLayout::preset(2).unwrap();
        layout.pawn = 7;
        assert!(matches!(
            layout.to_board(),
            Err(LayoutError::InvalidPawnSlot { slot: 7, .. })
        ));
    }

    #[test]
    fn test_rejects_shared_slot() {
        let mut layout = PuzzleLayout::preset(1).unwrap();
        layout.tiles.insert(TileName::B, TilePlacement { slot: 1, orientation: 1 });
        assert!(matches!(
            layout.to_board(),
            Err(LayoutError::SlotTaken { tile: TileName::B, other: TileName::A, slot: 1 })
        ));
    }

    #[test]
    fn test_rejects_bad_orientation_and_missing_tile() {
        let mut layout = PuzzleLayout::preset(1).unwrap();
        layout.tiles.insert(TileName::C, TilePlacement { slot: 8, orientation: 0 });
        assert!(matches!(
            layout.to_board(),
            Err(LayoutError::OrientationOutOfRange { tile: TileName::C, .. })
        ));

        let mut layout = PuzzleLayout::preset(1).unwrap();
        layout.tiles.remove(&TileName::H);
        assert_eq!(layout.to_board(), Err(LayoutError::MissingTile { tile: TileName::H }));
    }

    #[test]
    fn test_rejects_pawn_on_water_or_upper_tile() {
        let mut layout = PuzzleLayout::preset(1).unwrap();
        layout.pawn = 5;
        assert!(matches!(
            layout.to_board(),
            Err(LayoutError::InvalidPawnSlot { slot: 5, .. })
        ));

        // A sits on slot 1 in the first preset
        layout.pawn = 1;
        assert!(matches!(
            layout.to_board(),
            Err(LayoutError::InvalidPawnSlot { slot: 1, .. })
        ));

        layout.pawn = 0;
        assert_eq!(layout.to_board(), Err(LayoutError::PawnOutOfRange { slot: 0 }));
    }

    #[test]
    fn test_json_round_trip_of_preset() {
        let layout = PuzzleLayout::preset(2).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(PuzzleLayout::from_json_str(&json).unwrap(), layout);
        assert!(matches!(
            PuzzleLayout::from_json_str("{\"pawn\": 1}"),
            Err(LayoutError::Parse(_))
        ));
    }
}
