//! Error types for game module
//!
//! Board construction, puzzle layout validation and rule checks. None of these
//! reach the interaction layer: it only ever sees boards that were already
//! built successfully, and rejected intents are reported by the state bridge.

use super::tiles::TileName;
use super::types::{Coord, PawnId};

/// Errors raised while assembling a [`Board`](super::board::Board)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {coord} lies outside the {rows}x{cols} board")]
    CellOutOfBounds { coord: Coord, rows: u8, cols: u8 },

    #[error("cell {coord} declared twice")]
    DuplicateCell { coord: Coord },

    #[error("pawn {pawn} declared twice")]
    DuplicatePawn { pawn: PawnId },

    #[error("pawn {pawn} stands on {coord}, which is not a board cell")]
    PawnOffBoard { pawn: PawnId, coord: Coord },

    #[error("pawns {first} and {second} both occupy {coord}")]
    CellOccupied {
        coord: Coord,
        first: PawnId,
        second: PawnId,
    },

    #[error("pawn {pawn} is not on the board")]
    UnknownPawn { pawn: PawnId },
}

/// Errors raised while validating a puzzle layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("tile {tile} is missing from the layout")]
    MissingTile { tile: TileName },

    #[error("tile {tile}: slot {slot} is outside 1..=9")]
    SlotOutOfRange { tile: TileName, slot: u8 },

    #[error("tile {tile}: orientation {orientation} is outside 1..=4")]
    OrientationOutOfRange { tile: TileName, orientation: u8 },

    #[error("tile {tile}: slot {slot} is already taken by tile {other}")]
    SlotTaken {
        tile: TileName,
        other: TileName,
        slot: u8,
    },

    #[error("pawn slot {slot} is outside 1..=9")]
    PawnOutOfRange { slot: u8 },

    #[error("pawn cannot start on slot {slot}: {reason}")]
    InvalidPawnSlot { slot: u8, reason: &'static str },

    #[error("unknown preset {index}, expected 1..={available}")]
    UnknownPreset { index: usize, available: usize },

    #[error("failed to read layout: {0}")]
    Io(String),

    #[error("failed to parse layout: {0}")]
    Parse(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Reasons the rules engine refuses an intent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("pawn {pawn} is not on the board")]
    UnknownPawn { pawn: PawnId },

    #[error("pawn {pawn} is not at {from}")]
    StaleOrigin { pawn: PawnId, from: Coord },

    #[error("pawn {pawn} cannot reach {to} from {from}")]
    Unreachable { pawn: PawnId, from: Coord, to: Coord },

    #[error("no cell at {coord}")]
    NoCell { coord: Coord },

    #[error("cell {coord} cannot slide")]
    Immovable { coord: Coord },

    #[error("cell {coord} carries a pawn")]
    Occupied { coord: Coord },

    #[error("tiles are locked while a pawn stands on the upper level")]
    PawnOnUpperLevel,

    #[error("no water next to {coord}")]
    NoAdjacentWater { coord: Coord },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, RuleError>;
