//! Transient selection state owned by the interaction controller

use crate::game::board::Board;
use crate::game::types::{Coord, PawnId};
use std::collections::BTreeSet;

/// What the user is in the middle of choosing
///
/// Never part of the game state: the state bridge can seed one, but only the
/// controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    CellSelected(Coord),
    PawnSelected {
        pawn: PawnId,
        origin: Coord,
        destinations: BTreeSet<Coord>,
    },
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// The pawn currently picked up, if any
    pub fn active_pawn(&self) -> Option<PawnId> {
        match self {
            Selection::PawnSelected { pawn, .. } => Some(*pawn),
            _ => None,
        }
    }

    /// Coordinate drawn with the "selected" highlight
    pub fn anchor(&self) -> Option<Coord> {
        match self {
            Selection::Empty => None,
            Selection::CellSelected(coord) => Some(*coord),
            Selection::PawnSelected { origin, .. } => Some(*origin),
        }
    }

    pub fn is_destination(&self, coord: Coord) -> bool {
        match self {
            Selection::PawnSelected { destinations, .. } => destinations.contains(&coord),
            _ => false,
        }
    }

    /// Whether the selection still refers to live content on `board`
    ///
    /// A pawn selection is stale once the pawn is gone or no longer stands on
    /// its origin; a cell selection once the cell is gone.
    pub fn is_valid_on(&self, board: &Board) -> bool {
        match self {
            Selection::Empty => true,
            Selection::CellSelected(coord) => board.has_cell(*coord),
            Selection::PawnSelected { pawn, origin, .. } => {
                board.has_cell(*origin) && board.pawn(*pawn).is_some_and(|p| p.coord == *origin)
            }
        }
    }
}
