//! Board view: (board, selection) -> render primitives
//!
//! A plain function producing plain data. The scene host turns the list into
//! entities; tests compare lists directly without any renderer.
//!
//! Output order is fixed: all tiles in coordinate order, then all pawns in
//! coordinate order. Identical inputs always give identical lists.

use super::geometry::BoardGeometry;
use super::selection::Selection;
use crate::game::board::Board;
use crate::game::tiles::Terrain;
use crate::game::types::{Coord, PawnId, Side};
use bevy::prelude::*;

/// Stable identity of a drawn primitive, also carried by its entity
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveId {
    Tile(Coord),
    Pawn(PawnId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Tile(Terrain),
    Pawn(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Cell-selected coordinate or origin of the selected pawn
    Selected,
    /// Legal destination of the selected pawn
    Reachable,
    /// The selected pawn itself
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPrimitive {
    pub id: PrimitiveId,
    pub kind: PrimitiveKind,
    pub translation: Vec3,
    pub highlight: Highlight,
}

pub fn render(board: &Board, selection: &Selection, geometry: &BoardGeometry) -> Vec<RenderPrimitive> {
    let anchor = selection.anchor();
    let active = selection.active_pawn();

    let tiles = board.cells().iter().map(|cell| {
        let highlight = if anchor == Some(cell.coord) {
            Highlight::Selected
        } else if selection.is_destination(cell.coord) {
            Highlight::Reachable
        } else {
            Highlight::None
        };
        RenderPrimitive {
            id: PrimitiveId::Tile(cell.coord),
            kind: PrimitiveKind::Tile(cell.terrain),
            translation: geometry.world_position(board, cell.coord),
            highlight,
        }
    });

    // cells are coordinate-sorted, so walking occupants keeps pawns in order too
    let pawns = board
        .cells()
        .iter()
        .filter_map(|cell| cell.occupant.and_then(|id| board.pawn(id)))
        .map(|pawn| {
            let is_active = active == Some(pawn.id);
            RenderPrimitive {
                id: PrimitiveId::Pawn(pawn.id),
                kind: PrimitiveKind::Pawn(pawn.side),
                translation: geometry.pawn_position(board, pawn.coord, is_active),
                highlight: if is_active { Highlight::Active } else { Highlight::None },
            }
        });

    tiles.chain(pawns).collect()
}
