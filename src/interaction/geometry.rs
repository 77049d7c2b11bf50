//! Board coordinate <-> world position mapping
//!
//! The one coordinate transform shared by the board view (placing tiles and
//! pawns) and the interaction controller (resolving surface hits back to
//! cells). Keeping both directions in one type is what stops the picture and
//! the click targets from drifting apart.
//!
//! The board lies in the XZ plane, centred on the origin: columns grow along
//! +X, rows along +Z, so row 0 is the far edge as seen from the default
//! camera.

use crate::game::board::Board;
use crate::game::types::Coord;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Edge length of one cell in world units
    pub cell_size: f32,
    /// Height of a tile slab; pawns stand on top of it
    pub tile_thickness: f32,
    /// Extra lift applied to the active pawn
    pub active_lift: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            cell_size: 0.5,
            tile_thickness: 0.08,
            active_lift: 0.12,
        }
    }
}

impl BoardGeometry {
    fn half_extent(count: u8) -> f32 {
        (f32::from(count) - 1.0) * 0.5
    }

    /// Centre of the cell at ground level (y = 0)
    pub fn world_position(&self, board: &Board, coord: Coord) -> Vec3 {
        Vec3::new(
            (f32::from(coord.col) - Self::half_extent(board.cols())) * self.cell_size,
            0.0,
            (f32::from(coord.row) - Self::half_extent(board.rows())) * self.cell_size,
        )
    }

    /// Where a pawn standing on `coord` is drawn
    pub fn pawn_position(&self, board: &Board, coord: Coord, active: bool) -> Vec3 {
        let lift = if active { self.active_lift } else { 0.0 };
        self.world_position(board, coord) + Vec3::Y * (self.tile_thickness + lift)
    }

    /// Inverse of [`world_position`](Self::world_position)
    ///
    /// Height is ignored. Points outside the board's bounding box give
    /// `None`; whether a cell exists there is the caller's concern.
    pub fn coord_at(&self, board: &Board, point: Vec3) -> Option<Coord> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 || !point.is_finite() {
            return None;
        }
        let col = (point.x / self.cell_size + Self::half_extent(board.cols())).round();
        let row = (point.z / self.cell_size + Self::half_extent(board.rows())).round();
        if col < 0.0 || row < 0.0 || col >= f32::from(board.cols()) || row >= f32::from(board.rows()) {
            return None;
        }
        // bounds checked above, both fit in u8
        Some(Coord::new(row as u8, col as u8))
    }
}
