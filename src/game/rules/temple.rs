//! Temple Trap movement rules
//!
//! Two kinds of move exist:
//!
//! - **Pawn step**: the pawn walks from its tile to an orthogonal neighbour.
//!   The current tile must open towards the neighbour, and the neighbour must
//!   open back on the same level. Water is never entered.
//! - **Tile slide**: a tile next to the water slot slides into it. Tiles are
//!   locked while the pawn stands on the upper level, the tile carrying the
//!   pawn never moves, and the goal is fixed.
//!
//! The puzzle is solved once the pawn stands on the goal.

use super::DestinationOracle;
use crate::game::board::Board;
use crate::game::error::{GameResult, RuleError};
use crate::game::tiles::Terrain;
use crate::game::types::{Coord, Direction, Level, PawnId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single puzzle move, as reported by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    PawnStep { pawn: PawnId, from: Coord, to: Coord },
    /// Tile at `from` slides into the water at `to`
    TileSlide { from: Coord, to: Coord },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::PawnStep { pawn, from, to } => write!(f, "move pawn {pawn} {from} -> {to}"),
            Step::TileSlide { from, to } => write!(f, "slide tile {from} -> {to}"),
        }
    }
}

/// Stateless Temple Trap rules engine
#[derive(Debug, Clone, Copy, Default)]
pub struct TempleTrapRules;

impl TempleTrapRules {
    /// Cells the pawn can reach in a single step
    pub fn pawn_steps(&self, board: &Board, pawn: PawnId) -> Option<BTreeSet<Coord>> {
        let pawn = board.pawn(pawn)?;
        let here = board.terrain(pawn.coord)?;

        let steps = here
            .openings()
            .iter()
            .filter_map(|&(dir, level)| {
                let next = pawn.coord.step(dir)?;
                let cell = board.cell(next)?;
                if cell.terrain.is_water() || cell.occupant.is_some() {
                    return None;
                }
                cell.terrain.opens(dir.opposite(), level).then_some(next)
            })
            .collect();
        Some(steps)
    }

    /// Whether any tile may slide at all right now
    pub fn tiles_locked(&self, board: &Board) -> bool {
        board
            .pawns()
            .any(|p| board.terrain(p.coord).map(Terrain::level) == Some(Level::Upper))
    }

    /// Water cell the tile at `coord` would slide into
    pub fn slide_target(&self, board: &Board, coord: Coord) -> GameResult<Coord> {
        let cell = board.cell(coord).ok_or(RuleError::NoCell { coord })?;
        if !cell.terrain.is_movable() {
            return Err(RuleError::Immovable { coord });
        }
        if cell.occupant.is_some() {
            return Err(RuleError::Occupied { coord });
        }
        if self.tiles_locked(board) {
            return Err(RuleError::PawnOnUpperLevel);
        }
        Direction::ALL
            .into_iter()
            .filter_map(|dir| coord.step(dir))
            .find(|next| board.terrain(*next).is_some_and(Terrain::is_water))
            .ok_or(RuleError::NoAdjacentWater { coord })
    }

    /// Slide the tile at `coord` into the neighbouring water
    pub fn apply_slide(&self, board: &Board, coord: Coord) -> GameResult<Board> {
        let water = self.slide_target(board, coord)?;
        board
            .with_terrain_swapped(coord, water)
            .ok_or(RuleError::NoCell { coord: water })
    }

    /// Move `pawn` from `from` to `to` if that is a legal step
    pub fn apply_pawn_move(
        &self,
        board: &Board,
        pawn: PawnId,
        from: Coord,
        to: Coord,
    ) -> GameResult<Board> {
        let current = board.pawn(pawn).ok_or(RuleError::UnknownPawn { pawn })?;
        if current.coord != from {
            return Err(RuleError::StaleOrigin { pawn, from });
        }
        let steps = self.pawn_steps(board, pawn).unwrap_or_default();
        if !steps.contains(&to) {
            return Err(RuleError::Unreachable { pawn, from, to });
        }
        Ok(board.with_pawn_moved(pawn, to)?)
    }

    pub fn is_solved(&self, board: &Board) -> bool {
        board
            .pawns()
            .any(|p| board.terrain(p.coord) == Some(Terrain::Goal))
    }

    /// Every board reachable in one move, with the move that leads there
    pub fn successors(&self, board: &Board) -> Vec<(Step, Board)> {
        let mut out = Vec::new();

        for pawn in board.pawns() {
            for to in self.pawn_steps(board, pawn.id).unwrap_or_default() {
                if let Ok(next) = board.with_pawn_moved(pawn.id, to) {
                    out.push((
                        Step::PawnStep {
                            pawn: pawn.id,
                            from: pawn.coord,
                            to,
                        },
                        next,
                    ));
                }
            }
        }

        if self.tiles_locked(board) {
            return out;
        }
        for water in board
            .cells()
            .iter()
            .filter(|c| c.terrain.is_water())
            .map(|c| c.coord)
        {
            for from in Direction::ALL.into_iter().filter_map(|dir| water.step(dir)) {
                if self.slide_target(board, from).ok() != Some(water) {
                    continue;
                }
                if let Some(next) = board.with_terrain_swapped(from, water) {
                    out.push((Step::TileSlide { from, to: water }, next));
                }
            }
        }
        out
    }
}

impl DestinationOracle for TempleTrapRules {
    fn destinations(&self, board: &Board, pawn: PawnId) -> Option<BTreeSet<Coord>> {
        self.pawn_steps(board, pawn)
    }
}
