//! Interaction controller: pointer hits -> selection transitions -> intents
//!
//! The controller owns the [`Selection`] and nothing else. It reads the board
//! but never writes it; the only way it affects the game is by emitting
//! [`Intent`]s through an [`IntentSink`].
//!
//! # State machine
//!
//! | Selection           | Click on                | Result                          |
//! |---------------------|-------------------------|---------------------------------|
//! | Empty / CellSelected| empty cell              | emit `TileClicked`, Empty       |
//! | Empty / CellSelected| occupied cell           | PawnSelected                    |
//! | PawnSelected        | a destination           | emit `PawnMoveRequested`, Empty |
//! | PawnSelected        | its own origin          | Empty                           |
//! | PawnSelected        | another occupied cell   | PawnSelected (new pawn)         |
//! | PawnSelected        | any other cell          | Empty                           |
//!
//! Hits that resolve to nothing (off the board, a hole in a sparse grid, a
//! pawn that no longer exists) are dropped without a state change.

use super::geometry::BoardGeometry;
use super::intent::{Intent, IntentSink};
use super::selection::Selection;
use super::view::PrimitiveId;
use crate::game::board::{Board, Pawn};
use crate::game::rules::DestinationOracle;
use crate::game::types::Coord;
use bevy::prelude::*;
use std::collections::BTreeSet;

/// Raw pointer hit delivered by the scene host
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PointerHit {
    /// A drawn tile or pawn was clicked
    Primitive(PrimitiveId),
    /// A world-space point on the board surface was clicked
    Surface(Vec3),
}

#[derive(Resource, Debug, Default)]
pub struct InteractionController {
    selection: Selection,
}

impl InteractionController {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Map a hit back to the board coordinate it refers to
    pub fn resolve(&self, hit: PointerHit, board: &Board, geometry: &BoardGeometry) -> Option<Coord> {
        let coord = match hit {
            PointerHit::Primitive(PrimitiveId::Tile(coord)) => coord,
            PointerHit::Primitive(PrimitiveId::Pawn(id)) => board.pawn(id)?.coord,
            PointerHit::Surface(point) => geometry.coord_at(board, point)?,
        };
        board.has_cell(coord).then_some(coord)
    }

    /// Resolve and apply one hit. Returns false when the hit was ignored.
    pub fn handle_hit(
        &mut self,
        hit: PointerHit,
        board: &Board,
        geometry: &BoardGeometry,
        oracle: Option<&dyn DestinationOracle>,
        sink: &mut impl IntentSink,
    ) -> bool {
        match self.resolve(hit, board, geometry) {
            Some(coord) => {
                self.click(coord, board, oracle, sink);
                true
            }
            None => {
                debug!("[INTERACTION] Ignoring unresolvable hit {:?}", hit);
                false
            }
        }
    }

    /// Apply a click on `coord`
    pub fn click(
        &mut self,
        coord: Coord,
        board: &Board,
        oracle: Option<&dyn DestinationOracle>,
        sink: &mut impl IntentSink,
    ) {
        if !board.has_cell(coord) {
            return;
        }
        if !self.selection.is_valid_on(board) {
            self.selection = Selection::Empty;
        }

        self.selection = match std::mem::take(&mut self.selection) {
            Selection::PawnSelected {
                pawn,
                origin,
                destinations,
            } => {
                if coord == origin {
                    debug!("[INTERACTION] Deselected pawn {}", pawn);
                    Selection::Empty
                } else if destinations.contains(&coord) {
                    let intent = Intent::PawnMoveRequested {
                        pawn,
                        from: origin,
                        to: coord,
                    };
                    info!("[INTERACTION] {}", intent);
                    sink.emit(intent);
                    Selection::Empty
                } else if let Some(other) = board.pawn_at(coord) {
                    Self::select_pawn(other, board, oracle)
                } else {
                    Selection::Empty
                }
            }
            Selection::Empty | Selection::CellSelected(_) => match board.pawn_at(coord) {
                Some(pawn) => Self::select_pawn(pawn, board, oracle),
                None => {
                    let intent = Intent::TileClicked(coord);
                    info!("[INTERACTION] {}", intent);
                    sink.emit(intent);
                    Selection::Empty
                }
            },
        };
    }

    fn select_pawn(pawn: &Pawn, board: &Board, oracle: Option<&dyn DestinationOracle>) -> Selection {
        let destinations = oracle
            .and_then(|o| o.destinations(board, pawn.id))
            .unwrap_or_default();
        let destinations = Self::existing_cells(board, pawn.coord, destinations);
        debug!(
            "[INTERACTION] Selected pawn {} at {} with {} destinations",
            pawn.id,
            pawn.coord,
            destinations.len()
        );
        Selection::PawnSelected {
            pawn: pawn.id,
            origin: pawn.coord,
            destinations,
        }
    }

    fn existing_cells(board: &Board, origin: Coord, coords: BTreeSet<Coord>) -> BTreeSet<Coord> {
        coords
            .into_iter()
            .filter(|c| *c != origin && board.has_cell(*c))
            .collect()
    }

    /// Bring the selection in line with a fresh board snapshot
    ///
    /// A seeded selection replaces the current one before validation. Stale
    /// selections fall back to Empty; surviving pawn selections get their
    /// destinations recomputed. Returns true when the selection was reset.
    pub fn reconcile(
        &mut self,
        board: &Board,
        seeded: Option<Selection>,
        oracle: Option<&dyn DestinationOracle>,
    ) -> bool {
        let candidate = seeded.unwrap_or_else(|| std::mem::take(&mut self.selection));
        if !candidate.is_valid_on(board) {
            debug!("[INTERACTION] Dropping stale selection {:?}", candidate);
            self.selection = Selection::Empty;
            return true;
        }

        self.selection = match candidate {
            Selection::PawnSelected {
                pawn,
                origin,
                destinations,
            } => {
                let destinations = oracle
                    .and_then(|o| o.destinations(board, pawn))
                    .unwrap_or(destinations);
                Selection::PawnSelected {
                    pawn,
                    origin,
                    destinations: Self::existing_cells(board, origin, destinations),
                }
            }
            other => other,
        };
        false
    }

    /// Explicit cancel, no intent
    pub fn cancel(&mut self) {
        self.selection = Selection::Empty;
    }
}
