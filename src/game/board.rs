//! Board snapshot: cells, terrain and pawn occupancy
//!
//! A [`Board`] is an immutable value. Every change (a pawn step, a tile slide)
//! produces a new board, which is what the state bridge publishes and what the
//! interaction layer renders. Cells live inside a `rows x cols` bounding box
//! but the grid may be sparse: a coordinate inside the box without a cell is a
//! hole and is never clickable.
//!
//! The occupancy relation is kept a bijection by construction: pawns are the
//! source of truth, and each cell's `occupant` is derived from them when the
//! board is built.

use super::error::BoardError;
use super::tiles::Terrain;
use super::types::{Coord, PawnId, Side};
use std::collections::BTreeMap;

/// A single addressable board position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub coord: Coord,
    pub terrain: Terrain,
    pub occupant: Option<PawnId>,
}

/// A movable game piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pawn {
    pub id: PawnId,
    pub side: Side,
    pub coord: Coord,
}

impl Pawn {
    pub fn new(id: u32, coord: Coord) -> Self {
        Self {
            id: PawnId(id),
            side: Side::default(),
            coord,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Sorted by coordinate
    cells: Vec<Cell>,
    pawns: BTreeMap<PawnId, Pawn>,
}

impl Board {
    /// Build a board, validating cell placement and pawn occupancy
    pub fn new(
        rows: u8,
        cols: u8,
        cells: impl IntoIterator<Item = (Coord, Terrain)>,
        pawns: impl IntoIterator<Item = Pawn>,
    ) -> Result<Self, BoardError> {
        let mut by_coord: BTreeMap<Coord, Terrain> = BTreeMap::new();
        for (coord, terrain) in cells {
            if coord.row >= rows || coord.col >= cols {
                return Err(BoardError::CellOutOfBounds { coord, rows, cols });
            }
            if by_coord.insert(coord, terrain).is_some() {
                return Err(BoardError::DuplicateCell { coord });
            }
        }

        let mut cells: Vec<Cell> = by_coord
            .into_iter()
            .map(|(coord, terrain)| Cell {
                coord,
                terrain,
                occupant: None,
            })
            .collect();

        let mut pawn_map = BTreeMap::new();
        for pawn in pawns {
            let Ok(idx) = cells.binary_search_by_key(&pawn.coord, |c| c.coord) else {
                return Err(BoardError::PawnOffBoard {
                    pawn: pawn.id,
                    coord: pawn.coord,
                });
            };
            if let Some(first) = cells[idx].occupant {
                return Err(BoardError::CellOccupied {
                    coord: pawn.coord,
                    first,
                    second: pawn.id,
                });
            }
            if pawn_map.insert(pawn.id, pawn).is_some() {
                return Err(BoardError::DuplicatePawn { pawn: pawn.id });
            }
            cells[idx].occupant = Some(pawn.id);
        }

        Ok(Self {
            rows,
            cols,
            cells,
            pawns: pawn_map,
        })
    }

    /// Dense board with every cell set to `terrain` and no pawns
    pub fn filled(rows: u8, cols: u8, terrain: Terrain) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell {
                coord: Coord::new(row, col),
                terrain,
                occupant: None,
            }))
            .collect();
        Self {
            rows,
            cols,
            cells,
            pawns: BTreeMap::new(),
        }
    }

    /// Same board with one more pawn
    pub fn with_pawn(&self, pawn: Pawn) -> Result<Self, BoardError> {
        Board::new(
            self.rows,
            self.cols,
            self.cells.iter().map(|c| (c.coord, c.terrain)),
            self.pawns.values().copied().chain(std::iter::once(pawn)),
        )
    }

    /// Same board without the given pawn
    pub fn without_pawn(&self, id: PawnId) -> Self {
        let mut next = self.clone();
        if let Some(pawn) = next.pawns.remove(&id) {
            if let Some(cell) = next.cell_mut(pawn.coord) {
                cell.occupant = None;
            }
        }
        next
    }

    /// Same board with `id` moved to `to`
    pub fn with_pawn_moved(&self, id: PawnId, to: Coord) -> Result<Self, BoardError> {
        let pawn = self
            .pawns
            .get(&id)
            .ok_or(BoardError::UnknownPawn { pawn: id })?;
        let target = self.cell(to).ok_or(BoardError::PawnOffBoard { pawn: id, coord: to })?;
        if let Some(other) = target.occupant.filter(|other| *other != id) {
            return Err(BoardError::CellOccupied {
                coord: to,
                first: other,
                second: id,
            });
        }

        let from = pawn.coord;
        let mut next = self.clone();
        if let Some(cell) = next.cell_mut(from) {
            cell.occupant = None;
        }
        if let Some(cell) = next.cell_mut(to) {
            cell.occupant = Some(id);
        }
        if let Some(p) = next.pawns.get_mut(&id) {
            p.coord = to;
        }
        Ok(next)
    }

    /// Same board with the terrain of two cells exchanged
    ///
    /// Pawns stay where they are.
    pub fn with_terrain_swapped(&self, a: Coord, b: Coord) -> Option<Self> {
        let ta = self.cell(a)?.terrain;
        let tb = self.cell(b)?.terrain;
        let mut next = self.clone();
        next.cell_mut(a)?.terrain = tb;
        next.cell_mut(b)?.terrain = ta;
        Some(next)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Cells in coordinate order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&coord, |c| c.coord)
            .ok()
            .map(|idx| &self.cells[idx])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let idx = self.cells.binary_search_by_key(&coord, |c| c.coord).ok()?;
        Some(&mut self.cells[idx])
    }

    pub fn has_cell(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    pub fn terrain(&self, coord: Coord) -> Option<Terrain> {
        self.cell(coord).map(|c| c.terrain)
    }

    /// Pawns in id order
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> {
        self.pawns.values()
    }

    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(&id)
    }

    pub fn pawn_at(&self, coord: Coord) -> Option<&Pawn> {
        self.cell(coord)
            .and_then(|c| c.occupant)
            .and_then(|id| self.pawns.get(&id))
    }

    /// Coordinate of the first cell matching `predicate`
    pub fn find_cell(&self, predicate: impl Fn(&Cell) -> bool) -> Option<Coord> {
        self.cells.iter().find(|c| predicate(c)).map(|c| c.coord)
    }
}
