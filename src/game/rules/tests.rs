//! Temple Trap rules tests
//!
//! Pure functions over hand-built boards, no ECS.
//!
//! # Test Organization
//!
//! - `test_step_*` - pawn steps (direction and level matching, water)
//! - `test_slide_*` - tile slides and their locks
//! - `test_move_*` - applying pawn moves
//! - `test_successors_*` / `test_solved_*` - search support

use super::*;
use crate::game::board::{Board, Pawn};
use crate::game::error::RuleError;
use crate::game::tiles::{Terrain, TileName};
use crate::game::types::{Coord, PawnId};
use std::collections::BTreeSet;

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

fn tile(name: TileName, orientation: u8) -> Terrain {
    Terrain::tile(name, orientation).unwrap()
}

/// One row: goal, stairs climbing to the left, then `third`
///
/// The stairs (D, orientation 3) open Left on the upper walkway and Right on
/// the floor.
fn corridor(third: Terrain, pawn_at: Coord) -> Board {
    Board::new(
        1,
        3,
        [(c(0, 0), Terrain::Goal), (c(0, 1), tile(TileName::D, 3)), (c(0, 2), third)],
        [Pawn::new(1, pawn_at)],
    )
    .unwrap()
}

fn set(coords: &[Coord]) -> BTreeSet<Coord> {
    coords.iter().copied().collect()
}

/// ```text
/// G  F1 ~~
///    G1 H3
/// ```
/// Pawn on the lower tile at (1, 1).
fn slide_board() -> Board {
    Board::new(
        2,
        3,
        [
            (c(0, 0), Terrain::Goal),
            (c(0, 1), tile(TileName::F, 1)),
            (c(0, 2), Terrain::Water),
            (c(1, 1), tile(TileName::G, 1)),
            (c(1, 2), tile(TileName::H, 3)),
        ],
        [Pawn::new(1, c(1, 1))],
    )
    .unwrap()
}

// ============================================================================
// Pawn steps
// ============================================================================

#[test]
fn test_step_follows_matching_levels() {
    let rules = TempleTrapRules;

    // floor corner opening Left meets the stairs' floor exit
    let board = corridor(tile(TileName::F, 2), c(0, 2));
    assert_eq!(rules.pawn_steps(&board, PawnId(1)), Some(set(&[c(0, 1)])));

    // on the stairs: upper exit to the goal, floor exit back to the corner
    let board = corridor(tile(TileName::F, 2), c(0, 1));
    assert_eq!(rules.pawn_steps(&board, PawnId(1)), Some(set(&[c(0, 0), c(0, 2)])));
}

#[test]
fn test_step_rejects_level_mismatch() {
    // A opens Left on the upper walkway, the stairs' right exit is on the floor
    let board = corridor(tile(TileName::A, 2), c(0, 1));
    assert_eq!(TempleTrapRules.pawn_steps(&board, PawnId(1)), Some(set(&[c(0, 0)])));
}

#[test]
fn test_step_rejects_direction_mismatch() {
    // F1 opens Right and Down, nothing faces the stairs
    let board = corridor(tile(TileName::F, 1), c(0, 1));
    assert_eq!(TempleTrapRules.pawn_steps(&board, PawnId(1)), Some(set(&[c(0, 0)])));
}

#[test]
fn test_step_never_enters_water() {
    let board = corridor(Terrain::Water, c(0, 1));
    let steps = TempleTrapRules.pawn_steps(&board, PawnId(1)).unwrap();
    assert!(!steps.contains(&c(0, 2)));
}

#[test]
fn test_step_unknown_pawn() {
    let board = corridor(Terrain::Water, c(0, 1));
    assert_eq!(TempleTrapRules.pawn_steps(&board, PawnId(9)), None);
    assert_eq!(RulesEngine::default().oracle().destinations(&board, PawnId(9)), None);
}

// ============================================================================
// Tile slides
// ============================================================================

#[test]
fn test_slide_into_adjacent_water() {
    let rules = TempleTrapRules;
    let board = slide_board();

    assert_eq!(rules.slide_target(&board, c(0, 1)), Ok(c(0, 2)));
    assert_eq!(rules.slide_target(&board, c(1, 2)), Ok(c(0, 2)));

    let after = rules.apply_slide(&board, c(0, 1)).unwrap();
    assert_eq!(after.terrain(c(0, 2)), Some(tile(TileName::F, 1)));
    assert_eq!(after.terrain(c(0, 1)), Some(Terrain::Water));
    assert_eq!(after.pawn(PawnId(1)).map(|p| p.coord), Some(c(1, 1)));
}

#[test]
fn test_slide_rejections() {
    let rules = TempleTrapRules;
    let board = slide_board();

    assert_eq!(rules.slide_target(&board, c(1, 1)), Err(RuleError::Occupied { coord: c(1, 1) }));
    assert_eq!(rules.slide_target(&board, c(0, 0)), Err(RuleError::Immovable { coord: c(0, 0) }));
    assert_eq!(rules.slide_target(&board, c(0, 2)), Err(RuleError::Immovable { coord: c(0, 2) }));
    assert_eq!(rules.slide_target(&board, c(1, 0)), Err(RuleError::NoCell { coord: c(1, 0) }));
}

#[test]
fn test_slide_needs_orthogonal_water() {
    let board = Board::new(
        2,
        2,
        [
            (c(0, 0), Terrain::Goal),
            (c(0, 1), tile(TileName::F, 1)),
            (c(1, 0), Terrain::Water),
            (c(1, 1), tile(TileName::G, 1)),
        ],
        [Pawn::new(1, c(1, 1))],
    )
    .unwrap();
    // (0, 1) only touches the water diagonally
    assert_eq!(
        TempleTrapRules.slide_target(&board, c(0, 1)),
        Err(RuleError::NoAdjacentWater { coord: c(0, 1) })
    );
}

#[test]
fn test_slide_locked_while_pawn_on_upper_level() {
    let rules = TempleTrapRules;
    let with_pawn_on = |pawn_tile: Terrain| {
        Board::new(
            2,
            3,
            [
                (c(0, 0), Terrain::Goal),
                (c(0, 1), tile(TileName::F, 1)),
                (c(0, 2), Terrain::Water),
                (c(1, 1), pawn_tile),
            ],
            [Pawn::new(1, c(1, 1))],
        )
        .unwrap()
    };

    let upper = with_pawn_on(tile(TileName::A, 1));
    assert!(rules.tiles_locked(&upper));
    assert_eq!(rules.slide_target(&upper, c(0, 1)), Err(RuleError::PawnOnUpperLevel));
    assert!(rules.successors(&upper).iter().all(|(step, _)| matches!(step, Step::PawnStep { .. })));

    // stairs count as the lower level
    let stairs = with_pawn_on(tile(TileName::E, 1));
    assert!(!rules.tiles_locked(&stairs));
    assert_eq!(rules.slide_target(&stairs, c(0, 1)), Ok(c(0, 2)));
}

// ============================================================================
// Pawn moves
// ============================================================================

#[test]
fn test_move_applies_legal_step() {
    let board = corridor(tile(TileName::F, 2), c(0, 2));
    let after = TempleTrapRules
        .apply_pawn_move(&board, PawnId(1), c(0, 2), c(0, 1))
        .unwrap();
    assert_eq!(after.pawn_at(c(0, 1)).map(|p| p.id), Some(PawnId(1)));
    assert!(after.pawn_at(c(0, 2)).is_none());
}

#[test]
fn test_move_rejections() {
    let rules = TempleTrapRules;
    let board = corridor(tile(TileName::F, 2), c(0, 2));

    assert_eq!(
        rules.apply_pawn_move(&board, PawnId(1), c(0, 1), c(0, 0)),
        Err(RuleError::StaleOrigin { pawn: PawnId(1), from: c(0, 1) })
    );
    assert_eq!(
        rules.apply_pawn_move(&board, PawnId(1), c(0, 2), c(0, 0)),
        Err(RuleError::Unreachable { pawn: PawnId(1), from: c(0, 2), to: c(0, 0) })
    );
    assert_eq!(
        rules.apply_pawn_move(&board, PawnId(4), c(0, 2), c(0, 1)),
        Err(RuleError::UnknownPawn { pawn: PawnId(4) })
    );
}

// ============================================================================
// Search support
// ============================================================================

#[test]
fn test_successors_cover_steps_and_slides() {
    let board = slide_board();
    let moves: Vec<Step> = TempleTrapRules
        .successors(&board)
        .into_iter()
        .map(|(step, _)| step)
        .collect();

    // G1 opens Right and Down: (1, 2) is H3 which opens Right and Up, no step
    assert!(moves.contains(&Step::TileSlide { from: c(0, 1), to: c(0, 2) }));
    assert!(moves.contains(&Step::TileSlide { from: c(1, 2), to: c(0, 2) }));
    assert!(!moves.iter().any(|m| matches!(m, Step::TileSlide { from, .. } if *from == c(1, 1))));
    assert!(!moves.iter().any(|m| matches!(m, Step::PawnStep { .. })));
}

#[test]
fn test_solved_when_pawn_on_goal() {
    let rules = TempleTrapRules;
    let board = corridor(Terrain::Water, c(0, 1));
    assert!(!rules.is_solved(&board));
    let after = rules.apply_pawn_move(&board, PawnId(1), c(0, 1), c(0, 0)).unwrap();
    assert!(rules.is_solved(&after));
}
