//! Local state bridge
//!
//! The authoritative owner of the board when the puzzle is played on this
//! machine. It consumes [`Intent`] messages, checks them against
//! [`TempleTrapRules`] and publishes the resulting board through
//! [`BoardSnapshot`]. Rejected intents leave the snapshot untouched and are
//! only logged; the interaction layer never hears back.
//!
//! Keyboard:
//! - `R` restores the starting board
//! - `H` logs the next move of a shortest solution

use super::board::Board;
use super::rules::TempleTrapRules;
use super::solver;
use crate::interaction::{BoardInteractionSet, BoardSnapshot, Intent};
use bevy::prelude::*;

/// Moves played so far and whether the goal was reached
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleProgress {
    pub moves: u32,
    pub solved: bool,
}

/// Board restored by a restart
#[derive(Resource, Debug, Clone)]
pub struct PuzzleStart(pub Board);

pub struct LocalBridgePlugin;

impl Plugin for LocalBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PuzzleProgress>().add_systems(
            Update,
            (restart_puzzle, log_hint, apply_intents)
                .chain()
                .in_set(BoardInteractionSet::Bridge),
        );
    }
}

/// Apply every intent of this frame in arrival order
pub fn apply_intents(
    mut intents: MessageReader<Intent>,
    mut snapshot: ResMut<BoardSnapshot>,
    mut progress: ResMut<PuzzleProgress>,
) {
    let rules = TempleTrapRules;
    for intent in intents.read() {
        if progress.solved {
            debug!("[BRIDGE] Puzzle already solved, ignoring {}", intent);
            continue;
        }

        let result = match *intent {
            Intent::TileClicked(coord) => rules.apply_slide(&snapshot.0, coord),
            Intent::PawnMoveRequested { pawn, from, to } => {
                rules.apply_pawn_move(&snapshot.0, pawn, from, to)
            }
        };

        match result {
            Ok(next) => {
                snapshot.0 = next;
                progress.moves += 1;
                info!("[BRIDGE] Applied {} (move {})", intent, progress.moves);
                if rules.is_solved(&snapshot.0) {
                    progress.solved = true;
                    info!("[BRIDGE] Puzzle solved in {} moves", progress.moves);
                }
            }
            Err(e) => warn!("[BRIDGE] Rejected {}: {}", intent, e),
        }
    }
}

fn restart_puzzle(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    start: Option<Res<PuzzleStart>>,
    mut snapshot: ResMut<BoardSnapshot>,
    mut progress: ResMut<PuzzleProgress>,
) {
    let (Some(keyboard), Some(start)) = (keyboard, start) else {
        return;
    };
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    snapshot.0 = start.0.clone();
    *progress = PuzzleProgress::default();
    info!("[BRIDGE] Puzzle restarted");
}

fn log_hint(keyboard: Option<Res<ButtonInput<KeyCode>>>, snapshot: Res<BoardSnapshot>) {
    if !keyboard.is_some_and(|k| k.just_pressed(KeyCode::KeyH)) {
        return;
    }
    // Full search on the frame the key goes down. Bounded by the tile
    // arrangements (eight tiles in nine slots) times nine pawn cells.
    match solver::solve(&snapshot.0) {
        Some(steps) => match steps.first() {
            Some(step) => info!("[BRIDGE] Hint: {} ({} moves left)", step, steps.len()),
            None => info!("[BRIDGE] Already solved"),
        },
        None => warn!("[BRIDGE] No solution from this position"),
    }
}
