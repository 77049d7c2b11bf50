//! Intents emitted to the state owner
//!
//! Intents are notifications: the controller never learns whether the owner
//! accepted them. Inside the app they travel as Bevy messages; owners living
//! outside the ECS can take them through [`IntentCallbacks`].

use crate::game::types::{Coord, PawnId};
use bevy::prelude::*;
use std::fmt;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TileClicked(Coord),
    PawnMoveRequested { pawn: PawnId, from: Coord, to: Coord },
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::TileClicked(coord) => write!(f, "TileClicked{coord}"),
            Intent::PawnMoveRequested { pawn, from, to } => {
                write!(f, "PawnMoveRequested({pawn}, {from} -> {to})")
            }
        }
    }
}

/// Anything that can receive intents from the controller
pub trait IntentSink {
    fn emit(&mut self, intent: Intent);
}

impl IntentSink for Vec<Intent> {
    fn emit(&mut self, intent: Intent) {
        self.push(intent);
    }
}

impl IntentSink for MessageWriter<'_, Intent> {
    fn emit(&mut self, intent: Intent) {
        self.write(intent);
    }
}

/// Callback pair in the `onTileClick` / `onPawnMove` style
pub struct IntentCallbacks<T, P>
where
    T: FnMut(Coord),
    P: FnMut(PawnId, Coord, Coord),
{
    pub on_tile_click: T,
    pub on_pawn_move: P,
}

impl<T, P> IntentSink for IntentCallbacks<T, P>
where
    T: FnMut(Coord),
    P: FnMut(PawnId, Coord, Coord),
{
    fn emit(&mut self, intent: Intent) {
        match intent {
            Intent::TileClicked(coord) => (self.on_tile_click)(coord),
            Intent::PawnMoveRequested { pawn, from, to } => (self.on_pawn_move)(pawn, from, to),
        }
    }
}
