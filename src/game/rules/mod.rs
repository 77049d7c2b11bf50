//! Rules module - Pure game logic without ECS coupling
//!
//! The interaction layer never decides legality itself. It asks a
//! [`DestinationOracle`] which cells a pawn may reach and otherwise only
//! emits intents. The state bridge uses [`TempleTrapRules`] to accept or
//! reject those intents.
//!
//! # Module Structure
//!
//! - `temple` - Temple Trap movement rules (pawn steps, tile slides, goal test)

pub mod temple;

#[cfg(test)]
mod tests;

use crate::game::board::Board;
use crate::game::types::{Coord, PawnId};
use bevy::prelude::*;
use std::collections::BTreeSet;

pub use temple::{Step, TempleTrapRules};

/// Legal-destination collaborator
///
/// Returns `None` when it cannot answer for this pawn (unknown pawn, engine
/// not ready). Callers treat that the same as an empty set.
pub trait DestinationOracle {
    fn destinations(&self, board: &Board, pawn: PawnId) -> Option<BTreeSet<Coord>>;
}

impl<F> DestinationOracle for F
where
    F: Fn(&Board, PawnId) -> Option<BTreeSet<Coord>>,
{
    fn destinations(&self, board: &Board, pawn: PawnId) -> Option<BTreeSet<Coord>> {
        self(board, pawn)
    }
}

/// Rules engine slot used by the interaction plugin
///
/// Absent resource means no legality information: pawns remain selectable
/// but no destinations are highlighted.
#[derive(Resource)]
pub struct RulesEngine(pub Box<dyn DestinationOracle + Send + Sync>);

impl RulesEngine {
    pub fn new(oracle: impl DestinationOracle + Send + Sync + 'static) -> Self {
        Self(Box::new(oracle))
    }

    pub fn oracle(&self) -> &dyn DestinationOracle {
        self.0.as_ref()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(TempleTrapRules)
    }
}
