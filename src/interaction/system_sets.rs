//! Frame ordering for the board-interaction systems
//!
//! Each frame runs, in order:
//! 1. **Input** - pointer hits are resolved, the selection transitions, intents go out
//! 2. **Bridge** - the state owner consumes intents and may publish a new snapshot
//! 3. **Reconcile** - the selection is checked against the (possibly new) snapshot
//! 4. **View** - render primitives are rebuilt from snapshot + selection
//!
//! A state owner living in the app should put its intent handling in
//! [`BoardInteractionSet::Bridge`] so the view reflects its answer in the
//! same frame.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum BoardInteractionSet {
    /// Pointer hit routing and keyboard cancel
    Input,

    /// Intent consumers (the state bridge)
    Bridge,

    /// Selection reconciliation against the current snapshot
    Reconcile,

    /// Primitive list rebuild
    View,
}
