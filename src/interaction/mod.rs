//! Board-interaction layer
//!
//! Maps a board snapshot onto render primitives, tracks the transient
//! selection, and turns pointer hits into intents for the state owner.
//!
//! # Module Structure
//!
//! - `geometry` - coordinate <-> world transform shared by view and controller
//! - `selection` - the selection state
//! - `view` - pure board view (`render`)
//! - `controller` - selection state machine and hit resolution
//! - `intent` - intents and intent sinks
//! - `system_sets` - per-frame ordering
//! - `plugin` - ECS wiring
//!
//! Everything except `plugin` is plain Rust and can be driven directly:
//!
//! ```
//! use temple_trap::game::board::{Board, Pawn};
//! use temple_trap::game::tiles::Terrain;
//! use temple_trap::game::types::Coord;
//! use temple_trap::interaction::{Intent, InteractionController};
//!
//! let board = Board::new(
//!     2,
//!     2,
//!     [(Coord::new(0, 0), Terrain::Goal), (Coord::new(1, 1), Terrain::Water)],
//!     [Pawn::new(1, Coord::new(0, 0))],
//! )
//! .unwrap();
//! let mut controller = InteractionController::default();
//! let mut intents: Vec<Intent> = Vec::new();
//! controller.click(Coord::new(1, 1), &board, None, &mut intents);
//! assert_eq!(intents, vec![Intent::TileClicked(Coord::new(1, 1))]);
//! ```

pub mod controller;
pub mod geometry;
pub mod intent;
pub mod plugin;
pub mod selection;
pub mod system_sets;
pub mod view;


pub use controller::{InteractionController, PointerHit};
pub use geometry::BoardGeometry;
pub use intent::{Intent, IntentCallbacks, IntentSink};
pub use plugin::{BoardInteractionPlugin, BoardSnapshot, RenderedPrimitives, SeededSelection};
pub use selection::Selection;
pub use system_sets::BoardInteractionSet;
pub use view::{render, Highlight, PrimitiveId, PrimitiveKind, RenderPrimitive};
