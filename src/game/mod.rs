//! Temple Trap game model
//!
//! Pure board model and rules, plus the local state bridge that owns the
//! board inside the app. Nothing here depends on rendering; only `bridge`
//! touches the ECS.
//!
//! # Module Organization
//!
//! - `types` - coordinates, directions, levels, pawn ids
//! - `tiles` - named tiles, orientations and their path openings
//! - `board` - immutable board snapshot with occupancy
//! - `error` - error types for board construction, layouts and rules
//! - `layout` - puzzle layouts (JSON) and built-in presets
//! - `rules` - destination oracle trait and Temple Trap rules
//! - `solver` - A* search and the puzzle solver
//! - `bridge` - local state owner applying intents

pub mod board;
pub mod bridge;
pub mod error;
pub mod layout;
pub mod rules;
pub mod solver;
pub mod tiles;
pub mod types;

pub use bridge::{LocalBridgePlugin, PuzzleProgress, PuzzleStart};
