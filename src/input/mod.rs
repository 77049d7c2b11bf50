//! Input module - picking observers
//!
//! Clicks arrive through Bevy's picking backend as `On<Pointer<Click>>`
//! observers attached to the spawned entities (`.observe(callback)`), not by
//! polling. Each observer writes a `PointerHit` message for the interaction
//! plugin to resolve in its input set.
//!
//! # Architecture
//!
//! - `pointer` - observer functions for primitives and the board surface

pub mod pointer;

pub use pointer::*;
