//! Temple Trap board scene
//!
//! - `game` - board model, rules, layouts, solver and the local state bridge
//! - `interaction` - board view, selection controller and intents
//! - `rendering` - Bevy scene host drawing the primitive list
//! - `input` - picking observers feeding pointer hits
//! - `core` - configuration and command line

pub mod core;
pub mod game;
pub mod input;
pub mod interaction;
pub mod rendering;
