//! Picking observers that turn clicks into [`PointerHit`] messages
//!
//! Attached per entity with `.observe(...)` when the scene host spawns tiles,
//! pawns and the base plate. The observers do no board logic at all: they
//! forward what was hit and leave resolution to the interaction controller.

use crate::interaction::{PointerHit, PrimitiveId};
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Click on a tile or pawn entity
pub fn on_primitive_click(
    click: On<Pointer<Click>>,
    primitives: Query<&PrimitiveId>,
    mut hits: MessageWriter<PointerHit>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(id) = primitives.get(click.entity) else {
        warn!("[INPUT] Clicked entity {:?} has no PrimitiveId", click.entity);
        return;
    };
    trace!("[INPUT] Primitive click {:?}", id);
    hits.write(PointerHit::Primitive(*id));
}

/// Click on the board surface between primitives
pub fn on_surface_click(click: On<Pointer<Click>>, mut hits: MessageWriter<PointerHit>) {
    if !is_primary(click.event.button) {
        return;
    }
    if let Some(point) = click.event.hit.position {
        trace!("[INPUT] Surface click at {:?}", point);
        hits.write(PointerHit::Surface(point));
    }
}
