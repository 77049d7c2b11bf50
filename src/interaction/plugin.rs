//! Board interaction plugin
//!
//! Wires the pure controller and board view into the ECS. The plugin only
//! depends on resources and messages, never on rendering, so it runs under
//! `MinimalPlugins` in tests.
//!
//! # Resources
//!
//! - [`BoardSnapshot`] - current board, written by the state owner only
//! - [`SeededSelection`] - optional selection imposed by the state owner,
//!   consumed on the next reconciliation
//! - [`InteractionController`] - owns the selection
//! - [`RenderedPrimitives`] - latest view output, read by the scene host
//! - [`BoardGeometry`] - shared coordinate transform
//!
//! # Messages
//!
//! - [`PointerHit`] in, [`Intent`] out

use super::controller::{InteractionController, PointerHit};
use super::geometry::BoardGeometry;
use super::intent::Intent;
use super::selection::Selection;
use super::system_sets::BoardInteractionSet;
use super::view::{render, RenderPrimitive};
use crate::game::board::Board;
use crate::game::rules::{DestinationOracle, RulesEngine};
use crate::game::tiles::Terrain;
use bevy::prelude::*;

/// Authoritative board published by the state owner
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BoardSnapshot(pub Board);

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self(Board::filled(0, 0, Terrain::Water))
    }
}

#[derive(Resource, Debug, Default)]
pub struct SeededSelection(pub Option<Selection>);

#[derive(Resource, Debug, Default, PartialEq)]
pub struct RenderedPrimitives(pub Vec<RenderPrimitive>);

pub struct BoardInteractionPlugin;

impl Plugin for BoardInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardSnapshot>()
            .init_resource::<SeededSelection>()
            .init_resource::<InteractionController>()
            .init_resource::<RenderedPrimitives>()
            .init_resource::<BoardGeometry>()
            .add_message::<PointerHit>()
            .add_message::<Intent>();

        // Input -> Bridge -> Reconcile -> View
        app.configure_sets(
            Update,
            (
                BoardInteractionSet::Input,
                BoardInteractionSet::Bridge,
                BoardInteractionSet::Reconcile,
                BoardInteractionSet::View,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (cancel_on_escape, route_pointer_hits)
                    .chain()
                    .in_set(BoardInteractionSet::Input),
                reconcile_selection.in_set(BoardInteractionSet::Reconcile),
                rebuild_primitives.in_set(BoardInteractionSet::View),
            ),
        );
    }
}

fn oracle<'a>(rules: &'a Option<Res<'_, RulesEngine>>) -> Option<&'a dyn DestinationOracle> {
    rules.as_deref().map(RulesEngine::oracle)
}

/// Feed every pointer hit of this frame through the controller, in order
pub fn route_pointer_hits(
    mut hits: MessageReader<PointerHit>,
    mut controller: ResMut<InteractionController>,
    snapshot: Res<BoardSnapshot>,
    geometry: Res<BoardGeometry>,
    rules: Option<Res<RulesEngine>>,
    mut intents: MessageWriter<Intent>,
) {
    for hit in hits.read() {
        controller.handle_hit(*hit, &snapshot.0, &geometry, oracle(&rules), &mut intents);
    }
}

fn cancel_on_escape(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut controller: ResMut<InteractionController>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if keyboard.just_pressed(KeyCode::Escape) && !controller.selection().is_empty() {
        debug!("[INTERACTION] Selection cancelled");
        controller.cancel();
    }
}

/// Validate the selection whenever the snapshot changes or a seed arrives
pub fn reconcile_selection(
    snapshot: Res<BoardSnapshot>,
    mut seeded: ResMut<SeededSelection>,
    mut controller: ResMut<InteractionController>,
    rules: Option<Res<RulesEngine>>,
) {
    if !snapshot.is_changed() && seeded.0.is_none() {
        return;
    }
    let seed = seeded.0.take();
    if controller.reconcile(&snapshot.0, seed, oracle(&rules)) {
        info!("[INTERACTION] Selection reset after board update");
    }
}

/// Recompute the primitive list, touching the resource only when it differs
pub fn rebuild_primitives(
    snapshot: Res<BoardSnapshot>,
    controller: Res<InteractionController>,
    geometry: Res<BoardGeometry>,
    mut primitives: ResMut<RenderedPrimitives>,
) {
    let next = render(&snapshot.0, controller.selection(), &geometry);
    primitives.set_if_neq(RenderedPrimitives(next));
}
