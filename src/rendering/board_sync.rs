//! Keeps scene entities in step with [`RenderedPrimitives`]
//!
//! Each primitive id maps to one entity. On every change of the primitive
//! list the entity is moved and re-materialed in place; it is respawned only
//! when its kind changed (a tile slid and a different terrain now sits on the
//! coordinate), and despawned when its id disappeared.

use super::materials::SceneAssets;
use crate::game::tiles::Terrain;
use crate::game::types::Direction;
use crate::input::on_primitive_click;
use crate::interaction::{PrimitiveId, PrimitiveKind, RenderPrimitive, RenderedPrimitives};
use bevy::picking::Pickable;
use bevy::prelude::*;
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

/// Entity currently drawing each primitive
#[derive(Resource, Default)]
pub struct SpawnedPrimitives(HashMap<PrimitiveId, (Entity, PrimitiveKind)>);

pub(crate) fn sync_primitives(
    mut commands: Commands,
    rendered: Res<RenderedPrimitives>,
    assets: Res<SceneAssets>,
    mut spawned: ResMut<SpawnedPrimitives>,
    mut entities: Query<(&mut Transform, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let mut stale: HashMap<PrimitiveId, (Entity, PrimitiveKind)> = std::mem::take(&mut spawned.0);
    let mut created = 0usize;

    for primitive in &rendered.0 {
        let reusable = stale
            .remove(&primitive.id)
            .and_then(|(entity, kind)| {
                if kind == primitive.kind {
                    Some(entity)
                } else {
                    commands.entity(entity).despawn();
                    None
                }
            })
            .filter(|entity| entities.contains(*entity));

        let entity = match reusable {
            Some(entity) => {
                if let Ok((mut transform, mut material)) = entities.get_mut(entity) {
                    transform.translation = entity_translation(primitive, &assets);
                    material.0 = material_for(primitive, &assets);
                }
                entity
            }
            None => {
                created += 1;
                spawn_primitive(&mut commands, primitive, &assets)
            }
        };
        spawned.0.insert(primitive.id, (entity, primitive.kind));
    }

    let removed = stale.len();
    for (entity, _) in stale.into_values() {
        commands.entity(entity).despawn();
    }

    debug!(
        "[SCENE] Synced {} primitives ({} spawned, {} removed)",
        rendered.0.len(),
        created,
        removed
    );
}

fn material_for(primitive: &RenderPrimitive, assets: &SceneAssets) -> Handle<StandardMaterial> {
    match primitive.kind {
        PrimitiveKind::Tile(terrain) => assets.tile_material(terrain, primitive.highlight),
        PrimitiveKind::Pawn(side) => assets.pawn_material(side, primitive.highlight),
    }
}

/// Primitive translations are ground points; meshes are centred
fn entity_translation(primitive: &RenderPrimitive, assets: &SceneAssets) -> Vec3 {
    let geometry = &assets.geometry;
    let lift = match primitive.kind {
        PrimitiveKind::Tile(Terrain::Water) => 0.0025,
        PrimitiveKind::Tile(_) => geometry.tile_thickness * 0.5,
        // capsule: radius 0.14 + half length 0.15, in cells
        PrimitiveKind::Pawn(_) => geometry.cell_size * 0.29,
    };
    primitive.translation + Vec3::Y * lift
}

fn spawn_primitive(commands: &mut Commands, primitive: &RenderPrimitive, assets: &SceneAssets) -> Entity {
    let mesh = match primitive.kind {
        PrimitiveKind::Tile(Terrain::Water) => assets.water_mesh.clone(),
        PrimitiveKind::Tile(_) => assets.tile_mesh.clone(),
        PrimitiveKind::Pawn(_) => assets.pawn_mesh.clone(),
    };
    let mut entity = commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material_for(primitive, assets)),
        Transform::from_translation(entity_translation(primitive, assets)),
        primitive.id,
        Name::new(format!("{:?}", primitive.id)),
    ));
    entity.observe(on_primitive_click);

    if let PrimitiveKind::Tile(terrain) = primitive.kind {
        let top = assets.geometry.tile_thickness * 0.5;
        let reach = assets.geometry.cell_size * 0.25;
        entity.with_children(|parent| {
            for &(dir, level) in terrain.openings() {
                let (mesh, material, height) = assets.marker(level);
                let (offset, rotation) = match dir {
                    Direction::Up => (Vec3::NEG_Z, Quat::IDENTITY),
                    Direction::Down => (Vec3::Z, Quat::IDENTITY),
                    Direction::Left => (Vec3::NEG_X, Quat::from_rotation_y(FRAC_PI_2)),
                    Direction::Right => (Vec3::X, Quat::from_rotation_y(FRAC_PI_2)),
                };
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_translation(offset * reach + Vec3::Y * (top + height * 0.5))
                        .with_rotation(rotation),
                    Pickable::IGNORE,
                ));
            }
        });
    }

    entity.id()
}
