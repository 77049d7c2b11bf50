//! Rendering module - the scene host
//!
//! Draws whatever the board view produced. Nothing here knows about
//! selection rules or game logic: it turns `RenderedPrimitives` into meshes,
//! sets up the camera and lights once, and forwards clicks through the
//! picking observers in `crate::input`.
//!
//! # Architecture
//!
//! - `scene` - `SceneConfig`, camera/light/base plate setup
//! - `camera` - orbit camera controls
//! - `materials` - shared meshes and materials
//! - `board_sync` - primitive list -> entities
//!
//! Uses `Mesh3d` / `MeshMaterial3d<StandardMaterial>` and requires
//! `MeshPickingPlugin` for the click observers to fire.

pub mod board_sync;
pub mod camera;
pub mod materials;
pub mod scene;

pub use camera::OrbitCamera;
pub use materials::SceneAssets;
pub use scene::SceneConfig;

use crate::interaction::{BoardInteractionSet, RenderedPrimitives};
use bevy::prelude::*;
use board_sync::{sync_primitives, SpawnedPrimitives};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<SpawnedPrimitives>()
            .add_systems(Startup, (init_scene_assets, scene::setup_scene).chain())
            .add_systems(
                Update,
                (
                    camera::orbit_camera_system,
                    sync_primitives
                        .after(BoardInteractionSet::View)
                        .run_if(resource_changed::<RenderedPrimitives>),
                ),
            );
    }
}

fn init_scene_assets(mut commands: Commands) {
    commands.init_resource::<SceneAssets>();
}
