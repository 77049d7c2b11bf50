//! Scene host setup: camera, lights and the clickable base plate
//!
//! Configured once at startup from [`SceneConfig`]. Intensities are kept on
//! a 0-1 scale in the config and converted to physical units here.

use super::camera::OrbitCamera;
use super::materials::SceneAssets;
use crate::input::on_surface_click;
use crate::interaction::{BoardGeometry, BoardSnapshot};
use bevy::light::DirectionalLightShadowMap;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Ambient brightness (cd/m^2) at intensity 1.0
const AMBIENT_SCALE: f32 = 500.0;
/// Directional illuminance (lux) at intensity 1.0
const DIRECTIONAL_SCALE: f32 = 10_000.0;
/// Margin of the base plate around the board, in cells
const PLATE_MARGIN: f32 = 0.5;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera_position: [f32; 3],
    pub fov_degrees: f32,
    /// Polar angle limits of the orbit, radians from straight above
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub ambient_intensity: f32,
    pub directional_position: [f32; 3],
    pub directional_intensity: f32,
    pub shadow_map_size: usize,
    pub clear_color: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 2.6, 2.6],
            fov_degrees: 45.0,
            min_polar: PI / 4.0,
            max_polar: PI / 2.2,
            min_distance: 1.5,
            max_distance: 8.0,
            ambient_intensity: 0.4,
            directional_position: [5.0, 8.0, 5.0],
            directional_intensity: 0.7,
            shadow_map_size: 1024,
            clear_color: [0.08, 0.09, 0.12],
        }
    }
}

pub(crate) fn setup_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    geometry: Res<BoardGeometry>,
    snapshot: Res<BoardSnapshot>,
    assets: Res<SceneAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let [r, g, b] = config.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
    commands.insert_resource(DirectionalLightShadowMap {
        size: config.shadow_map_size,
    });

    let position = Vec3::from_array(config.camera_position);
    let orbit = OrbitCamera::looking_at(Vec3::ZERO, position, &config);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(orbit.translation()).looking_at(orbit.focus, Vec3::Y),
        AmbientLight {
            brightness: config.ambient_intensity * AMBIENT_SCALE,
            ..default()
        },
        orbit,
        Name::new("Board Camera"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: config.directional_intensity * DIRECTIONAL_SCALE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(config.directional_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key Light"),
    ));

    // catches clicks between tiles and over holes in the grid
    let board = &snapshot.0;
    let width = (f32::from(board.cols()) + 2.0 * PLATE_MARGIN) * geometry.cell_size;
    let depth = (f32::from(board.rows()) + 2.0 * PLATE_MARGIN) * geometry.cell_size;
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(width, 0.02, depth))),
            MeshMaterial3d(assets.plate.clone()),
            Transform::from_xyz(0.0, -0.011, 0.0),
            Name::new("Base Plate"),
        ))
        .observe(on_surface_click);

    info!(
        "[SCENE] Scene ready: {}x{} board, camera at {:?}",
        board.rows(),
        board.cols(),
        config.camera_position
    );
}
