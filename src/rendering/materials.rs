//! Shared meshes and materials for the board scene
//!
//! Built once from [`BoardGeometry`] so tile slabs, pawns and path markers
//! match the coordinate transform. Every spawned primitive clones handles
//! from here; highlights swap the material handle, never the material.

use crate::game::tiles::Terrain;
use crate::game::types::{Level, Side};
use crate::interaction::{BoardGeometry, Highlight};
use bevy::color::palettes::tailwind::{AMBER_300, AMBER_400, SKY_400, SKY_700, STONE_800};
use bevy::prelude::*;

/// Footprint of a tile relative to its cell, leaves a visible seam
const TILE_FILL: f32 = 0.94;
/// Height of a path marker on the lower level
const LOW_MARKER: f32 = 0.01;
/// Height of a path marker on the upper walkway
const HIGH_MARKER: f32 = 0.06;

#[derive(Resource)]
pub struct SceneAssets {
    pub tile_mesh: Handle<Mesh>,
    pub water_mesh: Handle<Mesh>,
    pub pawn_mesh: Handle<Mesh>,
    pub low_marker_mesh: Handle<Mesh>,
    pub high_marker_mesh: Handle<Mesh>,

    pub goal: Handle<StandardMaterial>,
    pub upper_tile: Handle<StandardMaterial>,
    pub lower_tile: Handle<StandardMaterial>,
    pub water: Handle<StandardMaterial>,
    pub upper_path: Handle<StandardMaterial>,
    pub lower_path: Handle<StandardMaterial>,
    pub pawn: Handle<StandardMaterial>,
    pub pawn_other: Handle<StandardMaterial>,
    pub pawn_active: Handle<StandardMaterial>,
    pub selected: Handle<StandardMaterial>,
    pub reachable: Handle<StandardMaterial>,
    pub plate: Handle<StandardMaterial>,

    pub geometry: BoardGeometry,
}

impl FromWorld for SceneAssets {
    fn from_world(world: &mut World) -> Self {
        let geometry = world.get_resource::<BoardGeometry>().copied().unwrap_or_default();
        let cell = geometry.cell_size;

        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let tile_mesh = meshes.add(Cuboid::new(cell * TILE_FILL, geometry.tile_thickness, cell * TILE_FILL));
        let water_mesh = meshes.add(Cuboid::new(cell * TILE_FILL, 0.005, cell * TILE_FILL));
        let pawn_mesh = meshes.add(Capsule3d::new(cell * 0.14, cell * 0.3));
        // markers run along Z from the tile centre to its edge
        let low_marker_mesh = meshes.add(Cuboid::new(cell * 0.16, LOW_MARKER, cell * 0.47));
        let high_marker_mesh = meshes.add(Cuboid::new(cell * 0.16, HIGH_MARKER, cell * 0.47));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let mut matte = |color: Color| {
            materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.9,
                ..default()
            })
        };

        let goal = matte(Color::srgb_u8(34, 139, 34));
        let upper_tile = matte(Color::srgb_u8(230, 220, 170));
        let lower_tile = matte(Color::srgb_u8(80, 69, 19));
        let water = matte(Color::from(SKY_700));
        let upper_path = matte(Color::srgb_u8(250, 245, 225));
        let lower_path = matte(Color::srgb_u8(120, 104, 40));
        let pawn = matte(Color::srgb_u8(10, 0, 30));
        let pawn_other = matte(Color::from(SKY_400));
        let selected = matte(Color::from(AMBER_300));
        let reachable = matte(Color::srgb_u8(120, 200, 120));
        let plate = matte(Color::from(STONE_800));
        let pawn_active = materials.add(StandardMaterial {
            base_color: Color::from(AMBER_400),
            emissive: LinearRgba::from(Color::from(AMBER_400)) * 0.6,
            ..default()
        });

        Self {
            tile_mesh,
            water_mesh,
            pawn_mesh,
            low_marker_mesh,
            high_marker_mesh,
            goal,
            upper_tile,
            lower_tile,
            water,
            upper_path,
            lower_path,
            pawn,
            pawn_other,
            pawn_active,
            selected,
            reachable,
            plate,
            geometry,
        }
    }
}

impl SceneAssets {
    pub fn tile_material(&self, terrain: Terrain, highlight: Highlight) -> Handle<StandardMaterial> {
        match highlight {
            Highlight::Selected => return self.selected.clone(),
            Highlight::Reachable => return self.reachable.clone(),
            Highlight::None | Highlight::Active => {}
        }
        match terrain {
            Terrain::Goal => self.goal.clone(),
            Terrain::Water => self.water.clone(),
            Terrain::Tile { .. } if terrain.level() == Level::Upper => self.upper_tile.clone(),
            Terrain::Tile { .. } => self.lower_tile.clone(),
        }
    }

    pub fn pawn_material(&self, side: Side, highlight: Highlight) -> Handle<StandardMaterial> {
        if highlight == Highlight::Active {
            self.pawn_active.clone()
        } else if side == Side::default() {
            self.pawn.clone()
        } else {
            self.pawn_other.clone()
        }
    }

    pub fn marker(&self, level: Level) -> (Handle<Mesh>, Handle<StandardMaterial>, f32) {
        match level {
            Level::Upper => (self.high_marker_mesh.clone(), self.upper_path.clone(), HIGH_MARKER),
            _ => (self.low_marker_mesh.clone(), self.lower_path.clone(), LOW_MARKER),
        }
    }
}
