//! Orbit camera: right-drag to rotate around the board, wheel to zoom
//!
//! Left clicks are left to picking. The polar angle is measured from straight
//! above and clamped so the camera never dips under the table or looks
//! straight down.

use super::scene::SceneConfig;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Radians per mouse movement dot
pub const RADIANS_PER_DOT: f32 = 1.0 / 180.0;
/// Distance change per scroll line, as a fraction of the current distance
const ZOOM_STEP: f32 = 0.1;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    /// Angle around the vertical axis, 0 looks from +Z
    pub azimuth: f32,
    /// Angle from the vertical axis
    pub polar: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

pub fn clamp_polar(polar: f32, min: f32, max: f32) -> f32 {
    if min <= max {
        polar.clamp(min, max)
    } else {
        polar.clamp(max, min)
    }
}

impl OrbitCamera {
    /// Orbit that starts at `position`, limits taken from the config
    pub fn looking_at(focus: Vec3, position: Vec3, config: &SceneConfig) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(f32::EPSILON);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let min_radius = config.min_distance.min(config.max_distance);
        let max_radius = config.min_distance.max(config.max_distance);
        Self {
            focus,
            radius: radius.clamp(min_radius, max_radius),
            azimuth,
            polar: clamp_polar(polar, config.min_polar, config.max_polar),
            min_polar: config.min_polar,
            max_polar: config.max_polar,
            min_radius,
            max_radius,
        }
    }

    pub fn translation(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.focus + self.radius * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    /// Rotate by a mouse delta in dots
    pub fn orbit(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * RADIANS_PER_DOT;
        self.polar = clamp_polar(
            self.polar - delta.y * RADIANS_PER_DOT,
            self.min_polar,
            self.max_polar,
        );
    }

    /// Positive scroll moves closer
    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius * (1.0 - scroll * ZOOM_STEP)).clamp(self.min_radius, self.max_radius);
    }
}

pub(crate) fn orbit_camera_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let rotating = mouse_button.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO;
    let zooming = mouse_scroll.delta.y != 0.0;
    if !rotating && !zooming {
        return;
    }

    for (mut transform, mut orbit) in query.iter_mut() {
        if rotating {
            orbit.orbit(mouse_motion.delta);
        }
        if zooming {
            orbit.zoom(mouse_scroll.delta.y);
        }
        *transform = Transform::from_translation(orbit.translation()).looking_at(orbit.focus, Vec3::Y);
    }
}
