//! Debug drawing (render-only).
//!
//! Trail segments and knife colliders as gizmos, seen from a fixed overview camera.
//! Gameplay never depends on anything in here.

use bevy::prelude::*;

use crate::common::state::KnivesState;
use crate::common::tunables::Tunables;
use crate::plugins::knives::components::{ThrownKnife, TrailSegment};

#[derive(Component)]
pub struct OverviewCamera;

pub fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_systems(Startup, spawn_camera)
        .add_systems(
            Update,
            (draw_trails, draw_knives).run_if(in_state(KnivesState::Loaded)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("OverviewCamera"),
        OverviewCamera,
        Camera3d::default(),
        Transform::from_xyz(-800.0, -800.0, 600.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}

fn draw_trails(mut gizmos: Gizmos, q_segments: Query<&TrailSegment>) {
    for segment in &q_segments {
        gizmos.line(segment.start, segment.end, segment.color);
    }
}

fn draw_knives(
    mut gizmos: Gizmos,
    tunables: Res<Tunables>,
    q_knives: Query<&Transform, With<ThrownKnife>>,
) {
    for tf in &q_knives {
        let outline = Transform::from_translation(tf.translation)
            .with_rotation(tf.rotation)
            .with_scale(tunables.knife_extents);
        gizmos.cube(outline, Color::WHITE);
    }
}
