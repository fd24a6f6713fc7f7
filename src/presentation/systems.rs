//! Presentation domain: frame publishing, sprite facing, and camera follow.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{Facing, MovementState, Player};
use crate::presentation::frame::PresentationFrame;
use crate::presentation::resources::CameraFollow;
use crate::respawn::Vitality;

pub(crate) fn publish_frame(
    query: Query<(&MovementState, &LinearVelocity, &Vitality), With<Player>>,
    mut frames: MessageWriter<PresentationFrame>,
) {
    for (state, velocity, vitality) in &query {
        frames.write(PresentationFrame::capture(
            state,
            velocity.0,
            vitality.is_alive(),
        ));
    }
}

pub(crate) fn sync_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

pub(crate) fn follow_camera(
    time: Res<Time>,
    follow: Res<CameraFollow>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let player = player.translation.truncate();

    for mut camera in &mut cameras {
        let current = camera.translation.truncate();
        let target = follow.target(current, player);
        let next = follow.step(current, target, time.delta_secs());
        camera.translation = next.extend(camera.translation.z);
    }
}

/// Snaps the camera onto the player once it exists, avoiding a sweep on the first frames.
pub(crate) fn snap_camera(
    follow: Res<CameraFollow>,
    players: Query<&Transform, Added<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    let target = follow.snap_target(player.translation.truncate());
    for mut camera in &mut cameras {
        camera.translation = target.extend(camera.translation.z);
    }
}
