//! Movement domain: locomotion systems for input, timers, and velocity.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameModeChanged;
use crate::movement::{Controls, MovementInput, MovementState, MovementTuning, Player};
use crate::respawn::Vitality;

pub(crate) fn apply_mode_to_controls(
    mut changes: MessageReader<GameModeChanged>,
    mut query: Query<(&mut Controls, &Vitality), With<Player>>,
) {
    for change in changes.read() {
        for (mut controls, vitality) in &mut query {
            controls.apply_mode(change.to, vitality.is_alive());
            debug!(
                "Controls {} for {:?}",
                if controls.enabled { "enabled" } else { "disabled" },
                change.to
            );
        }
    }
}

pub(crate) fn sample_player_input(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &Controls, &Vitality), With<Player>>,
) {
    for (mut state, controls, vitality) in &mut query {
        state.sample_input(&input, controls.enabled && vitality.is_alive(), &tuning);
    }
}

pub(crate) fn update_timers(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.decay_timers(dt, &tuning);
    }
}

pub(crate) fn integrate_movement(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity, &Vitality), With<Player>>,
) {
    for (mut state, mut velocity, vitality) in &mut query {
        let Some(outcome) = state.integrate(vitality.is_alive(), &tuning) else {
            continue;
        };

        velocity.x = outcome.horizontal_velocity;
        if let Some(jump_velocity) = outcome.jump_velocity {
            velocity.y = jump_velocity;
            debug!("Jump: grounded={}, vy={}", state.grounded, velocity.y);
        }
    }
}
