//! Respawn domain: hazard detection, checkpoint activation, and the death timer.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameMode;
use crate::movement::{Controls, MovementState, Player};
use crate::respawn::components::{Hazard, RespawnPoint, Vitality};
use crate::respawn::coordinator::{RespawnOutcome, advance_death};
use crate::respawn::events::{HazardContact, PlayerDied, PlayerRespawned, RespawnPointActivated};
use crate::respawn::registry::RespawnRegistry;
use crate::respawn::resources::RespawnTuning;

pub(crate) fn detect_hazard_contact(
    mut collisions: MessageReader<CollisionStart>,
    hazards: Query<(), With<Hazard>>,
    players: Query<(), With<Player>>,
    mut contacts: MessageWriter<HazardContact>,
) {
    for event in collisions.read() {
        let touches_hazard =
            hazards.contains(event.collider1) || hazards.contains(event.collider2);
        let touches_player =
            players.contains(event.collider1) || players.contains(event.collider2);

        if touches_hazard && touches_player {
            contacts.write(HazardContact);
        }
    }
}

/// Kills the player: controls off, body frozen, respawn delay started.
pub(crate) fn handle_hazard_contact(
    mut commands: Commands,
    mut contacts: MessageReader<HazardContact>,
    mode: Res<State<GameMode>>,
    tuning: Res<RespawnTuning>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut Vitality,
            &mut Controls,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut deaths: MessageWriter<PlayerDied>,
) {
    for _ in contacts.read() {
        for (entity, transform, mut vitality, mut controls, mut velocity) in &mut query {
            if !vitality.on_hazard_contact(*mode.get(), tuning.respawn_delay) {
                continue;
            }

            controls.enabled = false;
            velocity.0 = Vec2::ZERO;
            commands.entity(entity).insert(RigidBodyDisabled);

            let position = transform.translation.truncate();
            info!(
                "Player died at {:?}; respawning in {}s",
                position, tuning.respawn_delay
            );
            deaths.write(PlayerDied { position });
        }
    }
}

pub(crate) fn detect_respawn_point_contact(
    mut collisions: MessageReader<CollisionStart>,
    mut registry: ResMut<RespawnRegistry>,
    mut points: Query<(&mut RespawnPoint, &Transform)>,
    players: Query<(), With<Player>>,
    mut activated: MessageWriter<RespawnPointActivated>,
) {
    for event in collisions.read() {
        let (point_entity, other) = if points.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if points.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if !players.contains(other) || !registry.activate_point(point_entity) {
            continue;
        }

        let Ok((mut point, transform)) = points.get_mut(point_entity) else {
            continue;
        };
        point.activated = true;

        let position = transform.translation.truncate();
        info!("Respawn point activated at {:?}", position);
        activated.write(RespawnPointActivated {
            point: point_entity,
            position,
        });
    }
}

/// Advances the respawn delay on virtual time and teleports once it elapses.
pub(crate) fn tick_death_timer(
    mut commands: Commands,
    time: Res<Time>,
    mode: Res<State<GameMode>>,
    registry: Res<RespawnRegistry>,
    mut query: Query<
        (
            Entity,
            &mut Vitality,
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Controls,
        ),
        With<Player>,
    >,
    mut respawned: MessageWriter<PlayerRespawned>,
) {
    for (entity, mut vitality, mut transform, mut velocity, mut movement, mut controls) in
        &mut query
    {
        let position = transform.translation.truncate();
        match advance_death(&mut vitality, &registry, position, time.delta()) {
            Some(RespawnOutcome::Teleport(destination)) => {
                transform.translation = destination.extend(transform.translation.z);
                velocity.0 = Vec2::ZERO;
                movement.reset();
                controls.apply_mode(*mode.get(), true);
                commands.entity(entity).remove::<RigidBodyDisabled>();

                info!("Player respawned at {:?}", destination);
                respawned.write(PlayerRespawned {
                    position: destination,
                });
            }
            Some(RespawnOutcome::Stranded) => {
                error!("No respawn points registered; player stays at {:?}", position);
            }
            None => {}
        }
    }
}
