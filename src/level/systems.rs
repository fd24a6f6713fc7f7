//! Level domain: the Loading -> Playing reload flow.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::content::{ActiveLevel, DATA_DIR, load_level, report_level_issues};
use crate::core::{GameMode, ModeRequest, SessionClock};
use crate::level::components::LevelEntity;
use crate::level::spawn::spawn_level_content;
use crate::movement::{Controls, MovementState, Player, player_start};
use crate::respawn::{RespawnRegistry, Vitality};
use crate::skills::{MaskField, SkillAura, SkillChanged, SkillState, reset_for_reload};
use crate::world::{CommandSwitch, TagRegistry};

/// Despawns the current level and forgets everything registered from it.
pub(crate) fn teardown_level(
    mut commands: Commands,
    query: Query<Entity, With<LevelEntity>>,
    mut tags: ResMut<TagRegistry>,
    mut respawns: ResMut<RespawnRegistry>,
    mut clock: ResMut<SessionClock>,
) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }

    tags.clear();
    respawns.clear();
    clock.reset();
    info!("Level torn down: {} entities despawned", count);
}

/// Re-reads the active level from disk so edits show up on reload.
/// Keeps the level in memory if the file cannot be loaded.
pub(crate) fn refresh_level_data(mut active: ResMut<ActiveLevel>) {
    match load_level(Path::new(DATA_DIR), &active.level.id) {
        Ok(level) => {
            report_level_issues(&level);
            active.level = level;
        }
        Err(e) => warn!("{}; reusing the level already in memory", e),
    }
}

pub(crate) fn respawn_level(
    mut commands: Commands,
    active: Res<ActiveLevel>,
    mut respawns: ResMut<RespawnRegistry>,
) {
    spawn_level_content(&mut commands, &active.level, &mut respawns);
}

/// Puts the player back at the level start. Unlocked skills carry over;
/// the active skill and any Mask detections do not.
pub(crate) fn reset_player(
    mut commands: Commands,
    respawns: Res<RespawnRegistry>,
    tags: Res<TagRegistry>,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Vitality,
            &mut Controls,
            &mut SkillState,
            &mut MaskField,
        ),
        With<Player>,
    >,
    mut auras: Query<&mut Visibility, With<SkillAura>>,
    mut changed: MessageWriter<SkillChanged>,
) {
    let start = player_start(&respawns);

    for (
        entity,
        mut transform,
        mut velocity,
        mut movement,
        mut vitality,
        mut controls,
        mut skills,
        mut mask,
    ) in &mut players
    {
        if vitality.is_stranded() {
            info!("Reload recovers the stranded player");
        }

        transform.translation = start.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;
        movement.reset();
        vitality.revive();
        // Re-enabled by the transition back to Playing
        controls.enabled = false;

        let mut switch = CommandSwitch::new(&mut commands);
        if let Some(effect) = reset_for_reload(&mut skills, &mut mask, &tags, &mut switch) {
            changed.write(SkillChanged { effect });
        }
        commands.entity(entity).remove::<RigidBodyDisabled>();
        info!(
            "Player reset to {:?} with {} unlocked skills",
            start,
            skills.unlocked_count()
        );
    }

    for mut visibility in &mut auras {
        *visibility = Visibility::Hidden;
    }
}

pub(crate) fn finish_loading(mut requests: MessageWriter<ModeRequest>) {
    requests.write(ModeRequest {
        to: GameMode::Playing,
    });
}
