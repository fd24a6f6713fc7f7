//! Movement domain: player bootstrap from gameplay config and level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Controls, GameLayer, GroundProbe, MovementState, MovementTuning, Player};
use crate::respawn::{RespawnRegistry, Vitality};
use crate::skills::{MaskField, SkillAura, SkillState, SkillTuning};

/// Collider size of the player body in world units
const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.0);

/// Resolves where the player starts: the current respawn point, else the origin.
pub(crate) fn player_start(respawns: &RespawnRegistry) -> Vec2 {
    respawns.current_respawn_position().unwrap_or_else(|| {
        warn!("Level has no respawn point; spawning player at the origin");
        Vec2::ZERO
    })
}

/// Fresh skill state with the configured color and starting unlocks applied.
fn starting_skills(tuning: &SkillTuning) -> SkillState {
    let mut skills = SkillState::with_color(tuning.starting_color);
    for slot in &tuning.starting_unlocks {
        skills.unlock(*slot);
    }
    skills
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    skill_tuning: Res<SkillTuning>,
    respawns: Res<RespawnRegistry>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let start = player_start(&respawns);
    let skills = starting_skills(&skill_tuning);

    info!(
        "Spawning player at {:?}: speed={}, jump={} (apex {:.2}), unlocked skills={}",
        start,
        tuning.move_speed,
        tuning.jump_force,
        tuning.single_jump_height(),
        skills.unlocked_count()
    );

    commands
        .spawn((
            // Control state
            (
                Player,
                MovementState::default(),
                Controls::default(),
                GroundProbe {
                    offset: Vec2::new(0.0, -PLAYER_SIZE.y / 2.0),
                    radius: tuning.ground_check_radius,
                },
                Vitality::default(),
                skills,
                MaskField::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.92, 0.92, 0.92),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(start.extend(1.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                SkillAura,
                Sprite {
                    color: skill_tuning.starting_color.overlay_tint(),
                    custom_size: Some(Vec2::splat(1.6)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.5),
                Visibility::Hidden,
            ));
        });
}
