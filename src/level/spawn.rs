//! Level domain: spawning level geometry, hazards, checkpoints, and pickups from data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ActiveLevel, LevelDef, RectDef, TaggedObjectDef};
use crate::level::components::LevelEntity;
use crate::movement::{GameLayer, Ground};
use crate::respawn::{Hazard, RespawnPoint, RespawnRegistry};
use crate::skills::{SkillPickup, SkillSlot};
use crate::world::Taggable;

const GROUND_COLOR: Color = Color::srgb(0.4, 0.45, 0.5);
const HAZARD_COLOR: Color = Color::srgb(0.6, 0.1, 0.1);
const CHECKPOINT_COLOR: Color = Color::srgb(0.85, 0.85, 0.4);

const CHECKPOINT_SIZE: Vec2 = Vec2::new(0.8, 1.5);
const PICKUP_SIZE: Vec2 = Vec2::splat(0.6);

/// Respawn point components in registration order, which is list order.
pub(crate) fn plan_respawn_points(level: &LevelDef) -> Vec<(Vec2, RespawnPoint)> {
    level
        .respawn_points
        .iter()
        .zip(0u32..)
        .map(|(def, order)| {
            (
                def.position(),
                RespawnPoint {
                    order,
                    is_default: def.is_default,
                    activated: false,
                },
            )
        })
        .collect()
}

/// Initial visibility of a tagged object: Mask-layer objects start hidden.
pub(crate) fn initial_visibility(object: &TaggedObjectDef) -> Visibility {
    if object.layer.starts_enabled() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

fn pickup_color(slot: SkillSlot) -> Color {
    match slot {
        SkillSlot::Filter => Color::srgb(0.9, 0.6, 0.2),
        SkillSlot::Mask => Color::srgb(0.5, 0.3, 0.9),
    }
}

fn sensor_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player])
}

fn solid_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player])
}

fn spawn_ground(commands: &mut Commands, rect: &RectDef) {
    commands.spawn((
        LevelEntity,
        Ground,
        Sprite {
            color: GROUND_COLOR,
            custom_size: Some(rect.size()),
            ..default()
        },
        Transform::from_translation(rect.center().extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(rect.width, rect.height),
        solid_layers(),
    ));
}

fn spawn_hazard(commands: &mut Commands, rect: &RectDef) {
    commands.spawn((
        LevelEntity,
        Hazard,
        Sprite {
            color: HAZARD_COLOR,
            custom_size: Some(rect.size()),
            ..default()
        },
        Transform::from_translation(rect.center().extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(rect.width, rect.height),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));
}

fn spawn_tagged_object(commands: &mut Commands, object: &TaggedObjectDef) {
    let rect = object.rect;
    let mut entity = commands.spawn((
        LevelEntity,
        Taggable::new(object.color, object.layer),
        Sprite {
            color: object.color.tint(),
            custom_size: Some(rect.size()),
            ..default()
        },
        Transform::from_translation(rect.center().extend(0.1)),
        initial_visibility(object),
        RigidBody::Static,
        Collider::rectangle(rect.width, rect.height),
        solid_layers(),
    ));

    if !object.layer.starts_enabled() {
        entity.insert(ColliderDisabled);
    }
}

/// Spawns every piece of a level definition and registers its respawn points.
pub(crate) fn spawn_level_content(
    commands: &mut Commands,
    level: &LevelDef,
    respawns: &mut RespawnRegistry,
) {
    for rect in &level.ground {
        spawn_ground(commands, rect);
    }

    for rect in &level.hazards {
        spawn_hazard(commands, rect);
    }

    for (position, point) in plan_respawn_points(level) {
        let entity = commands.spawn((
            LevelEntity,
            point,
            Sprite {
                color: CHECKPOINT_COLOR.with_alpha(if point.is_default { 0.2 } else { 0.5 }),
                custom_size: Some(CHECKPOINT_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(-0.1)),
            RigidBody::Static,
            Collider::rectangle(CHECKPOINT_SIZE.x, CHECKPOINT_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers(),
        ));
        respawns.register(entity.id(), position, point);
    }
    if respawns.default_count() > 1 {
        warn!("{} default respawn points; using the first by order", respawns.default_count());
    }

    for object in &level.objects {
        spawn_tagged_object(commands, object);
    }

    for pickup in &level.pickups {
        commands.spawn((
            LevelEntity,
            SkillPickup { slot: pickup.slot },
            Sprite {
                color: pickup_color(pickup.slot),
                custom_size: Some(PICKUP_SIZE),
                ..default()
            },
            Transform::from_xyz(pickup.x, pickup.y, 0.2),
            RigidBody::Static,
            Collider::rectangle(PICKUP_SIZE.x, PICKUP_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers(),
        ));
    }

    info!(
        "Spawned level '{}': {} ground, {} hazards, {} respawn points, {} objects, {} pickups",
        level.id,
        level.ground.len(),
        level.hazards.len(),
        level.respawn_points.len(),
        level.objects.len(),
        level.pickups.len()
    );
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    active: Res<ActiveLevel>,
    mut respawns: ResMut<RespawnRegistry>,
) {
    spawn_level_content(&mut commands, &active.level, &mut respawns);
}
