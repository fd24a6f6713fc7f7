//! Skills domain: input handling, unlocks, forced deactivation, and the Mask follow scan.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameModeChanged;
use crate::movement::{Controls, Player};
use crate::respawn::{PlayerDied, Vitality};
use crate::skills::components::{SkillAura, SkillPickup};
use crate::skills::effects::apply_skill_effect;
use crate::skills::events::{SkillChanged, UnlockSkillRequest};
use crate::skills::mask::MaskField;
use crate::skills::resources::{SkillInput, SkillTuning};
use crate::skills::state::{SkillEffect, SkillSlot, SkillState};
use crate::world::{CommandSwitch, FilterColor, ObjectLayer, ObjectSwitch, TagRegistry, Taggable};

const COLOR_KEYS: [(KeyCode, FilterColor); 5] = [
    (KeyCode::Digit1, FilterColor::Red),
    (KeyCode::Digit2, FilterColor::Blue),
    (KeyCode::Digit3, FilterColor::Green),
    (KeyCode::Digit4, FilterColor::Yellow),
    (KeyCode::Digit5, FilterColor::Purple),
];

/// Applies effects to the world and publishes them, in order.
fn commit_effects(
    effects: &[SkillEffect],
    registry: &TagRegistry,
    mask: &mut MaskField,
    switch: &mut impl ObjectSwitch,
    changed: &mut MessageWriter<SkillChanged>,
) {
    for effect in effects {
        info!("Skill effect: {:?}", effect);
        apply_skill_effect(effect, registry, mask, switch);
        changed.write(SkillChanged { effect: *effect });
    }
}

pub(crate) fn read_skill_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<SkillInput>,
) {
    input.switch_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.toggle_pressed =
        mouse.just_pressed(MouseButton::Right) || keyboard.just_pressed(KeyCode::KeyE);
    input.color = COLOR_KEYS
        .iter()
        .find(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, color)| *color);
}

pub(crate) fn handle_skill_input(
    mut commands: Commands,
    input: Res<SkillInput>,
    registry: Res<TagRegistry>,
    mut query: Query<(&mut SkillState, &mut MaskField, &Controls, &Vitality), With<Player>>,
    mut changed: MessageWriter<SkillChanged>,
) {
    for (mut skills, mut mask, controls, vitality) in &mut query {
        let effects = skills.handle_input(&input, controls.enabled && vitality.is_alive());
        if effects.is_empty() {
            continue;
        }

        let mut switch = CommandSwitch::new(&mut commands);
        commit_effects(&effects, &registry, &mut mask, &mut switch, &mut changed);
    }
}

pub(crate) fn detect_skill_pickups(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    pickups: Query<&SkillPickup>,
    players: Query<Entity, With<Player>>,
    mut requests: MessageWriter<UnlockSkillRequest>,
) {
    let Ok(player) = players.single() else {
        for _ in collisions.read() {}
        return;
    };

    for event in collisions.read() {
        let (pickup_entity, other) = if pickups.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if pickups.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player {
            continue;
        }

        let Ok(pickup) = pickups.get(pickup_entity) else {
            continue;
        };

        requests.write(UnlockSkillRequest { slot: pickup.slot });
        commands.entity(pickup_entity).despawn();
    }
}

pub(crate) fn handle_unlock_requests(
    mut commands: Commands,
    mut requests: MessageReader<UnlockSkillRequest>,
    registry: Res<TagRegistry>,
    mut query: Query<(&mut SkillState, &mut MaskField), With<Player>>,
    mut changed: MessageWriter<SkillChanged>,
) {
    for request in requests.read() {
        for (mut skills, mut mask) in &mut query {
            let effects = skills.unlock(request.slot);
            let mut switch = CommandSwitch::new(&mut commands);
            commit_effects(&effects, &registry, &mut mask, &mut switch, &mut changed);
        }
    }
}

fn force_deactivate(
    commands: &mut Commands,
    registry: &TagRegistry,
    query: &mut Query<(&mut SkillState, &mut MaskField), With<Player>>,
    changed: &mut MessageWriter<SkillChanged>,
) {
    for (mut skills, mut mask) in query.iter_mut() {
        let Some(effect) = skills.deactivate() else {
            continue;
        };
        let mut switch = CommandSwitch::new(commands);
        commit_effects(&[effect], registry, &mut mask, &mut switch, changed);
    }
}

/// Leaving Playing always drops the active skill.
pub(crate) fn deactivate_on_mode_change(
    mut commands: Commands,
    mut changes: MessageReader<GameModeChanged>,
    registry: Res<TagRegistry>,
    mut query: Query<(&mut SkillState, &mut MaskField), With<Player>>,
    mut changed: MessageWriter<SkillChanged>,
) {
    let leaving_play = changes.read().any(|change| !change.to.accepts_input());
    if leaving_play {
        force_deactivate(&mut commands, &registry, &mut query, &mut changed);
    }
}

pub(crate) fn deactivate_on_death(
    mut commands: Commands,
    mut deaths: MessageReader<PlayerDied>,
    registry: Res<TagRegistry>,
    mut query: Query<(&mut SkillState, &mut MaskField), With<Player>>,
    mut changed: MessageWriter<SkillChanged>,
) {
    if deaths.read().count() > 0 {
        force_deactivate(&mut commands, &registry, &mut query, &mut changed);
    }
}

/// Rescans the Mask's surroundings every tick while it is active.
pub(crate) fn follow_mask(
    mut commands: Commands,
    tuning: Res<SkillTuning>,
    registry: Res<TagRegistry>,
    mut players: Query<(&Transform, &SkillState, &mut MaskField), With<Player>>,
    objects: Query<&Transform, With<Taggable>>,
) {
    for (transform, skills, mut mask) in &mut players {
        if !skills.mask_active() {
            continue;
        }

        let center = transform.translation.truncate();
        let candidates = registry
            .matching(skills.color(), ObjectLayer::Mask)
            .iter()
            .filter_map(|&entity| {
                objects
                    .get(entity)
                    .ok()
                    .map(|object| (entity, object.translation.truncate()))
            });

        let scan = mask.rescan(center, tuning.mask_radius, candidates);
        let mut switch = CommandSwitch::new(&mut commands);
        for entity in scan.revealed {
            switch.set_enabled(entity, true);
        }
        for entity in scan.hidden {
            switch.set_enabled(entity, false);
        }
    }
}

pub(crate) fn sync_skill_aura(
    tuning: Res<SkillTuning>,
    mut changes: MessageReader<SkillChanged>,
    players: Query<&SkillState, With<Player>>,
    mut auras: Query<(&mut Sprite, &mut Visibility), With<SkillAura>>,
) {
    if changes.read().count() == 0 {
        return;
    }

    let Ok(skills) = players.single() else {
        return;
    };

    let size = match skills.current_slot() {
        SkillSlot::Mask => Vec2::splat(tuning.mask_radius * 2.0),
        SkillSlot::Filter => Vec2::splat(1.6),
    };

    for (mut sprite, mut visibility) in &mut auras {
        sprite.color = skills.color().overlay_tint();
        sprite.custom_size = Some(size);
        *visibility = if skills.is_active() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
