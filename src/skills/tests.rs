//! Skills domain: unit tests for the skill state machine, Mask scans, and effect application.

use bevy::prelude::*;

use super::{
    MaskField, SkillEffect, SkillInput, SkillSlot, SkillState, apply_skill_effect,
    reset_for_reload,
};
use crate::core::GameMode;
use crate::movement::Controls;
use crate::world::{FilterColor, ObjectLayer, ObjectSwitch, TagRegistry, Taggable};

#[derive(Default)]
struct RecordingSwitch {
    calls: Vec<(Entity, bool)>,
}

impl ObjectSwitch for RecordingSwitch {
    fn set_enabled(&mut self, entity: Entity, enabled: bool) {
        self.calls.push((entity, enabled));
    }
}

fn fully_unlocked() -> SkillState {
    let mut skills = SkillState::default();
    skills.unlock(SkillSlot::Filter);
    skills.unlock(SkillSlot::Mask);
    skills
}

// -----------------------------------------------------------------------------
// SkillState tests
// -----------------------------------------------------------------------------

#[test]
fn test_unlock_is_idempotent() {
    let mut skills = SkillState::default();

    assert_eq!(
        skills.unlock(SkillSlot::Mask),
        vec![SkillEffect::Unlocked(SkillSlot::Mask)]
    );
    assert!(skills.unlock(SkillSlot::Mask).is_empty());
    assert_eq!(skills.unlocked_count(), 1);
}

#[test]
fn test_first_unlock_selects_slot() {
    let mut skills = SkillState::default();
    skills.unlock(SkillSlot::Mask);
    assert_eq!(skills.current_slot(), SkillSlot::Mask);

    // Later unlocks leave the selection alone
    skills.unlock(SkillSlot::Filter);
    assert_eq!(skills.current_slot(), SkillSlot::Mask);
}

#[test]
fn test_switch_needs_both_slots() {
    let mut skills = SkillState::default();
    skills.unlock(SkillSlot::Filter);
    skills.toggle_active();

    assert!(skills.switch_slot().is_empty());
    assert_eq!(skills.current_slot(), SkillSlot::Filter);
    assert!(skills.is_active());
}

#[test]
fn test_switch_deactivates_and_stays_inactive() {
    let mut skills = fully_unlocked();
    skills.toggle_active();
    assert!(skills.is_active());

    let effects = skills.switch_slot();
    assert_eq!(
        effects,
        vec![
            SkillEffect::Deactivated {
                slot: SkillSlot::Filter,
                color: FilterColor::Red,
            },
            SkillEffect::Switched {
                from: SkillSlot::Filter,
                to: SkillSlot::Mask,
            },
        ]
    );
    assert_eq!(skills.current_slot(), SkillSlot::Mask);
    assert!(!skills.is_active());
}

#[test]
fn test_switch_while_inactive_only_switches() {
    let mut skills = fully_unlocked();
    assert_eq!(
        skills.switch_slot(),
        vec![SkillEffect::Switched {
            from: SkillSlot::Filter,
            to: SkillSlot::Mask,
        }]
    );
}

#[test]
fn test_toggle_on_locked_slot_is_noop() {
    let mut skills = SkillState::default();
    assert!(skills.toggle_active().is_empty());
    assert!(!skills.is_active());
}

#[test]
fn test_toggle_round_trip() {
    let mut skills = SkillState::with_color(FilterColor::Green);
    skills.unlock(SkillSlot::Filter);

    assert_eq!(
        skills.toggle_active(),
        vec![SkillEffect::Activated {
            slot: SkillSlot::Filter,
            color: FilterColor::Green,
        }]
    );
    assert_eq!(
        skills.toggle_active(),
        vec![SkillEffect::Deactivated {
            slot: SkillSlot::Filter,
            color: FilterColor::Green,
        }]
    );
    assert!(!skills.is_active());
}

#[test]
fn test_same_color_is_noop() {
    let mut skills = fully_unlocked();
    skills.toggle_active();

    assert!(skills.set_color(FilterColor::Red).is_empty());
    assert!(skills.is_active());
}

#[test]
fn test_color_change_deactivates_without_reactivating() {
    let mut skills = fully_unlocked();
    skills.toggle_active();

    let effects = skills.set_color(FilterColor::Blue);
    assert_eq!(
        effects,
        vec![
            SkillEffect::Deactivated {
                slot: SkillSlot::Filter,
                color: FilterColor::Red,
            },
            SkillEffect::ColorChanged {
                from: FilterColor::Red,
                to: FilterColor::Blue,
            },
        ]
    );
    assert_eq!(skills.color(), FilterColor::Blue);
    assert!(!skills.is_active());
}

#[test]
fn test_color_change_works_while_locked() {
    let mut skills = SkillState::default();
    assert_eq!(skills.set_color(FilterColor::Purple).len(), 1);
    assert_eq!(skills.color(), FilterColor::Purple);
}

#[test]
fn test_deactivate_when_inactive_is_none() {
    let mut skills = fully_unlocked();
    assert!(skills.deactivate().is_none());
}

#[test]
fn test_mask_active_only_for_mask_slot() {
    let mut skills = fully_unlocked();
    skills.toggle_active();
    assert!(!skills.mask_active());

    skills.switch_slot();
    skills.toggle_active();
    assert!(skills.mask_active());
}

// -----------------------------------------------------------------------------
// MaskField tests
// -----------------------------------------------------------------------------

#[test]
fn test_mask_rescan_reveals_and_hides() {
    let near = Entity::from_bits(1);
    let far = Entity::from_bits(2);
    let edge = Entity::from_bits(3);
    let mut mask = MaskField::default();

    let scan = mask.rescan(
        Vec2::ZERO,
        3.0,
        [
            (near, Vec2::new(1.0, 1.0)),
            (far, Vec2::new(10.0, 0.0)),
            (edge, Vec2::new(3.0, 0.0)),
        ],
    );
    assert_eq!(scan.revealed, vec![near, edge]);
    assert!(scan.hidden.is_empty());
    assert_eq!(mask.len(), 2);

    // Player walks right: near drops out, far comes in
    let scan = mask.rescan(
        Vec2::new(8.0, 0.0),
        3.0,
        [
            (near, Vec2::new(1.0, 1.0)),
            (far, Vec2::new(10.0, 0.0)),
            (edge, Vec2::new(3.0, 0.0)),
        ],
    );
    assert_eq!(scan.revealed, vec![far]);
    assert_eq!(scan.hidden, vec![near, edge]);
    assert_eq!(mask.len(), 1);
}

#[test]
fn test_mask_rescan_without_movement_is_quiet() {
    let entity = Entity::from_bits(4);
    let mut mask = MaskField::default();
    mask.rescan(Vec2::ZERO, 2.0, [(entity, Vec2::X)]);

    let scan = mask.rescan(Vec2::ZERO, 2.0, [(entity, Vec2::X)]);
    assert!(scan.revealed.is_empty());
    assert!(scan.hidden.is_empty());
}

#[test]
fn test_mask_release_empties_set() {
    let a = Entity::from_bits(5);
    let b = Entity::from_bits(6);
    let mut mask = MaskField::default();
    mask.rescan(Vec2::ZERO, 5.0, [(b, Vec2::ZERO), (a, Vec2::Y)]);

    assert_eq!(mask.release(), vec![a, b]);
    assert!(mask.is_empty());
    assert!(mask.release().is_empty());
}

// -----------------------------------------------------------------------------
// Skill effect tests
// -----------------------------------------------------------------------------

#[test]
fn test_filter_effect_toggles_matching_interaction_objects() {
    let red_wall = Entity::from_bits(10);
    let blue_wall = Entity::from_bits(11);
    let red_hidden = Entity::from_bits(12);

    let mut registry = TagRegistry::default();
    registry.register(
        red_wall,
        Taggable::new(FilterColor::Red, ObjectLayer::Interaction),
    );
    registry.register(
        blue_wall,
        Taggable::new(FilterColor::Blue, ObjectLayer::Interaction),
    );
    registry.register(red_hidden, Taggable::new(FilterColor::Red, ObjectLayer::Mask));

    let mut mask = MaskField::default();
    let mut switch = RecordingSwitch::default();

    apply_skill_effect(
        &SkillEffect::Activated {
            slot: SkillSlot::Filter,
            color: FilterColor::Red,
        },
        &registry,
        &mut mask,
        &mut switch,
    );
    assert_eq!(switch.calls, vec![(red_wall, false)]);

    apply_skill_effect(
        &SkillEffect::Deactivated {
            slot: SkillSlot::Filter,
            color: FilterColor::Red,
        },
        &registry,
        &mut mask,
        &mut switch,
    );
    assert_eq!(switch.calls, vec![(red_wall, false), (red_wall, true)]);
}

#[test]
fn test_mask_deactivation_hides_revealed_objects() {
    let hidden = Entity::from_bits(20);
    let registry = TagRegistry::default();
    let mut mask = MaskField::default();
    mask.rescan(Vec2::ZERO, 3.0, [(hidden, Vec2::ONE)]);

    let mut switch = RecordingSwitch::default();
    apply_skill_effect(
        &SkillEffect::Activated {
            slot: SkillSlot::Mask,
            color: FilterColor::Red,
        },
        &registry,
        &mut mask,
        &mut switch,
    );
    assert!(switch.calls.is_empty());

    apply_skill_effect(
        &SkillEffect::Deactivated {
            slot: SkillSlot::Mask,
            color: FilterColor::Red,
        },
        &registry,
        &mut mask,
        &mut switch,
    );
    assert_eq!(switch.calls, vec![(hidden, false)]);
    assert!(mask.is_empty());
}

// -----------------------------------------------------------------------------
// Input and mode tests
// -----------------------------------------------------------------------------

#[test]
fn test_pause_resume_leaves_controls_enabled_and_skill_inactive() {
    let mut controls = Controls::default();
    let mut skills = fully_unlocked();
    skills.toggle_active();

    controls.apply_mode(GameMode::Paused, true);
    assert!(!controls.enabled);
    assert!(skills.deactivate().is_some());

    controls.apply_mode(GameMode::Playing, true);
    assert!(controls.enabled);
    assert!(!skills.is_active());
}

#[test]
fn test_resume_while_dead_keeps_controls_off() {
    let mut controls = Controls::default();
    controls.apply_mode(GameMode::Paused, false);
    controls.apply_mode(GameMode::Playing, false);
    assert!(!controls.enabled);
}

#[test]
fn test_toggle_in_the_pause_frame_is_dropped() {
    let mut controls = Controls::default();
    let mut skills = fully_unlocked();
    skills.toggle_active();
    let toggle = SkillInput {
        toggle_pressed: true,
        ..Default::default()
    };

    // Escape and toggle land together: controls are gated before skill input is read
    controls.apply_mode(GameMode::Paused, true);
    skills.deactivate();
    assert!(skills.handle_input(&toggle, controls.enabled).is_empty());
    assert!(!skills.is_active());

    controls.apply_mode(GameMode::Playing, true);
    assert!(!skills.is_active());
    assert_eq!(
        skills.handle_input(&toggle, controls.enabled),
        vec![SkillEffect::Activated {
            slot: SkillSlot::Filter,
            color: FilterColor::Red,
        }]
    );
}

#[test]
fn test_input_applies_color_then_switch_then_toggle() {
    let mut skills = fully_unlocked();
    let input = SkillInput {
        switch_pressed: true,
        toggle_pressed: true,
        color: Some(FilterColor::Yellow),
    };

    let effects = skills.handle_input(&input, true);
    assert_eq!(
        effects,
        vec![
            SkillEffect::ColorChanged {
                from: FilterColor::Red,
                to: FilterColor::Yellow,
            },
            SkillEffect::Switched {
                from: SkillSlot::Filter,
                to: SkillSlot::Mask,
            },
            SkillEffect::Activated {
                slot: SkillSlot::Mask,
                color: FilterColor::Yellow,
            },
        ]
    );
}

// -----------------------------------------------------------------------------
// Level reload tests
// -----------------------------------------------------------------------------

#[test]
fn test_reload_keeps_unlocks_and_drops_active_skill() {
    let stale = Entity::from_bits(30);
    let registry = TagRegistry::default();
    let mut switch = RecordingSwitch::default();
    let mut mask = MaskField::default();
    let mut skills = fully_unlocked();
    skills.set_color(FilterColor::Blue);
    skills.switch_slot();
    skills.toggle_active();
    mask.rescan(Vec2::ZERO, 3.0, [(stale, Vec2::X)]);

    let effect = reset_for_reload(&mut skills, &mut mask, &registry, &mut switch);
    assert_eq!(
        effect,
        Some(SkillEffect::Deactivated {
            slot: SkillSlot::Mask,
            color: FilterColor::Blue,
        })
    );
    assert_eq!(skills.unlocked_count(), 2);
    assert_eq!(skills.current_slot(), SkillSlot::Mask);
    assert_eq!(skills.color(), FilterColor::Blue);
    assert!(!skills.is_active());
    assert!(mask.is_empty());
    // The stale detection belonged to a despawned object
    assert!(switch.calls.is_empty());
}

#[test]
fn test_reload_restores_filtered_objects() {
    let wall = Entity::from_bits(31);
    let mut registry = TagRegistry::default();
    registry.register(wall, Taggable::new(FilterColor::Red, ObjectLayer::Interaction));
    let mut switch = RecordingSwitch::default();
    let mut mask = MaskField::default();
    let mut skills = fully_unlocked();
    skills.toggle_active();

    assert!(reset_for_reload(&mut skills, &mut mask, &registry, &mut switch).is_some());
    assert_eq!(switch.calls, vec![(wall, true)]);
    assert_eq!(skills.unlocked_count(), 2);

    // Nothing left to undo on a second reload
    assert!(reset_for_reload(&mut skills, &mut mask, &registry, &mut switch).is_none());
}
