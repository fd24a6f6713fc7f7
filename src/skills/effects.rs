//! Skills domain: applying skill effects to tagged world objects.

use bevy::prelude::*;

use crate::skills::mask::MaskField;
use crate::skills::state::{SkillEffect, SkillSlot, SkillState};
use crate::world::{ObjectLayer, ObjectSwitch, TagRegistry};

/// Filter toggles every interactive object of its color. Mask activation is a
/// no-op here because the follow rescan reveals objects; deactivation hides
/// whatever the last scan revealed.
pub fn apply_skill_effect(
    effect: &SkillEffect,
    registry: &TagRegistry,
    mask: &mut MaskField,
    switch: &mut impl ObjectSwitch,
) {
    match *effect {
        SkillEffect::Activated {
            slot: SkillSlot::Filter,
            color,
        } => {
            for &entity in registry.matching(color, ObjectLayer::Interaction) {
                switch.set_enabled(entity, false);
            }
        }
        SkillEffect::Deactivated {
            slot: SkillSlot::Filter,
            color,
        } => {
            for &entity in registry.matching(color, ObjectLayer::Interaction) {
                switch.set_enabled(entity, true);
            }
        }
        SkillEffect::Deactivated {
            slot: SkillSlot::Mask,
            ..
        } => {
            for entity in mask.release() {
                switch.set_enabled(entity, false);
            }
        }
        SkillEffect::Activated {
            slot: SkillSlot::Mask,
            ..
        }
        | SkillEffect::Unlocked(_)
        | SkillEffect::Switched { .. }
        | SkillEffect::ColorChanged { .. } => {}
    }
}

/// Level reload: drops the active skill and whatever the Mask still holds.
/// Unlocked slots, the selected slot, and the color carry over.
pub fn reset_for_reload(
    skills: &mut SkillState,
    mask: &mut MaskField,
    registry: &TagRegistry,
    switch: &mut impl ObjectSwitch,
) -> Option<SkillEffect> {
    // Detections from the torn-down level point at despawned entities
    if !mask.is_empty() {
        debug!("Dropping {} stale Mask detections", mask.len());
        mask.release();
    }

    let effect = skills.deactivate();
    if let Some(effect) = &effect {
        apply_skill_effect(effect, registry, mask, switch);
    }
    effect
}
