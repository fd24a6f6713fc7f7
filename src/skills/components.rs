//! Skills domain: pickup and overlay components.

use bevy::prelude::*;

use crate::skills::state::SkillSlot;

/// Trigger zone that unlocks a slot when the player touches it.
#[derive(Component, Debug, Clone, Copy)]
pub struct SkillPickup {
    pub slot: SkillSlot,
}

/// Translucent overlay parented to the player, tinted with the skill color.
#[derive(Component, Debug)]
pub struct SkillAura;
