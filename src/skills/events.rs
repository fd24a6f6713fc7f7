//! Skills domain: skill messages.

use bevy::ecs::message::Message;

use crate::skills::state::{SkillEffect, SkillSlot};

/// One message per applied skill effect, in the order they happened.
#[derive(Debug, Clone, Copy)]
pub struct SkillChanged {
    pub effect: SkillEffect,
}

impl Message for SkillChanged {}

/// Request to unlock a slot, from pickups or debug tools.
#[derive(Debug, Clone, Copy)]
pub struct UnlockSkillRequest {
    pub slot: SkillSlot,
}

impl Message for UnlockSkillRequest {}
