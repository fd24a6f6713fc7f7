//! Skills domain: Filter and Mask skills, color selection, and unlocks.

mod components;
mod effects;
mod events;
mod mask;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{SkillAura, SkillPickup};
pub use effects::{apply_skill_effect, reset_for_reload};
pub use events::{SkillChanged, UnlockSkillRequest};
pub use mask::{MaskField, MaskScan};
pub use resources::{SkillInput, SkillTuning};
pub use state::{SkillEffect, SkillSlot, SkillState};

use bevy::prelude::*;

use crate::core::ControlSet;
use crate::skills::systems::{
    deactivate_on_death, deactivate_on_mode_change, detect_skill_pickups, follow_mask,
    handle_skill_input, handle_unlock_requests, read_skill_input, sync_skill_aura,
};

pub struct SkillsPlugin;

impl Plugin for SkillsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkillTuning>()
            .init_resource::<SkillInput>()
            .add_message::<SkillChanged>()
            .add_message::<UnlockSkillRequest>()
            .add_systems(Update, deactivate_on_mode_change.in_set(ControlSet::ControlGate))
            .add_systems(
                Update,
                (read_skill_input, handle_skill_input)
                    .chain()
                    .in_set(ControlSet::InputSample),
            )
            .add_systems(
                Update,
                (
                    detect_skill_pickups,
                    handle_unlock_requests,
                    deactivate_on_death,
                    follow_mask,
                )
                    .chain()
                    .in_set(ControlSet::Integrate),
            )
            .add_systems(Update, sync_skill_aura.in_set(ControlSet::PresentationSync));
    }
}
