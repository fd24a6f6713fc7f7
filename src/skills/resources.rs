//! Skills domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::skills::state::SkillSlot;
use crate::world::FilterColor;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SkillTuning {
    /// Reveal radius of the Mask around the player
    pub mask_radius: f32,
    pub starting_color: FilterColor,
    /// Slots unlocked when the player spawns, in unlock order
    pub starting_unlocks: Vec<SkillSlot>,
}

impl Default for SkillTuning {
    fn default() -> Self {
        Self {
            mask_radius: 3.0,
            starting_color: FilterColor::Red,
            starting_unlocks: Vec::new(),
        }
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct SkillInput {
    pub switch_pressed: bool,
    pub toggle_pressed: bool,
    pub color: Option<FilterColor>,
}
