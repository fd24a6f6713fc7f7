//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_force: f32,
    pub gravity: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub ground_check_radius: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 12.0,
            gravity: 25.0,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            ground_check_radius: 0.2,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
}
