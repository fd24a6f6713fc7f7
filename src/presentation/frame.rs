//! Presentation domain: the per-tick snapshot handed to animation and audio.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{Facing, MovementState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationFrame {
    pub horizontal_velocity: f32,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub just_jumped: bool,
    pub just_landed: bool,
    pub is_dead: bool,
    pub facing: Facing,
}

impl Message for PresentationFrame {}

impl PresentationFrame {
    pub fn capture(state: &MovementState, velocity: Vec2, alive: bool) -> Self {
        Self {
            horizontal_velocity: velocity.x,
            vertical_velocity: velocity.y,
            grounded: state.grounded,
            just_jumped: state.just_jumped,
            just_landed: state.just_landed,
            is_dead: !alive,
            facing: state.facing,
        }
    }
}
