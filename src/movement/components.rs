//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameMode;
use crate::movement::resources::{MovementInput, MovementTuning};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Anything the player can stand on, including colored platforms
    Ground,
    /// Player character
    Player,
    /// Trigger zones: hazards, respawn points, pickups
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for static ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Whether player input is accepted. Independent of being alive.
#[derive(Component, Debug, Clone, Copy)]
pub struct Controls {
    pub enabled: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Controls {
    /// Playing re-enables controls unless the player is mid-death; every other mode disables them.
    pub fn apply_mode(&mut self, mode: GameMode, alive: bool) {
        self.enabled = mode.accepts_input() && alive;
    }
}

/// Circle probe at the feet used for ground detection.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    /// Feet anchor relative to the body center
    pub offset: Vec2,
    pub radius: f32,
}

impl GroundProbe {
    pub fn anchor(&self, body_position: Vec2) -> Vec2 {
        body_position + self.offset
    }
}

/// Velocity changes produced by the integrate step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementOutcome {
    pub horizontal_velocity: f32,
    /// Vertical velocity to apply when a jump fired this tick
    pub jump_velocity: Option<f32>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub facing: Facing,
    /// Horizontal axis accepted this tick, already zeroed when controls are off
    pub axis: f32,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub just_jumped: bool,
    pub just_landed: bool,
}

impl MovementState {
    /// Input sample. Disabled controls zero the axis and drop jump requests.
    pub fn sample_input(
        &mut self,
        input: &MovementInput,
        controls_enabled: bool,
        tuning: &MovementTuning,
    ) {
        self.just_jumped = false;

        if !controls_enabled {
            self.axis = 0.0;
            return;
        }

        self.axis = input.horizontal.clamp(-1.0, 1.0);
        if input.jump_just_pressed {
            self.request_jump(tuning);
        }
    }

    pub fn request_jump(&mut self, tuning: &MovementTuning) {
        self.jump_buffer_timer = tuning.jump_buffer_time.max(0.0);
    }

    /// Timers decay regardless of controls; both stay within `[0, configured max]`.
    pub fn decay_timers(&mut self, dt: f32, tuning: &MovementTuning) {
        let dt = dt.max(0.0);

        if !self.grounded {
            self.coyote_timer = (self.coyote_timer - dt).clamp(0.0, tuning.coyote_time.max(0.0));
        }
        self.jump_buffer_timer =
            (self.jump_buffer_timer - dt).clamp(0.0, tuning.jump_buffer_time.max(0.0));
    }

    /// Stores the ground sample. Landing refills coyote time. Returns true on landing.
    pub fn sense_ground(&mut self, grounded: bool, tuning: &MovementTuning) -> bool {
        let was_grounded = self.grounded;
        self.grounded = grounded;
        self.just_landed = grounded && !was_grounded;

        if self.just_landed {
            self.coyote_timer = tuning.coyote_time.max(0.0);
        }

        self.just_landed
    }

    pub fn can_jump(&self) -> bool {
        self.jump_buffer_timer > 0.0 && (self.grounded || self.coyote_timer > 0.0)
    }

    /// Consumes one buffered request if a jump is allowed.
    pub fn try_jump(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }

        self.jump_buffer_timer = 0.0;
        self.coyote_timer = 0.0;
        self.just_jumped = true;
        true
    }

    pub fn horizontal_velocity(&self, tuning: &MovementTuning) -> f32 {
        self.axis * tuning.move_speed
    }

    pub fn update_facing(&mut self) {
        if self.axis > 0.0 {
            self.facing = Facing::Right;
        } else if self.axis < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Integrate step: facing, horizontal speed, and at most one jump.
    /// Returns None while dead so the frozen body keeps its velocity.
    pub fn integrate(&mut self, alive: bool, tuning: &MovementTuning) -> Option<MovementOutcome> {
        if !alive {
            return None;
        }

        self.update_facing();
        let jumped = self.try_jump();

        Some(MovementOutcome {
            horizontal_velocity: self.horizontal_velocity(tuning),
            jump_velocity: jumped.then_some(tuning.jump_force),
        })
    }

    /// Clears input and timers after a teleport. Facing is kept.
    pub fn reset(&mut self) {
        *self = Self {
            facing: self.facing,
            ..Self::default()
        };
    }
}
