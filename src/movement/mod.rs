//! Movement domain: player locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    Controls, Facing, GameLayer, Ground, GroundProbe, MovementOutcome, MovementState, Player,
};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use bootstrap::player_start;

use bevy::prelude::*;

use crate::core::ControlSet;
use crate::level::spawn_level;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_mode_to_controls, detect_ground, integrate_movement, read_input, sample_player_input,
    update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player.after(spawn_level))
            .add_systems(Update, apply_mode_to_controls.in_set(ControlSet::ControlGate))
            .add_systems(
                Update,
                (read_input, sample_player_input)
                    .chain()
                    .in_set(ControlSet::InputSample),
            )
            .add_systems(Update, update_timers.in_set(ControlSet::TimerDecay))
            .add_systems(Update, detect_ground.in_set(ControlSet::GroundSense))
            .add_systems(Update, integrate_movement.in_set(ControlSet::Integrate));
    }
}
