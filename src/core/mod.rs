//! Core domain: game mode machine, system ordering, and session resources.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{GameModeChanged, ModeRequest};
pub use resources::SessionClock;
pub use state::{GameMode, resolve_mode_requests};

use bevy::prelude::*;

use crate::core::systems::{
    apply_time_freeze, process_mode_requests, read_pause_input, read_restart_input,
    report_game_over, setup_camera, tick_session_clock,
};

/// Per-frame ordering of the control core.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSet {
    /// Mode requests are resolved before anything reads input.
    Mode,
    /// Controls and active skills follow mode changes before input is read.
    ControlGate,
    InputSample,
    TimerDecay,
    GroundSense,
    Integrate,
    PresentationSync,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameMode>()
            .init_resource::<SessionClock>()
            .add_message::<ModeRequest>()
            .add_message::<GameModeChanged>()
            .configure_sets(
                Update,
                (
                    ControlSet::Mode,
                    ControlSet::ControlGate,
                    ControlSet::InputSample,
                    ControlSet::TimerDecay,
                    ControlSet::GroundSense,
                    ControlSet::Integrate,
                    ControlSet::PresentationSync,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    read_pause_input,
                    read_restart_input,
                    process_mode_requests,
                    apply_time_freeze,
                    report_game_over,
                )
                    .chain()
                    .in_set(ControlSet::Mode),
            )
            .add_systems(
                Update,
                tick_session_clock
                    .in_set(ControlSet::TimerDecay)
                    .run_if(in_state(GameMode::Playing)),
            );
    }
}
