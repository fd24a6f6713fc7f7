//! Debug hotkeys for fast iteration and testing.
//!
//! Features:
//! - Kill the player (Ctrl+K)
//! - Unlock both skills (Ctrl+U)
//! - Reload the level (F5) or force game over (F9)
//! - Periodic player info log (F3)

mod state;
mod systems;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::core::ControlSet;
use crate::debug::systems::{handle_debug_hotkeys, log_debug_info};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                handle_debug_hotkeys.in_set(ControlSet::InputSample),
            )
            .add_systems(
                Update,
                log_debug_info.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
