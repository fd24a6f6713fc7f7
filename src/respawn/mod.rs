//! Respawn domain: hazards, respawn points, and the death -> teleport -> revive sequence.

mod components;
mod coordinator;
mod events;
mod registry;
mod resources;
mod systems;


pub use components::{DeathPhase, Hazard, RespawnPoint, Vitality};
pub use coordinator::{RespawnOutcome, advance_death};
pub use events::{HazardContact, PlayerDied, PlayerRespawned, RespawnPointActivated};
pub use registry::{RegisteredPoint, RespawnRegistry};
pub use resources::RespawnTuning;

use bevy::prelude::*;

use crate::core::ControlSet;
use crate::respawn::systems::{
    detect_hazard_contact, detect_respawn_point_contact, handle_hazard_contact, tick_death_timer,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnRegistry>()
            .init_resource::<RespawnTuning>()
            .add_message::<HazardContact>()
            .add_message::<PlayerDied>()
            .add_message::<PlayerRespawned>()
            .add_message::<RespawnPointActivated>()
            .add_systems(
                Update,
                (detect_hazard_contact, handle_hazard_contact, tick_death_timer)
                    .chain()
                    .in_set(ControlSet::TimerDecay),
            )
            .add_systems(Update, detect_respawn_point_contact.in_set(ControlSet::Integrate));
    }
}
