//! Level domain: spawning level content from data and the reload flow.

mod components;
mod spawn;
mod systems;


pub use components::LevelEntity;
pub(crate) use spawn::spawn_level;

use bevy::prelude::*;

use crate::core::GameMode;
use crate::level::systems::{
    finish_loading, refresh_level_data, reset_player, respawn_level, teardown_level,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level).add_systems(
            OnEnter(GameMode::Loading),
            (
                teardown_level,
                refresh_level_data,
                respawn_level,
                reset_player,
                finish_loading,
            )
                .chain(),
        );
    }
}
