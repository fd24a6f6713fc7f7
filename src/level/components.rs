//! Level domain: markers for spawned level content.

use bevy::prelude::*;

/// Everything spawned from level data; despawned as a whole on reload.
#[derive(Component, Debug)]
pub struct LevelEntity;
