//! ActiveLevel resource holding the level definition currently in play.

use bevy::prelude::*;

use super::data::LevelDef;

#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel {
    pub level: LevelDef,
}

impl Default for ActiveLevel {
    fn default() -> Self {
        Self {
            level: LevelDef::builtin(),
        }
    }
}

impl ActiveLevel {
    /// Returns a summary of the level's contents for logging.
    pub fn summary(&self) -> String {
        format!(
            "Level '{}' ({}): ground={}, hazards={}, respawn points={}, objects={}, pickups={}",
            self.level.id,
            self.level.name,
            self.level.ground.len(),
            self.level.hazards.len(),
            self.level.respawn_points.len(),
            self.level.objects.len(),
            self.level.pickups.len()
        )
    }
}
