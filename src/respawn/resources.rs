//! Respawn domain: tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RespawnTuning {
    /// Seconds between hazard contact and teleport, in virtual time
    pub respawn_delay: f32,
}

impl Default for RespawnTuning {
    fn default() -> Self {
        Self { respawn_delay: 1.0 }
    }
}
