//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/gameplay.ron and the level files it
//! names. Every tuning struct has a `Default`, so a missing field falls back
//! to the built-in value.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::respawn::RespawnTuning;
use crate::skills::{SkillSlot, SkillTuning};
use crate::world::{FilterColor, ObjectLayer};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Gameplay config (gameplay.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Level id; also the file stem under assets/data/
    pub start_level: String,
    pub movement: MovementTuning,
    pub skills: SkillTuning,
    pub respawn: RespawnTuning,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            start_level: "level_01".to_string(),
            movement: MovementTuning::default(),
            skills: SkillTuning::default(),
            respawn: RespawnTuning::default(),
        }
    }
}

// ============================================================================
// Levels (level_*.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ground: Vec<RectDef>,
    #[serde(default)]
    pub hazards: Vec<RectDef>,
    /// Registration order is list order
    #[serde(default)]
    pub respawn_points: Vec<RespawnPointDef>,
    #[serde(default)]
    pub objects: Vec<TaggedObjectDef>,
    #[serde(default)]
    pub pickups: Vec<SkillPickupDef>,
}

/// Axis-aligned box given by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RespawnPointDef {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub is_default: bool,
}

impl RespawnPointDef {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TaggedObjectDef {
    pub rect: RectDef,
    pub color: FilterColor,
    #[serde(default)]
    pub layer: ObjectLayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SkillPickupDef {
    pub x: f32,
    pub y: f32,
    pub slot: SkillSlot,
}

impl LevelDef {
    /// Minimal playable level used when no level file can be loaded.
    pub fn builtin() -> Self {
        Self {
            id: "builtin".to_string(),
            name: "Fallback Floor".to_string(),
            ground: vec![RectDef {
                x: 0.0,
                y: -1.0,
                width: 40.0,
                height: 1.0,
            }],
            hazards: Vec::new(),
            respawn_points: vec![RespawnPointDef {
                x: 0.0,
                y: 0.5,
                is_default: true,
            }],
            objects: Vec::new(),
            pickups: Vec::new(),
        }
    }
}
