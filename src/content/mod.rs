//! Content domain: RON gameplay config and level data loading.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{
    DataFile, GameplayConfig, LevelDef, RectDef, RespawnPointDef, SkillPickupDef, TaggedObjectDef,
};
pub use loader::{ContentLoadError, LoadedContent, load_all_content, load_level};
pub use registry::ActiveLevel;
pub use validation::{LevelValidationIssue, validate_level};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

/// Directory holding gameplay.ron and the level files
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveLevel>()
            .add_systems(PreStartup, load_content);
    }
}

/// Logs validation issues for a level. Returns how many were found.
pub fn report_level_issues(level: &LevelDef) -> usize {
    let issues = validate_level(level);
    for issue in &issues {
        warn!("Level '{}': {}", level.id, issue);
    }
    issues.len()
}

fn load_content(mut commands: Commands) {
    let (content, errors) = load_all_content(Path::new(DATA_DIR));

    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        warn!(
            "{} content file(s) failed to load; using built-in defaults for them",
            errors.len()
        );
    }

    report_level_issues(&content.level);

    let LoadedContent { config, level } = content;
    info!(
        "Gameplay config: start_level={}, gravity={}, respawn_delay={}s",
        config.start_level, config.movement.gravity, config.respawn.respawn_delay
    );

    commands.insert_resource(Gravity(Vec2::NEG_Y * config.movement.gravity));
    commands.insert_resource(config.movement);
    commands.insert_resource(config.skills);
    commands.insert_resource(config.respawn);

    let active = ActiveLevel { level };
    info!("{}", active.summary());
    commands.insert_resource(active);
}
