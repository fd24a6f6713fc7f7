mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod presentation;
mod respawn;
mod skills;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Chroma Runner".to_string(),
            resolution: (1280_u32, 720_u32).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        world::WorldPlugin,
        movement::MovementPlugin,
        skills::SkillsPlugin,
        respawn::RespawnPlugin,
        level::LevelPlugin,
        presentation::PresentationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
