//! Core domain: messages for mode requests and mode changes.

use bevy::ecs::message::Message;

use crate::core::state::GameMode;

/// Ask the mode machine to move to `to`. Invalid requests are dropped.
#[derive(Debug, Clone, Copy)]
pub struct ModeRequest {
    pub to: GameMode,
}

impl Message for ModeRequest {}

/// Published once per accepted transition.
#[derive(Debug, Clone, Copy)]
pub struct GameModeChanged {
    pub from: GameMode,
    pub to: GameMode,
}

impl Message for GameModeChanged {}
