//! Respawn domain: death and respawn messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The player touched a hazard. Written by collision detection and debug tools.
#[derive(Debug, Clone, Copy)]
pub struct HazardContact;

impl Message for HazardContact {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerDied {
    pub position: Vec2,
}

impl Message for PlayerDied {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerRespawned {
    pub position: Vec2,
}

impl Message for PlayerRespawned {}

#[derive(Debug, Clone, Copy)]
pub struct RespawnPointActivated {
    pub point: Entity,
    pub position: Vec2,
}

impl Message for RespawnPointActivated {}
