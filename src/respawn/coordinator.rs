//! Respawn domain: resolving an elapsed death into a teleport.

use bevy::prelude::*;
use std::time::Duration;

use crate::respawn::components::Vitality;
use crate::respawn::registry::RespawnRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RespawnOutcome {
    Teleport(Vec2),
    Stranded,
}

/// Ticks the death timer; once it elapses, picks a destination and revives,
/// or strands the player when no respawn point exists.
pub fn advance_death(
    vitality: &mut Vitality,
    registry: &RespawnRegistry,
    position: Vec2,
    delta: Duration,
) -> Option<RespawnOutcome> {
    if !vitality.tick(delta) {
        return None;
    }

    match registry.select_destination(position) {
        Some(destination) => {
            vitality.revive();
            Some(RespawnOutcome::Teleport(destination))
        }
        None => {
            vitality.strand();
            Some(RespawnOutcome::Stranded)
        }
    }
}
