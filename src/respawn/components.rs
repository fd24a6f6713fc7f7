//! Respawn domain: respawn point, hazard, and player vitality components.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::GameMode;

/// Checkpoint the player can return to. `order` is the registration order within a level.
#[derive(Component, Debug, Clone, Copy)]
pub struct RespawnPoint {
    pub order: u32,
    pub is_default: bool,
    pub activated: bool,
}

/// Trigger region that kills the player on contact.
#[derive(Component, Debug)]
pub struct Hazard;

#[derive(Debug, Clone, Default)]
pub enum DeathPhase {
    #[default]
    Alive,
    /// Waiting out the respawn delay
    Dead { timer: Timer },
    /// Delay elapsed with nowhere to go; stays frozen until the level reloads
    Stranded,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Vitality {
    pub phase: DeathPhase,
}

impl Vitality {
    pub fn is_alive(&self) -> bool {
        matches!(self.phase, DeathPhase::Alive)
    }

    pub fn is_stranded(&self) -> bool {
        matches!(self.phase, DeathPhase::Stranded)
    }

    /// Starts the respawn delay. Returns false when the contact is ignored:
    /// outside Playing, or while already dead.
    pub fn on_hazard_contact(&mut self, mode: GameMode, respawn_delay: f32) -> bool {
        if mode != GameMode::Playing {
            debug!("Hazard contact ignored in {:?}", mode);
            return false;
        }
        if !self.is_alive() {
            debug!("Hazard contact ignored: player already dead");
            return false;
        }

        self.phase = DeathPhase::Dead {
            timer: Timer::from_seconds(respawn_delay.max(0.0), TimerMode::Once),
        };
        true
    }

    /// Advances the respawn delay. Returns true once it has elapsed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        match &mut self.phase {
            DeathPhase::Dead { timer } => {
                timer.tick(delta);
                timer.remaining_secs() == 0.0
            }
            DeathPhase::Alive | DeathPhase::Stranded => false,
        }
    }

    pub fn revive(&mut self) {
        self.phase = DeathPhase::Alive;
    }

    pub fn strand(&mut self) {
        self.phase = DeathPhase::Stranded;
    }
}
