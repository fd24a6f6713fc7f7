//! Core domain: game mode definitions and the transition table.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameMode {
    #[default]
    Playing,
    Paused,
    Loading,
    GameOver,
}

impl GameMode {
    /// Whether `self -> next` is a legal transition. Self-transitions are never legal.
    pub fn can_transition_to(self, next: GameMode) -> bool {
        use GameMode::*;
        matches!(
            (self, next),
            (Playing, Paused)
                | (Paused, Playing)
                | (Playing, Loading)
                | (Paused, Loading)
                | (Loading, Playing)
                | (Playing, GameOver)
                | (GameOver, Loading)
        )
    }

    /// Player controls and skills only accept input while playing.
    pub fn accepts_input(self) -> bool {
        self == GameMode::Playing
    }

    /// Simulation time is frozen in every mode except Playing.
    pub fn freezes_time(self) -> bool {
        self != GameMode::Playing
    }

    /// Target of the pause key from this mode, if any.
    pub fn pause_toggle(self) -> Option<GameMode> {
        match self {
            GameMode::Playing => Some(GameMode::Paused),
            GameMode::Paused => Some(GameMode::Playing),
            GameMode::Loading | GameMode::GameOver => None,
        }
    }
}

/// Applies a batch of requested modes in order starting from `current`.
/// Returns every transition that was accepted as `(from, to)` pairs.
pub fn resolve_mode_requests(
    current: GameMode,
    requests: impl IntoIterator<Item = GameMode>,
) -> Vec<(GameMode, GameMode)> {
    let mut mode = current;
    let mut applied = Vec::new();

    for requested in requests {
        if mode.can_transition_to(requested) {
            applied.push((mode, requested));
            mode = requested;
        } else {
            debug!("Ignoring invalid mode transition {:?} -> {:?}", mode, requested);
        }
    }

    applied
}
