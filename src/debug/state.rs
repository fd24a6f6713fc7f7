//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the periodic player info log is on
    pub show_info: bool,
    pub info_timer: Timer,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_info: false,
            info_timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Actions that can be triggered from debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    KillPlayer,
    UnlockAllSkills,
    ReloadLevel,
    ForceGameOver,
    ToggleInfo,
}

impl DebugAction {
    /// Ctrl+K kill, Ctrl+U unlock, F5 reload, F9 game over, F3 info.
    pub fn pressed(keyboard: &ButtonInput<KeyCode>) -> Vec<DebugAction> {
        let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

        let mut actions = Vec::new();
        if ctrl && keyboard.just_pressed(KeyCode::KeyK) {
            actions.push(DebugAction::KillPlayer);
        }
        if ctrl && keyboard.just_pressed(KeyCode::KeyU) {
            actions.push(DebugAction::UnlockAllSkills);
        }
        if keyboard.just_pressed(KeyCode::F5) {
            actions.push(DebugAction::ReloadLevel);
        }
        if keyboard.just_pressed(KeyCode::F9) {
            actions.push(DebugAction::ForceGameOver);
        }
        if keyboard.just_pressed(KeyCode::F3) {
            actions.push(DebugAction::ToggleInfo);
        }
        actions
    }
}
