//! Core domain: mode machine systems, time freeze, and camera setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::{GameModeChanged, ModeRequest};
use crate::core::resources::SessionClock;
use crate::core::state::{GameMode, resolve_mode_requests};

/// World units are roughly one character height; zoom the 2D camera accordingly.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Escape toggles between Playing and Paused.
pub(crate) fn read_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mode: Res<State<GameMode>>,
    mut requests: MessageWriter<ModeRequest>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if let Some(to) = mode.get().pause_toggle() {
        requests.write(ModeRequest { to });
    }
}

/// Enter restarts the level from the game over screen.
pub(crate) fn read_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mode: Res<State<GameMode>>,
    mut requests: MessageWriter<ModeRequest>,
) {
    if *mode.get() != GameMode::GameOver {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        requests.write(ModeRequest {
            to: GameMode::Loading,
        });
    }
}

/// Validates queued mode requests against the current mode and schedules the result.
pub(crate) fn process_mode_requests(
    mut requests: MessageReader<ModeRequest>,
    mode: Res<State<GameMode>>,
    mut next_mode: ResMut<NextState<GameMode>>,
    mut changed: MessageWriter<GameModeChanged>,
) {
    let applied = resolve_mode_requests(*mode.get(), requests.read().map(|request| request.to));
    let Some(&(_, last)) = applied.last() else {
        return;
    };

    for (from, to) in applied {
        info!("Game mode changed from {:?} to {:?}", from, to);
        changed.write(GameModeChanged { from, to });
    }

    next_mode.set(last);
}

/// Pauses virtual time outside of Playing so every timer driven by `Time` freezes.
pub(crate) fn apply_time_freeze(
    mut changes: MessageReader<GameModeChanged>,
    mut time: ResMut<Time<Virtual>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };

    if change.to.freezes_time() {
        time.pause();
    } else {
        time.unpause();
    }
}

pub(crate) fn tick_session_clock(time: Res<Time>, mut clock: ResMut<SessionClock>) {
    clock.advance(time.delta_secs());
}

pub(crate) fn report_game_over(
    mut changes: MessageReader<GameModeChanged>,
    clock: Res<SessionClock>,
) {
    for change in changes.read() {
        if change.to == GameMode::GameOver {
            info!("Game over after {:.1}s of play", clock.elapsed);
        }
    }
}
