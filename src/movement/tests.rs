//! Movement domain: unit tests for timers, jump rules, and facing.

use super::{Controls, Facing, MovementInput, MovementOutcome, MovementState, MovementTuning};
use crate::core::GameMode;

const DT: f32 = 0.016;

/// Runs the methods the movement systems call, in `ControlSet` order, for a living player.
fn tick(
    state: &mut MovementState,
    input: &MovementInput,
    controls_enabled: bool,
    grounded: bool,
    dt: f32,
    tuning: &MovementTuning,
) -> MovementOutcome {
    state.sample_input(input, controls_enabled, tuning);
    state.decay_timers(dt, tuning);
    state.sense_ground(grounded, tuning);
    state.integrate(true, tuning).unwrap_or_default()
}

fn idle() -> MovementInput {
    MovementInput::default()
}

fn jump() -> MovementInput {
    MovementInput {
        horizontal: 0.0,
        jump_just_pressed: true,
    }
}

fn run(horizontal: f32) -> MovementInput {
    MovementInput {
        horizontal,
        jump_just_pressed: false,
    }
}

// -----------------------------------------------------------------------------
// MovementTuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_matches_level_design() {
    let tuning = MovementTuning::default();
    assert_eq!(tuning.move_speed, 5.0);
    assert_eq!(tuning.jump_force, 12.0);
    assert_eq!(tuning.coyote_time, 0.2);
    assert_eq!(tuning.jump_buffer_time, 0.2);
    assert_eq!(tuning.ground_check_radius, 0.2);
    // 12² / (2 * 25)
    assert!((tuning.single_jump_height() - 2.88).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Timer and jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_timers_stay_in_bounds() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();
    let steps = [
        (0.0, true, true),
        (0.5, false, false),
        (0.016, false, true),
        (-1.0, true, false),
        (3.0, false, false),
        (0.001, true, true),
        (0.1, false, true),
    ];

    for (dt, grounded, jump_pressed) in steps {
        let input = MovementInput {
            horizontal: 0.0,
            jump_just_pressed: jump_pressed,
        };
        tick(&mut state, &input, true, grounded, dt, &tuning);
        assert!((0.0..=tuning.coyote_time).contains(&state.coyote_timer));
        assert!((0.0..=tuning.jump_buffer_time).contains(&state.jump_buffer_timer));
    }
}

#[test]
fn test_buffered_jump_fires_during_coyote() {
    let tuning = MovementTuning::default();
    let mut state = MovementState {
        coyote_timer: 0.05,
        ..Default::default()
    };

    let outcome = tick(&mut state, &jump(), true, false, DT, &tuning);
    assert_eq!(outcome.jump_velocity, Some(12.0));
    assert_eq!(state.coyote_timer, 0.0);
    assert_eq!(state.jump_buffer_timer, 0.0);
    assert!(state.just_jumped);
}

#[test]
fn test_no_jump_without_ground_or_coyote() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();

    let outcome = tick(&mut state, &jump(), true, false, DT, &tuning);
    assert_eq!(outcome.jump_velocity, None);
    // The request stays buffered
    assert!(state.jump_buffer_timer > 0.0);
}

#[test]
fn test_early_press_fires_on_landing() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();

    tick(&mut state, &jump(), true, false, DT, &tuning);
    tick(&mut state, &idle(), true, false, DT, &tuning);
    let outcome = tick(&mut state, &idle(), true, true, DT, &tuning);

    assert!(state.just_landed);
    assert_eq!(outcome.jump_velocity, Some(tuning.jump_force));
}

#[test]
fn test_buffer_expires() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();

    tick(&mut state, &jump(), true, false, DT, &tuning);
    tick(&mut state, &idle(), true, false, 0.3, &tuning);
    let outcome = tick(&mut state, &idle(), true, true, DT, &tuning);

    assert_eq!(outcome.jump_velocity, None);
}

#[test]
fn test_one_jump_per_request() {
    let tuning = MovementTuning::default();
    let mut state = MovementState {
        grounded: true,
        ..Default::default()
    };

    let first = tick(&mut state, &jump(), true, true, DT, &tuning);
    let second = tick(&mut state, &idle(), true, true, DT, &tuning);
    assert!(first.jump_velocity.is_some());
    assert!(second.jump_velocity.is_none());
    assert!(!state.just_jumped);
}

#[test]
fn test_landing_refills_coyote() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();

    assert!(state.sense_ground(true, &tuning));
    assert_eq!(state.coyote_timer, tuning.coyote_time);
    assert!(!state.sense_ground(true, &tuning));

    // Coyote only drains in the air
    state.decay_timers(0.1, &tuning);
    assert_eq!(state.coyote_timer, tuning.coyote_time);
    state.sense_ground(false, &tuning);
    state.decay_timers(0.1, &tuning);
    assert!((state.coyote_timer - 0.1).abs() < 1e-6);
}

#[test]
fn test_walk_off_ledge_then_jump() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();
    tick(&mut state, &idle(), true, true, DT, &tuning);

    tick(&mut state, &run(1.0), true, false, 0.1, &tuning);
    let outcome = tick(&mut state, &jump(), true, false, DT, &tuning);
    assert!(outcome.jump_velocity.is_some());
}

// -----------------------------------------------------------------------------
// Controls and facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_disabled_controls_zero_axis_and_skip_buffer() {
    let tuning = MovementTuning::default();
    let mut state = MovementState {
        coyote_timer: 0.1,
        jump_buffer_timer: 0.1,
        ..Default::default()
    };

    let input = MovementInput {
        horizontal: 1.0,
        jump_just_pressed: true,
    };
    state.sample_input(&input, false, &tuning);
    assert_eq!(state.axis, 0.0);
    assert_eq!(state.jump_buffer_timer, 0.1);

    // Existing timers still decay
    state.decay_timers(0.05, &tuning);
    assert!((state.coyote_timer - 0.05).abs() < 1e-6);
    assert!((state.jump_buffer_timer - 0.05).abs() < 1e-6);
    assert_eq!(state.horizontal_velocity(&tuning), 0.0);
}

#[test]
fn test_axis_is_clamped() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();

    let outcome = tick(&mut state, &run(3.0), true, true, DT, &tuning);
    assert_eq!(outcome.horizontal_velocity, tuning.move_speed);

    let outcome = tick(&mut state, &run(-0.5), true, true, DT, &tuning);
    assert_eq!(outcome.horizontal_velocity, -2.5);
}

#[test]
fn test_facing_follows_axis_sign() {
    let tuning = MovementTuning::default();
    let mut state = MovementState::default();
    assert_eq!(state.facing, Facing::Right);

    tick(&mut state, &run(-1.0), true, true, DT, &tuning);
    assert_eq!(state.facing, Facing::Left);

    // Zero axis keeps the last facing
    tick(&mut state, &idle(), true, true, DT, &tuning);
    assert_eq!(state.facing, Facing::Left);

    tick(&mut state, &run(0.4), true, true, DT, &tuning);
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn test_reset_keeps_facing_only() {
    let mut state = MovementState {
        grounded: true,
        facing: Facing::Left,
        axis: -1.0,
        coyote_timer: 0.2,
        jump_buffer_timer: 0.1,
        just_jumped: true,
        just_landed: true,
    };

    state.reset();
    assert_eq!(state.facing, Facing::Left);
    assert!(!state.grounded);
    assert_eq!(state.axis, 0.0);
    assert_eq!(state.coyote_timer, 0.0);
    assert_eq!(state.jump_buffer_timer, 0.0);
    assert!(!state.just_jumped && !state.just_landed);
}

#[test]
fn test_controls_follow_mode() {
    let mut controls = Controls::default();
    assert!(controls.enabled);

    for mode in [GameMode::Paused, GameMode::Loading, GameMode::GameOver] {
        controls.apply_mode(mode, true);
        assert!(!controls.enabled, "{:?} should disable controls", mode);
    }

    controls.apply_mode(GameMode::Playing, true);
    assert!(controls.enabled);
}

#[test]
fn test_dead_player_is_not_integrated() {
    let tuning = MovementTuning::default();
    let mut state = MovementState {
        grounded: true,
        facing: Facing::Left,
        jump_buffer_timer: 0.1,
        ..Default::default()
    };

    // Systems pass `controls.enabled && alive`, so a dead player samples as disabled
    state.sample_input(&run(1.0), false, &tuning);
    assert_eq!(state.integrate(false, &tuning), None);
    assert_eq!(state.facing, Facing::Left);
    // The buffered request survives for after the respawn reset
    assert_eq!(state.jump_buffer_timer, 0.1);
    assert!(!state.just_jumped);
}
