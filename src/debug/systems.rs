//! Debug domain: hotkey handling and the player info log.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameMode, ModeRequest};
use crate::debug::state::{DebugAction, DebugState};
use crate::movement::{MovementState, Player};
use crate::respawn::{HazardContact, Vitality};
use crate::skills::{MaskField, SkillSlot, SkillState, UnlockSkillRequest};

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut hazards: MessageWriter<HazardContact>,
    mut unlocks: MessageWriter<UnlockSkillRequest>,
    mut mode_requests: MessageWriter<ModeRequest>,
) {
    for action in DebugAction::pressed(&keyboard) {
        info!("[DEBUG] {:?}", action);
        match action {
            DebugAction::KillPlayer => {
                hazards.write(HazardContact);
            }
            DebugAction::UnlockAllSkills => {
                unlocks.write(UnlockSkillRequest {
                    slot: SkillSlot::Filter,
                });
                unlocks.write(UnlockSkillRequest {
                    slot: SkillSlot::Mask,
                });
            }
            DebugAction::ReloadLevel => {
                mode_requests.write(ModeRequest {
                    to: GameMode::Loading,
                });
            }
            DebugAction::ForceGameOver => {
                mode_requests.write(ModeRequest {
                    to: GameMode::GameOver,
                });
            }
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                debug_state.info_timer.reset();
            }
        }
    }
}

/// Logs the player's control state once per second while enabled.
/// Runs on real time so it keeps reporting while paused.
pub(crate) fn log_debug_info(
    time: Res<Time<Real>>,
    mut debug_state: ResMut<DebugState>,
    mode: Res<State<GameMode>>,
    query: Query<
        (
            &Transform,
            &LinearVelocity,
            &MovementState,
            &Vitality,
            &SkillState,
            &MaskField,
        ),
        With<Player>,
    >,
) {
    debug_state.info_timer.tick(time.delta());
    if !debug_state.info_timer.just_finished() {
        return;
    }

    for (transform, velocity, movement, vitality, skills, mask) in &query {
        info!(
            "[DEBUG] mode={:?} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) grounded={} coyote={:.2} buffer={:.2} phase={:?} skill={:?} active={} color={:?} masked={}",
            mode.get(),
            transform.translation.x,
            transform.translation.y,
            velocity.x,
            velocity.y,
            movement.grounded,
            movement.coyote_timer,
            movement.jump_buffer_timer,
            vitality.phase,
            skills.current_slot(),
            skills.is_active(),
            skills.color(),
            mask.len()
        );
    }
}
