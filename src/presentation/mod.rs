//! Presentation domain: per-tick presentation frames, sprite facing, and the follow camera.

mod frame;
mod resources;
mod systems;


pub use frame::PresentationFrame;
pub use resources::CameraFollow;

use bevy::prelude::*;

use crate::core::ControlSet;
use crate::presentation::systems::{follow_camera, publish_frame, snap_camera, sync_facing};

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFollow>()
            .add_message::<PresentationFrame>()
            .add_systems(
                Update,
                (publish_frame, sync_facing, snap_camera, follow_camera)
                    .chain()
                    .in_set(ControlSet::PresentationSync),
            );
    }
}
