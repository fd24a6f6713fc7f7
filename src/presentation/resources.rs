//! Presentation domain: camera follow settings.

use bevy::prelude::*;

/// Smoothed 2D follow. Platformers usually leave vertical follow off.
#[derive(Resource, Debug, Clone)]
pub struct CameraFollow {
    pub offset: Vec2,
    /// Seconds to close most of the gap to the target
    pub smooth_time: f32,
    pub follow_x: bool,
    pub follow_y: bool,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 2.0),
            smooth_time: 0.3,
            follow_x: true,
            follow_y: false,
        }
    }
}

impl CameraFollow {
    /// Where the camera wants to be; axes that don't follow keep `current`.
    pub fn target(&self, current: Vec2, player: Vec2) -> Vec2 {
        let wanted = player + self.offset;
        Vec2::new(
            if self.follow_x { wanted.x } else { current.x },
            if self.follow_y { wanted.y } else { current.y },
        )
    }

    /// Full offset on both axes, used when the camera jumps straight to the player.
    pub fn snap_target(&self, player: Vec2) -> Vec2 {
        player + self.offset
    }

    /// Frame-rate independent exponential approach toward `target`.
    pub fn step(&self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        if self.smooth_time <= 0.0 {
            return target;
        }
        let t = 1.0 - (-dt.max(0.0) / self.smooth_time).exp();
        current.lerp(target, t)
    }
}
