//! Core domain: session-wide resources.

use bevy::prelude::*;

/// Time spent in `GameMode::Playing` since the session started.
#[derive(Resource, Debug, Default)]
pub struct SessionClock {
    pub elapsed: f32,
}

impl SessionClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
