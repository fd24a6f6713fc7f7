//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundProbe, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &GroundProbe, &mut MovementState), With<Player>>,
) {
    // Only Ground-layer colliders count; sensors and the player body are ignored
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, probe, mut state) in &mut query {
        let anchor = probe.anchor(transform.translation.truncate());
        let hits = spatial_query.shape_intersections(
            &Collider::circle(probe.radius),
            anchor,
            0.0,
            &ground_filter,
        );

        let was_grounded = state.grounded;
        if state.sense_ground(!hits.is_empty(), &tuning) {
            debug!("Landed: coyote_timer reset to {}", state.coyote_timer);
        } else if was_grounded && !state.grounded {
            debug!("Left ground");
        }
    }
}
