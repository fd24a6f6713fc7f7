//! Skills domain: the Mask skill's detection set.

use bevy::prelude::*;
use std::collections::HashSet;

/// Objects currently revealed by the Mask around the player.
#[derive(Component, Debug, Default)]
pub struct MaskField {
    detected: HashSet<Entity>,
}

/// Changes produced by one rescan, sorted for stable application order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MaskScan {
    pub revealed: Vec<Entity>,
    pub hidden: Vec<Entity>,
}

impl MaskField {
    /// Replaces the detection set with candidates within `radius` of `center`.
    pub fn rescan(
        &mut self,
        center: Vec2,
        radius: f32,
        candidates: impl IntoIterator<Item = (Entity, Vec2)>,
    ) -> MaskScan {
        let radius_sq = radius.max(0.0).powi(2);
        let current: HashSet<Entity> = candidates
            .into_iter()
            .filter(|(_, position)| position.distance_squared(center) <= radius_sq)
            .map(|(entity, _)| entity)
            .collect();

        let mut revealed: Vec<Entity> = current.difference(&self.detected).copied().collect();
        let mut hidden: Vec<Entity> = self.detected.difference(&current).copied().collect();
        revealed.sort();
        hidden.sort();

        self.detected = current;
        MaskScan { revealed, hidden }
    }

    /// Empties the detection set, returning everything that must be hidden again.
    pub fn release(&mut self) -> Vec<Entity> {
        let mut released: Vec<Entity> = self.detected.drain().collect();
        released.sort();
        released
    }

    pub fn len(&self) -> usize {
        self.detected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detected.is_empty()
    }
}
