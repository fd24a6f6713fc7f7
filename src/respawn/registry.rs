//! Respawn domain: registered respawn points and destination selection.

use bevy::prelude::*;

use crate::respawn::components::RespawnPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisteredPoint {
    pub entity: Entity,
    pub position: Vec2,
    pub order: u32,
    pub is_default: bool,
    pub activated: bool,
}

/// Respawn points of the loaded level, kept sorted by registration order.
#[derive(Resource, Debug, Default)]
pub struct RespawnRegistry {
    points: Vec<RegisteredPoint>,
    last_activated: Option<Entity>,
}

impl RespawnRegistry {
    /// Adds a point, or refreshes it if the entity is already registered.
    pub fn register(&mut self, entity: Entity, position: Vec2, point: RespawnPoint) {
        let registered = RegisteredPoint {
            entity,
            position,
            order: point.order,
            is_default: point.is_default,
            activated: point.activated,
        };

        if let Some(existing) = self.points.iter_mut().find(|p| p.entity == entity) {
            *existing = registered;
        } else {
            let index = self.points.partition_point(|p| p.order <= point.order);
            self.points.insert(index, registered);
        }

        if point.activated {
            self.last_activated = Some(entity);
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&RegisteredPoint> {
        self.points.iter().find(|p| p.entity == entity)
    }

    /// First default point by registration order.
    pub fn default_point(&self) -> Option<&RegisteredPoint> {
        self.points.iter().find(|p| p.is_default)
    }

    pub fn default_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_default).count()
    }

    /// Most recently activated point, else the default, else the first registered.
    /// Only None when nothing is registered.
    pub fn current(&self) -> Option<&RegisteredPoint> {
        self.last_activated
            .and_then(|entity| self.get(entity))
            .or_else(|| self.default_point())
            .or_else(|| self.points.first())
    }

    pub fn current_respawn_position(&self) -> Option<Vec2> {
        self.current().map(|p| p.position)
    }

    /// Marks a point activated and makes it current. Only the first touch counts.
    pub fn activate_point(&mut self, entity: Entity) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.entity == entity) else {
            return false;
        };
        if point.activated {
            return false;
        }

        point.activated = true;
        self.last_activated = Some(entity);
        true
    }

    /// Nearest checkpoint strictly left of `from`, else the current point.
    pub fn select_destination(&self, from: Vec2) -> Option<Vec2> {
        self.points
            .iter()
            .filter(|p| !p.is_default && p.position.x < from.x)
            .min_by(|a, b| {
                a.position
                    .distance_squared(from)
                    .total_cmp(&b.position.distance_squared(from))
            })
            .or_else(|| self.current())
            .map(|p| p.position)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.last_activated = None;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
