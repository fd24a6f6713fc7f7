//! World domain: tag registry and the object enable/disable seam.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::world::components::{FilterColor, ObjectLayer, Taggable};

/// Index from tag to the entities carrying it, kept in registration order.
#[derive(Resource, Debug, Default)]
pub struct TagRegistry {
    buckets: HashMap<Taggable, Vec<Entity>>,
    tags: HashMap<Entity, Taggable>,
}

impl TagRegistry {
    /// Registers or re-tags an entity. Returns false if it was already registered with this tag.
    pub fn register(&mut self, entity: Entity, tag: Taggable) -> bool {
        if let Some(previous) = self.tags.get(&entity).copied() {
            if previous == tag {
                return false;
            }
            self.remove_from_bucket(entity, previous);
        }

        self.tags.insert(entity, tag);
        self.buckets.entry(tag).or_default().push(entity);
        true
    }

    pub fn unregister(&mut self, entity: Entity) -> bool {
        let Some(tag) = self.tags.remove(&entity) else {
            return false;
        };
        self.remove_from_bucket(entity, tag);
        true
    }

    pub fn matching(&self, color: FilterColor, layer: ObjectLayer) -> &[Entity] {
        self.buckets
            .get(&Taggable::new(color, layer))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tag_of(&self, entity: Entity) -> Option<Taggable> {
        self.tags.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.tags.clear();
    }

    fn remove_from_bucket(&mut self, entity: Entity, tag: Taggable) {
        if let Some(bucket) = self.buckets.get_mut(&tag) {
            bucket.retain(|&e| e != entity);
            if bucket.is_empty() {
                self.buckets.remove(&tag);
            }
        }
    }
}

/// Flips whether a world object is shown and collides.
pub trait ObjectSwitch {
    fn set_enabled(&mut self, entity: Entity, enabled: bool);
}

/// `ObjectSwitch` backed by deferred commands: `Visibility` plus avian's `ColliderDisabled`.
pub struct CommandSwitch<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
}

impl<'a, 'w, 's> CommandSwitch<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>) -> Self {
        Self { commands }
    }
}

impl ObjectSwitch for CommandSwitch<'_, '_, '_> {
    fn set_enabled(&mut self, entity: Entity, enabled: bool) {
        let Ok(mut entity_commands) = self.commands.get_entity(entity) else {
            warn!("Tried to toggle missing world object {:?}", entity);
            return;
        };

        if enabled {
            entity_commands
                .insert(Visibility::Inherited)
                .remove::<ColliderDisabled>();
        } else {
            entity_commands.insert((Visibility::Hidden, ColliderDisabled));
        }
    }
}
