//! World domain: taggable level objects and their registry.

mod components;
mod registry;


pub use components::{FilterColor, ObjectLayer, Taggable};
pub use registry::{CommandSwitch, ObjectSwitch, TagRegistry};

use bevy::prelude::*;

use crate::core::ControlSet;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TagRegistry>().add_systems(
            Update,
            (register_taggables, unregister_removed_taggables).in_set(ControlSet::Mode),
        );
    }
}

fn register_taggables(
    mut registry: ResMut<TagRegistry>,
    added: Query<(Entity, &Taggable), Added<Taggable>>,
) {
    for (entity, tag) in &added {
        if registry.register(entity, *tag) {
            debug!("Registered {:?} object {:?} ({:?})", tag.color, entity, tag.layer);
        }
    }
}

fn unregister_removed_taggables(
    mut registry: ResMut<TagRegistry>,
    mut removed: RemovedComponents<Taggable>,
) {
    for entity in removed.read() {
        if let Some(tag) = registry.tag_of(entity) {
            registry.unregister(entity);
            debug!("Unregistered {:?} object {:?} ({:?})", tag.color, entity, tag.layer);
        }
    }
}
