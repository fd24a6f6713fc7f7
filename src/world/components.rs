//! World domain: color tags and object layers for filterable level objects.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum FilterColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl FilterColor {
    pub const ALL: [FilterColor; 5] = [
        FilterColor::Red,
        FilterColor::Blue,
        FilterColor::Green,
        FilterColor::Yellow,
        FilterColor::Purple,
    ];

    pub fn tint(self) -> Color {
        match self {
            FilterColor::Red => Color::srgb(1.0, 0.27, 0.27),
            FilterColor::Blue => Color::srgb(0.27, 0.27, 1.0),
            FilterColor::Green => Color::srgb(0.27, 1.0, 0.27),
            FilterColor::Yellow => Color::srgb(1.0, 1.0, 0.27),
            FilterColor::Purple => Color::srgb(1.0, 0.27, 1.0),
        }
    }

    /// Translucent tint used by skill overlays.
    pub fn overlay_tint(self) -> Color {
        self.tint().with_alpha(0.4)
    }
}

/// Which skill an object answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ObjectLayer {
    /// Visible by default, hidden while a Filter of the same color is active.
    #[default]
    Interaction,
    /// Hidden by default, revealed near the player while a Mask of the same color is active.
    Mask,
}

impl ObjectLayer {
    pub fn starts_enabled(self) -> bool {
        self == ObjectLayer::Interaction
    }
}

/// Category tag carried by level objects the skills can toggle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Taggable {
    pub color: FilterColor,
    pub layer: ObjectLayer,
}

impl Taggable {
    pub fn new(color: FilterColor, layer: ObjectLayer) -> Self {
        Self { color, layer }
    }
}
