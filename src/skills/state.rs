//! Skills domain: the two-slot skill state machine.
//!
//! Every operation returns the effects it produced, in order. Callers apply
//! them to the world and publish them; an empty list means the call was a no-op.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::skills::resources::SkillInput;
use crate::world::FilterColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum SkillSlot {
    /// Global: hides every interactive object of the current color
    #[default]
    Filter,
    /// Local: reveals hidden objects of the current color near the player
    Mask,
}

impl SkillSlot {
    pub fn other(self) -> SkillSlot {
        match self {
            SkillSlot::Filter => SkillSlot::Mask,
            SkillSlot::Mask => SkillSlot::Filter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillEffect {
    Unlocked(SkillSlot),
    Switched { from: SkillSlot, to: SkillSlot },
    Activated { slot: SkillSlot, color: FilterColor },
    Deactivated { slot: SkillSlot, color: FilterColor },
    ColorChanged { from: FilterColor, to: FilterColor },
}

#[derive(Component, Debug, Clone, Default)]
pub struct SkillState {
    current_slot: SkillSlot,
    active: bool,
    unlocked: HashSet<SkillSlot>,
    color: FilterColor,
}

impl SkillState {
    pub fn with_color(color: FilterColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn current_slot(&self) -> SkillSlot {
        self.current_slot
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn color(&self) -> FilterColor {
        self.color
    }

    pub fn is_unlocked(&self, slot: SkillSlot) -> bool {
        self.unlocked.contains(&slot)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// True while the Mask is the active skill.
    pub fn mask_active(&self) -> bool {
        self.active && self.current_slot == SkillSlot::Mask
    }

    /// Idempotent. The very first unlock also selects the slot.
    pub fn unlock(&mut self, slot: SkillSlot) -> Vec<SkillEffect> {
        let first_unlock = self.unlocked.is_empty();
        if !self.unlocked.insert(slot) {
            debug!("Skill {:?} already unlocked", slot);
            return Vec::new();
        }

        if first_unlock {
            self.current_slot = slot;
        }

        vec![SkillEffect::Unlocked(slot)]
    }

    /// Needs both slots unlocked. Leaves the new slot inactive.
    pub fn switch_slot(&mut self) -> Vec<SkillEffect> {
        if !(self.is_unlocked(SkillSlot::Filter) && self.is_unlocked(SkillSlot::Mask)) {
            debug!(
                "Skill switch ignored: {} of 2 slots unlocked",
                self.unlocked.len()
            );
            return Vec::new();
        }

        let mut effects: Vec<SkillEffect> = self.deactivate().into_iter().collect();
        let from = self.current_slot;
        self.current_slot = from.other();
        effects.push(SkillEffect::Switched {
            from,
            to: self.current_slot,
        });
        effects
    }

    pub fn toggle_active(&mut self) -> Vec<SkillEffect> {
        if !self.is_unlocked(self.current_slot) {
            debug!("Skill toggle ignored: {:?} is locked", self.current_slot);
            return Vec::new();
        }

        if self.active {
            return self.deactivate().into_iter().collect();
        }

        self.active = true;
        vec![SkillEffect::Activated {
            slot: self.current_slot,
            color: self.color,
        }]
    }

    /// Forced deactivation used by mode changes, death, and the other operations.
    pub fn deactivate(&mut self) -> Option<SkillEffect> {
        if !self.active {
            return None;
        }

        self.active = false;
        Some(SkillEffect::Deactivated {
            slot: self.current_slot,
            color: self.color,
        })
    }

    /// One frame of skill input: color, then switch, then toggle.
    /// Ignored entirely while input is not accepted.
    pub fn handle_input(&mut self, input: &SkillInput, accepts_input: bool) -> Vec<SkillEffect> {
        if !accepts_input {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if let Some(color) = input.color {
            effects.extend(self.set_color(color));
        }
        if input.switch_pressed {
            effects.extend(self.switch_slot());
        }
        if input.toggle_pressed {
            effects.extend(self.toggle_active());
        }
        effects
    }

    /// Changing color always deactivates first and never reactivates.
    pub fn set_color(&mut self, color: FilterColor) -> Vec<SkillEffect> {
        if self.color == color {
            return Vec::new();
        }

        let mut effects: Vec<SkillEffect> = self.deactivate().into_iter().collect();
        let from = self.color;
        self.color = color;
        effects.push(SkillEffect::ColorChanged { from, to: color });
        effects
    }
}
