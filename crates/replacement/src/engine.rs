//! Replacement decisions for buildings coming out of the map host.
//!
//! The engine is a plain value: all inputs arrive as parameters and every
//! decision is a pure function of them plus the frozen registry, so the
//! same building always gets the same answer.

use bevy::prelude::*;

use crate::category::{Category, StyleKey};
use crate::directive::ReplacementDirective;
use crate::events::BuildingRenderState;
use crate::style_registry::StyleRegistry;
use crate::toggles::{OverrideKey, ReplacementToggles};

/// Outcome of a pre-creation decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleDecision<'a> {
    /// Let the host build its own geometry.
    NoOverride,
    /// Build the building with `directive`, chosen through `key`.
    Replace {
        key: StyleKey,
        directive: &'a ReplacementDirective,
    },
}

impl<'a> StyleDecision<'a> {
    pub fn directive(&self) -> Option<&'a ReplacementDirective> {
        match *self {
            StyleDecision::NoOverride => None,
            StyleDecision::Replace { directive, .. } => Some(directive),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(
            self,
            StyleDecision::Replace {
                key: StyleKey::Override,
                ..
            }
        )
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ReplacementEngine {
    registry: StyleRegistry,
    toggles: ReplacementToggles,
    override_key: OverrideKey,
    replace_suppressed: bool,
}

impl ReplacementEngine {
    pub fn new(
        registry: StyleRegistry,
        toggles: ReplacementToggles,
        override_key: OverrideKey,
        replace_suppressed: bool,
    ) -> Self {
        Self {
            registry,
            toggles,
            override_key,
            replace_suppressed,
        }
    }

    /// Choose a style before the host generates geometry.
    ///
    /// `category` is `None` for usage labels the engine does not know; such
    /// buildings skip category routing but can still match the override.
    /// A matching override always wins over the category choice.
    pub fn decide_pre_creation(
        &self,
        category: Option<Category>,
        place_id: &str,
    ) -> StyleDecision<'_> {
        if self.override_key.matches(place_id) {
            return StyleDecision::Replace {
                key: StyleKey::Override,
                directive: self.registry.custom(),
            };
        }
        match category {
            Some(category) if self.toggles.is_enabled(category) => StyleDecision::Replace {
                key: StyleKey::Usage(category),
                directive: self.registry.get(category),
            },
            _ => StyleDecision::NoOverride,
        }
    }

    /// Substitute to attach after creation, if the host suppressed the
    /// building's geometry and rescue is switched on.
    pub fn decide_post_creation(
        &self,
        state: BuildingRenderState,
    ) -> Option<&ReplacementDirective> {
        match state {
            BuildingRenderState::GeometryPresent => None,
            BuildingRenderState::Suppressed if self.replace_suppressed => {
                Some(self.registry.suppressed())
            }
            BuildingRenderState::Suppressed => None,
        }
    }
}
