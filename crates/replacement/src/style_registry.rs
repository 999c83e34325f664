//! Immutable mapping from style keys to replacement directives.
//!
//! Built once from `ReplacementConfig` and frozen: there is no mutation API,
//! so lookups are safe from any number of systems at once.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::category::{Category, StyleKey};
use crate::config::ReplacementConfig;
use crate::directive::ReplacementDirective;
use crate::replacement_error::ReplacementError;

#[derive(Debug, Clone)]
pub struct StyleRegistry {
    entries: HashMap<StyleKey, ReplacementDirective>,
    fallback: ReplacementDirective,
}

impl StyleRegistry {
    /// Validate `config` and load every substitute scene.
    ///
    /// The whole config is checked before the first scene is loaded, so a
    /// missing model never leaves half-loaded assets behind.
    pub fn build(
        config: &ReplacementConfig,
        mut load_scene: impl FnMut(&str) -> Handle<Scene>,
    ) -> Result<Self, ReplacementError> {
        config.validate()?;

        let fallback =
            ReplacementDirective::from_config(&config.fallback, "fallback", &mut load_scene)?;
        let mut entries = HashMap::with_capacity(config.categories.len() + 2);
        entries.insert(
            StyleKey::Override,
            ReplacementDirective::from_config(&config.custom, "custom", &mut load_scene)?,
        );
        entries.insert(
            StyleKey::Suppressed,
            ReplacementDirective::from_config(&config.suppressed, "suppressed", &mut load_scene)?,
        );
        for (category, directive) in &config.categories {
            let field = format!("categories.{}", category.name());
            entries.insert(
                StyleKey::Usage(*category),
                ReplacementDirective::from_config(directive, &field, &mut load_scene)?,
            );
        }

        Ok(Self { entries, fallback })
    }

    /// Directive for `key`; categories without a dedicated entry get the
    /// fallback.
    pub fn get(&self, key: impl Into<StyleKey>) -> &ReplacementDirective {
        self.entries.get(&key.into()).unwrap_or(&self.fallback)
    }

    pub fn custom(&self) -> &ReplacementDirective {
        self.get(StyleKey::Override)
    }

    pub fn suppressed(&self) -> &ReplacementDirective {
        self.get(StyleKey::Suppressed)
    }

    pub fn fallback(&self) -> &ReplacementDirective {
        &self.fallback
    }

    pub fn has_dedicated(&self, category: Category) -> bool {
        self.entries.contains_key(&StyleKey::Usage(category))
    }

    /// Number of keyed entries, including the custom and suppressed slots.
    pub fn style_count(&self) -> usize {
        self.entries.len()
    }
}
